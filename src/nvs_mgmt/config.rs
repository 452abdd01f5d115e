use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use crate::constants::{defaults, envvars};
use crate::interfaces::NvsPartitionGen;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} environment variable is not set")]
    MissingEnv(&'static str),
    #[error("could not read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse JSON in {path}")]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Settings taken from the environment once, at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackConfig {
    pub idf_path: PathBuf,
    pub python: PathBuf,
    pub temp_dir: PathBuf,
}

impl PackConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let idf_path = non_empty_var(envvars::IDF_PATH)
            .ok_or(ConfigError::MissingEnv(envvars::IDF_PATH))?;
        Ok(Self {
            idf_path: idf_path.into(),
            python: python_from_env(),
            temp_dir: env::temp_dir(),
        })
    }

    pub fn generator(&self) -> NvsPartitionGen {
        NvsPartitionGen::new(&self.python, &self.idf_path)
    }
}

fn non_empty_var(key: &str) -> Option<OsString> {
    env::var_os(key).filter(|v| !v.is_empty())
}

fn python_from_env() -> PathBuf {
    if let Some(python) = non_empty_var(envvars::NVS_GEN_PYTHON) {
        return python.into();
    }
    if let Some(venv) = non_empty_var(envvars::IDF_PYTHON_ENV_PATH) {
        return PathBuf::from(venv).join("bin").join("python");
    }
    PathBuf::from(defaults::PYTHON)
}

/// The two documents packed into the partition. Their contents are opaque.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDocs {
    pub device: Value,
    pub network: Value,
}

pub fn load_docs(config_dir: impl AsRef<Path>) -> Result<ConfigDocs, ConfigError> {
    let config_dir = config_dir.as_ref();
    Ok(ConfigDocs {
        device: load_json(config_dir.join(defaults::DEVICE_CONFIG_FILE))?,
        network: load_json(config_dir.join(defaults::NETWORK_CONFIG_FILE))?,
    })
}

pub fn load_json(path: impl AsRef<Path>) -> Result<Value, ConfigError> {
    let path = path.as_ref();
    log::debug!("Loading {}", path.display());
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::ParseJson {
        path: path.to_path_buf(),
        source,
    })
}

pub const IDF_PATH: &str = "IDF_PATH";
pub const IDF_PYTHON_ENV_PATH: &str = "IDF_PYTHON_ENV_PATH";
pub const NVS_GEN_PYTHON: &str = "NVS_GEN_PYTHON";

pub const LOG_LEVEL: &str = "LOG_LEVEL";

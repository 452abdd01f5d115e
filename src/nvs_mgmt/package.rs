use std::ffi::OsString;
use std::io::{self, Write};
use std::path::Path;

use tempfile::TempPath;
use thiserror::Error;

use crate::argsets::PackArgs;
use crate::constants::defaults;
use crate::interfaces::{Generator, GeneratorOutput};

use super::config::{self, ConfigError, PackConfig};
use super::table::IntermediateTable;

#[derive(Error, Debug)]
pub enum PackError {
    #[error(transparent)]
    Input(#[from] ConfigError),
    #[error("could not write temporary CSV file")]
    TempFile(#[source] io::Error),
    #[error("could not run NVS partition generator")]
    Generator(#[source] io::Error),
}

/// Build the NVS table from the config directory and hand it to the generator.
///
/// A non-zero generator exit is not an error here; the caller decides how to
/// report it. The temporary CSV is gone by the time this returns, whatever
/// the outcome.
pub fn package(
    config: &PackConfig,
    args: &PackArgs,
    generator: &impl Generator,
) -> Result<GeneratorOutput, PackError> {
    let docs = config::load_docs(&args.config_dir)?;
    let table = IntermediateTable::new(&docs);

    // Dropping the guard deletes the file on every path below
    let csv_path = write_temp_csv(&config.temp_dir, &table.to_csv())?;
    log::debug!("Wrote NVS table to {}", csv_path.display());

    let gen_args: Vec<OsString> = vec![
        defaults::NVS_GEN_ACTION.into(),
        csv_path.as_os_str().to_owned(),
        args.output.as_os_str().to_owned(),
        args.partition_size.clone().into(),
    ];
    let output = generator.run(&gen_args).map_err(PackError::Generator)?;
    log::debug!("Generator exited with status {}", output.status);

    Ok(output)
}

fn write_temp_csv(dir: &Path, contents: &str) -> Result<TempPath, PackError> {
    let mut file = tempfile::Builder::new()
        .prefix(defaults::TEMP_CSV_PREFIX)
        .suffix(defaults::TEMP_CSV_SUFFIX)
        .tempfile_in(dir)
        .map_err(PackError::TempFile)?;
    file.write_all(contents.as_bytes())
        .and_then(|_| file.flush())
        .map_err(PackError::TempFile)?;
    // Close our handle so the generator is the only one with the file open
    Ok(file.into_temp_path())
}

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use crate::constants::defaults;

/// Captured result of a single generator run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorOutput {
    pub status: i32,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl GeneratorOutput {
    pub fn success(&self) -> bool {
        self.status == 0
    }

    /// Write the captured streams back out, stdout first.
    ///
    /// Write errors are ignored so that the caller always gets to exit with
    /// the generator's status.
    pub fn replay(&self, stdout: &mut impl Write, stderr: &mut impl Write) {
        if let Err(e) = stdout.write_all(&self.stdout).and_then(|_| stdout.flush()) {
            log::debug!("Could not replay generator stdout: {e}");
        }
        if let Err(e) = stderr.write_all(&self.stderr).and_then(|_| stderr.flush()) {
            log::debug!("Could not replay generator stderr: {e}");
        }
    }
}

impl From<Output> for GeneratorOutput {
    fn from(output: Output) -> Self {
        Self {
            // A process terminated by a signal has no exit code
            status: output.status.code().unwrap_or(1),
            stdout: output.stdout,
            stderr: output.stderr,
        }
    }
}

/// Something that turns an NVS CSV table into a partition image.
///
/// Only spawn failures are errors; a non-zero exit is reported in the output.
pub trait Generator {
    fn run(&self, args: &[OsString]) -> io::Result<GeneratorOutput>;
}

impl<F> Generator for F
where
    F: Fn(&[OsString]) -> io::Result<GeneratorOutput>,
{
    fn run(&self, args: &[OsString]) -> io::Result<GeneratorOutput> {
        self(args)
    }
}

/// ESP-IDF's `nvs_partition_gen.py`, run through a Python interpreter
#[derive(Debug, Clone)]
pub struct NvsPartitionGen {
    python: PathBuf,
    script: PathBuf,
}

impl NvsPartitionGen {
    pub fn new(python: impl Into<PathBuf>, idf_path: impl AsRef<Path>) -> Self {
        let script = defaults::NVS_GEN_SCRIPT
            .iter()
            .fold(idf_path.as_ref().to_path_buf(), |p, c| p.join(c));
        Self {
            python: python.into(),
            script,
        }
    }

    pub fn script(&self) -> &Path {
        &self.script
    }
}

impl Generator for NvsPartitionGen {
    fn run(&self, args: &[OsString]) -> io::Result<GeneratorOutput> {
        log::debug!(
            "Running {} {} {:?}",
            self.python.display(),
            self.script.display(),
            args
        );
        let output = Command::new(&self.python)
            .arg(&self.script)
            .args(args)
            .output()?;
        log::debug!("Generator finished with {}", output.status);
        Ok(output.into())
    }
}

use std::ffi::OsString;
use std::path::PathBuf;

pub const USAGE_ARGS: &str = "<config-dir> <output.bin> <size>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackArgs {
    pub config_dir: PathBuf,
    pub output: PathBuf,
    pub partition_size: String,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ArgsError {
    Arity(usize),
    NonUtf8Size(OsString),
}

impl PackArgs {
    /// Build from exactly three positional arguments
    pub fn from_free(free: Vec<OsString>) -> Result<Self, ArgsError> {
        let count = free.len();
        let [config_dir, output, size] =
            <[OsString; 3]>::try_from(free).map_err(|_| ArgsError::Arity(count))?;
        Ok(Self {
            config_dir: config_dir.into(),
            output: output.into(),
            partition_size: size.into_string().map_err(ArgsError::NonUtf8Size)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn free(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn three_positionals() {
        let args = PackArgs::from_free(free(&["cfg", "out.bin", "0x3000"])).unwrap();
        assert_eq!(args.config_dir, PathBuf::from("cfg"));
        assert_eq!(args.output, PathBuf::from("out.bin"));
        assert_eq!(args.partition_size, "0x3000");
    }

    #[test]
    fn wrong_arity() {
        assert_eq!(PackArgs::from_free(free(&[])), Err(ArgsError::Arity(0)));
        assert_eq!(PackArgs::from_free(free(&["cfg", "out.bin"])), Err(ArgsError::Arity(2)));
        assert_eq!(
            PackArgs::from_free(free(&["cfg", "out.bin", "0x3000", "extra"])),
            Err(ArgsError::Arity(4))
        );
    }
}

use std::io;
use std::process;

use anyhow::Result;

use config_nvs::argsets::{ArgsError, PackArgs, USAGE_ARGS};
use config_nvs::helpers;
use config_nvs::nvs_mgmt::{package, PackConfig};

const DEFAULT_PROG_NAME: &str = "gen-config-nvs";

fn main() -> Result<()> {
    // Toolchain settings come from the real environment, never from .env
    let config = PackConfig::from_env();
    let dotenv_path = helpers::load_dotenv();
    helpers::init_logging();
    if let Some(path) = dotenv_path {
        log::debug!("Loaded {}", path.display());
    }

    let args = pico_args::Arguments::from_env();
    let args = match PackArgs::from_free(args.finish()) {
        Ok(args) => args,
        Err(ArgsError::Arity(_)) => {
            eprintln!("Usage: {} {USAGE_ARGS}", prog_name());
            process::exit(1);
        }
        Err(ArgsError::NonUtf8Size(size)) => {
            eprintln!("Error: partition size {size:?} is not valid UTF-8");
            process::exit(1);
        }
    };

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let output = package(&config, &args, &config.generator())?;
    if !output.success() {
        output.replay(&mut io::stdout(), &mut io::stderr());
        process::exit(output.status);
    }

    Ok(())
}

fn prog_name() -> String {
    std::env::args_os()
        .next()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_PROG_NAME.into())
}

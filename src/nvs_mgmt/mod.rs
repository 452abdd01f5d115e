pub mod config;
pub mod package;
pub mod table;

pub use config::{ConfigDocs, ConfigError, PackConfig};
pub use package::{package, PackError};
pub use table::IntermediateTable;

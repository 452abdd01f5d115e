pub mod defaults;
pub mod envvars;
pub mod keys;

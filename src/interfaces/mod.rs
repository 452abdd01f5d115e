pub mod nvs_gen;

pub use nvs_gen::{Generator, GeneratorOutput, NvsPartitionGen};

// Kept quiet so that a successful run prints nothing
pub const LOG_LEVEL: &str = "warn";

pub const PYTHON: &str = "python3";

pub const DEVICE_CONFIG_FILE: &str = "device-config.json";
pub const NETWORK_CONFIG_FILE: &str = "network-config.json";

pub const TEMP_CSV_PREFIX: &str = "nvs-config-";
pub const TEMP_CSV_SUFFIX: &str = ".csv";

/// Location of the partition generator script relative to `IDF_PATH`
pub const NVS_GEN_SCRIPT: &[&str] = &[
    "components",
    "nvs_flash",
    "nvs_partition_generator",
    "nvs_partition_gen.py",
];
pub const NVS_GEN_ACTION: &str = "generate";

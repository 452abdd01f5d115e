/// NVS limits key names to 15 bytes plus the null terminator
pub const NVS_KEY_MAX_LEN: usize = 15;

pub const NAMESPACE: &str = "config";
pub const DEVICE_CONFIG: &str = "device-config";
pub const NETWORK_CONFIG: &str = "network-config";

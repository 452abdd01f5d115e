pub mod argsets;
pub mod constants;
pub mod helpers;
pub mod interfaces;
pub mod nvs_mgmt;

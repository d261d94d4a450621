pub const MAINNET: u64 = 1;
pub const GNOSIS: u64 = 100;
pub const SEPOLIA: u64 = 11155111;
pub const POLYGON: u64 = 137;
pub const MUMBAI: u64 = 80001;

/// Human readable name of a known chain, used for logging.
pub fn name(chain_id: u64) -> Option<&'static str> {
    match chain_id {
        MAINNET => Some("mainnet"),
        GNOSIS => Some("gnosis"),
        SEPOLIA => Some("sepolia"),
        POLYGON => Some("polygon"),
        MUMBAI => Some("mumbai"),
        _ => None,
    }
}

//! Superfluid protocol deployments.

/// Polygon Mumbai testnet deployment.
pub mod mumbai {
    use alloy_primitives::{Address, address};

    pub const CHAIN_ID: u64 = crate::networks::MUMBAI;

    /// Superfluid host contract.
    pub const HOST: Address = address!("0xEB796bdb90fFA0f28255275e16936D25d3418603");
    /// Constant flow agreement (CFA) v1.
    pub const CFA: Address = address!("0x49e565Ed1bdc17F3d220f72DF0857C26FA83F873");
    /// Fake DAI super token.
    pub const FDAIX: Address = address!("0x5D8B4C2554aeB7e86F387B4d6c00Ac33499Ed01f");
}

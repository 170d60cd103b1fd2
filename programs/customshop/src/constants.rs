// ========== PDA SEEDS ==========
/// Namespace tag for marker PDAs, followed by the domain bytes
pub const MARKER_SEED: &[u8] = b"marker";

/// Seed for the shop configuration PDA
pub const SHOP_CONFIG_SEED: &[u8] = b"shop";

// ========== DOMAIN VALIDATION ==========
/// Maximum domain length in bytes. Each PDA seed is capped at 32 bytes.
pub const MAX_DOMAIN_LENGTH: usize = 32;

// ========== NFT ==========
pub const NFT_DECIMALS: u8 = 0;
pub const NFT_SUPPLY: u64 = 1;

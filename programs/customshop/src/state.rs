use anchor_lang::prelude::*;

use crate::constants::MAX_DOMAIN_LENGTH;

/// Program-wide settings for the shop
#[account]
#[derive(InitSpace, Debug)]
pub struct ShopConfig {
    /// Key allowed to issue markers
    pub authority: Pubkey,
    /// Blocks marker creation and updates while set
    pub paused: bool,
    /// Total markers ever issued
    pub markers_created: u64,
    /// Unix timestamp when the shop was initialized
    pub created_at: i64,
    /// Bump seed for PDA
    pub bump: u8,
}

impl ShopConfig {
    /// Total on-chain space in bytes (discriminator + payload).
    pub const SPACE: usize = 8 + Self::INIT_SPACE;
}

/// Per-domain claim record, addressed by `[MARKER_SEED, domain]`
#[account]
#[derive(InitSpace, Debug)]
pub struct Marker {
    /// Shop authority that issued the marker, fixed at creation
    pub authority: Pubkey,
    /// Last recorded claimant
    pub owner: Pubkey,
    /// Wallet the domain resolves to
    pub linked_wallet: Pubkey,
    #[max_len(MAX_DOMAIN_LENGTH)]
    pub domain: String,
    /// Single-supply mint backing the claim, if any
    pub mint: Option<Pubkey>,
    pub created: bool,
    pub created_at: i64,
    pub updated_at: i64,
    /// Bump seed for PDA
    pub bump: u8,
}

impl Marker {
    pub const SPACE: usize = 8 + Self::INIT_SPACE;

    pub fn is_backed(&self) -> bool {
        self.mint.is_some()
    }

    /// Hand the claim to a new owner. The linked wallet follows the owner.
    pub fn transfer_to(&mut self, new_owner: Pubkey, timestamp: i64) {
        self.owner = new_owner;
        self.linked_wallet = new_owner;
        self.updated_at = timestamp;
    }

    pub fn link_wallet(&mut self, wallet: Pubkey, timestamp: i64) {
        self.linked_wallet = wallet;
        self.updated_at = timestamp;
    }
}

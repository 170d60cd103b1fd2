use anchor_lang::prelude::*;

#[event]
pub struct ShopInitialized {
    pub shop_config: Pubkey,
    pub authority: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct ShopConfigUpdated {
    pub shop_config: Pubkey,
    pub authority: Pubkey,
    pub paused: bool,
    /// Signer that applied the change
    pub updated_by: Pubkey,
}

/// Marker lifecycle events
#[event]
pub struct MarkerCreated {
    pub marker: Pubkey,
    pub domain: String,
    pub authority: Pubkey,
    pub owner: Pubkey,
    /// Backing mint, if the marker was created with one
    pub mint: Option<Pubkey>,
    pub timestamp: i64,
}

#[event]
pub struct MarkerOwnerUpdated {
    pub marker: Pubkey,
    pub domain: String,
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct LinkedWalletUpdated {
    pub marker: Pubkey,
    pub domain: String,
    pub owner: Pubkey,
    pub previous_wallet: Pubkey,
    pub linked_wallet: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct MarkerBurned {
    pub marker: Pubkey,
    pub domain: String,
    pub mint: Pubkey,
    /// Holder whose token was burned
    pub burned_by: Pubkey,
    pub timestamp: i64,
}

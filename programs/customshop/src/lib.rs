use anchor_lang::prelude::*;

declare_id!("7GAzi1mmd9CT3kgV8vL1RbvQJyTNYRjYfuJ7rV42vVoi");

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

#[program]
pub mod customshop {
    use super::*;

    pub fn initialize_shop(ctx: Context<InitializeShop>) -> Result<()> {
        instructions::initialize_shop(ctx)
    }

    pub fn update_shop_config(
        ctx: Context<UpdateShopConfig>,
        new_authority: Option<Pubkey>,
        paused: Option<bool>,
    ) -> Result<()> {
        instructions::update_shop_config(ctx, new_authority, paused)
    }

    pub fn create_marker(ctx: Context<CreateMarker>, domain: String) -> Result<()> {
        instructions::create_marker(ctx, domain)
    }

    pub fn update_owner(ctx: Context<UpdateOwner>, domain: String) -> Result<()> {
        instructions::update_owner(ctx, domain)
    }

    pub fn update_linked_wallet(ctx: Context<UpdateLinkedWallet>, domain: String) -> Result<()> {
        instructions::update_linked_wallet(ctx, domain)
    }

    pub fn burn_marker_and_mint(ctx: Context<BurnMarkerAndMint>, domain: String) -> Result<()> {
        instructions::burn_marker_and_mint(ctx, domain)
    }
}

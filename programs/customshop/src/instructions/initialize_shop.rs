use anchor_lang::prelude::*;

use crate::{constants::*, events::ShopInitialized, state::*};

pub fn initialize_shop(ctx: Context<InitializeShop>) -> Result<()> {
    let clock = Clock::get()?;
    let shop_config = &mut ctx.accounts.shop_config;

    shop_config.set_inner(ShopConfig {
        authority: ctx.accounts.authority.key(),
        paused: false,
        markers_created: 0,
        created_at: clock.unix_timestamp,
        bump: ctx.bumps.shop_config,
    });

    emit!(ShopInitialized {
        shop_config: shop_config.key(),
        authority: shop_config.authority,
        timestamp: clock.unix_timestamp,
    });

    msg!("Customshop initialized. Authority set to {}", shop_config.authority);

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeShop<'info> {
    #[account(
        init,
        payer = authority,
        space = ShopConfig::SPACE,
        seeds = [SHOP_CONFIG_SEED],
        bump
    )]
    pub shop_config: Account<'info, ShopConfig>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

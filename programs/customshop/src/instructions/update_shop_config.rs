use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::ShopConfigUpdated, state::*};

pub fn update_shop_config(
    ctx: Context<UpdateShopConfig>,
    new_authority: Option<Pubkey>,
    paused: Option<bool>,
) -> Result<()> {
    let shop_config = &mut ctx.accounts.shop_config;

    if let Some(authority) = new_authority {
        require!(
            authority != Pubkey::default(),
            CustomshopError::InvalidAuthority
        );
        if shop_config.authority != authority {
            shop_config.authority = authority;
            msg!("Updated shop authority to: {}", authority);
        } else {
            msg!("Shop authority unchanged");
        }
    }

    if let Some(should_pause) = paused {
        shop_config.paused = should_pause;
        msg!("Shop paused: {}", should_pause);
    }

    emit!(ShopConfigUpdated {
        shop_config: shop_config.key(),
        authority: shop_config.authority,
        paused: shop_config.paused,
        updated_by: ctx.accounts.authority.key(),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateShopConfig<'info> {
    #[account(
        mut,
        seeds = [SHOP_CONFIG_SEED],
        bump = shop_config.bump,
        has_one = authority @ CustomshopError::InvalidAuthority,
    )]
    pub shop_config: Account<'info, ShopConfig>,

    pub authority: Signer<'info>,
}

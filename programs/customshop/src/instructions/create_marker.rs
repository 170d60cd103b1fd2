use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, TokenAccount};

use crate::{constants::*, errors::*, events::MarkerCreated, state::*, utils::*};

pub fn create_marker(ctx: Context<CreateMarker>, domain: String) -> Result<()> {
    validate_domain(&domain)?;

    let clock = Clock::get()?;
    let owner = ctx.accounts.owner.key();

    let mint = match (&ctx.accounts.mint, &ctx.accounts.token_account) {
        (Some(mint), Some(token_account)) => {
            validate_backing_mint(mint)?;
            verify_possession(token_account, &mint.key(), &owner)?;
            Some(mint.key())
        }
        (None, None) => None,
        _ => return err!(CustomshopError::IncompleteMintPair),
    };

    let marker = &mut ctx.accounts.marker;
    marker.set_inner(Marker {
        authority: ctx.accounts.authority.key(),
        owner,
        linked_wallet: owner,
        domain,
        mint,
        created: true,
        created_at: clock.unix_timestamp,
        updated_at: clock.unix_timestamp,
        bump: ctx.bumps.marker,
    });

    let shop_config = &mut ctx.accounts.shop_config;
    shop_config.markers_created = safe_add_u64(shop_config.markers_created, 1)?;

    emit!(MarkerCreated {
        marker: marker.key(),
        domain: marker.domain.clone(),
        authority: marker.authority,
        owner,
        mint,
        timestamp: clock.unix_timestamp,
    });

    msg!("Marker created");
    msg!("Domain: {}", marker.domain);
    msg!("Owner: {}", owner);
    match mint {
        Some(mint) => msg!("Mint: {}", mint),
        None => msg!("Mint: none"),
    }

    Ok(())
}

#[derive(Accounts)]
#[instruction(domain: String)]
pub struct CreateMarker<'info> {
    /// PDA `[b"shop"]`, created by `initialize_shop`
    #[account(
        mut,
        seeds = [SHOP_CONFIG_SEED],
        bump = shop_config.bump,
        has_one = authority @ CustomshopError::InvalidAuthority,
        constraint = !shop_config.paused @ CustomshopError::ShopPaused,
    )]
    pub shop_config: Account<'info, ShopConfig>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub owner: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = Marker::SPACE,
        seeds = [MARKER_SEED, domain_seed(&domain)?],
        bump
    )]
    pub marker: Account<'info, Marker>,

    pub mint: Option<Account<'info, Mint>>,

    pub token_account: Option<Account<'info, TokenAccount>>,

    pub system_program: Program<'info, System>,
}

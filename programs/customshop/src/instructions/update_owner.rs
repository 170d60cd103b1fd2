use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::{constants::*, errors::*, events::MarkerOwnerUpdated, state::*, utils::*};

/// Re-point a marker at whoever now holds its mint.
///
/// Mint-backed markers accept the new owner on proof of possession alone. Unbacked
/// markers have nothing to prove against, so the issuing authority must co-sign.
pub fn update_owner(ctx: Context<UpdateOwner>, domain: String) -> Result<()> {
    let clock = Clock::get()?;
    let new_owner = ctx.accounts.new_owner.key();
    let marker = &mut ctx.accounts.marker;

    match marker.mint {
        Some(mint) => {
            let token_account = ctx
                .accounts
                .token_account
                .as_ref()
                .ok_or(CustomshopError::MissingTokenAccount)?;
            verify_possession(token_account, &mint, &new_owner)?;
        }
        None => {
            require!(
                ctx.accounts.authority.is_signer,
                CustomshopError::AuthoritySignatureRequired
            );
        }
    }

    let previous_owner = marker.owner;
    marker.transfer_to(new_owner, clock.unix_timestamp);

    emit!(MarkerOwnerUpdated {
        marker: marker.key(),
        domain,
        previous_owner,
        new_owner,
        timestamp: clock.unix_timestamp,
    });

    msg!("Marker owner updated");
    msg!("Domain: {}", marker.domain);
    msg!("Previous owner: {}", previous_owner);
    msg!("New owner: {}", new_owner);

    Ok(())
}

#[derive(Accounts)]
#[instruction(domain: String)]
pub struct UpdateOwner<'info> {
    pub new_owner: Signer<'info>,

    /// CHECK: matched against `marker.authority`; must sign only for unbacked markers
    pub authority: UncheckedAccount<'info>,

    #[account(
        seeds = [SHOP_CONFIG_SEED],
        bump = shop_config.bump,
        constraint = !shop_config.paused @ CustomshopError::ShopPaused,
    )]
    pub shop_config: Account<'info, ShopConfig>,

    #[account(
        mut,
        seeds = [MARKER_SEED, domain_seed(&domain)?],
        bump = marker.bump,
        has_one = authority @ CustomshopError::InvalidAuthority,
    )]
    pub marker: Account<'info, Marker>,

    pub token_account: Option<Account<'info, TokenAccount>>,
}

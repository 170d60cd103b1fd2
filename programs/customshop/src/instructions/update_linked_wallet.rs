use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::{constants::*, errors::*, events::LinkedWalletUpdated, state::*, utils::*};

pub fn update_linked_wallet(ctx: Context<UpdateLinkedWallet>, domain: String) -> Result<()> {
    let clock = Clock::get()?;
    let owner = ctx.accounts.owner.key();
    let linked_wallet = ctx.accounts.linked_wallet.key();
    let marker = &mut ctx.accounts.marker;

    // The recorded owner must still hold the mint; a stale owner cannot redirect the domain.
    if let Some(mint) = marker.mint {
        let token_account = ctx
            .accounts
            .token_account
            .as_ref()
            .ok_or(CustomshopError::MissingTokenAccount)?;
        verify_possession(token_account, &mint, &owner)?;
    }

    let previous_wallet = marker.linked_wallet;
    marker.link_wallet(linked_wallet, clock.unix_timestamp);

    emit!(LinkedWalletUpdated {
        marker: marker.key(),
        domain,
        owner,
        previous_wallet,
        linked_wallet,
        timestamp: clock.unix_timestamp,
    });

    msg!("Linked wallet updated");
    msg!("Domain: {}", marker.domain);
    msg!("Linked wallet: {}", linked_wallet);

    Ok(())
}

#[derive(Accounts)]
#[instruction(domain: String)]
pub struct UpdateLinkedWallet<'info> {
    pub owner: Signer<'info>,

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
        has_one = owner @ CustomshopError::NotMarkerOwner,
    )]
    pub marker: Account<'info, Marker>,

    /// CHECK: any address may be linked; only its key is stored
    pub linked_wallet: UncheckedAccount<'info>,

    pub token_account: Option<Account<'info, TokenAccount>>,
}

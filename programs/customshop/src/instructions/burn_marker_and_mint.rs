use anchor_lang::prelude::*;
use anchor_spl::token::{burn, Burn, Mint, Token, TokenAccount};

use crate::{constants::*, errors::*, events::MarkerBurned, state::*, utils::*};

/// Burn the backing NFT and close its marker in one instruction.
///
/// Possession is the only gate: the signer does not have to be the recorded owner, so a
/// holder who received the token can burn without updating the marker first.
pub fn burn_marker_and_mint(ctx: Context<BurnMarkerAndMint>, domain: String) -> Result<()> {
    let clock = Clock::get()?;

    let burn_cpi_accounts = Burn {
        mint: ctx.accounts.mint.to_account_info(),
        from: ctx.accounts.token_account.to_account_info(),
        authority: ctx.accounts.owner.to_account_info(),
    };
    let burn_cpi_context = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        burn_cpi_accounts,
    );
    burn(burn_cpi_context, NFT_SUPPLY)?;

    emit!(MarkerBurned {
        marker: ctx.accounts.marker.key(),
        domain: domain.clone(),
        mint: ctx.accounts.mint.key(),
        burned_by: ctx.accounts.owner.key(),
        timestamp: clock.unix_timestamp,
    });

    // Marker lamports go back to the authority when the instruction exits (`close`).
    msg!("Marker and mint burned");
    msg!("Domain: {}", domain);
    msg!("Mint: {}", ctx.accounts.mint.key());
    msg!("Burned by: {}", ctx.accounts.owner.key());

    Ok(())
}

#[derive(Accounts)]
#[instruction(domain: String)]
pub struct BurnMarkerAndMint<'info> {
    /// CHECK: matched against `marker.authority`; receives the marker rent
    #[account(mut)]
    pub authority: UncheckedAccount<'info>,

    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [MARKER_SEED, domain_seed(&domain)?],
        bump = marker.bump,
        has_one = authority @ CustomshopError::InvalidAuthority,
        constraint = marker.is_backed() @ CustomshopError::MarkerNotBacked,
        close = authority,
    )]
    pub marker: Account<'info, Marker>,

    #[account(
        mut,
        constraint = marker.mint == Some(mint.key()) @ CustomshopError::MintMismatch,
    )]
    pub mint: Account<'info, Mint>,

    #[account(
        mut,
        constraint = token_account.owner == owner.key()
            && token_account.mint == mint.key()
            && token_account.amount == NFT_SUPPLY,
    )]
    pub token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

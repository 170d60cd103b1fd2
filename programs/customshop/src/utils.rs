use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, TokenAccount};

use crate::{constants::*, errors::*};

/// Any non-empty domain that fits in a single seed.
pub fn validate_domain(domain: &str) -> Result<()> {
    require!(!domain.is_empty(), CustomshopError::DomainEmpty);
    domain_seed(domain)?;
    Ok(())
}

/// Marker seed for `domain`. Oversized domains fail here, before any address derivation.
pub fn domain_seed(domain: &str) -> Result<&[u8]> {
    require!(
        domain.len() <= MAX_DOMAIN_LENGTH,
        CustomshopError::DomainTooLong
    );
    Ok(domain.as_bytes())
}

pub fn validate_backing_mint(mint: &Mint) -> Result<()> {
    require!(
        mint.decimals == NFT_DECIMALS && mint.supply == NFT_SUPPLY,
        CustomshopError::MintNotSingleSupply
    );
    Ok(())
}

/// Possession check: `token_account` holds the unit of `mint` and belongs to `holder`.
pub fn verify_possession(token_account: &TokenAccount, mint: &Pubkey, holder: &Pubkey) -> Result<()> {
    require_keys_eq!(
        token_account.mint,
        *mint,
        CustomshopError::TokenAccountMintMismatch
    );
    require_keys_eq!(
        token_account.owner,
        *holder,
        CustomshopError::TokenAccountOwnerMismatch
    );
    require!(
        token_account.amount == NFT_SUPPLY,
        CustomshopError::MintNotHeld
    );
    Ok(())
}

pub fn marker_seeds(domain: &str) -> Result<[&[u8]; 2]> {
    Ok([MARKER_SEED, domain_seed(domain)?])
}

/// Errors with `DomainTooLong` where the raw derivation would panic.
pub fn find_marker_address(domain: &str) -> Result<(Pubkey, u8)> {
    let seeds = marker_seeds(domain)?;
    Ok(Pubkey::find_program_address(&seeds, &crate::ID))
}

pub fn find_shop_config_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[SHOP_CONFIG_SEED], &crate::ID)
}

pub fn safe_add_u64(a: u64, b: u64) -> Result<u64> {
    a.checked_add(b)
        .ok_or_else(|| CustomshopError::MathematicalOverflow.into())
}

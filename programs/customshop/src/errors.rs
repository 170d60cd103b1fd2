use anchor_lang::prelude::*;

#[error_code]
pub enum CustomshopError {
    // ========== SHOP ERRORS ==========
    #[msg("Shop is paused")]
    ShopPaused,

    #[msg("Invalid authority")]
    InvalidAuthority,

    #[msg("Authority signature required for unbacked marker")]
    AuthoritySignatureRequired,

    // ========== DOMAIN ERRORS ==========
    #[msg("Domain is empty")]
    DomainEmpty,

    #[msg("Domain too long")]
    DomainTooLong,

    // ========== MINT POSSESSION ERRORS ==========
    #[msg("Mint and token account must be supplied together")]
    IncompleteMintPair,

    #[msg("Mint must have zero decimals and a supply of one")]
    MintNotSingleSupply,

    #[msg("Token account does not belong to the mint")]
    TokenAccountMintMismatch,

    #[msg("Token account is not owned by the signer")]
    TokenAccountOwnerMismatch,

    #[msg("Signer does not hold the mint")]
    MintNotHeld,

    #[msg("Token account required for a mint-backed marker")]
    MissingTokenAccount,

    #[msg("Marker is not backed by a mint")]
    MarkerNotBacked,

    #[msg("Mint does not match the marker")]
    MintMismatch,

    #[msg("Signer is not the marker owner")]
    NotMarkerOwner,

    // ========== ARITHMETIC ERRORS ==========
    #[msg("Mathematical overflow occurred")]
    MathematicalOverflow,
}

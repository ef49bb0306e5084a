use anchor_lang::prelude::*;

#[error_code]
pub enum MintGateError {
    // ========================================================================
    // Access & Lifecycle Errors
    // ========================================================================
    #[msg("Signer is not the config authority")]
    Unauthorized,

    #[msg("Mint config already initialized for this authority")]
    AlreadyInitialized,

    #[msg("Collection already created for this config")]
    CollectionAlreadyExists,

    #[msg("Collection has not been created yet")]
    CollectionNotCreated,

    #[msg("Collection account does not match the config")]
    CollectionMismatch,

    #[msg("Minting is paused")]
    MintingPaused,

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    #[msg("Tree depth/buffer do not match the allocated merkle tree")]
    InvalidTreeParameters,

    #[msg("Max supply must be greater than zero")]
    InvalidMaxSupply,

    #[msg("Price per mint must be greater than zero when a payment mint is set")]
    InvalidPrice,

    #[msg("Allow-list amount must be greater than zero")]
    InvalidQuotaAmount,

    #[msg("Allow-list storage is full")]
    CapacityExceeded,

    // ========================================================================
    // Mint Authorization Errors
    // ========================================================================
    #[msg("Max supply reached")]
    SupplyExhausted,

    #[msg("No allow-list entry covers this mint")]
    NoQuotaAvailable,

    #[msg("Payment could not be collected")]
    PaymentFailed,

    #[msg("Quota and payment authorization cannot be combined")]
    AmbiguousAuthorization,

    // ========================================================================
    // Issuance Errors
    // ========================================================================
    #[msg("Compressed leaf creation failed")]
    CompressionFailure,

    #[msg("Collection issuance failed")]
    IssuanceFailed,

    #[msg("Name too long (max 32 bytes)")]
    NameTooLong,

    #[msg("Symbol too long (max 10 bytes)")]
    SymbolTooLong,

    #[msg("URI too long (max 200 bytes)")]
    UriTooLong,

    #[msg("Arithmetic overflow")]
    Overflow,
}

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ============================================
    // INITIALIZATION ERRORS (1-5)
    // ============================================
    /// Contract already initialized
    AlreadyInitialized = 1,
    /// Contract not initialized
    NotInitialized = 2,

    // ============================================
    // AUTHORIZATION ERRORS (10-19)
    // ============================================
    /// Caller is not the minter admin, or an address setter
    /// was asked to point at the caller itself
    NotAuthorized = 10,

    // ============================================
    // INPUT VALIDATION ERRORS (20-29)
    // ============================================
    /// Project id must be positive
    InvalidProjectId = 20,
    /// Amount below the configured floor or non-positive
    InvalidAmount = 21,
    /// Ecological impact score must be positive
    InvalidEcoImpact = 22,
    /// Verification level must be in 1..=5
    InvalidVerifLevel = 23,
    /// Ledger clock has not advanced past the last successful mint
    InvalidTimestamp = 24,
    /// New minimum mint amount must be positive
    InvalidMinAmount = 25,
    /// New cap or fee must be positive
    InvalidUpdateParam = 26,
    /// Batch must hold 1..=50 items and all argument vectors must match
    InvalidBatchSize = 27,

    // ============================================
    // EXTERNAL GATING ERRORS (30-39)
    // ============================================
    /// Registry does not know the project
    ProjectNotRegistered = 30,
    /// Oracle has not attested the project
    OracleNotConfirmed = 31,
    /// Project is administratively inactive
    InvalidStatus = 32,

    // ============================================
    // SUPPLY CAP ERRORS (40-49)
    // ============================================
    /// Mint would push the project past its per-project cap
    ExceedsMaxMint = 40,
    /// Mint would push the system past the global cap
    MaxMintsExceeded = 41,

    // ============================================
    // OPERATIONAL ERRORS (50-59)
    // ============================================
    /// Minting is paused
    MintPaused = 50,
}

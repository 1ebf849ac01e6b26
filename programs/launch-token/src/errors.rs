use anchor_lang::prelude::*;

#[error_code]
pub enum LaunchError {
    // ===== Permission Errors =====
    #[msg("Unauthorized: Only admin can perform this action")]
    Unauthorized,

    #[msg("Program is not active")]
    ProgramInactive,

    // ===== Parameter Errors =====
    #[msg("Token name too long (max 32 bytes)")]
    NameTooLong,

    #[msg("Token symbol too long (max 10 bytes)")]
    SymbolTooLong,

    #[msg("Metadata URI too long (max 200 bytes)")]
    UriTooLong,

    #[msg("Fee account does not match configured fee account")]
    InvalidFeeAccount,

    // ===== Payment Errors =====
    #[msg("Insufficient lamports to pay the launch fee")]
    InsufficientFunds,

    // ===== Authority Errors =====
    #[msg("Mint authority revoked or does not match caller")]
    MintAuthorityRevoked,

    #[msg("Freeze authority revoked or does not match caller")]
    FreezeAuthorityRevoked,

    // ===== Math Errors =====
    #[msg("Math overflow")]
    MathOverflow,
}

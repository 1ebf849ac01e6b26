use anchor_lang::prelude::*;

// =============================================================================
// CONFIGURATION EVENTS
// =============================================================================

/// Event emitted when the global launch configuration is created
#[event]
pub struct ConfigInitialized {
    /// Admin address
    pub admin: Pubkey,
    /// Fee destination address
    pub fee_account: Pubkey,
    /// Launch fee in lamports
    pub fee_amount: u64,
}

/// Event emitted when the admin changes the launch fee
#[event]
pub struct FeeUpdated {
    /// Admin who performed the update
    pub admin: Pubkey,
    /// Previous fee in lamports
    pub old_fee: u64,
    /// New fee in lamports
    pub new_fee: u64,
}

/// Event emitted when the admin pauses or resumes launches
#[event]
pub struct ActiveStatusChanged {
    /// Admin who performed the update
    pub admin: Pubkey,
    /// New active flag
    pub active: bool,
}

// =============================================================================
// TOKEN LIFECYCLE EVENTS
// =============================================================================

/// Event emitted when a new token is launched
#[event]
pub struct TokenLaunched {
    /// New token mint address
    pub mint: Pubkey,
    /// Wallet that launched the token
    pub creator: Pubkey,
    /// Token name
    pub name: String,
    /// Token symbol
    pub symbol: String,
    /// Mint decimals
    pub decimals: u8,
    /// Supply minted to the creator at launch
    pub initial_mint_amount: u64,
    /// Fee paid in lamports
    pub fee_paid: u64,
    /// Whether mint authority was revoked at launch
    pub mint_authority_revoked: bool,
    /// Whether freeze authority was revoked at launch
    pub freeze_authority_revoked: bool,
    /// Total tokens launched after this launch
    pub tokens_launched: u64,
}

/// Event emitted when additional supply is minted post-launch
#[event]
pub struct TokensMinted {
    /// Token mint address
    pub mint: Pubkey,
    /// Mint authority that performed the mint
    pub authority: Pubkey,
    /// Amount minted (base units)
    pub amount: u64,
}

/// Event emitted when a mint or freeze authority is permanently revoked
#[event]
pub struct AuthorityRevoked {
    /// Token mint address
    pub mint: Pubkey,
    /// 0 = mint authority, 1 = freeze authority
    pub authority_type: u8,
}

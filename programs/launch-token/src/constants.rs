use anchor_lang::solana_program::native_token::LAMPORTS_PER_SOL;

// ===== Seeds =====
pub const LAUNCH_CONFIG_SEED: &[u8] = b"config";

// ===== Metadata Limits =====
/// Maximum token name length (bytes)
pub const MAX_NAME_LEN: usize = 32;

/// Maximum token symbol length (bytes)
pub const MAX_SYMBOL_LEN: usize = 10;

/// Maximum metadata URI length (bytes)
pub const MAX_URI_LEN: usize = 200;

// ===== Fee Configuration =====
/// Default launch fee: 0.01 SOL
pub const DEFAULT_LAUNCH_FEE: u64 = LAMPORTS_PER_SOL / 100;

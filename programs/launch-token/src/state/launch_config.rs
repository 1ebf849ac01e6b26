use anchor_lang::prelude::*;

use crate::constants::{DEFAULT_LAUNCH_FEE, MAX_NAME_LEN, MAX_SYMBOL_LEN, MAX_URI_LEN};
use crate::errors::LaunchError;

#[account]
pub struct LaunchConfig {
    /// Admin address (can update fee and active flag)
    pub admin: Pubkey,

    /// Destination for collected launch fees
    pub fee_account: Pubkey,

    /// Fee charged per launch (lamports)
    pub fee_amount: u64,

    /// Whether new launches are accepted
    pub active: bool,

    /// Total number of tokens launched
    pub tokens_launched: u64,

    /// bump seed
    pub bump: u8,

    /// Reserved space
    pub reserved: [u64; 8],
}

impl LaunchConfig {
    pub const SIZE: usize = 8 + // discriminator
        32 + // admin
        32 + // fee_account
        8 + // fee_amount
        1 + // active
        8 + // tokens_launched
        1 + // bump
        8 * 8; // reserved

    pub const SEED: &'static [u8] = b"config";

    /// Initialize default configuration
    pub fn initialize_defaults(&mut self, admin: Pubkey, bump: u8) {
        self.admin = admin;
        self.fee_account = admin;
        self.fee_amount = DEFAULT_LAUNCH_FEE;
        self.active = true;
        self.tokens_launched = 0;
        self.bump = bump;
    }

    /// Validate launch parameters in fail-fast order: active gate first,
    /// then metadata field lengths.
    pub fn validate_launch_params(&self, name: &str, symbol: &str, uri: &str) -> Result<()> {
        require!(self.active, LaunchError::ProgramInactive);

        require!(name.len() <= MAX_NAME_LEN, LaunchError::NameTooLong);
        require!(symbol.len() <= MAX_SYMBOL_LEN, LaunchError::SymbolTooLong);
        require!(uri.len() <= MAX_URI_LEN, LaunchError::UriTooLong);

        Ok(())
    }

    /// Record one successful launch
    pub fn record_launch(&mut self) -> Result<u64> {
        self.tokens_launched = self
            .tokens_launched
            .checked_add(1)
            .ok_or(LaunchError::MathOverflow)?;

        Ok(self.tokens_launched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> LaunchConfig {
        let mut config = LaunchConfig {
            admin: Pubkey::default(),
            fee_account: Pubkey::default(),
            fee_amount: 0,
            active: false,
            tokens_launched: 0,
            bump: 0,
            reserved: [0; 8],
        };
        config.initialize_defaults(Pubkey::new_unique(), 254);
        config
    }

    #[test]
    fn defaults_set_admin_as_fee_account() {
        let admin = Pubkey::new_unique();
        let mut config = test_config();
        config.initialize_defaults(admin, 255);

        assert_eq!(config.admin, admin);
        assert_eq!(config.fee_account, admin);
        assert_eq!(config.fee_amount, DEFAULT_LAUNCH_FEE);
        assert!(config.active);
        assert_eq!(config.tokens_launched, 0);
        assert_eq!(config.bump, 255);
    }

    #[test]
    fn size_matches_field_layout() {
        // discriminator + 2 pubkeys + u64 + bool + u64 + bump + reserved
        assert_eq!(LaunchConfig::SIZE, 8 + 32 + 32 + 8 + 1 + 8 + 1 + 64);
    }

    #[test]
    fn inactive_config_rejects_launches_before_length_checks() {
        let mut config = test_config();
        config.active = false;

        // An over-long name must still surface ProgramInactive first.
        let long_name = "A".repeat(33);
        let err = config
            .validate_launch_params(&long_name, "SYM", "https://example.com/t.json")
            .unwrap_err();
        assert_eq!(err, LaunchError::ProgramInactive.into());
    }

    #[test]
    fn length_checks_run_in_order() {
        let config = test_config();

        let long_name = "A".repeat(33);
        let long_symbol = "S".repeat(11);
        let long_uri = "u".repeat(201);

        let err = config
            .validate_launch_params(&long_name, &long_symbol, &long_uri)
            .unwrap_err();
        assert_eq!(err, LaunchError::NameTooLong.into());

        let err = config
            .validate_launch_params("Token", &long_symbol, &long_uri)
            .unwrap_err();
        assert_eq!(err, LaunchError::SymbolTooLong.into());

        let err = config
            .validate_launch_params("Token", "TKN", &long_uri)
            .unwrap_err();
        assert_eq!(err, LaunchError::UriTooLong.into());

        assert!(config
            .validate_launch_params("Token", "TKN", "https://example.com/t.json")
            .is_ok());
    }

    #[test]
    fn boundary_lengths_are_accepted() {
        let config = test_config();

        let name = "A".repeat(32);
        let symbol = "S".repeat(10);
        let uri = "u".repeat(200);

        assert!(config.validate_launch_params(&name, &symbol, &uri).is_ok());
    }

    #[test]
    fn record_launch_increments_by_one() {
        let mut config = test_config();

        assert_eq!(config.record_launch().unwrap(), 1);
        assert_eq!(config.record_launch().unwrap(), 2);
        assert_eq!(config.tokens_launched, 2);
    }

    #[test]
    fn record_launch_overflow_is_an_error() {
        let mut config = test_config();
        config.tokens_launched = u64::MAX;

        let err = config.record_launch().unwrap_err();
        assert_eq!(err, LaunchError::MathOverflow.into());
        assert_eq!(config.tokens_launched, u64::MAX);
    }
}

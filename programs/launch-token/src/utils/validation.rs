use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;

use crate::errors::LaunchError;

/// Validate that `caller` holds a live mint authority. Once the authority is
/// revoked this fails deterministically for every caller.
pub fn check_mint_authority(authority: &COption<Pubkey>, caller: &Pubkey) -> Result<()> {
    match authority {
        COption::Some(holder) if holder == caller => Ok(()),
        _ => err!(LaunchError::MintAuthorityRevoked),
    }
}

/// Validate that `caller` holds a live freeze authority.
pub fn check_freeze_authority(authority: &COption<Pubkey>, caller: &Pubkey) -> Result<()> {
    match authority {
        COption::Some(holder) if holder == caller => Ok(()),
        _ => err!(LaunchError::FreezeAuthorityRevoked),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_authority_matching_caller_passes() {
        let caller = Pubkey::new_unique();
        assert!(check_mint_authority(&COption::Some(caller), &caller).is_ok());
        assert!(check_freeze_authority(&COption::Some(caller), &caller).is_ok());
    }

    #[test]
    fn revoked_authority_fails_for_every_caller() {
        let caller = Pubkey::new_unique();
        let other = Pubkey::new_unique();

        let err = check_mint_authority(&COption::None, &caller).unwrap_err();
        assert_eq!(err, LaunchError::MintAuthorityRevoked.into());

        let err = check_mint_authority(&COption::None, &other).unwrap_err();
        assert_eq!(err, LaunchError::MintAuthorityRevoked.into());
    }

    #[test]
    fn foreign_authority_is_reported_as_revoked() {
        let holder = Pubkey::new_unique();
        let caller = Pubkey::new_unique();

        let err = check_mint_authority(&COption::Some(holder), &caller).unwrap_err();
        assert_eq!(err, LaunchError::MintAuthorityRevoked.into());

        let err = check_freeze_authority(&COption::Some(holder), &caller).unwrap_err();
        assert_eq!(err, LaunchError::FreezeAuthorityRevoked.into());
    }
}

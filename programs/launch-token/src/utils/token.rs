use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::token::{self, Mint, Token, TokenAccount};

use crate::errors::LaunchError;

/// Transfer the launch fee from the payer to the configured fee account.
/// The payer's balance is checked up front so the failure surfaces as
/// InsufficientFunds rather than a raw system program error.
pub fn transfer_launch_fee<'info>(
    system_program: &Program<'info, System>,
    payer: &Signer<'info>,
    fee_account: &AccountInfo<'info>,
    fee_amount: u64,
) -> Result<()> {
    if fee_amount == 0 {
        return Ok(());
    }

    let payer_lamports = payer.to_account_info().lamports();
    require!(fee_amount <= payer_lamports, LaunchError::InsufficientFunds);

    system_program::transfer(
        CpiContext::new(
            system_program.to_account_info(),
            system_program::Transfer {
                from: payer.to_account_info(),
                to: fee_account.clone(),
            },
        ),
        fee_amount,
    )?;

    Ok(())
}

/// Mint `amount` base units to `destination`, signed by the current mint
/// authority.
pub fn mint_supply<'info>(
    token_program: &Program<'info, Token>,
    mint: &Account<'info, Mint>,
    destination: &Account<'info, TokenAccount>,
    authority: &Signer<'info>,
    amount: u64,
) -> Result<()> {
    token::mint_to(
        CpiContext::new(
            token_program.to_account_info(),
            token::MintTo {
                mint: mint.to_account_info(),
                to: destination.to_account_info(),
                authority: authority.to_account_info(),
            },
        ),
        amount,
    )
}

/// Permanently clear a mint or freeze authority. There is no code path that
/// sets an authority back once it has been cleared.
pub fn revoke_authority<'info>(
    token_program: &Program<'info, Token>,
    mint: &Account<'info, Mint>,
    current_authority: &Signer<'info>,
    authority_type: token::spl_token::instruction::AuthorityType,
) -> Result<()> {
    token::set_authority(
        CpiContext::new(
            token_program.to_account_info(),
            token::SetAuthority {
                account_or_mint: mint.to_account_info(),
                current_authority: current_authority.to_account_info(),
            },
        ),
        authority_type,
        None,
    )
}

use anchor_lang::prelude::*;
use anchor_spl::token::spl_token::instruction::AuthorityType;
use anchor_spl::token::{Mint, Token};

use crate::events::AuthorityRevoked;
use crate::utils::{check_freeze_authority, revoke_authority};

#[derive(Accounts)]
pub struct RevokeFreezeAuthority<'info> {
    pub authority: Signer<'info>,

    #[account(mut)]
    pub mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
}

pub fn revoke_freeze_authority(ctx: Context<RevokeFreezeAuthority>) -> Result<()> {
    let mint = &ctx.accounts.mint;
    let authority = &ctx.accounts.authority;

    check_freeze_authority(&mint.freeze_authority, &authority.key())?;

    revoke_authority(
        &ctx.accounts.token_program,
        mint,
        authority,
        AuthorityType::FreezeAccount,
    )?;

    emit!(AuthorityRevoked {
        mint: mint.key(),
        authority_type: 1,
    });

    msg!("Freeze authority revoked for {}", mint.key());

    Ok(())
}

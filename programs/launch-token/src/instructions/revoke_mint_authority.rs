use anchor_lang::prelude::*;
use anchor_spl::token::spl_token::instruction::AuthorityType;
use anchor_spl::token::{Mint, Token};

use crate::events::AuthorityRevoked;
use crate::utils::{check_mint_authority, revoke_authority};

#[derive(Accounts)]
pub struct RevokeMintAuthority<'info> {
    pub authority: Signer<'info>,

    #[account(mut)]
    pub mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
}

pub fn revoke_mint_authority(ctx: Context<RevokeMintAuthority>) -> Result<()> {
    let mint = &ctx.accounts.mint;
    let authority = &ctx.accounts.authority;

    check_mint_authority(&mint.mint_authority, &authority.key())?;

    revoke_authority(
        &ctx.accounts.token_program,
        mint,
        authority,
        AuthorityType::MintTokens,
    )?;

    emit!(AuthorityRevoked {
        mint: mint.key(),
        authority_type: 0,
    });

    msg!("Mint authority revoked for {}", mint.key());

    Ok(())
}

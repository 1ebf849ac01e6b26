use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::events::TokensMinted;
use crate::utils::{check_mint_authority, mint_supply};

#[derive(Accounts)]
pub struct MintTokens<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(mut)]
    pub mint: Account<'info, Mint>,

    #[account(
        init_if_needed,
        payer = authority,
        associated_token::mint = mint,
        associated_token::authority = authority,
    )]
    pub token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,

    pub associated_token_program: Program<'info, AssociatedToken>,

    pub system_program: Program<'info, System>,
}

pub fn mint_tokens(ctx: Context<MintTokens>, amount: u64) -> Result<()> {
    let mint = &ctx.accounts.mint;
    let authority = &ctx.accounts.authority;

    // Fails for every caller once the mint authority has been revoked
    check_mint_authority(&mint.mint_authority, &authority.key())?;

    // A zero amount is a successful no-op
    mint_supply(
        &ctx.accounts.token_program,
        mint,
        &ctx.accounts.token_account,
        authority,
        amount,
    )?;

    emit!(TokensMinted {
        mint: mint.key(),
        authority: authority.key(),
        amount,
    });

    msg!("Minted {} base units of {}", amount, mint.key());

    Ok(())
}

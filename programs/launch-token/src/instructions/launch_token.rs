use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::metadata::{create_metadata_accounts_v3, CreateMetadataAccountsV3, Metadata};
use anchor_spl::token::spl_token::instruction::AuthorityType;
use anchor_spl::token::{Mint, Token, TokenAccount};
use mpl_token_metadata::types::DataV2;

use crate::constants::*;
use crate::errors::LaunchError;
use crate::events::TokenLaunched;
use crate::state::LaunchConfig;
use crate::utils::{mint_supply, revoke_authority, transfer_launch_fee};

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct LaunchTokenParams {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub decimals: u8,
    /// Metaplex `is_mutable` flag for the metadata record
    pub metadata_mutable: bool,
    pub revoke_mint_authority: bool,
    pub revoke_freeze_authority: bool,
    /// Supply minted to the creator's token account at launch (base units)
    pub initial_mint_amount: u64,
}

#[derive(Accounts)]
#[instruction(params: LaunchTokenParams)]
pub struct LaunchToken<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    /// Global launch configuration
    #[account(
        mut,
        seeds = [LAUNCH_CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, LaunchConfig>>,

    #[account(
        init,
        payer = creator,
        mint::decimals = params.decimals,
        mint::authority = creator,
        mint::freeze_authority = creator,
    )]
    pub mint: Account<'info, Mint>,

    /// Creator's token account for the new mint
    #[account(
        init_if_needed,
        payer = creator,
        associated_token::mint = mint,
        associated_token::authority = creator,
    )]
    pub creator_token_account: Account<'info, TokenAccount>,

    /// Fee destination
    /// CHECK: compared against config.fee_account in the handler so the
    /// mismatch surfaces after the metadata length checks
    #[account(mut)]
    pub fee_account: UncheckedAccount<'info>,

    /// Token metadata account; pass it to create a metadata record for the
    /// mint, omit it to launch without one
    /// CHECK: Validated by Metaplex program
    #[account(
        mut,
        seeds = [
            b"metadata",
            metadata_program.key().as_ref(),
            mint.key().as_ref(),
        ],
        seeds::program = metadata_program.key(),
        bump,
    )]
    pub metadata: Option<UncheckedAccount<'info>>,

    pub token_program: Program<'info, Token>,

    pub associated_token_program: Program<'info, AssociatedToken>,

    pub metadata_program: Program<'info, Metadata>,

    pub system_program: Program<'info, System>,

    pub rent: Sysvar<'info, Rent>,
}

pub fn launch_token(ctx: Context<LaunchToken>, params: LaunchTokenParams) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let creator = &ctx.accounts.creator;
    let mint = &ctx.accounts.mint;

    // Gate and metadata field validation, fail-fast
    config.validate_launch_params(&params.name, &params.symbol, &params.uri)?;

    require_keys_eq!(
        ctx.accounts.fee_account.key(),
        config.fee_account,
        LaunchError::InvalidFeeAccount
    );

    // Create metadata when the caller supplied the metadata account
    if let Some(metadata) = &ctx.accounts.metadata {
        let metadata_accounts = CreateMetadataAccountsV3 {
            metadata: metadata.to_account_info(),
            mint: mint.to_account_info(),
            mint_authority: creator.to_account_info(),
            payer: creator.to_account_info(),
            update_authority: creator.to_account_info(),
            system_program: ctx.accounts.system_program.to_account_info(),
            rent: ctx.accounts.rent.to_account_info(),
        };

        let data = DataV2 {
            name: params.name.clone(),
            symbol: params.symbol.clone(),
            uri: params.uri.clone(),
            seller_fee_basis_points: 0,
            creators: None,
            collection: None,
            uses: None,
        };

        create_metadata_accounts_v3(
            CpiContext::new(
                ctx.accounts.metadata_program.to_account_info(),
                metadata_accounts,
            ),
            data,
            params.metadata_mutable,
            true, // update_authority_is_signer
            None, // collection_details
        )?;
    }

    // Fee is charged before the initial mint so a failed payment never
    // leaves supply minted
    transfer_launch_fee(
        &ctx.accounts.system_program,
        creator,
        &ctx.accounts.fee_account.to_account_info(),
        config.fee_amount,
    )?;

    if params.initial_mint_amount > 0 {
        mint_supply(
            &ctx.accounts.token_program,
            mint,
            &ctx.accounts.creator_token_account,
            creator,
            params.initial_mint_amount,
        )?;
    }

    // Revocations run last so the initial mint above always has a live
    // authority to sign with
    if params.revoke_mint_authority {
        revoke_authority(
            &ctx.accounts.token_program,
            mint,
            creator,
            AuthorityType::MintTokens,
        )?;
    }

    if params.revoke_freeze_authority {
        revoke_authority(
            &ctx.accounts.token_program,
            mint,
            creator,
            AuthorityType::FreezeAccount,
        )?;
    }

    let tokens_launched = config.record_launch()?;

    emit!(TokenLaunched {
        mint: mint.key(),
        creator: creator.key(),
        name: params.name.clone(),
        symbol: params.symbol.clone(),
        decimals: params.decimals,
        initial_mint_amount: params.initial_mint_amount,
        fee_paid: config.fee_amount,
        mint_authority_revoked: params.revoke_mint_authority,
        freeze_authority_revoked: params.revoke_freeze_authority,
        tokens_launched,
    });

    msg!("Token launched successfully");
    msg!("Mint: {}", mint.key());
    msg!("Name: {} ({})", params.name, params.symbol);
    msg!("Fee paid: {} lamports", config.fee_amount);
    msg!("Tokens launched: {}", tokens_launched);

    Ok(())
}

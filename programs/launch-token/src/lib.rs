#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

mod const_pda;
pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("8fAeJ4DieZX4DRuyxS8hy3onnNrMo8zEFUp2dJF5MwTY");

#[program]
pub mod launch_token {
    use super::*;

    /// Initialize global launch configuration
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }

    /// Launch a new token: create the mint, optionally create metadata,
    /// charge the launch fee, mint the initial supply and optionally revoke
    /// authorities
    pub fn launch_token(ctx: Context<LaunchToken>, params: LaunchTokenParams) -> Result<()> {
        instructions::launch_token(ctx, params)
    }

    /// Update the launch fee (admin only)
    pub fn update_fee(ctx: Context<UpdateFee>, new_fee: u64) -> Result<()> {
        instructions::update_fee(ctx, new_fee)
    }

    /// Pause or resume launches (admin only)
    pub fn set_active(ctx: Context<SetActive>, active: bool) -> Result<()> {
        instructions::set_active(ctx, active)
    }

    /// Mint additional supply while the mint authority is still held
    pub fn mint_tokens(ctx: Context<MintTokens>, amount: u64) -> Result<()> {
        instructions::mint_tokens(ctx, amount)
    }

    /// Permanently revoke the mint authority
    pub fn revoke_mint_authority(ctx: Context<RevokeMintAuthority>) -> Result<()> {
        instructions::revoke_mint_authority(ctx)
    }

    /// Permanently revoke the freeze authority
    pub fn revoke_freeze_authority(ctx: Context<RevokeFreezeAuthority>) -> Result<()> {
        instructions::revoke_freeze_authority(ctx)
    }
}

use anchor_lang::prelude::*;

use crate::const_pda::const_config::CONFIG_ID;
use crate::errors::LaunchError;
use crate::events::FeeUpdated;
use crate::state::LaunchConfig;

#[derive(Accounts)]
pub struct UpdateFee<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        address = CONFIG_ID,
        constraint = config.admin == admin.key() @ LaunchError::Unauthorized,
    )]
    pub config: Box<Account<'info, LaunchConfig>>,
}

pub fn update_fee(ctx: Context<UpdateFee>, new_fee: u64) -> Result<()> {
    let config = &mut ctx.accounts.config;

    let old_fee = config.fee_amount;
    config.fee_amount = new_fee;

    emit!(FeeUpdated {
        admin: ctx.accounts.admin.key(),
        old_fee,
        new_fee,
    });

    msg!("Launch fee updated: {} -> {} lamports", old_fee, new_fee);

    Ok(())
}

use anchor_lang::prelude::*;

use crate::const_pda::const_config::CONFIG_ID;
use crate::errors::LaunchError;
use crate::events::ActiveStatusChanged;
use crate::state::LaunchConfig;

#[derive(Accounts)]
pub struct SetActive<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        address = CONFIG_ID,
        constraint = config.admin == admin.key() @ LaunchError::Unauthorized,
    )]
    pub config: Box<Account<'info, LaunchConfig>>,
}

pub fn set_active(ctx: Context<SetActive>, active: bool) -> Result<()> {
    let config = &mut ctx.accounts.config;

    config.active = active;

    emit!(ActiveStatusChanged {
        admin: ctx.accounts.admin.key(),
        active,
    });

    msg!("Launch config active flag set to {}", active);

    Ok(())
}

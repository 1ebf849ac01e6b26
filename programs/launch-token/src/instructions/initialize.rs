use anchor_lang::prelude::*;

use crate::constants::*;
use crate::events::ConfigInitialized;
use crate::state::LaunchConfig;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    /// Global launch configuration. `init` fails when the account already
    /// exists, so initialization is exactly-once for the program's lifetime.
    #[account(
        init,
        payer = admin,
        space = LaunchConfig::SIZE,
        seeds = [LAUNCH_CONFIG_SEED],
        bump,
    )]
    pub config: Box<Account<'info, LaunchConfig>>,

    pub system_program: Program<'info, System>,
}

pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let config = &mut ctx.accounts.config;

    config.initialize_defaults(ctx.accounts.admin.key(), ctx.bumps.config);

    emit!(ConfigInitialized {
        admin: config.admin,
        fee_account: config.fee_account,
        fee_amount: config.fee_amount,
    });

    msg!("Launch config initialized successfully");
    msg!("Admin: {}", config.admin);
    msg!("Fee account: {}", config.fee_account);
    msg!("Fee amount: {} lamports", config.fee_amount);

    Ok(())
}

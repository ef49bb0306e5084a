use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::errors::MintGateError;
use crate::events::MintStatusUpdated;
use crate::state::{MintConfig, MintStatus};

#[derive(Accounts)]
pub struct SetMintStatus<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED, config.authority.as_ref()],
        bump = config.bump,
        has_one = authority @ MintGateError::Unauthorized
    )]
    pub config: Account<'info, MintConfig>,
}

pub fn handler(ctx: Context<SetMintStatus>, status: MintStatus) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let config = &mut ctx.accounts.config;

    let old_status = config.set_status(&authority, status)?;

    if old_status != status {
        emit!(MintStatusUpdated {
            config: config.key(),
            old_status,
            new_status: status,
        });
    }

    Ok(())
}

use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::errors::MintGateError;
use crate::events::AllowListEntryAdded;
use crate::state::MintConfig;

#[derive(Accounts)]
pub struct AddAllowList<'info> {
    /// Config authority, pays for the extra ledger entry
    #[account(mut)]
    pub authority: Signer<'info>,

    /// Wallet receiving the grant
    pub user: SystemAccount<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED, config.authority.as_ref()],
        bump = config.bump,
        has_one = authority @ MintGateError::Unauthorized,
        realloc = MintConfig::space(config.allow_list.len() + 1),
        realloc::payer = authority,
        realloc::zero = false
    )]
    pub config: Account<'info, MintConfig>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<AddAllowList>, amount: u32) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let user = ctx.accounts.user.key();

    let config = &mut ctx.accounts.config;
    let index = config.add_allow_list(&authority, user, amount)?;

    emit!(AllowListEntryAdded {
        config: config.key(),
        user,
        amount,
        index,
    });

    Ok(())
}

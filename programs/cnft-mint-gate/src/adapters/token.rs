use anchor_lang::prelude::*;
use anchor_spl::token_interface::{burn, Burn};

use crate::issuance::PaymentCollector;

/// Collects payment by burning the payer's tokens (SPL Token or Token-2022).
///
/// The payer signs the transaction and is the token account authority, so no
/// PDA seeds are involved.
pub struct TokenBurnCollector<'info> {
    pub token_program: AccountInfo<'info>,
    pub mint: AccountInfo<'info>,
    pub from: AccountInfo<'info>,
    pub authority: AccountInfo<'info>,
}

impl PaymentCollector for TokenBurnCollector<'_> {
    fn collect(&mut self, _payer: &Pubkey, amount: u64) -> Result<()> {
        burn(
            CpiContext::new(
                self.token_program.clone(),
                Burn {
                    mint: self.mint.clone(),
                    from: self.from.clone(),
                    authority: self.authority.clone(),
                },
            ),
            amount,
        )
    }

    fn refund(&mut self, _payer: &Pubkey, amount: u64) -> Result<()> {
        // A burn cannot be reversed by CPI; failing the instruction discards it
        msg!("Burn of {} discarded with the failed instruction", amount);
        Ok(())
    }
}

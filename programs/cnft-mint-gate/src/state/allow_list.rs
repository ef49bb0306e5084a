use anchor_lang::prelude::*;

use crate::errors::MintGateError;

/// One allow-list grant: `amount` mints still redeemable by `user`.
///
/// Grants are independent. Two grants for the same user are never merged
/// and a single mint is always served by exactly one grant.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct AllowListEntry {
    pub user: Pubkey,
    pub amount: u32,
}

/// Index of the first grant for `user` that covers `requested` mints.
pub fn find_redeemable(entries: &[AllowListEntry], user: &Pubkey, requested: u32) -> Option<usize> {
    entries
        .iter()
        .position(|entry| entry.user == *user && entry.amount >= requested)
}

/// Deduct `requested` from the grant at `index`.
///
/// Fails with `NoQuotaAvailable` unless that grant belongs to `user` and
/// still covers the request. Nothing is modified on failure.
pub fn redeem_at(
    entries: &mut [AllowListEntry],
    index: usize,
    user: &Pubkey,
    requested: u32,
) -> Result<u32> {
    let entry = entries
        .get_mut(index)
        .filter(|entry| entry.user == *user)
        .ok_or(MintGateError::NoQuotaAvailable)?;

    entry.amount = entry
        .amount
        .checked_sub(requested)
        .ok_or(MintGateError::NoQuotaAvailable)?;

    Ok(entry.amount)
}

/// Give back `amount` to the grant at `index` (undo of [`redeem_at`]).
pub fn restore_at(entries: &mut [AllowListEntry], index: usize, amount: u32) -> Result<()> {
    let entry = entries
        .get_mut(index)
        .ok_or(MintGateError::NoQuotaAvailable)?;
    entry.amount = entry
        .amount
        .checked_add(amount)
        .ok_or(MintGateError::Overflow)?;
    Ok(())
}

/// Sum of all grants still held by `user` (informational only, never used to authorize).
pub fn total_remaining(entries: &[AllowListEntry], user: &Pubkey) -> u64 {
    entries
        .iter()
        .filter(|entry| entry.user == *user)
        .map(|entry| u64::from(entry.amount))
        .sum()
}

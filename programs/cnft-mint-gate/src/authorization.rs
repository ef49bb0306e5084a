//! Mint authorization: picks the quota or payment path for a request and
//! commits it together with the supply counter.
//!
//! A mint runs in two phases. `authorize` only reads the config and yields a
//! [`MintPlan`]. `apply` re-checks the supply counter and the one ledger entry
//! the plan touches before writing them, so a plan built from an outdated view
//! can never over-mint or double-spend a grant. `revert` is the exact inverse
//! of `apply`.

use anchor_lang::prelude::*;

use crate::errors::MintGateError;
use crate::issuance::{LeafIssuer, LeafRequest, NftMetadata, PaymentCollector};
use crate::state::{find_redeemable, redeem_at, restore_at, MintConfig, MintStatus};

/// Which path the caller commits to (instruction argument)
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum AuthorizationKind {
    Quota,
    Payment,
}

/// Payer's token holding as observed before the mint
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaymentProof {
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub balance: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthorizationProof {
    Quota,
    Payment(PaymentProof),
}

/// Committed authorization path
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum MintPath {
    /// Ledger entry charged one unit
    Quota { entry: u32 },
    /// Payment token units debited
    Payment { amount: u64 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MintRequest {
    pub minter: Pubkey,
    pub leaf_owner: Pubkey,
    pub metadata: NftMetadata,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MintPlan {
    pub minter: Pubkey,
    pub path: MintPath,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MintReceipt {
    pub path: MintPath,
    pub asset_id: Pubkey,
    pub leaf_index: u64,
    pub minted_count: u32,
}

impl MintConfig {
    /// Decide how `request` may mint. Read-only.
    pub fn authorize(&self, request: &MintRequest, proof: &AuthorizationProof) -> Result<MintPlan> {
        require!(
            self.status == MintStatus::Active,
            MintGateError::MintingPaused
        );
        require!(!self.is_sold_out(), MintGateError::SupplyExhausted);
        require!(
            self.collection.is_some(),
            MintGateError::CollectionNotCreated
        );
        request.metadata.validate()?;

        let minter = request.minter;
        let redeemable = find_redeemable(&self.allow_list, &minter, 1);

        let path = match proof {
            AuthorizationProof::Quota => {
                let entry = redeemable.ok_or(MintGateError::NoQuotaAvailable)?;
                MintPath::Quota {
                    entry: u32::try_from(entry).map_err(|_| MintGateError::Overflow)?,
                }
            }
            AuthorizationProof::Payment(payment) => {
                // Holders of live quota must redeem it; paying on top would mix both paths
                require!(
                    redeemable.is_none(),
                    MintGateError::AmbiguousAuthorization
                );
                let payment_mint = self.payment_mint.ok_or(MintGateError::PaymentFailed)?;
                require_keys_eq!(payment.mint, payment_mint, MintGateError::PaymentFailed);
                require_keys_eq!(payment.owner, minter, MintGateError::PaymentFailed);
                require!(
                    payment.balance >= self.price_per_mint,
                    MintGateError::PaymentFailed
                );
                MintPath::Payment {
                    amount: self.price_per_mint,
                }
            }
        };

        Ok(MintPlan { minter, path })
    }

    /// Commit a plan: charge the ledger entry (quota path) and count the mint.
    ///
    /// Returns the index of the leaf this mint will occupy.
    pub fn apply(&mut self, plan: &MintPlan) -> Result<u64> {
        require!(!self.is_sold_out(), MintGateError::SupplyExhausted);
        let leaf_index = u64::from(self.minted_count);
        let minted_count = self
            .minted_count
            .checked_add(1)
            .ok_or(MintGateError::Overflow)?;
        let sequence = self
            .sequence
            .checked_add(1)
            .ok_or(MintGateError::Overflow)?;

        if let MintPath::Quota { entry } = plan.path {
            redeem_at(&mut self.allow_list, entry as usize, &plan.minter, 1)?;
        }
        self.minted_count = minted_count;
        self.sequence = sequence;

        Ok(leaf_index)
    }

    /// Undo a previously applied plan.
    pub fn revert(&mut self, plan: &MintPlan) -> Result<()> {
        if let MintPath::Quota { entry } = plan.path {
            restore_at(&mut self.allow_list, entry as usize, 1)?;
        }
        self.minted_count = self
            .minted_count
            .checked_sub(1)
            .ok_or(MintGateError::Overflow)?;
        self.bump_sequence()
    }
}

/// Authorize, commit and issue one compressed NFT.
///
/// Either every effect lands (ledger/payment debit, counter, leaf) or the
/// config is left as it was before the call.
pub fn execute_mint(
    config: &mut MintConfig,
    request: &MintRequest,
    proof: &AuthorizationProof,
    payments: &mut impl PaymentCollector,
    issuer: &mut impl LeafIssuer,
) -> Result<MintReceipt> {
    let plan = config.authorize(request, proof)?;
    let collection = config
        .collection
        .ok_or(MintGateError::CollectionNotCreated)?;

    let leaf_index = config.apply(&plan)?;

    if let MintPath::Payment { amount } = plan.path {
        if let Err(e) = payments.collect(&plan.minter, amount) {
            msg!("Payment of {} failed: {}", amount, e);
            config.revert(&plan)?;
            return err!(MintGateError::PaymentFailed);
        }
    }

    let leaf = LeafRequest {
        metadata: request.metadata.clone(),
        leaf_owner: request.leaf_owner,
        merkle_tree: config.merkle_tree,
        tree_config: config.tree_config,
        collection,
        leaf_index,
    };

    match issuer.issue(&leaf) {
        Ok(asset_id) => Ok(MintReceipt {
            path: plan.path,
            asset_id,
            leaf_index,
            minted_count: config.minted_count,
        }),
        Err(e) => {
            msg!("Leaf {} not issued, rolling back: {}", leaf_index, e);
            config.revert(&plan)?;
            if let MintPath::Payment { amount } = plan.path {
                if let Err(refund_err) = payments.refund(&plan.minter, amount) {
                    msg!("Refund of {} failed: {}", amount, refund_err);
                }
            }
            err!(MintGateError::CompressionFailure)
        }
    }
}

use anchor_lang::prelude::*;

use crate::authorization::MintPath;
use crate::state::MintStatus;

#[event]
pub struct ConfigInitialized {
    pub config: Pubkey,
    pub authority: Pubkey,
    pub merkle_tree: Pubkey,
    pub max_supply: u32,
    pub payment_mint: Option<Pubkey>,
    pub price_per_mint: u64,
}

#[event]
pub struct CollectionCreated {
    pub config: Pubkey,
    pub collection: Pubkey,
}

#[event]
pub struct AllowListEntryAdded {
    pub config: Pubkey,
    pub user: Pubkey,
    pub amount: u32,
    /// Position of the new grant in the ledger
    pub index: u32,
}

#[event]
pub struct MintStatusUpdated {
    pub config: Pubkey,
    pub old_status: MintStatus,
    pub new_status: MintStatus,
}

/// Emitted after the compressed leaf has been appended
#[event]
pub struct CnftMinted {
    pub config: Pubkey,
    pub minter: Pubkey,
    pub leaf_owner: Pubkey,
    pub asset_id: Pubkey,
    pub leaf_index: u64,
    pub path: MintPath,
    pub minted_count: u32,
    pub remaining_supply: u32,
    /// Quota the minter still holds across all of their grants
    pub remaining_quota: u64,
}

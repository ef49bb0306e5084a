use anchor_lang::prelude::*;

use crate::constants::MAX_ALLOW_LIST_ENTRIES;
use crate::errors::MintGateError;
use crate::state::AllowListEntry;

/// Whether the config currently accepts mints
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum MintStatus {
    Active,
    Paused,
}

/// Issuance campaign record, one per authority.
/// PDA seeds: [b"config", authority]
///
/// `authority`, `max_supply`, `merkle_tree`, `tree_config` are fixed at
/// initialization; `collection` is written exactly once.
#[account]
#[derive(Debug)]
pub struct MintConfig {
    /// Admin allowed to create the collection, grant quota and pause minting
    pub authority: Pubkey,

    /// Hard cap on total mints
    pub max_supply: u32,

    /// Successful mints so far, never above `max_supply`
    pub minted_count: u32,

    /// Fungible token accepted on the payment path (None = quota only)
    pub payment_mint: Option<Pubkey>,

    /// Raw token units burned per payment-path mint
    pub price_per_mint: u64,

    /// Concurrent merkle tree receiving the leaves
    pub merkle_tree: Pubkey,

    /// Bubblegum tree config PDA for `merkle_tree`
    pub tree_config: Pubkey,

    /// Verified collection mint, set by `create_collection`
    pub collection: Option<Pubkey>,

    pub status: MintStatus,

    /// Record version, bumped on every committed mutation
    pub sequence: u64,

    /// PDA bump seed (stored for CPI signing)
    pub bump: u8,

    /// Quota ledger, append-only
    pub allow_list: Vec<AllowListEntry>,
}

/// Validated inputs for a fresh config
#[derive(Clone, Debug)]
pub struct ConfigInit {
    pub authority: Pubkey,
    pub max_supply: u32,
    pub merkle_tree: Pubkey,
    pub tree_config: Pubkey,
    pub payment_mint: Option<Pubkey>,
    pub price_per_mint: u64,
    pub bump: u8,
}

impl MintConfig {
    /// discriminator (8) + authority (32) + max_supply (4) + minted_count (4)
    /// + payment_mint (1 + 32) + price_per_mint (8) + merkle_tree (32)
    /// + tree_config (32) + collection (1 + 32) + status (1) + sequence (8)
    /// + bump (1) + allow_list length prefix (4)
    pub const BASE_SIZE: usize = 8 + 32 + 4 + 4 + 33 + 8 + 32 + 32 + 33 + 1 + 8 + 1 + 4; // 200 bytes

    /// Account size holding `entries` allow-list grants
    pub const fn space(entries: usize) -> usize {
        Self::BASE_SIZE + entries * AllowListEntry::INIT_SPACE
    }

    pub fn new(init: ConfigInit) -> Result<Self> {
        require!(init.max_supply > 0, MintGateError::InvalidMaxSupply);
        if init.payment_mint.is_some() {
            require!(init.price_per_mint > 0, MintGateError::InvalidPrice);
        }

        Ok(Self {
            authority: init.authority,
            max_supply: init.max_supply,
            minted_count: 0,
            payment_mint: init.payment_mint,
            price_per_mint: if init.payment_mint.is_some() {
                init.price_per_mint
            } else {
                0
            },
            merkle_tree: init.merkle_tree,
            tree_config: init.tree_config,
            collection: None,
            status: MintStatus::Active,
            sequence: 0,
            bump: init.bump,
            allow_list: Vec::new(),
        })
    }

    pub fn ensure_authority(&self, signer: &Pubkey) -> Result<()> {
        require_keys_eq!(self.authority, *signer, MintGateError::Unauthorized);
        Ok(())
    }

    pub fn remaining_supply(&self) -> u32 {
        self.max_supply.saturating_sub(self.minted_count)
    }

    pub fn is_sold_out(&self) -> bool {
        self.minted_count >= self.max_supply
    }

    /// Record the collection mint. Write-once.
    pub fn bind_collection(&mut self, caller: &Pubkey, collection: Pubkey) -> Result<()> {
        self.ensure_authority(caller)?;
        require!(
            self.collection.is_none(),
            MintGateError::CollectionAlreadyExists
        );
        self.collection = Some(collection);
        self.bump_sequence()
    }

    /// Append a new independent grant; returns its ledger index.
    pub fn add_allow_list(&mut self, caller: &Pubkey, user: Pubkey, amount: u32) -> Result<u32> {
        self.ensure_authority(caller)?;
        require!(amount > 0, MintGateError::InvalidQuotaAmount);
        require!(
            self.allow_list.len() < MAX_ALLOW_LIST_ENTRIES,
            MintGateError::CapacityExceeded
        );

        let index = u32::try_from(self.allow_list.len()).map_err(|_| MintGateError::Overflow)?;
        self.allow_list.push(AllowListEntry { user, amount });
        self.bump_sequence()?;
        Ok(index)
    }

    /// Pause or resume minting; returns the previous status.
    pub fn set_status(&mut self, caller: &Pubkey, status: MintStatus) -> Result<MintStatus> {
        self.ensure_authority(caller)?;
        let old_status = self.status;
        if old_status != status {
            self.status = status;
            self.bump_sequence()?;
        }
        Ok(old_status)
    }

    pub(crate) fn bump_sequence(&mut self) -> Result<()> {
        self.sequence = self
            .sequence
            .checked_add(1)
            .ok_or(MintGateError::Overflow)?;
        Ok(())
    }
}

//! Hand-built Bubblegum instructions.
//!
//! Only the two instructions this program needs are encoded here
//! (`create_tree` and `mint_to_collection_v1`), with the Anchor discriminators
//! and argument layouts Bubblegum expects.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::solana_program::program::invoke_signed;

use crate::constants::*;
use crate::errors::MintGateError;
use crate::issuance::{LeafIssuer, LeafRequest};

/// sha256("global:create_tree")[..8]
pub const CREATE_TREE_DISCRIMINATOR: [u8; 8] = [0xa5, 0x53, 0x88, 0x8e, 0x59, 0xca, 0x2f, 0xdc];

/// sha256("global:mint_to_collection_v1")[..8]
pub const MINT_TO_COLLECTION_V1_DISCRIMINATOR: [u8; 8] =
    [0x99, 0x12, 0xb2, 0x2f, 0xc5, 0x9e, 0x56, 0x0f];

#[derive(AnchorSerialize)]
struct CreateTreeArgs {
    max_depth: u32,
    max_buffer_size: u32,
    public: Option<bool>,
}

#[derive(AnchorSerialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenStandard {
    NonFungible,
    FungibleAsset,
    Fungible,
    NonFungibleEdition,
}

#[derive(AnchorSerialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenProgramVersion {
    Original,
    Token2022,
}

#[derive(AnchorSerialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum UseMethod {
    Burn,
    Multiple,
    Single,
}

#[derive(AnchorSerialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Uses {
    pub use_method: UseMethod,
    pub remaining: u64,
    pub total: u64,
}

#[derive(AnchorSerialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Collection {
    pub verified: bool,
    pub key: Pubkey,
}

#[derive(AnchorSerialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Creator {
    pub address: Pubkey,
    pub verified: bool,
    pub share: u8,
}

/// Leaf metadata as Bubblegum hashes it (field order is part of the layout)
#[derive(AnchorSerialize, Clone, Debug, PartialEq, Eq)]
pub struct MetadataArgs {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub seller_fee_basis_points: u16,
    pub primary_sale_happened: bool,
    pub is_mutable: bool,
    pub edition_nonce: Option<u8>,
    pub token_standard: Option<TokenStandard>,
    pub collection: Option<Collection>,
    pub uses: Option<Uses>,
    pub token_program_version: TokenProgramVersion,
    pub creators: Vec<Creator>,
}

impl MetadataArgs {
    /// Leaf metadata bound to the config collection, no royalties
    pub fn for_leaf(leaf: &LeafRequest) -> Self {
        Self {
            name: leaf.metadata.name.clone(),
            symbol: leaf.metadata.symbol.clone(),
            uri: leaf.metadata.uri.clone(),
            seller_fee_basis_points: 0,
            primary_sale_happened: false,
            is_mutable: true,
            edition_nonce: None,
            token_standard: Some(TokenStandard::NonFungible),
            // Bubblegum verifies the collection itself during mint_to_collection_v1
            collection: Some(Collection {
                verified: false,
                key: leaf.collection,
            }),
            uses: None,
            token_program_version: TokenProgramVersion::Original,
            creators: Vec::new(),
        }
    }
}

/// Asset id Bubblegum assigns to the leaf at `leaf_index`
pub fn asset_id(merkle_tree: &Pubkey, leaf_index: u64) -> Pubkey {
    Pubkey::find_program_address(
        &[
            BUBBLEGUM_ASSET_SEED,
            merkle_tree.as_ref(),
            &leaf_index.to_le_bytes(),
        ],
        &BUBBLEGUM_PROGRAM_ID,
    )
    .0
}

/// Build Bubblegum `create_tree` for a private tree owned by `tree_creator`
///
/// Accounts:
/// 0. tree_config (writable)
/// 1. merkle_tree (writable)
/// 2. payer (writable, signer)
/// 3. tree_creator (signer)
/// 4. log_wrapper
/// 5. compression_program
/// 6. system_program
pub fn create_tree_ix(
    tree_config: Pubkey,
    merkle_tree: Pubkey,
    payer: Pubkey,
    tree_creator: Pubkey,
    max_depth: u32,
    max_buffer_size: u32,
) -> Result<Instruction> {
    let mut data = CREATE_TREE_DISCRIMINATOR.to_vec();
    CreateTreeArgs {
        max_depth,
        max_buffer_size,
        public: Some(false),
    }
    .serialize(&mut data)?;

    Ok(Instruction {
        program_id: BUBBLEGUM_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(tree_config, false),
            AccountMeta::new(merkle_tree, false),
            AccountMeta::new(payer, true),
            AccountMeta::new_readonly(tree_creator, true),
            AccountMeta::new_readonly(SPL_NOOP_ID, false),
            AccountMeta::new_readonly(SPL_ACCOUNT_COMPRESSION_ID, false),
            AccountMeta::new_readonly(anchor_lang::system_program::ID, false),
        ],
        data,
    })
}

/// Account keys for `mint_to_collection_v1`
#[derive(Clone, Copy, Debug)]
pub struct MintToCollectionKeys {
    pub tree_config: Pubkey,
    pub leaf_owner: Pubkey,
    pub merkle_tree: Pubkey,
    pub payer: Pubkey,
    /// Tree creator, also the collection update authority (the config PDA)
    pub authority: Pubkey,
    pub collection_mint: Pubkey,
    pub collection_metadata: Pubkey,
    pub collection_edition: Pubkey,
    pub bubblegum_signer: Pubkey,
}

/// Build Bubblegum `mint_to_collection_v1`
///
/// The leaf delegate is the leaf owner and no collection authority record is
/// used (Bubblegum's program id stands in for the absent account).
pub fn mint_to_collection_v1_ix(
    keys: &MintToCollectionKeys,
    metadata: &MetadataArgs,
) -> Result<Instruction> {
    let mut data = MINT_TO_COLLECTION_V1_DISCRIMINATOR.to_vec();
    metadata.serialize(&mut data)?;

    Ok(Instruction {
        program_id: BUBBLEGUM_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(keys.tree_config, false),
            AccountMeta::new_readonly(keys.leaf_owner, false),
            AccountMeta::new_readonly(keys.leaf_owner, false),
            AccountMeta::new(keys.merkle_tree, false),
            AccountMeta::new(keys.payer, true),
            AccountMeta::new_readonly(keys.authority, true),
            AccountMeta::new_readonly(keys.authority, true),
            AccountMeta::new_readonly(BUBBLEGUM_PROGRAM_ID, false),
            AccountMeta::new_readonly(keys.collection_mint, false),
            AccountMeta::new(keys.collection_metadata, false),
            AccountMeta::new_readonly(keys.collection_edition, false),
            AccountMeta::new_readonly(keys.bubblegum_signer, false),
            AccountMeta::new_readonly(SPL_NOOP_ID, false),
            AccountMeta::new_readonly(SPL_ACCOUNT_COMPRESSION_ID, false),
            AccountMeta::new_readonly(anchor_spl::metadata::ID, false),
            AccountMeta::new_readonly(anchor_lang::system_program::ID, false),
        ],
        data,
    })
}

/// Appends leaves through Bubblegum, signing as tree creator and collection
/// authority with the config PDA.
pub struct BubblegumIssuer<'a, 'info> {
    pub tree_config: AccountInfo<'info>,
    pub leaf_owner: AccountInfo<'info>,
    pub merkle_tree: AccountInfo<'info>,
    pub payer: AccountInfo<'info>,
    pub config: AccountInfo<'info>,
    pub collection_mint: AccountInfo<'info>,
    pub collection_metadata: AccountInfo<'info>,
    pub collection_edition: AccountInfo<'info>,
    pub bubblegum_signer: AccountInfo<'info>,
    pub log_wrapper: AccountInfo<'info>,
    pub compression_program: AccountInfo<'info>,
    pub token_metadata_program: AccountInfo<'info>,
    pub system_program: AccountInfo<'info>,
    pub bubblegum_program: AccountInfo<'info>,
    pub signer_seeds: &'a [&'a [&'a [u8]]],
}

impl LeafIssuer for BubblegumIssuer<'_, '_> {
    fn issue(&mut self, leaf: &LeafRequest) -> Result<Pubkey> {
        require_keys_eq!(
            leaf.leaf_owner,
            self.leaf_owner.key(),
            MintGateError::CompressionFailure
        );
        require_keys_eq!(
            leaf.merkle_tree,
            self.merkle_tree.key(),
            MintGateError::CompressionFailure
        );
        require_keys_eq!(
            leaf.tree_config,
            self.tree_config.key(),
            MintGateError::CompressionFailure
        );
        require_keys_eq!(
            leaf.collection,
            self.collection_mint.key(),
            MintGateError::CollectionMismatch
        );

        let ix = mint_to_collection_v1_ix(
            &MintToCollectionKeys {
                tree_config: self.tree_config.key(),
                leaf_owner: self.leaf_owner.key(),
                merkle_tree: self.merkle_tree.key(),
                payer: self.payer.key(),
                authority: self.config.key(),
                collection_mint: self.collection_mint.key(),
                collection_metadata: self.collection_metadata.key(),
                collection_edition: self.collection_edition.key(),
                bubblegum_signer: self.bubblegum_signer.key(),
            },
            &MetadataArgs::for_leaf(leaf),
        )?;

        invoke_signed(
            &ix,
            &[
                self.tree_config.clone(),
                self.leaf_owner.clone(),
                self.merkle_tree.clone(),
                self.payer.clone(),
                self.config.clone(),
                self.bubblegum_program.clone(),
                self.collection_mint.clone(),
                self.collection_metadata.clone(),
                self.collection_edition.clone(),
                self.bubblegum_signer.clone(),
                self.log_wrapper.clone(),
                self.compression_program.clone(),
                self.token_metadata_program.clone(),
                self.system_program.clone(),
            ],
            self.signer_seeds,
        )?;

        Ok(asset_id(&leaf.merkle_tree, leaf.leaf_index))
    }
}

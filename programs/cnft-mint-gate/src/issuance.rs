//! Seams to the programs that actually move tokens and write leaves.
//!
//! The mint authorizer only talks to these traits. On-chain they are backed
//! by CPIs (see `adapters`); unit tests plug in in-memory fakes.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::MintGateError;
use crate::state::MintConfig;

/// Name/symbol/uri triple shared by leaves and the collection NFT
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct NftMetadata {
    pub name: String,
    pub symbol: String,
    pub uri: String,
}

impl NftMetadata {
    pub fn new(name: String, symbol: String, uri: String) -> Self {
        Self { name, symbol, uri }
    }

    pub fn validate(&self) -> Result<()> {
        require!(
            self.name.len() <= MAX_NAME_LENGTH,
            MintGateError::NameTooLong
        );
        require!(
            self.symbol.len() <= MAX_SYMBOL_LENGTH,
            MintGateError::SymbolTooLong
        );
        require!(self.uri.len() <= MAX_URI_LENGTH, MintGateError::UriTooLong);
        Ok(())
    }
}

/// Everything the leaf issuer needs to append one compressed NFT
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeafRequest {
    pub metadata: NftMetadata,
    pub leaf_owner: Pubkey,
    pub merkle_tree: Pubkey,
    pub tree_config: Pubkey,
    pub collection: Pubkey,
    /// Position of the new leaf (the tree is private to one config)
    pub leaf_index: u64,
}

/// Debits the payment token for payment-path mints
pub trait PaymentCollector {
    fn collect(&mut self, payer: &Pubkey, amount: u64) -> Result<()>;

    /// Give back a collected amount after a later step failed
    fn refund(&mut self, payer: &Pubkey, amount: u64) -> Result<()>;
}

/// Appends compressed leaves; returns the new asset id
pub trait LeafIssuer {
    fn issue(&mut self, leaf: &LeafRequest) -> Result<Pubkey>;
}

/// Creates the collection NFT; returns its mint
pub trait CollectionIssuer {
    fn create(&mut self, metadata: &NftMetadata) -> Result<Pubkey>;
}

/// Payment accounts are optional on `mint`; without them nothing can be collected.
impl<P: PaymentCollector> PaymentCollector for Option<P> {
    fn collect(&mut self, payer: &Pubkey, amount: u64) -> Result<()> {
        match self {
            Some(collector) => collector.collect(payer, amount),
            None => err!(MintGateError::PaymentFailed),
        }
    }

    fn refund(&mut self, payer: &Pubkey, amount: u64) -> Result<()> {
        match self {
            Some(collector) => collector.refund(payer, amount),
            None => Ok(()),
        }
    }
}

/// Create the collection NFT and bind it to `config`.
///
/// Authority, the write-once rule and metadata limits are checked before the
/// issuer runs, so a rejected call never reaches Token Metadata.
pub fn execute_create_collection(
    config: &mut MintConfig,
    caller: &Pubkey,
    metadata: &NftMetadata,
    issuer: &mut impl CollectionIssuer,
) -> Result<Pubkey> {
    config.ensure_authority(caller)?;
    require!(
        config.collection.is_none(),
        MintGateError::CollectionAlreadyExists
    );
    metadata.validate()?;

    let collection = issuer.create(metadata).map_err(|e| {
        msg!("Collection issuance failed: {}", e);
        error!(MintGateError::IssuanceFailed)
    })?;
    config.bind_collection(caller, collection)?;

    Ok(collection)
}

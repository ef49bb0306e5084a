use anchor_lang::prelude::*;

pub mod adapters;
pub mod authorization;
pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod issuance;
pub mod state;
pub mod tree;

use authorization::AuthorizationKind;
use instructions::*;
use state::MintStatus;

declare_id!("6mzCtCFSJot56m5CipBCuzmrFBmS2Vzs8D3MkVEgSqNy");

// Security contact information (embedded on-chain)
#[cfg(not(feature = "no-entrypoint"))]
solana_security_txt::security_txt! {
    name: "cNFT Mint Gate",
    project_url: "https://github.com/cnft-mint-gate/cnft-mint-gate",
    contacts: "email:security@cnft-mint-gate.dev",
    policy: "https://github.com/cnft-mint-gate/cnft-mint-gate/blob/main/SECURITY.md",
    preferred_languages: "en",
    source_code: "https://github.com/cnft-mint-gate/cnft-mint-gate"
}

#[program]
pub mod cnft_mint_gate {
    use super::*;

    /// Create the mint config for the signing authority and bind its
    /// pre-allocated merkle tree (creates the Bubblegum tree config)
    pub fn initialize(ctx: Context<Initialize>, params: InitializeParams) -> Result<()> {
        instructions::initialize::handler(ctx, params)
    }

    /// Mint the collection NFT every leaf is verified into. Once per config.
    pub fn create_collection(
        ctx: Context<CreateCollection>,
        name: String,
        symbol: String,
        uri: String,
    ) -> Result<()> {
        instructions::create_collection::handler(ctx, name, symbol, uri)
    }

    /// Grant `amount` quota-path mints to `user` as a new ledger entry
    pub fn add_allow_list(ctx: Context<AddAllowList>, amount: u32) -> Result<()> {
        instructions::add_allow_list::handler(ctx, amount)
    }

    /// Pause or resume minting
    pub fn set_mint_status(ctx: Context<SetMintStatus>, status: MintStatus) -> Result<()> {
        instructions::set_mint_status::handler(ctx, status)
    }

    /// Mint one compressed NFT through the quota or the payment path
    pub fn mint_cnft(
        ctx: Context<MintCnft>,
        name: String,
        symbol: String,
        uri: String,
        authorization: AuthorizationKind,
    ) -> Result<()> {
        instructions::mint_cnft::handler(ctx, name, symbol, uri, authorization)
    }
}

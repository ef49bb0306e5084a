use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::metadata::Metadata;
use anchor_spl::token::Token;

use crate::adapters::MetadataCollectionIssuer;
use crate::constants::*;
use crate::errors::MintGateError;
use crate::events::CollectionCreated;
use crate::issuance::{execute_create_collection, NftMetadata};
use crate::state::MintConfig;

#[derive(Accounts)]
pub struct CreateCollection<'info> {
    /// Config authority, pays for the collection accounts
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED, config.authority.as_ref()],
        bump = config.bump,
        has_one = authority @ MintGateError::Unauthorized
    )]
    pub config: Account<'info, MintConfig>,

    /// New collection mint (randomly generated keypair)
    #[account(mut)]
    pub collection_mint: Signer<'info>,

    /// Config-owned ATA holding the collection NFT
    /// CHECK: Created by the associated token program
    #[account(mut)]
    pub collection_token_account: UncheckedAccount<'info>,

    /// CHECK: Token Metadata PDA, created by Token Metadata
    #[account(
        mut,
        seeds = [METADATA_SEED, token_metadata_program.key().as_ref(), collection_mint.key().as_ref()],
        bump,
        seeds::program = token_metadata_program.key()
    )]
    pub collection_metadata: UncheckedAccount<'info>,

    /// CHECK: Token Metadata master edition PDA, created by Token Metadata
    #[account(
        mut,
        seeds = [
            METADATA_SEED,
            token_metadata_program.key().as_ref(),
            collection_mint.key().as_ref(),
            EDITION_SEED
        ],
        bump,
        seeds::program = token_metadata_program.key()
    )]
    pub collection_edition: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_metadata_program: Program<'info, Metadata>,
    pub system_program: Program<'info, System>,
    /// CHECK: Rent sysvar, required by Token Metadata
    #[account(address = anchor_lang::solana_program::sysvar::rent::ID)]
    pub rent: UncheckedAccount<'info>,
}

pub fn handler(
    ctx: Context<CreateCollection>,
    name: String,
    symbol: String,
    uri: String,
) -> Result<()> {
    let authority_key = ctx.accounts.authority.key();
    let config_key = ctx.accounts.config.key();
    let bump_seed = [ctx.accounts.config.bump];
    let config_seeds: &[&[u8]] = &[CONFIG_SEED, authority_key.as_ref(), &bump_seed];
    let signer_seeds = &[config_seeds];

    let mut issuer = MetadataCollectionIssuer {
        payer: ctx.accounts.authority.to_account_info(),
        config: ctx.accounts.config.to_account_info(),
        collection_mint: ctx.accounts.collection_mint.to_account_info(),
        collection_token_account: ctx.accounts.collection_token_account.to_account_info(),
        collection_metadata: ctx.accounts.collection_metadata.to_account_info(),
        collection_edition: ctx.accounts.collection_edition.to_account_info(),
        token_program: ctx.accounts.token_program.to_account_info(),
        associated_token_program: ctx.accounts.associated_token_program.to_account_info(),
        token_metadata_program: ctx.accounts.token_metadata_program.to_account_info(),
        system_program: ctx.accounts.system_program.to_account_info(),
        rent: ctx.accounts.rent.to_account_info(),
        signer_seeds,
    };

    let metadata = NftMetadata::new(name, symbol, uri);
    let collection = execute_create_collection(
        &mut ctx.accounts.config,
        &authority_key,
        &metadata,
        &mut issuer,
    )?;

    emit!(CollectionCreated {
        config: config_key,
        collection,
    });

    Ok(())
}

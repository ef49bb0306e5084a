use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_pack::Pack;
use anchor_lang::system_program::{create_account, CreateAccount};
use anchor_spl::associated_token::{create as create_ata, Create as CreateAta};
use anchor_spl::metadata::mpl_token_metadata::types::{CollectionDetails, Creator, DataV2};
use anchor_spl::metadata::{
    create_master_edition_v3, create_metadata_accounts_v3, CreateMasterEditionV3,
    CreateMetadataAccountsV3,
};
use anchor_spl::token::spl_token::state::Mint as SplMint;
use anchor_spl::token::{initialize_mint2, mint_to, InitializeMint2, MintTo};

use crate::issuance::{CollectionIssuer, NftMetadata};

/// Creates the sized collection NFT through SPL Token and Token Metadata.
///
/// The config PDA is mint authority, freeze authority, update authority and
/// sole verified creator; it also holds the single collection token.
pub struct MetadataCollectionIssuer<'a, 'info> {
    pub payer: AccountInfo<'info>,
    pub config: AccountInfo<'info>,
    pub collection_mint: AccountInfo<'info>,
    pub collection_token_account: AccountInfo<'info>,
    pub collection_metadata: AccountInfo<'info>,
    pub collection_edition: AccountInfo<'info>,
    pub token_program: AccountInfo<'info>,
    pub associated_token_program: AccountInfo<'info>,
    pub token_metadata_program: AccountInfo<'info>,
    pub system_program: AccountInfo<'info>,
    pub rent: AccountInfo<'info>,
    pub signer_seeds: &'a [&'a [&'a [u8]]],
}

impl MetadataCollectionIssuer<'_, '_> {
    fn create_mint(&self) -> Result<()> {
        let lamports = Rent::get()?.minimum_balance(SplMint::LEN);
        create_account(
            CpiContext::new(
                self.system_program.clone(),
                CreateAccount {
                    from: self.payer.clone(),
                    to: self.collection_mint.clone(),
                },
            ),
            lamports,
            SplMint::LEN as u64,
            self.token_program.key,
        )?;

        initialize_mint2(
            CpiContext::new(
                self.token_program.clone(),
                InitializeMint2 {
                    mint: self.collection_mint.clone(),
                },
            ),
            0,
            self.config.key,
            Some(self.config.key),
        )
    }

    fn mint_collection_token(&self) -> Result<()> {
        create_ata(CpiContext::new(
            self.associated_token_program.clone(),
            CreateAta {
                payer: self.payer.clone(),
                associated_token: self.collection_token_account.clone(),
                authority: self.config.clone(),
                mint: self.collection_mint.clone(),
                system_program: self.system_program.clone(),
                token_program: self.token_program.clone(),
            },
        ))?;

        mint_to(
            CpiContext::new_with_signer(
                self.token_program.clone(),
                MintTo {
                    mint: self.collection_mint.clone(),
                    to: self.collection_token_account.clone(),
                    authority: self.config.clone(),
                },
                self.signer_seeds,
            ),
            1,
        )
    }
}

impl CollectionIssuer for MetadataCollectionIssuer<'_, '_> {
    fn create(&mut self, metadata: &NftMetadata) -> Result<Pubkey> {
        self.create_mint()?;
        self.mint_collection_token()?;

        create_metadata_accounts_v3(
            CpiContext::new_with_signer(
                self.token_metadata_program.clone(),
                CreateMetadataAccountsV3 {
                    metadata: self.collection_metadata.clone(),
                    mint: self.collection_mint.clone(),
                    mint_authority: self.config.clone(),
                    payer: self.payer.clone(),
                    update_authority: self.config.clone(),
                    system_program: self.system_program.clone(),
                    rent: self.rent.clone(),
                },
                self.signer_seeds,
            ),
            DataV2 {
                name: metadata.name.clone(),
                symbol: metadata.symbol.clone(),
                uri: metadata.uri.clone(),
                seller_fee_basis_points: 0,
                creators: Some(vec![Creator {
                    address: self.config.key(),
                    verified: true,
                    share: 100,
                }]),
                collection: None,
                uses: None,
            },
            true,
            true,
            Some(CollectionDetails::V1 { size: 0 }),
        )?;

        // Max supply 0: no prints can ever be made from the collection NFT
        create_master_edition_v3(
            CpiContext::new_with_signer(
                self.token_metadata_program.clone(),
                CreateMasterEditionV3 {
                    edition: self.collection_edition.clone(),
                    mint: self.collection_mint.clone(),
                    update_authority: self.config.clone(),
                    mint_authority: self.config.clone(),
                    payer: self.payer.clone(),
                    metadata: self.collection_metadata.clone(),
                    token_program: self.token_program.clone(),
                    system_program: self.system_program.clone(),
                    rent: self.rent.clone(),
                },
                self.signer_seeds,
            ),
            Some(0),
        )?;

        Ok(self.collection_mint.key())
    }
}

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::adapters::{BubblegumIssuer, TokenBurnCollector};
use crate::authorization::{
    execute_mint, AuthorizationKind, AuthorizationProof, MintRequest, PaymentProof,
};
use crate::constants::*;
use crate::errors::MintGateError;
use crate::events::CnftMinted;
use crate::issuance::NftMetadata;
use crate::state::{total_remaining, MintConfig};

#[derive(Accounts)]
pub struct MintCnft<'info> {
    /// Principal whose quota or payment authorizes the mint; pays leaf fees
    #[account(mut)]
    pub minter: Signer<'info>,

    /// CHECK: Config authority, only used to derive the config PDA
    pub authority: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED, authority.key().as_ref()],
        bump = config.bump
    )]
    pub config: Account<'info, MintConfig>,

    /// Receives the compressed NFT (usually the minter)
    /// CHECK: Can be any valid pubkey
    pub leaf_owner: UncheckedAccount<'info>,

    /// CHECK: Bound at initialize
    #[account(mut, address = config.merkle_tree @ MintGateError::InvalidTreeParameters)]
    pub merkle_tree: UncheckedAccount<'info>,

    /// CHECK: Bound at initialize
    #[account(mut, address = config.tree_config @ MintGateError::InvalidTreeParameters)]
    pub tree_config: UncheckedAccount<'info>,

    /// CHECK: Must be the collection bound at create_collection
    #[account(
        constraint = config.collection.map_or(true, |c| c == collection_mint.key())
            @ MintGateError::CollectionMismatch
    )]
    pub collection_mint: UncheckedAccount<'info>,

    /// CHECK: Verified by Token Metadata during the Bubblegum CPI
    #[account(mut)]
    pub collection_metadata: UncheckedAccount<'info>,

    /// CHECK: Verified by Token Metadata during the Bubblegum CPI
    pub collection_edition: UncheckedAccount<'info>,

    /// CHECK: Bubblegum's collection CPI signer PDA
    #[account(
        seeds = [BUBBLEGUM_COLLECTION_CPI_SEED],
        bump,
        seeds::program = bubblegum_program.key()
    )]
    pub bubblegum_signer: UncheckedAccount<'info>,

    /// Payment path only
    #[account(mut)]
    pub payment_mint: Option<InterfaceAccount<'info, Mint>>,

    /// Payment path only: minter's token account, burned from
    #[account(mut)]
    pub payment_token_account: Option<InterfaceAccount<'info, TokenAccount>>,

    /// Payment path only
    pub token_program: Option<Interface<'info, TokenInterface>>,

    /// CHECK: SPL Noop program
    #[account(address = SPL_NOOP_ID)]
    pub log_wrapper: UncheckedAccount<'info>,

    /// CHECK: SPL Account Compression program
    #[account(address = SPL_ACCOUNT_COMPRESSION_ID)]
    pub compression_program: UncheckedAccount<'info>,

    /// CHECK: Bubblegum program
    #[account(address = BUBBLEGUM_PROGRAM_ID)]
    pub bubblegum_program: UncheckedAccount<'info>,

    /// CHECK: Token Metadata program
    #[account(address = anchor_spl::metadata::ID)]
    pub token_metadata_program: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> MintCnft<'info> {
    fn payment_accounts_supplied(&self) -> bool {
        self.payment_mint.is_some()
            || self.payment_token_account.is_some()
            || self.token_program.is_some()
    }

    /// Turn the chosen path and the optional payment accounts into a proof.
    fn authorization_proof(&self, kind: AuthorizationKind) -> Result<AuthorizationProof> {
        match kind {
            AuthorizationKind::Quota => {
                require!(
                    !self.payment_accounts_supplied(),
                    MintGateError::AmbiguousAuthorization
                );
                Ok(AuthorizationProof::Quota)
            }
            AuthorizationKind::Payment => {
                let (Some(mint), Some(token_account), Some(_)) = (
                    &self.payment_mint,
                    &self.payment_token_account,
                    &self.token_program,
                ) else {
                    return err!(MintGateError::PaymentFailed);
                };
                require_keys_eq!(
                    token_account.mint,
                    mint.key(),
                    MintGateError::PaymentFailed
                );

                Ok(AuthorizationProof::Payment(PaymentProof {
                    mint: mint.key(),
                    owner: token_account.owner,
                    balance: token_account.amount,
                }))
            }
        }
    }

    fn burn_collector(&self) -> Option<TokenBurnCollector<'info>> {
        match (
            &self.payment_mint,
            &self.payment_token_account,
            &self.token_program,
        ) {
            (Some(mint), Some(token_account), Some(token_program)) => Some(TokenBurnCollector {
                token_program: token_program.to_account_info(),
                mint: mint.to_account_info(),
                from: token_account.to_account_info(),
                authority: self.minter.to_account_info(),
            }),
            _ => None,
        }
    }
}

pub fn handler(
    ctx: Context<MintCnft>,
    name: String,
    symbol: String,
    uri: String,
    authorization: AuthorizationKind,
) -> Result<()> {
    // === PHASE 1: Build the request and its proof ===
    let proof = ctx.accounts.authorization_proof(authorization)?;
    let request = MintRequest {
        minter: ctx.accounts.minter.key(),
        leaf_owner: ctx.accounts.leaf_owner.key(),
        metadata: NftMetadata::new(name, symbol, uri),
    };

    let authority_key = ctx.accounts.authority.key();
    let config_key = ctx.accounts.config.key();
    let bump_seed = [ctx.accounts.config.bump];
    let config_seeds: &[&[u8]] = &[CONFIG_SEED, authority_key.as_ref(), &bump_seed];
    let signer_seeds = &[config_seeds];

    let mut payments = ctx.accounts.burn_collector();
    let mut issuer = BubblegumIssuer {
        tree_config: ctx.accounts.tree_config.to_account_info(),
        leaf_owner: ctx.accounts.leaf_owner.to_account_info(),
        merkle_tree: ctx.accounts.merkle_tree.to_account_info(),
        payer: ctx.accounts.minter.to_account_info(),
        config: ctx.accounts.config.to_account_info(),
        collection_mint: ctx.accounts.collection_mint.to_account_info(),
        collection_metadata: ctx.accounts.collection_metadata.to_account_info(),
        collection_edition: ctx.accounts.collection_edition.to_account_info(),
        bubblegum_signer: ctx.accounts.bubblegum_signer.to_account_info(),
        log_wrapper: ctx.accounts.log_wrapper.to_account_info(),
        compression_program: ctx.accounts.compression_program.to_account_info(),
        token_metadata_program: ctx.accounts.token_metadata_program.to_account_info(),
        system_program: ctx.accounts.system_program.to_account_info(),
        bubblegum_program: ctx.accounts.bubblegum_program.to_account_info(),
        signer_seeds,
    };

    // === PHASE 2: Authorize, commit, collect and issue ===
    let receipt = execute_mint(
        &mut ctx.accounts.config,
        &request,
        &proof,
        &mut payments,
        &mut issuer,
    )?;

    let config = &ctx.accounts.config;
    emit!(CnftMinted {
        config: config_key,
        minter: request.minter,
        leaf_owner: request.leaf_owner,
        asset_id: receipt.asset_id,
        leaf_index: receipt.leaf_index,
        path: receipt.path,
        minted_count: receipt.minted_count,
        remaining_supply: config.remaining_supply(),
        remaining_quota: total_remaining(&config.allow_list, &request.minter),
    });

    Ok(())
}

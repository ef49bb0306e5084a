use anchor_lang::prelude::*;
use anchor_lang::solana_program::program::invoke_signed;
use anchor_lang::system_program::{
    allocate, assign, create_account, transfer, Allocate, Assign, CreateAccount, Transfer,
};
use anchor_spl::token_interface::Mint;

use crate::adapters::bubblegum::create_tree_ix;
use crate::constants::*;
use crate::errors::MintGateError;
use crate::events::ConfigInitialized;
use crate::state::{ConfigInit, MintConfig};
use crate::tree::validate_tree;

/// Parameters for a new mint config.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct InitializeParams {
    /// Hard cap on total mints (must fit in the tree)
    pub max_supply: u32,
    /// Depth the merkle tree account was allocated for
    pub tree_depth: u32,
    /// Changelog buffer size the merkle tree account was allocated for
    pub tree_buffer_size: u32,
    /// Raw payment token units per mint (ignored without a payment mint)
    pub price_per_mint: u64,
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Config authority, pays for the config and tree config accounts
    #[account(mut)]
    pub authority: Signer<'info>,

    /// Mint config PDA
    /// CHECK: Must still be empty; allocated and written in the handler
    #[account(
        mut,
        seeds = [CONFIG_SEED, authority.key().as_ref()],
        bump
    )]
    pub config: UncheckedAccount<'info>,

    /// Concurrent merkle tree, allocated by the client and not yet initialized
    /// CHECK: Owner, size and header validated in the handler
    #[account(mut)]
    pub merkle_tree: UncheckedAccount<'info>,

    /// Bubblegum tree config, created by Bubblegum during this instruction
    /// CHECK: PDA of Bubblegum
    #[account(
        mut,
        seeds = [merkle_tree.key().as_ref()],
        bump,
        seeds::program = bubblegum_program.key()
    )]
    pub tree_config: UncheckedAccount<'info>,

    /// Token accepted on the payment path (omit for quota-only configs)
    pub payment_mint: Option<InterfaceAccount<'info, Mint>>,

    /// CHECK: Bubblegum program
    #[account(address = BUBBLEGUM_PROGRAM_ID)]
    pub bubblegum_program: UncheckedAccount<'info>,

    /// CHECK: SPL Noop program
    #[account(address = SPL_NOOP_ID)]
    pub log_wrapper: UncheckedAccount<'info>,

    /// CHECK: SPL Account Compression program
    #[account(address = SPL_ACCOUNT_COMPRESSION_ID)]
    pub compression_program: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>, params: InitializeParams) -> Result<()> {
    // Pre-funded lamports are fine; data or a non-system owner means it exists
    {
        let config = &ctx.accounts.config;
        require!(
            config.data_is_empty() && config.owner == &anchor_lang::system_program::ID,
            MintGateError::AlreadyInitialized
        );
    }

    let authority_key = ctx.accounts.authority.key();
    let config_bump = ctx.bumps.config;

    let config = MintConfig::new(ConfigInit {
        authority: authority_key,
        max_supply: params.max_supply,
        merkle_tree: ctx.accounts.merkle_tree.key(),
        tree_config: ctx.accounts.tree_config.key(),
        payment_mint: ctx.accounts.payment_mint.as_ref().map(|mint| mint.key()),
        price_per_mint: params.price_per_mint,
        bump: config_bump,
    })?;

    let canopy_depth = {
        let tree = &ctx.accounts.merkle_tree;
        let data = tree.try_borrow_data()?;
        validate_tree(
            params.tree_depth,
            params.tree_buffer_size,
            params.max_supply,
            tree.owner,
            &data,
        )?
    };
    msg!(
        "Binding tree {} (depth {}, buffer {}, canopy {})",
        config.merkle_tree,
        params.tree_depth,
        params.tree_buffer_size,
        canopy_depth
    );

    let bump_seed = [config_bump];
    let config_seeds: &[&[u8]] = &[CONFIG_SEED, authority_key.as_ref(), &bump_seed];
    let signer_seeds = &[config_seeds];

    // === Create the config account ===
    let space = MintConfig::space(0);
    allocate_config(&ctx, space, signer_seeds)?;

    // === Create the Bubblegum tree config (private tree, config PDA as creator) ===
    let ix = create_tree_ix(
        ctx.accounts.tree_config.key(),
        ctx.accounts.merkle_tree.key(),
        authority_key,
        ctx.accounts.config.key(),
        params.tree_depth,
        params.tree_buffer_size,
    )?;
    invoke_signed(
        &ix,
        &[
            ctx.accounts.tree_config.to_account_info(),
            ctx.accounts.merkle_tree.to_account_info(),
            ctx.accounts.authority.to_account_info(),
            ctx.accounts.config.to_account_info(),
            ctx.accounts.log_wrapper.to_account_info(),
            ctx.accounts.compression_program.to_account_info(),
            ctx.accounts.system_program.to_account_info(),
            ctx.accounts.bubblegum_program.to_account_info(),
        ],
        signer_seeds,
    )?;

    // === Write state after CPIs ===
    {
        let config_info = ctx.accounts.config.to_account_info();
        let mut data = config_info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data[..];
        config.try_serialize(&mut writer)?;
    }

    emit!(ConfigInitialized {
        config: ctx.accounts.config.key(),
        authority: authority_key,
        merkle_tree: config.merkle_tree,
        max_supply: config.max_supply,
        payment_mint: config.payment_mint,
        price_per_mint: config.price_per_mint,
    });

    Ok(())
}

/// Create the config PDA owned by this program. Handles the case where the
/// address was pre-funded, which would make a plain `create_account` fail.
fn allocate_config(ctx: &Context<Initialize>, space: usize, signer_seeds: &[&[&[u8]]]) -> Result<()> {
    let system_program = ctx.accounts.system_program.to_account_info();
    let authority = ctx.accounts.authority.to_account_info();
    let config = ctx.accounts.config.to_account_info();

    let rent = Rent::get()?.minimum_balance(space);
    let current = config.lamports();

    if current == 0 {
        return create_account(
            CpiContext::new_with_signer(
                system_program,
                CreateAccount {
                    from: authority,
                    to: config,
                },
                signer_seeds,
            ),
            rent,
            space as u64,
            &crate::ID,
        );
    }

    let top_up = rent.saturating_sub(current);
    if top_up > 0 {
        transfer(
            CpiContext::new(
                system_program.clone(),
                Transfer {
                    from: authority,
                    to: config.clone(),
                },
            ),
            top_up,
        )?;
    }
    allocate(
        CpiContext::new_with_signer(
            system_program.clone(),
            Allocate {
                account_to_allocate: config.clone(),
            },
            signer_seeds,
        ),
        space as u64,
    )?;
    assign(
        CpiContext::new_with_signer(
            system_program,
            Assign {
                account_to_assign: config,
            },
            signer_seeds,
        ),
        &crate::ID,
    )
}

//! Instruction builders for Mollusk tests
//!
//! NOTE: This is written for mollusk-svm 0.5.1 with solana-sdk 2.2
//! All imports from solana_sdk::*, not modular crates

#![allow(dead_code)]

use {
    mollusk_svm_programs_token::{associated_token, token},
    solana_sdk::{
        instruction::{AccountMeta, Instruction},
        pubkey::Pubkey,
        system_program, sysvar,
    },
};

/// Program ID - must match lib.rs
pub const PROGRAM_ID: Pubkey = solana_sdk::pubkey!("6mzCtCFSJot56m5CipBCuzmrFBmS2Vzs8D3MkVEgSqNy");

pub const BUBBLEGUM_PROGRAM_ID: Pubkey =
    solana_sdk::pubkey!("BGUMAp9Gq7iTEuizy4pqaxsTyUCBK68MDfK752saRPUY");
pub const SPL_ACCOUNT_COMPRESSION_ID: Pubkey =
    solana_sdk::pubkey!("cmtDvXumGCrqC1Age74AVPhSRVXJMd8PJS91L8KbNCK");
pub const SPL_NOOP_ID: Pubkey = solana_sdk::pubkey!("noopb9bkMVfRPU8AsbpTUg8AQkHtKwMYZiFUjNRtMmV");
pub const TOKEN_METADATA_PROGRAM_ID: Pubkey =
    solana_sdk::pubkey!("metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s");

// Anchor discriminators (first 8 bytes of sha256("global:function_name"))
// These must match the IDL/program
pub const DISCRIMINATOR_INITIALIZE: [u8; 8] = [0xaf, 0xaf, 0x6d, 0x1f, 0x0d, 0x98, 0x9b, 0xed];
pub const DISCRIMINATOR_CREATE_COLLECTION: [u8; 8] =
    [0x9c, 0xfb, 0x5c, 0x36, 0xe9, 0x02, 0x10, 0x52];
pub const DISCRIMINATOR_ADD_ALLOW_LIST: [u8; 8] = [0xf0, 0xdc, 0x43, 0xfa, 0x8a, 0x8c, 0xa0, 0x35];
pub const DISCRIMINATOR_SET_MINT_STATUS: [u8; 8] =
    [0x6c, 0x64, 0xc9, 0xdd, 0x24, 0xa3, 0x4a, 0x6e];
pub const DISCRIMINATOR_MINT_CNFT: [u8; 8] = [0xa4, 0x7e, 0x30, 0x5f, 0xb7, 0xef, 0x0d, 0xd1];

/// Borsh variant index of `MintStatus`
pub const STATUS_ACTIVE: u8 = 0;
pub const STATUS_PAUSED: u8 = 1;

/// Borsh variant index of `AuthorizationKind`
pub const AUTH_QUOTA: u8 = 0;
pub const AUTH_PAYMENT: u8 = 1;

/// Derive the mint config PDA for an authority
pub fn derive_config(authority: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"config", authority.as_ref()], &PROGRAM_ID)
}

/// Derive the Bubblegum tree config PDA
pub fn derive_tree_config(merkle_tree: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[merkle_tree.as_ref()], &BUBBLEGUM_PROGRAM_ID).0
}

/// Derive Bubblegum's collection CPI signer
pub fn derive_bubblegum_signer() -> Pubkey {
    Pubkey::find_program_address(&[b"collection_cpi"], &BUBBLEGUM_PROGRAM_ID).0
}

pub fn derive_metadata(mint: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[b"metadata", TOKEN_METADATA_PROGRAM_ID.as_ref(), mint.as_ref()],
        &TOKEN_METADATA_PROGRAM_ID,
    )
    .0
}

pub fn derive_edition(mint: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[
            b"metadata",
            TOKEN_METADATA_PROGRAM_ID.as_ref(),
            mint.as_ref(),
            b"edition",
        ],
        &TOKEN_METADATA_PROGRAM_ID,
    )
    .0
}

/// Derive the classic SPL Token ATA
pub fn derive_ata(wallet: &Pubkey, mint: &Pubkey) -> Pubkey {
    spl_associated_token_account::get_associated_token_address_with_program_id(
        wallet,
        mint,
        &token::ID,
    )
}

fn push_string(data: &mut Vec<u8>, value: &str) {
    data.extend_from_slice(&(value.len() as u32).to_le_bytes());
    data.extend_from_slice(value.as_bytes());
}

/// Build initialize instruction
///
/// Accounts:
/// 0. authority (writable, signer)
/// 1. config (writable) - PDA to create
/// 2. merkle_tree (writable)
/// 3. tree_config (writable) - Bubblegum PDA
/// 4. payment_mint (optional, PROGRAM_ID = None)
/// 5. bubblegum_program
/// 6. log_wrapper
/// 7. compression_program
/// 8. system_program
pub fn build_initialize(
    authority: Pubkey,
    merkle_tree: Pubkey,
    payment_mint: Option<Pubkey>,
    max_supply: u32,
    tree_depth: u32,
    tree_buffer_size: u32,
    price_per_mint: u64,
) -> Instruction {
    let (config, _) = derive_config(&authority);

    let mut data = DISCRIMINATOR_INITIALIZE.to_vec();
    data.extend_from_slice(&max_supply.to_le_bytes());
    data.extend_from_slice(&tree_depth.to_le_bytes());
    data.extend_from_slice(&tree_buffer_size.to_le_bytes());
    data.extend_from_slice(&price_per_mint.to_le_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(authority, true),
            AccountMeta::new(config, false),
            AccountMeta::new(merkle_tree, false),
            AccountMeta::new(derive_tree_config(&merkle_tree), false),
            AccountMeta::new_readonly(payment_mint.unwrap_or(PROGRAM_ID), false),
            AccountMeta::new_readonly(BUBBLEGUM_PROGRAM_ID, false),
            AccountMeta::new_readonly(SPL_NOOP_ID, false),
            AccountMeta::new_readonly(SPL_ACCOUNT_COMPRESSION_ID, false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data,
    }
}

/// Build create_collection instruction
///
/// Accounts:
/// 0. authority (writable, signer)
/// 1. config (writable)
/// 2. collection_mint (writable, signer)
/// 3. collection_token_account (writable)
/// 4. collection_metadata (writable)
/// 5. collection_edition (writable)
/// 6. token_program
/// 7. associated_token_program
/// 8. token_metadata_program
/// 9. system_program
/// 10. rent
pub fn build_create_collection(
    authority: Pubkey,
    config: Pubkey,
    collection_mint: Pubkey,
    name: &str,
    symbol: &str,
    uri: &str,
) -> Instruction {
    let mut data = DISCRIMINATOR_CREATE_COLLECTION.to_vec();
    push_string(&mut data, name);
    push_string(&mut data, symbol);
    push_string(&mut data, uri);

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(authority, true),
            AccountMeta::new(config, false),
            AccountMeta::new(collection_mint, true),
            AccountMeta::new(derive_ata(&config, &collection_mint), false),
            AccountMeta::new(derive_metadata(&collection_mint), false),
            AccountMeta::new(derive_edition(&collection_mint), false),
            AccountMeta::new_readonly(token::ID, false),
            AccountMeta::new_readonly(associated_token::ID, false),
            AccountMeta::new_readonly(TOKEN_METADATA_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program::id(), false),
            AccountMeta::new_readonly(sysvar::rent::id(), false),
        ],
        data,
    }
}

/// Build add_allow_list instruction
///
/// Accounts:
/// 0. authority (writable, signer)
/// 1. user
/// 2. config (writable)
/// 3. system_program
pub fn build_add_allow_list(
    authority: Pubkey,
    user: Pubkey,
    config: Pubkey,
    amount: u32,
) -> Instruction {
    let mut data = DISCRIMINATOR_ADD_ALLOW_LIST.to_vec();
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(authority, true),
            AccountMeta::new_readonly(user, false),
            AccountMeta::new(config, false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data,
    }
}

/// Build set_mint_status instruction
///
/// Accounts:
/// 0. authority (signer)
/// 1. config (writable)
pub fn build_set_mint_status(authority: Pubkey, config: Pubkey, status: u8) -> Instruction {
    let mut data = DISCRIMINATOR_SET_MINT_STATUS.to_vec();
    data.push(status);

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(authority, true),
            AccountMeta::new(config, false),
        ],
        data,
    }
}

/// Payment-path accounts for mint_cnft
#[derive(Clone, Copy, Debug)]
pub struct PaymentAccounts {
    pub mint: Pubkey,
    pub token_account: Pubkey,
    pub token_program: Pubkey,
}

/// Everything mint_cnft needs besides the payment accounts
#[derive(Clone, Copy, Debug)]
pub struct MintKeys {
    pub minter: Pubkey,
    pub authority: Pubkey,
    pub leaf_owner: Pubkey,
    pub merkle_tree: Pubkey,
    pub tree_config: Pubkey,
    pub collection_mint: Pubkey,
}

/// Build mint_cnft instruction
///
/// Accounts:
/// 0. minter (writable, signer)
/// 1. authority
/// 2. config (writable)
/// 3. leaf_owner
/// 4. merkle_tree (writable)
/// 5. tree_config (writable)
/// 6. collection_mint
/// 7. collection_metadata (writable)
/// 8. collection_edition
/// 9. bubblegum_signer
/// 10. payment_mint (optional, writable)
/// 11. payment_token_account (optional, writable)
/// 12. token_program (optional)
/// 13. log_wrapper
/// 14. compression_program
/// 15. bubblegum_program
/// 16. token_metadata_program
/// 17. system_program
pub fn build_mint_cnft(
    keys: &MintKeys,
    payment: Option<PaymentAccounts>,
    authorization: u8,
    name: &str,
    symbol: &str,
    uri: &str,
) -> Instruction {
    let (config, _) = derive_config(&keys.authority);

    let mut data = DISCRIMINATOR_MINT_CNFT.to_vec();
    push_string(&mut data, name);
    push_string(&mut data, symbol);
    push_string(&mut data, uri);
    data.push(authorization);

    // Absent optional accounts are passed as the (read-only) program id
    let payment_metas = match payment {
        Some(p) => [
            AccountMeta::new(p.mint, false),
            AccountMeta::new(p.token_account, false),
            AccountMeta::new_readonly(p.token_program, false),
        ],
        None => [
            AccountMeta::new_readonly(PROGRAM_ID, false),
            AccountMeta::new_readonly(PROGRAM_ID, false),
            AccountMeta::new_readonly(PROGRAM_ID, false),
        ],
    };
    let [payment_mint, payment_token_account, token_program] = payment_metas;

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(keys.minter, true),
            AccountMeta::new_readonly(keys.authority, false),
            AccountMeta::new(config, false),
            AccountMeta::new_readonly(keys.leaf_owner, false),
            AccountMeta::new(keys.merkle_tree, false),
            AccountMeta::new(keys.tree_config, false),
            AccountMeta::new_readonly(keys.collection_mint, false),
            AccountMeta::new(derive_metadata(&keys.collection_mint), false),
            AccountMeta::new_readonly(derive_edition(&keys.collection_mint), false),
            AccountMeta::new_readonly(derive_bubblegum_signer(), false),
            payment_mint,
            payment_token_account,
            token_program,
            AccountMeta::new_readonly(SPL_NOOP_ID, false),
            AccountMeta::new_readonly(SPL_ACCOUNT_COMPRESSION_ID, false),
            AccountMeta::new_readonly(BUBBLEGUM_PROGRAM_ID, false),
            AccountMeta::new_readonly(TOKEN_METADATA_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data,
    }
}

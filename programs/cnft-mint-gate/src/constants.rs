use anchor_lang::prelude::*;

/// PDA seed for the per-authority mint config
pub const CONFIG_SEED: &[u8] = b"config";

/// Maximum length for cNFT / collection name (bytes)
pub const MAX_NAME_LENGTH: usize = 32;

/// Maximum length for symbol (bytes)
pub const MAX_SYMBOL_LENGTH: usize = 10;

/// Maximum length for URI (bytes)
pub const MAX_URI_LENGTH: usize = 200;

/// Maximum number of allow-list grants a single config can hold.
///
/// Each grant costs 36 bytes of account data. The whole ledger is deserialized
/// onto the 32 KiB bump heap on every instruction, and borsh grows the vector
/// by doubling, so the bound keeps peak allocation well under the heap size.
pub const MAX_ALLOW_LIST_ENTRIES: usize = 128;

// ============================================================================
// External Programs
// ============================================================================

/// Metaplex Bubblegum (compressed NFT issuance)
pub const BUBBLEGUM_PROGRAM_ID: Pubkey = pubkey!("BGUMAp9Gq7iTEuizy4pqaxsTyUCBK68MDfK752saRPUY");

/// SPL Account Compression (concurrent merkle trees)
pub const SPL_ACCOUNT_COMPRESSION_ID: Pubkey =
    pubkey!("cmtDvXumGCrqC1Age74AVPhSRVXJMd8PJS91L8KbNCK");

/// SPL Noop (log wrapper used by account compression)
pub const SPL_NOOP_ID: Pubkey = pubkey!("noopb9bkMVfRPU8AsbpTUg8AQkHtKwMYZiFUjNRtMmV");

/// Bubblegum PDA seed for the collection CPI signer
pub const BUBBLEGUM_COLLECTION_CPI_SEED: &[u8] = b"collection_cpi";

/// Token Metadata PDA prefix (metadata and edition accounts)
pub const METADATA_SEED: &[u8] = b"metadata";

/// Token Metadata PDA suffix for edition accounts
pub const EDITION_SEED: &[u8] = b"edition";

/// Bubblegum PDA seed for asset ids
pub const BUBBLEGUM_ASSET_SEED: &[u8] = b"asset";

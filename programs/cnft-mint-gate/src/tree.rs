//! Concurrent merkle tree sizing rules.
//!
//! The tree account is allocated by the client (owned by SPL Account
//! Compression, zero-filled) before `initialize`. Its size is a function of
//! `(max_depth, max_buffer_size, canopy_depth)`:
//!
//! ```text
//! header            2 + 54
//! tree              24 + buffer * changelog + path
//!   changelog       32 (root) + 32 * depth + 4 (index) + 4 (padding)
//!   path            32 * depth + 32 (leaf) + 4 (index) + 4 (padding)
//! canopy            (2^(canopy + 1) - 2) * 32
//! ```

use anchor_lang::prelude::*;

use crate::constants::SPL_ACCOUNT_COMPRESSION_ID;
use crate::errors::MintGateError;

/// Account type + header version + V1 header body
pub const TREE_HEADER_SIZE: usize = 2 + 54;

const NODE_SIZE: usize = 32;

/// Largest canopy SPL Account Compression accepts
pub const MAX_CANOPY_DEPTH: u32 = 17;

/// `(max_depth, max_buffer_size)` pairs SPL Account Compression can allocate
pub const SUPPORTED_DEPTH_BUFFER_PAIRS: &[(u32, u32)] = &[
    (3, 8),
    (5, 8),
    (6, 16),
    (7, 16),
    (8, 16),
    (9, 16),
    (10, 32),
    (11, 32),
    (12, 32),
    (13, 32),
    (14, 64),
    (14, 256),
    (14, 1024),
    (14, 2048),
    (15, 64),
    (16, 64),
    (17, 64),
    (18, 64),
    (19, 64),
    (20, 64),
    (20, 256),
    (20, 1024),
    (20, 2048),
    (24, 64),
    (24, 256),
    (24, 512),
    (24, 1024),
    (24, 2048),
    (26, 512),
    (26, 1024),
    (26, 2048),
    (30, 512),
    (30, 1024),
    (30, 2048),
];

pub fn is_supported_pair(max_depth: u32, max_buffer_size: u32) -> bool {
    SUPPORTED_DEPTH_BUFFER_PAIRS.contains(&(max_depth, max_buffer_size))
}

/// Number of leaves a tree of this depth can hold
pub fn tree_capacity(max_depth: u32) -> u64 {
    1u64 << max_depth
}

/// Size of header + tree body, excluding the canopy
pub fn tree_account_size(max_depth: u32, max_buffer_size: u32) -> usize {
    let depth = max_depth as usize;
    let changelog = NODE_SIZE + NODE_SIZE * depth + 8;
    let path = NODE_SIZE * depth + NODE_SIZE + 8;
    TREE_HEADER_SIZE + 24 + max_buffer_size as usize * changelog + path
}

pub fn canopy_size(canopy_depth: u32) -> usize {
    ((1usize << (canopy_depth + 1)) - 2) * NODE_SIZE
}

/// Recover the canopy depth from the bytes left after the tree body, if they
/// form a valid canopy for a tree of `max_depth`.
pub fn canopy_depth_for(max_depth: u32, canopy_bytes: usize) -> Option<u32> {
    (0..=max_depth.min(MAX_CANOPY_DEPTH)).find(|depth| canopy_size(*depth) == canopy_bytes)
}

/// Check the requested depth/buffer against supply and the allocated account.
///
/// Returns the canopy depth implied by the account size.
pub fn validate_tree(
    max_depth: u32,
    max_buffer_size: u32,
    max_supply: u32,
    tree_owner: &Pubkey,
    tree_data: &[u8],
) -> Result<u32> {
    require!(
        is_supported_pair(max_depth, max_buffer_size),
        MintGateError::InvalidTreeParameters
    );
    require!(
        u64::from(max_supply) <= tree_capacity(max_depth),
        MintGateError::InvalidTreeParameters
    );
    require_keys_eq!(
        *tree_owner,
        SPL_ACCOUNT_COMPRESSION_ID,
        MintGateError::InvalidTreeParameters
    );

    // Header byte 0 is the account type; 0 means the tree was never initialized
    require!(
        tree_data.first() == Some(&0),
        MintGateError::InvalidTreeParameters
    );

    let canopy_bytes = tree_data
        .len()
        .checked_sub(tree_account_size(max_depth, max_buffer_size))
        .ok_or(MintGateError::InvalidTreeParameters)?;

    canopy_depth_for(max_depth, canopy_bytes).ok_or_else(|| MintGateError::InvalidTreeParameters.into())
}

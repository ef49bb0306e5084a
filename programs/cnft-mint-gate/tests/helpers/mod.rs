//! Test helpers for cNFT Mint Gate Mollusk tests
//!
//! NOTE: This module is written for mollusk-svm 0.5.1 with solana-sdk 2.2
//! - All imports from solana_sdk::* (not modular crates like solana_pubkey)
//! - Token accounts MUST have owner explicitly set to token program
//!
//! Bubblegum, SPL Account Compression and Token Metadata are not loaded, so
//! these tests cover every path that is decided before the first CPI into
//! one of them. Successful issuance is covered by the unit tests in src/.

pub mod instructions;

pub use errors::*;

use mollusk_svm::Mollusk;
use mollusk_svm_programs_token::{associated_token, token, token2022};

/// Setup Mollusk with the SPL Token, Token-2022 and ATA programs
///
/// Uses SBF_OUT_DIR to tell Mollusk where to find the program binary.
/// Tests are in programs/cnft-mint-gate/tests, the binary is at
/// workspace_root/target/deploy/
pub fn setup_mollusk() -> Mollusk {
    let deploy_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent() // programs/
        .unwrap()
        .parent() // workspace root
        .unwrap()
        .join("target/deploy");

    std::env::set_var("SBF_OUT_DIR", deploy_dir);

    let mut mollusk = Mollusk::new(&instructions::PROGRAM_ID, "cnft_mint_gate");

    token::add_program(&mut mollusk);
    token2022::add_program(&mut mollusk);
    associated_token::add_program(&mut mollusk);

    mollusk
}

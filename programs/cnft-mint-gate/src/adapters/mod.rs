//! CPI-backed implementations of the issuance seams.

pub mod bubblegum;
pub mod metadata;
pub mod token;

pub use bubblegum::BubblegumIssuer;
pub use metadata::MetadataCollectionIssuer;
pub use token::TokenBurnCollector;

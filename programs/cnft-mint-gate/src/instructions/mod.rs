#![allow(ambiguous_glob_reexports)]

pub mod add_allow_list;
pub mod create_collection;
pub mod initialize;
pub mod mint_cnft;
pub mod set_mint_status;

pub use add_allow_list::*;
pub use create_collection::*;
pub use initialize::*;
pub use mint_cnft::*;
pub use set_mint_status::*;

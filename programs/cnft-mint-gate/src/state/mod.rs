pub mod allow_list;
pub mod config;

pub use allow_list::*;
pub use config::*;

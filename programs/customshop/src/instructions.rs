pub mod initialize_shop;
pub mod update_shop_config;
pub mod create_marker;
pub mod update_owner;
pub mod update_linked_wallet;
pub mod burn_marker_and_mint;

pub use initialize_shop::*;
pub use update_shop_config::*;
pub use create_marker::*;
pub use update_owner::*;
pub use update_linked_wallet::*;
pub use burn_marker_and_mint::*;

pub mod initialize;
pub mod launch_token;
pub mod mint_tokens;
pub mod revoke_freeze_authority;
pub mod revoke_mint_authority;
pub mod set_active;
pub mod update_fee;

pub use initialize::*;
pub use launch_token::*;
pub use mint_tokens::*;
pub use revoke_freeze_authority::*;
pub use revoke_mint_authority::*;
pub use set_active::*;
pub use update_fee::*;

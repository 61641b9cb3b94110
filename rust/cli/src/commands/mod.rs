//! Command handlers for the felt CLI.
//!
//! Each submodule owns one subcommand. Handlers take explicit output
//! streams so tests can drive them with in-memory buffers.

mod cfg;
mod deal;
mod play;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::handle_play_command;

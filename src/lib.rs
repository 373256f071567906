#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod ai;
mod board;
mod common;
mod config;
mod game;
mod placement;
mod ship;
mod sim;
#[cfg(feature = "std")]
mod cli;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod session;
pub mod prelude;

pub use ai::*;
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use placement::*;
pub use ship::*;
pub use sim::*;
#[cfg(feature = "std")]
pub use cli::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV_VAR};
#[cfg(feature = "std")]
pub use session::Session;

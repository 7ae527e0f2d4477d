//! Console front end for two-player tic-tac-toe.
//!
//! The game itself lives in [`tictactoe_core`]; this crate reads commands,
//! submits them to a [`tictactoe_core::GameSession`], and prints what the
//! session reports.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod console;
pub mod input;
pub mod logging;
pub mod render;
pub mod replay;

pub use cli::{Cli, Command};
pub use config::{Config, ConfigError, PlayerNames};
pub use console::{Console, Flow};
pub use input::{ConsoleCommand, ParseCommandError};

//! Terminal front end for inception tic-tac-toe.
//!
//! # Architecture
//!
//! - [`cli`]: command-line arguments
//! - [`config`]: TOML settings with defaults
//! - [`logging`]: tracing subscriber setup
//! - [`replay`]: headless replay of a move list
//! - [`tui`]: interactive terminal UI (layout, input, rendering)
//!
//! Game rules live in [`inception_tictactoe`]; this crate only turns input
//! into board coordinates and draws the result.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod logging;
pub mod replay;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, Settings};
pub use replay::{replay, ReplayError, ReplayReport};
pub use tui::run_tui;

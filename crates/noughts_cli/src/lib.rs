//! Terminal host for the noughts tic-tac-toe engine.
//!
//! - **play**: hot-seat game over stdin/stdout, driven through
//!   [`noughts::Controller`]
//! - **eval**: one-shot evaluation of a board in compact notation
//! - **settings**: optional TOML file (`noughts.toml`)

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod eval;
pub mod input;
pub mod play;
pub mod render;
pub mod settings;

pub use cli::{Cli, Command};
pub use eval::{Evaluation, evaluate_notation};
pub use input::{Input, InputError, Numbering, parse_input};
pub use play::{Scoreboard, Session};
pub use settings::{ConfigError, DEFAULT_SETTINGS_FILE, Settings};

//! Command protocol for the virtual file system.
//!
//! This module provides:
//! - [`parse_line`] turning a whitespace-separated line into a [`Command`]
//! - [`parse_args`] for the `--sort-*` / `asc|desc` flag sublanguage
//! - [`Dispatcher`] routing commands to the [`Registry`](crate::namespace::Registry)

mod dispatcher;
pub mod listing;
mod parser;

pub use dispatcher::{Dispatcher, Outcome};
pub use parser::{parse_args, parse_line, Command, ListOptions};

use thiserror::Error;

use crate::namespace::{RegistryError, Severity};

/// Command-level errors.
///
/// The display text of each variant is the exact response line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Wrong number of tokens for the verb.
    #[error("Error: Invalid command syntax. Check `help` to get info!")]
    ArgsLength,

    /// Unrecognized sort/order token.
    #[error("Error: Invalid flags. They can be [--sort-name|--sort-created] [asc|desc].")]
    InvalidFlag,

    /// Unrecognized verb.
    #[error("Unrecognized command.")]
    UnknownCommand(String),

    /// The registry rejected the operation.
    #[error("{0}")]
    Registry(#[from] RegistryError),
}

impl CommandError {
    /// Get the presentation severity.
    pub fn severity(&self) -> Severity {
        match self {
            CommandError::Registry(e) => e.severity(),
            _ => Severity::Error,
        }
    }
}

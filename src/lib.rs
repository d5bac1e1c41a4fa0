//! Virtual File System
//!
//! An in-memory three-level namespace (users own folders, folders own
//! files) manipulated through a line-oriented command protocol.

pub mod command;
pub mod config;
pub mod datetime;
pub mod error;
pub mod help;
pub mod logging;
pub mod namespace;

pub use command::{parse_args, parse_line, Command, CommandError, Dispatcher, ListOptions, Outcome};
pub use config::Config;
pub use error::{Result, VfsError};
pub use help::{BuiltinHelp, HelpProvider, ManPageHelp};
pub use namespace::{
    File, Folder, NameValidator, Registry, RegistryError, Severity, SortKey, SortOrder, User,
};

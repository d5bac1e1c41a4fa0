//! Namespace module for the virtual file system.
//!
//! This module provides the three-level namespace and its registry:
//! - Users, each owning uniquely named folders
//! - Folders, each owning uniquely named files
//! - Name validation and sorted listing snapshots

mod file;
mod folder;
mod registry;
mod sort;
mod user;
pub mod validation;

pub use file::File;
pub use folder::Folder;
pub use registry::Registry;
pub use sort::{sort_snapshot, ParseSortError, SortKey, SortOrder, Sortable};
pub use user::User;
pub use validation::NameValidator;

use thiserror::Error;

/// How a failed operation should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The command was rejected.
    Error,
    /// The command was valid but there was nothing to act on.
    Warning,
}

/// Registry operation errors.
///
/// The display text of each variant is the exact response line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Candidate user/folder/file name contains characters outside `[A-Za-z0-9_]`.
    #[error("Error: The {0} contain invalid chars.")]
    InvalidName(String),

    /// Creation target is already present under its parent.
    #[error("Error: The {0} has already existed.")]
    AlreadyExists(String),

    /// Referenced user/folder/file is absent.
    #[error("Error: The {0} doesn't exist.")]
    NotExists(String),

    /// Description exceeds the configured limit.
    #[error("Error: The description must be at most {max} characters.")]
    DescriptionTooLong { max: usize },

    /// User owns no folders, or the folder to rename is missing.
    #[error("Warning: The {0} doesn't have any folders")]
    NoFolders(String),

    /// Folder holds no files.
    #[error("Warning: The folder is empty.")]
    EmptyFolder,
}

impl RegistryError {
    /// Get the presentation severity.
    pub fn severity(&self) -> Severity {
        match self {
            RegistryError::NoFolders(_) | RegistryError::EmptyFolder => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

//! File records.

use chrono::{DateTime, Utc};

use super::Sortable;

/// A file in a folder. Files carry metadata only, never content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    name: String,
    description: String,
    created_at: DateTime<Utc>,
    folder_name: String,
    user_name: String,
}

impl File {
    /// Create a new file stamped with the current time.
    pub(crate) fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        folder_name: impl Into<String>,
        user_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            created_at: Utc::now(),
            folder_name: folder_name.into(),
            user_name: user_name.into(),
        }
    }

    /// File name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// File description (may be empty).
    pub fn description(&self) -> &str {
        &self.description
    }

    /// When the file was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Name of the owning folder.
    pub fn folder_name(&self) -> &str {
        &self.folder_name
    }

    /// Name of the owning user.
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub(crate) fn set_folder_name(&mut self, folder_name: impl Into<String>) {
        self.folder_name = folder_name.into();
    }

    #[cfg(test)]
    pub(crate) fn set_created_at(&mut self, created_at: DateTime<Utc>) {
        self.created_at = created_at;
    }
}

impl Sortable for File {
    fn sort_name(&self) -> &str {
        &self.name
    }

    fn sort_created(&self) -> DateTime<Utc> {
        self.created_at
    }
}

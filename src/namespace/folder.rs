//! Folder containers.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use super::{File, Sortable};

/// A named container of files, keyed by file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    name: String,
    description: String,
    files: HashMap<String, File>,
    created_at: DateTime<Utc>,
    /// Owner name, kept for display only.
    user_name: String,
}

impl Folder {
    /// Create a new empty folder stamped with the current time.
    pub(crate) fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        user_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            files: HashMap::new(),
            created_at: Utc::now(),
            user_name: user_name.into(),
        }
    }

    /// Folder name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Folder description (may be empty).
    pub fn description(&self) -> &str {
        &self.description
    }

    /// When the folder was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Name of the owning user.
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// Look up a file by exact name.
    pub fn file(&self, name: &str) -> Option<&File> {
        self.files.get(name)
    }

    /// Check whether a file with this name exists.
    pub fn contains_file(&self, name: &str) -> bool {
        self.files.contains_key(name)
    }

    /// Iterate over the files in unspecified order.
    pub fn files(&self) -> impl Iterator<Item = &File> {
        self.files.values()
    }

    /// Number of files in the folder.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Whether the folder holds no files.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub(crate) fn insert_file(&mut self, file: File) {
        self.files.insert(file.name().to_string(), file);
    }

    pub(crate) fn remove_file(&mut self, name: &str) -> Option<File> {
        self.files.remove(name)
    }

    /// Rename the folder; contained files follow so their listings stay accurate.
    pub(crate) fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        for file in self.files.values_mut() {
            file.set_folder_name(self.name.as_str());
        }
    }

    #[cfg(test)]
    pub(crate) fn set_created_at(&mut self, created_at: DateTime<Utc>) {
        self.created_at = created_at;
    }

    #[cfg(test)]
    pub(crate) fn file_mut(&mut self, name: &str) -> Option<&mut File> {
        self.files.get_mut(name)
    }
}

impl Sortable for Folder {
    fn sort_name(&self) -> &str {
        &self.name
    }

    fn sort_created(&self) -> DateTime<Utc> {
        self.created_at
    }
}

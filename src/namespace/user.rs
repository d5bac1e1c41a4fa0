//! Users and their folders.

use std::collections::HashMap;

use super::Folder;

/// A named container of folders, keyed by folder name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    name: String,
    folders: HashMap<String, Folder>,
}

impl User {
    /// Create a new user with no folders.
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            folders: HashMap::new(),
        }
    }

    /// Username.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a folder by exact name.
    pub fn folder(&self, name: &str) -> Option<&Folder> {
        self.folders.get(name)
    }

    /// Check whether a folder with this name exists.
    pub fn contains_folder(&self, name: &str) -> bool {
        self.folders.contains_key(name)
    }

    /// Iterate over the folders in unspecified order.
    pub fn folders(&self) -> impl Iterator<Item = &Folder> {
        self.folders.values()
    }

    /// Number of folders owned by the user.
    pub fn folder_count(&self) -> usize {
        self.folders.len()
    }

    pub(crate) fn folder_mut(&mut self, name: &str) -> Option<&mut Folder> {
        self.folders.get_mut(name)
    }

    /// Insert a folder under its own name, returning any folder it replaced.
    pub(crate) fn insert_folder(&mut self, folder: Folder) -> Option<Folder> {
        self.folders.insert(folder.name().to_string(), folder)
    }

    pub(crate) fn remove_folder(&mut self, name: &str) -> Option<Folder> {
        self.folders.remove(name)
    }
}

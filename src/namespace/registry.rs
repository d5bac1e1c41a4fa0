//! The namespace registry: every user, folder and file in the system.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::config::RegistryConfig;

use super::{
    sort_snapshot, File, Folder, NameValidator, RegistryError, SortKey, SortOrder, User,
};

/// Root of the namespace, mapping usernames to users.
///
/// One instance is constructed at startup and handed to the dispatcher.
/// Every operation checks all of its preconditions before mutating, so a
/// failed call leaves the registry untouched.
///
/// Not thread-safe; concurrent callers must wrap it in a lock.
#[derive(Debug, Default)]
pub struct Registry {
    users: HashMap<String, User>,
    validator: NameValidator,
    config: RegistryConfig,
}

fn check_description(description: &str, max: usize) -> Result<(), RegistryError> {
    if description.chars().count() > max {
        return Err(RegistryError::DescriptionTooLong { max });
    }
    Ok(())
}

impl Registry {
    /// Create an empty registry.
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            users: HashMap::new(),
            validator: NameValidator::new(),
            config,
        }
    }

    /// Drop every user, returning the registry to its initial state.
    pub fn reset(&mut self) {
        self.users.clear();
    }

    /// Number of registered users.
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Look up a user by exact name.
    pub fn user(&self, username: &str) -> Option<&User> {
        self.users.get(username)
    }

    fn existing_user(&self, username: &str) -> Result<&User, RegistryError> {
        self.users
            .get(username)
            .ok_or_else(|| RegistryError::NotExists(username.to_string()))
    }

    fn existing_user_mut(&mut self, username: &str) -> Result<&mut User, RegistryError> {
        self.users
            .get_mut(username)
            .ok_or_else(|| RegistryError::NotExists(username.to_string()))
    }

    /// Register a new user.
    ///
    /// Validity is checked before existence.
    pub fn register(&mut self, username: &str) -> Result<(), RegistryError> {
        self.validator.validate(username)?;
        if self.users.contains_key(username) {
            return Err(RegistryError::AlreadyExists(username.to_string()));
        }

        self.users.insert(username.to_string(), User::new(username));
        info!(user = username, "registered user");
        Ok(())
    }

    /// Create a folder owned by `username`.
    pub fn create_folder(
        &mut self,
        username: &str,
        foldername: &str,
        description: &str,
    ) -> Result<(), RegistryError> {
        let validator = self.validator;
        let max = self.config.max_description_length;
        let user = self.existing_user_mut(username)?;

        validator.validate(foldername)?;
        if user.contains_folder(foldername) {
            return Err(RegistryError::AlreadyExists(foldername.to_string()));
        }
        check_description(description, max)?;

        user.insert_folder(Folder::new(foldername, description, username));
        info!(user = username, folder = foldername, "created folder");
        Ok(())
    }

    /// Delete a folder together with all of its files.
    pub fn delete_folder(&mut self, username: &str, foldername: &str) -> Result<(), RegistryError> {
        let user = self.existing_user_mut(username)?;
        user.remove_folder(foldername)
            .ok_or_else(|| RegistryError::NotExists(foldername.to_string()))?;

        info!(user = username, folder = foldername, "deleted folder");
        Ok(())
    }

    /// Rename a folder.
    ///
    /// A missing source folder is reported as `NoFolders`. The target name
    /// is not checked for collisions: an existing folder with that name is
    /// replaced. Renaming a folder to its own name leaves it in place.
    pub fn rename_folder(
        &mut self,
        username: &str,
        old_name: &str,
        new_name: &str,
    ) -> Result<(), RegistryError> {
        let validator = self.validator;
        let user = self.existing_user_mut(username)?;

        if !user.contains_folder(old_name) {
            return Err(RegistryError::NoFolders(old_name.to_string()));
        }
        validator.validate(new_name)?;

        if old_name == new_name {
            return Ok(());
        }

        let Some(mut folder) = user.remove_folder(old_name) else {
            return Err(RegistryError::NoFolders(old_name.to_string()));
        };
        folder.set_name(new_name);
        if let Some(replaced) = user.insert_folder(folder) {
            warn!(
                user = username,
                folder = new_name,
                dropped_files = replaced.file_count(),
                "rename replaced an existing folder"
            );
        }

        info!(user = username, from = old_name, to = new_name, "renamed folder");
        Ok(())
    }

    /// Sorted snapshot of a user's folders.
    pub fn list_folders(
        &self,
        username: &str,
        sort_by: SortKey,
        order: SortOrder,
    ) -> Result<Vec<&Folder>, RegistryError> {
        let user = self.existing_user(username)?;
        if user.folder_count() == 0 {
            return Err(RegistryError::NoFolders(username.to_string()));
        }

        let mut folders: Vec<&Folder> = user.folders().collect();
        debug!(user = username, sort_by = %sort_by, order = %order, "listing folders");
        sort_snapshot(&mut folders, sort_by, order);
        Ok(folders)
    }

    /// Create a file in a user's folder.
    pub fn create_file(
        &mut self,
        username: &str,
        foldername: &str,
        filename: &str,
        description: &str,
    ) -> Result<(), RegistryError> {
        let validator = self.validator;
        let max = self.config.max_description_length;
        let folder = self
            .existing_user_mut(username)?
            .folder_mut(foldername)
            .ok_or_else(|| RegistryError::NotExists(foldername.to_string()))?;

        validator.validate(filename)?;
        if folder.contains_file(filename) {
            return Err(RegistryError::AlreadyExists(filename.to_string()));
        }
        check_description(description, max)?;

        folder.insert_file(File::new(filename, description, foldername, username));
        info!(
            user = username,
            folder = foldername,
            file = filename,
            "created file"
        );
        Ok(())
    }

    /// Delete a file from a user's folder.
    pub fn delete_file(
        &mut self,
        username: &str,
        foldername: &str,
        filename: &str,
    ) -> Result<(), RegistryError> {
        self.existing_user_mut(username)?
            .folder_mut(foldername)
            .ok_or_else(|| RegistryError::NotExists(foldername.to_string()))?
            .remove_file(filename)
            .ok_or_else(|| RegistryError::NotExists(filename.to_string()))?;

        info!(
            user = username,
            folder = foldername,
            file = filename,
            "deleted file"
        );
        Ok(())
    }

    /// Sorted snapshot of the files in a user's folder.
    pub fn list_files(
        &self,
        username: &str,
        foldername: &str,
        sort_by: SortKey,
        order: SortOrder,
    ) -> Result<Vec<&File>, RegistryError> {
        let folder = self
            .existing_user(username)?
            .folder(foldername)
            .ok_or_else(|| RegistryError::NotExists(foldername.to_string()))?;
        if folder.is_empty() {
            return Err(RegistryError::EmptyFolder);
        }

        let mut files: Vec<&File> = folder.files().collect();
        debug!(
            user = username,
            folder = foldername,
            sort_by = %sort_by,
            order = %order,
            "listing files"
        );
        sort_snapshot(&mut files, sort_by, order);
        Ok(files)
    }

    #[cfg(test)]
    pub(crate) fn folder_mut(&mut self, username: &str, foldername: &str) -> Option<&mut Folder> {
        self.users.get_mut(username)?.folder_mut(foldername)
    }
}

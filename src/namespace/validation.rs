//! Name validation for users, folders and files.

use super::RegistryError;

/// Check whether a character may appear in a name.
fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Validator applied uniformly to usernames, folder names and file names.
///
/// A name is valid iff it is non-empty and consists only of ASCII letters,
/// digits and underscores. No length limit is enforced.
///
/// # Examples
///
/// ```
/// use vfs_registry::namespace::NameValidator;
///
/// let validator = NameValidator::new();
/// assert!(validator.is_valid("folder_1"));
/// assert!(!validator.is_valid("fo[]er1"));
/// assert!(!validator.is_valid(""));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NameValidator;

impl NameValidator {
    /// Create a new NameValidator.
    pub fn new() -> Self {
        Self
    }

    /// Check whether `name` is syntactically legal.
    pub fn is_valid(&self, name: &str) -> bool {
        !name.is_empty() && name.chars().all(is_name_char)
    }

    /// Validate `name`, returning `InvalidName` when it is not legal.
    pub fn validate(&self, name: &str) -> Result<(), RegistryError> {
        if self.is_valid(name) {
            Ok(())
        } else {
            Err(RegistryError::InvalidName(name.to_string()))
        }
    }
}

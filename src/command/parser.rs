//! Command line parser.

use crate::namespace::{SortKey, SortOrder};

use super::CommandError;

/// Sort options for the listing verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListOptions {
    /// Sort key (default: name).
    pub sort_by: SortKey,
    /// Sort order (default: asc).
    pub order: SortOrder,
}

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `register <username>`
    Register { username: String },
    /// `create-folder <username> <foldername> [description]`
    CreateFolder {
        username: String,
        foldername: String,
        description: String,
    },
    /// `delete-folder <username> <foldername>`
    DeleteFolder { username: String, foldername: String },
    /// `list-folders <username> [flags...]`
    ListFolders {
        username: String,
        options: ListOptions,
    },
    /// `rename-folder <username> <old-folder> <new-folder>`
    RenameFolder {
        username: String,
        old_name: String,
        new_name: String,
    },
    /// `create-file <username> <foldername> <filename> [description]`
    CreateFile {
        username: String,
        foldername: String,
        filename: String,
        description: String,
    },
    /// `delete-file <username> <foldername> <filename>`
    DeleteFile {
        username: String,
        foldername: String,
        filename: String,
    },
    /// `list-files <username> <foldername> [flags...]`
    ListFiles {
        username: String,
        foldername: String,
        options: ListOptions,
    },
    /// `help`
    Help,
    /// `exit`
    Exit,
}

impl Command {
    /// Get the verb that produced this command.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Register { .. } => "register",
            Command::CreateFolder { .. } => "create-folder",
            Command::DeleteFolder { .. } => "delete-folder",
            Command::ListFolders { .. } => "list-folders",
            Command::RenameFolder { .. } => "rename-folder",
            Command::CreateFile { .. } => "create-file",
            Command::DeleteFile { .. } => "delete-file",
            Command::ListFiles { .. } => "list-files",
            Command::Help => "help",
            Command::Exit => "exit",
        }
    }
}

/// Parse the listing flag sublanguage.
///
/// Accepts any combination of `--sort-name`, `--sort-created`, `asc` and
/// `desc`; a later flag of the same kind overrides an earlier one. No
/// tokens yields the defaults (name, asc).
///
/// # Examples
///
/// ```
/// use vfs_registry::command::{parse_args, CommandError};
/// use vfs_registry::namespace::{SortKey, SortOrder};
///
/// let options = parse_args(&["--sort-created", "desc"]).unwrap();
/// assert_eq!(options.sort_by, SortKey::Created);
/// assert_eq!(options.order, SortOrder::Desc);
///
/// assert_eq!(parse_args(&["--bogus"]), Err(CommandError::InvalidFlag));
/// ```
pub fn parse_args<S: AsRef<str>>(tokens: &[S]) -> Result<ListOptions, CommandError> {
    let mut options = ListOptions::default();

    for token in tokens {
        let token = token.as_ref();
        match token.strip_prefix("--sort-") {
            Some(key) => {
                options.sort_by = key
                    .parse::<SortKey>()
                    .map_err(|_| CommandError::InvalidFlag)?;
            }
            None => {
                options.order = token
                    .parse::<SortOrder>()
                    .map_err(|_| CommandError::InvalidFlag)?;
            }
        }
    }

    Ok(options)
}

fn check_arity(parts: &[&str], min: usize, max: Option<usize>) -> Result<(), CommandError> {
    let n = parts.len();
    if n < min || max.is_some_and(|max| n > max) {
        return Err(CommandError::ArgsLength);
    }
    Ok(())
}

fn optional(parts: &[&str], index: usize) -> String {
    parts.get(index).map(|s| s.to_string()).unwrap_or_default()
}

/// Parse an input line.
///
/// Returns `Ok(None)` for a blank line. Token counts below include the verb.
pub fn parse_line(input: &str) -> Result<Option<Command>, CommandError> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    let Some(&verb) = parts.first() else {
        return Ok(None);
    };

    let command = match verb {
        "register" => {
            check_arity(&parts, 2, Some(2))?;
            Command::Register {
                username: parts[1].to_string(),
            }
        }
        "create-folder" => {
            check_arity(&parts, 3, Some(4))?;
            Command::CreateFolder {
                username: parts[1].to_string(),
                foldername: parts[2].to_string(),
                description: optional(&parts, 3),
            }
        }
        "delete-folder" => {
            check_arity(&parts, 3, Some(3))?;
            Command::DeleteFolder {
                username: parts[1].to_string(),
                foldername: parts[2].to_string(),
            }
        }
        "list-folders" => {
            check_arity(&parts, 2, None)?;
            Command::ListFolders {
                username: parts[1].to_string(),
                options: parse_args(&parts[2..])?,
            }
        }
        "rename-folder" => {
            check_arity(&parts, 4, Some(4))?;
            Command::RenameFolder {
                username: parts[1].to_string(),
                old_name: parts[2].to_string(),
                new_name: parts[3].to_string(),
            }
        }
        "create-file" => {
            check_arity(&parts, 4, Some(5))?;
            Command::CreateFile {
                username: parts[1].to_string(),
                foldername: parts[2].to_string(),
                filename: parts[3].to_string(),
                description: optional(&parts, 4),
            }
        }
        "delete-file" => {
            check_arity(&parts, 4, Some(4))?;
            Command::DeleteFile {
                username: parts[1].to_string(),
                foldername: parts[2].to_string(),
                filename: parts[3].to_string(),
            }
        }
        "list-files" => {
            check_arity(&parts, 3, None)?;
            Command::ListFiles {
                username: parts[1].to_string(),
                foldername: parts[2].to_string(),
                options: parse_args(&parts[3..])?,
            }
        }
        "help" => Command::Help,
        "exit" => Command::Exit,
        _ => return Err(CommandError::UnknownCommand(verb.to_string())),
    };

    Ok(Some(command))
}

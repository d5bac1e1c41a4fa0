//! Command dispatcher.

use std::io::{self, Write};

use tracing::debug;

use crate::config::DisplayConfig;
use crate::namespace::Registry;

use super::listing::{format_file, format_folder};
use super::{parse_line, Command, CommandError};

/// Result of executing one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Blank input; nothing to report.
    Empty,
    /// Success lines for the output channel.
    Output(Vec<String>),
    /// Error or warning for the error channel.
    Failed(CommandError),
    /// The caller should show help text.
    Help,
    /// The caller should say goodbye and stop.
    Exit,
}

impl Outcome {
    /// Write success lines to `out` and failures to `err`, one line each.
    ///
    /// `Help` and `Exit` produce nothing here; they are the caller's to handle.
    pub fn render<W: Write, E: Write>(&self, out: &mut W, err: &mut E) -> io::Result<()> {
        match self {
            Outcome::Output(lines) => {
                for line in lines {
                    writeln!(out, "{line}")?;
                }
            }
            Outcome::Failed(e) => writeln!(err, "{e}")?,
            Outcome::Empty | Outcome::Help | Outcome::Exit => {}
        }
        Ok(())
    }
}

/// Routes parsed commands to registry operations and formats the responses.
///
/// Stateless between commands apart from the registry it owns.
#[derive(Debug, Default)]
pub struct Dispatcher {
    registry: Registry,
    display: DisplayConfig,
}

impl Dispatcher {
    /// Create a dispatcher over `registry`.
    pub fn new(registry: Registry, display: DisplayConfig) -> Self {
        Self { registry, display }
    }

    /// The underlying registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Mutable access to the underlying registry.
    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Parse and execute one input line.
    pub fn execute(&mut self, input: &str) -> Outcome {
        match parse_line(input) {
            Ok(None) => Outcome::Empty,
            Ok(Some(command)) => self.run(command),
            Err(e) => {
                debug!(input, error = %e, "rejected command line");
                Outcome::Failed(e)
            }
        }
    }

    /// Execute a parsed command.
    pub fn run(&mut self, command: Command) -> Outcome {
        debug!(command = command.name(), "dispatching");
        match command {
            Command::Help => Outcome::Help,
            Command::Exit => Outcome::Exit,
            command => match self.apply(command) {
                Ok(lines) => Outcome::Output(lines),
                Err(e) => Outcome::Failed(e),
            },
        }
    }

    fn apply(&mut self, command: Command) -> Result<Vec<String>, CommandError> {
        let registry = &mut self.registry;
        let line = match command {
            Command::Register { username } => {
                registry.register(&username)?;
                format!("Add {username} successfully.")
            }
            Command::CreateFolder {
                username,
                foldername,
                description,
            } => {
                registry.create_folder(&username, &foldername, &description)?;
                format!("Create {foldername} successfully.")
            }
            Command::DeleteFolder {
                username,
                foldername,
            } => {
                registry.delete_folder(&username, &foldername)?;
                format!("Delete {foldername} successfully.")
            }
            Command::RenameFolder {
                username,
                old_name,
                new_name,
            } => {
                registry.rename_folder(&username, &old_name, &new_name)?;
                format!("Rename {old_name} to {new_name} successfully.")
            }
            Command::CreateFile {
                username,
                foldername,
                filename,
                description,
            } => {
                registry.create_file(&username, &foldername, &filename, &description)?;
                format!("Create {filename} in {username}/{foldername} successfully.")
            }
            Command::DeleteFile {
                username,
                foldername,
                filename,
            } => {
                registry.delete_file(&username, &foldername, &filename)?;
                format!("Delete {filename} in {username}/{foldername} successfully.")
            }
            Command::ListFolders { username, options } => {
                let folders = registry.list_folders(&username, options.sort_by, options.order)?;
                return Ok(folders
                    .into_iter()
                    .map(|folder| format_folder(folder, &self.display))
                    .collect());
            }
            Command::ListFiles {
                username,
                foldername,
                options,
            } => {
                let files =
                    registry.list_files(&username, &foldername, options.sort_by, options.order)?;
                return Ok(files
                    .into_iter()
                    .map(|file| format_file(file, &self.display))
                    .collect());
            }
            Command::Help | Command::Exit => return Ok(Vec::new()),
        };
        Ok(vec![line])
    }
}

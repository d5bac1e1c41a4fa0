//! Help text providers.
//!
//! `help` (and `-h`/`--help` on the command line) is served by a
//! [`HelpProvider`]: either the built-in usage table or a man page.

use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

use crate::config::HelpConfig;
use crate::{Result, VfsError};

/// Source of multi-line usage text.
pub trait HelpProvider {
    /// Render the help text into `out`.
    fn show(&self, out: &mut dyn Write) -> Result<()>;
}

/// Command information for help display.
pub struct CommandInfo {
    /// Command syntax.
    pub syntax: &'static str,
    /// Command description.
    pub description: &'static str,
}

/// Get all available command information.
pub fn get_command_help() -> Vec<CommandInfo> {
    vec![
        CommandInfo {
            syntax: "register <username>",
            description: "Register a new user",
        },
        CommandInfo {
            syntax: "create-folder <username> <foldername> [description]",
            description: "Create a folder owned by a user",
        },
        CommandInfo {
            syntax: "delete-folder <username> <foldername>",
            description: "Delete a folder and every file in it",
        },
        CommandInfo {
            syntax: "list-folders <username> [--sort-name|--sort-created] [asc|desc]",
            description: "List a user's folders (default: --sort-name asc)",
        },
        CommandInfo {
            syntax: "rename-folder <username> <old-folder> <new-folder>",
            description: "Rename a folder",
        },
        CommandInfo {
            syntax: "create-file <username> <foldername> <filename> [description]",
            description: "Create a file in a folder",
        },
        CommandInfo {
            syntax: "delete-file <username> <foldername> <filename>",
            description: "Delete a file from a folder",
        },
        CommandInfo {
            syntax: "list-files <username> <foldername> [--sort-name|--sort-created] [asc|desc]",
            description: "List the files in a folder (default: --sort-name asc)",
        },
        CommandInfo {
            syntax: "help",
            description: "Show this help",
        },
        CommandInfo {
            syntax: "exit",
            description: "Leave the program",
        },
    ]
}

/// Format the built-in help message.
pub fn format_help() -> String {
    let mut lines = Vec::new();
    lines.push("=== Virtual File System ===".to_string());
    lines.push(String::new());
    lines.push("Names may contain only letters, digits and underscores.".to_string());
    lines.push(String::new());

    for info in get_command_help() {
        lines.push(info.syntax.to_string());
        lines.push(format!("  {}", info.description));
    }

    lines.join("\n")
}

/// Help rendered from the built-in command table.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinHelp;

impl HelpProvider for BuiltinHelp {
    fn show(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", format_help())?;
        Ok(())
    }
}

/// Help rendered by the system `man` command from a page on disk.
#[derive(Debug, Clone)]
pub struct ManPageHelp {
    page: PathBuf,
}

impl ManPageHelp {
    /// Create a provider for the given man page.
    pub fn new(page: impl Into<PathBuf>) -> Self {
        Self { page: page.into() }
    }
}

impl HelpProvider for ManPageHelp {
    fn show(&self, out: &mut dyn Write) -> Result<()> {
        let output = Command::new("man")
            .arg(&self.page)
            .env("MANPAGER", "cat")
            .output()
            .map_err(|e| VfsError::Help(format!("could not run 'man': {e}")))?;

        if !output.status.success() {
            return Err(VfsError::Help(format!(
                "'man {}' failed: {}",
                self.page.display(),
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        out.write_all(&output.stdout)?;
        Ok(())
    }
}

/// Choose the help provider described by the configuration.
pub fn from_config(config: &HelpConfig) -> Box<dyn HelpProvider> {
    match &config.man_page {
        Some(page) => Box::new(ManPageHelp::new(page)),
        None => Box::new(BuiltinHelp),
    }
}

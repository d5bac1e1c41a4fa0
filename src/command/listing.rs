//! Response line formatting.

use crate::config::DisplayConfig;
use crate::datetime::format_created;
use crate::namespace::{File, Folder};

/// Format a folder listing line: `name description created username`.
pub fn format_folder(folder: &Folder, display: &DisplayConfig) -> String {
    format!(
        "{} {} {} {}",
        folder.name(),
        folder.description(),
        format_created(&folder.created_at(), display),
        folder.user_name()
    )
}

/// Format a file listing line: `name description created foldername username`.
pub fn format_file(file: &File, display: &DisplayConfig) -> String {
    format!(
        "{} {} {} {} {}",
        file.name(),
        file.description(),
        format_created(&file.created_at(), display),
        file.folder_name(),
        file.user_name()
    )
}

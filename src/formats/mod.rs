//! Output sinks for generated events.

pub mod json;
pub mod text;

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;

/// Opens `path` for appending, creating it and its parent directories.
pub fn open_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}

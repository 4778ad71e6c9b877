//! Locations of the files Dasher reads and writes under `~/.dasher/`.

use std::fs;
use std::io;
use std::path::PathBuf;

/// Get the ~/.dasher/ directory path, creating it if needed.
pub fn dasher_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(".dasher");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a file in ~/.dasher/.
pub fn data_path(filename: &str) -> io::Result<PathBuf> {
    Ok(dasher_dir()?.join(filename))
}

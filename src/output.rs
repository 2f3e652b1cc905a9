//! Write-then-replace for the generated module.
//!
//! The contents go to a temp file in the destination directory first, so the
//! final rename never crosses filesystems and the destination is only touched
//! once everything is on disk.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

fn parent_dir_or_dot(path: &Path) -> &Path {
    // `Path::parent` is `Some("")` for a bare file name
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}

/// Replace `dest` with `contents`.
///
/// On error before the final rename the temp file is removed and `dest` is
/// left as it was.
pub fn write_atomically(dest: &Path, contents: &[u8]) -> io::Result<()> {
    let dir = parent_dir_or_dot(dest);
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;

    tmp.persist(dest).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("units.rs");
        fs::write(&dest, "old").unwrap();

        write_atomically(&dest, b"new").unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "new");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_creates_missing_parent() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("generated").join("units.rs");

        write_atomically(&dest, "°C".as_bytes()).unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "°C");
    }

    #[test]
    fn test_failed_persist_keeps_destination() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be replaced by a file
        let dest = dir.path().join("units.rs");
        fs::create_dir(&dest).unwrap();
        fs::write(dest.join("keep"), "x").unwrap();

        assert!(write_atomically(&dest, b"new").is_err());
        assert!(dest.join("keep").exists());
        // Only the destination directory remains, no stray temp file
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}

//! Atomic file replacement.
//!
//! 1. Write content to `.{filename}.tmp` in the same directory
//! 2. Sync the temporary file to disk
//! 3. Rename it over the target
//!
//! The rename is atomic when source and destination share a filesystem, which
//! holds because the temporary file lives next to the target. After a crash
//! the target holds either the old or the new content; a stale `.tmp` file may
//! remain and is overwritten by the next write.

use crate::error::{PhyslockError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically replace `path` with `content`.
///
/// Missing parent directories are created.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|source| PhyslockError::Open {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let temp_path = generate_temp_path(path)?;
    write_and_sync(&temp_path, content)?;

    fs::rename(&temp_path, path).map_err(|source| {
        let _ = fs::remove_file(&temp_path);
        PhyslockError::Write {
            path: path.to_path_buf(),
            source,
        }
    })?;

    // Persist the directory entry too.
    if let Some(parent) = path.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }

    Ok(())
}

/// Temporary file path in the same directory as the target.
fn generate_temp_path(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| PhyslockError::State(format!("invalid file path '{}'", target.display())))?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|source| PhyslockError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    file.write_all(content)
        .and_then(|()| file.sync_all())
        .map_err(|source| {
            let _ = fs::remove_file(path);
            PhyslockError::Write {
                path: path.to_path_buf(),
                source,
            }
        })
}

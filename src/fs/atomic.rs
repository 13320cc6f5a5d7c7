//! Atomic config file writes.
//!
//! Test environments often point a running daemon at a config file and
//! rewrite it between cases. Writes go to a temporary sibling file, are
//! synced, and then renamed over the target so a reader never observes a
//! half-written config.
//!
//! Source and destination must be on the same filesystem for the rename to
//! be atomic. On crash a `.{filename}.{suffix}.tmp` file may remain.

use crate::error::{Result, TestCfgError};
use crate::random::gen_random_str;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Length of the random suffix on temporary file names.
const TEMP_SUFFIX_LEN: usize = 8;

/// Atomically write bytes to a file, creating parent directories as needed.
///
/// The content goes to a temporary file in the target's directory, is
/// synced to disk, then renamed over the target. Readers see either the
/// old file or the new one, never a partial write.
///
/// # Arguments
///
/// * `path` - The target file path
/// * `content` - The bytes to write
///
/// # Returns
///
/// * `Ok(())` - On successful atomic write
/// * `Err(TestCfgError::UserError)` - On directory creation, write, or rename failure
///
/// # Example
///
/// ```no_run
/// use openr_testcfg::fs::atomic_write;
/// use std::path::Path;
///
/// atomic_write(Path::new("openr.yaml"), b"node_name: node-1\n")?;
/// # Ok::<(), openr_testcfg::error::TestCfgError>(())
/// ```
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            TestCfgError::UserError(format!(
                "failed to create parent directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = generate_temp_path(path)?;
    write_and_sync(&temp_path, content)?;
    replace(&temp_path, path)
}

/// Atomically write a string to a file. See [`atomic_write`].
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Temporary path next to the target. The random suffix keeps concurrent
/// writers of the same target from clobbering each other's temp file.
fn generate_temp_path(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            TestCfgError::UserError(format!("invalid file path '{}'", target.display()))
        })?;

    let temp_name = format!(".{}.{}.tmp", filename, gen_random_str(TEMP_SUFFIX_LEN));
    Ok(parent.join(temp_name))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        TestCfgError::UserError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let written = file.write_all(content).and_then(|()| file.sync_all());
    if let Err(e) = written {
        let _ = fs::remove_file(path);
        return Err(TestCfgError::UserError(format!(
            "failed to write temporary file '{}': {}",
            path.display(),
            e
        )));
    }

    Ok(())
}

fn replace(source: &Path, target: &Path) -> Result<()> {
    // rename() replaces an existing target on POSIX and on Windows (MoveFileEx
    // with MOVEFILE_REPLACE_EXISTING under the hood).
    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        TestCfgError::UserError(format!(
            "failed to atomically replace '{}': {}",
            target.display(),
            e
        ))
    })
}

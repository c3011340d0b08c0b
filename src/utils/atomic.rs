//! Atomic file replacement.
//!
//! A save either lands completely or leaves the previous document in place:
//! the content goes to a temp file in the target's directory, which is then
//! renamed over the target. The temp file is removed if any step fails.

use std::io;
use std::path::Path;
use tempfile::NamedTempFile;

/// Replace `path` with `content` in a single rename.
///
/// The parent directory is created when missing.
///
/// # Errors
///
/// Returns an `io::Error` when the path has no parent, the temp file cannot
/// be created or written, or the final rename fails.
pub async fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Path has no parent directory"))?
        .to_path_buf();
    let target_path = path.to_path_buf();
    let bytes = content.as_bytes().to_vec();

    tokio::task::spawn_blocking(move || -> io::Result<()> {
        use std::io::Write;

        std::fs::create_dir_all(&parent)?;
        let mut temp_file = NamedTempFile::new_in(&parent)?;
        temp_file.write_all(&bytes)?;
        temp_file.as_file().sync_all()?;
        temp_file.persist(&target_path).map_err(|e| e.error)?;
        Ok(())
    })
    .await
    .map_err(io::Error::other)?
}

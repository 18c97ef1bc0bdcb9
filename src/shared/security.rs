use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum report size accepted by the readers (64 MB)
pub const MAX_REPORT_SIZE: u64 = 64 * 1024 * 1024;

/// Checks that `path` is a regular file that may be read.
///
/// Uses `symlink_metadata()` so the link itself is inspected rather than its target.
///
/// # Errors
/// Returns an error if the path cannot be inspected, is a symbolic link,
/// is not a regular file, or is larger than `max_size` bytes.
pub fn validate_readable_file(path: &Path, description: &str, max_size: u64) -> Result<()> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    if metadata.len() > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            metadata.len(),
            max_size
        );
    }

    Ok(())
}

/// Rejects an output path that already exists as a symbolic link.
pub fn validate_not_symlink(path: &Path) -> Result<()> {
    if let Ok(metadata) = fs::symlink_metadata(path) {
        if metadata.is_symlink() {
            anyhow::bail!(
                "Security: {} is a symbolic link. For security reasons, writing to symbolic links is not allowed.",
                path.display()
            );
        }
    }
    Ok(())
}

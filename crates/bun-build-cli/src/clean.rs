//! Output directory cleaning.

use crate::error::{CliError, Result, ResultExt};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Empty `out_dir`, keeping the directory itself.
///
/// Every entry underneath it, hidden ones included, is collected and removed
/// longest path first so children go before their parents. An entry that is
/// already gone is skipped, which makes the operation idempotent: a clean or
/// missing directory is a no-op.
///
/// # Errors
///
/// Fails if `out_dir` exists but is not a directory, or if a removal fails
/// for any reason other than the entry being absent.
pub async fn clean_output_dir(out_dir: &Path) -> Result<()> {
    if !out_dir.exists() {
        tracing::debug!("Output directory {} does not exist", out_dir.display());
        return Ok(());
    }

    if !out_dir.is_dir() {
        return Err(CliError::InvalidArgument(format!(
            "Output path exists but is not a directory: {}",
            out_dir.display()
        )));
    }

    let mut entries = collect_entries(out_dir);
    entries.sort_by(|a, b| {
        b.as_os_str()
            .len()
            .cmp(&a.as_os_str().len())
            .then_with(|| a.cmp(b))
    });

    for path in &entries {
        remove_entry(path).await?;
    }

    tracing::debug!("Removed {} entries from {}", entries.len(), out_dir.display());
    Ok(())
}

fn collect_entries(out_dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(out_dir)
        .min_depth(1)
        .into_iter()
        // Entries vanishing mid-walk are fine; they no longer need removing
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.into_path())
        .collect()
}

async fn remove_entry(path: &Path) -> Result<()> {
    let metadata = match tokio::fs::symlink_metadata(path).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e.into()),
    };

    let removal = if metadata.is_dir() {
        tokio::fs::remove_dir_all(path).await
    } else {
        tokio::fs::remove_file(path).await
    };

    match removal {
        Err(e) if e.kind() != ErrorKind::NotFound => {
            Err(e).context(format!("Failed to remove {}", path.display()))
        }
        _ => Ok(()),
    }
}

use crate::error::{Result, SchildkroeteError};
use std::path::{Path, PathBuf};

/// Discovers the git repository root enclosing `start_dir`.
///
/// Walks up through ancestor directories until one contains a `.git` entry
/// and returns the nearest such ancestor. A worktree checkout has a `.git`
/// file rather than a directory; either kind marks the root.
pub fn find_repository_root(start_dir: &Path) -> Result<PathBuf> {
    let mut current = start_dir;

    loop {
        if current.join(".git").exists() {
            log::debug!("Found repository root at: {}", current.display());
            return Ok(current.to_path_buf());
        }

        // Each step drops one path component, so the walk always terminates.
        current = match current.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => {
                return Err(SchildkroeteError::RepositoryNotFound {
                    path: start_dir.to_path_buf(),
                })
            }
        };
    }
}

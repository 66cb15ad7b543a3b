use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A repository-shaped directory tree: a temp dir with a `.git` marker at
/// the top, plus whatever nested structure a test asks for.
pub struct TestRepo {
    temp_dir: TempDir,
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRepo {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join(".git")).unwrap();
        Self { temp_dir }
    }

    /// Worktree-style checkout whose `.git` marker is a file, not a directory.
    pub fn new_worktree() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(".git"),
            "gitdir: /tmp/shared/.git/worktrees/wt\n",
        )
        .unwrap();
        Self { temp_dir }
    }

    /// Bare directory tree with no marker anywhere.
    pub fn new_unversioned() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Creates (and returns) a subdirectory below the root.
    pub fn subdir(&self, rel: &str) -> PathBuf {
        let dir = self.temp_dir.path().join(rel);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Creates (and returns) a file below the root.
    pub fn file(&self, rel: &str) -> PathBuf {
        let path = self.temp_dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, "contents").unwrap();
        path
    }

    /// Creates a nested repository below this one and returns its root.
    pub fn nested_repo(&self, rel: &str) -> PathBuf {
        let root = self.subdir(rel);
        fs::create_dir(root.join(".git")).unwrap();
        root
    }
}

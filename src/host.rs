use crate::error::Result;
use std::path::PathBuf;

/// Read-only view of the environment an action runs in.
///
/// Everything an action needs from its host travels through this one
/// context object rather than process-wide state.
pub trait HostContext {
    /// Directory repository discovery starts from.
    fn working_directory(&self) -> Result<PathBuf>;

    /// The file the user is acting on, if any.
    fn active_file(&self) -> Option<PathBuf>;

    /// Every file the host currently has open.
    fn open_files(&self) -> Vec<PathBuf>;
}

/// Host context assembled from command-line arguments.
#[derive(Debug, Clone, Default)]
pub struct CliHost {
    pub dir: Option<PathBuf>,
    pub file: Option<PathBuf>,
    pub open: Vec<PathBuf>,
}

impl HostContext for CliHost {
    /// `--dir` if given, else the active file's parent, else the process
    /// working directory.
    fn working_directory(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.dir {
            return Ok(dir.clone());
        }

        if let Some(parent) = self.file.as_deref().and_then(|file| file.parent()) {
            if !parent.as_os_str().is_empty() {
                return Ok(parent.to_path_buf());
            }
        }

        Ok(std::env::current_dir()?)
    }

    fn active_file(&self) -> Option<PathBuf> {
        self.file.clone()
    }

    fn open_files(&self) -> Vec<PathBuf> {
        self.open.clone()
    }
}

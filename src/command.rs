use std::fmt;
use std::path::{Path, PathBuf};

/// Which set of files a source-control verb applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecMode {
    /// Every open file that belongs to the repository.
    AllOpenFiles,
    /// The single active file.
    SingleFile,
    /// The whole repository.
    AllFiles,
}

/// A TortoiseGitProc verb paired with the file set it applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub verb: &'static str,
    pub mode: ExecMode,
}

/// A fully assembled TortoiseGitProc invocation.
///
/// `Display` renders the exact command line handed to the tool:
///
/// ```text
/// <tool> /command:<verb> /path:"<pathArgument>" /closeonend:2
/// ```
///
/// Paths inside the path argument are not escaped, so a path containing a
/// double quote renders a malformed command line. TortoiseGitProc takes
/// multiple paths joined with `*`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCommandLine {
    tool: PathBuf,
    verb: &'static str,
    path_argument: String,
    close_on_end: u8,
}

impl ResolvedCommandLine {
    pub fn new(
        tool: &Path,
        spec: CommandSpec,
        repo_root: &Path,
        candidate_files: &[PathBuf],
    ) -> Self {
        let path_argument = match spec.mode {
            ExecMode::AllFiles => repo_root.display().to_string(),
            ExecMode::SingleFile | ExecMode::AllOpenFiles => joined(candidate_files),
        };

        Self {
            tool: tool.to_path_buf(),
            verb: spec.verb,
            path_argument,
            close_on_end: 2,
        }
    }

    pub fn with_close_on_end(mut self, close_on_end: u8) -> Self {
        self.close_on_end = close_on_end;
        self
    }

    pub fn tool(&self) -> &Path {
        &self.tool
    }

    /// The invocation in per-argument form for `std::process::Command`,
    /// which passes arguments directly and needs no quoting.
    pub fn to_args(&self) -> Vec<String> {
        vec![
            format!("/command:{}", self.verb),
            format!("/path:{}", self.path_argument),
            format!("/closeonend:{}", self.close_on_end),
        ]
    }
}

impl fmt::Display for ResolvedCommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} /command:{} /path:\"{}\" /closeonend:{}",
            self.tool.display(),
            self.verb,
            self.path_argument,
            self.close_on_end
        )
    }
}

/// Builds the command-line string for one verb against one file set.
#[allow(dead_code)] // Entry point for library callers; the binary goes through exec
pub fn build_command_line(
    tool: &Path,
    spec: CommandSpec,
    repo_root: &Path,
    candidate_files: &[PathBuf],
) -> String {
    ResolvedCommandLine::new(tool, spec, repo_root, candidate_files).to_string()
}

/// Keeps only the files that belong to the repository rooted at `repo_root`.
///
/// The test is textual prefixing, which is how TortoiseGitProc itself gets
/// fed; callers pass canonical absolute paths on both sides.
pub fn files_in_repository(repo_root: &Path, files: &[PathBuf]) -> Vec<PathBuf> {
    let prefix = repo_root.to_string_lossy();
    files
        .iter()
        .filter(|file| file.to_string_lossy().starts_with(prefix.as_ref()))
        .cloned()
        .collect()
}

fn joined(files: &[PathBuf]) -> String {
    files
        .iter()
        .map(|file| file.display().to_string())
        .collect::<Vec<_>>()
        .join("*")
}

use crate::config::Config;
use crate::error::{Result, SchildkroeteError};
use std::path::{Path, PathBuf};

#[cfg(windows)]
const TOOL_BINARY: &str = "TortoiseGitProc.exe";
#[cfg(not(windows))]
const TOOL_BINARY: &str = "TortoiseGitProc";

/// Resolves the TortoiseGitProc executable to launch.
///
/// Resolution order, first hit wins: an explicit override (flag or
/// environment), the config file, the TortoiseGit registry entry (Windows),
/// then a scan of PATH. Nothing is cached; every invocation resolves fresh.
pub fn resolve_tool_path(override_path: Option<&Path>, config: &Config) -> Result<PathBuf> {
    if let Some(path) = override_path {
        log::debug!("Using tool override: {}", path.display());
        return Ok(path.to_path_buf());
    }

    if let Some(path) = &config.tool_path {
        if path.exists() {
            log::debug!("Using configured tool_path: {}", path.display());
            return Ok(path.clone());
        }
        log::debug!("Configured tool_path does not exist: {}", path.display());
    }

    #[cfg(windows)]
    if let Some(path) = registry_proc_path() {
        if path.exists() {
            log::debug!("Using registry ProcPath: {}", path.display());
            return Ok(path);
        }
        log::debug!("Registry ProcPath does not exist: {}", path.display());
    }

    if let Some(path) = search_path() {
        log::debug!("Found {} on PATH: {}", TOOL_BINARY, path.display());
        return Ok(path);
    }

    Err(SchildkroeteError::ToolNotInstalled)
}

/// Reads the `ProcPath` value that the TortoiseGit installer writes under
/// `HKEY_LOCAL_MACHINE\Software\TortoiseGit`.
#[cfg(windows)]
fn registry_proc_path() -> Option<PathBuf> {
    use std::process::Command;

    let output = Command::new("reg")
        .args(["query", r"HKLM\Software\TortoiseGit", "/v", "ProcPath"])
        .output()
        .ok()?;

    if !output.status.success() {
        log::debug!(
            "reg query failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
        return None;
    }

    parse_reg_value(&String::from_utf8_lossy(&output.stdout))
}

/// Pulls the value out of `reg query` output, which looks like:
///
/// ```text
/// HKEY_LOCAL_MACHINE\Software\TortoiseGit
///     ProcPath    REG_SZ    C:\Program Files\TortoiseGit\bin\TortoiseGitProc.exe
/// ```
#[cfg_attr(not(windows), allow(dead_code))]
fn parse_reg_value(output: &str) -> Option<PathBuf> {
    for line in output.lines() {
        let Some(rest) = line.trim_start().strip_prefix("ProcPath") else {
            continue;
        };
        for value_type in ["REG_SZ", "REG_EXPAND_SZ"] {
            if let Some(value) = rest.trim_start().strip_prefix(value_type) {
                let value = value.trim();
                if !value.is_empty() {
                    return Some(PathBuf::from(value));
                }
            }
        }
    }
    None
}

fn search_path() -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    std::env::split_paths(&path_var)
        .map(|dir| dir.join(TOOL_BINARY))
        .find(|candidate| candidate.exists())
}

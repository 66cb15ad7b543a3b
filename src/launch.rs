use crate::command::ResolvedCommandLine;
use crate::error::{Result, SchildkroeteError};
use std::process::Command;

/// Spawns the external tool and returns without waiting for it.
///
/// The child handle is dropped immediately; TortoiseGitProc runs its own
/// dialog and the launcher has nothing further to do with it.
pub fn launch(resolved: &ResolvedCommandLine) -> Result<()> {
    log::debug!("Launching: {}", resolved);

    Command::new(resolved.tool())
        .args(resolved.to_args())
        .spawn()
        .map(drop)
        .map_err(|e| SchildkroeteError::LaunchFailed {
            command: resolved.to_string(),
            reason: e.to_string(),
        })
}

use crate::actions::Action;
use crate::command::{self, ExecMode, ResolvedCommandLine};
use crate::config::Config;
use crate::error::{Result, SchildkroeteError};
use crate::host::HostContext;
use crate::{launch, repo, tool};
use std::path::{Path, PathBuf};

/// Resolves everything one action needs and assembles its command line.
///
/// Fails before anything is built if the tool cannot be located or no
/// repository encloses the host's working directory.
pub fn prepare_action(
    action: &Action,
    host: &dyn HostContext,
    config: &Config,
    tool_override: Option<&Path>,
) -> Result<ResolvedCommandLine> {
    let tool_path = tool::resolve_tool_path(tool_override, config)?;

    let start_dir = host.working_directory()?;
    let repo_root = repo::find_repository_root(&start_dir)?;

    let candidates: Vec<PathBuf> = match action.spec.mode {
        ExecMode::AllFiles => Vec::new(),
        ExecMode::SingleFile => {
            let file = host
                .active_file()
                .ok_or_else(|| SchildkroeteError::MissingActiveFile {
                    action: action.name.to_string(),
                })?;
            vec![file]
        }
        ExecMode::AllOpenFiles => {
            let files = command::files_in_repository(&repo_root, &host.open_files());
            if files.is_empty() {
                log::warn!("No open files belong to {}", repo_root.display());
            }
            files
        }
    };

    Ok(
        ResolvedCommandLine::new(&tool_path, action.spec, &repo_root, &candidates)
            .with_close_on_end(config.close_on_end()),
    )
}

/// Runs one action end to end: prepare, then launch the tool (or print the
/// command line under `dry_run`).
pub fn run_action(
    action: &Action,
    host: &dyn HostContext,
    config: &Config,
    tool_override: Option<&Path>,
    dry_run: bool,
) -> Result<()> {
    let resolved = prepare_action(action, host, config, tool_override)?;

    if dry_run {
        println!("{}", resolved);
        return Ok(());
    }

    launch::launch(&resolved)
}

use crate::actions;
use clap::builder::PossibleValuesParser;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "tgit",
    version,
    about = "Launch TortoiseGit actions against the repository enclosing your files",
    long_about = None
)]
pub struct Args {
    /// Action to run (see --list for the full menu)
    #[arg(value_name = "ACTION", required_unless_present = "list", value_parser = action_names())]
    pub action: Option<String>,

    /// File the action applies to (single-file actions)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Directory to start repository discovery from (defaults to FILE's
    /// parent, or the current directory)
    #[arg(short = 'C', long = "dir", value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// A currently open file, for the *-open actions (repeatable)
    #[arg(long = "open", value_name = "PATH")]
    pub open: Vec<PathBuf>,

    /// TortoiseGitProc executable to use instead of the discovered one
    #[arg(long = "tool", value_name = "PATH", env = "TGIT_TOOL")]
    pub tool: Option<PathBuf>,

    /// Print the command line instead of launching the tool
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// List all actions and exit
    #[arg(long = "list")]
    pub list: bool,

    /// Enable debug logging
    #[arg(long = "debug")]
    pub debug: bool,
}

fn action_names() -> PossibleValuesParser {
    PossibleValuesParser::new(actions::names())
}

use crate::command::{CommandSpec, ExecMode};

/// Modifier-key combination a host may bind an action to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)] // Available for hosts that bind keys
pub struct Shortcut {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub key: Option<char>,
}

/// One launchable source-control action: a menu label plus the verb and
/// file-set it runs with.
#[derive(Debug, Clone, Copy)]
pub struct Action {
    pub name: &'static str,
    pub label: &'static str,
    pub spec: CommandSpec,
    pub shortcut: Option<Shortcut>,
}

/// The full action menu, built once and never mutated. None of the stock
/// entries binds a key.
pub const ACTIONS: &[Action] = &[
    Action {
        name: "commit",
        label: "Commit Project File",
        spec: CommandSpec {
            verb: "commit",
            mode: ExecMode::SingleFile,
        },
        shortcut: None,
    },
    Action {
        name: "commit-all",
        label: "Commit All Project Files",
        spec: CommandSpec {
            verb: "commit",
            mode: ExecMode::AllFiles,
        },
        shortcut: None,
    },
    Action {
        name: "commit-open",
        label: "Commit All Open Project Files",
        spec: CommandSpec {
            verb: "commit",
            mode: ExecMode::AllOpenFiles,
        },
        shortcut: None,
    },
    Action {
        name: "add",
        label: "Add File To Project",
        spec: CommandSpec {
            verb: "add",
            mode: ExecMode::SingleFile,
        },
        shortcut: None,
    },
    Action {
        name: "diff",
        label: "Diff Project File",
        spec: CommandSpec {
            verb: "diff",
            mode: ExecMode::SingleFile,
        },
        shortcut: None,
    },
    Action {
        name: "revert",
        label: "Revert Project File",
        spec: CommandSpec {
            verb: "revert",
            mode: ExecMode::SingleFile,
        },
        shortcut: None,
    },
    Action {
        name: "revert-all",
        label: "Revert All Project Files",
        spec: CommandSpec {
            verb: "revert",
            mode: ExecMode::AllFiles,
        },
        shortcut: None,
    },
    Action {
        name: "revert-open",
        label: "Revert All Open Project Files",
        spec: CommandSpec {
            verb: "revert",
            mode: ExecMode::AllOpenFiles,
        },
        shortcut: None,
    },
    Action {
        name: "log",
        label: "Show Project File Log",
        spec: CommandSpec {
            verb: "log",
            mode: ExecMode::SingleFile,
        },
        shortcut: None,
    },
    Action {
        name: "log-all",
        label: "Show All Project File Log",
        spec: CommandSpec {
            verb: "log",
            mode: ExecMode::AllFiles,
        },
        shortcut: None,
    },
    Action {
        name: "log-open",
        label: "Show All Open Project File Log",
        spec: CommandSpec {
            verb: "log",
            mode: ExecMode::AllOpenFiles,
        },
        shortcut: None,
    },
    Action {
        name: "push",
        label: "Push Project To Repository",
        spec: CommandSpec {
            verb: "push",
            mode: ExecMode::AllFiles,
        },
        shortcut: None,
    },
    Action {
        name: "pull",
        label: "Pull Project From Repository",
        spec: CommandSpec {
            verb: "pull",
            mode: ExecMode::AllFiles,
        },
        shortcut: None,
    },
];

pub fn find_action(name: &str) -> Option<&'static Action> {
    ACTIONS.iter().find(|action| action.name == name)
}

/// Action names in menu order, for CLI validation and `--list`.
pub fn names() -> Vec<&'static str> {
    ACTIONS.iter().map(|action| action.name).collect()
}

mod actions;
mod cli;
mod command;
mod config;
mod error;
mod exec;
mod host;
mod launch;
mod repo;
mod tool;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    // Parse command line arguments
    let args = cli::Args::parse();

    // Initialize logging
    if args.debug {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
            .init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .init();
    }

    if args.list {
        print_actions();
        return Ok(());
    }

    // Run the selected action
    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn run(args: cli::Args) -> error::Result<()> {
    let name = match &args.action {
        Some(name) => name.clone(),
        None => return Ok(()),
    };

    let action = actions::find_action(&name)
        .ok_or(error::SchildkroeteError::UnknownAction { name })?;

    let config = config::Config::load()?;

    let host = host::CliHost {
        dir: args.dir,
        file: args.file,
        open: args.open,
    };

    exec::run_action(action, &host, &config, args.tool.as_deref(), args.dry_run)
}

fn print_actions() {
    for action in actions::ACTIONS {
        println!("{:<12} {}", action.name, action.label);
    }
}

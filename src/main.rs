//! mddbl CLI - deploy helper for the Moddable SDK
//!
//! Usage: mddbl <COMMAND>
//!
//! Commands:
//!   init    Create mddbl.json in the current folder
//!   deploy  Build and run a module, optionally on a target
//!   wipe    Erase a target device
//!   module  Manage modules
//!   target  Manage targets
//!   config  Show, sort or edit the configuration file
//!   list    List modules or targets
//!   debug   Toggle the configuration's debug flag

mod commands;
mod ui;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use mddbl::presentation::{Cli, Commands};

use commands::entity::EntityKind;
use commands::CommandContext;
use ui::context::UiContext;

fn main() {
    let cli = Cli::parse();
    let ui = UiContext::new(cli.json, cli.color);

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| {
            ui::logging::init(cli.debug || commands::configured_debug(&cwd));
            let ctx = CommandContext { ui, cwd };
            run(&ctx, cli.command)
        });

    if let Err(e) = result {
        tracing::debug!("{:?}", e);
        ui::error::print_error(&e, &ui);
        std::process::exit(1);
    }
}

fn run(ctx: &CommandContext, command: Option<Commands>) -> Result<()> {
    let Some(command) = command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    match command {
        Commands::Init { force } => commands::init::cmd_init(ctx, force),
        Commands::Deploy { module, target } => commands::deploy::cmd_deploy(ctx, &module, target),
        Commands::Wipe { target } => commands::wipe::cmd_wipe(ctx, &target),
        Commands::Module { action } => {
            commands::entity::cmd_entity(ctx, EntityKind::Module, action)
        }
        Commands::Target { action } => {
            commands::entity::cmd_entity(ctx, EntityKind::Target, action)
        }
        Commands::Config { action } => commands::config::cmd_config(ctx, action),
        Commands::List { kind } => commands::list::cmd_list(ctx, kind),
        Commands::Debug => commands::debug::cmd_debug(ctx),
    }
}

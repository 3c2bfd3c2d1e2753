mod commands;
mod error;
mod util;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::debug;

use crate::commands::{completions, contacts, groups, lookup, status, Context};
use crate::error::{exit_code_for, report_error};
use rolodex_bridge::{AddressBook, BridgeOptions};
use rolodex_config as config;

#[derive(Debug, Parser)]
#[command(name = "rolodex", version, about = "Apple Contacts from the terminal")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show Contacts authorization status
    Status(status::StatusArgs),
    /// Request Contacts access
    Authorize(status::AuthorizeArgs),
    List(contacts::ListArgs),
    Search(contacts::SearchArgs),
    Get(contacts::GetArgs),
    Create(contacts::CreateArgs),
    Update(contacts::UpdateArgs),
    Delete(contacts::DeleteArgs),
    #[command(subcommand)]
    Groups(groups::GroupsCommand),
    /// Look up a contact by phone number
    Lookup(lookup::LookupArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        json,
        verbose,
        command,
    } = cli;

    match command {
        Command::Completions(args) => completions::emit(args),
        command => {
            let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
            if verbose {
                match config::resolve_config_path(config_path) {
                    Ok(path) => {
                        if path.exists() {
                            debug!(path = %path.display(), "config resolved");
                        } else {
                            debug!(path = %path.display(), "config missing, using defaults");
                        }
                    }
                    Err(err) => {
                        debug!(error = %err, "config unavailable");
                    }
                }
            }

            let mut options = BridgeOptions::default();
            if let Some(interpreter) = app_config.interpreter {
                options.interpreter = interpreter;
            }
            options.script_timeout = Duration::from_secs(app_config.script_timeout_secs);
            options.lookup_timeout = Duration::from_secs(app_config.lookup_timeout_secs);
            options.list_limit = app_config.list_limit;

            let book = AddressBook::new(options);
            let ctx = Context { book: &book, json };

            match command {
                Command::Status(args) => status::show_status(&ctx, args),
                Command::Authorize(args) => status::authorize(&ctx, args),
                Command::List(args) => contacts::list_contacts(&ctx, args),
                Command::Search(args) => contacts::search_contacts(&ctx, args),
                Command::Get(args) => contacts::get_contact(&ctx, args),
                Command::Create(args) => contacts::create_contact(&ctx, args),
                Command::Update(args) => contacts::update_contact(&ctx, args),
                Command::Delete(args) => contacts::delete_contact(&ctx, args),
                Command::Groups(cmd) => match cmd {
                    groups::GroupsCommand::Ls(args) => groups::list_groups(&ctx, args),
                    groups::GroupsCommand::Members(args) => groups::group_members(&ctx, args),
                },
                Command::Lookup(args) => lookup::lookup_phone(&ctx, args),
                Command::Completions(_) => {
                    unreachable!("completions command handled before bridge setup")
                }
            }
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();
}

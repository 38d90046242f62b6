mod commands;
mod contacts_file;
mod error;
mod util;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{birthdays, completions, contacts, Context};
use crate::error::{exit_code_for, invalid_input, report_error};
use addrbook_config as config;

#[derive(Debug, Parser)]
#[command(name = "addrbook", version, about = "addrbook CLI")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// JSON file with the contacts to load.
    #[arg(long, global = true)]
    contacts: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
    List(contacts::ListArgs),
    Show(contacts::ShowArgs),
    #[command(name = "find-phone")]
    FindPhone(contacts::FindPhoneArgs),
    Birthdays(birthdays::BirthdaysArgs),
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
        contacts: contacts_path,
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
                    Ok(path) if path.exists() => debug!(path = %path.display(), "config resolved"),
                    Ok(path) => debug!(path = %path.display(), "config missing, using defaults"),
                    Err(err) => debug!(error = %err, "config unavailable"),
                }
            }

            let contacts_path = contacts_path
                .or_else(|| app_config.contacts_path.clone())
                .ok_or_else(|| {
                    invalid_input("no contacts file: pass --contacts or set contacts_path")
                })?;
            let directory = contacts_file::load_directory(&contacts_path)?;

            let ctx = Context {
                directory: &directory,
                json,
                config: &app_config,
            };

            match command {
                Command::List(args) => contacts::list_contacts(&ctx, args),
                Command::Show(args) => contacts::show_contact(&ctx, args),
                Command::FindPhone(args) => contacts::find_phone(&ctx, args),
                Command::Birthdays(args) => birthdays::upcoming_birthdays(&ctx, args),
                Command::Completions(_) => {
                    unreachable!("completions command handled before contacts are loaded")
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
        .with_writer(std::io::stderr)
        .try_init();
}

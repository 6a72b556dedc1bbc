mod commands;
mod error;
mod util;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{
    completions, format, one_click, typing, validate, Context, MaskArg, OverflowArg,
};
use crate::error::{exit_code_for, report_error};
use phonefield_config as config;

#[derive(Debug, Parser)]
#[command(name = "phonefield", version, about = "phonefield CLI")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    /// Override the configured display mask
    #[arg(long, global = true, value_enum)]
    mask: Option<MaskArg>,
    /// Override the configured handling of digits past a full number
    #[arg(long, global = true, value_enum)]
    overflow: Option<OverflowArg>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Filter and render a phone number once
    Format(format::FormatArgs),
    /// Replay keystrokes through a phone field
    Type(typing::TypeArgs),
    /// Check a phone number and/or birth date
    Validate(validate::ValidateArgs),
    /// Fill the one-click form and print what it submits
    #[command(name = "one-click")]
    OneClick(one_click::OneClickArgs),
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
        verbose: _,
        mask,
        overflow,
        command,
    } = cli;

    if let Command::Completions(args) = command {
        return completions::emit(args);
    }

    let location = config::locate(config_path).with_context(|| "locate config")?;
    let app_config = match &location {
        Some(location) => {
            debug!(?location, "config located");
            config::read_config(location).with_context(|| "load config")?
        }
        None => {
            debug!("no config directory, using defaults");
            config::AppConfig::default()
        }
    };

    let mut mask_options = app_config.phone;
    if let Some(kind) = mask {
        mask_options.kind = kind.into();
    }
    if let Some(policy) = overflow {
        mask_options.overflow = policy.into();
    }
    debug!(
        mask = %mask_options.kind,
        overflow = ?mask_options.overflow,
        "phone mask selected"
    );

    let ctx = Context {
        json,
        config: &app_config,
        mask: mask_options,
    };

    match command {
        Command::Format(args) => format::format_value(&ctx, args),
        Command::Type(args) => typing::type_text(&ctx, args),
        Command::Validate(args) => validate::validate(&ctx, args),
        Command::OneClick(args) => one_click::one_click(&ctx, args),
        Command::Completions(_) => {
            unreachable!("completions command handled before config loading")
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

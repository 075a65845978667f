//! Curator CLI entry point

use clap::Parser;
use curator_cli::commands::{
    execute_index, execute_sanitize, execute_staleness, execute_validate, CommandContext,
    CommandStatus,
};
use curator_cli::{Cli, Command, Config, Formatter, RuleTables};
use std::process;
use tracing::Level;

fn main() {
    // Diagnostics go to stderr so stdout stays parseable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::WARN)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(CommandStatus::Clean) => process::exit(0),
        Ok(CommandStatus::FindingsFailed) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    }
}

fn run(cli: Cli) -> curator_cli::Result<CommandStatus> {
    let config = Config::load(&cli.root)?;

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let use_color = config.settings.color && !cli.no_color;

    // Absent rule files fall back to the built-in defaults, so a missing
    // rules directory is not an error
    let rules_dir = cli
        .rules
        .clone()
        .unwrap_or_else(|| cli.root.join("rules"));
    let tables = RuleTables::load(&rules_dir)?;

    let ctx = CommandContext {
        patterns_dir: cli.root.join(&cli.patterns),
        tables,
        formatter: Formatter::new(format, use_color),
    };

    match &cli.command {
        Command::Validate => execute_validate(&ctx),
        Command::SanitizeScan => execute_sanitize(&ctx),
        Command::Index => execute_index(&ctx),
        Command::Staleness(args) => execute_staleness(&ctx, &config, args),
    }
}

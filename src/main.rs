//! ansifence - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ansifence::cli::{Cli, Commands, ConfigCommands};
use commands::style::StyleAction;

/// Environment variable holding the log filter (e.g. `debug`).
const LOG_ENV: &str = "ANSIFENCE_LOG";

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Show { json } => commands::show::handle(json),
        Commands::Write { text, append } => commands::write::handle(&text, append),
        Commands::Select { start, end } => commands::style::handle_select(start, end),
        Commands::Color { color, range } => {
            commands::style::handle(StyleAction::Color(color), range)
        }
        Commands::Background { color, range } => {
            commands::style::handle(StyleAction::Background(color), range)
        }
        Commands::Bold { range } => commands::style::handle(StyleAction::Bold, range),
        Commands::Underline { range } => commands::style::handle(StyleAction::Underline, range),
        Commands::Reset { hard } => commands::reset::handle(hard),
        Commands::Export { copy, keep } => commands::export::handle(copy, keep),
        Commands::Render { file, copy } => commands::render::handle(&file, copy),
        Commands::Palette => commands::palette::handle(),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}

//! xtask - Build tasks for ansifence
//!
//! Run with: cargo xtask <command>
//!
//! Commands:
//! - gen-docs: Generate documentation (man pages, COMMANDS.md, CONFIGURATION.md)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Arg, CommandFactory, Parser, Subcommand};

use ansifence::cli::Cli;
use ansifence::config::docs::generate_config_markdown;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build tasks for ansifence")]
struct Xtask {
    #[command(subcommand)]
    command: XtaskCommand,
}

#[derive(Subcommand)]
enum XtaskCommand {
    /// Generate documentation from CLI definitions
    #[command(name = "gen-docs")]
    GenDocs {
        /// Output directory (default: docs/)
        #[arg(long, short, default_value = "docs")]
        output: PathBuf,

        /// Generate man pages
        #[arg(long)]
        man: bool,

        /// Generate COMMANDS.md and CONFIGURATION.md
        #[arg(long)]
        markdown: bool,
    },
}

fn main() -> Result<()> {
    let args = Xtask::parse();

    match args.command {
        XtaskCommand::GenDocs {
            output,
            man,
            markdown,
        } => {
            // If no specific format is specified, generate all
            let gen_all = !man && !markdown;

            if gen_all || man {
                generate_man_pages(&output)?;
            }
            if gen_all || markdown {
                generate_markdown(&output)?;
            }
        }
    }

    Ok(())
}

/// Generate man pages using clap_mangen
fn generate_man_pages(output: &Path) -> Result<()> {
    use clap_mangen::Man;

    let man_dir = output.join("man");
    fs::create_dir_all(&man_dir).context("Failed to create man directory")?;

    let cmd = Cli::command();

    let mut buffer = Vec::new();
    Man::new(cmd.clone()).render(&mut buffer)?;
    fs::write(man_dir.join("ansifence.1"), buffer)?;
    println!("Generated: {}/ansifence.1", man_dir.display());

    for subcommand in cmd.get_subcommands() {
        if subcommand.is_hide_set() {
            continue;
        }

        let name = subcommand.get_name();
        let mut buffer = Vec::new();
        Man::new(subcommand.clone()).render(&mut buffer)?;
        fs::write(man_dir.join(format!("ansifence-{}.1", name)), buffer)?;
        println!("Generated: {}/ansifence-{}.1", man_dir.display(), name);
    }

    println!("Man pages generated in {}", man_dir.display());
    Ok(())
}

fn is_builtin(arg: &Arg) -> bool {
    let id = arg.get_id().as_str();
    id == "help" || id == "version"
}

/// Generate COMMANDS.md and CONFIGURATION.md
fn generate_markdown(output: &Path) -> Result<()> {
    fs::create_dir_all(output).context("Failed to create output directory")?;

    let cmd = Cli::command();
    let mut markdown = String::new();

    markdown.push_str("# ansifence Command Reference\n\n");
    markdown.push_str("This document is auto-generated from the CLI definitions.\n\n");
    markdown.push_str("## Table of Contents\n\n");
    for subcommand in cmd.get_subcommands() {
        if subcommand.is_hide_set() {
            continue;
        }
        let name = subcommand.get_name();
        markdown.push_str(&format!("- [{}](#ansifence-{})\n", name, name));
    }
    markdown.push_str("\n---\n\n");

    markdown.push_str("## ansifence\n\n");
    if let Some(long_about) = cmd.get_long_about() {
        markdown.push_str(&format!("```\n{}\n```\n\n", long_about));
    }

    for subcommand in cmd.get_subcommands() {
        if subcommand.is_hide_set() {
            continue;
        }

        let name = subcommand.get_name();
        markdown.push_str(&format!("## ansifence {}\n\n", name));
        if let Some(about) = subcommand.get_about() {
            markdown.push_str(&format!("{}\n\n", about));
        }

        let args: Vec<_> = subcommand
            .get_arguments()
            .filter(|a| !is_builtin(a))
            .collect();
        let positional: Vec<_> = args.iter().filter(|a| a.is_positional()).collect();
        let options: Vec<_> = args.iter().filter(|a| !a.is_positional()).collect();

        if !positional.is_empty() {
            markdown.push_str("### Arguments\n\n");
            for arg in positional {
                let help = arg.get_help().map(|h| h.to_string()).unwrap_or_default();
                markdown.push_str(&format!(
                    "- `<{}>`: {}\n",
                    arg.get_id().as_str().to_uppercase(),
                    help
                ));
            }
            markdown.push('\n');
        }

        if !options.is_empty() {
            markdown.push_str("### Options\n\n");
            for arg in options {
                let long = arg.get_long().map(|l| format!("--{}", l));
                let short = arg.get_short().map(|s| format!("-{}", s));
                let flag = match (long, short) {
                    (Some(l), Some(s)) => format!("{}, {}", s, l),
                    (Some(l), None) => l,
                    (None, Some(s)) => s,
                    _ => continue,
                };
                let help = arg.get_help().map(|h| h.to_string()).unwrap_or_default();
                markdown.push_str(&format!("- `{}`: {}\n", flag, help));
            }
            markdown.push('\n');
        }

        if let Some(long_about) = subcommand.get_long_about() {
            markdown.push_str("### Description\n\n");
            markdown.push_str(&format!("```\n{}\n```\n\n", long_about));
        }

        for nested in subcommand.get_subcommands() {
            if nested.is_hide_set() {
                continue;
            }
            markdown.push_str(&format!("#### ansifence {} {}\n\n", name, nested.get_name()));
            if let Some(about) = nested.get_about() {
                markdown.push_str(&format!("{}\n\n", about));
            }
        }

        markdown.push_str("---\n\n");
    }

    markdown.push_str("\n*Generated by `cargo xtask gen-docs`*\n");

    let output_path = output.join("COMMANDS.md");
    fs::write(&output_path, markdown)?;
    println!("Generated: {}", output_path.display());

    let config_path = output.join("CONFIGURATION.md");
    fs::write(&config_path, generate_config_markdown())?;
    println!("Generated: {}", config_path.display());

    Ok(())
}

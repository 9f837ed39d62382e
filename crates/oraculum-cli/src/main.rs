//! Oraculum CLI
//!
//! Command-line access to the Oraculum content fabric.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::{Parser, Subcommand};

use oraculum_cli::commands;
use oraculum_cli::copy::{CopyIndicator, StdoutSink};
use oraculum_content::Catalog;

const LONG_ABOUT: &str = "\
Oraculum gives you terminal access to the seven strategic principles, the
prompt library, and the guided workflows.

Lookups by slug never fail hard: an unknown slug prints a not-found message
and exits nonzero. Searches that match nothing print an empty state with a
hint for clearing the filters.";

const AFTER_HELP: &str = "\
EXAMPLES:
    List the seven principles:
        $ oraculum list

    Read one principle in full:
        $ oraculum show perceptual-asymmetry

    Search the prompt library:
        $ oraculum search growth --category STRATEGY

    Copy an extraction prompt (pipe into your clipboard tool):
        $ oraculum copy irreplaceability | pbcopy

    Walk a guided workflow:
        $ oraculum workflows strategic-stacking";

/// Oraculum CLI - strategic principles content fabric
#[derive(Parser, Debug)]
#[command(name = "oraculum")]
#[command(version)]
#[command(about = "Browse the principles, search the prompt library, run the workflows")]
#[command(long_about = LONG_ABOUT)]
#[command(after_help = AFTER_HELP)]
#[command(arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the seven principles
    List,
    /// Show one principle in full
    Show {
        /// Principle slug, e.g. perceptual-asymmetry
        slug: String,
    },
    /// Search the prompt library
    Search {
        /// Free-text query (matches title and template, case-insensitive)
        query: Option<String>,
        /// Category facet, e.g. STRATEGY
        #[arg(short, long)]
        category: Option<String>,
        /// Principle facet, e.g. "PERCEPTUAL ASYMMETRY"
        #[arg(short, long)]
        principle: Option<String>,
        /// Only flagship (Genius Extraction) prompts
        #[arg(long)]
        flagship_only: bool,
    },
    /// Copy a principle's extraction prompt
    Copy {
        /// Principle slug
        slug: String,
    },
    /// List the guided workflows, or show one with its steps
    Workflows {
        /// Workflow id, e.g. strategic-stacking
        id: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let catalog = Catalog::builtin();
    let mut out = std::io::stdout();

    match cli.command {
        Command::List => commands::list::run(&mut out, catalog)?,
        Command::Show { slug } => commands::show::run(&mut out, catalog, &slug)?,
        Command::Search {
            query,
            category,
            principle,
            flagship_only,
        } => commands::search::run(
            &mut out,
            catalog,
            commands::search::SearchOpts {
                query,
                category,
                principle,
                flagship_only,
            },
        )?,
        Command::Copy { slug } => {
            // Confirmation goes to stderr so the template alone reaches a pipe.
            let mut err = std::io::stderr();
            commands::copy::run(&mut err, catalog, &StdoutSink, &CopyIndicator::new(), &slug)
                .await?
        }
        Command::Workflows { id } => commands::workflows::run(&mut out, id.as_deref())?,
    }

    Ok(())
}

//! Sqlref CLI - Command-line interface for the SQL reference catalog

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use sqlref::output::OutputMode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use commands::Context;

#[derive(Parser)]
#[command(name = "sqlref")]
#[command(version)]
#[command(about = "SQL reference catalog - views, keys, indexes, joins and aggregates")]
#[command(long_about = r#"
Sqlref is a searchable study guide for relational-database basics:
  • Example SQL for every topic
  • Memory tricks and common exam questions
  • Lookup by id, listing by category, free-text search

Example usage:
  sqlref show inner-join
  sqlref list --category joins
  sqlref search "join"
  sqlref quiz --category aggregates --reveal
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the config file (defaults to ./sqlref.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "text")]
    format: OutputMode,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one topic by id
    Show {
        /// Topic id, e.g. "creating-a-view"
        id: String,
    },

    /// List topics, optionally restricted to a category
    List {
        /// Category name (view, constraint, index, dml, query, join, aggregate)
        #[arg(long)]
        category: Option<String>,
    },

    /// Search titles and memory tricks
    Search {
        /// Search text (case-insensitive)
        query: String,

        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show how many topics each category holds
    Categories,

    /// Print study questions
    Quiz {
        /// Only questions of this category
        #[arg(long)]
        category: Option<String>,

        /// Show the answers as well
        #[arg(long)]
        reveal: bool,
    },

    /// Parse and merge guide documents, reporting the first content error
    Check {
        /// Markdown documents in merge priority order
        files: Vec<PathBuf>,

        /// Merge the built-in guides ahead of the given files
        #[arg(long)]
        with_bundled: bool,
    },

    /// Write a default config file
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },

    /// Serve the catalog over HTTP
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the version
    Version,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let output_mode = cli.format;
    if let Err(err) = run(cli) {
        commands::report_error(&err, output_mode);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli.config.as_deref();
    let output_mode = cli.format;

    match cli.command {
        Commands::Show { id } => {
            let ctx = Context::load(config_path)?;
            commands::run_show(&ctx, &id, output_mode)
        }

        Commands::List { category } => {
            let ctx = Context::load(config_path)?;
            commands::run_list(&ctx, category.as_deref(), output_mode)
        }

        Commands::Search { query, limit } => {
            let ctx = Context::load(config_path)?;
            commands::run_search(&ctx, &query, limit, output_mode)
        }

        Commands::Categories => {
            let ctx = Context::load(config_path)?;
            commands::run_categories(&ctx, output_mode)
        }

        Commands::Quiz { category, reveal } => {
            let ctx = Context::load(config_path)?;
            commands::run_quiz(&ctx, category.as_deref(), reveal, output_mode)
        }

        Commands::Check { files, with_bundled } => commands::run_check(&files, with_bundled, output_mode),

        Commands::Init { force } => commands::run_init(config_path, force, output_mode),

        Commands::Serve { port } => {
            let ctx = Context::load(config_path)?;
            tracing::info!("Loaded {} topics", ctx.catalog.len());
            commands::run_serve(ctx, port)
        }

        Commands::Version => commands::run_version(output_mode),
    }
}

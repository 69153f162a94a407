//! jsonsql CLI
//!
//! Renders JSON query descriptions into parameterized SQL against an
//! allow-list file. Nothing is executed.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use jsonsql_core::{AllowList, Fragment, JsonSql, ParseError};

/// Render JSON query descriptions into parameterized SQL.
#[derive(Parser)]
#[command(name = "jsonsql")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Allow-list file (JSON).
    #[arg(short, long, env = "JSONSQL_CONFIG")]
    config: PathBuf,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a complete request (query, items, table, connection, logic).
    Render {
        /// Request file; stdin if not specified.
        file: Option<PathBuf>,
    },

    /// Render a bare filter tree.
    Filter {
        /// Filter file; stdin if not specified.
        file: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let allow = AllowList::from_path(&cli.config)
        .with_context(|| format!("failed to load allow-list {}", cli.config.display()))?;
    debug!(
        tables = allow.tables.len(),
        columns = allow.columns.len(),
        "loaded allow-list"
    );
    let parser = JsonSql::new(allow);

    match run(&parser, &cli.command)? {
        Ok(fragment) => {
            info!(params = fragment.params.len(), "rendered");
            println!("{}", serde_json::to_string_pretty(&output(&fragment))?);
            Ok(ExitCode::SUCCESS)
        }
        Err(reason) => {
            eprintln!("{reason}");
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Reads the command's input and renders it.
///
/// The outer error is an IO or JSON failure; the inner one a rejection.
fn run(parser: &JsonSql, command: &Commands) -> anyhow::Result<Result<Fragment, ParseError>> {
    let result = match command {
        Commands::Render { file } => parser.sql_parse(&read_input(file.as_deref())?),
        Commands::Filter { file } => parser.logic_parse(&read_input(file.as_deref())?),
    };
    Ok(result)
}

fn read_input(file: Option<&Path>) -> anyhow::Result<Value> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };
    serde_json::from_str(&text).context("input is not valid JSON")
}

fn output(fragment: &Fragment) -> Value {
    json!({
        "sql": fragment.sql,
        "params": fragment.params,
    })
}

//! `schema-render`: renders a schema.org entity document as JSON-LD.
//!
//! Reads a JSON entity document (`{"type": "Event", ...}` with snake_case
//! field names) from a file or stdin, validates it, and prints the JSON-LD
//! script tag ready to paste into a page's `<head>`.
//!
//! **Usage:**
//! ```text
//! schema-render [INPUT] [--minified | --pretty] [--bare] [--no-validate] [--out <path>]
//! ```
//!
//! Without `--minified`/`--pretty`, formatting follows
//! `SCHEMA_DOT_ORG_MINIFIED_JSON` and `SCHEMA_DOT_ORG_ENV`. Set `RUST_LOG` for
//! diagnostics on stderr.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use schema_dot_org::serializer::{to_json, to_script_tag};
use schema_dot_org::{EntityDocument, Formatting, ValidationError};
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset. A successful run stays quiet.
const DEFAULT_FILTER: &str = "schema_render=info,schema_dot_org=warn";

/// Render a schema.org entity document as JSON-LD.
#[derive(Parser)]
#[command(name = "schema-render", about = "Render schema.org entities as JSON-LD")]
struct Args {
    /// Entity document to read (default: stdin).
    input: Option<PathBuf>,

    /// Emit compact single-line JSON.
    #[arg(long, conflicts_with = "pretty")]
    minified: bool,

    /// Emit indented JSON.
    #[arg(long)]
    pretty: bool,

    /// Print the root JSON document without the surrounding script tag.
    #[arg(long)]
    bare: bool,

    /// Skip attribute validation.
    #[arg(long)]
    no_validate: bool,

    /// Write output to this file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

impl Args {
    fn formatting(&self) -> Formatting {
        if self.minified {
            Formatting::compact()
        } else if self.pretty {
            Formatting::pretty()
        } else {
            Formatting::from_env()
        }
    }
}

fn main() -> Result<()> {
    init_logging()?;
    let args = Args::parse();

    let source = read_input(args.input.as_ref())?;
    let document: EntityDocument = serde_json::from_str(&source).with_context(|| {
        format!("Failed to parse entity document from {}", describe(args.input.as_ref()))
    })?;

    if args.no_validate {
        tracing::debug!("validation skipped");
    } else if let Err(err) = document.validate() {
        print_issues(&err);
        process::exit(1);
    }

    let formatting = args.formatting();
    let output = if args.bare {
        to_json(document.entity(), formatting.pretty, true)
    } else {
        to_script_tag(document.entity(), formatting.pretty)
    }
    .context("Failed to render JSON-LD")?;
    log_rendered(&output, formatting.pretty);

    match &args.out {
        Some(path) => {
            fs::write(path, format!("{output}\n"))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("  Written: {}", path.display());
        }
        None => println!("{output}"),
    }
    Ok(())
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to initialize tracing subscriber")
}

fn log_rendered(output: &str, pretty: bool) {
    tracing::debug!(bytes = output.len(), pretty, "rendered entity");
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read entity document from stdin")?;
            Ok(buf)
        }
    }
}

fn describe(path: Option<&PathBuf>) -> String {
    path.map_or_else(|| "stdin".to_owned(), |p| p.display().to_string())
}

fn print_issues(err: &ValidationError) {
    let ValidationError::Invalid { type_name, report } = err;
    eprintln!("{type_name} failed validation:");
    for issue in report.issues() {
        eprintln!("[FAIL] {}: {}", issue.attribute, issue.message);
    }
    eprintln!("{} issue(s) found.", report.issues().len());
}

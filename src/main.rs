use anyhow::Context;
use auditdiff::report::{render, AuditRow};
use auditdiff::{AttributeCatalog, Resolvers};
use clap::{Parser, ValueEnum};
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "auditdiff",
    about = "auditdiff — render audit-log changed-attribute records as readable diffs"
)]
struct Cli {
    /// JSONL file of audit rows; reads stdin when omitted. Each row is an
    /// object with a `changed_attr` field (structured map or legacy string).
    file: Option<PathBuf>,

    /// TOML catalog file layered over the built-in field catalog.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value = "text")]
    format: Format,

    /// Collapse each row to at most this many entries, with a trailing
    /// "… N more change(s)" line.
    #[arg(long)]
    collapse_after: Option<usize>,

    /// Log debug diagnostics (skipped entries, unparseable segments) to stderr.
    #[arg(long)]
    debug: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(if cli.debug { "debug" } else { "warn" })
            }),
        )
        .init();

    let catalog = match &cli.catalog {
        Some(path) => AttributeCatalog::load(path)
            .with_context(|| format!("loading catalog {}", path.display()))?,
        None => AttributeCatalog::defaults(),
    };
    // Resolver maps come from whatever lookup data the caller has; the CLI
    // has none, so foreign keys render as raw ids.
    let resolvers = Resolvers::new();

    let reader: Box<dyn BufRead> = match &cli.file {
        Some(path) => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("opening {}", path.display()))?;
            Box::new(std::io::BufReader::new(file))
        }
        None => Box::new(std::io::stdin().lock()),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for (lineno, line) in reader.lines().enumerate() {
        let line = line.context("reading input")?;
        if line.trim().is_empty() {
            continue;
        }
        let row: AuditRow = match serde_json::from_str(&line) {
            Ok(row) => row,
            Err(err) => {
                tracing::warn!(line = lineno + 1, %err, "skipping undecodable row");
                continue;
            }
        };
        let entries = row.entries(&catalog, &resolvers);
        match cli.format {
            Format::Text => {
                if let Some(header) = row.header() {
                    writeln!(out, "{header}")?;
                }
                for rendered in render(&entries, cli.collapse_after) {
                    writeln!(out, "  {rendered}")?;
                }
            }
            Format::Json => {
                writeln!(out, "{}", serde_json::to_string(&entries)?)?;
            }
        }
    }

    Ok(())
}

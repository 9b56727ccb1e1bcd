//! csvdash CLI
//!
//! Command-line client for the dashboard backend:
//! - Show overview counts and per-column row counts
//! - Page through records
//! - Upload CSV files
//! - Generate a config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use csvdash::config::{generate_default_config, Config, LoggingConfig};
use csvdash::dashboard::DashboardState;
use csvdash::table::RecordTable;
use csvdash::upload::{upload_file, UploadedFile};
use csvdash::{Backend, HttpBackend};

const BAR_WIDTH: usize = 40;

#[derive(Parser)]
#[command(name = "csvdash")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Client for the CSV dashboard backend")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend URL (overrides config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show overview counts and rows per column
    Overview,

    /// Show rows per column
    Columns,

    /// Show one page of records
    Records {
        /// Page number (1-based)
        #[arg(short, long, default_value = "1")]
        page: u32,
        /// Records per page (default from config)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
        limit: Option<u32>,
    },

    /// Upload CSV files
    Upload {
        /// Files to upload; non-CSV files are skipped
        paths: Vec<PathBuf>,
        /// Show what would be uploaded without sending anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load_default();
    init_logging(&config.logging);

    let base_url = cli.api_url.clone().unwrap_or_else(|| config.api.base_url.clone());
    let backend = HttpBackend::new(base_url);
    let json = cli.format == "json";

    match cli.command {
        Commands::Overview => {
            let mut state = DashboardState::<UploadedFile>::new();
            state.refresh(&backend).await;

            let Some(stats) = state.overview().ready() else {
                eprintln!("Cannot load overview from {}", backend.base_url());
                std::process::exit(1);
            };
            let counts = state.column_counts().ready().cloned().unwrap_or_default();

            if json {
                let body = serde_json::json!({ "overview": stats, "column_counts": counts });
                println!("{}", serde_json::to_string_pretty(&body)?);
                return Ok(());
            }

            for card in csvdash::dashboard::stat_cards(stats) {
                println!("{:<22} {}", card.title, card.display_value());
            }

            println!();
            if state.column_counts().is_pending() {
                println!("Column counts unavailable");
            } else {
                print_bars(&counts);
            }
        }

        Commands::Columns => {
            let counts = backend
                .column_counts()
                .await
                .with_context(|| format!("Cannot load column counts from {}", backend.base_url()))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&counts)?);
            } else {
                print_bars(&counts);
            }
        }

        Commands::Records { page, limit } => {
            let mut table = RecordTable::new(limit.unwrap_or(config.api.page_size));
            table
                .load(&backend)
                .await
                .with_context(|| format!("Cannot load records from {}", backend.base_url()))?;

            if page != table.current_page() {
                if !table.paginate(page) {
                    eprintln!("Page {} out of range (1-{})", page, table.total_pages());
                    std::process::exit(1);
                }
                table
                    .load(&backend)
                    .await
                    .with_context(|| format!("Cannot load page {} from {}", page, backend.base_url()))?;
            }

            if json {
                println!("{}", serde_json::to_string_pretty(table.records())?);
            } else {
                print_table(&table);
            }
        }

        Commands::Upload { paths, dry_run } => {
            let mut selection = Vec::with_capacity(paths.len());
            for path in &paths {
                let file = UploadedFile::from_path(path)
                    .with_context(|| format!("Cannot read {:?}", path))?;
                selection.push(file);
            }

            let mut state = DashboardState::new();
            let accepted = match state.accept_selection(selection) {
                Ok(accepted) => accepted,
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            };

            if dry_run {
                for file in &accepted {
                    preview_csv(file);
                }
                return Ok(());
            }

            let outcomes = futures_util::future::join_all(
                accepted.iter().map(|file| upload_file(&backend, file)),
            )
            .await;

            let mut failed = false;
            for outcome in outcomes {
                println!("{}", outcome.alert_message());
                failed |= !outcome.is_success();
            }
            if failed {
                std::process::exit(1);
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Cannot write {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("csvdash={}", config.level)));

    let registry = tracing_subscriber::registry().with(filter);
    if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Horizontal bar per column, scaled to the largest count
fn print_bars(counts: &[csvdash::ColumnCount]) {
    if counts.is_empty() {
        println!("No columns");
        return;
    }

    let max = counts.iter().map(|c| c.total_rows).max().unwrap_or(0).max(1);
    let name_width = counts.iter().map(|c| c.column_name.len()).max().unwrap_or(0);

    for count in counts {
        let width = bar_width(count.total_rows, max);
        println!(
            "{:<name_width$}  {} {}",
            count.column_name,
            "#".repeat(width),
            count.total_rows,
        );
    }
}

/// Bar length out of [`BAR_WIDTH`] for `rows` against the largest count
fn bar_width(rows: i64, max: i64) -> usize {
    let max = max.max(1) as f64;
    (rows.max(0) as f64 / max * BAR_WIDTH as f64) as usize
}

fn print_table(table: &RecordTable) {
    let headers = table.headers();
    let rows = table.rows();

    if rows.is_empty() {
        println!("No records found");
    } else {
        let mut widths: Vec<usize> = headers.iter().map(String::len).collect();
        for row in &rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(cell.len());
            }
        }

        let line = |cells: &[String]| {
            cells
                .iter()
                .enumerate()
                .map(|(i, c)| match widths.get(i) {
                    Some(w) => format!("{:<w$}", c, w = *w),
                    None => c.clone(),
                })
                .collect::<Vec<_>>()
                .join(" | ")
        };

        println!("{}", line(&headers));
        println!("{}", "-".repeat(widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1)));
        for row in &rows {
            println!("{}", line(row));
        }
    }

    println!();
    let pages: Vec<String> = table
        .window()
        .pages()
        .map(|p| if p == table.current_page() { format!("[{}]", p) } else { p.to_string() })
        .collect();
    println!(
        "{} {} {}   page {} of {}",
        if table.has_previous() { "<" } else { " " },
        pages.join(" "),
        if table.has_next() { ">" } else { " " },
        table.current_page(),
        table.total_pages(),
    );
}

/// Header and row count of a file that would be uploaded
fn preview_csv(file: &UploadedFile) {
    let mut reader = csv::Reader::from_reader(file.bytes.as_slice());

    let columns = match reader.headers() {
        Ok(headers) => headers.iter().collect::<Vec<_>>().join(", "),
        Err(e) => {
            println!("{}: unreadable CSV ({})", file.name, e);
            return;
        }
    };
    let rows = reader.records().filter(Result::is_ok).count();
    println!("{}: {} rows, columns: {}", file.name, rows, columns);
}

mod display;

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use clausewatch_core::{DEFAULT_ALERT_WINDOW_DAYS, Engine, EngineConfig, RiskRuleTable};
use tracing::Level;

#[derive(Debug, Parser)]
#[command(name = "clausewatch", version, about = "Risk and deadline alerts for contract text")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// JSON rule table; the built-in Portuguese table is used when absent.
    #[arg(long, env = "CLAUSEWATCH_RULES", global = true)]
    rules: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyse a plain-text contract.
    Analyze {
        /// Contract text file, or `-` for stdin.
        file: PathBuf,

        /// Document name reported in the result (defaults to the file name).
        #[arg(long)]
        name: Option<String>,

        /// Days ahead within which a deadline is flagged as upcoming.
        #[arg(
            long,
            env = "CLAUSEWATCH_ALERT_WINDOW",
            default_value_t = DEFAULT_ALERT_WINDOW_DAYS
        )]
        window: u32,

        /// Date deadlines are graded against (YYYY-MM-DD, defaults to the local date).
        #[arg(long, value_parser = parse_date)]
        today: Option<NaiveDate>,

        /// Anchor for relative deadlines (YYYY-MM-DD, defaults to --today).
        #[arg(long, value_parser = parse_date)]
        reference_date: Option<NaiveDate>,

        #[arg(long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },
    /// Print the effective rule table as JSON.
    Rules,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Table,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(log_level(cli.verbose))
        .init();
    tracing::debug!("clausewatch v{}", env!("CARGO_PKG_VERSION"));

    let rules = load_rules(cli.rules.as_deref())?;

    match cli.command {
        Command::Rules => {
            println!("{}", serde_json::to_string_pretty(&rules)?);
        }
        Command::Analyze {
            file,
            name,
            window,
            today,
            reference_date,
            format,
        } => {
            let text = read_text(&file)?;
            let name = name.unwrap_or_else(|| document_name(&file));
            let today = today.unwrap_or_else(|| chrono::Local::now().date_naive());
            let reference_date = reference_date.unwrap_or(today);

            let engine = Engine::new(
                rules,
                EngineConfig {
                    alert_window_days: window,
                },
            );
            let result = engine.process_contract_at(&text, &name, reference_date, today);

            match format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&result)?),
                Format::Table => display::print_result(&result)?,
            }
        }
    }

    Ok(())
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

fn load_rules(path: Option<&Path>) -> anyhow::Result<RiskRuleTable> {
    let Some(path) = path else {
        return Ok(RiskRuleTable::default_pt_br());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading rule table {}", path.display()))?;
    let rules = RiskRuleTable::from_json(&json)
        .with_context(|| format!("invalid rule table {}", path.display()))?;
    tracing::info!(path = %path.display(), rules = rules.len(), "loaded rule table");
    Ok(rules)
}

fn read_text(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading contract from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("reading contract {}", path.display()))
}

fn document_name(path: &Path) -> String {
    if path == Path::new("-") {
        return "stdin".to_string();
    }
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "stdin".to_string())
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

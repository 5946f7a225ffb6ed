mod display;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use contract_auditor_analysis::{
    analyze, explain, known_clause_types, suggest_alternatives, summarize,
};
use contract_auditor_store::{AuditLog, extract_file, write_report};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Rule-based contract review: clauses, entities, risks and contract type.
#[derive(Parser, Debug)]
#[command(name = "contract-auditor", version, about, long_about = None)]
struct Cli {
    /// Directory for JSON audit entries
    #[arg(long, global = true, env = "CONTRACT_AUDITOR_LOG_DIR", default_value = "audit_logs")]
    log_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a .txt, .pdf or .docx contract
    Analyze {
        file: PathBuf,

        /// Print the full result as JSON instead of a card
        #[arg(long)]
        json: bool,

        /// Record a summary entry in the audit log
        #[arg(long)]
        save_log: bool,

        /// Write a plain-text analysis report to this path
        #[arg(long, value_name = "PATH")]
        report: Option<PathBuf>,

        /// Write the extracted raw text to this path
        #[arg(long, value_name = "PATH")]
        export_text: Option<PathBuf>,
    },

    /// List recent audit entries, newest first
    Logs {
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },

    /// Explain a clause type in plain language
    Explain {
        clause_type: String,

        /// Also list alternative phrasings
        #[arg(long)]
        alternatives: bool,

        /// Summarize this clause text
        #[arg(long, value_name = "TEXT")]
        summarize: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze {
            file,
            json,
            save_log,
            report,
            export_text,
        } => cmd_analyze(
            &file,
            json,
            save_log.then_some(cli.log_dir.as_path()),
            report.as_deref(),
            export_text.as_deref(),
        ),
        Commands::Logs { limit } => cmd_logs(&cli.log_dir, limit),
        Commands::Explain {
            clause_type,
            alternatives,
            summarize,
        } => {
            cmd_explain(&clause_type, alternatives, summarize.as_deref());
            Ok(())
        }
    }
}

fn cmd_analyze(
    file: &Path,
    json: bool,
    log_dir: Option<&Path>,
    report: Option<&Path>,
    export_text: Option<&Path>,
) -> Result<()> {
    let text = extract_file(file).with_context(|| format!("reading {}", file.display()))?;
    let filename = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.display().to_string());

    let result = analyze(&filename, &text);

    if json {
        println!("{}", result.to_json().context("serializing analysis")?);
    } else {
        display::print_analysis_card(&result);
    }

    if let Some(path) = export_text {
        std::fs::write(path, &text)
            .with_context(|| format!("writing extracted text to {}", path.display()))?;
        info!(path = %path.display(), "exported raw text");
    }
    if let Some(dir) = log_dir {
        let log = AuditLog::open(dir).context("opening audit log")?;
        let path = log.record(&result).context("recording audit entry")?;
        eprintln!("Saved to {}", path.display());
    }
    if let Some(path) = report {
        write_report(path, &result).context("exporting report")?;
    }
    Ok(())
}

fn cmd_logs(dir: &Path, limit: usize) -> Result<()> {
    let entries = AuditLog::open(dir)
        .and_then(|log| log.recent(limit))
        .with_context(|| format!("reading audit log in {}", dir.display()))?;
    display::print_audit_entries(&entries);
    Ok(())
}

fn cmd_explain(clause_type: &str, alternatives: bool, text: Option<&str>) {
    let guidance = explain(clause_type);
    let alts = alternatives.then(|| suggest_alternatives(clause_type));
    let summary = text.map(summarize);
    display::print_guidance(clause_type, &guidance, alts.as_deref(), summary.as_deref());
    if let Some(hint) = unknown_type_hint(clause_type) {
        println!();
        println!("{hint}");
    }
}

/// Lists the clause types with dedicated guidance when `clause_type` is not one of them.
fn unknown_type_hint(clause_type: &str) -> Option<String> {
    if known_clause_types().any(|known| known == clause_type) {
        return None;
    }
    let known: Vec<&str> = known_clause_types().collect();
    Some(format!("Known clause types: {}", known.join(", ")))
}

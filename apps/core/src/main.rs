//! Archon CLI - architecture recommendations from project briefs.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing::info;
use tracing_subscriber::EnvFilter;

use archon_core::advisor::ArchitectureAdvisor;
use archon_core::error::ArchonError;
use archon_core::report::{self, RecommendationReport};
use archon_core::{ingest, Recommendation};

/// Analyze a project brief and recommend an agent pipeline architecture.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Natural-language description of the use case
    brief: Vec<String>,

    /// Path to a brief document (.txt, .md, .markdown, .rst, .pdf, .docx, .doc)
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Prompt for the brief on stdin
    #[arg(short, long)]
    interactive: bool,

    /// Prompt for a tier override after the recommendation
    #[arg(short, long)]
    select: bool,

    /// Output as JSON (non-interactive)
    #[arg(short, long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let brief = match read_brief(&cli) {
        Ok(Some(brief)) => brief,
        Ok(None) => {
            // No input source given: show usage.
            let _ = Cli::command().print_help();
            return ExitCode::from(2);
        }
        Err(err) => {
            report_ingest_error(&err, cli.json);
            return ExitCode::FAILURE;
        }
    };

    let advisor = ArchitectureAdvisor::new();
    let recommendation = advisor.analyze(&brief);
    info!("analysis complete: {}", recommendation.summary());

    if cli.json {
        match serde_json::to_string_pretty(&RecommendationReport::from(&recommendation)) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("Error: failed to serialize recommendation: {err}");
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    println!("{}", report::tier_reference());
    println!("{}", report::render_text(&recommendation));

    let selected_tier = if cli.select {
        prompt_tier_selection(&recommendation)
    } else {
        recommendation.tier.level()
    };

    print_next_steps(selected_tier);
    ExitCode::SUCCESS
}

/// Resolve the brief text from file, stdin prompt, or positional words.
fn read_brief(cli: &Cli) -> Result<Option<String>, ArchonError> {
    if let Some(path) = &cli.file {
        let document = ingest::parse(path)?;

        if !cli.json {
            println!("Parsed document: {}", path.display());
            println!("Extracted {} characters", document.text.len());
            let preview: String = document.text.chars().take(200).collect();
            println!("\nDocument preview:\n{preview}\n");
        }

        return Ok(Some(document.text));
    }

    if cli.interactive {
        print!("Use case brief: ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        return Ok(Some(line.trim().to_string()));
    }

    if cli.brief.is_empty() {
        return Ok(None);
    }

    Ok(Some(cli.brief.join(" ")))
}

/// Print a specific diagnostic plus a one-line remediation hint, or a
/// structured error object in JSON mode.
fn report_ingest_error(err: &ArchonError, json: bool) {
    if json {
        println!("{}", report::error_value(err));
    } else {
        eprintln!("Error ({}): {err}", err.kind());
        eprintln!("Hint: {}", err.remediation());
    }
}

/// Interactive tier override: Enter accepts the recommendation, 1-5 picks
/// a tier explicitly, anything else re-prompts. EOF falls back to the
/// recommendation.
fn prompt_tier_selection(recommendation: &Recommendation) -> u8 {
    let recommended = recommendation.tier.level();
    let stdin = io::stdin();

    loop {
        print!("Select tier (1-5) or press Enter for recommended [{recommended}]: ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => {
                println!("\nUsing recommended tier {recommended}");
                return recommended;
            }
            Ok(_) => {}
        }

        let choice = line.trim();
        if choice.is_empty() {
            println!("Using recommended tier {recommended}");
            return recommended;
        }

        match choice.parse::<u8>() {
            Ok(tier @ 1..=5) => {
                if tier != recommended {
                    println!("Using tier {tier} (recommendation was {recommended})");
                } else {
                    println!("Using tier {tier}");
                }
                return tier;
            }
            _ => println!("Please enter a number between 1 and 5, or press Enter."),
        }
    }
}

fn print_next_steps(tier: u8) {
    println!("Next steps:");
    println!("  1. Scaffold a tier-{tier} pipeline from the generation params (--json output).");
    println!("  2. Rerun with --select to override the recommended tier interactively.");
}

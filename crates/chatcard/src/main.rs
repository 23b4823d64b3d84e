mod bootstrap;

use std::process::ExitCode;

use anyhow::Result;
use chatcard_core::formatting::{render_message, render_report_card};
use chatcard_core::settings::{Command, OutputFormat, Settings};
use chatcard_core::{ChatLineParser, ReportCardGenerator};
use clap::CommandFactory;
use serde::Serialize;

/// What one invocation prints, and whether the input was accepted.
#[derive(Debug, PartialEq, Eq)]
struct Outcome {
    output: String,
    accepted: bool,
}

fn main() -> Result<ExitCode> {
    let settings = Settings::load_with_last_used();

    bootstrap::ensure_directories()?;
    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("chatcard v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::debug!(
        format = ?settings.format,
        word_counting = settings.word_counting.as_str(),
        "settings resolved"
    );

    let Some(command) = settings.command.as_ref() else {
        if settings.clear {
            tracing::info!("saved configuration cleared");
        } else {
            Settings::command().print_help()?;
        }
        return Ok(ExitCode::SUCCESS);
    };

    let outcome = run(command, &settings)?;
    println!("{}", outcome.output);

    Ok(if outcome.accepted {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Execute one subcommand and render its result.
fn run(command: &Command, settings: &Settings) -> Result<Outcome> {
    match command {
        Command::ParseLine { line } => {
            let parser = ChatLineParser::new(settings.parser_config());
            let result = parser.try_parse_line(line);
            render(result, settings.format, render_message)
        }
        Command::ReportCard { record } => {
            let result = ReportCardGenerator::try_generate_str(record);
            render(result, settings.format, render_report_card)
        }
    }
}

fn render<T: Serialize>(
    result: chatcard_core::Result<T>,
    format: OutputFormat,
    as_text: fn(&T) -> String,
) -> Result<Outcome> {
    match result {
        Ok(value) => {
            let output = match format {
                OutputFormat::Json => serde_json::to_string_pretty(&value)?,
                OutputFormat::Text => as_text(&value),
            };
            Ok(Outcome {
                output,
                accepted: true,
            })
        }
        Err(e) if e.is_validation() => {
            tracing::warn!(reason = %e, "input rejected");
            let output = match format {
                OutputFormat::Json => "null".to_string(),
                OutputFormat::Text => format!("invalid: {e}"),
            };
            Ok(Outcome {
                output,
                accepted: false,
            })
        }
        Err(e) => Err(anyhow::Error::from(e)),
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

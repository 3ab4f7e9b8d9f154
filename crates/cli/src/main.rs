use api_shared::SubmitCheckinRes;
use clap::{Parser, Subcommand};
use std::io::Read;
use std::process::ExitCode;
use telecare_core::{
    constants::{
        CHANGE_REQUEST_KEYWORDS, LOW_EFFECTIVENESS_THRESHOLD, SEVERE_SIDE_EFFECT_THRESHOLD,
    },
    validate_checkin_body, CheckinService, CheckinSubmission, EvaluatedCheckin, FieldError,
};

#[derive(Parser)]
#[command(name = "telecare")]
#[command(about = "Telecare refill check-in triage CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a refill check-in JSON body
    Evaluate {
        /// Path to the JSON body, or `-` for stdin
        input: String,
        /// Print only the API response JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the triage thresholds and keywords
    Thresholds,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Evaluate { input, json }) => {
            let raw = read_input(&input)?;
            match evaluate_body(&raw, &CheckinService::default()) {
                Ok(evaluated) => {
                    let response = SubmitCheckinRes::from(&evaluated);
                    if json {
                        println!("{}", serde_json::to_string_pretty(&response)?);
                    } else {
                        println!("{}", response.message);
                        for reason in &evaluated.decision.reasons {
                            println!("  - {}", reason);
                        }
                        println!("{}", serde_json::to_string_pretty(&response.data)?);
                    }
                }
                Err(errors) => {
                    for error in errors {
                        if error.path.is_empty() {
                            eprintln!("Invalid check-in: {}", error.msg);
                        } else {
                            eprintln!("Invalid check-in field '{}': {}", error.path, error.msg);
                        }
                    }
                    return Ok(ExitCode::from(2));
                }
            }
        }
        Some(Commands::Thresholds) => {
            println!(
                "Severe side effect: severity >= {}",
                SEVERE_SIDE_EFFECT_THRESHOLD
            );
            println!(
                "Low effectiveness: effectiveness <= {}",
                LOW_EFFECTIVENESS_THRESHOLD
            );
            println!(
                "Change request keywords: {}",
                CHANGE_REQUEST_KEYWORDS.join(", ")
            );
            println!("Any reported red flag escalates.");
        }
        None => {
            println!("Use 'telecare --help' for commands");
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn read_input(input: &str) -> std::io::Result<String> {
    if input == "-" {
        let mut raw = String::new();
        std::io::stdin().read_to_string(&mut raw)?;
        Ok(raw)
    } else {
        std::fs::read_to_string(input)
    }
}

/// Applies the same checks as `POST /refill-checkins` to a raw body.
fn evaluate_body(
    raw: &str,
    service: &CheckinService,
) -> Result<EvaluatedCheckin, Vec<FieldError>> {
    let body: serde_json::Value = serde_json::from_str(raw)
        .map_err(|e| vec![FieldError::body(format!("invalid JSON: {}", e))])?;

    let errors = validate_checkin_body(&body);
    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(service.evaluate_refill_checkin(CheckinSubmission::from_json(&body)))
}

//! Endorisk: Symptom-based endometriosis risk classification
//!
//! CLI entry point. Reads a symptom document as JSON from a file or stdin
//! and prints the prediction record as JSON on stdout. Logs go to stderr.
//!
//! Input is either a single-day symptom map:
//!
//! ```json
//! {"Cramping": 1, "Migraines": 1}
//! ```
//!
//! or a multi-day document:
//!
//! ```json
//! {"daily_logs": [{"date": "2025-03-01", "symptoms": {"Cramping": 1}}]}
//! ```

use std::collections::HashMap;
use std::io::Read;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use endorisk::adapters::{HeuristicScorer, LogisticScorer};
use endorisk::application::PredictionService;
use endorisk::domain::DailyLog;
use endorisk::ports::RiskScorer;
use endorisk::SymptomKey;

const USAGE: &str = "Usage: endorisk [--input <path>] [--model <path>] [--list-symptoms]

Reads a single-day symptom map or a {\"daily_logs\": [...]} document as JSON
from --input (or stdin) and prints the prediction as JSON.

Options:
  --input <path>    Read the symptom document from a file instead of stdin
  --model <path>    Score with the logistic model at <path> instead of the
                    built-in weighted heuristic (env: ENDORISK_MODEL)
  --list-symptoms   Print the symptom catalog and exit
  -h, --help        Show this help";

#[derive(serde::Deserialize)]
struct MultiDayDocument {
    daily_logs: Vec<RawDailyLog>,
}

#[derive(serde::Deserialize)]
struct RawDailyLog {
    date: String,
    symptoms: serde_json::Map<String, serde_json::Value>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut input_path: Option<std::path::PathBuf> = None;
    let mut model_path = std::env::var_os("ENDORISK_MODEL").map(std::path::PathBuf::from);

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--input" => {
                let p = args.next().unwrap_or_default();
                if p.is_empty() {
                    eprintln!("{USAGE}");
                    std::process::exit(2);
                }
                input_path = Some(std::path::PathBuf::from(p));
            }
            "--model" => {
                let p = args.next().unwrap_or_default();
                if p.is_empty() {
                    eprintln!("{USAGE}");
                    std::process::exit(2);
                }
                model_path = Some(std::path::PathBuf::from(p));
            }
            "--list-symptoms" => {
                print_symptom_catalog()?;
                return Ok(());
            }
            "-h" | "--help" => {
                println!("{USAGE}");
                return Ok(());
            }
            _ => {
                eprintln!("Unknown arg: {arg}\n{USAGE}");
                std::process::exit(2);
            }
        }
    }

    let scorer: Arc<dyn RiskScorer> = match model_path {
        Some(path) => {
            tracing::info!("Using logistic model strategy");
            Arc::new(LogisticScorer::load(&path)?)
        }
        None => Arc::new(HeuristicScorer::new()),
    };
    let service = PredictionService::new(scorer);

    let content = match input_path {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read input file {path:?}"))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let document: serde_json::Value =
        serde_json::from_str(&content).context("Input is not valid JSON")?;

    let prediction = if document.get("daily_logs").is_some() {
        let multi: MultiDayDocument =
            serde_json::from_value(document).context("Malformed multi-day document")?;
        let logs = multi
            .daily_logs
            .into_iter()
            .map(|log| DailyLog::from_raw(log.date, &to_raw_map(&log.symptoms)))
            .collect::<Result<Vec<_>, _>>()?;
        service.predict_multi_day(&logs)?
    } else {
        let map = document
            .as_object()
            .context("Expected a JSON object of symptom values")?;
        service.predict_single(&to_raw_map(map))?
    };

    println!("{}", serde_json::to_string_pretty(&prediction)?);
    Ok(())
}

/// Convert a JSON object to the raw symptom map the domain consumes.
///
/// Non-numeric values become NaN so that recognized keys fail validation
/// with `InvalidSymptomValue` instead of being silently dropped.
fn to_raw_map(obj: &serde_json::Map<String, serde_json::Value>) -> HashMap<String, f64> {
    obj.iter()
        .map(|(k, v)| (k.clone(), v.as_f64().unwrap_or(f64::NAN)))
        .collect()
}

fn print_symptom_catalog() -> Result<()> {
    let symptoms: Vec<serde_json::Value> = SymptomKey::ALL
        .iter()
        .map(|k| serde_json::json!({"key": k.api_name(), "label": k.label()}))
        .collect();
    let catalog = serde_json::json!({
        "symptoms": symptoms,
        "total_count": symptoms.len(),
    });
    println!("{}", serde_json::to_string_pretty(&catalog)?);
    Ok(())
}

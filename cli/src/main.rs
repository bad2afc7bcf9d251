//! Scenario runner for the pricing simulator
//!
//! A thin stand-in for the (excluded) presentation layer: reads a scenario
//! file, calls the three engines, prints a JSON report to stdout. All
//! domain logic lives in `pricing-simulator-core`.
//!
//! ```text
//! pricing-sim <scenario.json>
//! ```
//!
//! Scenario shape (checklist and message sections optional):
//!
//! ```json
//! {
//!   "simulation": {
//!     "client_count": 15.0,
//!     "sessions_per_client": 8.0,
//!     "price_per_session": 150.0,
//!     "price_increase_percent": 20.0,
//!     "churn": { "mode": "percent", "value": 10.0 }
//!   },
//!   "checklist": { ... },
//!   "message": { "style": "official", "context": { ... } }
//! }
//! ```

use std::env;
use std::fs;
use std::process::ExitCode;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use pricing_simulator_core::{
    build_message, score, simulate, ChecklistInput, ChecklistResult, MessageContext,
    SimulationInput, SimulationResult,
};

#[derive(Debug, Error)]
enum ScenarioError {
    #[error("usage: pricing-sim <scenario.json>")]
    Usage,

    #[error("cannot read scenario file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid scenario: {0}")]
    Json(#[from] serde_json::Error),
}

/// One scenario file: simulation inputs plus optional checklist/message
#[derive(Debug, Deserialize)]
struct Scenario {
    simulation: SimulationInput,
    checklist: Option<ChecklistInput>,
    message: Option<MessageRequest>,
}

#[derive(Debug, Deserialize)]
struct MessageRequest {
    /// Template key as the form would submit it; unknown keys fall back
    style: String,
    context: MessageContext,
}

#[derive(Debug, Serialize)]
struct Report {
    simulation: SimulationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    checklist: Option<ChecklistResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

fn run() -> Result<(), ScenarioError> {
    let path = env::args().nth(1).ok_or(ScenarioError::Usage)?;
    let raw = fs::read_to_string(&path).map_err(|source| ScenarioError::Io {
        path: path.clone(),
        source,
    })?;
    let scenario: Scenario = serde_json::from_str(&raw)?;

    let report = Report {
        simulation: simulate(&scenario.simulation),
        checklist: scenario.checklist.as_ref().map(score),
        message: scenario
            .message
            .as_ref()
            .map(|req| build_message(&req.style, &req.context)),
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

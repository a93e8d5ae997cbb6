//! Message-driven solver endpoint
//!
//! Reads one JSON message per line, forwards it to a solver worker and writes one JSON
//! line per solve. Resets produce no output. Malformed or rejected messages are answered
//! with an `{"error": ...}` line and the loop carries on.

use crate::boundary::{BoundaryError, BoundaryMessage, SolverWorker};
use anyhow::{Result, bail};
use serde::Serialize;
use std::io::{BufRead, Write};
use tracing::{info, warn};

/// Counters for a finished serve loop
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ServeSummary {
    pub messages: usize,
    pub solves: usize,
    pub resets: usize,
    pub errors: usize,
}

#[derive(Serialize)]
struct ErrorReply {
    error: String,
}

/// Serve messages from `input` until it is exhausted
///
/// # Errors
///
/// Returns an error on I/O failure or if the worker thread has shut down.
pub fn run_serve<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    worker: &mut SolverWorker,
) -> Result<ServeSummary> {
    let mut summary = ServeSummary::default();

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        summary.messages += 1;

        let outcome = match serde_json::from_str::<BoundaryMessage>(&line) {
            Ok(BoundaryMessage::Reset) => {
                worker.reset()?;
                summary.resets += 1;
                continue;
            }
            Ok(BoundaryMessage::Solve(request)) => worker.solve(request),
            Err(e) => Err(BoundaryError::from(e)),
        };

        let reply = match outcome {
            Ok(response) => {
                summary.solves += 1;
                serde_json::to_string(&response)?
            }
            Err(BoundaryError::Disconnected) => bail!(BoundaryError::Disconnected),
            Err(e) => {
                warn!(error = %e, "message rejected");
                summary.errors += 1;
                serde_json::to_string(&ErrorReply {
                    error: e.to_string(),
                })?
            }
        };

        writeln!(output, "{reply}")?;
        output.flush()?;
    }

    info!(
        messages = summary.messages,
        solves = summary.solves,
        errors = summary.errors,
        "input closed"
    );
    Ok(summary)
}

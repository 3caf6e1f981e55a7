//! Printing search outcomes.

use std::fmt::Write;
use std::process::ExitCode;

use lapgrid_search::{SearchOutcome, SearchStats};

/// Exit status for an outcome: success only when a lap was found.
pub fn exit_code(outcome: &SearchOutcome) -> ExitCode {
    if outcome.is_found() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    }
}

/// Human-readable summary of `outcome`, one state per line for a lap.
pub fn render_text(outcome: &SearchOutcome) -> String {
    let mut out = String::new();
    match outcome {
        SearchOutcome::Found(lap) => {
            let _ = writeln!(out, "Minimum moves required: {}", lap.moves);
            let _ = writeln!(out, "Distinct cells visited: {}", lap.visited);
            let _ = writeln!(out, "Path (x, y, speed, heading):");
            for (i, state) in lap.path.iter().enumerate() {
                let _ = writeln!(out, "  {i:>4}: {state}");
            }
        }
        SearchOutcome::Exhausted(_) => {
            let _ = writeln!(out, "No valid path found.");
        }
        SearchOutcome::Aborted { limit, .. } => {
            let _ = writeln!(out, "Search stopped by {limit} before a lap was found.");
        }
    }
    write_stats(&mut out, outcome.stats());
    out
}

fn write_stats(out: &mut String, stats: &SearchStats) {
    let _ = writeln!(
        out,
        "Expanded {} states, generated {}, stored {}, peak open {} in {:.3}s",
        stats.expanded,
        stats.generated,
        stats.stored,
        stats.peak_open,
        stats.elapsed.as_secs_f64()
    );
}

/// Pretty-printed JSON encoding of `outcome`.
pub fn render_json(outcome: &SearchOutcome) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(outcome)
}

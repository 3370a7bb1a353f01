//! Report rendering: the solver's text layout plus a JSON artifact.
//!
//! The text form follows the classic interactive layout: the initial state
//! line, one line per move with the reversed block bracketed in the
//! resulting sequence, then the effort summary. The JSON form carries the
//! same content for machine consumption.

use std::fmt::Write;

use revsort_kernel::{Permutation, ReversalMove};

use crate::runner::{SolveOutcome, SolveReport};

/// Render a state with the just-reversed block bracketed, e.g.
/// `< 1 [2 6 4] 3 5 >`. No move, no brackets.
fn render_state(values: &Permutation, mv: Option<ReversalMove>) -> String {
    let mut out = String::from("<");
    for (i, value) in values.values().iter().enumerate() {
        let position = i + 1;
        out.push(' ');
        if matches!(mv, Some(m) if m.from() == position) {
            out.push('[');
        }
        let _ = write!(out, "{value}");
        if matches!(mv, Some(m) if m.to() == position) {
            out.push(']');
        }
    }
    out.push_str(" >");
    out
}

/// Render the human-readable report.
#[must_use]
pub fn render_text(report: &SolveReport) -> String {
    let mut out = String::new();
    match &report.outcome {
        SolveOutcome::Solved(path) => {
            let steps = path.steps();
            let root = &steps[0];
            let _ = writeln!(
                out,
                "Initial:  {}  h: {}, g: {}, f: {}",
                render_state(&root.values, None),
                root.h,
                root.g,
                root.g + root.h
            );
            for (number, step) in steps.iter().enumerate().skip(1) {
                let Some(mv) = step.mv else { continue };
                let _ = writeln!(
                    out,
                    "Move {number} {mv}:  {}  h: {}, g: {}, f: {}",
                    render_state(&step.values, Some(mv)),
                    step.h,
                    step.g,
                    step.g + step.h
                );
            }
            let _ = writeln!(out);
            let _ = writeln!(out, "Moves: {}", path.move_count());
        }
        SolveOutcome::Exhausted => {
            let _ = writeln!(out, "Initial:  {}", render_state(&report.initial, None));
            let _ = writeln!(out);
            let _ = writeln!(out, "No solution found.");
        }
    }
    let _ = writeln!(out, "Iterations: {}", report.stats.iterations);
    let _ = writeln!(out, "Distinct states: {}", report.stats.visited_states);
    let _ = writeln!(out, "Elapsed: {:.3}s", report.elapsed.as_secs_f64());
    out
}

/// Render the machine-readable report.
#[must_use]
pub fn to_json(report: &SolveReport) -> serde_json::Value {
    let moves = match &report.outcome {
        SolveOutcome::Solved(path) => path
            .steps()
            .iter()
            .filter_map(|step| {
                let mv = step.mv?;
                Some(serde_json::json!({
                    "from": mv.from(),
                    "to": mv.to(),
                    "state": step.values.values(),
                    "g": step.g,
                    "h": step.h,
                }))
            })
            .collect(),
        SolveOutcome::Exhausted => Vec::new(),
    };

    serde_json::json!({
        "initial": report.initial.values(),
        "solved": report.is_solved(),
        "moves": moves,
        "move_count": match &report.outcome {
            SolveOutcome::Solved(path) => Some(path.move_count()),
            SolveOutcome::Exhausted => None,
        },
        "stats": {
            "iterations": report.stats.iterations,
            "generated": report.stats.generated,
            "duplicates_suppressed": report.stats.duplicates_suppressed,
            "visited_states": report.stats.visited_states,
            "frontier_high_water": report.stats.frontier_high_water,
        },
        "elapsed_ms": report.elapsed.as_secs_f64() * 1000.0,
    })
}

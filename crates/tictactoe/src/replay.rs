//! Non-interactive replay of a move list.

use crate::input::{ParseCommandError, parse_pair};
use serde::Serialize;
use std::io::Write;
use tictactoe_core::{GameSession, MoveReport, Scores};
use tracing::instrument;

/// One replayed move and its report.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayStep {
    /// Requested row.
    pub row: i64,
    /// Requested column.
    pub col: i64,
    /// What the session reported.
    pub report: MoveReport,
}

/// Parses every move first, then submits them in order.
///
/// Moves after the round ends are reported as illegal; no new round is
/// started.
#[instrument(skip(session))]
pub fn replay(
    session: &mut GameSession,
    moves: &[String],
) -> Result<Vec<ReplayStep>, ParseCommandError> {
    let pairs = moves
        .iter()
        .map(|text| parse_pair(text))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(pairs
        .into_iter()
        .map(|(row, col)| ReplayStep {
            row,
            col,
            report: session.submit_move(row, col),
        })
        .collect())
}

/// Writes each step, then the score card, one JSON document per line.
pub fn write_json(
    mut out: impl Write,
    steps: &[ReplayStep],
    scores: &Scores,
) -> anyhow::Result<()> {
    for step in steps {
        writeln!(out, "{}", serde_json::to_string(step)?)?;
    }
    writeln!(out, "{}", serde_json::to_string(scores)?)?;
    Ok(())
}

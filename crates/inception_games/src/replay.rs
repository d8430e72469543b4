//! Headless replay of a move list.
//!
//! Each move is four digits `RCrc`: meta row, meta column, sub row, sub
//! column. Commas, colons and whitespace between the digits are ignored, so
//! `1100`, `1,1,0,0` and `11:00` are the same move.

use derive_more::{Display, Error};
use inception_tictactoe::invariants::{InvariantSet, MetaBoardInvariants};
use inception_tictactoe::{GameStatus, InvalidMove, MetaBoard, Player};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// A move as written on the command line, as board indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coords {
    /// Meta-board row.
    pub meta_row: usize,
    /// Meta-board column.
    pub meta_col: usize,
    /// Row within the sub-board.
    pub sub_row: usize,
    /// Column within the sub-board.
    pub sub_col: usize,
}

impl std::str::FromStr for Coords {
    type Err = ReplayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits: Vec<usize> = s
            .chars()
            .filter(|c| !matches!(c, ',' | ':') && !c.is_whitespace())
            .map(|c| c.to_digit(10).map(|d| d as usize))
            .collect::<Option<_>>()
            .ok_or_else(|| ReplayError::Parse { input: s.to_string() })?;

        match digits[..] {
            [meta_row, meta_col, sub_row, sub_col] => Ok(Self {
                meta_row,
                meta_col,
                sub_row,
                sub_col,
            }),
            _ => Err(ReplayError::Parse { input: s.to_string() }),
        }
    }
}

/// Errors from a replay run.
#[derive(Debug, Clone, PartialEq, Display, Error)]
pub enum ReplayError {
    /// A move is not four digits.
    #[display("Cannot parse move {:?}: expected four digits RCrc", input)]
    Parse {
        /// The move as given.
        input: String,
    },

    /// A move was rejected by the game in strict mode.
    #[display("Move {} ({}) rejected: {}", index, input, source)]
    Rejected {
        /// One-based position in the move list.
        index: usize,
        /// The move as given.
        input: String,
        /// Why the game rejected it.
        source: InvalidMove,
    },
}

/// A move the game refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedMove {
    /// One-based position in the move list.
    pub index: usize,
    /// The move as given.
    pub input: String,
    /// Why the game rejected it.
    pub reason: String,
}

/// The result of replaying a move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    /// Overall status after the last move.
    pub status: GameStatus,
    /// Player to move next.
    pub turn: Player,
    /// Moves skipped because the game rejected them.
    pub rejected: Vec<RejectedMove>,
    /// The final game.
    pub game: MetaBoard,
}

impl ReplayReport {
    /// Human-readable summary: status line, grid, then any skipped moves.
    pub fn to_text(&self) -> String {
        let mut text = match self.status {
            GameStatus::InProgress => format!("In progress, {} to move", self.turn),
            decided => decided.to_string(),
        };
        text.push_str("\n\n");
        text.push_str(&self.game.display());
        for rejected in &self.rejected {
            text.push_str(&format!(
                "\nskipped move {} ({}): {}",
                rejected.index, rejected.input, rejected.reason
            ));
        }
        text
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns a serialization error from `serde_json`.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Plays `moves` in order from a fresh game.
///
/// Rejected moves are skipped with a warning, or abort the run when `strict`
/// is set. Unparseable moves always abort.
///
/// # Errors
///
/// Returns [`ReplayError::Parse`] for malformed input and
/// [`ReplayError::Rejected`] for a rejected move in strict mode.
#[instrument(skip(moves), fields(count = moves.len()))]
pub fn replay<S: AsRef<str>>(moves: &[S], strict: bool) -> Result<ReplayReport, ReplayError> {
    let mut game = MetaBoard::new();
    let mut rejected = Vec::new();

    for (i, input) in moves.iter().map(AsRef::as_ref).enumerate() {
        let index = i + 1;
        let coords: Coords = input.parse()?;
        match game.play_at(coords.meta_row, coords.meta_col, coords.sub_row, coords.sub_col) {
            Ok(()) => debug!(index, input, "Move applied"),
            Err(source) if strict => {
                return Err(ReplayError::Rejected {
                    index,
                    input: input.to_string(),
                    source,
                });
            }
            Err(e) => {
                warn!(index, input, error = %e, "Skipping rejected move");
                rejected.push(RejectedMove {
                    index,
                    input: input.to_string(),
                    reason: e.to_string(),
                });
            }
        }
    }

    if let Err(violations) = MetaBoardInvariants::check_all(&game) {
        for violation in &violations {
            warn!(invariant = %violation.description, "Replayed game violates an invariant");
        }
    }

    info!(status = %game.status(), accepted = game.history().len(), skipped = rejected.len(), "Replay finished");
    Ok(ReplayReport {
        status: game.status(),
        turn: game.turn(),
        rejected,
        game,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_separators() {
        let expected = Coords {
            meta_row: 1,
            meta_col: 2,
            sub_row: 0,
            sub_col: 1,
        };
        for input in ["1201", "1,2,0,1", "12:01", " 1 2 0 1 "] {
            assert_eq!(input.parse::<Coords>(), Ok(expected), "{input}");
        }
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in ["", "120", "12011", "12a1", "1-2-0-1"] {
            assert!(input.parse::<Coords>().is_err(), "{input}");
        }
    }

    #[test]
    fn test_out_of_range_digits_reach_the_game() {
        let report = replay(&["3000"], false).unwrap();
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.game, MetaBoard::new());
    }
}

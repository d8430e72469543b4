//! Alternating turn invariant: players take turns, X first.

use super::Invariant;
use crate::{MetaBoard, Player};

/// Invariant: moves alternate between players, starting with X.
///
/// While the game is in progress the player to move is the opponent of the
/// last mover. Once the game is decided the turn stays with the last mover.
pub struct AlternatingTurnInvariant;

impl Invariant<MetaBoard> for AlternatingTurnInvariant {
    fn holds(game: &MetaBoard) -> bool {
        let alternates = game.history().iter().enumerate().all(|(i, mov)| {
            let expected = if i % 2 == 0 { Player::X } else { Player::O };
            mov.player == expected
        });

        let expected_turn = match game.last_move() {
            None => Player::X,
            Some(last) if game.status().is_decided() => last.player,
            Some(last) => last.player.opponent(),
        };

        alternates && game.turn() == expected_turn
    }

    fn description() -> &'static str {
        "Players alternate turns starting with X"
    }
}

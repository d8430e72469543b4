//! Tests for the meta-board state machine.

use inception_tictactoe::{
    GameStatus, InvalidMove, MetaBoard, Move, Player, Position, SubBoardStatus,
    invariants::{InvariantSet, MetaBoardInvariants},
};

use Player::{O, X};

/// Makes `winner` take the top row of sub-board `(meta_row, meta_col)`.
///
/// The other player fills in along the bottom-left of the same sub-board,
/// which never forms a line.
fn win_board(game: &mut MetaBoard, meta_row: usize, meta_col: usize, winner: Player) {
    let mut filler = [(2, 0), (2, 1), (1, 0)].into_iter();
    if game.turn() != winner {
        let (row, col) = filler.next().unwrap();
        game.play_at(meta_row, meta_col, row, col).expect("Filler move");
    }
    for col in 0..3 {
        game.play_at(meta_row, meta_col, 0, col).expect("Winning move");
        if col < 2 {
            let (row, col) = filler.next().unwrap();
            game.play_at(meta_row, meta_col, row, col).expect("Filler move");
        }
    }
    assert_eq!(
        game.board_at(meta_row, meta_col).unwrap().status(),
        SubBoardStatus::Won(winner)
    );
}

/// Plays a full draw into sub-board `(meta_row, meta_col)`, X first.
///
/// Final pattern: X O X / O X X / O X O.
fn draw_board(game: &mut MetaBoard, meta_row: usize, meta_col: usize) {
    assert_eq!(game.turn(), X);
    let x_cells = [(0, 0), (0, 2), (1, 1), (1, 2), (2, 1)];
    let o_cells = [(0, 1), (1, 0), (2, 0), (2, 2)];
    for i in 0..5 {
        let (row, col) = x_cells[i];
        game.play_at(meta_row, meta_col, row, col).expect("X move");
        if let Some((row, col)) = o_cells.get(i) {
            game.play_at(meta_row, meta_col, *row, *col).expect("O move");
        }
    }
}

#[test]
fn test_new_game_state() {
    let game = MetaBoard::new();
    assert_eq!(game.turn(), X);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.open_boards().len(), 9);
    assert!(game.history().is_empty());
    assert!(
        game.boards()
            .iter()
            .all(|b| b.cells().iter().all(|c| c.is_empty()))
    );
}

#[test]
fn test_turn_alternates() {
    let mut game = MetaBoard::new();
    game.play_at(0, 0, 1, 1).unwrap();
    assert_eq!(game.turn(), O);
    game.play_at(2, 2, 0, 0).unwrap();
    assert_eq!(game.turn(), X);
    assert_eq!(game.history(), &[
        Move::new(X, Position::TopLeft, Position::Center),
        Move::new(O, Position::BottomRight, Position::TopLeft),
    ]);
}

#[test]
fn test_out_of_range_sub_row_leaves_board_unchanged() {
    let mut game = MetaBoard::new();
    game.play_at(1, 1, 1, 1).unwrap();
    let before = game.clone();

    assert_eq!(
        game.play_at(0, 0, 3, 0),
        Err(InvalidMove::OutOfBounds { row: 3, col: 0 })
    );
    assert_eq!(
        game.play_at(0, 3, 0, 0),
        Err(InvalidMove::OutOfBounds { row: 0, col: 3 })
    );
    assert_eq!(game, before);
}

#[test]
fn test_occupied_cell_rejected_without_turn_change() {
    let mut game = MetaBoard::new();
    game.play_at(1, 1, 1, 1).unwrap();
    let before = game.clone();

    assert_eq!(game.play_at(1, 1, 1, 1), Err(InvalidMove::CellOccupied));
    assert_eq!(game, before);
    assert_eq!(game.turn(), O);
}

#[test]
fn test_won_sub_board_closed() {
    let mut game = MetaBoard::new();
    win_board(&mut game, 2, 0, X);
    let before = game.clone();

    assert_eq!(game.play_at(2, 0, 1, 1), Err(InvalidMove::BoardClosed));
    assert_eq!(game, before);
    assert!(!game.open_boards().contains(&Position::BottomLeft));
    assert!(!game.is_playable(Position::BottomLeft, Position::Center));
}

#[test]
fn test_drawn_sub_board_is_reset_and_playable() {
    let mut game = MetaBoard::new();
    draw_board(&mut game, 1, 1);

    let center = game.board(Position::Center);
    assert_eq!(center.status(), SubBoardStatus::InProgress);
    assert!(center.cells().iter().all(|c| c.is_empty()));
    assert_eq!(game.history().len(), 9);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.turn(), O);

    game.play_at(1, 1, 1, 1).expect("Reopened board accepts moves");
    assert_eq!(
        game.board(Position::Center).cell(Position::Center).mark(),
        Some(O)
    );
}

#[test]
fn test_three_sub_boards_in_top_row_win_game() {
    let mut game = MetaBoard::new();
    win_board(&mut game, 0, 0, O);
    win_board(&mut game, 0, 1, O);
    assert_eq!(game.status(), GameStatus::InProgress);
    win_board(&mut game, 0, 2, O);

    assert_eq!(game.status(), GameStatus::Won(O));
    assert_eq!(game.evaluate_overall_status(), GameStatus::Won(O));
    // The deciding move does not hand the turn over.
    assert_eq!(game.turn(), O);
    assert!(game.open_boards().is_empty());
}

#[test]
fn test_decided_game_rejects_every_move() {
    let mut game = MetaBoard::new();
    for meta_row in 0..3 {
        win_board(&mut game, meta_row, meta_row, X);
    }
    assert_eq!(game.status(), GameStatus::Won(X));
    let before = game.clone();

    for board in Position::ALL {
        for cell in Position::ALL {
            assert_eq!(
                game.play_at(board.row(), board.col(), cell.row(), cell.col()),
                Err(InvalidMove::GameOver)
            );
            assert!(!game.is_playable(board, cell));
        }
    }
    assert_eq!(game.play_at(5, 5, 5, 5), Err(InvalidMove::GameOver));
    assert_eq!(game, before);
}

#[test]
fn test_drawn_sub_board_never_completes_meta_line() {
    let mut game = MetaBoard::new();
    draw_board(&mut game, 0, 0);
    win_board(&mut game, 0, 1, X);
    win_board(&mut game, 0, 2, X);

    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.board_at(0, 0).unwrap().status(), SubBoardStatus::InProgress);

    win_board(&mut game, 0, 0, X);
    assert_eq!(game.status(), GameStatus::Won(X));
}

#[test]
fn test_all_boards_won_without_line_is_drawn() {
    // X O X / X O O / O X X
    let winners = [[X, O, X], [X, O, O], [O, X, X]];
    let mut game = MetaBoard::new();
    for (meta_row, row) in winners.iter().enumerate() {
        for (meta_col, winner) in row.iter().enumerate() {
            assert_eq!(game.status(), GameStatus::InProgress);
            win_board(&mut game, meta_row, meta_col, *winner);
        }
    }

    assert_eq!(game.status(), GameStatus::Drawn);
    assert_eq!(game.status().winner(), None);
    assert_eq!(game.play_at(0, 0, 2, 2), Err(InvalidMove::GameOver));
}

#[test]
fn test_evaluate_overall_status_is_idempotent() {
    let mut game = MetaBoard::new();
    win_board(&mut game, 1, 1, X);
    let first = game.evaluate_overall_status();
    assert_eq!(game.evaluate_overall_status(), first);
    assert_eq!(game.status(), first);
}

#[test]
fn test_new_game_resets_everything() {
    let mut game = MetaBoard::new();
    for col in 0..3 {
        win_board(&mut game, 2, col, O);
    }
    assert_eq!(game.status(), GameStatus::Won(O));

    game.new_game();
    assert_eq!(game, MetaBoard::new());
    assert!(game.play_at(2, 0, 0, 0).is_ok());
}

#[test]
fn test_replay_reproduces_game() {
    let mut game = MetaBoard::new();
    draw_board(&mut game, 2, 2);
    win_board(&mut game, 0, 1, O);
    game.play_at(1, 0, 2, 2).unwrap();

    let replayed = MetaBoard::replay(game.history()).expect("Valid replay");
    assert_eq!(replayed, game);
    assert!(MetaBoardInvariants::check_all(&game).is_ok());
}

#[test]
fn test_replay_rejects_wrong_player() {
    let moves = [
        Move::new(X, Position::Center, Position::Center),
        Move::new(X, Position::Center, Position::TopLeft),
    ];
    assert_eq!(MetaBoard::replay(&moves), Err(InvalidMove::WrongPlayer(X)));
}

#[test]
fn test_snapshot_serializes() {
    let mut game = MetaBoard::new();
    win_board(&mut game, 1, 2, X);

    let json = serde_json::to_string(&game).expect("Serialize");
    let restored: MetaBoard = serde_json::from_str(&json).expect("Deserialize");
    assert_eq!(restored, game);
}

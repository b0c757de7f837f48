//! Property-based tests for board evaluation and move application.
//!
//! 1. A completed line of one mark always evaluates to a win for that mark.
//! 2. A full board with no completed line evaluates to a tie.
//! 3. A board with an empty square and no completed line is in progress.
//! 4. Moving onto an occupied square never changes the board or the turn.
//! 5. Accepted moves flip the turn exactly once.
//! 6. Games built from arbitrary selections keep X/O counts balanced.

use noughts::{
    Board, Game, GameStatus, LINES, MoveError, Player, Square, apply_move, check_winner, evaluate,
};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn player_strategy() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::X), Just(Player::O)]
}

fn square_strategy() -> impl Strategy<Value = Square> {
    prop_oneof![
        Just(Square::Empty),
        player_strategy().prop_map(Square::Occupied),
    ]
}

fn board_strategy() -> impl Strategy<Value = Board> {
    proptest::array::uniform9(square_strategy()).prop_map(Board::from_squares)
}

fn full_board_strategy() -> impl Strategy<Value = Board> {
    proptest::array::uniform9(player_strategy().prop_map(Square::Occupied))
        .prop_map(Board::from_squares)
}

fn has_complete_line(board: &Board) -> bool {
    LINES.iter().any(|[a, b, c]| {
        board.get(*a) != Square::Empty
            && board.get(*a) == board.get(*b)
            && board.get(*b) == board.get(*c)
    })
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn completed_line_wins(
        board in board_strategy(),
        line in 0usize..8,
        player in player_strategy(),
    ) {
        let mut squares = *board.squares();
        for pos in LINES[line] {
            squares[pos.to_index()] = Square::Occupied(player);
        }
        let board = Board::from_squares(squares);

        // The first completed line decides; the forced line is a candidate.
        match evaluate(&board) {
            GameStatus::Won(winner) => {
                let forced_is_first = !LINES[..line].iter().any(|[a, b, c]| {
                    board.get(*a) != Square::Empty
                        && board.get(*a) == board.get(*b)
                        && board.get(*b) == board.get(*c)
                });
                if forced_is_first {
                    prop_assert_eq!(winner, player);
                }
            }
            other => prop_assert!(false, "expected a win, got {:?}", other),
        }
    }

    #[test]
    fn full_board_without_line_ties(
        board in full_board_strategy().prop_filter("no completed line", |b| !has_complete_line(b)),
    ) {
        prop_assert_eq!(evaluate(&board), GameStatus::Tied);
    }

    #[test]
    fn open_board_without_line_in_progress(
        board in board_strategy().prop_filter("no completed line", |b| !has_complete_line(b)),
        hole in 0usize..9,
    ) {
        let mut squares = *board.squares();
        squares[hole] = Square::Empty;
        let board = Board::from_squares(squares);
        prop_assert_eq!(evaluate(&board), GameStatus::InProgress);
    }

    #[test]
    fn evaluate_agrees_with_check_winner(board in board_strategy()) {
        prop_assert_eq!(evaluate(&board).winner(), check_winner(&board));
        prop_assert_eq!(check_winner(&board).is_some(), has_complete_line(&board));
    }

    #[test]
    fn occupied_square_rejected(
        board in board_strategy(),
        turn in player_strategy(),
        index in 0usize..9,
        owner in player_strategy(),
    ) {
        let mut squares = *board.squares();
        squares[index] = Square::Occupied(owner);
        let board = Board::from_squares(squares);
        let before = board;
        let result = apply_move(&board, turn, index);
        prop_assert!(matches!(result, Err(MoveError::SquareOccupied(_))));
        prop_assert_eq!(board, before);
    }

    #[test]
    fn accepted_move_flips_turn(
        board in board_strategy(),
        turn in player_strategy(),
        index in 0usize..9,
    ) {
        let mut squares = *board.squares();
        squares[index] = Square::Empty;
        let board = Board::from_squares(squares);
        let (next, next_turn) = apply_move(&board, turn, index).unwrap();
        prop_assert_eq!(next_turn, turn.opponent());
        prop_assert_eq!(next.get_index(index), Some(Square::Occupied(turn)));
        prop_assert_eq!(next.occupied(), board.occupied() + 1);
    }

    #[test]
    fn out_of_range_rejected(index in 9usize..1000, turn in player_strategy()) {
        prop_assert_eq!(
            apply_move(&Board::new(), turn, index),
            Err(MoveError::OutOfRange(index))
        );
    }

    #[test]
    fn arbitrary_selections_keep_game_consistent(
        selections in proptest::collection::vec(0usize..12, 0..30),
    ) {
        let mut game = Game::new();
        for index in selections {
            let before = game.clone();
            if game.play(index).is_err() {
                prop_assert_eq!(&game, &before);
            }
            let x = game.board().count(Player::X);
            let o = game.board().count(Player::O);
            prop_assert!(x == o || x == o + 1);
            prop_assert_eq!(game.history().len(), x + o);
            prop_assert_eq!(game.status(), evaluate(game.board()));
        }
    }
}

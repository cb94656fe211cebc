//! Legal move generation by ray scanning.

use std::iter;

use crate::board::BoardState;
use crate::types::{Cell, Move, Player, Position};

/// `(row, col)` steps, in the order captures are reported.
const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Legal moves for the side to move, row-major.
pub fn legal_moves(board: &BoardState) -> Vec<Move> {
    legal_moves_for(board, board.current_player())
}

/// Legal moves for `player` regardless of whose turn it is, row-major.
pub fn legal_moves_for(board: &BoardState, player: Player) -> Vec<Move> {
    Position::all()
        .filter_map(|position| {
            captures(board, position, player).map(|flips| Move::new(position, flips))
        })
        .collect()
}

/// Whether `player` has at least one legal move. Stops at the first one found.
pub fn has_any_legal_move(board: &BoardState, player: Player) -> bool {
    Position::all().any(|position| is_legal(board, position, player))
}

/// Whether `player` may place a disc on `position`.
pub fn is_legal(board: &BoardState, position: Position, player: Player) -> bool {
    board.cell(position) == Some(Cell::Empty)
        && DIRECTIONS
            .iter()
            .any(|&direction| bracketed_run(board, position, direction, player) > 0)
}

/// Discs `player` would flip by playing `position`, or `None` when the square is
/// off the board, occupied, or flips nothing.
pub fn captures(board: &BoardState, position: Position, player: Player) -> Option<Vec<Position>> {
    if board.cell(position) != Some(Cell::Empty) {
        return None;
    }

    let mut flips = Vec::new();
    for (dr, dc) in DIRECTIONS {
        let length = bracketed_run(board, position, (dr, dc), player);
        let run = iter::successors(position.offset(dr, dc), |square| square.offset(dr, dc));
        flips.extend(run.take(length));
    }

    (!flips.is_empty()).then_some(flips)
}

/// Length of the opponent run starting next to `from` in one direction, if it is
/// closed by a `player` disc. Zero otherwise.
fn bracketed_run(
    board: &BoardState,
    from: Position,
    (dr, dc): (i8, i8),
    player: Player,
) -> usize {
    let own = Cell::from(player);
    let enemy = Cell::from(!player);

    let mut length = 0;
    let mut square = from;
    loop {
        square = match square.offset(dr, dc) {
            Some(next) => next,
            None => return 0,
        };

        match board.cell_at(square) {
            cell if cell == enemy => length += 1,
            cell if cell == own => return length,
            _ => return 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &str, player: Player) -> BoardState {
        BoardState::from_text(rows, player).unwrap()
    }

    fn positions(moves: &[Move]) -> Vec<Position> {
        moves.iter().map(Move::position).collect()
    }

    #[test]
    fn t01_initial_black_legal_moves_are_four_expected_squares() {
        let moves = legal_moves(&BoardState::new());

        assert_eq!(
            positions(&moves),
            vec![
                Position::new(2, 3),
                Position::new(3, 2),
                Position::new(4, 5),
                Position::new(5, 4),
            ]
        );
        for mv in &moves {
            assert_eq!(mv.captures().len(), 1);
        }
    }

    #[test]
    fn initial_white_legal_moves_are_four_expected_squares() {
        let start = BoardState::new().with_side_to_move(Player::White);

        assert_eq!(
            positions(&legal_moves(&start)),
            vec![
                Position::new(2, 4),
                Position::new(3, 5),
                Position::new(4, 2),
                Position::new(5, 3),
            ]
        );
    }

    #[test]
    fn no_moves_without_opponent_discs() {
        let b = board(
            "........\n........\n........\n...BBB..\n........\n........\n........\n........",
            Player::Black,
        );

        assert!(legal_moves(&b).is_empty());
        assert!(!has_any_legal_move(&b, Player::Black));
    }

    #[test]
    fn horizontal_capture() {
        let b = board(
            "........\n........\n........\n..BW....\n........\n........\n........\n........",
            Player::Black,
        );
        let moves = legal_moves(&b);

        assert_eq!(positions(&moves), vec![Position::new(3, 4)]);
        assert_eq!(moves[0].captures(), &[Position::new(3, 3)]);
    }

    #[test]
    fn vertical_capture() {
        let b = board(
            "........\n...B....\n...W....\n........\n........\n........\n........\n........",
            Player::Black,
        );

        assert_eq!(
            captures(&b, Position::new(3, 3), Player::Black),
            Some(vec![Position::new(2, 3)])
        );
    }

    #[test]
    fn diagonal_capture() {
        let b = board(
            "........\n...B....\n....W...\n........\n........\n........\n........\n........",
            Player::Black,
        );

        assert_eq!(
            captures(&b, Position::new(3, 5), Player::Black),
            Some(vec![Position::new(2, 4)])
        );
    }

    #[test]
    fn captures_are_union_of_all_directions() {
        let b = board(
            ".....B..\n..BWW...\n...BWW..\n...B.W..\n.....B..\n........\n........\n........",
            Player::Black,
        );
        let flips = captures(&b, Position::new(1, 5), Player::Black).unwrap();

        // West, then south-west, then south.
        assert_eq!(
            flips,
            vec![
                Position::new(1, 4),
                Position::new(1, 3),
                Position::new(2, 4),
                Position::new(2, 5),
                Position::new(3, 5),
            ]
        );
    }

    #[test]
    fn captures_whole_line() {
        let b = board(
            "........\n........\n........\nBWWW....\n........\n........\n........\n........",
            Player::Black,
        );

        assert_eq!(
            captures(&b, Position::new(3, 4), Player::Black),
            Some(vec![Position::new(3, 3), Position::new(3, 2), Position::new(3, 1)])
        );
    }

    #[test]
    fn runs_open_at_edge_or_gap_capture_nothing() {
        let edge = board(
            "WWB.....\n........\n........\n........\n........\n........\n........\n........",
            Player::Black,
        );
        assert!(legal_moves(&edge).is_empty());

        let gap = board(
            "........\n........\n........\n.BW.W...\n........\n........\n........\n........",
            Player::Black,
        );
        assert_eq!(
            captures(&gap, Position::new(3, 3), Player::Black),
            Some(vec![Position::new(3, 2)])
        );
        assert_eq!(captures(&gap, Position::new(3, 5), Player::Black), None);
    }

    #[test]
    fn occupied_and_off_board_squares_are_never_legal() {
        let b = BoardState::new();

        assert_eq!(captures(&b, Position::new(3, 3), Player::Black), None);
        assert_eq!(captures(&b, Position::new(8, 3), Player::Black), None);
        assert_eq!(captures(&b, Position::new(0, 0), Player::Black), None);
        assert!(!is_legal(&b, Position::new(4, 4), Player::Black));
    }

    #[test]
    fn legal_moves_for_ignores_side_to_move() {
        let b = BoardState::new();

        assert_eq!(
            positions(&legal_moves_for(&b, Player::White)),
            positions(&legal_moves(&b.with_side_to_move(Player::White)))
        );
        assert!(has_any_legal_move(&b, Player::White));
        assert_eq!(b.current_player(), Player::Black);
    }

    #[test]
    fn has_any_legal_move_agrees_with_legal_moves() {
        let b = board(
            "BBBBBBBB\nBBBBBBBB\nBBBBBBBB\nBBBBBBBB\nBBBBBBBB\nBBBBBBBB\nBBBBBBBB\nBBBBBWB.",
            Player::Black,
        );

        assert!(!has_any_legal_move(&b, Player::Black));
        assert!(has_any_legal_move(&b, Player::White));
        assert_eq!(
            positions(&legal_moves_for(&b, Player::White)),
            vec![Position::new(7, 7)]
        );
    }
}

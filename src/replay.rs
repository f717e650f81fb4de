//! Board reconstruction from a game record.
//!
//! Builds a fresh [`Board`] for a root node: its size from `SZ`, setup
//! stones from `AB`/`AW`, then the main-line moves in order.

use tracing::debug;

use crate::board::{Board, Color};
use crate::constants::{DEFAULT_BOARD_SIZE, KEY_ADD_BLACK, KEY_ADD_WHITE, KEY_SIZE, MAX_BOARD_SIZE};
use crate::coord::parse_coord;
use crate::game::main_line_moves;
use crate::node::Node;

/// Board size declared by `root`, or the default when `SZ` is missing,
/// not a number, or outside `1..=52`.
pub fn board_size(root: &Node) -> usize {
    match root.get(KEY_SIZE).trim().parse::<usize>() {
        Ok(size) if (1..=MAX_BOARD_SIZE).contains(&size) => size,
        _ => DEFAULT_BOARD_SIZE,
    }
}

/// Play the `AB` then `AW` point lists of `node` onto `board`.
pub fn setup_stones(board: &mut Board, node: &Node) {
    for (key, color) in [(KEY_ADD_BLACK, Color::Black), (KEY_ADD_WHITE, Color::White)] {
        for (x, y) in node.values(key).unwrap_or_default().iter().filter_map(|v| parse_coord(v)) {
            board.play(x, y, color);
        }
    }
}

/// Replay the game rooted at `root`, stopping after `move_limit` moves.
///
/// `None` replays every main-line move. Passes and unreadable points count
/// toward the limit without changing the board.
pub fn replay(root: &Node, move_limit: Option<usize>) -> Board {
    let mut board = Board::new(board_size(root));
    setup_stones(&mut board, root);

    let moves = main_line_moves(root);
    let limit = move_limit.map_or(moves.len(), |n| n.min(moves.len()));
    let mut captures = 0;
    for mv in &moves[..limit] {
        if let Some((x, y)) = parse_coord(&mv.coord) {
            captures += board.play(x, y, mv.color).captures;
        }
    }
    debug!(size = board.size, played = limit, total = moves.len(), captures, "replayed game");
    board
}

//! Entry points for callers that hand raw record text to this crate and
//! forward the result, such as a tool-calling assistant or an image renderer.

use serde_json::{Value, json};
use thiserror::Error;

use crate::board::Board;
use crate::game::{GameData, extract_game_data};
use crate::node::Node;
use crate::parser::{ParseError, parse};
use crate::replay::replay;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("No game found")]
    NoGame,
}

fn first_game(content: &str) -> Result<Node, RecordError> {
    parse(content)?.into_iter().next().ok_or(RecordError::NoGame)
}

/// Parse `content` and summarize its first game.
pub fn read_game_record(content: &str) -> Result<GameData, RecordError> {
    let root = first_game(content)?;
    Ok(extract_game_data(&root))
}

/// Board position of the first game after `move_number` moves, or at the end
/// of the main line when `None`.
pub fn board_snapshot(content: &str, move_number: Option<usize>) -> Result<Board, RecordError> {
    let root = first_game(content)?;
    Ok(replay(&root, move_number))
}

/// JSON payload for a "read game record" tool call: the game info, move
/// count, and move preview, or `{"error": ...}`.
pub fn tool_result(outcome: &Result<GameData, RecordError>) -> Value {
    match outcome {
        Ok(data) => json!({
            "gameInfo": data.game_info,
            "movesCount": data.moves_count,
            "moves": data.moves,
        }),
        Err(e) => json!({ "error": e.to_string() }),
    }
}

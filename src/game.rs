//! Game summary extraction.
//!
//! Reads the fixed metadata properties of a root node and collects the moves
//! along its main line. Only the first child of each node is followed;
//! variations are never visited.

use serde::Serialize;

use crate::color::Color;
use crate::constants::*;
use crate::node::Node;

/// Flattened root metadata. Every field is a raw string from the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameInfo {
    pub black_player: String,
    pub white_player: String,
    pub result: String,
    pub komi: String,
    pub size: String,
    pub handicap: String,
    pub comment: String,
}

impl GameInfo {
    pub fn from_root(root: &Node) -> Self {
        Self {
            black_player: or_default(root.get(KEY_BLACK_PLAYER), UNKNOWN),
            white_player: or_default(root.get(KEY_WHITE_PLAYER), UNKNOWN),
            result: or_default(root.get(KEY_RESULT), UNKNOWN),
            komi: or_default(root.get(KEY_KOMI), UNKNOWN),
            size: or_default(root.get(KEY_SIZE), UNKNOWN),
            handicap: or_default(root.get(KEY_HANDICAP), DEFAULT_HANDICAP),
            comment: root.get(KEY_COMMENT).to_string(),
        }
    }
}

fn or_default(value: &str, default: &str) -> String {
    let value = if value.is_empty() { default } else { value };
    value.to_string()
}

/// A single move of the main line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Move {
    pub color: Color,
    /// Two-letter point, or empty for a pass.
    #[serde(rename = "move")]
    pub coord: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Move {
    /// Read the move carried by `node`, if any. Black is checked first.
    pub fn from_node(node: &Node) -> Option<Self> {
        let color = [Color::Black, Color::White]
            .into_iter()
            .find(|c| node.has(c.move_key()))?;
        let comment = node.get(KEY_COMMENT);
        Some(Self {
            color,
            coord: node.get(color.move_key()).to_string(),
            comment: (!comment.is_empty()).then(|| comment.to_string()),
        })
    }

    pub fn is_pass(&self) -> bool {
        self.coord.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameData {
    pub game_info: GameInfo,
    pub moves_count: usize,
    /// The first [`MOVE_PREVIEW_LIMIT`] moves.
    pub moves: Vec<Move>,
    pub all_moves: Vec<Move>,
}

/// Moves found along the main line below `root`.
pub fn main_line_moves(root: &Node) -> Vec<Move> {
    root.main_line().filter_map(Move::from_node).collect()
}

/// Summarize the game rooted at `root`. Never fails; missing fields fall back
/// to their defaults.
pub fn extract_game_data(root: &Node) -> GameData {
    let all_moves = main_line_moves(root);
    let preview = all_moves.len().min(MOVE_PREVIEW_LIMIT);
    GameData {
        game_info: GameInfo::from_root(root),
        moves_count: all_moves.len(),
        moves: all_moves[..preview].to_vec(),
        all_moves,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn data(text: &str) -> GameData {
        let roots = parse(text).unwrap();
        extract_game_data(&roots[0])
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let info = data("(;GM[1])").game_info;
        assert_eq!(info.black_player, "Unknown");
        assert_eq!(info.white_player, "Unknown");
        assert_eq!(info.result, "Unknown");
        assert_eq!(info.komi, "Unknown");
        assert_eq!(info.size, "Unknown");
        assert_eq!(info.handicap, "0");
        assert_eq!(info.comment, "");
    }

    #[test]
    fn test_empty_values_use_defaults() {
        let info = data("(;PB[]HA[]C[])").game_info;
        assert_eq!(info.black_player, "Unknown");
        assert_eq!(info.handicap, "0");
        assert_eq!(info.comment, "");
    }

    #[test]
    fn test_fields_copied_verbatim() {
        let info = data("(;PB[Honinbo]PW[Shusaku]RE[B+R]KM[6.5]SZ[19]HA[2]C[a classic])").game_info;
        assert_eq!(info.black_player, "Honinbo");
        assert_eq!(info.white_player, "Shusaku");
        assert_eq!(info.result, "B+R");
        assert_eq!(info.komi, "6.5");
        assert_eq!(info.size, "19");
        assert_eq!(info.handicap, "2");
        assert_eq!(info.comment, "a classic");
    }

    #[test]
    fn test_nodes_without_moves_are_skipped() {
        let game = data("(;SZ[9];B[aa];C[just talk];W[bb]C[reply])");
        assert_eq!(game.moves_count, 2);
        assert_eq!(game.all_moves[0].comment, None);
        assert_eq!(game.all_moves[1].comment.as_deref(), Some("reply"));
    }

    #[test]
    fn test_black_checked_before_white() {
        let game = data("(;;W[bb]B[aa])");
        assert_eq!(game.all_moves[0].color, Color::Black);
        assert_eq!(game.all_moves[0].coord, "aa");
    }

    #[test]
    fn test_pass_move() {
        let game = data("(;;B[];W[tt])");
        assert_eq!(game.moves_count, 2);
        assert!(game.all_moves[0].is_pass());
        assert!(!game.all_moves[1].is_pass());
    }

    #[test]
    fn test_variations_not_walked() {
        let game = data("(;;B[aa](;W[bb];B[cc])(;W[dd];B[ee];W[ff]))");
        let coords: Vec<&str> = game.all_moves.iter().map(|m| m.coord.as_str()).collect();
        assert_eq!(coords, vec!["aa", "bb", "cc"]);
    }

    #[test]
    fn test_root_move_not_counted() {
        let game = data("(;B[aa];W[bb])");
        assert_eq!(game.moves_count, 1);
        assert_eq!(game.all_moves[0].color, Color::White);
    }

    #[test]
    fn test_serialized_shape() {
        let game = data("(;PB[x];B[aa]C[hi];W[bb])");
        let value = serde_json::to_value(&game).unwrap();
        assert_eq!(value["gameInfo"]["blackPlayer"], "x");
        assert_eq!(value["movesCount"], 2);
        assert_eq!(value["moves"][0]["color"], "B");
        assert_eq!(value["moves"][0]["move"], "aa");
        assert_eq!(value["moves"][0]["comment"], "hi");
        assert!(value["moves"][1].get("comment").is_none());
        assert_eq!(value["allMoves"].as_array().unwrap().len(), 2);
    }
}

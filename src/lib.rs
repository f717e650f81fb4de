//! SGF-Board: game record parsing and board replay for Go.
//!
//! This crate reads a simplified SGF game record into a tree of nodes,
//! summarizes the main line of a game, and replays its moves on a board with
//! group capture.
//!
//! ## Modules
//!
//! - [`constants`] - Property keys, defaults, and board limits
//! - [`node`] - Record tree nodes and main-line traversal
//! - [`parser`] - Tolerant single-pass record parser
//! - [`game`] - Game metadata and move list extraction
//! - [`board`] - 2D board with liberty counting and capture
//! - [`coord`] - Two-letter point conversion
//! - [`replay`] - Rebuild the board at any move of a record
//! - [`tools`] - Text-in, summary-out entry points for external callers
//!
//! ## Example
//!
//! ```
//! use sgf_board::game::extract_game_data;
//! use sgf_board::parser::parse;
//! use sgf_board::replay::replay;
//!
//! let roots = parse("(;SZ[9]PB[Black];B[ee];W[aa])").unwrap();
//! let data = extract_game_data(&roots[0]);
//! assert_eq!(data.moves_count, 2);
//!
//! let board = replay(&roots[0], None);
//! println!("{board}");
//! ```

pub mod board;
pub mod color;
pub mod constants;
pub mod coord;
pub mod game;
pub mod node;
pub mod parser;
pub mod replay;
pub mod tools;

//! Constants for property keys, defaults, and board geometry.
//!
//! Game records identify properties by short uppercase keys. The keys this
//! crate reads are collected here together with the defaults substituted when
//! a record leaves a field out.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size used when a record has no usable `SZ` property.
pub const DEFAULT_BOARD_SIZE: usize = 19;

/// Largest board accepted from a record or the command line. Points past
/// `z` (25) cannot be written, so larger boards only hold stones near the
/// top-left corner.
pub const MAX_BOARD_SIZE: usize = 52;

// =============================================================================
// Summary Limits and Defaults
// =============================================================================

/// Number of moves included in the short move preview of a game summary.
pub const MOVE_PREVIEW_LIMIT: usize = 20;

/// Marker substituted for missing player, result, komi, and size fields.
pub const UNKNOWN: &str = "Unknown";

/// Handicap reported when the record does not specify one.
pub const DEFAULT_HANDICAP: &str = "0";

// =============================================================================
// Property Keys
// =============================================================================

/// Black player name.
pub const KEY_BLACK_PLAYER: &str = "PB";

/// White player name.
pub const KEY_WHITE_PLAYER: &str = "PW";

/// Game result.
pub const KEY_RESULT: &str = "RE";

/// Komi (compensation points for White).
pub const KEY_KOMI: &str = "KM";

/// Board size.
pub const KEY_SIZE: &str = "SZ";

/// Number of handicap stones.
pub const KEY_HANDICAP: &str = "HA";

/// Free-form comment.
pub const KEY_COMMENT: &str = "C";

/// Black move.
pub const KEY_BLACK_MOVE: &str = "B";

/// White move.
pub const KEY_WHITE_MOVE: &str = "W";

/// Black setup stones (point list).
pub const KEY_ADD_BLACK: &str = "AB";

/// White setup stones (point list).
pub const KEY_ADD_WHITE: &str = "AW";

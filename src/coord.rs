//! Conversion between record coordinates and board points.
//!
//! A point is written as two lowercase letters, column first: `"aa"` is the
//! top-left corner `(0, 0)` and `"ee"` is `(4, 4)`. Letters map `a`..=`z` to
//! `0..=25`.

use crate::board::Point;

fn letter_to_index(c: u8) -> Option<usize> {
    c.is_ascii_lowercase().then(|| (c - b'a') as usize)
}

/// Parse the first two characters of `s` as a point.
///
/// Returns `None` for an empty string (a pass) or when either character is
/// not a lowercase letter. Anything after the first two characters is ignored.
pub fn parse_coord(s: &str) -> Option<Point> {
    match s.as_bytes() {
        [cx, cy, ..] => Some((letter_to_index(*cx)?, letter_to_index(*cy)?)),
        _ => None,
    }
}

/// Format a point as two letters. Components above 25 cannot be written and
/// yield `None`.
pub fn str_coord((x, y): Point) -> Option<String> {
    if x >= 26 || y >= 26 {
        return None;
    }
    Some([(b'a' + x as u8) as char, (b'a' + y as u8) as char].iter().collect())
}

//! Two-dimensional board with group capture.
//!
//! Cells are `None` (empty) or a stone [`Color`]. Playing a stone removes
//! every adjacent opposing group left without liberties. Suicide is not
//! prevented: a stone with no liberties after captures stays on the board and
//! is only reported in the [`MoveResult`].

use std::collections::VecDeque;
use std::fmt;

use tracing::{debug, trace};

pub use crate::color::Color;

pub type Point = (usize, usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub size: usize,
    cells: Vec<Option<Color>>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    /// Stone at `(x, y)`. Out-of-range points read as empty.
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.size || y >= self.size {
            return None;
        }
        self.cells[self.idx(x, y)]
    }

    /// Orthogonal neighbors in west, east, north, south order.
    fn neighbors(&self, x: usize, y: usize) -> impl Iterator<Item = Point> + '_ {
        let s = self.size;
        let mut v = Vec::with_capacity(4);
        if x > 0 {
            v.push((x - 1, y));
        }
        if x + 1 < s {
            v.push((x + 1, y));
        }
        if y > 0 {
            v.push((x, y - 1));
        }
        if y + 1 < s {
            v.push((x, y + 1));
        }
        v.into_iter()
    }

    /// Place `color` at `(x, y)` and resolve captures.
    ///
    /// Out-of-range points are ignored. The cell is overwritten whatever it
    /// held before.
    pub fn play(&mut self, x: usize, y: usize, color: Color) -> MoveResult {
        if x >= self.size || y >= self.size {
            return MoveResult::ignored();
        }
        let idx = self.idx(x, y);
        self.cells[idx] = Some(color);

        let opp = color.opposite();
        let mut captures = 0;
        let neighbors: Vec<Point> = self.neighbors(x, y).collect();
        for (nx, ny) in neighbors {
            if self.get(nx, ny) != Some(opp) {
                continue;
            }
            let (group, liberties) = self.group_and_liberties(nx, ny);
            if liberties == 0 {
                trace!(x = nx, y = ny, stones = group.len(), "capturing group");
                captures += group.len();
                self.remove_group(&group);
            }
        }

        let (_, liberties) = self.group_and_liberties(x, y);
        let suicide = liberties == 0;
        if suicide {
            debug!(x, y, %color, "stone left without liberties");
        }
        MoveResult {
            placed: true,
            captures,
            suicide,
        }
    }

    /// The group containing `(x, y)` and its number of distinct liberties.
    ///
    /// Returns an empty group with zero liberties for an empty or
    /// out-of-range point.
    pub fn group_and_liberties(&self, x: usize, y: usize) -> (Vec<Point>, usize) {
        let Some(color) = self.get(x, y) else {
            return (Vec::new(), 0);
        };
        let area = self.size * self.size;
        let mut visited = vec![false; area];
        let mut is_liberty = vec![false; area];
        let mut liberties = 0;
        let mut group = Vec::new();
        let mut queue = VecDeque::from([(x, y)]);
        visited[self.idx(x, y)] = true;

        while let Some((cx, cy)) = queue.pop_front() {
            group.push((cx, cy));
            for (nx, ny) in self.neighbors(cx, cy) {
                let ni = self.idx(nx, ny);
                match self.cells[ni] {
                    None if !is_liberty[ni] => {
                        is_liberty[ni] = true;
                        liberties += 1;
                    }
                    Some(c) if c == color && !visited[ni] => {
                        visited[ni] = true;
                        queue.push_back((nx, ny));
                    }
                    _ => {}
                }
            }
        }
        (group, liberties)
    }

    fn remove_group(&mut self, group: &[Point]) {
        for &(x, y) in group {
            let i = self.idx(x, y);
            self.cells[i] = None;
        }
    }

    /// Cells row by row, top row first.
    pub fn rows(&self) -> Vec<Vec<Option<Color>>> {
        if self.size == 0 {
            return Vec::new();
        }
        self.cells.chunks(self.size).map(<[_]>::to_vec).collect()
    }

    pub fn stone_count(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&c| c == Some(color)).count()
    }
}

/// Outcome of [`Board::play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// False when the point was off the board and nothing changed.
    pub placed: bool,
    /// Opposing stones removed.
    pub captures: usize,
    /// The placed stone's group has no liberties after captures.
    pub suicide: bool,
}

impl MoveResult {
    fn ignored() -> Self {
        MoveResult {
            placed: false,
            captures: 0,
            suicide: false,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size {
            for x in 0..self.size {
                let ch = match self.get(x, y) {
                    Some(Color::Black) => 'X',
                    Some(Color::White) => 'O',
                    None => '.',
                };
                if x > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Color::{Black, White};

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(9);
        for y in 0..9 {
            for x in 0..9 {
                assert_eq!(board.get(x, y), None);
            }
        }
    }

    #[test]
    fn test_out_of_range_is_empty_and_ignored() {
        let mut board = Board::new(5);
        let result = board.play(5, 0, Black);
        assert!(!result.placed);
        assert_eq!(board.get(5, 0), None);
        assert_eq!(board.get(0, 99), None);
        assert_eq!(board, Board::new(5));
    }

    #[test]
    fn test_single_stone_capture() {
        let mut board = Board::new(9);
        board.play(4, 4, White);
        board.play(3, 4, Black);
        board.play(5, 4, Black);
        board.play(4, 3, Black);
        let result = board.play(4, 5, Black);
        assert_eq!(result.captures, 1);
        assert_eq!(board.get(4, 4), None);
        assert_eq!(board.stone_count(Black), 4);
    }

    #[test]
    fn test_corner_capture() {
        let mut board = Board::new(9);
        board.play(0, 0, White);
        board.play(1, 0, Black);
        assert_eq!(board.get(0, 0), Some(White));
        board.play(0, 1, Black);
        assert_eq!(board.get(0, 0), None);
    }

    #[test]
    fn test_group_with_liberty_survives() {
        let mut board = Board::new(9);
        board.play(0, 0, White);
        board.play(1, 0, White);
        board.play(2, 0, Black);
        board.play(0, 1, Black);
        assert_eq!(board.get(0, 0), Some(White));
        assert_eq!(board.get(1, 0), Some(White));
        let (group, liberties) = board.group_and_liberties(0, 0);
        assert_eq!(group.len(), 2);
        assert_eq!(liberties, 1);
        board.play(1, 1, Black);
        assert_eq!(board.get(0, 0), None);
        assert_eq!(board.get(1, 0), None);
    }

    #[test]
    fn test_shared_liberty_counted_once() {
        let mut board = Board::new(5);
        // L-shape around (1, 1): both (1, 0) and (0, 1) touch it.
        board.play(1, 0, Black);
        board.play(0, 0, Black);
        board.play(0, 1, Black);
        let (group, liberties) = board.group_and_liberties(0, 0);
        assert_eq!(group.len(), 3);
        // (2, 0), (1, 1), (0, 2)
        assert_eq!(liberties, 3);
    }

    #[test]
    fn test_simultaneous_capture_of_two_groups() {
        let mut board = Board::new(5);
        // White stones at (0, 0) and (2, 0), black filling around them.
        board.play(0, 0, White);
        board.play(2, 0, White);
        board.play(0, 1, Black);
        board.play(2, 1, Black);
        board.play(3, 0, Black);
        let result = board.play(1, 0, Black);
        assert_eq!(result.captures, 2);
        assert_eq!(board.get(0, 0), None);
        assert_eq!(board.get(2, 0), None);
        assert_eq!(board.get(1, 0), Some(Black));
    }

    #[test]
    fn test_suicide_is_kept() {
        let mut board = Board::new(5);
        board.play(1, 0, White);
        board.play(0, 1, White);
        let result = board.play(0, 0, Black);
        assert!(result.suicide);
        assert_eq!(result.captures, 0);
        assert_eq!(board.get(0, 0), Some(Black));
    }

    #[test]
    fn test_capture_takes_priority_over_suicide() {
        let mut board = Board::new(5);
        board.play(1, 0, White);
        board.play(0, 1, White);
        board.play(2, 0, Black);
        board.play(1, 1, Black);
        board.play(0, 2, Black);
        let result = board.play(0, 0, Black);
        assert_eq!(result.captures, 2);
        assert!(!result.suicide);
        assert_eq!(board.get(1, 0), None);
        assert_eq!(board.get(0, 1), None);
    }

    #[test]
    fn test_play_overwrites_occupied_cell() {
        let mut board = Board::new(5);
        board.play(2, 2, Black);
        board.play(2, 2, White);
        assert_eq!(board.get(2, 2), Some(White));
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(3);
        board.play(0, 0, Black);
        board.play(2, 1, White);
        assert_eq!(board.to_string(), "X . .\n. . O\n. . .\n");
    }

    #[test]
    fn test_rows() {
        let mut board = Board::new(2);
        board.play(1, 0, White);
        assert_eq!(board.rows(), vec![vec![None, Some(White)], vec![None, None]]);
    }
}

//! # Board Module
//!
//! Grid model, adjacency graph and move-target enumeration.
//!
//! This module contains the fundamental building blocks of the board:
//! - Cell coordinates and door orientation
//! - The legend mapping room symbols to names
//! - The immutable grid of classified cells
//! - The orientation-aware adjacency graph and target search

pub mod adjacency;
pub mod cell;
pub mod grid;
pub mod legend;
pub mod state;
pub mod targets;

pub use adjacency::*;
pub use cell::*;
pub use grid::*;
pub use legend::*;
pub use state::*;
pub use targets::*;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a cell by its grid coordinates.
///
/// # Examples
///
/// ```
/// use clue_board::Position;
///
/// let pos = Position::new(3, 7);
/// assert_eq!(pos.row, 3);
/// assert_eq!(pos.column, 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    /// Creates a new position with the given coordinates.
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Calculates the Manhattan distance to another position.
    pub fn manhattan_distance(self, other: Position) -> usize {
        self.row.abs_diff(other.row) + self.column.abs_diff(other.column)
    }

    /// Returns the neighbouring position one step in `direction`.
    ///
    /// Returns None if the step leaves a board of `num_rows` by `num_columns`
    /// cells, or if `direction` is [`DoorDirection::None`].
    ///
    /// # Examples
    ///
    /// ```
    /// use clue_board::{DoorDirection, Position};
    ///
    /// let pos = Position::new(0, 0);
    /// assert_eq!(pos.step(DoorDirection::Up, 5, 5), None);
    /// assert_eq!(pos.step(DoorDirection::Right, 5, 5), Some(Position::new(0, 1)));
    /// ```
    pub fn step(self, direction: DoorDirection, num_rows: usize, num_columns: usize) -> Option<Position> {
        let (row, column) = match direction {
            DoorDirection::Up => (self.row.checked_sub(1)?, self.column),
            DoorDirection::Down => (self.row + 1, self.column),
            DoorDirection::Left => (self.row, self.column.checked_sub(1)?),
            DoorDirection::Right => (self.row, self.column + 1),
            DoorDirection::None => return None,
        };
        if row < num_rows && column < num_columns {
            Some(Position::new(row, column))
        } else {
            None
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// The compass direction a doorway opens toward.
///
/// Cells that are not doorways always carry [`DoorDirection::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DoorDirection {
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
}

impl DoorDirection {
    /// Parses the door code used in layout files.
    ///
    /// # Examples
    ///
    /// ```
    /// use clue_board::DoorDirection;
    ///
    /// assert_eq!(DoorDirection::from_code('U'), Some(DoorDirection::Up));
    /// assert_eq!(DoorDirection::from_code('Q'), None);
    /// ```
    pub fn from_code(code: char) -> Option<DoorDirection> {
        match code {
            'U' => Some(DoorDirection::Up),
            'D' => Some(DoorDirection::Down),
            'L' => Some(DoorDirection::Left),
            'R' => Some(DoorDirection::Right),
            _ => None,
        }
    }

    /// Returns the layout code for this direction, if it has one.
    pub fn code(self) -> Option<char> {
        match self {
            DoorDirection::Up => Some('U'),
            DoorDirection::Down => Some('D'),
            DoorDirection::Left => Some('L'),
            DoorDirection::Right => Some('R'),
            DoorDirection::None => None,
        }
    }

    /// Returns the direction pointing the other way.
    pub fn opposite(self) -> DoorDirection {
        match self {
            DoorDirection::Up => DoorDirection::Down,
            DoorDirection::Down => DoorDirection::Up,
            DoorDirection::Left => DoorDirection::Right,
            DoorDirection::Right => DoorDirection::Left,
            DoorDirection::None => DoorDirection::None,
        }
    }

    /// Returns the four compass directions, in the order neighbours are examined.
    pub fn cardinal() -> [DoorDirection; 4] {
        [
            DoorDirection::Up,
            DoorDirection::Down,
            DoorDirection::Left,
            DoorDirection::Right,
        ]
    }
}

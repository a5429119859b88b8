//! # Board Cells
//!
//! A single square of the board and its classification.

use crate::{DoorDirection, Position};
use serde::{Deserialize, Serialize};

/// What kind of square a cell is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    /// Open square outside every room, freely traversable
    Walkway,
    /// Interior of a named room; never part of the adjacency graph
    Room,
    /// Room boundary square that opens in one direction
    Doorway,
}

/// One square of the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardCell {
    /// Grid coordinates of this cell
    pub position: Position,
    /// Room symbol, looked up in the legend
    pub symbol: char,
    /// Facing of the doorway, `None` unless this cell is a doorway
    pub door_direction: DoorDirection,
    /// Classification derived from the symbol and facing
    pub kind: CellKind,
}

impl BoardCell {
    /// Creates a cell, deriving its kind from the facing and the walkway flag
    /// of its symbol.
    ///
    /// # Examples
    ///
    /// ```
    /// use clue_board::{BoardCell, CellKind, DoorDirection, Position};
    ///
    /// let door = BoardCell::new(Position::new(1, 2), 'K', DoorDirection::Down, false);
    /// assert_eq!(door.kind, CellKind::Doorway);
    ///
    /// let floor = BoardCell::new(Position::new(2, 2), 'W', DoorDirection::None, true);
    /// assert!(floor.is_walkway());
    /// ```
    pub fn new(position: Position, symbol: char, door_direction: DoorDirection, walkway: bool) -> Self {
        let kind = if door_direction != DoorDirection::None {
            CellKind::Doorway
        } else if walkway {
            CellKind::Walkway
        } else {
            CellKind::Room
        };
        Self {
            position,
            symbol,
            door_direction,
            kind,
        }
    }

    pub fn row(&self) -> usize {
        self.position.row
    }

    pub fn column(&self) -> usize {
        self.position.column
    }

    pub fn is_walkway(&self) -> bool {
        self.kind == CellKind::Walkway
    }

    pub fn is_doorway(&self) -> bool {
        self.kind == CellKind::Doorway
    }

    pub fn is_room(&self) -> bool {
        self.kind == CellKind::Room
    }

    /// Whether this cell takes part in the adjacency graph.
    pub fn is_traversable(&self) -> bool {
        matches!(self.kind, CellKind::Walkway | CellKind::Doorway)
    }
}

//! # Grid Model
//!
//! The validated, immutable rectangle of board cells.
//!
//! A grid is built once from rows of layout tokens and a legend. Each token
//! is one or two characters: the room symbol, optionally followed by a door
//! code (`U`, `D`, `L` or `R`). Construction either validates the whole
//! layout or fails; no partial grid is ever returned.

use crate::config::MAX_BOARD_SIZE;
use crate::{BoardCell, BoardError, BoardResult, DoorDirection, Legend, Position};
use log::debug;

/// Rectangular board of classified cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    num_rows: usize,
    num_columns: usize,
    /// Row-major cell storage
    cells: Vec<BoardCell>,
    legend: Legend,
}

impl Grid {
    /// Builds a grid from rows of layout tokens.
    ///
    /// Fails with [`BoardError::MalformedLayout`] if the layout is empty or
    /// larger than [`MAX_BOARD_SIZE`], if rows differ in length, or if any
    /// token is empty, too long, uses a symbol missing from the legend, or
    /// carries an invalid door code.
    ///
    /// # Examples
    ///
    /// ```
    /// use clue_board::{Grid, Legend, LegendEntry, RoomKind};
    ///
    /// let mut legend = Legend::new();
    /// legend.insert('W', LegendEntry::walkway("Walkway")).unwrap();
    /// legend.insert('K', LegendEntry::room("Kitchen", RoomKind::Card)).unwrap();
    ///
    /// let layout = vec![vec!["K", "KD"], vec!["W", "W"]];
    /// let grid = Grid::build(&layout, legend).unwrap();
    /// assert_eq!(grid.num_rows(), 2);
    /// assert!(grid.cell_at(0, 1).unwrap().is_doorway());
    /// ```
    pub fn build<S: AsRef<str>>(layout: &[Vec<S>], legend: Legend) -> BoardResult<Self> {
        let num_rows = layout.len();
        let num_columns = match layout.first() {
            Some(first) => first.len(),
            None => {
                return Err(BoardError::MalformedLayout(
                    "layout has no rows".to_string(),
                ))
            }
        };

        if num_columns == 0 {
            return Err(BoardError::MalformedLayout(
                "row 0 has no columns".to_string(),
            ));
        }
        if num_rows > MAX_BOARD_SIZE || num_columns > MAX_BOARD_SIZE {
            return Err(BoardError::MalformedLayout(format!(
                "board is {} x {}, the limit is {} x {}",
                num_rows, num_columns, MAX_BOARD_SIZE, MAX_BOARD_SIZE
            )));
        }

        for (row, tokens) in layout.iter().enumerate().skip(1) {
            if tokens.len() != num_columns {
                return Err(BoardError::MalformedLayout(format!(
                    "row 0 has {} columns, row {} has {} columns",
                    num_columns,
                    row,
                    tokens.len()
                )));
            }
        }

        let mut cells = Vec::with_capacity(num_rows * num_columns);
        for (row, tokens) in layout.iter().enumerate() {
            for (column, token) in tokens.iter().enumerate() {
                let position = Position::new(row, column);
                cells.push(parse_cell(token.as_ref(), position, &legend)?);
            }
        }

        let doorways = cells.iter().filter(|cell| cell.is_doorway()).count();
        let walkways = cells.iter().filter(|cell| cell.is_walkway()).count();
        debug!(
            "Built {}x{} grid: {} walkway cells, {} doorways",
            num_rows, num_columns, walkways, doorways
        );

        Ok(Self {
            num_rows,
            num_columns,
            cells,
            legend,
        })
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_columns(&self) -> usize {
        self.num_columns
    }

    /// Returns the cell at the given coordinates, or None when out of bounds.
    pub fn cell_at(&self, row: usize, column: usize) -> Option<&BoardCell> {
        if row < self.num_rows && column < self.num_columns {
            self.cells.get(row * self.num_columns + column)
        } else {
            None
        }
    }

    /// Returns the cell at a position, or None when out of bounds.
    pub fn get(&self, position: Position) -> Option<&BoardCell> {
        self.cell_at(position.row, position.column)
    }

    /// Checks if a position lies on the board.
    pub fn is_valid_position(&self, position: Position) -> bool {
        position.row < self.num_rows && position.column < self.num_columns
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &BoardCell> {
        self.cells.iter()
    }

    pub fn legend(&self) -> &Legend {
        &self.legend
    }

    /// Looks up the room name of the cell at a position.
    pub fn room_name_at(&self, position: Position) -> Option<&str> {
        self.get(position)
            .and_then(|cell| self.legend.room_name(cell.symbol))
    }
}

/// Parses one layout token into a cell.
fn parse_cell(token: &str, position: Position, legend: &Legend) -> BoardResult<BoardCell> {
    let mut chars = token.chars();
    let symbol = chars.next().ok_or_else(|| {
        BoardError::MalformedLayout(format!("empty cell at {}", position))
    })?;
    let door_code = chars.next();
    if chars.next().is_some() {
        return Err(BoardError::MalformedLayout(format!(
            "cell '{}' at {} is longer than two characters",
            token, position
        )));
    }

    if !legend.contains(symbol) {
        return Err(BoardError::MalformedLayout(format!(
            "invalid room character '{}' at {}",
            symbol, position
        )));
    }

    let door_direction = match door_code {
        None => DoorDirection::None,
        Some(code) => DoorDirection::from_code(code).ok_or_else(|| {
            BoardError::MalformedLayout(format!(
                "invalid door direction '{}' at {}",
                code, position
            ))
        })?,
    };

    Ok(BoardCell::new(
        position,
        symbol,
        door_direction,
        legend.is_walkway(symbol),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CellKind, LegendEntry, RoomKind};

    fn test_legend() -> Legend {
        let mut legend = Legend::new();
        legend.insert('W', LegendEntry::walkway("Walkway")).unwrap();
        legend.insert('K', LegendEntry::room("Kitchen", RoomKind::Card)).unwrap();
        legend.insert('X', LegendEntry::room("Closet", RoomKind::Other)).unwrap();
        legend
    }

    fn rows(layout: &[&str]) -> Vec<Vec<String>> {
        layout
            .iter()
            .map(|line| line.split(',').map(str::to_string).collect())
            .collect()
    }

    #[test]
    fn test_build_classifies_cells() {
        let grid = Grid::build(&rows(&["K,KR,W", "X,W,W"]), test_legend()).unwrap();
        assert_eq!(grid.num_rows(), 2);
        assert_eq!(grid.num_columns(), 3);

        let kitchen = grid.cell_at(0, 0).unwrap();
        assert_eq!(kitchen.kind, CellKind::Room);
        assert_eq!(kitchen.door_direction, DoorDirection::None);

        let door = grid.cell_at(0, 1).unwrap();
        assert_eq!(door.kind, CellKind::Doorway);
        assert_eq!(door.door_direction, DoorDirection::Right);
        assert_eq!(door.symbol, 'K');

        assert!(grid.cell_at(0, 2).unwrap().is_walkway());
        assert!(grid.cell_at(1, 0).unwrap().is_room());
        assert_eq!(grid.room_name_at(Position::new(1, 0)), Some("Closet"));
    }

    #[test]
    fn test_out_of_bounds_lookup() {
        let grid = Grid::build(&rows(&["W,W", "W,W"]), test_legend()).unwrap();
        assert!(grid.cell_at(2, 0).is_none());
        assert!(grid.cell_at(0, 2).is_none());
        assert!(!grid.is_valid_position(Position::new(5, 5)));
        assert_eq!(grid.cells().count(), 4);
    }

    #[test]
    fn test_row_length_mismatch() {
        let result = Grid::build(&rows(&["W,W,W", "W,W"]), test_legend());
        match result {
            Err(BoardError::MalformedLayout(message)) => {
                assert!(message.contains("row 1 has 2 columns"));
            }
            other => panic!("expected MalformedLayout, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_symbol() {
        let result = Grid::build(&rows(&["W,Q"]), test_legend());
        assert!(matches!(result, Err(BoardError::MalformedLayout(_))));
    }

    #[test]
    fn test_invalid_door_code() {
        let result = Grid::build(&rows(&["W,KN"]), test_legend());
        assert!(matches!(result, Err(BoardError::MalformedLayout(_))));
    }

    #[test]
    fn test_token_too_long() {
        let result = Grid::build(&rows(&["W,KRR"]), test_legend());
        assert!(matches!(result, Err(BoardError::MalformedLayout(_))));
    }

    #[test]
    fn test_empty_token() {
        let result = Grid::build(&rows(&["W,,W"]), test_legend());
        assert!(matches!(result, Err(BoardError::MalformedLayout(_))));
    }

    #[test]
    fn test_empty_layout() {
        let layout: Vec<Vec<String>> = Vec::new();
        assert!(matches!(
            Grid::build(&layout, test_legend()),
            Err(BoardError::MalformedLayout(_))
        ));
        let layout: Vec<Vec<String>> = vec![Vec::new()];
        assert!(matches!(
            Grid::build(&layout, test_legend()),
            Err(BoardError::MalformedLayout(_))
        ));
    }

    #[test]
    fn test_board_size_limit() {
        let wide = vec![vec!["W"; MAX_BOARD_SIZE + 1]];
        assert!(matches!(
            Grid::build(&wide, test_legend()),
            Err(BoardError::MalformedLayout(_))
        ));

        let largest = vec![vec!["W"; MAX_BOARD_SIZE]; MAX_BOARD_SIZE];
        let grid = Grid::build(&largest, test_legend()).unwrap();
        assert_eq!(grid.num_rows(), MAX_BOARD_SIZE);
        assert_eq!(grid.num_columns(), MAX_BOARD_SIZE);
    }
}

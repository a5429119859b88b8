//! # Board State
//!
//! The single owning value for a loaded board.
//!
//! A [`Board`] holds the validated grid together with the adjacency graph
//! derived from it. Both are fixed at construction, so a board can be shared
//! by reference between turn logic and any other reader.

use crate::{calc_targets, AdjacencyGraph, BoardCell, BoardResult, Grid, Legend, Position};
use log::info;
use std::collections::HashSet;

/// A fully initialised board: grid plus adjacency graph.
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    adjacency: AdjacencyGraph,
}

impl Board {
    /// Creates a board from a validated grid, computing its adjacency once.
    pub fn new(grid: Grid) -> Self {
        let adjacency = AdjacencyGraph::calculate(&grid);
        info!(
            "Board ready: {} rows, {} columns, {} legend entries",
            grid.num_rows(),
            grid.num_columns(),
            grid.legend().len()
        );
        Self { grid, adjacency }
    }

    /// Builds the grid from layout tokens and a legend, then the board.
    ///
    /// # Examples
    ///
    /// ```
    /// use clue_board::{Board, Legend, LegendEntry, Position, RoomKind};
    ///
    /// let mut legend = Legend::new();
    /// legend.insert('W', LegendEntry::walkway("Walkway")).unwrap();
    /// legend.insert('H', LegendEntry::room("Hall", RoomKind::Card)).unwrap();
    ///
    /// let layout = vec![vec!["H", "HD", "H"], vec!["W", "W", "W"]];
    /// let board = Board::from_layout(&layout, legend).unwrap();
    ///
    /// let targets = board.calc_targets(1, 0, 2);
    /// assert!(targets.contains(&Position::new(0, 1)));
    /// assert!(targets.contains(&Position::new(1, 2)));
    /// ```
    pub fn from_layout<S: AsRef<str>>(layout: &[Vec<S>], legend: Legend) -> BoardResult<Self> {
        Ok(Self::new(Grid::build(layout, legend)?))
    }

    /// Legal stopping cells for a move of exactly `steps` from the origin.
    pub fn calc_targets(&self, row: usize, column: usize, steps: usize) -> HashSet<Position> {
        calc_targets(&self.adjacency, &self.grid, Position::new(row, column), steps)
    }

    /// Cells directly reachable from the given cell.
    pub fn get_adjacent(&self, row: usize, column: usize) -> &HashSet<Position> {
        self.adjacency.adjacent(Position::new(row, column))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn adjacency(&self) -> &AdjacencyGraph {
        &self.adjacency
    }

    pub fn legend(&self) -> &Legend {
        self.grid.legend()
    }

    pub fn num_rows(&self) -> usize {
        self.grid.num_rows()
    }

    pub fn num_columns(&self) -> usize {
        self.grid.num_columns()
    }

    pub fn cell_at(&self, row: usize, column: usize) -> Option<&BoardCell> {
        self.grid.cell_at(row, column)
    }
}

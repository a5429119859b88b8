//! # Adjacency Graph
//!
//! Static, orientation-aware map from each cell to the cells a token can
//! step into directly.
//!
//! Only walkways and doorways take part. A doorway connects only along the
//! axis it faces: it can be left only in its facing direction and entered
//! only from the square in front of it.

use crate::{DoorDirection, Grid, Position};
use log::debug;
use std::collections::{HashMap, HashSet};

/// One-step reachability between board cells.
///
/// The relation is directional in general; it is stored exactly as computed
/// and never symmetrised.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyGraph {
    adjacency: HashMap<Position, HashSet<Position>>,
    empty: HashSet<Position>,
}

impl AdjacencyGraph {
    /// Computes the adjacency set of every cell in the grid.
    ///
    /// Room interior cells receive an empty set. Running this twice on the
    /// same grid yields identical graphs.
    ///
    /// # Examples
    ///
    /// ```
    /// use clue_board::{AdjacencyGraph, Grid, Legend, LegendEntry, Position};
    ///
    /// let mut legend = Legend::new();
    /// legend.insert('W', LegendEntry::walkway("Walkway")).unwrap();
    /// let grid = Grid::build(&[vec!["W", "W", "W"]], legend).unwrap();
    ///
    /// let graph = AdjacencyGraph::calculate(&grid);
    /// assert_eq!(graph.adjacent(Position::new(0, 1)).len(), 2);
    /// ```
    pub fn calculate(grid: &Grid) -> Self {
        let mut adjacency = HashMap::with_capacity(grid.num_rows() * grid.num_columns());
        let mut edges = 0;

        for cell in grid.cells() {
            let mut neighbours = HashSet::new();

            if cell.is_traversable() {
                for direction in DoorDirection::cardinal() {
                    // A doorway blocks every exit except its facing
                    if cell.door_direction != DoorDirection::None
                        && cell.door_direction != direction
                    {
                        continue;
                    }
                    let Some(neighbour) = cell
                        .position
                        .step(direction, grid.num_rows(), grid.num_columns())
                        .and_then(|next| grid.get(next))
                    else {
                        continue;
                    };
                    let next = neighbour.position;
                    if neighbour.is_walkway()
                        || (neighbour.is_doorway()
                            && neighbour.door_direction == direction.opposite())
                    {
                        neighbours.insert(next);
                    }
                }
            }

            edges += neighbours.len();
            adjacency.insert(cell.position, neighbours);
        }

        debug!(
            "Calculated adjacency for {} cells with {} directed edges",
            adjacency.len(),
            edges
        );

        Self {
            adjacency,
            empty: HashSet::new(),
        }
    }

    /// Returns the cells directly reachable from `position`.
    ///
    /// Positions that are not on the board have no neighbours.
    pub fn adjacent(&self, position: Position) -> &HashSet<Position> {
        self.adjacency.get(&position).unwrap_or(&self.empty)
    }

    /// Number of cells with an entry in the graph.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Iterates over every cell and its adjacency set.
    pub fn iter(&self) -> impl Iterator<Item = (&Position, &HashSet<Position>)> {
        self.adjacency.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Legend, LegendEntry, RoomKind};

    fn grid_from(layout: &[&str]) -> Grid {
        let mut legend = Legend::new();
        legend.insert('W', LegendEntry::walkway("Walkway")).unwrap();
        legend.insert('R', LegendEntry::room("Study", RoomKind::Card)).unwrap();
        let rows: Vec<Vec<&str>> = layout.iter().map(|line| line.split(',').collect()).collect();
        Grid::build(&rows, legend).unwrap()
    }

    fn set(positions: &[(usize, usize)]) -> HashSet<Position> {
        positions
            .iter()
            .map(|&(row, column)| Position::new(row, column))
            .collect()
    }

    #[test]
    fn test_walkway_corner_and_center() {
        let grid = grid_from(&["W,W,W", "W,W,W", "W,W,W"]);
        let graph = AdjacencyGraph::calculate(&grid);
        assert_eq!(graph.adjacent(Position::new(0, 0)), &set(&[(0, 1), (1, 0)]));
        assert_eq!(
            graph.adjacent(Position::new(1, 1)),
            &set(&[(0, 1), (1, 0), (1, 2), (2, 1)])
        );
        assert_eq!(graph.len(), 9);
    }

    #[test]
    fn test_room_interior_is_isolated() {
        let grid = grid_from(&["R,R,W", "R,W,W"]);
        let graph = AdjacencyGraph::calculate(&grid);
        assert!(graph.adjacent(Position::new(0, 0)).is_empty());
        assert!(graph.adjacent(Position::new(0, 1)).is_empty());
        assert_eq!(graph.adjacent(Position::new(0, 2)), &set(&[(1, 2)]));
        assert_eq!(graph.adjacent(Position::new(1, 1)), &set(&[(1, 2)]));
    }

    #[test]
    fn test_doorway_connects_only_along_facing() {
        // Door at (1,1) opens downward onto (2,1)
        let grid = grid_from(&["R,R,R", "W,RD,W", "W,W,W"]);
        let graph = AdjacencyGraph::calculate(&grid);
        let door = Position::new(1, 1);

        assert_eq!(graph.adjacent(door), &set(&[(2, 1)]));
        assert!(graph.adjacent(Position::new(2, 1)).contains(&door));
        // Side approaches are refused
        assert!(!graph.adjacent(Position::new(1, 0)).contains(&door));
        assert!(!graph.adjacent(Position::new(1, 2)).contains(&door));
    }

    #[test]
    fn test_doorway_facing_off_board_has_no_exit() {
        let grid = grid_from(&["RU,W"]);
        let graph = AdjacencyGraph::calculate(&grid);
        assert!(graph.adjacent(Position::new(0, 0)).is_empty());
        assert!(graph.adjacent(Position::new(0, 1)).is_empty());
    }

    #[test]
    fn test_facing_doorways_connect_both_ways() {
        let grid = grid_from(&["RR,RL"]);
        let graph = AdjacencyGraph::calculate(&grid);
        assert_eq!(graph.adjacent(Position::new(0, 0)), &set(&[(0, 1)]));
        assert_eq!(graph.adjacent(Position::new(0, 1)), &set(&[(0, 0)]));
    }

    #[test]
    fn test_unknown_position_has_no_neighbours() {
        let grid = grid_from(&["W,W"]);
        let graph = AdjacencyGraph::calculate(&grid);
        assert!(graph.adjacent(Position::new(7, 7)).is_empty());
    }

    #[test]
    fn test_recalculation_is_identical() {
        let grid = grid_from(&["R,RD,R", "W,W,W", "WR,W,RL"]);
        assert_eq!(AdjacencyGraph::calculate(&grid), AdjacencyGraph::calculate(&grid));
    }
}

//! # Move Targets
//!
//! Enumerates the cells a token can stop on after moving exactly `steps`
//! squares.
//!
//! A move never passes through the same cell twice, and entering a doorway
//! ends the move there no matter how many steps remain.

use crate::{AdjacencyGraph, Grid, Position};
use log::{debug, warn};
use std::collections::HashSet;

/// Computes the legal stopping cells for a move of exactly `steps` squares.
///
/// The visited path and the result set live only for the duration of this
/// call. A step count of zero, an origin off the board, or an origin with no
/// moves all yield an empty set.
///
/// # Examples
///
/// ```
/// use clue_board::{calc_targets, AdjacencyGraph, Grid, Legend, LegendEntry, Position};
///
/// let mut legend = Legend::new();
/// legend.insert('W', LegendEntry::walkway("Walkway")).unwrap();
/// let grid = Grid::build(&[vec!["W", "W", "W", "W"]], legend).unwrap();
/// let graph = AdjacencyGraph::calculate(&grid);
///
/// let targets = calc_targets(&graph, &grid, Position::new(0, 0), 2);
/// assert_eq!(targets.len(), 1);
/// assert!(targets.contains(&Position::new(0, 2)));
/// ```
pub fn calc_targets(
    graph: &AdjacencyGraph,
    grid: &Grid,
    origin: Position,
    steps: usize,
) -> HashSet<Position> {
    let mut targets = HashSet::new();
    if steps == 0 || !grid.is_valid_position(origin) {
        return targets;
    }
    if graph.adjacent(origin).is_empty() {
        warn!("No moves available from {}", origin);
        return targets;
    }

    let mut visited = HashSet::new();
    visited.insert(origin);
    find_targets(graph, grid, origin, steps, &mut visited, &mut targets);

    debug!(
        "Found {} targets for a move of {} from {}",
        targets.len(),
        steps,
        origin
    );
    targets
}

/// Backtracking walk; adds to `targets` and leaves `visited` as it found it.
fn find_targets(
    graph: &AdjacencyGraph,
    grid: &Grid,
    current: Position,
    remaining: usize,
    visited: &mut HashSet<Position>,
    targets: &mut HashSet<Position>,
) {
    for &next in graph.adjacent(current) {
        if visited.contains(&next) {
            continue;
        }
        let is_doorway = grid.get(next).is_some_and(|cell| cell.is_doorway());
        if remaining == 1 || is_doorway {
            targets.insert(next);
        } else {
            visited.insert(next);
            find_targets(graph, grid, next, remaining - 1, visited, targets);
            visited.remove(&next);
        }
    }
}

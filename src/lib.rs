//! # Clue Board
//!
//! Board model and move-target engine for a deduction board game.
//!
//! ## Architecture Overview
//!
//! The crate is split into a pure core and a loading collaborator:
//!
//! - **Board**: the validated grid of cells, the legend, the orientation-aware
//!   adjacency graph and the target enumeration used on every turn
//! - **Loader**: parsing of the legend and layout text files into the inputs
//!   the board needs
//!
//! The core never touches the filesystem. A grid is built once, its adjacency
//! graph is derived once, and targets are recomputed for every die roll.

pub mod board;
pub mod loader;

pub use board::*;
pub use loader::*;

/// Core error type for board construction and loading.
#[derive(thiserror::Error, Debug)]
pub enum BoardError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// The layout is not a valid rectangular grid of known cells
    #[error("Malformed layout: {0}")]
    MalformedLayout(String),

    /// A legend line is not a valid entry
    #[error("Malformed legend: {0}")]
    MalformedLegend(String),

    /// A legend entry names a room kind other than `Card` or `Other`
    #[error("Unknown room type: {0}")]
    UnknownRoomType(String),

    /// A requested cell is not on the board
    #[error("Invalid position: {0}")]
    InvalidPosition(String),
}

/// Result type used throughout the crate.
pub type BoardResult<T> = Result<T, BoardError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Board configuration constants.
pub mod config {
    /// Largest number of rows or columns a board may have
    pub const MAX_BOARD_SIZE: usize = 50;

    /// Default layout file name
    pub const DEFAULT_LAYOUT_FILE: &str = "ClueGameLayout.csv";

    /// Default legend file name
    pub const DEFAULT_LEGEND_FILE: &str = "ClueGameLegend.txt";

    /// Default separator between cells of a layout row
    pub const DEFAULT_DELIMITER: char = ',';

    /// Separator between the fields of a legend line
    pub const LEGEND_SEPARATOR: char = ',';

    /// Number of faces on the movement die
    pub const DIE_FACES: usize = 6;
}

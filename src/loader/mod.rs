//! # Loader Module
//!
//! Reading of the legend and layout files that describe a board.
//!
//! The legend holds one room per line as `symbol, name, kind`, for example
//! `K, Kitchen, Card`. The layout holds one board row per line, cells
//! separated by a delimiter, for example `K,K,KD,W,W`. This module only turns
//! text into the inputs of [`Grid::build`]; all structural validation of the
//! grid happens there.

use crate::config::{DEFAULT_DELIMITER, DEFAULT_LAYOUT_FILE, DEFAULT_LEGEND_FILE, LEGEND_SEPARATOR};
use crate::{Board, BoardError, BoardResult, Grid, Legend, LegendEntry, RoomKind};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name that marks an `Other` legend entry as the open walkway type.
pub const WALKWAY_NAME: &str = "Walkway";

/// Locations and format of the files describing a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Path of the layout file
    pub layout_path: PathBuf,
    /// Path of the legend file
    pub legend_path: PathBuf,
    /// Separator between cells of a layout row
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

fn default_delimiter() -> char {
    DEFAULT_DELIMITER
}

impl BoardConfig {
    /// Creates a configuration for the given files with the default delimiter.
    ///
    /// # Examples
    ///
    /// ```
    /// use clue_board::BoardConfig;
    ///
    /// let config = BoardConfig::new("layout.csv", "legend.txt");
    /// assert_eq!(config.delimiter, ',');
    /// ```
    pub fn new(layout_path: impl Into<PathBuf>, legend_path: impl Into<PathBuf>) -> Self {
        Self {
            layout_path: layout_path.into(),
            legend_path: legend_path.into(),
            delimiter: DEFAULT_DELIMITER,
        }
    }

    /// Reads a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> BoardResult<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LAYOUT_FILE, DEFAULT_LEGEND_FILE)
    }
}

/// Parses legend text into a [`Legend`].
///
/// Blank lines are skipped. Every other line must have a one-character
/// symbol, a name and a kind of `Card` or `Other`.
///
/// # Examples
///
/// ```
/// use clue_board::load_legend_from_str;
///
/// let legend = load_legend_from_str("K, Kitchen, Card\nW, Walkway, Other\n").unwrap();
/// assert_eq!(legend.len(), 2);
/// assert!(legend.is_walkway('W'));
/// assert!(!legend.is_walkway('K'));
/// ```
pub fn load_legend_from_str(text: &str) -> BoardResult<Legend> {
    let mut legend = Legend::new();

    for (line_number, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(LEGEND_SEPARATOR).map(str::trim).collect();
        if fields.len() != 3 {
            return Err(BoardError::MalformedLegend(format!(
                "line {} has {} fields, expected symbol, name and kind: '{}'",
                line_number + 1,
                fields.len(),
                line
            )));
        }

        let mut symbol_chars = fields[0].chars();
        let symbol = match (symbol_chars.next(), symbol_chars.next()) {
            (Some(symbol), None) => symbol,
            _ => {
                return Err(BoardError::MalformedLegend(format!(
                    "line {} symbol '{}' is not a single character",
                    line_number + 1,
                    fields[0]
                )))
            }
        };

        let name = fields[1];
        let kind: RoomKind = fields[2].parse()?;
        let entry = if kind == RoomKind::Other && name.eq_ignore_ascii_case(WALKWAY_NAME) {
            LegendEntry::walkway(name)
        } else {
            LegendEntry::room(name, kind)
        };
        legend.insert(symbol, entry)?;
    }

    debug!("Loaded legend with {} entries", legend.len());
    Ok(legend)
}

/// Reads and parses a legend file.
pub fn load_legend_from_file(path: impl AsRef<Path>) -> BoardResult<Legend> {
    let path = path.as_ref();
    info!("Loading legend from {}", path.display());
    load_legend_from_str(&fs::read_to_string(path)?)
}

/// Splits layout text into rows of cell tokens.
///
/// Blank lines are skipped and tokens are trimmed. Row lengths are not
/// checked here; [`Grid::build`] rejects ragged layouts.
pub fn load_layout_from_str(text: &str, delimiter: char) -> Vec<Vec<String>> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.split(delimiter)
                .map(|token| token.trim().to_string())
                .collect()
        })
        .collect()
}

/// Reads a layout file and splits it into rows of cell tokens.
pub fn load_layout_from_file(path: impl AsRef<Path>, delimiter: char) -> BoardResult<Vec<Vec<String>>> {
    let path = path.as_ref();
    info!("Loading layout from {}", path.display());
    Ok(load_layout_from_str(&fs::read_to_string(path)?, delimiter))
}

/// Loads both files named by the configuration and builds the board.
///
/// The legend is loaded first; any failure aborts setup and no board is
/// returned.
pub fn load_board(config: &BoardConfig) -> BoardResult<Board> {
    let legend = load_legend_from_file(&config.legend_path)?;
    let layout = load_layout_from_file(&config.layout_path, config.delimiter)?;
    let grid = Grid::build(&layout, legend)?;
    Ok(Board::new(grid))
}

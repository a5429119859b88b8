//! # Legend
//!
//! Mapping from single-character room symbols to room names and kinds.

use crate::{BoardError, BoardResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// The two kinds of room a legend entry may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomKind {
    /// A room that also appears as a card in the deck
    Card,
    /// Any other area: walkways, closets
    Other,
}

impl FromStr for RoomKind {
    type Err = BoardError;

    fn from_str(s: &str) -> BoardResult<Self> {
        match s.trim() {
            "Card" => Ok(RoomKind::Card),
            "Other" => Ok(RoomKind::Other),
            other => Err(BoardError::UnknownRoomType(format!(
                "room is not type Card or Other, type is: {}",
                other
            ))),
        }
    }
}

/// A single legend line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    /// Human-readable room name
    pub name: String,
    /// Declared room kind
    pub kind: RoomKind,
    /// Whether cells with this symbol are open walkway
    pub walkway: bool,
}

impl LegendEntry {
    /// Creates an entry for an ordinary room or closet.
    pub fn room(name: impl Into<String>, kind: RoomKind) -> Self {
        Self {
            name: name.into(),
            kind,
            walkway: false,
        }
    }

    /// Creates the entry for the open walkway type.
    pub fn walkway(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: RoomKind::Other,
            walkway: true,
        }
    }
}

/// Symbol to room lookup, built once before the grid.
///
/// # Examples
///
/// ```
/// use clue_board::{Legend, LegendEntry, RoomKind};
///
/// let mut legend = Legend::new();
/// legend.insert('K', LegendEntry::room("Kitchen", RoomKind::Card)).unwrap();
/// legend.insert('W', LegendEntry::walkway("Walkway")).unwrap();
///
/// assert_eq!(legend.room_name('K'), Some("Kitchen"));
/// assert!(legend.is_walkway('W'));
/// assert!(legend.insert('K', LegendEntry::room("Kiln", RoomKind::Other)).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Legend {
    entries: BTreeMap<char, LegendEntry>,
}

impl Legend {
    /// Creates an empty legend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, rejecting a symbol that is already present.
    pub fn insert(&mut self, symbol: char, entry: LegendEntry) -> BoardResult<()> {
        if let Some(existing) = self.entries.get(&symbol) {
            return Err(BoardError::MalformedLegend(format!(
                "symbol '{}' is already mapped to '{}'",
                symbol, existing.name
            )));
        }
        self.entries.insert(symbol, entry);
        Ok(())
    }

    pub fn get(&self, symbol: char) -> Option<&LegendEntry> {
        self.entries.get(&symbol)
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.entries.contains_key(&symbol)
    }

    /// Looks up the room name for a symbol.
    pub fn room_name(&self, symbol: char) -> Option<&str> {
        self.entries.get(&symbol).map(|entry| entry.name.as_str())
    }

    /// Whether the symbol is the open walkway type. Unknown symbols are not.
    pub fn is_walkway(&self, symbol: char) -> bool {
        self.entries.get(&symbol).is_some_and(|entry| entry.walkway)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &LegendEntry)> {
        self.entries.iter().map(|(symbol, entry)| (*symbol, entry))
    }
}

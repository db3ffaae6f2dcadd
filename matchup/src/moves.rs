//! Move metadata lookup table

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Metadata for one move
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveData {
    /// Elemental type of the move (lowercase)
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub move_type: String,

    /// Base power; None for status moves with no direct damage
    pub power: Option<f64>,

    /// Accuracy percentage (0-100); None means the move always hits
    pub accuracy: Option<f64>,
}

impl MoveData {
    /// Create move metadata
    pub fn new(move_type: impl Into<String>, power: Option<f64>, accuracy: Option<f64>) -> Self {
        Self {
            move_type: move_type.into(),
            power,
            accuracy,
        }
    }
}

/// Move metadata lookup, keyed by lowercase move name
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct MoveTable {
    moves: HashMap<String, MoveData>,
}

impl MoveTable {
    /// Build a table from a name -> metadata map, lowercasing keys
    pub fn new(moves: HashMap<String, MoveData>) -> Self {
        Self {
            moves: moves
                .into_iter()
                .map(|(name, data)| (name.to_lowercase(), data))
                .collect(),
        }
    }

    /// Look up a move by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&MoveData> {
        self.moves.get(&name.to_lowercase())
    }

    /// Add or replace a move
    pub fn insert(&mut self, name: impl Into<String>, data: MoveData) {
        self.moves.insert(name.into().to_lowercase(), data);
    }

    /// Number of moves in the table
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

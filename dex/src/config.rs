//! Reference table and roster configuration loading

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use oak_matchup::{MoveTable, OpposingCreature, OwnedCreature, TypeChart};

/// Owned Pokemon and the current team, loaded from a JSON file
///
/// `owned` is a BTreeMap so roster iteration (and therefore tie order in
/// rankings) is deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    /// Every owned Pokemon mapped to its known move names, in learn order
    pub owned: BTreeMap<String, Vec<String>>,

    /// Names making up the active team
    #[serde(default)]
    pub current_team: Vec<String>,
}

impl Roster {
    /// Load a roster from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read roster {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Invalid roster {}", path.display()))
    }

    /// All owned Pokemon names, in roster order
    pub fn owned_names(&self) -> Vec<String> {
        self.owned.keys().cloned().collect()
    }

    /// Build evaluation inputs for a list of names
    ///
    /// Names missing from the resolved-type map get an empty type set, which
    /// the engine reports as unresolvable; names not in the owned map get an
    /// empty move list.
    pub fn creatures(
        &self,
        names: &[String],
        resolved_types: &HashMap<String, Vec<String>>,
    ) -> Vec<OwnedCreature> {
        names
            .iter()
            .map(|name| {
                OwnedCreature::new(
                    name.clone(),
                    resolved_types.get(name).cloned().unwrap_or_default(),
                    self.owned.get(name).cloned().unwrap_or_default(),
                )
            })
            .collect()
    }
}

/// Build opposing-creature inputs from enemy names and resolved types
pub fn opposing_creatures(
    names: &[String],
    resolved_types: &HashMap<String, Vec<String>>,
) -> Vec<OpposingCreature> {
    names
        .iter()
        .map(|name| {
            OpposingCreature::new(
                name.clone(),
                resolved_types.get(name).cloned().unwrap_or_default(),
            )
        })
        .collect()
}

/// Load and validate the type effectiveness chart from a JSON file
pub fn load_type_chart(path: impl AsRef<Path>) -> Result<TypeChart> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read type chart {}", path.display()))?;
    let chart: TypeChart = serde_json::from_str(&contents)
        .with_context(|| format!("Invalid type chart {}", path.display()))?;
    chart
        .validate()
        .with_context(|| format!("Corrupt type chart {}", path.display()))?;
    Ok(chart)
}

/// Load the move metadata cache from a JSON file
pub fn load_move_table(path: impl AsRef<Path>) -> Result<MoveTable> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read move table {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Invalid move table {}", path.display()))
}

/// Look up an ability's effect in the cache file (case-insensitive)
///
/// The cache is read-only here; unknown abilities are simply None.
pub fn ability_effect(cache_path: impl AsRef<Path>, ability: &str) -> Result<Option<String>> {
    let path = cache_path.as_ref();
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read ability cache {}", path.display()))?;
    let cache: HashMap<String, String> = serde_json::from_str(&contents)
        .with_context(|| format!("Invalid ability cache {}", path.display()))?;
    Ok(cache.get(&ability.to_lowercase()).cloned())
}

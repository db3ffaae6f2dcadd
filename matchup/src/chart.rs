//! Type effectiveness chart reference data

use std::collections::{HashMap, HashSet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by chart lookups
///
/// A type referenced by a creature or move that is missing from the chart
/// means the reference data itself is corrupt or incomplete, so these are
/// the one class of failure that aborts an evaluation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    #[error("Type not present in effectiveness chart: {0}")]
    UnknownType(String),

    #[error("Type {type_name} lists {other} in more than one relation set")]
    ConflictingRelation { type_name: String, other: String },
}

/// Effectiveness relations for one attacking type
///
/// All type names are lowercase. The three offensive sets (`strong`,
/// `not_effective`, `immune`) are pairwise disjoint;
/// [`TypeChart::validate`] checks that when loading untrusted data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TypeRelation {
    /// Types this type deals double damage to
    pub strong: HashSet<String>,

    /// Types that deal double damage to this type
    pub weak: HashSet<String>,

    /// Types this type deals half damage to
    pub not_effective: HashSet<String>,

    /// Types this type deals no damage to
    pub immune: HashSet<String>,
}

/// Type effectiveness chart, keyed by lowercase type name
///
/// The set of elemental types is defined by this chart's keys rather than a
/// closed enum: the chart is reference data loaded once per process, and
/// lookups against a type it does not know fail with
/// [`ChartError::UnknownType`].
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct TypeChart {
    relations: HashMap<String, TypeRelation>,
}

impl TypeChart {
    /// Create a chart from a relation map
    pub fn new(relations: HashMap<String, TypeRelation>) -> Self {
        Self { relations }
    }

    /// Look up the relations for an attacking type
    pub fn relation(&self, type_name: &str) -> Result<&TypeRelation, ChartError> {
        self.relations
            .get(type_name)
            .ok_or_else(|| ChartError::UnknownType(type_name.to_string()))
    }

    /// Whether the chart knows this type
    pub fn contains(&self, type_name: &str) -> bool {
        self.relations.contains_key(type_name)
    }

    /// All type names in the chart
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.relations.keys().map(String::as_str)
    }

    /// Get effectiveness of an attacking type against a single defending type
    ///
    /// 2.0 if the defender is in the attacker's `strong` set, 0.5 for
    /// `not_effective`, 0.0 for `immune`, otherwise 1.0.
    pub fn effectiveness(&self, attacking: &str, defending: &str) -> Result<f64, ChartError> {
        let relation = self.relation(attacking)?;
        let factor = if relation.strong.contains(defending) {
            2.0
        } else if relation.not_effective.contains(defending) {
            0.5
        } else if relation.immune.contains(defending) {
            0.0
        } else {
            1.0
        };
        Ok(factor)
    }

    /// Get effectiveness against multiple defending types (multiplied)
    ///
    /// Each defending type contributes its factor independently, so a
    /// dual-typed defender can yield 4.0, 0.25, or 0.0 overall.
    pub fn effectiveness_multi(
        &self,
        attacking: &str,
        defenders: &[String],
    ) -> Result<f64, ChartError> {
        let mut factor = 1.0;
        for defending in defenders {
            factor *= self.effectiveness(attacking, defending)?;
        }
        Ok(factor)
    }

    /// Check that every relation's offensive sets are pairwise disjoint
    ///
    /// A defending type must map to exactly one factor, so `strong`,
    /// `not_effective`, and `immune` may not overlap. `weak` is defensive
    /// (it mirrors other types' `strong` sets) and may legitimately share
    /// members with the offensive sets.
    pub fn validate(&self) -> Result<(), ChartError> {
        for (type_name, relation) in &self.relations {
            let sets = [&relation.strong, &relation.not_effective, &relation.immune];
            for (i, a) in sets.iter().enumerate() {
                for b in &sets[i + 1..] {
                    if let Some(other) = a.intersection(b).next() {
                        return Err(ChartError::ConflictingRelation {
                            type_name: type_name.clone(),
                            other: other.clone(),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

//! Roster-wide matchup evaluation

use std::fmt;

use crate::chart::{ChartError, TypeChart};
use crate::moves::MoveTable;
use crate::resist::classify;
use crate::score::{ScoredMove, score_moves};

/// A creature the player owns, with its resolved types and known moves
///
/// An empty type set means the upstream lookup could not resolve this
/// creature; [`evaluate`] reports it and leaves it out rather than failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedCreature {
    pub name: String,
    pub types: Vec<String>,
    pub moves: Vec<String>,
}

impl OwnedCreature {
    pub fn new(name: impl Into<String>, types: Vec<String>, moves: Vec<String>) -> Self {
        Self {
            name: name.into(),
            types,
            moves,
        }
    }

    /// Whether the upstream type lookup resolved this creature
    pub fn is_resolved(&self) -> bool {
        !self.types.is_empty()
    }
}

/// An opposing creature with its resolved types
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpposingCreature {
    pub name: String,
    pub types: Vec<String>,
}

impl OpposingCreature {
    pub fn new(name: impl Into<String>, types: Vec<String>) -> Self {
        Self {
            name: name.into(),
            types,
        }
    }

    /// Whether the upstream type lookup resolved this creature
    pub fn is_resolved(&self) -> bool {
        !self.types.is_empty()
    }
}

/// One owned creature's standing in a matchup's damage ranking
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCreature {
    pub name: String,
    pub types: Vec<String>,

    /// Viable moves, best first
    pub moves: Vec<ScoredMove>,

    /// Expected power of the best move; None when no move is viable
    pub best: Option<f64>,
}

/// Everything known about one opponent after evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct MatchupResult {
    pub opponent: String,
    pub opponent_types: Vec<String>,

    /// Owned creatures sorted descending by their best expected power;
    /// creatures with no viable move sort last, in roster order
    pub ranking: Vec<RankedCreature>,

    /// Display labels of owned creatures flagged immune against this opponent
    pub immune: Vec<String>,

    /// Display labels of owned creatures flagged weak against this opponent
    pub weak: Vec<String>,
}

/// A skipped entity, reported instead of logged so callers can assert on it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// An opponent whose types could not be resolved; its result is omitted
    UnresolvedOpponent { name: String },

    /// An owned creature whose types could not be resolved; it is left out
    /// of this opponent's ranking and resistance lists
    UnresolvedCreature { name: String, opponent: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnresolvedOpponent { name } => {
                write!(f, "Could not resolve types for enemy Pokemon: {}", name)
            }
            Diagnostic::UnresolvedCreature { name, opponent } => {
                write!(
                    f,
                    "Could not resolve types for your Pokemon {} (vs {})",
                    name, opponent
                )
            }
        }
    }
}

/// Per-opponent results plus diagnostics for everything that was skipped
///
/// `results` keeps the input opponent order; [`Evaluation::result_for`]
/// offers keyed access by opponent name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Evaluation {
    pub results: Vec<MatchupResult>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Evaluation {
    /// Look up the result for one opponent by name
    pub fn result_for(&self, opponent: &str) -> Option<&MatchupResult> {
        self.results.iter().find(|r| r.opponent == opponent)
    }
}

/// Evaluate every owned creature against every opponent
///
/// Unresolvable creatures degrade gracefully: an opponent with no types is
/// skipped (and reported) without touching the others, and an owned creature
/// with no types is reported per opponent and left out. The only fatal
/// condition is a type the effectiveness chart does not know, which means
/// the reference data is corrupt.
pub fn evaluate(
    owned: &[OwnedCreature],
    opponents: &[OpposingCreature],
    moves: &MoveTable,
    chart: &TypeChart,
) -> Result<Evaluation, ChartError> {
    let mut results = Vec::new();
    let mut diagnostics = Vec::new();

    for opponent in opponents {
        if !opponent.is_resolved() {
            diagnostics.push(Diagnostic::UnresolvedOpponent {
                name: opponent.name.clone(),
            });
            continue;
        }

        let mut ranking = Vec::new();
        let mut immune = Vec::new();
        let mut weak = Vec::new();

        for creature in owned {
            if !creature.is_resolved() {
                diagnostics.push(Diagnostic::UnresolvedCreature {
                    name: creature.name.clone(),
                    opponent: opponent.name.clone(),
                });
                continue;
            }

            let scored = score_moves(
                &creature.types,
                &creature.moves,
                &opponent.types,
                moves,
                chart,
            )?;
            ranking.push(RankedCreature {
                name: creature.name.clone(),
                types: creature.types.clone(),
                best: scored.first().map(|m| m.expected_power),
                moves: scored,
            });

            let resistance = classify(&creature.types, &opponent.types, chart)?;
            if resistance.immune || resistance.weak {
                let label = display_label(&creature.name, &creature.types);
                if resistance.immune {
                    immune.push(label.clone());
                }
                if resistance.weak {
                    weak.push(label);
                }
            }
        }

        // Stable sort: equal best values (and move-less creatures) keep
        // roster order
        ranking.sort_by(|a, b| {
            b.best
                .unwrap_or(f64::NEG_INFINITY)
                .total_cmp(&a.best.unwrap_or(f64::NEG_INFINITY))
        });

        results.push(MatchupResult {
            opponent: opponent.name.clone(),
            opponent_types: opponent.types.clone(),
            ranking,
            immune,
            weak,
        });
    }

    Ok(Evaluation {
        results,
        diagnostics,
    })
}

/// Display label for a creature: `Name (type1, type2)`
pub fn display_label(name: &str, types: &[String]) -> String {
    format!("{} ({})", name, types.join(", "))
}

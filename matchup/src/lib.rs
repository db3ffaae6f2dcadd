//! Matchup evaluation engine for Pokemon battles.
//!
//! This crate answers one question: given the Pokemon you own (and the moves
//! they know) and the Pokemon you are about to face, which of yours hits
//! hardest and which are exposed defensively?
//!
//! # Overview
//!
//! `oak-matchup` is the pure core of the advisor. It never touches the
//! network or the filesystem; reference data comes in as plain tables:
//!
//! ```text
//! oak-dex (PokeAPI retrieval + caches + roster config)
//!        │
//!        ▼
//! oak-matchup (scoring + classification) ← THIS CRATE
//!        │
//!        └─> oak-cli (text rendering)
//! ```
//!
//! # Main Types
//!
//! - [`TypeChart`] / [`TypeRelation`] - type effectiveness reference data
//! - [`MoveTable`] / [`MoveData`] - move metadata lookup
//! - [`ScoredMove`] - a move with its expected power against an opponent
//! - [`Resistance`] - immune/weak classification of one creature
//! - [`Evaluation`] / [`MatchupResult`] - per-opponent results plus
//!   diagnostics for entities that could not be resolved
//!
//! # Example Usage
//!
//! ```ignore
//! use oak_matchup::{evaluate, OwnedCreature, OpposingCreature};
//!
//! let owned = vec![OwnedCreature::new(
//!     "Charmander",
//!     vec!["fire".into()],
//!     vec!["Ember".into(), "Growl".into()],
//! )];
//! let opponents = vec![OpposingCreature::new("Bulbasaur", vec!["grass".into()])];
//!
//! let evaluation = evaluate(&owned, &opponents, &move_table, &chart)?;
//! for result in &evaluation.results {
//!     println!("vs {}: best is {}", result.opponent, result.ranking[0].name);
//! }
//! ```

pub mod chart;
pub mod evaluate;
pub mod moves;
pub mod resist;
pub mod score;

// Re-export main types at crate root for convenience
pub use chart::{ChartError, TypeChart, TypeRelation};
pub use evaluate::{
    Diagnostic, Evaluation, MatchupResult, OpposingCreature, OwnedCreature, RankedCreature,
    evaluate,
};
pub use moves::{MoveData, MoveTable};
pub use resist::{Resistance, classify};
pub use score::{ScoredMove, score_moves};

//! Data providers for the matchup advisor.
//!
//! Everything here exists to materialize the read-only tables the
//! `oak-matchup` engine consumes: Pokemon type sets fetched from PokeAPI
//! (with an on-disk JSON cache and polite rate limiting), the type
//! effectiveness chart, the move metadata cache, the ability-effect cache,
//! and the owned-roster configuration.
//!
//! The engine itself never does I/O; this crate is the boundary where the
//! network and filesystem live.

mod api;
mod config;

pub use api::{PokeApi, normalize_name};
pub use config::{
    Roster, ability_effect, load_move_table, load_type_chart, opposing_creatures,
};

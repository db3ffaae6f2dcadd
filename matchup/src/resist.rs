//! Defensive exposure classification

use crate::chart::{ChartError, TypeChart};

/// Immune/weak flags for one creature against one opponent
///
/// The two flags are independent set-membership checks; a creature can be
/// flagged both at once and it is up to the display layer to decide what to
/// make of that.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resistance {
    pub immune: bool,
    pub weak: bool,
}

/// Classify a creature's defensive exposure to an opponent's type set
///
/// `immune` is true when any of the creature's own types lists one of the
/// opponent's types in its `immune` set. Note the direction: this reads the
/// creature's own attacking-immunity list, not the opponent's. It is how
/// this tool has always classified immunity and downstream output depends
/// on it; see DESIGN.md before changing the direction.
///
/// `weak` is true when any of the opponent's types lists one of the
/// creature's types in its `strong` set.
pub fn classify(
    creature_types: &[String],
    enemy_types: &[String],
    chart: &TypeChart,
) -> Result<Resistance, ChartError> {
    let mut immune = false;
    for creature_type in creature_types {
        let relation = chart.relation(creature_type)?;
        if enemy_types.iter().any(|e| relation.immune.contains(e)) {
            immune = true;
            break;
        }
    }

    let mut weak = false;
    for enemy_type in enemy_types {
        let relation = chart.relation(enemy_type)?;
        if creature_types.iter().any(|c| relation.strong.contains(c)) {
            weak = true;
            break;
        }
    }

    Ok(Resistance { immune, weak })
}

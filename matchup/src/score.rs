//! Move scoring against an opponent's type set

use crate::chart::{ChartError, TypeChart};
use crate::moves::MoveTable;

/// Same-type attack bonus, applied once when a move shares a type with its user
const STAB_MULTIPLIER: f64 = 1.5;

/// A move paired with its expected power against a specific opponent
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredMove {
    /// Move name as it appeared in the creature's move list
    pub name: String,

    /// base power x (accuracy / 100) x effectiveness, full precision
    pub expected_power: f64,
}

impl ScoredMove {
    /// Display label with one decimal of precision, e.g. `Ember[120.0]`
    ///
    /// The label is derived from [`expected_power`](Self::expected_power);
    /// downstream code must use the numeric field, never parse the label.
    pub fn label(&self) -> String {
        format!("{}[{:.1}]", self.name, self.expected_power)
    }
}

/// Score a creature's known moves against an opponent's type set
///
/// Moves absent from the table are skipped silently (roster move lists are
/// often broader than the metadata snapshot), as are moves with no base
/// power and moves the opponent is outright immune to. The result is sorted
/// descending by expected power; equal scores keep their move-list order.
pub fn score_moves(
    creature_types: &[String],
    known_moves: &[String],
    enemy_types: &[String],
    moves: &MoveTable,
    chart: &TypeChart,
) -> Result<Vec<ScoredMove>, ChartError> {
    let mut scored = Vec::new();

    for name in known_moves {
        let Some(data) = moves.get(name) else {
            continue;
        };

        // Status moves carry no direct-damage score
        let power = match data.power {
            Some(power) if power > 0.0 => power,
            _ => continue,
        };
        let accuracy = data.accuracy.unwrap_or(100.0);

        let mut effectiveness = chart.effectiveness_multi(&data.move_type, enemy_types)?;

        // STAB is boolean: it applies once even if both of a dual type match
        if creature_types.iter().any(|t| *t == data.move_type) {
            effectiveness *= STAB_MULTIPLIER;
        }

        // A nullified move is useless, not merely weak
        if effectiveness == 0.0 {
            continue;
        }

        scored.push(ScoredMove {
            name: name.clone(),
            expected_power: power * (accuracy / 100.0) * effectiveness,
        });
    }

    // sort_by is stable, so ties keep first-seen order
    scored.sort_by(|a, b| b.expected_power.total_cmp(&a.expected_power));
    Ok(scored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::TypeRelation;
    use crate::moves::MoveData;
    use std::collections::HashMap;

    fn relation(strong: &[&str], not_effective: &[&str], immune: &[&str]) -> TypeRelation {
        TypeRelation {
            strong: strong.iter().map(|s| s.to_string()).collect(),
            weak: Default::default(),
            not_effective: not_effective.iter().map(|s| s.to_string()).collect(),
            immune: immune.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn chart() -> TypeChart {
        let mut relations = HashMap::new();
        relations.insert("fire".to_string(), relation(&["grass"], &["water"], &[]));
        relations.insert(
            "electric".to_string(),
            relation(&["water"], &["grass"], &["ground"]),
        );
        relations.insert("normal".to_string(), relation(&[], &[], &["ghost"]));
        TypeChart::new(relations)
    }

    fn table() -> MoveTable {
        let mut table = MoveTable::default();
        table.insert("Ember", MoveData::new("fire", Some(40.0), Some(100.0)));
        table.insert("Thunder Shock", MoveData::new("electric", Some(40.0), Some(100.0)));
        table.insert("Thunder", MoveData::new("electric", Some(110.0), Some(70.0)));
        table.insert("Growl", MoveData::new("normal", None, Some(100.0)));
        table.insert("Splash", MoveData::new("normal", Some(0.0), None));
        table.insert("Tackle", MoveData::new("normal", Some(40.0), Some(100.0)));
        table.insert("Swift", MoveData::new("normal", Some(60.0), None));
        table
    }

    fn strs(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_stab_and_type_advantage() {
        // 40 power x 1.0 accuracy x (2.0 strong x 1.5 STAB) = 120.0
        let scored = score_moves(
            &strs(&["fire"]),
            &strs(&["Ember"]),
            &strs(&["grass"]),
            &table(),
            &chart(),
        )
        .unwrap();
        assert_eq!(scored.len(), 1);
        assert_eq!(scored[0].expected_power, 120.0);
        assert_eq!(scored[0].label(), "Ember[120.0]");
    }

    #[test]
    fn test_not_very_effective_with_stab() {
        // 40 x 1.0 x (0.5 x 1.5) = 30.0
        let scored = score_moves(
            &strs(&["fire"]),
            &strs(&["Ember"]),
            &strs(&["water"]),
            &table(),
            &chart(),
        )
        .unwrap();
        assert_eq!(scored[0].expected_power, 30.0);
    }

    #[test]
    fn test_neutral_matchup_without_stab() {
        // Normal move from an electric attacker against water: no rule
        // applies, no STAB, so only accuracy scales the power.
        let scored = score_moves(
            &strs(&["electric"]),
            &strs(&["Tackle"]),
            &strs(&["water"]),
            &table(),
            &chart(),
        )
        .unwrap();
        assert_eq!(scored[0].expected_power, 40.0);
    }

    #[test]
    fn test_accuracy_scales_expected_power() {
        // Thunder: 110 x 0.70 x (2.0 x 1.5) = 231.0
        let scored = score_moves(
            &strs(&["electric"]),
            &strs(&["Thunder"]),
            &strs(&["water"]),
            &table(),
            &chart(),
        )
        .unwrap();
        assert_eq!(scored[0].expected_power, 231.0);
    }

    #[test]
    fn test_missing_accuracy_means_always_hits() {
        let scored = score_moves(
            &strs(&["fire"]),
            &strs(&["Swift"]),
            &strs(&["water"]),
            &table(),
            &chart(),
        )
        .unwrap();
        assert_eq!(scored[0].expected_power, 60.0);
    }

    #[test]
    fn test_unknown_move_is_skipped() {
        let scored = score_moves(
            &strs(&["fire"]),
            &strs(&["Hyper Beam", "Ember"]),
            &strs(&["grass"]),
            &table(),
            &chart(),
        )
        .unwrap();
        assert_eq!(scored.len(), 1);
        assert_eq!(scored[0].name, "Ember");
    }

    #[test]
    fn test_null_and_zero_power_moves_are_skipped() {
        let scored = score_moves(
            &strs(&["normal"]),
            &strs(&["Growl", "Splash"]),
            &strs(&["grass"]),
            &table(),
            &chart(),
        )
        .unwrap();
        assert!(scored.is_empty());
    }

    #[test]
    fn test_immune_opponent_excludes_move() {
        let scored = score_moves(
            &strs(&["electric"]),
            &strs(&["Thunder Shock"]),
            &strs(&["ground"]),
            &table(),
            &chart(),
        )
        .unwrap();
        assert!(scored.is_empty());
    }

    #[test]
    fn test_dual_type_opponent_stacks_multiplicatively() {
        // Electric vs water/ground: 2.0 x 0.0 = 0, excluded entirely
        let scored = score_moves(
            &strs(&["electric"]),
            &strs(&["Thunder Shock"]),
            &strs(&["water", "ground"]),
            &table(),
            &chart(),
        )
        .unwrap();
        assert!(scored.is_empty());

        // Fire vs grass/water: 2.0 x 0.5 = 1.0, with STAB 1.5 -> 60.0
        let scored = score_moves(
            &strs(&["fire"]),
            &strs(&["Ember"]),
            &strs(&["grass", "water"]),
            &table(),
            &chart(),
        )
        .unwrap();
        assert_eq!(scored[0].expected_power, 60.0);
    }

    #[test]
    fn test_stab_applies_once_for_doubled_attacker_type() {
        let scored = score_moves(
            &strs(&["fire", "fire"]),
            &strs(&["Ember"]),
            &strs(&["grass"]),
            &table(),
            &chart(),
        )
        .unwrap();
        // 40 x 2.0 x 1.5 = 120, not 40 x 2.0 x 1.5 x 1.5
        assert_eq!(scored[0].expected_power, 120.0);
    }

    #[test]
    fn test_sorted_descending_with_stable_ties() {
        let mut table = table();
        table.insert("Scratch", MoveData::new("normal", Some(40.0), Some(100.0)));

        let scored = score_moves(
            &strs(&["fire"]),
            &strs(&["Tackle", "Scratch", "Ember"]),
            &strs(&["grass"]),
            &table,
            &chart(),
        )
        .unwrap();
        let names: Vec<&str> = scored.iter().map(|m| m.name.as_str()).collect();
        // Ember scores 120; Tackle and Scratch tie at 40 and keep list order
        assert_eq!(names, vec!["Ember", "Tackle", "Scratch"]);
    }

    #[test]
    fn test_no_known_moves_yields_empty_result() {
        let scored =
            score_moves(&strs(&["fire"]), &[], &strs(&["grass"]), &table(), &chart()).unwrap();
        assert!(scored.is_empty());
    }

    #[test]
    fn test_unlisted_enemy_type_is_neutral() {
        // The chart only multiplies for listed relations; an enemy type the
        // attacking type has no rule for leaves effectiveness at 1.0.
        let scored = score_moves(
            &strs(&["electric"]),
            &strs(&["Thunder Shock"]),
            &strs(&["fire"]),
            &table(),
            &chart(),
        )
        .unwrap();
        assert_eq!(scored[0].expected_power, 40.0 * 1.5);
    }

    #[test]
    fn test_move_type_missing_from_chart_is_fatal() {
        let mut table = table();
        table.insert("Dragon Rage", MoveData::new("dragon", Some(40.0), Some(100.0)));

        let result = score_moves(
            &strs(&["fire"]),
            &strs(&["Dragon Rage"]),
            &strs(&["grass"]),
            &table,
            &chart(),
        );
        assert_eq!(result, Err(ChartError::UnknownType("dragon".to_string())));
    }
}

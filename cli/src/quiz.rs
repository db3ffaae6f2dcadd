//! Interactive type effectiveness quiz

use std::collections::HashSet;
use std::io::{self, BufRead, Write};

use anyhow::{Result, bail};
use oak_matchup::TypeChart;
use rand::seq::SliceRandom;

use crate::render::title_case;

/// Run one quiz round: pick a random type and grade the player's guesses
pub fn run(chart: &TypeChart) -> Result<()> {
    let mut types: Vec<&str> = chart.types().collect();
    types.sort_unstable();

    let mut rng = rand::thread_rng();
    let Some(chosen) = types.choose(&mut rng) else {
        bail!("Type chart is empty");
    };
    let relation = chart.relation(chosen)?;

    println!("\nPokemon Type: {}", title_case(chosen));

    let user_strong =
        read_guesses("Which types are STRONG against this type? (comma separated): ")?;
    let user_weak = read_guesses("Which types are WEAK against this type? (comma separated): ")?;
    let user_immune =
        read_guesses("Which types are IMMUNE to this type? (comma separated): ")?;
    let user_not_effective = read_guesses(
        "Which types receive NOT VERY EFFECTIVE damage from this type? (comma separated): ",
    )?;

    let categories = [
        ("STRONG", &user_strong, &relation.strong),
        ("WEAK", &user_weak, &relation.weak),
        ("IMMUNE", &user_immune, &relation.immune),
        ("NOT VERY EFFECTIVE", &user_not_effective, &relation.not_effective),
    ];

    for (label, guesses, correct) in categories {
        let (right, wrong, missed) = grade(guesses, correct);
        println!("\n{}:", label);
        println!("  Correct: {:?}", right);
        println!("  Wrong: {:?}", wrong);
        println!("  Missed: {:?}", missed);
    }

    Ok(())
}

/// Split a guess list against the correct set into (right, wrong, missed),
/// each sorted
pub fn grade(
    guesses: &[String],
    correct: &HashSet<String>,
) -> (Vec<String>, Vec<String>, Vec<String>) {
    let guessed: HashSet<&str> = guesses.iter().map(String::as_str).collect();

    let mut right: Vec<String> = guessed
        .iter()
        .filter(|g| correct.contains(**g))
        .map(|g| g.to_string())
        .collect();
    let mut wrong: Vec<String> = guessed
        .iter()
        .filter(|g| !correct.contains(**g))
        .map(|g| g.to_string())
        .collect();
    let mut missed: Vec<String> = correct
        .iter()
        .filter(|c| !guessed.contains(c.as_str()))
        .cloned()
        .collect();

    right.sort_unstable();
    wrong.sort_unstable();
    missed.sort_unstable();
    (right, wrong, missed)
}

fn read_guesses(prompt: &str) -> Result<Vec<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    Ok(line
        .to_lowercase()
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(names: &[&str]) -> HashSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn strs(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_grade_partitions_guesses() {
        let correct = set(&["water", "ground", "rock"]);
        let guesses = strs(&["water", "grass"]);

        let (right, wrong, missed) = grade(&guesses, &correct);
        assert_eq!(right, vec!["water"]);
        assert_eq!(wrong, vec!["grass"]);
        assert_eq!(missed, vec!["ground", "rock"]);
    }

    #[test]
    fn test_grade_empty_guesses() {
        let correct = set(&["ghost"]);
        let (right, wrong, missed) = grade(&[], &correct);
        assert!(right.is_empty());
        assert!(wrong.is_empty());
        assert_eq!(missed, vec!["ghost"]);
    }

    #[test]
    fn test_grade_duplicate_guesses_count_once() {
        let correct = set(&["water"]);
        let guesses = strs(&["water", "water"]);
        let (right, wrong, _) = grade(&guesses, &correct);
        assert_eq!(right, vec!["water"]);
        assert!(wrong.is_empty());
    }
}

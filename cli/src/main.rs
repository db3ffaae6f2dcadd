//! Matchup advisor command line
//!
//! Modes:
//! - `oak types NAME...` - print resolved types for each Pokemon
//! - `oak current ENEMY...` - rank the current team against the enemies
//! - `oak all ENEMY...` - rank every owned Pokemon against the enemies
//! - `oak ability NAME...` - print cached ability effects
//! - `oak quiz` - one round of the type effectiveness quiz
//!
//! Reference data lives under `data/` (override with `OAK_DATA_DIR`).

mod quiz;
mod render;

use std::env;
use std::path::{Path, PathBuf};

use anyhow::Result;
use oak_dex::{
    PokeApi, Roster, ability_effect, load_move_table, load_type_chart, opposing_creatures,
};
use oak_matchup::evaluate;

const USAGE: &str = "Please provide a mode to run: quiz, types, current, all, or ability";

fn data_dir() -> PathBuf {
    env::var_os("OAK_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data"))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(mode) = args.first() else {
        println!("{}", USAGE);
        return Ok(());
    };
    let rest = &args[1..];
    let dir = data_dir();

    match mode.to_lowercase().as_str() {
        "quiz" => {
            let chart = load_type_chart(dir.join("type_chart.json"))?;
            quiz::run(&chart)
        }
        "types" => {
            if rest.is_empty() {
                println!("Please provide at least one Pokemon name for the 'types' mode.");
                return Ok(());
            }
            run_types(rest, &dir).await
        }
        "current" => run_matchups(TeamScope::Current, rest, &dir).await,
        "all" => run_matchups(TeamScope::All, rest, &dir).await,
        "ability" => {
            if rest.is_empty() {
                println!("Please provide at least one Pokemon ability name for the 'ability' mode.");
                return Ok(());
            }
            run_abilities(rest, &dir)
        }
        other => {
            println!(
                "Unknown mode: {}. Available modes: quiz, types, current, all, ability",
                other
            );
            Ok(())
        }
    }
}

/// Which slice of the roster to evaluate
enum TeamScope {
    Current,
    All,
}

async fn run_types(names: &[String], dir: &Path) -> Result<()> {
    let api = PokeApi::new(dir.join("types_cache.json"));
    let resolved = api.resolve_types(names).await?;

    for name in names {
        match resolved.get(name) {
            Some(types) => println!("{}: {}", name, types.join(", ")),
            None => println!("Could not fetch types for {}.", name),
        }
    }
    Ok(())
}

async fn run_matchups(scope: TeamScope, enemies: &[String], dir: &Path) -> Result<()> {
    let mode = match scope {
        TeamScope::Current => "current",
        TeamScope::All => "all",
    };
    if enemies.is_empty() {
        println!(
            "Please provide at least one enemy Pokemon name for the '{}' mode.",
            mode
        );
        return Ok(());
    }

    let roster = Roster::load(dir.join("roster.json"))?;
    let names = match scope {
        TeamScope::Current => roster.current_team.clone(),
        TeamScope::All => roster.owned_names(),
    };
    if names.is_empty() {
        match scope {
            TeamScope::Current => println!(
                "Your current Pokemon team is empty. Please update current_team in roster.json."
            ),
            TeamScope::All => println!(
                "You do not own any Pokemon. Please update owned in roster.json."
            ),
        }
        return Ok(());
    }

    let chart = load_type_chart(dir.join("type_chart.json"))?;
    let move_table = load_move_table(dir.join("move_types_cache.json"))?;

    let api = PokeApi::new(dir.join("types_cache.json"));
    let mut lookup_names = names.clone();
    lookup_names.extend(enemies.iter().cloned());
    let resolved = api.resolve_types(&lookup_names).await?;

    let owned = roster.creatures(&names, &resolved);
    let opponents = opposing_creatures(enemies, &resolved);

    let evaluation = evaluate(&owned, &opponents, &move_table, &chart)?;
    for diagnostic in &evaluation.diagnostics {
        tracing::warn!("{}", diagnostic);
    }
    print!("{}", render::render_matchups(&evaluation));
    Ok(())
}

fn run_abilities(names: &[String], dir: &Path) -> Result<()> {
    let cache = dir.join("ability_cache.json");
    for name in names {
        match ability_effect(&cache, name)? {
            Some(effect) => println!("Ability '{}': {}", name, effect),
            None => println!("Could not fetch information for ability '{}'.", name),
        }
    }
    Ok(())
}

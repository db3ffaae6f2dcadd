//! Text rendering of evaluation results

use std::fmt::Write;

use oak_matchup::Evaluation;

/// Render every matchup result in the banner-and-sections layout
pub fn render_matchups(evaluation: &Evaluation) -> String {
    let mut out = String::new();

    for result in &evaluation.results {
        let header = format!(
            "### Against {} ({}): ###",
            title_case(&result.opponent),
            result.opponent_types.join(", ")
        );
        let rule = "#".repeat(header.chars().count());
        let _ = writeln!(out, "{}", rule);
        let _ = writeln!(out, "{}", header);
        let _ = writeln!(out, "{}", rule);

        let _ = writeln!(out, "  Damage:");
        for ranked in &result.ranking {
            let types = ranked.types.join(", ");
            if ranked.moves.is_empty() {
                let _ = writeln!(out, "      - {} ({})", ranked.name, types);
            } else {
                let moves: Vec<String> = ranked.moves.iter().map(|m| m.label()).collect();
                let _ = writeln!(out, "      - {} ({} - {})", ranked.name, types, moves.join(", "));
            }
        }

        let _ = writeln!(out, "  Resistance:");
        let _ = writeln!(out, "    Immune:");
        for label in &result.immune {
            let _ = writeln!(out, "      - {}", label);
        }
        let _ = writeln!(out, "    Weak:");
        for label in &result.weak {
            let _ = writeln!(out, "      - {}", label);
        }
        out.push('\n');
    }

    out
}

/// Capitalize the first letter of each word ("mr. mime" -> "Mr. Mime")
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_alpha = false;
    for c in name.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

//! Display functions for boards and command results

use super::formatters::{score_to_pegs, score_to_words};
use crate::commands::SolveResult;
use crate::core::{Code, Palette, Score};
use colored::Colorize;

/// Render the guesses played so far with their feedback
#[must_use]
pub fn render_board(palette: &Palette, rows: &[(Code, Score)], length: usize) -> String {
    let width = rows
        .iter()
        .map(|(code, _)| palette.render(code).len())
        .max()
        .unwrap_or(0)
        .max("Guesses".len());

    let rule = "─".repeat(width + 30);
    let mut out = format!("\n{rule}\n    {:<width$} | Feedback\n{rule}\n", "Guesses");

    for (i, (code, score)) in rows.iter().enumerate() {
        out.push_str(&format!(
            "{:>2}. {:<width$} | {} {}\n",
            i + 1,
            palette.render(code),
            score_to_pegs(*score, length).bold(),
            format!("({})", score_to_words(*score)).bright_black()
        ));
    }

    out.push_str(&rule);
    out.push('\n');
    out
}

/// Print the result of solving a code
pub fn print_solve_result(result: &SolveResult, palette: &Palette, length: usize, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        palette.render(&result.secret).bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            palette.render(&step.guess),
            score_to_pegs(step.score, length)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if step.candidates_after > 0 {
                println!(
                    "  Reduction:  {:.1}x",
                    step.candidates_before as f64 / step.candidates_after as f64
                );
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} turns!", result.turns()).green().bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} turns", result.turns())
                .red()
                .bold()
        );
    }
}

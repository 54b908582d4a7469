//! Test all secrets - exhaustive solver evaluation
//!
//! Runs the solver against every possible secret and generates statistics.

use super::solve::solve_code;
use crate::core::{Code, GameConfig, MastermindError};
use crate::solver::{CandidateSpace, Strategy};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Statistics from testing all secrets
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_codes: usize,
    pub solved: usize,
    pub failed: Vec<Code>,
    pub turn_distribution: BTreeMap<usize, usize>,
    pub total_time: Duration,
    pub average_turns: f64,
    pub max_turns: usize,
    pub hardest_codes: Vec<(Code, usize)>,
}

/// Run the solver on every secret of the configured space (or the first `limit`)
///
/// # Errors
///
/// Returns the first core error raised while solving, for instance
/// `CandidateSpaceExhausted` if a scoring invariant is broken.
pub fn run_test_all<S: Strategy + Copy>(
    config: &GameConfig,
    strategy: S,
    limit: Option<usize>,
) -> Result<TestAllStatistics, MastermindError> {
    let secrets = CandidateSpace::from_config(config)?;
    let test_codes: Vec<&Code> = secrets
        .remaining()
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .collect();

    println!("🎯 Testing {} codes...", test_codes.len());

    // Progress bar
    let pb = ProgressBar::new(test_codes.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let mut turn_distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut failed = Vec::new();
    let mut solved_turns: Vec<(Code, usize)> = Vec::new();

    let total_start = Instant::now();

    for (idx, &secret) in test_codes.iter().enumerate() {
        let result = solve_code(config, strategy, secret)?;

        if result.success {
            *turn_distribution.entry(result.turns()).or_insert(0) += 1;
            solved_turns.push((secret.clone(), result.turns()));
        } else {
            failed.push(secret.clone());
        }

        // Update progress
        if idx % 25 == 0 && !solved_turns.is_empty() {
            let avg = solved_turns.iter().map(|(_, n)| n).sum::<usize>() as f64
                / solved_turns.len() as f64;
            pb.set_message(format!("Avg: {avg:.2}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let total_turns: usize = solved_turns.iter().map(|(_, n)| n).sum();
    let average_turns = if solved_turns.is_empty() {
        0.0
    } else {
        total_turns as f64 / solved_turns.len() as f64
    };
    let max_turns = solved_turns.iter().map(|(_, n)| *n).max().unwrap_or(0);

    let mut hardest_codes = solved_turns.clone();
    hardest_codes.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    hardest_codes.truncate(10);

    Ok(TestAllStatistics {
        total_codes: test_codes.len(),
        solved: solved_turns.len(),
        failed,
        turn_distribution,
        total_time: total_start.elapsed(),
        average_turns,
        max_turns,
        hardest_codes,
    })
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics, config: &GameConfig) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    let total = stats.total_codes.max(1) as f64;

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total codes tested:  {}", stats.total_codes);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solved as f64 / total * 100.0).green()
    );
    if !stats.failed.is_empty() {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed.len(),
            format!("({:.1}%)", stats.failed.len() as f64 / total * 100.0).red()
        );
    }
    println!(
        "  Average turns:       {}",
        format!("{:.3}", stats.average_turns).bright_yellow().bold()
    );
    println!("  Worst case:          {} turns", stats.max_turns);
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    // Turn distribution
    println!("\n📈 {}", "Turn Distribution".bright_cyan().bold());
    let max_count = stats.turn_distribution.values().copied().max().unwrap_or(1);
    for turns in 1..=config.max_turns {
        let count = stats.turn_distribution.get(&turns).copied().unwrap_or(0);
        if count == 0 && turns > stats.max_turns {
            break;
        }
        let percentage = count as f64 / stats.solved.max(1) as f64 * 100.0;
        let bar_len = (count * 40 / max_count).max(usize::from(count > 0));
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!("  {turns:2} turns: {bar} {count:5} ({percentage:5.1}%)");
    }

    if !stats.hardest_codes.is_empty() {
        println!("\n😰 {}", "Hardest Codes".yellow().bold());
        for (code, turns) in stats.hardest_codes.iter().take(5) {
            println!("  {} ({turns} turns)", config.palette.render(code).yellow());
        }
    }

    if !stats.failed.is_empty() {
        println!("\n❌ {}", "Unsolved Codes".red().bold());
        for code in stats.failed.iter().take(10) {
            println!("  {}", config.palette.render(code).red());
        }
    }
}

//! Test all codes - comprehensive solver evaluation
//!
//! Runs the solver against every possible hidden code and generates statistics.

use crate::config::GameConfig;
use crate::core::Code;
use crate::game::{SecretKeeper, SolverGuesses, play_game};
use crate::solver::Strategy;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result from testing a single code
#[derive(Debug, Clone)]
pub struct CodeTestResult {
    pub code: String,
    pub guesses: Vec<String>,
    pub num_guesses: usize,
    pub success: bool,
}

/// Statistics from testing all codes
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_codes: usize,
    pub solved: usize,
    pub failed: usize,
    pub guess_distribution: FxHashMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    /// Up to ten codes needing `max_guesses`, with the guesses that found them
    pub hardest_codes: Vec<(String, Vec<String>)>,
    pub failures: Vec<String>,
}

/// Run the solver on every code of the configured game (or the first `limit`)
///
/// Games run in parallel; each gets a fresh session with its own copy of the
/// strategy.
pub fn run_test_all<S>(config: &GameConfig, strategy: &S, limit: Option<usize>) -> TestAllStatistics
where
    S: Strategy + Clone + Sync,
{
    let universe = config.rules.universe();
    let secrets: Vec<Code> = universe
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .collect();

    println!("🎯 Testing {} codes...", secrets.len());

    let pb = ProgressBar::new(secrets.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let total_start = Instant::now();

    let results: Vec<CodeTestResult> = secrets
        .par_iter()
        .map(|&secret| {
            let result = test_code(config, strategy.clone(), secret);
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_with_message("Complete!");

    summarize(&results, total_start.elapsed())
}

fn test_code<S: Strategy>(config: &GameConfig, strategy: S, secret: Code) -> CodeTestResult {
    let code = config.rules.render(&secret);
    let failed = |guesses: Vec<String>| CodeTestResult {
        code: code.clone(),
        num_guesses: guesses.len(),
        guesses,
        success: false,
    };

    let Ok(mut session) = config.session(strategy) else {
        return failed(Vec::new());
    };
    let Ok(mut keeper) = SecretKeeper::new(config.rules.clone(), secret) else {
        return failed(Vec::new());
    };

    let outcome = play_game(&mut session, &mut SolverGuesses, &mut keeper, config.max_turns);
    let guesses: Vec<String> = session
        .history()
        .iter()
        .map(|turn| config.rules.render(&turn.guess))
        .collect();

    match outcome {
        Ok(outcome) if outcome.solved => CodeTestResult {
            code: code.clone(),
            num_guesses: guesses.len(),
            guesses,
            success: true,
        },
        _ => failed(guesses),
    }
}

fn summarize(results: &[CodeTestResult], total_time: Duration) -> TestAllStatistics {
    let mut guess_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    for result in results.iter().filter(|r| r.success) {
        *guess_distribution.entry(result.num_guesses).or_insert(0) += 1;
    }

    let solved: Vec<&CodeTestResult> = results.iter().filter(|r| r.success).collect();
    let total_guesses: usize = solved.iter().map(|r| r.num_guesses).sum();
    let average_guesses = if solved.is_empty() {
        0.0
    } else {
        total_guesses as f64 / solved.len() as f64
    };

    let max_guesses = solved.iter().map(|r| r.num_guesses).max().unwrap_or(0);
    let min_guesses = solved.iter().map(|r| r.num_guesses).min().unwrap_or(0);

    let mut hardest_codes: Vec<(String, Vec<String>)> = solved
        .iter()
        .filter(|r| r.num_guesses == max_guesses)
        .map(|r| (r.code.clone(), r.guesses.clone()))
        .collect();
    hardest_codes.truncate(10);

    TestAllStatistics {
        total_codes: results.len(),
        solved: solved.len(),
        failed: results.len() - solved.len(),
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses,
        min_guesses,
        hardest_codes,
        failures: results
            .iter()
            .filter(|r| !r.success)
            .map(|r| r.code.clone())
            .collect(),
    }
}

/// Print test-all statistics
///
/// `verbose` adds the guess sequence behind each of the hardest codes.
pub fn print_test_all_statistics(stats: &TestAllStatistics, verbose: bool) {
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
    if stats.failed > 0 {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed,
            format!("({:.1}%)", stats.failed as f64 / total * 100.0).red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Fewest / most:       {} / {}",
        stats.min_guesses, stats.max_guesses
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per code:       {:.2}ms",
        stats.total_time.as_secs_f64() * 1000.0 / total
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(1);
    for guesses in 1..=stats.max_guesses {
        let count = stats.guess_distribution.get(&guesses).copied().unwrap_or(0);
        let percentage = count as f64 / stats.solved.max(1) as f64 * 100.0;
        let bar_len = (count * 40 / max_count.max(1)).max(usize::from(count > 0));
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );

        println!("  {guesses:2} guesses: {bar} {count:6} ({percentage:5.1}%)");
    }

    if !stats.hardest_codes.is_empty() {
        println!(
            "\n😰 {}",
            format!("Hardest Codes ({} guesses)", stats.max_guesses)
                .yellow()
                .bold()
        );
        if verbose {
            for (code, guesses) in &stats.hardest_codes {
                println!("  {}: {}", code.yellow(), guesses.join(" → "));
            }
        } else {
            let codes: Vec<&str> = stats.hardest_codes.iter().map(|(c, _)| c.as_str()).collect();
            println!("  {}", codes.join(" ").yellow());
        }
    }

    if !stats.failures.is_empty() {
        println!("\n❌ {}", "Unsolved Codes".red().bold());
        for code in stats.failures.iter().take(10) {
            println!("  {}", code.red());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::StrategyType;

    #[test]
    fn small_game_is_fully_solved() {
        let config = GameConfig::new("rgb", 3, None).unwrap();
        let stats = run_test_all(&config, &StrategyType::Knuth, None);

        assert_eq!(stats.total_codes, 27);
        assert_eq!(stats.solved, 27);
        assert_eq!(stats.failed, 0);
        assert!(stats.failures.is_empty());
        assert_eq!(stats.min_guesses, 1);
        assert_eq!(stats.guess_distribution.get(&1), Some(&1));
        assert_eq!(stats.guess_distribution.values().sum::<usize>(), 27);
    }

    #[test]
    fn limit_restricts_the_run() {
        let config = GameConfig::classic();
        let stats = run_test_all(&config, &StrategyType::Knuth, Some(20));

        assert_eq!(stats.total_codes, 20);
        assert_eq!(stats.solved, 20);
        assert!(stats.max_guesses <= 5);
        assert!(stats.average_guesses >= 1.0);
    }

    #[test]
    fn turn_ceiling_counts_as_failure() {
        let config = GameConfig::classic().with_max_turns(1);
        let stats = run_test_all(&config, &StrategyType::Knuth, Some(30));

        // Only the opening itself (rrgg, eighth in order) is hit in one guess
        assert_eq!(stats.solved, 1);
        assert_eq!(stats.failed, 29);
        assert!(!stats.failures.contains(&"rrgg".to_string()));
        assert_eq!(stats.guess_distribution.get(&1), Some(&1));
    }

    #[test]
    fn hardest_codes_take_the_most_guesses() {
        let config = GameConfig::new("rgbc", 3, None).unwrap();
        let stats = run_test_all(&config, &StrategyType::Consistent, None);

        assert!(!stats.hardest_codes.is_empty());
        for (code, guesses) in &stats.hardest_codes {
            assert_eq!(guesses.len(), stats.max_guesses);
            assert_eq!(guesses.first().map(String::as_str), Some("rgg"));
            assert_eq!(guesses.last(), Some(code));
        }

        print_test_all_statistics(&stats, true);
        print_test_all_statistics(&stats, false);
    }
}

//! Display functions for command results

use super::formatters::{color_code, create_progress_bar, feedback_pegs};
use crate::commands::{AnalysisResult, SolveResult};
use crate::core::{Feedback, Rules};
use crate::solver::Turn;
use colored::Colorize;

/// Print the result of solving a code
pub fn print_solve_result(result: &SolveResult, length: usize, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", color_code(&result.secret));
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}  ({}, {})",
            i + 1,
            color_code(&step.guess),
            feedback_pegs(step.feedback, length),
            step.feedback.blacks(),
            step.feedback.whites()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!(
                "  Worst case: {} ({} tied guess{})",
                step.worst_case,
                step.tied,
                if step.tied == 1 { "" } else { "es" }
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
            format!("✅ Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print how a guess partitions the candidates
pub fn print_analysis_result(result: &AnalysisResult, length: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PARTITION ANALYSIS:".bright_cyan().bold(),
        color_code(&result.guess)
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} possible codes:", result.total_candidates);
    println!(
        "   Worst case:  {}",
        format!("{} codes", result.worst_case).bright_yellow()
    );
    println!(
        "   Expected:    {:.1} codes remain",
        result.expected_remaining
    );
    println!("   Partitions:  {}", result.partitions.len());
    println!(
        "   Can win:     {}",
        if result.could_win {
            "yes".green()
        } else {
            "no".red()
        }
    );

    println!("\n📈 {}", "Partitions:".bright_cyan().bold());
    let largest = result.worst_case as f64;
    for &(feedback, count) in &result.partitions {
        let bar = create_progress_bar(count as f64, largest, 30);
        println!(
            "   {} ({}, {}): {} {count:6}",
            feedback_pegs(feedback, length),
            feedback.blacks(),
            feedback.whites(),
            bar.green()
        );
    }
}

/// Print a score
pub fn print_score(guess: &str, code: &str, feedback: Feedback, length: usize) {
    println!(
        "{} vs {}: {} {}",
        color_code(guess),
        color_code(code),
        feedback_pegs(feedback, length),
        format!("({feedback})").bright_black()
    );
}

/// Print the turns played so far
pub fn print_history(rules: &Rules, history: &[Turn]) {
    println!("\n{}", "History:".bright_cyan().bold());
    for (i, turn) in history.iter().enumerate() {
        println!(
            "  {:2}. {} {}  ({}, {})  {} → {}",
            i + 1,
            color_code(&rules.render(&turn.guess)),
            feedback_pegs(turn.feedback, rules.code_length()),
            turn.feedback.blacks(),
            turn.feedback.whites(),
            turn.candidates_before,
            turn.candidates_after
        );
    }
}

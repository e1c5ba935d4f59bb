//! Formatting utilities for terminal output

use crate::core::Feedback;
use colored::{ColoredString, Colorize};

/// Format feedback as key pegs: `●` black, `○` white, `·` empty
#[must_use]
pub fn feedback_pegs(feedback: Feedback, length: usize) -> String {
    let empty = length.saturating_sub(feedback.blacks() + feedback.whites());

    format!(
        "{}{}{}",
        "●".repeat(feedback.blacks()),
        "○".repeat(feedback.whites()),
        "·".repeat(empty)
    )
}

/// Color one code symbol after the peg color it names
///
/// Symbols without an obvious terminal color are shown bold.
#[must_use]
pub fn color_symbol(symbol: char) -> ColoredString {
    let text = symbol.to_string();
    match symbol.to_ascii_lowercase() {
        'r' => text.red().bold(),
        'g' => text.green().bold(),
        'b' => text.blue().bold(),
        'c' => text.cyan().bold(),
        'y' => text.yellow().bold(),
        'm' => text.magenta().bold(),
        'w' => text.white().bold(),
        'k' => text.bright_black().bold(),
        'o' => text.bright_red().bold(),
        'p' => text.bright_magenta().bold(),
        _ => text.bold(),
    }
}

/// Render a code with each symbol colored
#[must_use]
pub fn color_code(code: &str) -> String {
    code.chars().map(|c| color_symbol(c).to_string()).collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Clamped to [0, width]
    let filled = ((value / max).clamp(0.0, 1.0) * width as f64) as usize;

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_pegs_mixed() {
        let feedback = Feedback::new(2, 1, 4).unwrap();
        assert_eq!(feedback_pegs(feedback, 4), "●●○·");
    }

    #[test]
    fn feedback_pegs_empty_and_win() {
        assert_eq!(feedback_pegs(Feedback::new(0, 0, 4).unwrap(), 4), "····");
        assert_eq!(feedback_pegs(Feedback::win(5), 5), "●●●●●");
    }

    /// Drop `ESC [ ... m` sequences so assertions hold with or without a tty
    fn strip_ansi(text: &str) -> String {
        let mut plain = String::new();
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                chars.by_ref().find(|&c| c == 'm');
            } else {
                plain.push(c);
            }
        }
        plain
    }

    #[test]
    fn color_code_keeps_symbols() {
        assert_eq!(strip_ansi(&color_code("ycmb")), "ycmb");
        assert_eq!(strip_ansi(&color_code("rr-?")), "rr-?");
        assert_eq!(strip_ansi("\x1b[1;31mr\x1b[0mg"), "rg");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}

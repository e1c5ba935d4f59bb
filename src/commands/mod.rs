//! Command implementations

pub mod analyze;
pub mod play;
pub mod score;
pub mod solve;
pub mod test_all;

pub use analyze::{AnalysisResult, analyze_guess};
pub use play::{Console, PlayReport, play_with, run_play};
pub use score::score_codes;
pub use solve::{GuessStep, SolveResult, solve_code};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all};

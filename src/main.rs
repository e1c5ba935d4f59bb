//! Mastermind Solver - CLI
//!
//! Mastermind code breaker and keeper using Knuth's minimax algorithm.
//! Classic game (6 colors, 4 pegs): every code solved in at most 5 guesses.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use mastermind_solver::{
    commands::{
        analyze_guess, print_test_all_statistics, run_play, run_test_all, score_codes, solve_code,
    },
    config::{DEFAULT_MAX_TURNS, GameConfig},
    core::DEFAULT_SYMBOLS,
    game::{Breaker, GameMode, Keeper},
    output::{print_analysis_result, print_score, print_solve_result},
    solver::StrategyType,
};

#[derive(Parser)]
#[command(
    name = "mastermind_solver",
    about = "Mastermind solver using Knuth's minimax algorithm (at most 5 guesses on the classic board)",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Peg symbols, one character per color
    #[arg(short, long, global = true, default_value = "rgbcym")]
    colors: String,

    /// Number of pegs in a code
    #[arg(short, long, global = true, default_value_t = 4)]
    length: usize,

    /// First guess (default: first half of pegs in the first color, rest in the second)
    #[arg(short, long, global = true)]
    opening: Option<String>,

    /// Strategy: knuth (default), consistent, random
    #[arg(short, long, global = true, default_value = "knuth")]
    strategy: String,

    /// Maximum number of guesses per game
    #[arg(short = 't', long, global = true, default_value_t = DEFAULT_MAX_TURNS)]
    max_turns: usize,

    /// Show verbose output with candidate counts and worst cases
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game (default - computer breaks a random code)
    Play {
        /// Who guesses: computer or human
        #[arg(short, long, default_value = "computer")]
        breaker: String,

        /// Who answers: computer or human
        #[arg(short, long, default_value = "computer")]
        keeper: String,

        /// Hidden code for a computer keeper (default: random)
        #[arg(long)]
        code: Option<String>,
    },

    /// Solve a specific hidden code
    Solve {
        /// The code to solve
        #[arg(default_value = "ycmb")]
        code: String,
    },

    /// Test the solver on ALL possible codes
    TestAll {
        /// Limit number of codes to test
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show how a guess partitions all possible codes
    Analyze {
        /// Guess to analyze
        guess: String,
    },

    /// Score a guess against a code
    Score {
        /// The guess
        guess: String,
        /// The hidden code
        code: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = build_config(&cli)?;
    let strategy = StrategyType::from_name(&cli.strategy).with_context(|| {
        format!(
            "unknown strategy '{}' (expected knuth, consistent or random)",
            cli.strategy
        )
    })?;

    if cli.verbose {
        println!(
            "Rules: {} colors ({}), {} pegs, {} codes. Strategy: {strategy}",
            config.rules.alphabet().len(),
            config.rules.alphabet(),
            config.rules.code_length(),
            config.rules.universe_size()
        );
    }

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        breaker: "computer".to_string(),
        keeper: "computer".to_string(),
        code: None,
    });

    match command {
        Commands::Play {
            breaker,
            keeper,
            code,
        } => run_play_command(
            &config,
            strategy,
            &breaker,
            &keeper,
            code.as_deref(),
            cli.verbose,
        ),
        Commands::Solve { code } => run_solve_command(&config, strategy, &code, cli.verbose),
        Commands::TestAll { limit } => {
            run_test_all_command(&config, strategy, limit, cli.verbose);
            Ok(())
        }
        Commands::Analyze { guess } => run_analyze_command(&config, &guess),
        Commands::Score { guess, code } => run_score_command(&config, &guess, &code),
    }
}

fn build_config(cli: &Cli) -> Result<GameConfig> {
    if cli.max_turns == 0 {
        bail!("--max-turns must be at least 1");
    }

    let config = GameConfig::new(&cli.colors, cli.length, cli.opening.as_deref())
        .with_context(|| {
            format!(
                "invalid game settings (colors '{}', length {}); try up to {} colors such as '{DEFAULT_SYMBOLS}'",
                cli.colors,
                cli.length,
                DEFAULT_SYMBOLS.len()
            )
        })?;

    Ok(config.with_max_turns(cli.max_turns))
}

fn run_play_command(
    config: &GameConfig,
    strategy: StrategyType,
    breaker: &str,
    keeper: &str,
    code: Option<&str>,
    verbose: bool,
) -> Result<()> {
    let breaker = Breaker::from_name(breaker)
        .with_context(|| format!("unknown breaker '{breaker}' (expected computer or human)"))?;
    let keeper = Keeper::from_name(keeper)
        .with_context(|| format!("unknown keeper '{keeper}' (expected computer or human)"))?;
    let mode = GameMode::new(breaker, keeper);

    let secret = code.map(|text| config.rules.parse_code(text)).transpose()?;
    if secret.is_some() && !mode.needs_secret() {
        bail!("--code only applies when the computer keeps the code");
    }

    let report = run_play(config, &strategy, mode, secret, verbose)?;
    if report.played > 0 {
        println!("Games won: {}/{}", report.won, report.played);
    }
    Ok(())
}

fn run_solve_command(
    config: &GameConfig,
    strategy: StrategyType,
    code: &str,
    verbose: bool,
) -> Result<()> {
    let secret = config.rules.parse_code(code)?;
    let result = solve_code(config, strategy, secret)?;

    print_solve_result(&result, config.rules.code_length(), verbose);
    Ok(())
}

fn run_test_all_command(
    config: &GameConfig,
    strategy: StrategyType,
    limit: Option<usize>,
    verbose: bool,
) {
    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Mastermind Solver Test ");
    println!("{}", "═".repeat(70));
    println!(
        "\nTesting against {} possible codes",
        config.rules.universe_size()
    );
    println!("Strategy: {strategy}");
    println!("Opening:  {}", config.rules.render(&config.opening));
    println!();

    let stats = run_test_all(config, &strategy, limit);
    print_test_all_statistics(&stats, verbose);
}

fn run_analyze_command(config: &GameConfig, guess: &str) -> Result<()> {
    let result = analyze_guess(&config.rules, guess, &config.rules.universe())?;
    print_analysis_result(&result, config.rules.code_length());
    Ok(())
}

fn run_score_command(config: &GameConfig, guess: &str, code: &str) -> Result<()> {
    let feedback = score_codes(&config.rules, guess, code)?;
    print_score(
        &config.rules.render(&config.rules.parse_code(guess)?),
        &config.rules.render(&config.rules.parse_code(code)?),
        feedback,
        config.rules.code_length(),
    );
    Ok(())
}

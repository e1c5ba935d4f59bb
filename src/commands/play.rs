//! Interactive play mode
//!
//! Text-based game loop for all four breaker/keeper combinations. Input is
//! read line by line so the loop can be driven from a script as well as from
//! a terminal.

use crate::config::GameConfig;
use crate::core::{Code, Feedback, MastermindError};
use crate::game::{Breaker, GameMode, Keeper, Responder, SecretKeeper};
use crate::output::formatters::{color_code, feedback_pegs};
use crate::output::print_history;
use crate::solver::{Session, SessionState, Strategy};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Games finished during one `play` run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayReport {
    pub played: usize,
    pub won: usize,
}

/// Line-oriented prompt over any buffered reader
pub struct Console<R> {
    input: R,
}

impl<R: BufRead> Console<R> {
    pub const fn new(input: R) -> Self {
        Self { input }
    }

    /// Print `prompt` and read one trimmed line; `None` at end of input
    ///
    /// # Errors
    /// Returns an error if stdout cannot be flushed or the input fails.
    pub fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        print!("{prompt}: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            println!();
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Run the interactive mode on stdin
///
/// With `verbose`, every turn also reports how many guesses tied on the
/// minimax score and how far the feedback cut the candidate set.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or the
/// configuration cannot start a session.
pub fn run_play<S: Strategy + Clone>(
    config: &GameConfig,
    strategy: &S,
    mode: GameMode,
    secret: Option<Code>,
    verbose: bool,
) -> Result<PlayReport> {
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock());
    play_with(config, strategy, mode, secret, verbose, &mut console)
}

/// Run the interactive mode on any input
///
/// With a computer keeper, `secret` is used for every game; without one a
/// random code is drawn per game.
///
/// # Errors
///
/// Same as [`run_play`].
pub fn play_with<S, R>(
    config: &GameConfig,
    strategy: &S,
    mode: GameMode,
    secret: Option<Code>,
    verbose: bool,
    console: &mut Console<R>,
) -> Result<PlayReport>
where
    S: Strategy + Clone,
    R: BufRead,
{
    print_banner(config, mode);
    let mut report = PlayReport::default();

    loop {
        let keeper = if mode.needs_secret() {
            Some(match secret {
                Some(code) => SecretKeeper::new(config.rules.clone(), code)?,
                None => SecretKeeper::random(config.rules.clone()),
            })
        } else {
            None
        };

        let mut game = Game {
            config,
            session: config.session(strategy.clone())?,
            mode,
            keeper,
            verbose,
        };

        match game.run(console)? {
            Flow::Quit => break,
            Flow::NewGame => {
                println!("\n🔄 New game started!\n");
                continue;
            }
            Flow::Finished => {
                report.played += 1;
                if game.session.state() == SessionState::Won {
                    report.won += 1;
                }
            }
        }

        let again = console.prompt("Play again? (yes/no)")?.unwrap_or_default();
        if !matches!(again.to_lowercase().as_str(), "yes" | "y") {
            break;
        }
        println!("\n🔄 New game started!\n");
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(report)
}

/// How a game handed control back
enum Flow {
    Finished,
    NewGame,
    Quit,
}

/// Outcome of one prompt
enum Step<T> {
    Done(T),
    Again,
    Exit(Flow),
}

/// Words accepted at every prompt
enum Command {
    Quit,
    New,
    Undo,
    Hint,
}

impl Command {
    fn parse(input: &str) -> Option<Self> {
        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => Some(Self::Quit),
            "new" | "n" => Some(Self::New),
            "undo" | "u" => Some(Self::Undo),
            "hint" | "h" => Some(Self::Hint),
            _ => None,
        }
    }
}

struct Game<'a, S: Strategy> {
    config: &'a GameConfig,
    session: Session<S>,
    mode: GameMode,
    keeper: Option<SecretKeeper>,
    verbose: bool,
}

impl<S: Strategy> Game<'_, S> {
    fn run<R: BufRead>(&mut self, console: &mut Console<R>) -> Result<Flow> {
        loop {
            match self.session.state() {
                SessionState::Won => {
                    self.celebrate();
                    return Ok(Flow::Finished);
                }
                SessionState::Inconsistent => {
                    if let Step::Exit(flow) = self.recover(console)? {
                        return Ok(flow);
                    }
                }
                SessionState::AwaitingGuess => {
                    if self.session.guess_count() >= self.config.max_turns {
                        self.out_of_turns();
                        return Ok(Flow::Finished);
                    }
                    match self.choose_guess(console)? {
                        Step::Done(guess) => self.session.play(guess)?,
                        Step::Again => {}
                        Step::Exit(flow) => return Ok(flow),
                    }
                }
                SessionState::AwaitingFeedback => match self.read_feedback(console)? {
                    Step::Done(feedback) => self.record(feedback)?,
                    Step::Again => {}
                    Step::Exit(flow) => return Ok(flow),
                },
            }
        }
    }

    fn choose_guess<R: BufRead>(&mut self, console: &mut Console<R>) -> Result<Step<Code>> {
        let turn = self.session.guess_count() + 1;
        let remaining = self.session.candidates().len();

        println!("{}", "─".repeat(60).cyan());
        println!("Turn {turn}: {remaining} candidates remaining");
        println!("{}", "─".repeat(60).cyan());
        self.show_candidates();

        if self.mode.breaker == Breaker::Computer {
            let selection = self.session.suggest()?;
            println!(
                "\n🤖 Guess: {}  (worst case {} codes)",
                color_code(&self.config.rules.render(&selection.guess)),
                selection.worst_case
            );
            if self.verbose {
                println!("   {} guesses tied on that worst case", selection.tied);
            }
            return Ok(Step::Done(selection.guess));
        }

        let Some(input) = console.prompt("Your guess (or command)")? else {
            return Ok(Step::Exit(Flow::Quit));
        };

        if let Some(command) = Command::parse(&input) {
            return self.command(command);
        }

        match self.config.rules.parse_code(&input) {
            Ok(guess) => Ok(Step::Done(guess)),
            Err(err) => {
                println!(
                    "❌ {err}. Use {} symbols from {}\n",
                    self.config.rules.code_length(),
                    self.config.rules.alphabet()
                );
                Ok(Step::Again)
            }
        }
    }

    fn read_feedback<R: BufRead>(&mut self, console: &mut Console<R>) -> Result<Step<Feedback>> {
        let Some(guess) = self.session.played() else {
            return Ok(Step::Again);
        };

        if let Some(keeper) = self.keeper.as_mut() {
            return Ok(Step::Done(keeper.respond(&guess)?));
        }

        let Some(input) = console.prompt("Feedback (e.g. '2 1', 'kkw', 'win', or command)")?
        else {
            return Ok(Step::Exit(Flow::Quit));
        };

        if matches!(
            input.to_lowercase().as_str(),
            "win" | "correct" | "yes" | "solved"
        ) {
            return Ok(Step::Done(self.config.rules.win()));
        }
        if let Some(command) = Command::parse(&input) {
            return self.command(command);
        }

        match self.config.rules.parse_feedback(&input) {
            Ok(feedback) => Ok(Step::Done(feedback)),
            Err(err) => {
                println!("❌ {err}\n");
                Ok(Step::Again)
            }
        }
    }

    fn record(&mut self, feedback: Feedback) -> Result<()> {
        let length = self.config.rules.code_length();

        match self.session.respond(feedback) {
            Ok(_) => {
                if let Some(turn) = self.session.history().last() {
                    println!(
                        "   {} {}  ({}, {})\n",
                        color_code(&self.config.rules.render(&turn.guess)),
                        feedback_pegs(turn.feedback, length),
                        turn.feedback.blacks(),
                        turn.feedback.whites()
                    );
                    if self.verbose && self.session.state() == SessionState::AwaitingGuess {
                        println!(
                            "   Candidates: {} → {}\n",
                            turn.candidates_before, turn.candidates_after
                        );
                    }
                }
                Ok(())
            }
            Err(MastermindError::NoConsistentCandidates) => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    fn recover<R: BufRead>(&mut self, console: &mut Console<R>) -> Result<Step<()>> {
        println!("\n❌ No code fits that feedback! Some feedback must be wrong.");
        print_history(&self.config.rules, self.session.history());
        println!("\nType 'undo' to go back, or 'new' to start over.\n");

        let Some(input) = console.prompt("Command")? else {
            return Ok(Step::Exit(Flow::Quit));
        };

        match Command::parse(&input) {
            Some(Command::Hint) | None => Ok(Step::Again),
            Some(command) => self.command(command),
        }
    }

    fn command<T>(&mut self, command: Command) -> Result<Step<T>> {
        match command {
            Command::Quit => Ok(Step::Exit(Flow::Quit)),
            Command::New => Ok(Step::Exit(Flow::NewGame)),
            Command::Undo => {
                self.undo()?;
                Ok(Step::Again)
            }
            Command::Hint => {
                match self.session.played() {
                    Some(_) => println!("Enter the feedback for the current guess first.\n"),
                    None => {
                        let selection = self.session.suggest()?;
                        println!(
                            "💡 Try {} (worst case {} codes)\n",
                            color_code(&self.config.rules.render(&selection.guess)),
                            selection.worst_case
                        );
                        if self.verbose {
                            println!("   {} guesses tied\n", selection.tied);
                        }
                    }
                }
                Ok(Step::Again)
            }
        }
    }

    fn undo(&mut self) -> Result<()> {
        let withdrew = self.session.played().is_some();
        let mut undone = self.session.undo()?;

        // A computer breaker would replay the withdrawn guess, so drop the turn before it too
        if withdrew && self.mode.breaker == Breaker::Computer {
            undone = self.session.undo()?;
        }

        match undone {
            Some(turn) => println!(
                "✓ Undone {}! Back to turn {}\n",
                color_code(&self.config.rules.render(&turn.guess)),
                self.session.guess_count() + 1
            ),
            None if withdrew => println!("✓ Guess withdrawn\n"),
            None => println!("Nothing to undo!\n"),
        }
        Ok(())
    }

    fn show_candidates(&self) {
        let candidates = self.session.candidates();
        if self.mode.keeper == Keeper::Human && candidates.len() <= 10 {
            println!("Remaining candidates:");
            for code in candidates {
                println!("  • {}", color_code(&self.config.rules.render(code)));
            }
        }
    }

    fn celebrate(&self) {
        let turns = self.session.guess_count();

        println!("\n{}", "═".repeat(70).bright_cyan());
        println!(
            "{}",
            "    🎉 🎊 ✨  C O D E   B R O K E N !  ✨ 🎊 🎉    "
                .bright_green()
                .bold()
        );
        println!("{}", "═".repeat(70).bright_cyan());

        let performance = match turns {
            1 => ("🏆 Perfect!", "Incredible hole-in-one!"),
            2..=3 => ("⭐ Excellent!", "Outstanding performance!"),
            4 => ("💫 Great!", "Very well played!"),
            5 => ("✨ Good!", "Nice work!"),
            _ => ("✓ Complete!", "Success!"),
        };

        println!("\n  {}", performance.0.bright_yellow().bold());
        println!("  {}", performance.1.bright_white());
        println!(
            "\n  Code found in {} {}",
            turns.to_string().bright_cyan().bold(),
            if turns == 1 { "guess" } else { "guesses" }
        );

        print_history(&self.config.rules, self.session.history());
        println!("\n{}", "═".repeat(70).bright_cyan());
        println!();
    }

    fn out_of_turns(&self) {
        println!(
            "\n{}",
            format!("❌ Out of turns after {} guesses", self.session.guess_count())
                .red()
                .bold()
        );
        if let Some(keeper) = &self.keeper {
            println!(
                "   The code was {}",
                color_code(&self.config.rules.render(&keeper.secret()))
            );
        }
        print_history(&self.config.rules, self.session.history());
        println!();
    }
}

fn print_banner(config: &GameConfig, mode: GameMode) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                Mastermind - Interactive Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Playing {mode}: {} pegs, colors {}, {} turns.",
        config.rules.code_length(),
        config.rules.alphabet(),
        config.max_turns
    );
    if mode.keeper == Keeper::Human {
        println!("Think of a code. After each guess, enter the feedback:\n");
        println!("  - As counts: '2 1' or '2,1' (blacks, whites)");
        println!("  - As pegs: k/b for black, w for white, - for empty");
        println!("  - Or type 'win' if the guess is right!\n");
    }
    if mode.breaker == Breaker::Human {
        println!("Type a guess such as '{}'.", config.rules.render(&config.opening));
        println!("Type 'hint' for the solver's suggestion.\n");
    }
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess\n");
}

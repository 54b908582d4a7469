//! Interactive console game
//!
//! A human plays either side against the computer. The role is fixed once per
//! game; malformed entries are re-prompted here and never reach the core.

use crate::core::{Code, GameConfig, Score, Scorer};
use crate::output::display::render_board;
use crate::solver::{CandidateSpace, InferenceAgent, Strategy};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::debug;

/// Which side the human plays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerRole {
    /// Human guesses a computer-generated secret
    Codebreaker,
    /// Human sets the secret and the computer breaks it
    Codemaker,
}

/// How a single game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Broken { turns: usize },
    OutOfTurns,
    Quit,
}

/// Run the console game on stdin/stdout until the player declines a replay
///
/// # Errors
///
/// Returns an error on I/O failure or if the solver hits a broken invariant.
pub fn run_play<S: Strategy + Copy>(
    config: &GameConfig,
    strategy: S,
    role: PlayerRole,
) -> Result<()> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();
    let mut rng = rand::rng();

    print_intro(config, &mut output)?;
    loop {
        let outcome = play_game(config, strategy, role, &mut input, &mut output, &mut rng)?;
        debug!(?outcome, "game finished");

        if outcome == GameOutcome::Quit
            || !prompt(&mut input, &mut output, "Play again? (y/n)")?
                .is_some_and(|answer| answer.eq_ignore_ascii_case("y"))
        {
            writeln!(output, "\nThanks for playing!")?;
            return Ok(());
        }
    }
}

/// Play one game over arbitrary input/output streams
///
/// # Errors
///
/// Returns an error on I/O failure or if the solver hits a broken invariant.
pub fn play_game<S, R, W, G>(
    config: &GameConfig,
    strategy: S,
    role: PlayerRole,
    input: &mut R,
    output: &mut W,
    rng: &mut G,
) -> Result<GameOutcome>
where
    S: Strategy,
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    config.validate()?;

    match role {
        PlayerRole::Codebreaker => {
            let secret = Code::random(&config.palette, config.length, rng);
            writeln!(
                output,
                "\nThe computer has decided on a code! Can you break it?"
            )?;
            human_breaks(config, &secret, input, output)
        }
        PlayerRole::Codemaker => {
            let Some(secret) = read_code(config, "Your code", input, output)? else {
                return Ok(GameOutcome::Quit);
            };
            writeln!(
                output,
                "\nYou have decided on a code! Can the computer break it?"
            )?;
            computer_breaks(config, strategy, &secret, input, output)
        }
    }
}

fn human_breaks<R: BufRead, W: Write>(
    config: &GameConfig,
    secret: &Code,
    input: &mut R,
    output: &mut W,
) -> Result<GameOutcome> {
    let scorer = Scorer::new(config);
    let mut board: Vec<(Code, Score)> = Vec::new();

    for turn in 1..=config.max_turns {
        let Some(guess) = read_code(config, "Your guess", input, output)? else {
            return Ok(GameOutcome::Quit);
        };
        let score = scorer.score(secret, &guess)?;
        board.push((guess, score));
        write!(output, "{}", render_board(&config.palette, &board, config.length))?;

        if score.is_solved(config.length) {
            writeln!(
                output,
                "\n{}",
                "Congratulations! You broke the code!".green().bold()
            )?;
            return Ok(GameOutcome::Broken { turns: turn });
        }
        writeln!(
            output,
            "You have taken {turn} turns and have {} remaining.",
            config.max_turns - turn
        )?;
    }

    writeln!(output, "\n{}", "No guesses remaining. You lose.".red())?;
    writeln!(output, "The code was {}.", config.palette.render(secret))?;
    Ok(GameOutcome::OutOfTurns)
}

fn computer_breaks<S: Strategy, R: BufRead, W: Write>(
    config: &GameConfig,
    strategy: S,
    secret: &Code,
    input: &mut R,
    output: &mut W,
) -> Result<GameOutcome> {
    let scorer = Scorer::new(config);
    let mut space = CandidateSpace::from_config(config)?;
    let mut agent = InferenceAgent::new(&mut space, strategy);
    let mut board: Vec<(Code, Score)> = Vec::new();

    for turn in 1..=config.max_turns {
        writeln!(output, "Generating a computer guess...")?;
        let guess = agent.next_guess()?;
        let score = scorer.score(secret, &guess)?;
        agent.record_result(&guess, score)?;
        board.push((guess, score));
        write!(output, "{}", render_board(&config.palette, &board, config.length))?;

        if score.is_solved(config.length) {
            writeln!(
                output,
                "\n{}",
                "The computer has broken your code!".yellow().bold()
            )?;
            return Ok(GameOutcome::Broken { turns: turn });
        }
        writeln!(
            output,
            "The computer has taken {turn} turns and has {} remaining ({} candidates left).",
            config.max_turns - turn,
            agent.candidates().len()
        )?;
        if turn < config.max_turns
            && prompt(input, output, "(Press ENTER to continue)")?.is_none()
        {
            return Ok(GameOutcome::Quit);
        }
    }

    writeln!(
        output,
        "\n{}",
        "The computer has run out of guesses. You win!".green().bold()
    )?;
    Ok(GameOutcome::OutOfTurns)
}

/// Prompt until a valid code is entered; `None` on "quit" or end of input
fn read_code<R: BufRead, W: Write>(
    config: &GameConfig,
    label: &str,
    input: &mut R,
    output: &mut W,
) -> Result<Option<Code>> {
    loop {
        let Some(line) = prompt(input, output, label)? else {
            return Ok(None);
        };
        if matches!(line.to_lowercase().as_str(), "quit" | "q" | "exit") {
            return Ok(None);
        }

        match config.palette.parse_code(&line, config.length) {
            Ok(code) => return Ok(Some(code)),
            Err(e) => {
                writeln!(output, "{} {e}", "Invalid entry:".red())?;
                writeln!(
                    output,
                    "Type {} colors separated by spaces, using only: {}",
                    config.length,
                    config.palette.names().join(", ")
                )?;
            }
        }
    }
}

/// Print a prompt and read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<Option<String>> {
    write!(output, "{label}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn print_intro<W: Write>(config: &GameConfig, output: &mut W) -> Result<()> {
    writeln!(output, "\n{}", "Welcome to Mastermind!".bright_cyan().bold())?;
    writeln!(output, "{}", "~".repeat(22))?;
    writeln!(
        output,
        "\nThe codemaker sets a secret code of {} slots, each one of {} colors: {}.",
        config.length,
        config.palette.len(),
        config.palette.names().join(", ")
    )?;
    writeln!(output, "Colors may repeat within a code.")?;
    writeln!(
        output,
        "The codebreaker has {} guesses to find both the colors and their order.",
        config.max_turns
    )?;
    writeln!(
        output,
        "After each guess a {} peg marks a right color in the right slot,",
        "red".red()
    )?;
    writeln!(
        output,
        "and a {} peg marks a right color in the wrong slot.\n",
        "white".white()
    )?;
    Ok(())
}

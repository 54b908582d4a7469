//! Mastermind Solver - CLI
//!
//! Play Mastermind against the computer, or watch it break a given code.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use mastermind_solver::{
    commands::{PlayerRole, print_test_all_statistics, run_play, run_test_all, solve_code},
    core::{DEFAULT_LENGTH, DEFAULT_MAX_TURNS, DEFAULT_PALETTE_SIZE, GameConfig, Palette},
    output::print_solve_result,
    solver::StrategyType,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mastermind_solver",
    about = "Mastermind with an automated codebreaker that eliminates inconsistent codes",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy for computer guesses: minimax (default), first, random
    #[arg(short, long, global = true, default_value = "minimax")]
    strategy: String,

    /// Custom color names, comma separated (overrides --palette-size)
    #[arg(short, long, global = true, value_delimiter = ',')]
    colors: Option<Vec<String>>,

    /// Number of built-in colors to play with
    #[arg(short, long, global = true, default_value_t = DEFAULT_PALETTE_SIZE)]
    palette_size: usize,

    /// Number of slots in a code
    #[arg(short, long, global = true, default_value_t = DEFAULT_LENGTH)]
    length: usize,

    /// Guesses allowed before the codebreaker loses
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_TURNS)]
    max_turns: usize,

    /// Log candidate pruning at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive console game (default)
    Play {
        /// Side played by the human; asked interactively when omitted
        #[arg(short, long, value_enum)]
        role: Option<Role>,
    },

    /// Let the computer break a specific code
    Solve {
        /// The secret, as color names (e.g. blue blue green yellow)
        #[arg(required = true, num_args = 1..)]
        code: Vec<String>,
    },

    /// Run the solver against every possible secret
    TestAll {
        /// Limit number of codes to test
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Role {
    Codebreaker,
    Codemaker,
}

impl From<Role> for PlayerRole {
    fn from(role: Role) -> Self {
        match role {
            Role::Codebreaker => Self::Codebreaker,
            Role::Codemaker => Self::Codemaker,
        }
    }
}

impl Cli {
    /// Build the game configuration from the global flags
    fn game_config(&self) -> Result<GameConfig> {
        let palette = match &self.colors {
            Some(names) => Palette::from_names(names)?,
            None => Palette::with_size(self.palette_size)?,
        };
        let config = GameConfig::new(palette, self.length, self.max_turns);
        config.validate()?;
        Ok(config)
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "mastermind_solver=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.game_config()?;
    let strategy = StrategyType::from_name(&cli.strategy);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { role: None });

    match command {
        Commands::Play { role } => {
            let role = match role {
                Some(role) => role.into(),
                None => ask_role()?,
            };
            run_play(&config, strategy, role)
        }
        Commands::Solve { code } => {
            let secret = config
                .palette
                .parse_code(&code.join(" "), config.length)
                .context("invalid secret code")?;
            let result = solve_code(&config, strategy, &secret)?;
            print_solve_result(&result, &config.palette, config.length, cli.verbose);
            Ok(())
        }
        Commands::TestAll { limit } => {
            println!("\n{}", "═".repeat(70));
            println!(" Exhaustive Mastermind Solver Test ");
            println!("{}", "═".repeat(70));
            println!(
                "\n{} colors, {} slots, {} turns",
                config.palette.len(),
                config.length,
                config.max_turns
            );
            println!("Strategy: {}\n", strategy.name());

            let stats = run_test_all(&config, strategy, limit)?;
            print_test_all_statistics(&stats, &config);
            Ok(())
        }
    }
}

/// Ask which side the human wants to play until the answer is valid
fn ask_role() -> Result<PlayerRole> {
    use std::io::{BufRead, Write};

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("Would you like to be (1) the codebreaker or (2) the codemaker? ");
        std::io::stdout().flush()?;

        let line = lines
            .next()
            .context("no role selected before end of input")??;
        match line.trim() {
            "1" => return Ok(PlayerRole::Codebreaker),
            "2" => return Ok(PlayerRole::Codemaker),
            _ => println!("You have entered an invalid response.\n"),
        }
    }
}

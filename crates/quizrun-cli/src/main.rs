//! quizrun CLI, the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod console;
mod quotes;
mod settings;

#[derive(Parser)]
#[command(name = "quizrun", version, about = "Interactive terminal quiz runner")]
struct Cli {
    /// Directory holding quiz directories (quiz01, quiz02, ...)
    #[arg(long, global = true)]
    quizzes_dir: Option<PathBuf>,

    /// Settings file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (the default)
    Menu,

    /// List available quizzes
    List,

    /// Run a quiz
    Run {
        /// Quiz directory, or the quiz number shown by `list`
        quiz: String,

        /// Seed for question selection and ordering
        #[arg(long)]
        seed: Option<u64>,

        /// Print the final report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a quiz directory, or every quiz under a directory
    Validate {
        /// Path to a quiz directory or a directory of quizzes
        path: PathBuf,
    },

    /// Create a sample quiz
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quizrun=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = settings::load_settings_from(cli.config.as_deref()).and_then(|settings| {
        let quizzes_dir = cli.quizzes_dir.unwrap_or(settings.quizzes_dir);

        match cli.command.unwrap_or(Commands::Menu) {
            Commands::Menu => commands::menu::execute(quizzes_dir, settings.seed),
            Commands::List => commands::list::execute(quizzes_dir),
            Commands::Run { quiz, seed, json } => {
                commands::run::execute(quizzes_dir, quiz, seed.or(settings.seed), json)
            }
            Commands::Validate { path } => commands::validate::execute(path),
            Commands::Init => commands::init::execute(quizzes_dir),
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

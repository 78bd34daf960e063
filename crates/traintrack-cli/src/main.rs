//! traintrack CLI — mark quizzes and record assessments against a trainee.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "traintrack", version, about = "Trainee assessment and quiz marking")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mark quizzes and generate weighted assessments
    Mark {
        /// Path to a .toml quiz file or directory of quizzes
        #[arg(long)]
        quiz: Option<PathBuf>,

        /// Output format: text, json, markdown
        #[arg(long)]
        format: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate quiz TOML files
    Validate {
        /// Path to a quiz file or directory
        #[arg(long)]
        quiz: PathBuf,
    },

    /// Run the built-in marking demonstration
    Demo,

    /// Create starter config and example quiz
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("traintrack_core=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Mark {
            quiz,
            format,
            config,
        } => commands::mark::execute(quiz, format, config),
        Commands::Validate { quiz } => commands::validate::execute(quiz),
        Commands::Demo => commands::demo::execute(),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

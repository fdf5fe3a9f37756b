//! quizkit CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "quizkit",
    version,
    about = "Curriculum lookups and question sampling for quizzes"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the subjects available for a grade
    Subjects {
        /// Grade key (e.g. "6th"; "6" and "sixth" also work)
        #[arg(long)]
        grade: String,

        /// Read the curriculum from a local file instead of fetching it
        #[arg(long)]
        file: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show the curriculum as a table of chapters
    Tree {
        /// Only show this grade
        #[arg(long)]
        grade: Option<String>,

        /// Read the curriculum from a local file instead of fetching it
        #[arg(long)]
        file: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Draw a random set of questions from a JSON question pool
    Sample {
        /// JSON file holding an array of questions
        #[arg(long)]
        pool: PathBuf,

        /// Number of questions (default: from config)
        #[arg(long, allow_negative_numbers = true)]
        count: Option<i64>,

        /// Seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate a curriculum JSON file
    Validate {
        /// Path to grade-subjects.json
        #[arg(long)]
        curriculum: PathBuf,
    },

    /// Create a starter config and curriculum file
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizkit=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Subjects {
            grade,
            file,
            config,
        } => commands::subjects::execute(grade, file, config).await,
        Commands::Tree {
            grade,
            file,
            config,
        } => commands::tree::execute(grade, file, config).await,
        Commands::Sample {
            pool,
            count,
            seed,
            config,
        } => commands::sample::execute(pool, count, seed, config),
        Commands::Validate { curriculum } => commands::validate::execute(curriculum),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

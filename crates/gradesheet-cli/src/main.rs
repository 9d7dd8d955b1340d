//! gradesheet CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "gradesheet",
    version,
    about = "Collect HTML submissions into a per-student CSV roster"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract submissions and write the roster CSV
    Extract {
        /// Directory containing the html_files_1..4 directories
        #[arg(long)]
        input_root: Option<PathBuf>,

        /// Path of the roster CSV to write
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print a coverage table for a written roster CSV
    Summary {
        /// Path of the roster CSV to read
        #[arg(long, default_value = "./extracted_data.csv")]
        report: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gradesheet_core=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            input_root,
            output,
            config,
        } => commands::extract::execute(input_root, output, config),
        Commands::Summary { report } => commands::summary::execute(report),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "markbook",
    version,
    about = "Extract VTU student results from marks-card PDFs into a spreadsheet"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract result rows from one or more PDFs into a single xlsx file
    Extract {
        /// PDF files to process, in order
        #[arg(required = true)]
        input_files: Vec<PathBuf>,

        /// Output spreadsheet path (default: VTU_Bulk_Results.xlsx)
        #[arg(short, long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Extract a single PDF and print its records without writing a file
    Preview {
        /// Path to a PDF file
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract { input_files, out } => commands::extract::run(input_files, out),
        Commands::Preview { input_file, output } => commands::preview::run(input_file, &output),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

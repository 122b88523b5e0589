use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use covdiff::cli;

/// covdiff — Diff and gap analysis for gcovr JSON coverage reports.
#[derive(Parser)]
#[command(name = "covdiff", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two gcovr JSON reports and show coverage increases.
    Diff {
        /// Base gcovr JSON report file.
        #[arg(long, short)]
        base: PathBuf,

        /// New gcovr JSON report file.
        #[arg(long, short)]
        new: PathBuf,

        /// Filter config file (YAML) restricting the comparison to
        /// specific files and functions.
        #[arg(long, short)]
        filter: Option<PathBuf>,
    },

    /// Report uncovered lines from a gcovr JSON report.
    #[command(alias = "un")]
    Uncovered {
        /// The gcovr JSON report file.
        report: PathBuf,

        /// Filter config file (YAML) restricting the analysis to
        /// specific files and functions.
        #[arg(long, short)]
        filter: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = match cli.command {
        Commands::Diff { base, new, filter } => cli::cmd_diff(&base, &new, filter.as_deref())?,
        Commands::Uncovered { report, filter } => cli::cmd_uncovered(&report, filter.as_deref())?,
    };

    print!("{output}");
    Ok(())
}

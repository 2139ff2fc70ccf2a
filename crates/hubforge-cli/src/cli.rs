//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// hubforge: infer annotation-task schemas from dataset features
#[derive(Parser)]
#[command(name = "hubforge")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Infer fields, questions and metadata from a features descriptor
    Infer {
        /// Path to the features descriptor (JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Subset to show (default: the first subset)
        #[arg(short, long)]
        subset: Option<String>,

        /// Labels to match for document-classification detection (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        labels: Option<Vec<String>>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the subsets of a features descriptor
    Subsets {
        /// Path to the features descriptor (JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

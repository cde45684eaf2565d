//! Command-line interface for hts-utils.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **encode**: Encode integer quality scores as a quality string
//! - **decode**: Decode a quality string into integer scores
//! - **region**: Resolve a region specifier to 0-based half-open coordinates
//!
//! ## Usage
//!
//! ```text
//! # Scores to Phred+33 text
//! hts-utils encode 40 40 30 20
//!
//! # Phred+64 text to scores, as JSON
//! hts-utils decode hhh^ --encoding phred64 --format json
//!
//! # Region string to 0-based coordinates
//! hts-utils region chr1:101-200
//!
//! # Discrete arguments
//! hts-utils region --contig chr1 --start 100 --stop 200
//! ```

use clap::{Parser, Subcommand};

use crate::core::types::PhredEncoding;

pub mod quality;
pub mod region;

#[derive(Parser)]
#[command(name = "hts-utils")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Encode quality strings and parse genomic regions")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encode integer quality scores as a quality string
    Encode(quality::EncodeArgs),

    /// Decode a quality string into integer scores
    Decode(quality::DecodeArgs),

    /// Resolve a region to 0-based half-open coordinates
    Region(region::RegionCommandArgs),
}

/// Quality offset selection shared by `encode` and `decode`
#[derive(clap::Args, Debug, Clone, Copy)]
pub struct OffsetArgs {
    /// Named quality encoding
    #[arg(long, value_enum, default_value = "phred33", conflicts_with = "offset")]
    pub encoding: PhredEncoding,

    /// Raw ASCII offset (conflicts with --encoding)
    #[arg(long)]
    pub offset: Option<u8>,
}

impl OffsetArgs {
    pub fn resolve(&self) -> u8 {
        self.offset.unwrap_or_else(|| self.encoding.offset())
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

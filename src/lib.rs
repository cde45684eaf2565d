//! # hts-utils
//!
//! Small building blocks for SAM/BAM tooling: quality string encoding and
//! genomic region parsing.
//!
//! Alignment text formats store base qualities as printable characters
//! (`score + 33` for Phred+33), while downstream code works with integer
//! scores. Region queries arrive as `chr1:101-200` strings or as separate
//! contig/start/stop values with 1-based or 0-based conventions mixed in.
//! This crate converts both into one canonical form.
//!
//! ## Features
//!
//! - **Quality codec**: quality strings to scores and back, with a packed
//!   `[i16]` fast path and support for any integer sequence
//! - **Region parsing**: discrete arguments, legacy aliases, or region
//!   strings resolved to a validated 0-based half-open [`Region`]
//! - **noodles interop**: convert a [`Region`] into a `noodles::core::Region`
//!
//! ## Example
//!
//! ```rust
//! use hts_utils::quality::{scores_to_string, string_to_array};
//! use hts_utils::{Region, DEFAULT_QUALITY_OFFSET};
//!
//! let scores = string_to_array(Some("IIII"), DEFAULT_QUALITY_OFFSET).unwrap();
//! assert_eq!(scores, vec![40; 4]);
//!
//! let text = scores_to_string(Some(&scores), DEFAULT_QUALITY_OFFSET).unwrap();
//! assert_eq!(text.as_deref(), Some("IIII"));
//!
//! let region: Region = "chr1:101-200".parse().unwrap();
//! assert_eq!(region.into_parts(), ("chr1".to_string(), 100, 200));
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Region type and shared constants
//! - [`quality`]: Quality string codec
//! - [`parsing`]: Region specifier parser
//! - [`utils`]: Coordinate validation helpers
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod parsing;
pub mod quality;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::region::Region;
pub use crate::core::types::*;
pub use crate::parsing::region::{parse_region, RegionArgs, RegionError};
pub use crate::quality::{QualityError, QualityScores};

//! Conversion between numeric quality scores and printable quality strings.
//!
//! SAM `QUAL` fields and FASTQ quality lines store each Phred score as a
//! single ASCII character whose code is `score + offset`. The offset is 33
//! for Phred+33 (the SAM convention) and 64 for legacy Phred+64 data.
//!
//! - [`string_to_array`]: quality string to scores (permissive, never fails)
//! - [`array_to_string`]: contiguous `[i16]` scores to a quality string
//! - [`scores_to_string`]: any [`QualityScores`] sequence to a quality string
//!
//! Absent input (`None`) always produces absent output without running
//! the conversion.
//!
//! ## Example
//!
//! ```rust
//! use hts_utils::quality::{array_to_string, scores_to_string, string_to_array};
//! use hts_utils::DEFAULT_QUALITY_OFFSET;
//!
//! let scores = string_to_array(Some("II?5"), DEFAULT_QUALITY_OFFSET).unwrap();
//! assert_eq!(scores, vec![40, 40, 30, 20]);
//!
//! let text = array_to_string(Some(scores.as_slice()), DEFAULT_QUALITY_OFFSET).unwrap();
//! assert_eq!(text.as_deref(), Some("II?5"));
//!
//! let text = scores_to_string(Some(&vec![40_u8, 30]), DEFAULT_QUALITY_OFFSET).unwrap();
//! assert_eq!(text.as_deref(), Some("I?"));
//! ```
//!
//! ## Encoding limits
//!
//! Encoding never clamps or wraps. A score that is negative, or whose
//! character code would pass `~` (126), fails with [`QualityError::Encoding`].

use thiserror::Error;

pub mod codec;
pub mod scores;

pub use codec::{array_to_string, scores_to_string, string_to_array};
pub use scores::{QualityScores, ScoreIter};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QualityError {
    #[error("Quality score {score} at position {position} cannot be encoded with offset {offset}")]
    Encoding {
        position: usize,
        score: i64,
        offset: u8,
    },
}

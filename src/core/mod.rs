//! Core data types shared by the quality codec and the region parser.
//!
//! - [`Region`]: a validated 0-based half-open interval on a named contig
//! - [`MAX_POS`]: the largest signed 32-bit coordinate, `2^31 - 1`
//! - [`PhredEncoding`], [`DEFAULT_QUALITY_OFFSET`]: quality string offsets
//!
//! ## Coordinates
//!
//! | Form | Example | Start | Stop |
//! |------|---------|-------|------|
//! | Region string | `chr1:101-200` | 1-based, inclusive | 1-based, inclusive |
//! | [`Region`] | `("chr1", 100, 200)` | 0-based, inclusive | 0-based, exclusive |
//!
//! Both forms cover the same 100 bases.
//!
//! [`Region`]: region::Region
//! [`MAX_POS`]: types::MAX_POS
//! [`PhredEncoding`]: types::PhredEncoding
//! [`DEFAULT_QUALITY_OFFSET`]: types::DEFAULT_QUALITY_OFFSET

pub mod region;
pub mod types;

//! Parsers for user-supplied genomic coordinates.
//!
//! - **Region specifiers**: `contig:start-stop` strings or discrete
//!   `contig`/`start`/`stop` arguments, see [`region`]
//!
//! ## Example
//!
//! ```rust
//! use hts_utils::parsing::region::{parse_region, RegionArgs};
//!
//! let region = parse_region(&RegionArgs::from_region("chr1:101-200")).unwrap();
//! assert_eq!(region.contig(), "chr1");
//! assert_eq!((region.start(), region.stop()), (100, 200));
//!
//! let region = RegionArgs::new()
//!     .with_reference("chr2")
//!     .with_start(10)
//!     .with_end(20)
//!     .parse()
//!     .unwrap();
//! assert_eq!(region.to_string(), "chr2:11-20");
//! ```
//!
//! ## Accepted Arguments
//!
//! | Argument | Alias | Meaning |
//! |----------|-------|---------|
//! | contig | reference | Sequence name |
//! | start | | 0-based inclusive start (default 0) |
//! | stop | end | 0-based exclusive stop (default `MAX_POS`) |
//! | region | | `contig[:start[-[stop]]]`, 1-based inclusive |

pub mod region;

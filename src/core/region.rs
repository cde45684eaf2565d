use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::core::types::MAX_POS;
use crate::parsing::region::{parse_region, RegionArgs, RegionError};
use crate::utils::validation::{is_valid_start, is_valid_stop};

/// A 0-based half-open interval `[start, stop)` on a named contig
///
/// Constructed only through validation, so every `Region` satisfies
/// `0 <= start <= stop <= MAX_POS` and `start < MAX_POS`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Region {
    contig: String,
    start: i32,
    stop: i32,
}

impl Region {
    /// Validate and build a region from 0-based half-open coordinates
    ///
    /// # Errors
    ///
    /// Returns `RegionError::MissingArgument` if the contig is empty,
    /// `RegionError::InvalidRange` if `start > stop`, or
    /// `RegionError::OutOfRange` if either bound lies outside
    /// `[0, MAX_POS)` / `[0, MAX_POS]`.
    pub fn new(contig: impl Into<String>, start: i32, stop: i32) -> Result<Self, RegionError> {
        let contig = contig.into();
        if contig.is_empty() {
            return Err(RegionError::MissingArgument(
                "contig name is empty".to_string(),
            ));
        }
        if start > stop {
            return Err(RegionError::InvalidRange { start, stop });
        }
        if !is_valid_start(start) {
            return Err(RegionError::OutOfRange {
                name: "start",
                value: start.to_string(),
            });
        }
        if !is_valid_stop(stop) {
            return Err(RegionError::OutOfRange {
                name: "stop",
                value: stop.to_string(),
            });
        }
        Ok(Self {
            contig,
            start,
            stop,
        })
    }

    /// A region spanning the whole of `contig`
    ///
    /// # Errors
    ///
    /// Returns `RegionError::MissingArgument` if the contig is empty.
    pub fn whole(contig: impl Into<String>) -> Result<Self, RegionError> {
        Self::new(contig, 0, MAX_POS)
    }

    pub fn contig(&self) -> &str {
        &self.contig
    }

    /// 0-based inclusive start
    pub fn start(&self) -> i32 {
        self.start
    }

    /// 0-based exclusive stop
    pub fn stop(&self) -> i32 {
        self.stop
    }

    /// Number of bases covered
    #[allow(clippy::cast_sign_loss)] // stop >= start >= 0
    pub fn len(&self) -> u32 {
        (self.stop - self.start) as u32
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.stop
    }

    /// True when the region carries the default bounds `[0, MAX_POS)`
    pub fn is_whole_contig(&self) -> bool {
        self.start == 0 && self.stop == MAX_POS
    }

    pub fn into_parts(self) -> (String, i32, i32) {
        (self.contig, self.start, self.stop)
    }

    /// Convert to a noodles region (1-based, closed)
    ///
    /// A stop of `MAX_POS` becomes an open-ended interval.
    ///
    /// # Errors
    ///
    /// Returns `RegionError::EmptyRegion` for zero-length regions, which a
    /// closed interval cannot express.
    pub fn to_noodles(&self) -> Result<noodles::core::Region, RegionError> {
        use noodles::core::{Position, Region as NoodlesRegion};

        if self.is_whole_contig() {
            return Ok(NoodlesRegion::new(self.contig.clone(), ..));
        }

        let empty = || RegionError::EmptyRegion(self.to_string());

        #[allow(clippy::cast_sign_loss)] // validated non-negative
        let start = Position::new(self.start as usize + 1).ok_or_else(empty)?;

        if self.stop == MAX_POS {
            return Ok(NoodlesRegion::new(self.contig.clone(), start..));
        }

        if self.is_empty() {
            return Err(empty());
        }

        #[allow(clippy::cast_sign_loss)]
        let end = Position::new(self.stop as usize).ok_or_else(empty)?;

        Ok(NoodlesRegion::new(self.contig.clone(), start..=end))
    }
}

/// Formats as samtools-style 1-based text, the inverse of [`FromStr`]
///
/// Contigs containing `:` are wrapped in braces, e.g. `{HLA-A*01:01}:1-10`.
impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.contig.contains(':') {
            write!(f, "{{{}}}", self.contig)?;
        } else {
            write!(f, "{}", self.contig)?;
        }

        if self.is_whole_contig() {
            Ok(())
        } else if self.stop == MAX_POS {
            write!(f, ":{}-", i64::from(self.start) + 1)
        } else {
            write!(f, ":{}-{}", i64::from(self.start) + 1, self.stop)
        }
    }
}

impl FromStr for Region {
    type Err = RegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_region(&RegionArgs::from_region(s))
    }
}

impl TryFrom<&RegionArgs> for Region {
    type Error = RegionError;

    fn try_from(args: &RegionArgs) -> Result<Self, Self::Error> {
        parse_region(args)
    }
}

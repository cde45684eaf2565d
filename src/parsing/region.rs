//! Parser for genomic region specifiers.
//!
//! A region can be given either as discrete arguments (`contig`, `start`,
//! `stop`, with the legacy aliases `reference` and `end`) or as a single
//! samtools-style string:
//!
//! ```text
//! <contig>[:<start>[-[<stop>]]]
//! {<contig>}[:<start>[-[<stop>]]]
//! ```
//!
//! The braced form lets a contig name contain `:`.
//!
//! String coordinates are 1-based and inclusive; discrete coordinates are
//! already 0-based. Either way the result is a 0-based half-open [`Region`].

use thiserror::Error;
use tracing::debug;

use crate::core::region::Region;
use crate::core::types::MAX_POS;
use crate::utils::validation::{parse_coordinate, to_coordinate, ValidationError};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegionError {
    #[error("Conflicting arguments: {0}")]
    ConflictingArguments(String),

    #[error("Missing argument: {0}")]
    MissingArgument(String),

    #[error("{name} out of range ({value})")]
    OutOfRange { name: &'static str, value: String },

    #[error("Invalid coordinates: start ({start}) > stop ({stop})")]
    InvalidRange { start: i32, stop: i32 },

    #[error("Invalid {name} coordinate: '{text}'")]
    InvalidCoordinate { name: &'static str, text: String },

    #[error("Empty region {0} has no closed-interval equivalent")]
    EmptyRegion(String),
}

/// The ways a caller may describe a region.
///
/// Empty strings are treated the same as absent values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionArgs {
    pub contig: Option<String>,
    pub start: Option<i64>,
    pub stop: Option<i64>,
    pub region: Option<String>,
    /// Alias for `contig`
    pub reference: Option<String>,
    /// Alias for `stop`
    pub end: Option<i64>,
}

impl RegionArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arguments holding only a region string such as `chr1:101-200`
    pub fn from_region(region: impl Into<String>) -> Self {
        Self::new().with_region(region)
    }

    /// Arguments naming a whole contig
    pub fn from_contig(contig: impl Into<String>) -> Self {
        Self::new().with_contig(contig)
    }

    #[must_use]
    pub fn with_contig(mut self, contig: impl Into<String>) -> Self {
        self.contig = Some(contig.into());
        self
    }

    #[must_use]
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    #[must_use]
    pub fn with_start(mut self, start: i64) -> Self {
        self.start = Some(start);
        self
    }

    #[must_use]
    pub fn with_stop(mut self, stop: i64) -> Self {
        self.stop = Some(stop);
        self
    }

    #[must_use]
    pub fn with_end(mut self, end: i64) -> Self {
        self.end = Some(end);
        self
    }

    /// Resolve these arguments into a canonical region
    ///
    /// # Errors
    ///
    /// See [`parse_region`].
    pub fn parse(&self) -> Result<Region, RegionError> {
        parse_region(self)
    }
}

/// Resolve region arguments into a 0-based half-open [`Region`].
///
/// Checks run in a fixed order so the same bad input always produces the
/// same error: alias conflicts, missing contig, 32-bit overflow of the
/// discrete coordinates, region-string coordinates, then range validation.
///
/// # Errors
///
/// Returns `RegionError::ConflictingArguments` if an alias pair or both
/// `contig` and `region` are supplied, `RegionError::MissingArgument` if
/// neither `contig`/`reference` nor `region` is supplied,
/// `RegionError::InvalidCoordinate` if a region-string coordinate is not an
/// integer, `RegionError::InvalidRange` if start exceeds stop, or
/// `RegionError::OutOfRange` if a coordinate overflows or falls outside
/// `[0, MAX_POS]`.
pub fn parse_region(args: &RegionArgs) -> Result<Region, RegionError> {
    let contig = non_empty(args.contig.as_deref());
    let reference = non_empty(args.reference.as_deref());
    let region = non_empty(args.region.as_deref());

    if contig.is_some() && reference.is_some() {
        return Err(RegionError::ConflictingArguments(
            "'reference' and 'contig' are aliases, supply only one".to_string(),
        ));
    }
    let contig = contig.or(reference);

    if contig.is_some() && region.is_some() {
        return Err(RegionError::ConflictingArguments(
            "'contig' and 'region' are mutually exclusive".to_string(),
        ));
    }

    if args.stop.is_some() && args.end.is_some() {
        return Err(RegionError::ConflictingArguments(
            "'end' and 'stop' are aliases, supply only one".to_string(),
        ));
    }

    let (name, coordinates) = match (contig, region) {
        (Some(name), _) => (name, None),
        (None, Some(text)) => split_region(text)?,
        (None, None) => {
            return Err(RegionError::MissingArgument(
                "one of 'contig', 'reference' or 'region' is required".to_string(),
            ))
        }
    };

    let mut start = match args.start {
        Some(value) => narrow("start", value)?,
        None => 0,
    };
    let mut stop = match args.stop.or(args.end) {
        Some(value) => narrow("stop", value)?,
        None => MAX_POS,
    };

    if let Some(coordinates) = coordinates {
        let (first, last) = match coordinates.split_once('-') {
            Some((first, last)) => (first, Some(last)),
            None => (coordinates, None),
        };

        let first = parse_text_coordinate("start", first)?;
        // Overflow is reported against the 1-based value the caller wrote
        start = first
            .checked_sub(1)
            .and_then(to_coordinate)
            .ok_or_else(|| out_of_range("start", first))?;

        // A missing or empty right piece leaves stop at its current value
        if let Some(last) = last.filter(|s| !s.is_empty()) {
            stop = narrow("stop", parse_text_coordinate("stop", last)?)?;
        }
    }

    let resolved = Region::new(name, start, stop)?;
    debug!(
        "Resolved region {} to {}:[{}, {})",
        region.unwrap_or(name),
        resolved.contig(),
        resolved.start(),
        resolved.stop()
    );
    Ok(resolved)
}

/// Split a region string into contig and coordinate text
///
/// A contig wrapped in braces (`{HLA-A*01:01}:1-10`) may contain colons;
/// otherwise the first colon separates the contig.
fn split_region(text: &str) -> Result<(&str, Option<&str>), RegionError> {
    if let Some((contig, rest)) = text.strip_prefix('{').and_then(|t| t.split_once('}')) {
        return match rest {
            "" => Ok((contig, None)),
            _ => match rest.strip_prefix(':') {
                Some(coordinates) => Ok((contig, Some(coordinates))),
                None => Err(RegionError::InvalidCoordinate {
                    name: "start",
                    text: rest.to_string(),
                }),
            },
        };
    }

    Ok(match text.split_once(':') {
        Some((contig, coordinates)) => (contig, Some(coordinates)),
        None => (text, None),
    })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

fn narrow(name: &'static str, value: i64) -> Result<i32, RegionError> {
    to_coordinate(value).ok_or_else(|| out_of_range(name, value))
}

fn out_of_range(name: &'static str, value: impl ToString) -> RegionError {
    RegionError::OutOfRange {
        name,
        value: value.to_string(),
    }
}

fn parse_text_coordinate(name: &'static str, text: &str) -> Result<i64, RegionError> {
    parse_coordinate(text).map_err(|e| match e {
        ValidationError::NotAnInteger(text) => RegionError::InvalidCoordinate { name, text },
        ValidationError::OutOfRange(value) => RegionError::OutOfRange { name, value },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triple(region: &Region) -> (&str, i32, i32) {
        (region.contig(), region.start(), region.stop())
    }

    #[test]
    fn test_region_string_is_canonicalized() {
        let region = parse_region(&RegionArgs::from_region("chr1:101-200")).unwrap();
        assert_eq!(triple(&region), ("chr1", 100, 200));
    }

    #[test]
    fn test_contig_defaults_to_whole_sequence() {
        let region = parse_region(&RegionArgs::from_contig("chr1")).unwrap();
        assert_eq!(triple(&region), ("chr1", 0, MAX_POS));
    }

    #[test]
    fn test_reference_alias() {
        let args = RegionArgs::new()
            .with_reference("chrX")
            .with_start(10)
            .with_end(20);
        let region = parse_region(&args).unwrap();
        assert_eq!(triple(&region), ("chrX", 10, 20));
    }

    #[test]
    fn test_discrete_coordinates_are_zero_based() {
        let args = RegionArgs::from_contig("chr2").with_start(0).with_stop(1);
        let region = parse_region(&args).unwrap();
        assert_eq!(triple(&region), ("chr2", 0, 1));
    }

    #[test]
    fn test_region_without_colon_is_contig() {
        let region = parse_region(&RegionArgs::from_region("chrM")).unwrap();
        assert_eq!(triple(&region), ("chrM", 0, MAX_POS));

        // Discrete bounds still apply to a bare contig region
        let args = RegionArgs::from_region("chrM").with_start(5).with_stop(10);
        let region = parse_region(&args).unwrap();
        assert_eq!(triple(&region), ("chrM", 5, 10));
    }

    #[test]
    fn test_region_coordinates_override_discrete_bounds() {
        let args = RegionArgs::from_region("chr1:11-20")
            .with_start(500)
            .with_stop(600);
        let region = parse_region(&args).unwrap();
        assert_eq!(triple(&region), ("chr1", 10, 20));
    }

    #[test]
    fn test_region_with_thousands_separators() {
        let region = parse_region(&RegionArgs::from_region("chr1:1,000,001-2,000,000")).unwrap();
        assert_eq!(triple(&region), ("chr1", 1_000_000, 2_000_000));
    }

    #[test]
    fn test_region_without_dash_keeps_default_stop() {
        let region = parse_region(&RegionArgs::from_region("chr1:100")).unwrap();
        assert_eq!(triple(&region), ("chr1", 99, MAX_POS));
    }

    #[test]
    fn test_region_with_trailing_dash_keeps_default_stop() {
        let region = parse_region(&RegionArgs::from_region("chr1:100-")).unwrap();
        assert_eq!(triple(&region), ("chr1", 99, MAX_POS));
    }

    #[test]
    fn test_region_single_base() {
        let region = parse_region(&RegionArgs::from_region("chr1:1-1")).unwrap();
        assert_eq!(triple(&region), ("chr1", 0, 1));
    }

    #[test]
    fn test_contig_and_region_conflict() {
        let args = RegionArgs::from_contig("chr1").with_region("chr1:1-10");
        assert!(matches!(
            parse_region(&args),
            Err(RegionError::ConflictingArguments(_))
        ));
    }

    #[test]
    fn test_reference_and_contig_conflict() {
        let args = RegionArgs::from_contig("chr1").with_reference("chr1");
        assert!(matches!(
            parse_region(&args),
            Err(RegionError::ConflictingArguments(_))
        ));
    }

    #[test]
    fn test_reference_and_region_conflict() {
        let args = RegionArgs::new().with_reference("chr1").with_region("chr1");
        assert!(matches!(
            parse_region(&args),
            Err(RegionError::ConflictingArguments(_))
        ));
    }

    #[test]
    fn test_stop_and_end_conflict() {
        let args = RegionArgs::from_contig("chr1").with_stop(10).with_end(10);
        assert!(matches!(
            parse_region(&args),
            Err(RegionError::ConflictingArguments(_))
        ));
    }

    #[test]
    fn test_conflicts_are_reported_before_missing() {
        let args = RegionArgs::new().with_stop(10).with_end(10);
        assert!(matches!(
            parse_region(&args),
            Err(RegionError::ConflictingArguments(_))
        ));
    }

    #[test]
    fn test_missing_contig() {
        assert!(matches!(
            parse_region(&RegionArgs::new()),
            Err(RegionError::MissingArgument(_))
        ));

        let args = RegionArgs::new().with_start(0).with_stop(10);
        assert!(matches!(
            parse_region(&args),
            Err(RegionError::MissingArgument(_))
        ));
    }

    #[test]
    fn test_empty_strings_are_absent() {
        let args = RegionArgs::from_contig("").with_region("chr1:1-10");
        let region = parse_region(&args).unwrap();
        assert_eq!(triple(&region), ("chr1", 0, 10));

        assert!(matches!(
            parse_region(&RegionArgs::from_region("")),
            Err(RegionError::MissingArgument(_))
        ));
    }

    #[test]
    fn test_invalid_range() {
        let args = RegionArgs::from_contig("chr1").with_start(50).with_stop(10);
        assert_eq!(
            parse_region(&args),
            Err(RegionError::InvalidRange {
                start: 50,
                stop: 10
            })
        );

        assert!(matches!(
            parse_region(&RegionArgs::from_region("chr1:200-100")),
            Err(RegionError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_start_overflow() {
        let args = RegionArgs::from_contig("chr1").with_start(1 << 31);
        let err = parse_region(&args).unwrap_err();
        assert_eq!(
            err,
            RegionError::OutOfRange {
                name: "start",
                value: "2147483648".to_string()
            }
        );
        assert!(err.to_string().contains("2147483648"));
    }

    #[test]
    fn test_stop_overflow() {
        let args = RegionArgs::from_contig("chr1").with_end(1 << 32);
        assert!(matches!(
            parse_region(&args),
            Err(RegionError::OutOfRange { name: "stop", .. })
        ));
    }

    #[test]
    fn test_negative_start_is_out_of_range() {
        let args = RegionArgs::from_contig("chr1").with_start(-1);
        assert!(matches!(
            parse_region(&args),
            Err(RegionError::OutOfRange { name: "start", .. })
        ));

        // Position 0 is not a valid 1-based start
        assert!(matches!(
            parse_region(&RegionArgs::from_region("chr1:0-10")),
            Err(RegionError::OutOfRange { name: "start", .. })
        ));
    }

    #[test]
    fn test_start_at_max_pos_is_out_of_range() {
        let args = RegionArgs::from_contig("chr1").with_start(i64::from(MAX_POS));
        assert!(matches!(
            parse_region(&args),
            Err(RegionError::OutOfRange { name: "start", .. })
        ));
    }

    #[test]
    fn test_region_string_overflow() {
        assert!(matches!(
            parse_region(&RegionArgs::from_region("chr1:1-3000000000")),
            Err(RegionError::OutOfRange { name: "stop", .. })
        ));
        assert!(matches!(
            parse_region(&RegionArgs::from_region("chr1:3000000000-3000000001")),
            Err(RegionError::OutOfRange { name: "start", .. })
        ));
    }

    #[test]
    fn test_region_string_bad_coordinates() {
        assert_eq!(
            parse_region(&RegionArgs::from_region("chr1:abc-200")),
            Err(RegionError::InvalidCoordinate {
                name: "start",
                text: "abc".to_string()
            })
        );
        assert!(matches!(
            parse_region(&RegionArgs::from_region("chr1:1-2x")),
            Err(RegionError::InvalidCoordinate { name: "stop", .. })
        ));
        assert!(matches!(
            parse_region(&RegionArgs::from_region("chr1:")),
            Err(RegionError::InvalidCoordinate { name: "start", .. })
        ));
        // Only the first colon separates the contig
        assert!(matches!(
            parse_region(&RegionArgs::from_region("chr1:1:5-10")),
            Err(RegionError::InvalidCoordinate { name: "start", .. })
        ));
    }

    #[test]
    fn test_region_start_overflow_reports_written_value() {
        assert_eq!(
            parse_region(&RegionArgs::from_region("chr1:3000000000-10")),
            Err(RegionError::OutOfRange {
                name: "start",
                value: "3000000000".to_string()
            })
        );
    }

    #[test]
    fn test_region_rejects_stray_commas() {
        for text in ["chr1:,5,-10", "chr1:5,-10", "chr1:1,,000-2000", "chr1:1-2,000,"] {
            assert!(
                matches!(
                    parse_region(&RegionArgs::from_region(text)),
                    Err(RegionError::InvalidCoordinate { .. })
                ),
                "{text} should be rejected"
            );
        }
    }

    #[test]
    fn test_braced_contig_may_contain_colons() {
        let region = parse_region(&RegionArgs::from_region("{HLA-A*01:01:01:01}:1-10")).unwrap();
        assert_eq!(triple(&region), ("HLA-A*01:01:01:01", 0, 10));

        let region = parse_region(&RegionArgs::from_region("{HLA-A*01:01}")).unwrap();
        assert_eq!(triple(&region), ("HLA-A*01:01", 0, MAX_POS));

        assert!(matches!(
            parse_region(&RegionArgs::from_region("{HLA-A*01:01}1-10")),
            Err(RegionError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_region_with_empty_contig() {
        assert!(matches!(
            parse_region(&RegionArgs::from_region(":1-10")),
            Err(RegionError::MissingArgument(_))
        ));
    }

    #[test]
    fn test_args_parse_method() {
        let region = RegionArgs::from_region("chr3:5-6").parse().unwrap();
        assert_eq!(triple(&region), ("chr3", 4, 6));
    }
}

use serde::{Deserialize, Serialize};

/// Largest coordinate representable by a signed 32-bit position (`2^31 - 1`)
pub const MAX_POS: i32 = i32::MAX;

/// Offset used by Phred+33 (Sanger / Illumina 1.8+) quality strings
pub const DEFAULT_QUALITY_OFFSET: u8 = 33;

/// Highest character code that may appear in an encoded quality string (`~`)
pub const MAX_QUALITY_CHAR: u8 = b'~';

/// Quality score encoding scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PhredEncoding {
    /// Phred+33 (Sanger / Illumina 1.8+, SAM `QUAL`)
    #[default]
    Phred33,
    /// Phred+64 (Illumina 1.3-1.7)
    Phred64,
}

impl PhredEncoding {
    /// ASCII offset added to each score
    #[must_use]
    pub const fn offset(self) -> u8 {
        match self {
            Self::Phred33 => DEFAULT_QUALITY_OFFSET,
            Self::Phred64 => 64,
        }
    }

    /// Map a raw offset back to a known encoding
    #[must_use]
    pub const fn from_offset(offset: u8) -> Option<Self> {
        match offset {
            33 => Some(Self::Phred33),
            64 => Some(Self::Phred64),
            _ => None,
        }
    }

    /// Largest score that still encodes to a printable character
    #[must_use]
    pub const fn max_score(self) -> u8 {
        match max_score(self.offset()) {
            Some(score) => score,
            None => 0,
        }
    }
}

impl std::fmt::Display for PhredEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Phred33 => write!(f, "Phred+33"),
            Self::Phred64 => write!(f, "Phred+64"),
        }
    }
}

/// Largest encodable score for `offset`, `None` when the offset itself is past `~`
#[must_use]
pub const fn max_score(offset: u8) -> Option<u8> {
    MAX_QUALITY_CHAR.checked_sub(offset)
}

//! Sequences of quality scores accepted by [`scores_to_string`].
//!
//! [`scores_to_string`]: crate::quality::scores_to_string

use std::collections::VecDeque;

use crate::quality::codec::{array_to_string, encode_iter};
use crate::quality::QualityError;

/// A finite, ordered sequence of integer quality scores
///
/// `[i16]` is the packed buffer produced by
/// [`string_to_array`](crate::quality::string_to_array) and is encoded in a
/// single pass over the slice. Other integer slices, vectors, arrays and
/// deques are widened to `i64` and encoded element by element.
pub trait QualityScores {
    /// Encode the scores with `offset`, one character per score
    ///
    /// # Errors
    ///
    /// Returns `QualityError::Encoding` for the first score that is negative
    /// or would encode past `~`.
    fn to_quality_string(&self, offset: u8) -> Result<String, QualityError>;
}

impl QualityScores for [i16] {
    fn to_quality_string(&self, offset: u8) -> Result<String, QualityError> {
        array_to_string(Some(self), offset).map(Option::unwrap_or_default)
    }
}

macro_rules! impl_widened_scores {
    ($($ty:ty),* $(,)?) => {
        $(
            impl QualityScores for [$ty] {
                fn to_quality_string(&self, offset: u8) -> Result<String, QualityError> {
                    encode_iter(self.iter().map(|&q| i64::from(q)), offset)
                }
            }
        )*
    };
}

impl_widened_scores!(u8, i8, u16, i32, u32, i64);

impl<T> QualityScores for Vec<T>
where
    [T]: QualityScores,
{
    fn to_quality_string(&self, offset: u8) -> Result<String, QualityError> {
        self.as_slice().to_quality_string(offset)
    }
}

impl<T, const N: usize> QualityScores for [T; N]
where
    [T]: QualityScores,
{
    fn to_quality_string(&self, offset: u8) -> Result<String, QualityError> {
        self.as_slice().to_quality_string(offset)
    }
}

impl<T> QualityScores for VecDeque<T>
where
    T: Copy + Into<i64>,
{
    fn to_quality_string(&self, offset: u8) -> Result<String, QualityError> {
        encode_iter(self.iter().map(|&q| q.into()), offset)
    }
}

/// Adapts any cloneable iterator of integers into [`QualityScores`]
///
/// ```rust
/// use hts_utils::quality::{scores_to_string, ScoreIter};
///
/// let scores = ScoreIter::new((30_u8..33).rev());
/// let text = scores_to_string(Some(&scores), 33).unwrap();
/// assert_eq!(text.as_deref(), Some("A@?"));
/// ```
#[derive(Debug, Clone)]
pub struct ScoreIter<I>(I);

impl<I> ScoreIter<I> {
    pub fn new(iter: I) -> Self {
        Self(iter)
    }
}

impl<I> QualityScores for ScoreIter<I>
where
    I: Iterator + Clone,
    I::Item: Into<i64>,
{
    fn to_quality_string(&self, offset: u8) -> Result<String, QualityError> {
        encode_iter(self.0.clone().map(Into::into), offset)
    }
}

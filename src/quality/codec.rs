use tracing::trace;

use crate::core::types::MAX_QUALITY_CHAR;
use crate::quality::scores::QualityScores;
use crate::quality::QualityError;

/// Decode a quality string into scores (`byte - offset` per character).
///
/// The result is not range-checked: characters below the offset decode to
/// negative scores. `None` passes through unchanged.
#[must_use]
pub fn string_to_array(text: Option<&str>, offset: u8) -> Option<Vec<i16>> {
    let text = text?;
    trace!("Decoding {} quality characters with offset {offset}", text.len());

    let offset = i16::from(offset);
    Some(text.bytes().map(|b| i16::from(b) - offset).collect())
}

/// Encode contiguous scores into a quality string (`score + offset` per score).
///
/// The output has exactly one character per score. `None` passes through
/// unchanged.
///
/// # Errors
///
/// Returns `QualityError::Encoding` for the first score that is negative or
/// would encode past `~`.
pub fn array_to_string(
    qualities: Option<&[i16]>,
    offset: u8,
) -> Result<Option<String>, QualityError> {
    let Some(qualities) = qualities else {
        return Ok(None);
    };
    trace!("Encoding {} quality scores with offset {offset}", qualities.len());

    if let Some(position) = qualities
        .iter()
        .position(|&q| encode_score(i64::from(q), offset).is_none())
    {
        return Err(QualityError::Encoding {
            position,
            score: i64::from(qualities[position]),
            offset,
        });
    }

    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)] // checked above
    let text = qualities
        .iter()
        .map(|&q| char::from(q as u8 + offset))
        .collect();
    Ok(Some(text))
}

/// Encode any ordered sequence of scores into a quality string.
///
/// Contiguous `[i16]` buffers take the [`array_to_string`] path; every other
/// [`QualityScores`] implementation is encoded element by element. Both
/// produce identical output for the same values. `None` passes through
/// unchanged.
///
/// # Errors
///
/// Returns `QualityError::Encoding` for the first score that is negative or
/// would encode past `~`.
pub fn scores_to_string<S>(scores: Option<&S>, offset: u8) -> Result<Option<String>, QualityError>
where
    S: QualityScores + ?Sized,
{
    match scores {
        Some(scores) => scores.to_quality_string(offset).map(Some),
        None => Ok(None),
    }
}

/// Encode a sequence of widened scores, reporting the first failure
pub(crate) fn encode_iter<I>(scores: I, offset: u8) -> Result<String, QualityError>
where
    I: IntoIterator<Item = i64>,
{
    scores
        .into_iter()
        .enumerate()
        .map(|(position, score)| {
            encode_score(score, offset)
                .map(char::from)
                .ok_or(QualityError::Encoding {
                    position,
                    score,
                    offset,
                })
        })
        .collect()
}

/// Character code for `score`, if it lies in the printable quality range
fn encode_score(score: i64, offset: u8) -> Option<u8> {
    if score < 0 {
        return None;
    }
    let code = score.checked_add(i64::from(offset))?;
    if code > i64::from(MAX_QUALITY_CHAR) {
        return None;
    }
    u8::try_from(code).ok()
}

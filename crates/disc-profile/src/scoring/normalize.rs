use super::ScoringError;

/// Lowest value on the normalized scale.
pub const SCALE_MIN: u8 = 1;
/// Highest value on the normalized scale.
pub const SCALE_MAX: u8 = 25;

/// Linearly rescales a raw score in `[-answer_count, answer_count]` onto `[1, 25]`,
/// rounding half up. Raw values outside the range are clamped to it.
pub fn normalize(raw: i32, answer_count: usize) -> Result<u8, ScoringError> {
    if answer_count == 0 {
        return Err(ScoringError::EmptyInput);
    }

    let n = answer_count as i64;
    let raw = i64::from(raw).clamp(-n, n);
    let span = i64::from(SCALE_MAX - SCALE_MIN);

    // round(((raw + n) / 2n) * span) with an always non-negative numerator.
    let scaled = ((raw + n) * span + n) / (2 * n);
    Ok(SCALE_MIN + scaled as u8)
}

use thiserror::Error;

/// Upper bound on the number of records a single run may request.
pub const MAX_RECORDS: u64 = 1_000_000;

/// Rejection reasons for a requested record count.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CountError {
    #[error("not a number: '{0}'")]
    NotANumber(String),
    #[error("too little input: {0} (need at least 1)")]
    TooSmall(i64),
    #[error("too much input: {0} (limit is {MAX_RECORDS})")]
    TooLarge(i64),
}

/// Validate a raw count string against the inclusive range [1, 1_000_000].
///
/// One failed validation aborts the run; callers do not re-prompt.
pub fn validate_count(input: &str) -> Result<u64, CountError> {
    let trimmed = input.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| CountError::NotANumber(trimmed.to_string()))?;
    if value < 1 {
        return Err(CountError::TooSmall(value));
    }
    if value as u64 > MAX_RECORDS {
        return Err(CountError::TooLarge(value));
    }
    Ok(value as u64)
}

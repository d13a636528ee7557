//! Descriptive statistics over a non-empty sequence of observations.
//!
//! All functions are total over non-empty input and fail with
//! [`DatasetError::EmptyInput`] otherwise. None of them mutate the caller's
//! slice; `median` in particular sorts a copy so sibling calls on the same
//! data always see the original ordering.

use crate::errors::DatasetError;

/// Arithmetic mean of `data`.
pub fn average(data: &[f64]) -> Result<f64, DatasetError> {
    if data.is_empty() {
        return Err(DatasetError::EmptyInput);
    }
    Ok(data.iter().sum::<f64>() / data.len() as f64)
}

/// Median of `data`.
///
/// For an even count this is the mean of the two central sorted elements, for
/// an odd count the single middle element.
pub fn median(data: &[f64]) -> Result<f64, DatasetError> {
    if data.is_empty() {
        return Err(DatasetError::EmptyInput);
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len();
    if n % 2 == 0 {
        Ok((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    } else {
        Ok(sorted[n / 2])
    }
}

/// Most frequent value in `data`.
///
/// Ties break toward the smallest value, so the result is deterministic
/// regardless of input order.
pub fn mode(data: &[f64]) -> Result<f64, DatasetError> {
    if data.is_empty() {
        return Err(DatasetError::EmptyInput);
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mut best = sorted[0];
    let mut best_count = 0usize;
    let mut idx = 0usize;
    while idx < sorted.len() {
        let value = sorted[idx];
        let mut run = 0usize;
        while idx < sorted.len() && sorted[idx] == value {
            run += 1;
            idx += 1;
        }
        // Strict comparison keeps the first (smallest) value among ties.
        if run > best_count {
            best = value;
            best_count = run;
        }
    }
    Ok(best)
}

/// Population standard deviation of `data` (divide by N, not N-1).
pub fn std_dev(data: &[f64]) -> Result<f64, DatasetError> {
    let mean = average(data)?;
    let variance = data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / data.len() as f64;
    Ok(variance.sqrt())
}

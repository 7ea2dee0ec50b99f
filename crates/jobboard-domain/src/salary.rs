//! Offer salary range and its display string.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum SalaryRangeError {
    #[error("salary amounts must not be negative")]
    Negative,
    #[error("minimum salary exceeds maximum salary")]
    MinAboveMax,
}

/// Salary bounds of an offer. Either side may be absent independently.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl SalaryRange {
    /// Build a range, enforcing non-negative amounts and `min <= max` when both are set.
    pub fn new(min: Option<f64>, max: Option<f64>) -> Result<Self, SalaryRangeError> {
        if min.is_some_and(|v| v < 0.0) || max.is_some_and(|v| v < 0.0) {
            return Err(SalaryRangeError::Negative);
        }
        if let (Some(lo), Some(hi)) = (min, max) {
            if lo > hi {
                return Err(SalaryRangeError::MinAboveMax);
            }
        }
        Ok(Self { min, max })
    }

    /// Text captured on an application at submission time.
    ///
    /// Both bounds: `"$2,800,000 - $3,500,000"`. Minimum only: `"Desde $2,500,000"`.
    /// A zero bound counts as absent. Anything else has no display string.
    pub fn display(&self) -> Option<String> {
        let set = |v: Option<f64>| v.filter(|v| *v != 0.0);
        match (set(self.min), set(self.max)) {
            (Some(lo), Some(hi)) => Some(format!("{} - {}", format_amount(lo), format_amount(hi))),
            (Some(lo), None) => Some(format!("Desde {}", format_amount(lo))),
            _ => None,
        }
    }
}

/// Render an amount rounded half-to-even to whole units with comma thousands separators.
pub fn format_amount(amount: f64) -> String {
    let whole = amount.round_ties_even() as i64;
    let digits = whole.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if whole < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

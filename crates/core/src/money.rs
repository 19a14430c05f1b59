//! Money arithmetic on minor currency units.
//!
//! All amounts in the system are integers in the smallest currency unit; no
//! floating point anywhere in the money path.

use crate::error::{DomainError, DomainResult};

/// Amount in smallest currency unit (e.g., cents).
pub type Amount = u64;

/// Percentage share of an amount, rounded to the nearest minor unit.
///
/// Rounding is half away from zero; amounts are non-negative so this is the
/// usual "+50 then divide" integer form. Overflow is a validation error, not
/// a panic.
pub fn percent_share(amount: Amount, percent: u64) -> DomainResult<Amount> {
    let scaled = amount
        .checked_mul(percent)
        .and_then(|v| v.checked_add(50))
        .ok_or_else(|| DomainError::validation("amount overflow computing percentage share"))?;
    Ok(scaled / 100)
}

use serde::{Deserialize, Serialize};

use fieldserve_catalog::PricingType;
use fieldserve_core::{percent_share, Amount, DomainError, DomainResult};

/// Floor applied to every quoted total, in minor currency units. Prevents
/// degenerate micro-bookings from per-unit pricing on tiny quantities.
pub const MIN_BOOKING_AMOUNT: Amount = 1_000;

/// Share of the total collected up front.
pub const ADVANCE_RATE_PCT: u64 = 30;

/// Technician's share of the total. The company share is always the
/// complement (`total - commission`), derived on demand and never stored.
pub const COMMISSION_RATE_PCT: u64 = 40;

/// Money amounts derived from a catalog entry and a requested quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub total_amount: Amount,
    pub advance_amount: Amount,
    pub balance_amount: Amount,
    pub commission: Amount,
}

/// Compute the quote for `quantity` units of a sub-service.
///
/// Pure and total for `quantity >= 1`; fails with `InvalidQuantity` below
/// that. The balance is derived by subtraction, not rounded independently, so
/// `advance + balance == total` holds exactly.
pub fn quote(
    base_price: Amount,
    pricing_type: PricingType,
    quantity: i64,
) -> DomainResult<Quote> {
    if quantity <= 0 {
        return Err(DomainError::InvalidQuantity);
    }

    let raw_total = if pricing_type.scales_with_quantity() {
        base_price
            .checked_mul(quantity as u64)
            .ok_or_else(|| DomainError::validation("quoted amount overflow"))?
    } else {
        base_price
    };

    let total_amount = raw_total.max(MIN_BOOKING_AMOUNT);
    let advance_amount = percent_share(total_amount, ADVANCE_RATE_PCT)?;
    let balance_amount = total_amount - advance_amount;
    let commission = percent_share(total_amount, COMMISSION_RATE_PCT)?;

    Ok(Quote {
        total_amount,
        advance_amount,
        balance_amount,
        commission,
    })
}

//! `fieldserve-pricing` — the one authoritative pricing engine.
//!
//! Every amount shown to a customer, stored on a booking, or printed on an
//! invoice comes from [`quote`]. Presentation-side previews must call this
//! same function; there is deliberately no second implementation to drift.

pub mod quote;

pub use quote::{quote, Quote, ADVANCE_RATE_PCT, COMMISSION_RATE_PCT, MIN_BOOKING_AMOUNT};

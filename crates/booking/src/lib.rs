//! `fieldserve-booking` — the central booking entity.
//!
//! A booking carries two independent state machines: fulfilment `status` (a
//! one-way funnel ending in completed/cancelled) and `payment_status` (unpaid
//! through partial to paid). Both transition tables live here; the store
//! layer serializes access but never decides legality.

pub mod booking;

pub use booking::{Booking, BookingStatus, NewBooking, PaymentStatus};

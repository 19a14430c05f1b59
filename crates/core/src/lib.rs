//! `fieldserve-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;
pub mod money;

pub use error::{DomainError, DomainResult};
pub use id::{BookingId, CustomerId, ServiceId, SubServiceId, TechnicianId};
pub use money::{percent_share, Amount};

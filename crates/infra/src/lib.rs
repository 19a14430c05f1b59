//! Infrastructure layer: the shared mutable store and the operations that
//! mutate it.
//!
//! [`Marketplace`] is the single write authority over bookings and
//! technicians. Every operation takes one write section on the whole store,
//! so read-modify-write never interleaves and cross-entity updates (a booking
//! plus two technician records) commit as a unit.

pub mod assignment;
pub mod marketplace;
pub mod store;

pub use marketplace::Marketplace;
pub use store::MarketplaceState;

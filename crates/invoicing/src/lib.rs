//! `fieldserve-invoicing` — read-only invoice projection.
//!
//! An invoice is computed on request from a booking plus a catalog lookup and
//! discarded after use. It is never persisted and never mutates anything.

pub mod invoice;

pub use invoice::Invoice;

//! `fieldserve-catalog` — read-only service catalog reference data.
//!
//! The catalog is supplied externally; the core only ever reads it. The
//! `CatalogLookup` trait is the seam, `InMemoryCatalog` the in-process
//! implementation used by the API wiring and the test suites.

pub mod catalog;

pub use catalog::{CatalogLookup, InMemoryCatalog, PricingType, Service, SubService};

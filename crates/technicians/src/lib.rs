//! `fieldserve-technicians` — technician records and load counters.
//!
//! The counters are owned by the assignment tracker in the store layer; the
//! methods here are the only way to move them.

pub mod technician;

pub use technician::Technician;

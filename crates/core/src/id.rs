//! Strongly-typed identifiers used across the domain.
//!
//! Identifiers are opaque unsigned integers, assigned monotonically by the
//! store on creation. Newtypes keep a booking id from ever standing in for a
//! technician id at a call site.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

macro_rules! impl_u64_newtype {
    ($t:ident, $name:literal) => {
        #[doc = concat!("Identifier of a ", $name, ".")]
        #[derive(
            Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $t(u64);

        impl $t {
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            pub const fn as_u64(&self) -> u64 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<u64> for $t {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for u64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw = s
                    .parse::<u64>()
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", stringify!($t), e)))?;
                Ok(Self(raw))
            }
        }
    };
}

impl_u64_newtype!(BookingId, "booking");
impl_u64_newtype!(CustomerId, "customer");
impl_u64_newtype!(TechnicianId, "technician");
impl_u64_newtype!(ServiceId, "service (catalog parent)");
impl_u64_newtype!(SubServiceId, "sub-service (catalog leaf)");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_from_decimal_string() {
        let id: BookingId = "42".parse().unwrap();
        assert_eq!(id, BookingId::new(42));
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn rejects_non_numeric_input() {
        let err = "not-a-number".parse::<TechnicianId>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));
    }
}

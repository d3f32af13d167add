//! Per-satellite frame accumulator (C5).
//!
//! Holds the latest decoded value for every `(frame fingerprint, field
//! name)` pair seen for one `(constellation, satellite, message type)`
//! stream. A later frame with the same fingerprint overwrites the
//! earlier one field-by-field; nothing is ever merged or averaged.
//! Record builders (C6) read straight out of this store and decide for
//! themselves whether enough fields are present to build a record.

#[cfg(not(feature = "std"))]
use alloc::collections::{BTreeMap, BTreeSet};
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::collections::{BTreeMap, BTreeSet};

use crate::bits::DecodedValue;
use crate::uuid::Uuid;

/// Stores decoded field values keyed by `(fingerprint, field name)`.
///
/// `BTreeMap`/`BTreeSet` rather than a hash-based collection, so the
/// store works unchanged under `no_std` + `alloc` without pulling in a
/// hasher.
#[derive(Debug, Default)]
pub struct Accumulator {
    values: BTreeMap<(Uuid, String), DecodedValue>,
}

impl Accumulator {
    pub fn new() -> Self {
        Accumulator {
            values: BTreeMap::new(),
        }
    }

    /// Stores every decoded field under `uuid`, overwriting whatever was
    /// there for the same fingerprint and field name.
    pub fn store(&mut self, uuid: Uuid, decoded: &[(String, DecodedValue)]) {
        for (name, value) in decoded {
            self.values.insert((uuid, name.clone()), *value);
        }
    }

    pub fn get(&self, uuid: &Uuid, field: &str) -> Option<&DecodedValue> {
        self.values.get(&(*uuid, String::from(field)))
    }

    pub fn get_f64(&self, uuid: &Uuid, field: &str) -> Option<f64> {
        self.get(uuid, field).map(DecodedValue::as_f64)
    }

    pub fn get_i128(&self, uuid: &Uuid, field: &str) -> Option<i128> {
        self.get(uuid, field).and_then(DecodedValue::as_i128)
    }

    /// All distinct fingerprints currently holding data.
    pub fn uuids(&self) -> BTreeSet<Uuid> {
        self.values.keys().map(|(u, _)| *u).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Every `(fingerprint, field name, value)` currently stored.
    ///
    /// Typed builders (C6) only surface the fields a record type names;
    /// this exposes everything else a frame decoded (GPS C-NAV clock,
    /// iono, UTC and EOP parameters have no typed record but are still
    /// decoded and stored) for a caller willing to read them by name.
    pub fn fields(&self) -> impl Iterator<Item = (&Uuid, &str, &DecodedValue)> {
        self.values
            .iter()
            .map(|((uuid, name), value)| (uuid, name.as_str(), value))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::uuid::Constellation;

    #[test]
    fn later_store_overwrites_earlier_value_for_same_field() {
        let mut acc = Accumulator::new();
        let uuid = Uuid::new(Constellation::GpsLNav, 2, 0, 0, 50);
        acc.store(uuid, &[("iode".into(), DecodedValue::Int(3))]);
        acc.store(uuid, &[("iode".into(), DecodedValue::Int(7))]);
        assert_eq!(acc.get_i128(&uuid, "iode"), Some(7));
    }

    #[test]
    fn unknown_field_returns_none() {
        let acc = Accumulator::new();
        let uuid = Uuid::new(Constellation::GpsLNav, 2, 0, 0, 50);
        assert_eq!(acc.get(&uuid, "nope"), None);
    }
}

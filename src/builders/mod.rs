//! Record builders (C6): turn an [`crate::accumulator::Accumulator`]'s
//! latest field values into the typed records in `records/`.
//!
//! Ephemeris assembly is all-or-nothing — any missing field means
//! `None`, never a partially filled record. Almanac assembly walks
//! whatever fingerprints the accumulator holds and silently skips any
//! slot missing a field, rather than failing the whole batch.

pub mod beidou_d1;
pub mod galileo;
pub mod glonass;
pub mod gps_cnav;
pub mod gps_lnav;

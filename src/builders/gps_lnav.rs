//! Builds GPS L-NAV ephemeris and almanac records out of an
//! [`Accumulator`]'s latest field values.
//!
//! Ephemeris assembly is all-or-nothing: any missing field yields `None`
//! rather than a partially populated record. Almanac assembly walks
//! every fingerprint the accumulator has seen and skips, rather than
//! fails, any page missing a field — a satellite with an incomplete
//! almanac page simply does not appear in the result.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::accumulator::Accumulator;
use crate::records::gps::{GpsAlmanac, GpsEphemeris};
use crate::uuid::{Constellation, Uuid};

const SF2: u32 = 50;
const SF3: u32 = 75;

pub fn build_ephemeris(acc: &Accumulator, prn: u16) -> Option<GpsEphemeris> {
    let sf2 = Uuid::new(Constellation::GpsLNav, 2, 0, 0, SF2);
    let sf3 = Uuid::new(Constellation::GpsLNav, 3, 0, 0, SF3);

    Some(GpsEphemeris {
        prn,
        iode: acc.get_i128(&sf2, "iode")?,
        crs: acc.get_f64(&sf2, "crs")?,
        delta_n: acc.get_f64(&sf2, "delta_n")?,
        m_zero: acc.get_f64(&sf2, "m_zero")?,
        cuc: acc.get_f64(&sf2, "cuc")?,
        e: acc.get_f64(&sf2, "e")?,
        cus: acc.get_f64(&sf2, "cus")?,
        sqrt_a: acc.get_f64(&sf2, "sqrt_a")?,
        toe: acc.get_f64(&sf2, "toe")?,
        cic: acc.get_f64(&sf3, "cic")?,
        omega_zero: acc.get_f64(&sf3, "omega_zero")?,
        cis: acc.get_f64(&sf3, "cis")?,
        i_zero: acc.get_f64(&sf3, "i_zero")?,
        crc: acc.get_f64(&sf3, "crc")?,
        omega: acc.get_f64(&sf3, "omega")?,
        omega_dot: acc.get_f64(&sf3, "omega_dot")?,
        idot: acc.get_f64(&sf3, "idot")?,
    })
}

fn build_one_page(acc: &Accumulator, uuid: &Uuid, prn: u16) -> Option<GpsAlmanac> {
    Some(GpsAlmanac {
        prn,
        sv_health: acc.get_i128(uuid, "sv_health")?,
        e: acc.get_f64(uuid, "e")?,
        toa: acc.get_f64(uuid, "toa")?,
        delta_i: acc.get_f64(uuid, "delta_i")?,
        omega_dot: acc.get_f64(uuid, "omega_dot")?,
        sqrt_a: acc.get_f64(uuid, "sqrt_a")?,
        omega_zero: acc.get_f64(uuid, "omega_zero")?,
        omega: acc.get_f64(uuid, "omega")?,
        m_zero: acc.get_f64(uuid, "m_zero")?,
        af0: acc.get_f64(uuid, "af0")?,
        af1: acc.get_f64(uuid, "af1")?,
    })
}

pub fn build_almanacs(acc: &Accumulator) -> Vec<GpsAlmanac> {
    let mut out = Vec::new();
    for uuid in acc.uuids() {
        if uuid.constellation != Constellation::GpsLNav {
            continue;
        }
        let prn = match uuid.subframe {
            5 if (1..=24).contains(&uuid.page) => Some(uuid.page),
            4 if (25..=32).contains(&uuid.page) => Some(uuid.page),
            _ => None,
        };
        if let Some(prn) = prn {
            if let Some(almanac) = build_one_page(acc, &uuid, prn) {
                out.push(almanac);
            }
        }
    }
    out
}

//! Builds Galileo I-NAV ephemeris and almanac records.
//!
//! Ephemeris needs word types 1-4 sharing one `iod`. Almanac needs word
//! type 10 (shared reference epoch, all three satellites' clock/health)
//! plus whichever of word types 7/8/9 are present, all sharing one
//! `iod_a`; each present word yields one [`GalileoAlmanac`] entry.

#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::accumulator::Accumulator;
use crate::records::galileo::{GalileoAlmanac, GalileoEphemeris};
use crate::uuid::{Constellation, Uuid};

pub fn build_ephemeris(acc: &Accumulator, sv_id: u16, iod: u16) -> Option<GalileoEphemeris> {
    let w1 = Uuid::new(Constellation::GalileoINav, 0, 0, iod, 1);
    let w2 = Uuid::new(Constellation::GalileoINav, 0, 0, iod, 2);
    let w3 = Uuid::new(Constellation::GalileoINav, 0, 0, iod, 3);
    let w4 = Uuid::new(Constellation::GalileoINav, 0, 0, iod, 4);

    Some(GalileoEphemeris {
        sv_id,
        toe: acc.get_f64(&w1, "toe")?,
        m_zero: acc.get_f64(&w1, "m_zero")?,
        e: acc.get_f64(&w1, "e")?,
        sqrt_a: acc.get_f64(&w1, "sqrt_a")?,
        i_zero: acc.get_f64(&w2, "i_zero")?,
        omega_zero: acc.get_f64(&w2, "omega_zero")?,
        omega: acc.get_f64(&w2, "omega")?,
        i_dot: acc.get_f64(&w2, "i_dot")?,
        omega_dot: acc.get_f64(&w3, "omega_dot")?,
        delta_n: acc.get_f64(&w3, "delta_n")?,
        crc: acc.get_f64(&w3, "crc")?,
        crs: acc.get_f64(&w3, "crs")?,
        cuc: acc.get_f64(&w3, "cuc")?,
        cus: acc.get_f64(&w3, "cus")?,
        cic: acc.get_f64(&w4, "cic")?,
        cis: acc.get_f64(&w4, "cis")?,
    })
}

fn build_one_satellite(
    acc: &Accumulator,
    word: &Uuid,
    w10: &Uuid,
    suffix: &str,
) -> Option<GalileoAlmanac> {
    let sv_id = acc.get_i128(word, "alm_sv_id")? as u16;
    if sv_id == 0 {
        // dummy satellite id: this almanac slot is unused.
        return None;
    }
    Some(GalileoAlmanac {
        sv_id,
        toa: acc.get_f64(w10, "toa")?,
        wn_a: acc.get_i128(w10, "wn_a")?,
        delta_sqrt_a: acc.get_f64(word, "delta_sqrt_a")?,
        e: acc.get_f64(word, "e")?,
        omega: acc.get_f64(word, "omega")?,
        delta_i: acc.get_f64(word, "delta_i")?,
        omega_zero: acc.get_f64(word, "omega_zero")?,
        omega_dot: acc.get_f64(word, "omega_dot")?,
        m_zero: acc.get_f64(word, "m_zero")?,
        af0: acc.get_f64(w10, &format!("af0_{suffix}"))?,
        af1: acc.get_f64(w10, &format!("af1_{suffix}"))?,
        e5b_hs: acc.get_i128(w10, &format!("e5b_hs_{suffix}"))?,
        e1b_hs: acc.get_i128(w10, &format!("e1b_hs_{suffix}"))?,
    })
}

pub fn build_almanacs(acc: &Accumulator, iod_a: u16) -> Vec<GalileoAlmanac> {
    let w7 = Uuid::new(Constellation::GalileoINav, 0, 0, iod_a, 7);
    let w8 = Uuid::new(Constellation::GalileoINav, 0, 0, iod_a, 8);
    let w9 = Uuid::new(Constellation::GalileoINav, 0, 0, iod_a, 9);
    let w10 = Uuid::new(Constellation::GalileoINav, 0, 0, iod_a, 10);

    [(&w7, "a"), (&w8, "b"), (&w9, "c")]
        .into_iter()
        .filter_map(|(word, suffix)| build_one_satellite(acc, word, &w10, suffix))
        .collect()
}

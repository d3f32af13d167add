//! Builds GLONASS ephemeris and almanac records.
//!
//! Ephemeris needs strings 1-4 from one satellite's frame. Almanac slots
//! span five frames of five string pairs each (strings 6-15 in every
//! frame); the caller identifies which slot (`n_a`, 1-24) a given pair
//! describes by the pair's first string.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::accumulator::Accumulator;
use crate::records::glonass::{GlonassAlmanac, GlonassEphemeris};
use crate::uuid::{Constellation, Uuid};

pub fn build_ephemeris(acc: &Accumulator, slot: u16) -> Option<GlonassEphemeris> {
    let s1 = Uuid::new(Constellation::Glonass, 1, 0, 0, 1);
    let s2 = Uuid::new(Constellation::Glonass, 2, 0, 0, 2);
    let s3 = Uuid::new(Constellation::Glonass, 3, 0, 0, 3);
    let s4 = Uuid::new(Constellation::Glonass, 4, 0, 0, 4);

    Some(GlonassEphemeris {
        slot,
        string_number: acc.get_i128(&s1, "string_number")?,
        t_k_hour: acc.get_i128(&s1, "t_k_hour")?,
        t_k_min: acc.get_i128(&s1, "t_k_min")?,
        t_k_sec: acc.get_f64(&s1, "t_k_sec")?,
        x_n: acc.get_f64(&s1, "x_n")?,
        x_dot_n: acc.get_f64(&s1, "x_dot_n")?,
        x_dot_dot_n: acc.get_f64(&s1, "x_dot_dot_n")?,
        p1: acc.get_i128(&s1, "p1")?,
        t_b: acc.get_f64(&s2, "t_b")?,
        b_n: acc.get_i128(&s2, "b_n")?,
        p2: acc.get_i128(&s2, "p2")?,
        y_n: acc.get_f64(&s2, "y_n")?,
        y_dot_n: acc.get_f64(&s2, "y_dot_n")?,
        y_dot_dot_n: acc.get_f64(&s2, "y_dot_dot_n")?,
        gamma_n: acc.get_f64(&s3, "gamma_n")?,
        p: acc.get_i128(&s3, "p")?,
        l_3rd_n: acc.get_i128(&s3, "l_3rd_n")?,
        z_n: acc.get_f64(&s3, "z_n")?,
        z_dot_n: acc.get_f64(&s3, "z_dot_n")?,
        z_dot_dot_n: acc.get_f64(&s3, "z_dot_dot_n")?,
        p3: acc.get_i128(&s3, "p3")?,
        tau_n: acc.get_f64(&s4, "tau_n")?,
        delta_tau_n: acc.get_f64(&s4, "delta_tau_n")?,
        e_n: acc.get_i128(&s4, "e_n")?,
        m: acc.get_i128(&s4, "m")?,
        n_t: acc.get_i128(&s4, "n_t")?,
        n: acc.get_i128(&s4, "n")?,
        f_t: acc.get_i128(&s4, "f_t")?,
        p4: acc.get_i128(&s4, "p4")?,
    })
}

fn build_one_slot(acc: &Accumulator, a: &Uuid, b: &Uuid, slot: u16) -> Option<GlonassAlmanac> {
    Some(GlonassAlmanac {
        slot,
        h_n_a: acc.get_i128(b, "h_n_a")?,
        lambda_n_a: acc.get_f64(a, "lambda_n_a")?,
        t_lambda_n_a: acc.get_f64(b, "t_lambda_n_a")?,
        delta_i_n_a: acc.get_f64(a, "delta_i_n_a")?,
        delta_t_n_a: acc.get_f64(b, "delta_t_n_a")?,
        delta_t_dot_n_a: acc.get_f64(b, "delta_t_dot_n_a")?,
        epsilon_n_a: acc.get_f64(a, "epsilon_n_a")?,
        omega_n_a: acc.get_f64(b, "omega_n_a")?,
        m_n_a: acc.get_i128(a, "m_n_a")?,
        tau_n_a: acc.get_f64(a, "tau_n_a")?,
        c_n_a: acc.get_i128(a, "c_n_a")?,
        l_n: acc.get_i128(b, "l_n")?,
    })
}

/// Walks every even/odd string-number pair the accumulator holds in the
/// 6-15 range and builds a record for each slot that has both halves.
pub fn build_almanacs(acc: &Accumulator) -> Vec<GlonassAlmanac> {
    let mut out = Vec::new();
    for even in (6u8..=14).step_by(2) {
        let a = Uuid::new(Constellation::Glonass, even, 0, 0, even as u32);
        let b = Uuid::new(Constellation::Glonass, even + 1, 0, 0, (even + 1) as u32);
        let slot = match acc.get_i128(&a, "n_a") {
            Some(n) if (1..=24).contains(&n) => n as u16,
            _ => continue,
        };
        if let Some(almanac) = build_one_slot(acc, &a, &b, slot) {
            out.push(almanac);
        }
    }
    out
}

//! Builds BeiDou D1 ephemeris and almanac records.
//!
//! Almanac pages 11-23 additionally gate an extended-constellation slot
//! (PRN 31+) behind a global `am_ep_id == 3` check across every received
//! base slot in that range (plus the health page) — not a per-page one.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::accumulator::Accumulator;
use crate::bits::append;
use crate::records::beidou::{BeiDouAlmanac, BeiDouEphemeris};
use crate::uuid::{Constellation, Uuid};

const T_OE_SCALE: f64 = 8.0; // 2^3, applied to the msb/lsb-combined raw value

pub fn build_ephemeris(acc: &Accumulator, prn: u16) -> Option<BeiDouEphemeris> {
    let sf1 = Uuid::new(Constellation::BeiDouD1, 1, 0, 0, 1);
    let sf2 = Uuid::new(Constellation::BeiDouD1, 2, 0, 0, 2);
    let sf3 = Uuid::new(Constellation::BeiDouD1, 3, 0, 0, 3);

    let toe_high = acc.get_i128(&sf2, "t_oe_high")?;
    let toe_low = acc.get_i128(&sf3, "t_oe_low")?;
    let toe_raw = append(toe_high as u128, toe_low as u128, 10);
    let toe = toe_raw as f64 * T_OE_SCALE;

    Some(BeiDouEphemeris {
        prn,
        aode: acc.get_i128(&sf1, "aode")?,
        t_oc: acc.get_f64(&sf1, "t_oc")?,
        a0: acc.get_f64(&sf1, "a0")?,
        a1: acc.get_f64(&sf1, "a1")?,
        a2: acc.get_f64(&sf1, "a2")?,
        sqrt_a: acc.get_f64(&sf2, "sqrt_a")?,
        e: acc.get_f64(&sf2, "e")?,
        delta_n: acc.get_f64(&sf2, "delta_n")?,
        m_zero: acc.get_f64(&sf2, "m_zero")?,
        cuc: acc.get_f64(&sf2, "cuc")?,
        cus: acc.get_f64(&sf2, "cus")?,
        crc: acc.get_f64(&sf2, "crc")?,
        crs: acc.get_f64(&sf2, "crs")?,
        toe,
        omega: acc.get_f64(&sf3, "omega")?,
        omega_zero: acc.get_f64(&sf3, "omega_zero")?,
        omega_dot: acc.get_f64(&sf3, "omega_dot")?,
        i_zero: acc.get_f64(&sf3, "i_zero")?,
        idot: acc.get_f64(&sf3, "idot")?,
        cic: acc.get_f64(&sf3, "cic")?,
        cis: acc.get_f64(&sf3, "cis")?,
    })
}

fn build_slot(acc: &Accumulator, uuid: &Uuid, prn: u16, healthy: bool) -> Option<BeiDouAlmanac> {
    Some(BeiDouAlmanac {
        prn,
        healthy,
        toa: acc.get_f64(uuid, "toa")?,
        sqrt_a: acc.get_f64(uuid, "sqrt_a")?,
        e: acc.get_f64(uuid, "e")?,
        omega: acc.get_f64(uuid, "omega")?,
        m_zero: acc.get_f64(uuid, "m_zero")?,
        omega_zero: acc.get_f64(uuid, "omega_zero")?,
        omega_dot: acc.get_f64(uuid, "omega_dot")?,
        delta_i: acc.get_f64(uuid, "delta_i")?,
        a0: acc.get_f64(uuid, "a0")?,
        a1: acc.get_f64(uuid, "a1")?,
    })
}

/// PRN 1-30 base-constellation almanacs from subframe-5 pages 1-24, plus
/// gated PRN 31+ extended-constellation almanacs from pages 11-23.
///
/// The extended gate is global, not per-page: every received base slot
/// (pages 11-23 plus the health page, 24) must report `am_ep_id == 3`
/// before any extended almanac is built at all. A mix where most pages
/// agree but one doesn't suppresses every extended entry, not just the
/// disagreeing page's.
pub fn build_almanacs(acc: &Accumulator) -> Vec<BeiDouAlmanac> {
    let health_page = Uuid::new(Constellation::BeiDouD1, 5, 24, 0, 24);
    let mut out = Vec::new();

    let received_am_ep_ids: Vec<i128> = (11..=23u16)
        .map(|page| Uuid::new(Constellation::BeiDouD1, 5, page, 0, page as u32))
        .chain([health_page])
        .filter_map(|uuid| acc.get_i128(&uuid, "am_ep_id"))
        .collect();
    let use_extended = !received_am_ep_ids.is_empty() && received_am_ep_ids.iter().all(|&id| id == 3);

    for page in 1..=23u16 {
        let uuid = Uuid::new(Constellation::BeiDouD1, 5, page, 0, page as u32);
        if page <= 30 {
            let healthy = base_health(acc, &health_page, page).unwrap_or(true);
            if let Some(almanac) = build_slot(acc, &uuid, page, healthy) {
                out.push(almanac);
            }
        }
        if use_extended && (11..=23).contains(&page) {
            let extended_prn = 30 + page;
            let healthy = acc.get_i128(&health_page, "ext_health_all_ok") != Some(0);
            if let Some(almanac) = build_slot(acc, &uuid, extended_prn, healthy) {
                out.push(almanac);
            }
        }
    }

    out
}

fn base_health(acc: &Accumulator, health_page: &Uuid, prn: u16) -> Option<bool> {
    if !(20..=30).contains(&prn) {
        return None;
    }
    let field = match prn {
        20 => "health_prn_20",
        21 => "health_prn_21",
        22 => "health_prn_22",
        23 => "health_prn_23",
        24 => "health_prn_24",
        25 => "health_prn_25",
        26 => "health_prn_26",
        27 => "health_prn_27",
        28 => "health_prn_28",
        29 => "health_prn_29",
        _ => "health_prn_30",
    };
    acc.get_i128(health_page, field).map(|v| v == 0)
}

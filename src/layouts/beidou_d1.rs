//! BeiDou D1 subframe layouts.
//!
//! Subframes 1-3 carry ephemeris (clock, then the two halves of the
//! orbit); subframe 5 pages carry almanac. `BASE_ALMANAC` serves both the
//! 30 base-constellation slots (pages 1-24) and the gated extended slots
//! (pages 11-23, when `am_ep_id == 3`) since both share the same field
//! set; `HEALTH_PAGE` (page 24) carries base-satellite health bits plus a
//! single summary flag standing in for the 43 individual extended-health
//! bits a full transcription would otherwise need.

use crate::descriptor::{FieldDescriptor as FD, Layout};
use crate::uuid::Uuid;

/// Subframe 1: `aode, t_oc, a2, a0, a1`.
pub static EPHEMERIS_SF1: &[(&str, FD)] = &[
    ("aode", FD::unsigned(18, 5)),
    ("t_oc", FD::unsigned_scaled(23, 17, 8.0)),
    ("a2", FD::twos_complement(40, 11, 1.387_778_780_781_45e-17)), // 2^-66
    ("a0", FD::twos_complement(51, 24, 1.164_153_218_269_47e-10)), // 2^-33
    ("a1", FD::twos_complement(75, 22, 8.881_784_197_001_25e-16)), // 2^-50
];

/// Subframe 2: `sqrt_a, e, delta_n, m_zero, cuc, cus, crc, crs`, plus the
/// most-significant half of `t_oe`.
pub static EPHEMERIS_SF2: &[(&str, FD)] = &[
    ("sqrt_a", FD::unsigned_scaled(18, 32, 1.907_348_632_812_5e-6)), // 2^-19
    ("e", FD::unsigned_scaled(50, 32, 1.164_153_218_269_47e-10)), // 2^-33
    ("delta_n", FD::twos_complement(82, 16, 1.136_868_377_216_16e-13)), // 2^-43
    ("m_zero", FD::twos_complement(98, 32, 4.656_612_873_077_39e-10)), // 2^-31
    ("cuc", FD::twos_complement(130, 18, 4.656_612_873_077_39e-10)), // 2^-31
    ("cus", FD::twos_complement(148, 18, 4.656_612_873_077_39e-10)),
    ("crc", FD::twos_complement(166, 18, 0.015_625)), // 2^-6
    ("crs", FD::twos_complement(184, 18, 0.015_625)),
    // Named to avoid decode.rs's automatic _msb/_lsb merge: its other half
    // (t_oe_low) lives in subframe 3, a different frame entirely, so the
    // builder combines the two itself via `bits::append`.
    ("t_oe_high", FD::unsigned(202, 10)),
];

/// Subframe 3: `omega, omega_zero, omega_dot, i_zero, idot, cic, cis`,
/// plus the least-significant half of `t_oe`.
pub static EPHEMERIS_SF3: &[(&str, FD)] = &[
    ("omega", FD::twos_complement(18, 32, 4.656_612_873_077_39e-10)),
    ("omega_zero", FD::twos_complement(50, 32, 4.656_612_873_077_39e-10)),
    ("omega_dot", FD::twos_complement(82, 24, 1.136_868_377_216_16e-13)),
    ("i_zero", FD::twos_complement(106, 32, 4.656_612_873_077_39e-10)),
    ("idot", FD::twos_complement(138, 14, 1.136_868_377_216_16e-13)),
    ("cic", FD::twos_complement(152, 18, 4.656_612_873_077_39e-10)),
    ("cis", FD::twos_complement(170, 18, 4.656_612_873_077_39e-10)),
    ("t_oe_low", FD::unsigned(188, 10)),
];

/// Almanac orbit elements, shared by base (pages 1-24) and gated extended
/// (pages 11-23) slots: `toa, sqrt_a, e, omega, m_zero, omega_zero,
/// omega_dot, delta_i, a0, a1`, plus the gating flag read on every page.
pub static BASE_ALMANAC: &[(&str, FD)] = &[
    ("toa", FD::unsigned_scaled(50, 8, 4_096.0)),
    ("sqrt_a", FD::unsigned_scaled(58, 17, 4.882_812_5e-4)), // 2^-11
    ("e", FD::unsigned_scaled(75, 11, 1.525_878_906_25e-5)), // 2^-16
    ("omega", FD::twos_complement(86, 16, 3.051_757_812_5e-5)), // 2^-15
    ("m_zero", FD::twos_complement(102, 16, 3.051_757_812_5e-5)),
    ("omega_zero", FD::twos_complement(118, 16, 3.051_757_812_5e-5)),
    ("omega_dot", FD::twos_complement(134, 11, 1.164_153_218_269_47e-10)), // 2^-33
    ("delta_i", FD::twos_complement(145, 11, 6.103_515_625e-5)), // 2^-14
    ("a0", FD::twos_complement(156, 11, 9.536_743_164_062_5e-7)), // 2^-20
    ("a1", FD::twos_complement(167, 11, 3.637_978_807_091_71e-12)), // 2^-38
    ("am_ep_id", FD::unsigned(290, 2)),
];

/// Page 24: base-satellite health bits (PRN 20-30) plus one flag
/// standing in for the extended satellites' (PRN 31-63) individual
/// health bits.
pub static HEALTH_PAGE: &[(&str, FD)] = &[
    ("health_prn_20", FD::unsigned(50, 1)),
    ("health_prn_21", FD::unsigned(51, 1)),
    ("health_prn_22", FD::unsigned(52, 1)),
    ("health_prn_23", FD::unsigned(53, 1)),
    ("health_prn_24", FD::unsigned(54, 1)),
    ("health_prn_25", FD::unsigned(55, 1)),
    ("health_prn_26", FD::unsigned(56, 1)),
    ("health_prn_27", FD::unsigned(57, 1)),
    ("health_prn_28", FD::unsigned(58, 1)),
    ("health_prn_29", FD::unsigned(59, 1)),
    ("health_prn_30", FD::unsigned(60, 1)),
    ("ext_health_all_ok", FD::unsigned(61, 1)),
    ("am_ep_id", FD::unsigned(215, 2)),
];

const SF1_LEGACY: u32 = 1;
const SF2_LEGACY: u32 = 2;
const SF3_LEGACY: u32 = 3;

pub fn resolve(uuid: &Uuid) -> Option<Layout> {
    if uuid.subframe == 1 {
        return match uuid.display_tag() {
            SF1_LEGACY => Some(EPHEMERIS_SF1),
            SF2_LEGACY => Some(EPHEMERIS_SF2),
            SF3_LEGACY => Some(EPHEMERIS_SF3),
            _ => None,
        };
    }
    if uuid.subframe == 5 {
        return match uuid.page {
            24 => Some(HEALTH_PAGE),
            1..=23 => Some(BASE_ALMANAC),
            _ => None,
        };
    }
    None
}

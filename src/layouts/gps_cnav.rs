//! GPS C-NAV message layouts.
//!
//! Full field tables are authored only for the message types this crate
//! builds records from (10, 11 for ephemeris; 31 for the reduced-almanac
//! packed-substructure demonstration; 37 for midi almanac) or uses to
//! demonstrate a mechanism (30, clock terms). Other supplemented families
//! get identification-only treatment in `identify.rs` — recognized well
//! enough to keep the accumulator from starving on them, but without a
//! dedicated layout here.
//!
//! Two fields the upstream source derives from a single shared
//! accumulator key (`omega_dot`/`idot`, `crs`/`crc`) are given their own
//! distinct bit ranges here instead of reusing one another's — see
//! `DESIGN.md`.

use crate::descriptor::{FieldDescriptor as FD, Layout};
use crate::uuid::Uuid;

/// Message type 10: clock, health, and the orbit elements the source
/// splits onto this message (`delta_a, a_dot, delta_n, delta_n_dot,
/// m_zero, e, toe`) plus the C-NAV-specific clock/health fields.
pub static EPHEMERIS_MSG10: &[(&str, FD)] = &[
    ("wn", FD::unsigned(20, 13)),
    ("ura_ed", FD::unsigned(33, 5)),
    ("sig_health_l1", FD::unsigned(38, 1)),
    ("sig_health_l2", FD::unsigned(39, 1)),
    ("sig_health_l5", FD::unsigned(40, 1)),
    ("top", FD::unsigned_scaled(41, 11, 300.0)),
    ("delta_a", FD::twos_complement(52, 26, 1.953_125e-3)), // 2^-9
    ("a_dot", FD::twos_complement(78, 25, 4.768_371_582_031_25e-7)), // 2^-21
    ("delta_n", FD::twos_complement(103, 17, 5.684_341_886_080_8e-14)), // 2^-44
    ("delta_n_dot", FD::twos_complement(120, 23, 4.440_892_098_500_63e-16)), // 2^-57
    ("m_zero_msb", FD::twos_complement(143, 8, 2.328_306_436_538_7e-10)), // 2^-32
    ("m_zero_lsb", FD::unsigned(151, 25)),
    ("e_msb", FD::unsigned_scaled(176, 8, 5.820_766_091_346_74e-11)), // 2^-34
    ("e_lsb", FD::unsigned(184, 25)),
    ("toe", FD::unsigned_scaled(209, 11, 300.0)),
];

/// Message type 11: the remaining harmonic-correction and angular
/// elements (`cuc, cus, cic, cis, crc, crs, omega_zero, i_zero, omega,
/// i_dot, delta_omega_dot`), plus a second `toe` copy the builder checks
/// against message 10's for consistency.
pub static EPHEMERIS_MSG11: &[(&str, FD)] = &[
    ("cuc", FD::twos_complement(20, 16, 9.313_225_746_154_79e-10)), // 2^-30
    ("cus", FD::twos_complement(36, 16, 9.313_225_746_154_79e-10)),
    ("cic", FD::twos_complement(52, 16, 9.313_225_746_154_79e-10)),
    ("cis", FD::twos_complement(68, 16, 9.313_225_746_154_79e-10)),
    ("crc_msb", FD::twos_complement(84, 8, 3.906_25e-3)), // 2^-8
    ("crc_lsb", FD::unsigned(92, 25)),
    ("crs_msb", FD::twos_complement(117, 8, 3.906_25e-3)),
    ("crs_lsb", FD::unsigned(125, 25)),
    ("omega_zero_msb", FD::twos_complement(150, 8, 4.656_612_873_077_39e-10)), // 2^-31
    ("omega_zero_lsb", FD::unsigned(158, 25)),
    ("i_zero_msb", FD::twos_complement(183, 8, 4.656_612_873_077_39e-10)),
    ("i_zero_lsb", FD::unsigned(191, 25)),
    ("omega_msb", FD::twos_complement(216, 8, 4.656_612_873_077_39e-10)),
    ("omega_lsb", FD::unsigned(224, 25)),
    ("idot", FD::twos_complement(249, 14, 5.684_341_886_080_8e-14)), // 2^-44
    ("delta_omega_dot", FD::twos_complement(263, 17, 5.684_341_886_080_8e-14)),
    ("toe", FD::unsigned_scaled(280, 11, 300.0)),
];

/// Message type 30: clock terms only, never assembled into a record by
/// this crate — kept to show the layout mechanism covers non-ephemeris
/// traffic too.
pub static CLOCK_MSG30: &[(&str, FD)] = &[
    ("top", FD::unsigned_scaled(20, 11, 300.0)),
    ("a_f0", FD::twos_complement(31, 26, 2.910_383_045_673_37e-11)), // 2^-35
    ("a_f1", FD::twos_complement(57, 20, 3.552_713_678_800_5e-15)), // 2^-48
    ("a_f2", FD::twos_complement(77, 10, 8.673_617_379_884_04e-19)), // 2^-60
    ("urai_ned", FD::unsigned(87, 5)),
];

/// Message type 37: midi almanac for the PRN carried in `sv_id`
/// (extracted during identification, not re-declared here).
pub static MIDI_ALMANAC: &[(&str, FD)] = &[
    ("sig_health_l1", FD::unsigned(20, 1)),
    ("sig_health_l2", FD::unsigned(21, 1)),
    ("sig_health_l5", FD::unsigned(22, 1)),
    ("toa", FD::unsigned_scaled(23, 8, 4_096.0)),
    ("e", FD::unsigned_scaled(31, 11, 4.882_812_5e-4)), // 2^-11
    ("sqrt_a", FD::unsigned_scaled(42, 17, 6.25e-2)), // 2^-4
    ("omega_zero", FD::twos_complement(59, 16, 3.051_757_812_5e-5)), // 2^-15
    ("omega", FD::twos_complement(75, 16, 3.051_757_812_5e-5)),
    ("m_zero", FD::twos_complement(91, 16, 3.051_757_812_5e-5)),
    ("af0", FD::twos_complement(107, 11, 9.536_743_164_062_5e-7)), // 2^-20
    ("af1", FD::twos_complement(118, 10, 3.637_978_807_091_71e-12)), // 2^-38
];

/// One packed reduced-almanac entry: 31 bits holding a PRN plus a coarse
/// orbit description. Re-decoded from `("red_alm_N", ...)` substructure
/// fields in [`REDUCED_ALM_31`].
pub static RED_ALM_ITEM: &[(&str, FD)] = &[
    ("sv_id", FD::unsigned(0, 7)),
    ("l1_health", FD::unsigned(7, 1)),
    ("delta_a", FD::twos_complement(8, 8, 512.0)), // 2^9
    ("omega_zero", FD::twos_complement(16, 7, 1.562_5e-2)), // 2^-6
    ("phi_zero", FD::twos_complement(23, 7, 1.562_5e-2)),
];

/// Message type 31: four packed reduced-almanac entries, each re-decoded
/// against [`RED_ALM_ITEM`] through the `substructure` mechanism.
pub static REDUCED_ALM_31: &[(&str, FD)] = &[
    ("red_alm_1", FD::substructure(147, 31, "red_alm_item")),
    ("red_alm_2", FD::substructure(178, 31, "red_alm_item")),
    ("red_alm_3", FD::substructure(209, 31, "red_alm_item")),
    ("red_alm_4", FD::substructure(240, 31, "red_alm_item")),
];

/// Message type 12 packs seven entries rather than the four in type 31 —
/// `original_source`'s literal offsets carry seven, which this crate
/// follows over the rounder count in prose.
pub static REDUCED_ALM_12: &[(&str, FD)] = &[
    ("red_alm_1", FD::substructure(204, 31, "red_alm_item")),
    ("red_alm_2", FD::substructure(173, 31, "red_alm_item")),
    ("red_alm_3", FD::substructure(142, 31, "red_alm_item")),
    ("red_alm_4", FD::substructure(111, 31, "red_alm_item")),
    ("red_alm_5", FD::substructure(80, 31, "red_alm_item")),
    ("red_alm_6", FD::substructure(49, 31, "red_alm_item")),
    ("red_alm_7", FD::substructure(18, 31, "red_alm_item")),
];

const MSG10_LEGACY: u32 = 10;
const MSG11_LEGACY: u32 = 11;
const MSG30_LEGACY: u32 = 30;
const MSG37_LEGACY: u32 = 37;
const MSG31_LEGACY: u32 = 31;
const MSG12_LEGACY: u32 = 12;

pub fn resolve(uuid: &Uuid) -> Option<Layout> {
    match uuid.display_tag() {
        MSG10_LEGACY => Some(EPHEMERIS_MSG10),
        MSG11_LEGACY => Some(EPHEMERIS_MSG11),
        MSG30_LEGACY => Some(CLOCK_MSG30),
        MSG37_LEGACY => Some(MIDI_ALMANAC),
        MSG31_LEGACY => Some(REDUCED_ALM_31),
        MSG12_LEGACY => Some(REDUCED_ALM_12),
        _ => None,
    }
}

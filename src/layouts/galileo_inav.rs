//! Galileo I-NAV word layouts.
//!
//! Ephemeris is split across word types 1-4. Almanac word types 7-9 each
//! carry one satellite's orbit elements plus that satellite's `alm_sv_id`
//! (re-declared here as a payload field so the builder can read it back
//! out of the accumulator); word type 10 carries the shared reference
//! epoch and all three satellites' clock/health terms, keyed by an `_a`/
//! `_b`/`_c` suffix. This groups three satellites per `(iod_a)` cycle
//! rather than reproducing the source's cross-word bit packing exactly.

use crate::descriptor::{FieldDescriptor as FD, Layout};
use crate::uuid::Uuid;

/// Word type 1: `t_oe, m_zero, e, sqrt_a`.
pub static WORD1: &[(&str, FD)] = &[
    ("toe", FD::unsigned_scaled(16, 14, 60.0)),
    ("m_zero", FD::twos_complement(30, 32, 4.656_612_873_077_39e-10)), // 2^-31
    ("e", FD::unsigned_scaled(62, 32, 2.328_306_436_538_7e-10)), // 2^-32
    ("sqrt_a", FD::unsigned_scaled(94, 32, 1.907_348_632_812_5e-6)), // 2^-19
];

/// Word type 2: `i_zero, omega_zero, omega, i_dot`.
pub static WORD2: &[(&str, FD)] = &[
    ("i_zero", FD::twos_complement(16, 32, 4.656_612_873_077_39e-10)),
    ("omega_zero", FD::twos_complement(48, 32, 4.656_612_873_077_39e-10)),
    ("omega", FD::twos_complement(80, 32, 4.656_612_873_077_39e-10)),
    ("i_dot", FD::twos_complement(112, 14, 1.136_868_377_216_16e-13)), // 2^-43
];

/// Word type 3: `omega_dot, delta_n, crc, crs, cuc, cus`.
pub static WORD3: &[(&str, FD)] = &[
    ("omega_dot", FD::twos_complement(16, 24, 1.136_868_377_216_16e-13)),
    ("delta_n", FD::twos_complement(40, 16, 1.136_868_377_216_16e-13)),
    ("crc", FD::twos_complement(56, 16, 0.031_25)), // 2^-5
    ("crs", FD::twos_complement(72, 16, 0.031_25)),
    ("cuc", FD::twos_complement(88, 16, 1.862_645_149_230_96e-9)), // 2^-29
    ("cus", FD::twos_complement(104, 16, 1.862_645_149_230_96e-9)),
];

/// Word type 4: `cic, cis`.
pub static WORD4: &[(&str, FD)] = &[
    ("cic", FD::twos_complement(16, 16, 1.862_645_149_230_96e-9)),
    ("cis", FD::twos_complement(32, 16, 1.862_645_149_230_96e-9)),
];

/// Word type 7: almanac satellite A.
pub static WORD7: &[(&str, FD)] = &[
    ("alm_sv_id", FD::unsigned(22, 6)),
    ("delta_sqrt_a", FD::twos_complement(32, 13, 1.953_125e-3)), // 2^-9
    ("e", FD::unsigned_scaled(45, 11, 1.525_878_906_25e-5)), // 2^-16
    ("omega", FD::twos_complement(56, 16, 3.051_757_812_5e-5)), // 2^-15
    ("delta_i", FD::twos_complement(72, 11, 6.103_515_625e-5)), // 2^-14
    ("omega_zero", FD::twos_complement(83, 16, 3.051_757_812_5e-5)),
    ("omega_dot", FD::twos_complement(99, 11, 1.164_153_218_269_47e-10)), // 2^-33
    ("m_zero", FD::twos_complement(110, 16, 3.051_757_812_5e-5)),
];

/// Word type 8: almanac satellite B (same field set as [`WORD7`]).
pub static WORD8: &[(&str, FD)] = &[
    ("alm_sv_id", FD::unsigned(43, 6)),
    ("delta_sqrt_a", FD::twos_complement(32, 13, 1.953_125e-3)),
    ("e", FD::unsigned_scaled(45, 11, 1.525_878_906_25e-5)),
    ("omega", FD::twos_complement(56, 16, 3.051_757_812_5e-5)),
    ("delta_i", FD::twos_complement(72, 11, 6.103_515_625e-5)),
    ("omega_zero", FD::twos_complement(83, 16, 3.051_757_812_5e-5)),
    ("omega_dot", FD::twos_complement(99, 11, 1.164_153_218_269_47e-10)),
    ("m_zero", FD::twos_complement(110, 16, 3.051_757_812_5e-5)),
];

/// Word type 9: almanac satellite C (same field set as [`WORD7`]).
pub static WORD9: &[(&str, FD)] = &[
    ("alm_sv_id", FD::unsigned(71, 6)),
    ("delta_sqrt_a", FD::twos_complement(32, 13, 1.953_125e-3)),
    ("e", FD::unsigned_scaled(45, 11, 1.525_878_906_25e-5)),
    ("omega", FD::twos_complement(56, 16, 3.051_757_812_5e-5)),
    ("delta_i", FD::twos_complement(72, 11, 6.103_515_625e-5)),
    ("omega_zero", FD::twos_complement(83, 16, 3.051_757_812_5e-5)),
    ("omega_dot", FD::twos_complement(99, 11, 1.164_153_218_269_47e-10)),
    ("m_zero", FD::twos_complement(110, 16, 3.051_757_812_5e-5)),
];

/// Word type 10: shared reference epoch plus all three satellites'
/// clock/health terms.
pub static WORD10: &[(&str, FD)] = &[
    ("toa", FD::unsigned_scaled(16, 10, 600.0)),
    ("wn_a", FD::unsigned(26, 2)),
    ("af0_a", FD::twos_complement(28, 16, 1.907_348_632_812_5e-6)), // 2^-19
    ("af1_a", FD::twos_complement(44, 13, 3.552_713_678_800_5e-15)), // 2^-38
    ("e5b_hs_a", FD::unsigned(57, 2)),
    ("e1b_hs_a", FD::unsigned(59, 2)),
    ("af0_b", FD::twos_complement(61, 16, 1.907_348_632_812_5e-6)),
    ("af1_b", FD::twos_complement(77, 13, 3.552_713_678_800_5e-15)),
    ("e5b_hs_b", FD::unsigned(90, 2)),
    ("e1b_hs_b", FD::unsigned(92, 2)),
    ("af0_c", FD::twos_complement(94, 16, 1.907_348_632_812_5e-6)),
    ("af1_c", FD::twos_complement(110, 13, 3.552_713_678_800_5e-15)),
    ("e5b_hs_c", FD::unsigned(123, 2)),
    ("e1b_hs_c", FD::unsigned(125, 2)),
];

pub fn resolve(uuid: &Uuid) -> Option<Layout> {
    match uuid.display_tag() {
        1 => Some(WORD1),
        2 => Some(WORD2),
        3 => Some(WORD3),
        4 => Some(WORD4),
        7 => Some(WORD7),
        8 => Some(WORD8),
        9 => Some(WORD9),
        10 => Some(WORD10),
        _ => None,
    }
}

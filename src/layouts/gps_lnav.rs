//! GPS L-NAV subframe layouts.
//!
//! Subframes 2 and 3 each carry half of the broadcast ephemeris; subframes
//! 4 and 5 carry almanac pages that, for every slot this crate builds
//! records for, share one physical field layout (`ALMANAC_PAGE`) — so a
//! single table serves every page instead of transcribing the source's
//! full page-to-sheet collapsing table.

use crate::descriptor::{FieldDescriptor as FD, Layout};
use crate::uuid::Uuid;

/// Subframe 2: `iode, crs, delta_n, m_zero, cuc, e, cus, sqrt_a, toe`.
pub static EPHEMERIS_SF2: &[(&str, FD)] = &[
    ("iode", FD::unsigned(60, 8)),
    ("crs", FD::twos_complement(68, 16, 0.031_25)), // 2^-5
    ("delta_n", FD::twos_complement(84, 16, 1.136_868_377_216_16e-13)), // 2^-43
    ("m_zero_msb", FD::twos_complement(100, 8, 4.656_612_873_077_39e-10)), // 2^-31
    ("m_zero_lsb", FD::unsigned(108, 24)),
    ("cuc", FD::twos_complement(132, 16, 1.862_645_149_230_96e-9)), // 2^-29
    ("e_msb", FD::unsigned_scaled(148, 8, 1.164_153_218_269_47e-10)), // 2^-33
    ("e_lsb", FD::unsigned(156, 24)),
    ("cus", FD::twos_complement(180, 16, 1.862_645_149_230_96e-9)), // 2^-29
    ("sqrt_a_msb", FD::unsigned_scaled(196, 8, 1.907_348_632_812_5e-6)), // 2^-19
    ("sqrt_a_lsb", FD::unsigned(204, 24)),
    ("toe", FD::unsigned_scaled(228, 16, 16.0)), // 2^4
];

/// Subframe 3: `cic, omega_zero, cis, i_zero, crc, omega, omega_dot, idot`.
pub static EPHEMERIS_SF3: &[(&str, FD)] = &[
    ("cic", FD::twos_complement(60, 16, 1.862_645_149_230_96e-9)),
    ("omega_zero_msb", FD::twos_complement(76, 8, 4.656_612_873_077_39e-10)), // 2^-31
    ("omega_zero_lsb", FD::unsigned(84, 24)),
    ("cis", FD::twos_complement(108, 16, 1.862_645_149_230_96e-9)),
    ("i_zero_msb", FD::twos_complement(124, 8, 4.656_612_873_077_39e-10)),
    ("i_zero_lsb", FD::unsigned(132, 24)),
    ("crc", FD::twos_complement(156, 16, 0.031_25)),
    ("omega_msb", FD::twos_complement(172, 8, 4.656_612_873_077_39e-10)),
    ("omega_lsb", FD::unsigned(180, 24)),
    ("omega_dot", FD::twos_complement(204, 24, 1.136_868_377_216_16e-13)),
    ("idot", FD::twos_complement(228, 14, 1.136_868_377_216_16e-13)),
];

/// Every almanac page (subframes 4 and 5) this crate builds records for
/// shares this layout.
pub static ALMANAC_PAGE: &[(&str, FD)] = &[
    ("sv_health", FD::unsigned(68, 8)),
    ("e", FD::unsigned_scaled(76, 16, 4.768_371_582_031_25e-7)), // 2^-21
    ("toa", FD::unsigned_scaled(92, 8, 4_096.0)), // 2^12
    ("delta_i", FD::twos_complement(100, 16, 3.814_697_265_625e-6)), // 2^-18
    ("omega_dot", FD::twos_complement(116, 16, 3.637_978_807_091_71e-12)), // 2^-38
    ("sqrt_a", FD::unsigned_scaled(132, 24, 4.882_812_5e-4)), // 2^-11
    ("omega_zero", FD::twos_complement(156, 24, 1.192_092_895_507_81e-7)), // 2^-23
    ("omega", FD::twos_complement(180, 24, 1.192_092_895_507_81e-7)),
    ("m_zero", FD::twos_complement(204, 24, 1.192_092_895_507_81e-7)),
    ("af0_msb", FD::twos_complement(228, 8, 4.656_612_873_077_39e-10)), // 2^-31
    ("af0_lsb", FD::unsigned(236, 3)),
    ("af1", FD::twos_complement(239, 11, 3.637_978_807_091_71e-12)), // 2^-38
];

const SF2_LEGACY: u32 = 50;
const SF3_LEGACY: u32 = 75;

/// Resolves a GPS L-NAV [`Uuid`] to its layout. Almanac pages are
/// distinguished from ephemeris subframes by `subframe` (4 or 5); within
/// an almanac subframe every page shares [`ALMANAC_PAGE`].
pub fn resolve(uuid: &Uuid) -> Option<Layout> {
    match uuid.display_tag() {
        SF2_LEGACY => Some(EPHEMERIS_SF2),
        SF3_LEGACY => Some(EPHEMERIS_SF3),
        _ if uuid.subframe == 4 || uuid.subframe == 5 => Some(ALMANAC_PAGE),
        _ => None,
    }
}

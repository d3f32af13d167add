//! GLONASS string layouts.
//!
//! Strings 1-4 carry ephemeris, one quarter each. Strings 6-15 carry
//! almanac for up to 24 satellites in five frames of five string-pairs;
//! every "first of pair" string (6, 8, 10, 12, 14) shares [`ALMANAC_A`]
//! and every "second of pair" string (7, 9, 11, 13, 15) shares
//! [`ALMANAC_B`], so two tables cover all ten string numbers.

use crate::descriptor::{FieldDescriptor as FD, Layout};
use crate::uuid::Uuid;

/// String 1: `t_k_hour, t_k_min, t_k_sec, x_n, x_dot_n, x_dot_dot_n, p1`.
pub static STRING1: &[(&str, FD)] = &[
    ("string_number", FD::unsigned(81, 4)),
    ("t_k_hour", FD::unsigned(0, 5)),
    ("t_k_min", FD::unsigned(5, 6)),
    ("t_k_sec", FD::unsigned_scaled(11, 1, 30.0)),
    ("x_n", FD::signed_magnitude(12, 26, 4.882_812_5e-4)), // 2^-11
    ("x_dot_n", FD::signed_magnitude(38, 24, 9.536_743_164_062_5e-7)), // 2^-20
    ("x_dot_dot_n", FD::signed_magnitude(62, 5, 9.313_225_746_154_79e-10)), // 2^-30
    ("p1", FD::unsigned(67, 2)),
];

/// String 2: `t_b, b_n, y_n, y_dot_n, y_dot_dot_n, p2`.
pub static STRING2: &[(&str, FD)] = &[
    ("string_number", FD::unsigned(81, 4)),
    ("t_b", FD::unsigned_scaled(0, 7, 900.0)),
    ("b_n", FD::unsigned(7, 3)),
    ("p2", FD::unsigned(10, 1)),
    ("y_n", FD::signed_magnitude(11, 27, 4.882_812_5e-4)),
    ("y_dot_n", FD::signed_magnitude(38, 24, 9.536_743_164_062_5e-7)),
    ("y_dot_dot_n", FD::signed_magnitude(62, 5, 9.313_225_746_154_79e-10)),
];

/// String 3: `gamma_n, p, l_3rd_n, z_n, z_dot_n, z_dot_dot_n, p3`.
pub static STRING3: &[(&str, FD)] = &[
    ("string_number", FD::unsigned(81, 4)),
    ("gamma_n", FD::signed_magnitude(0, 11, 9.094_947_017_729_28e-13)), // 2^-40
    ("p", FD::unsigned(11, 2)),
    ("l_3rd_n", FD::unsigned(13, 1)),
    ("z_n", FD::signed_magnitude(14, 27, 4.882_812_5e-4)),
    ("z_dot_n", FD::signed_magnitude(41, 24, 9.536_743_164_062_5e-7)),
    ("z_dot_dot_n", FD::signed_magnitude(65, 5, 9.313_225_746_154_79e-10)),
    ("p3", FD::unsigned(70, 1)),
];

/// String 4: `tau_n, delta_tau_n, e_n, m, n_t, n, f_t, p4`.
pub static STRING4: &[(&str, FD)] = &[
    ("string_number", FD::unsigned(81, 4)),
    ("tau_n", FD::signed_magnitude(0, 22, 9.313_225_746_154_79e-10)), // 2^-30
    ("delta_tau_n", FD::signed_magnitude(22, 5, 9.313_225_746_154_79e-10)),
    ("e_n", FD::unsigned(27, 5)),
    ("m", FD::unsigned(32, 2)),
    ("n_t", FD::unsigned(34, 11)),
    ("n", FD::unsigned(45, 5)),
    ("f_t", FD::unsigned(50, 4)),
    ("p4", FD::unsigned(54, 1)),
];

/// First string of an almanac pair (6, 8, 10, 12, 14): the satellite
/// identity and the fields the source keys off that first string.
pub static ALMANAC_A: &[(&str, FD)] = &[
    ("string_number", FD::unsigned(81, 4)),
    ("n_a", FD::unsigned(0, 5)),
    ("m_n_a", FD::unsigned(5, 2)),
    ("lambda_n_a", FD::signed_magnitude(7, 21, 9.536_743_164_062_5e-7)), // 2^-20
    ("delta_i_n_a", FD::signed_magnitude(28, 18, 9.536_743_164_062_5e-7)),
    ("epsilon_n_a", FD::unsigned_scaled(46, 15, 9.536_743_164_062_5e-7)),
    ("tau_n_a", FD::signed_magnitude(61, 10, 3.814_697_265_625e-6)), // 2^-18
    ("c_n_a", FD::unsigned(71, 1)),
];

/// Second string of an almanac pair (7, 9, 11, 13, 15): carrier number,
/// reference time and clock/health terms.
pub static ALMANAC_B: &[(&str, FD)] = &[
    ("string_number", FD::unsigned(81, 4)),
    ("h_n_a", FD::unsigned(0, 5)),
    ("t_lambda_n_a", FD::unsigned_scaled(5, 21, 3.125e-2)), // 2^-5
    ("delta_t_n_a", FD::signed_magnitude(26, 22, 1.953_125e-3)), // 2^-9
    ("delta_t_dot_n_a", FD::signed_magnitude(48, 7, 6.103_515_625e-5)), // 2^-14
    ("omega_n_a", FD::signed_magnitude(55, 16, 3.051_757_812_5e-5)), // 2^-15
    ("l_n", FD::unsigned(71, 1)),
];

pub fn resolve(uuid: &Uuid) -> Option<Layout> {
    match uuid.display_tag() {
        1 => Some(STRING1),
        2 => Some(STRING2),
        3 => Some(STRING3),
        4 => Some(STRING4),
        n if (6..=15).contains(&n) && n % 2 == 0 => Some(ALMANAC_A),
        n if (6..=15).contains(&n) && n % 2 == 1 => Some(ALMANAC_B),
        _ => None,
    }
}

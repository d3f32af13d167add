//! Galileo I-NAV ephemeris and almanac records.

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalileoEphemeris {
    pub sv_id: u16,
    pub toe: f64,
    pub m_zero: f64,
    pub e: f64,
    pub sqrt_a: f64,
    pub i_zero: f64,
    pub omega_zero: f64,
    pub omega: f64,
    pub i_dot: f64,
    pub omega_dot: f64,
    pub delta_n: f64,
    pub crc: f64,
    pub crs: f64,
    pub cuc: f64,
    pub cus: f64,
    pub cic: f64,
    pub cis: f64,
}

/// One of the three satellites carried per almanac set (word types
/// 7-10, sharing one `iod_a`).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalileoAlmanac {
    pub sv_id: u16,
    pub toa: f64,
    pub wn_a: i128,
    pub delta_sqrt_a: f64,
    pub e: f64,
    pub omega: f64,
    pub delta_i: f64,
    pub omega_zero: f64,
    pub omega_dot: f64,
    pub m_zero: f64,
    pub af0: f64,
    pub af1: f64,
    pub e5b_hs: i128,
    pub e1b_hs: i128,
}

//! BeiDou D1 ephemeris and almanac records.

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeiDouEphemeris {
    pub prn: u16,
    pub aode: i128,
    pub t_oc: f64,
    pub a0: f64,
    pub a1: f64,
    pub a2: f64,
    pub sqrt_a: f64,
    pub e: f64,
    pub delta_n: f64,
    pub m_zero: f64,
    pub cuc: f64,
    pub cus: f64,
    pub crc: f64,
    pub crs: f64,
    pub toe: f64,
    pub omega: f64,
    pub omega_zero: f64,
    pub omega_dot: f64,
    pub i_zero: f64,
    pub idot: f64,
    pub cic: f64,
    pub cis: f64,
}

/// A base-constellation (PRN 1-30) or gated extended-constellation (PRN
/// 31-63) almanac slot; the two share every field but the satellite
/// identity and where their health bit came from.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeiDouAlmanac {
    pub prn: u16,
    pub healthy: bool,
    pub toa: f64,
    pub sqrt_a: f64,
    pub e: f64,
    pub omega: f64,
    pub m_zero: f64,
    pub omega_zero: f64,
    pub omega_dot: f64,
    pub delta_i: f64,
    pub a0: f64,
    pub a1: f64,
}

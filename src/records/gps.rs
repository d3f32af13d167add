//! GPS L-NAV and C-NAV ephemeris and almanac records.

/// GPS L-NAV broadcast ephemeris, assembled from subframes 2 and 3.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpsEphemeris {
    pub prn: u16,
    pub iode: i128,
    pub crs: f64,
    pub delta_n: f64,
    pub m_zero: f64,
    pub cuc: f64,
    pub e: f64,
    pub cus: f64,
    pub sqrt_a: f64,
    pub toe: f64,
    pub cic: f64,
    pub omega_zero: f64,
    pub cis: f64,
    pub i_zero: f64,
    pub crc: f64,
    pub omega: f64,
    pub omega_dot: f64,
    pub idot: f64,
}

/// GPS C-NAV ephemeris (messages 10/11). A standalone record rather than
/// [`GpsEphemeris`] plus extras: C-NAV parameterizes the orbit
/// differently (`delta_a`/`a_dot` in place of `sqrt_a`, no `iode`), so
/// forcing it through the L-NAV shape would leave fields with no real
/// meaning.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CNavGpsEphemeris {
    pub prn: u16,
    pub wn: i128,
    pub ura_ed: i128,
    pub sig_health_l1: bool,
    pub sig_health_l2: bool,
    pub sig_health_l5: bool,
    pub top: f64,
    pub toe: f64,
    pub delta_a: f64,
    pub a_dot: f64,
    pub delta_n: f64,
    pub delta_n_dot: f64,
    pub m_zero: f64,
    pub e: f64,
    pub cuc: f64,
    pub cus: f64,
    pub cic: f64,
    pub cis: f64,
    pub crc: f64,
    pub crs: f64,
    pub omega_zero: f64,
    pub i_zero: f64,
    pub omega: f64,
    pub i_dot: f64,
    pub delta_omega_dot: f64,
}

/// GPS L-NAV almanac entry (subframes 4/5, one page per satellite).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpsAlmanac {
    pub prn: u16,
    pub sv_health: i128,
    pub e: f64,
    pub toa: f64,
    pub delta_i: f64,
    pub omega_dot: f64,
    pub sqrt_a: f64,
    pub omega_zero: f64,
    pub omega: f64,
    pub m_zero: f64,
    pub af0: f64,
    pub af1: f64,
}

/// GPS C-NAV midi almanac (message type 37): fewer bits, fewer fields,
/// one satellite per message.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CNavMidiAlmanac {
    pub prn: u16,
    pub sig_health_l1: bool,
    pub sig_health_l2: bool,
    pub sig_health_l5: bool,
    pub toa: f64,
    pub e: f64,
    pub sqrt_a: f64,
    pub omega_zero: f64,
    pub omega: f64,
    pub m_zero: f64,
    pub af0: f64,
    pub af1: f64,
}

/// One entry from a GPS C-NAV reduced-almanac packet (message types 12,
/// 31): a coarse orbit description for a satellite other than the
/// broadcaster.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CNavReducedAlmanac {
    pub prn: u16,
    pub healthy: bool,
    pub delta_a: f64,
    pub omega_zero: f64,
    pub phi_zero: f64,
}

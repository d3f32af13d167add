//! GLONASS ephemeris and almanac records.

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlonassEphemeris {
    pub slot: u16,
    pub string_number: i128,
    pub t_k_hour: i128,
    pub t_k_min: i128,
    pub t_k_sec: f64,
    pub t_b: f64,
    pub m: i128,
    pub gamma_n: f64,
    pub tau_n: f64,
    pub x_n: f64,
    pub y_n: f64,
    pub z_n: f64,
    pub x_dot_n: f64,
    pub y_dot_n: f64,
    pub z_dot_n: f64,
    pub x_dot_dot_n: f64,
    pub y_dot_dot_n: f64,
    pub z_dot_dot_n: f64,
    pub b_n: i128,
    pub p: i128,
    pub n_t: i128,
    pub f_t: i128,
    pub n: i128,
    pub delta_tau_n: f64,
    pub e_n: i128,
    pub p1: i128,
    pub p2: i128,
    pub p3: i128,
    pub p4: i128,
    pub l_3rd_n: i128,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlonassAlmanac {
    pub slot: u16,
    pub h_n_a: i128,
    pub lambda_n_a: f64,
    pub t_lambda_n_a: f64,
    pub delta_i_n_a: f64,
    pub delta_t_n_a: f64,
    pub delta_t_dot_n_a: f64,
    pub epsilon_n_a: f64,
    pub omega_n_a: f64,
    pub m_n_a: i128,
    pub tau_n_a: f64,
    pub c_n_a: i128,
    pub l_n: i128,
}

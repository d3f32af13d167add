//! Builds GPS C-NAV ephemeris, midi almanac and reduced-almanac records.

#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::accumulator::Accumulator;
use crate::error::NavMsgError;
use crate::records::gps::{CNavGpsEphemeris, CNavMidiAlmanac, CNavReducedAlmanac};
use crate::uuid::{Constellation, Uuid};

const MSG10: u32 = 10;
const MSG11: u32 = 11;
const MSG37: u32 = 37;

/// Requires messages 10 and 11 for the same PRN; returns
/// `Err(DecodingFailed)` if both are present but disagree on `toe`
/// rather than silently preferring one.
pub fn build_ephemeris(
    acc: &Accumulator,
    prn: u16,
) -> Result<Option<CNavGpsEphemeris>, NavMsgError> {
    let msg10 = Uuid::new(Constellation::GpsCNav, 0, 0, prn, MSG10);
    let msg11 = Uuid::new(Constellation::GpsCNav, 0, 0, prn, MSG11);

    let (toe10, toe11) = match (acc.get_f64(&msg10, "toe"), acc.get_f64(&msg11, "toe")) {
        (Some(a), Some(b)) => (a, b),
        _ => return Ok(None),
    };
    if (toe10 - toe11).abs() > f64::EPSILON {
        return Err(NavMsgError::DecodingFailed {
            uuid: msg11,
            reason: "toe disagrees between gps c-nav messages 10 and 11",
        });
    }

    let fields = (|| {
        Some(CNavGpsEphemeris {
            prn,
            wn: acc.get_i128(&msg10, "wn")?,
            ura_ed: acc.get_i128(&msg10, "ura_ed")?,
            sig_health_l1: acc.get_i128(&msg10, "sig_health_l1")? != 0,
            sig_health_l2: acc.get_i128(&msg10, "sig_health_l2")? != 0,
            sig_health_l5: acc.get_i128(&msg10, "sig_health_l5")? != 0,
            top: acc.get_f64(&msg10, "top")?,
            toe: toe10,
            delta_a: acc.get_f64(&msg10, "delta_a")?,
            a_dot: acc.get_f64(&msg10, "a_dot")?,
            delta_n: acc.get_f64(&msg10, "delta_n")?,
            delta_n_dot: acc.get_f64(&msg10, "delta_n_dot")?,
            m_zero: acc.get_f64(&msg10, "m_zero")?,
            e: acc.get_f64(&msg10, "e")?,
            cuc: acc.get_f64(&msg11, "cuc")?,
            cus: acc.get_f64(&msg11, "cus")?,
            cic: acc.get_f64(&msg11, "cic")?,
            cis: acc.get_f64(&msg11, "cis")?,
            crc: acc.get_f64(&msg11, "crc")?,
            crs: acc.get_f64(&msg11, "crs")?,
            omega_zero: acc.get_f64(&msg11, "omega_zero")?,
            i_zero: acc.get_f64(&msg11, "i_zero")?,
            omega: acc.get_f64(&msg11, "omega")?,
            i_dot: acc.get_f64(&msg11, "idot")?,
            delta_omega_dot: acc.get_f64(&msg11, "delta_omega_dot")?,
        })
    })();
    Ok(fields)
}

pub fn build_midi_almanacs(acc: &Accumulator) -> Vec<CNavMidiAlmanac> {
    let mut out = Vec::new();
    for uuid in acc.uuids() {
        if uuid.constellation != Constellation::GpsCNav || uuid.display_tag() != MSG37 {
            continue;
        }
        let prn = uuid.page;
        let built = (|| {
            Some(CNavMidiAlmanac {
                prn,
                sig_health_l1: acc.get_i128(&uuid, "sig_health_l1")? != 0,
                sig_health_l2: acc.get_i128(&uuid, "sig_health_l2")? != 0,
                sig_health_l5: acc.get_i128(&uuid, "sig_health_l5")? != 0,
                toa: acc.get_f64(&uuid, "toa")?,
                e: acc.get_f64(&uuid, "e")?,
                sqrt_a: acc.get_f64(&uuid, "sqrt_a")?,
                omega_zero: acc.get_f64(&uuid, "omega_zero")?,
                omega: acc.get_f64(&uuid, "omega")?,
                m_zero: acc.get_f64(&uuid, "m_zero")?,
                af0: acc.get_f64(&uuid, "af0")?,
                af1: acc.get_f64(&uuid, "af1")?,
            })
        })();
        out.extend(built);
    }
    out
}

/// Reads every packed entry out of a message-type-31 or -12 reduced
/// almanac broadcast by `prn`, skipping entries whose PRN field is 0
/// (unused slot).
pub fn build_reduced_almanacs(acc: &Accumulator, prn: u16, message_type: u32) -> Vec<CNavReducedAlmanac> {
    let uuid = Uuid::new(Constellation::GpsCNav, 0, 0, prn, message_type);
    let entry_count = if message_type == 12 { 7 } else { 4 };
    let mut out = Vec::new();
    for i in 1..=entry_count {
        let prefix: String = format!("red_alm_{i}");
        let built = (|| {
            let sv_id = acc.get_i128(&uuid, &format!("{prefix}.sv_id"))?;
            if sv_id == 0 {
                return None;
            }
            Some(CNavReducedAlmanac {
                prn: sv_id as u16,
                healthy: acc.get_i128(&uuid, &format!("{prefix}.l1_health"))? == 0,
                delta_a: acc.get_f64(&uuid, &format!("{prefix}.delta_a"))?,
                omega_zero: acc.get_f64(&uuid, &format!("{prefix}.omega_zero"))?,
                phi_zero: acc.get_f64(&uuid, &format!("{prefix}.phi_zero"))?,
            })
        })();
        out.extend(built);
    }
    out
}

//! Top-level ingest/decode surface (C7).
//!
//! [`Dispatcher`] owns one [`Accumulator`] per broadcasting satellite
//! (`(Gnss, prn)`) and drives the whole pipeline: stitching raw
//! data-words into a [`Frame`], rejecting frames upstream framing
//! already marks as unusable, identifying the frame, decoding it against
//! its layout, and folding the result into that satellite's
//! accumulator. [`Dispatcher::decoded`] then asks every builder what it
//! can make of the accumulator's current contents.
//!
//! Deliberately not `Sync`: nothing here is safe to drive from more than
//! one thread at a time, the same way the upstream decoder this is
//! modeled on is a single cooperative loop, not a concurrent service.

#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::collections::BTreeMap;

use crate::accumulator::Accumulator;
use crate::bits::{DecodedValue, Frame};
use crate::builders::{beidou_d1, galileo, glonass, gps_cnav, gps_lnav};
use crate::decode::decode;
use crate::error::NavMsgError;
use crate::gnss::{Gnss, SignalId};
use crate::identify;
use crate::layouts;
use crate::records::beidou::{BeiDouAlmanac, BeiDouEphemeris};
use crate::records::galileo::{GalileoAlmanac, GalileoEphemeris};
use crate::records::glonass::{GlonassAlmanac, GlonassEphemeris};
use crate::records::gps::{CNavGpsEphemeris, CNavMidiAlmanac, CNavReducedAlmanac, GpsAlmanac, GpsEphemeris};
use crate::uuid::{Constellation, Uuid};

/// Per-satellite bookkeeping on top of the raw accumulated fields: the
/// most recent ephemeris/almanac grouping keys, which arrive via the
/// frame stream itself rather than as an ingest parameter.
#[derive(Debug, Default)]
struct Stream {
    acc: Accumulator,
    galileo_iod: Option<u16>,
    galileo_iod_a: Option<u16>,
}

/// Every record kind a satellite's accumulated frames might yield.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decoded {
    GpsEphemeris(GpsEphemeris),
    GpsCNavEphemeris(CNavGpsEphemeris),
    GpsAlmanac(GpsAlmanac),
    CNavMidiAlmanac(CNavMidiAlmanac),
    CNavReducedAlmanac(CNavReducedAlmanac),
    GalileoEphemeris(GalileoEphemeris),
    GalileoAlmanac(GalileoAlmanac),
    GlonassEphemeris(GlonassEphemeris),
    GlonassAlmanac(GlonassAlmanac),
    BeiDouEphemeris(BeiDouEphemeris),
    BeiDouAlmanac(BeiDouAlmanac),
}

#[derive(Debug, Default)]
pub struct Dispatcher {
    streams: BTreeMap<(Gnss, u16), Stream>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Dispatcher {
            streams: BTreeMap::new(),
        }
    }

    /// Ingests the raw data-words for one frame from `prn`'s broadcast on
    /// `signal`. Returns `Ok(true)` if the frame was identified, decoded,
    /// and folded into that satellite's accumulator; `Ok(false)` if the
    /// frame was recognized but could not be stored (GLONASS strings
    /// 6-15 with no `frame_number` supplied); `Err` for a structural
    /// problem with the frame itself.
    ///
    /// `frame_number` is required to place GLONASS almanac strings (6-15)
    /// into their frame-of-five, and ignored otherwise.
    pub fn ingest(
        &mut self,
        signal: SignalId,
        prn: u16,
        data_words: &[u32],
        frame_number: Option<u32>,
    ) -> Result<bool, NavMsgError> {
        let gnss = signal.gnss();

        match gnss {
            Gnss::BeiDou => {
                if (1..=5).contains(&prn) || (59..=63).contains(&prn) {
                    return Err(NavMsgError::Unsupported {
                        reason: "beidou d2 geo satellites are not decoded",
                    });
                }
            }
            Gnss::Galileo => {
                if data_words.len() < 5 {
                    return Err(NavMsgError::MalformedFrame {
                        reason: "galileo i-nav frame needs at least 5 data words",
                    });
                }
                let even_odd_1 = (data_words[0] >> 31) & 1;
                let page_type_1 = (data_words[0] >> 30) & 1;
                let even_odd_2 = (data_words[4] >> 31) & 1;
                let page_type_2 = (data_words[4] >> 30) & 1;
                if even_odd_1 != 0 || even_odd_2 == 0 || page_type_1 != 0 || page_type_2 != 0 {
                    return Err(NavMsgError::MalformedFrame {
                        reason: "galileo i-nav even/odd or alert-page invariant failed",
                    });
                }
            }
            _ => {}
        }

        let frame = match gnss {
            Gnss::Gps => Frame::from_30bit_words(data_words),
            Gnss::BeiDou => Frame::from_30bit_words(data_words),
            Gnss::Glonass => Frame::from_glonass_words(data_words),
            Gnss::Galileo => Frame::from_galileo_words(data_words),
        };

        let uuid = match gnss {
            Gnss::Gps if signal.is_gps_cnav() => identify::gps_cnav(&frame)?,
            Gnss::Gps => identify::gps_lnav(&frame)?,
            Gnss::Galileo => identify::galileo_inav(&frame)?,
            Gnss::Glonass => identify::glonass(&frame)?,
            Gnss::BeiDou => identify::beidou_d1(&frame)?,
        };

        if uuid.constellation == Constellation::Glonass && uuid.subframe >= 6 && frame_number.is_none()
        {
            return Ok(false);
        }

        let layout = match layouts::resolve(&uuid) {
            Some(layout) => layout,
            None => return Ok(false), // UnknownLayout: recognized, but nothing to decode it with
        };

        let decoded = decode(&frame, layout)?;
        let stream = self.streams.entry((gnss, prn)).or_default();
        stream.acc.store(uuid, &decoded);

        if uuid.constellation == Constellation::GalileoINav {
            match uuid.display_tag() {
                1..=4 => stream.galileo_iod = Some(uuid.extra),
                7..=10 => stream.galileo_iod_a = Some(uuid.extra),
                _ => {}
            }
        }

        Ok(true)
    }

    /// Every record this satellite's accumulated frames currently
    /// support. Ephemeris/almanac gaps simply omit the corresponding
    /// entries; a GPS C-NAV `toe` mismatch between messages 10 and 11 is
    /// the one case that surfaces as an `Err`.
    pub fn decoded(&self, gnss: Gnss, prn: u16) -> Result<Vec<Decoded>, NavMsgError> {
        let stream = match self.streams.get(&(gnss, prn)) {
            Some(stream) => stream,
            None => return Ok(Vec::new()),
        };
        let acc = &stream.acc;
        let mut out = Vec::new();

        match gnss {
            Gnss::Gps => {
                if let Some(e) = gps_lnav::build_ephemeris(acc, prn) {
                    out.push(Decoded::GpsEphemeris(e));
                }
                out.extend(gps_lnav::build_almanacs(acc).into_iter().map(Decoded::GpsAlmanac));
                if let Some(e) = gps_cnav::build_ephemeris(acc, prn)? {
                    out.push(Decoded::GpsCNavEphemeris(e));
                }
                out.extend(
                    gps_cnav::build_midi_almanacs(acc)
                        .into_iter()
                        .map(Decoded::CNavMidiAlmanac),
                );
                for message_type in [31, 12] {
                    out.extend(
                        gps_cnav::build_reduced_almanacs(acc, prn, message_type)
                            .into_iter()
                            .map(Decoded::CNavReducedAlmanac),
                    );
                }
            }
            Gnss::Galileo => {
                if let Some(iod) = stream.galileo_iod {
                    if let Some(e) = galileo::build_ephemeris(acc, prn, iod) {
                        out.push(Decoded::GalileoEphemeris(e));
                    }
                }
                if let Some(iod_a) = stream.galileo_iod_a {
                    out.extend(
                        galileo::build_almanacs(acc, iod_a)
                            .into_iter()
                            .map(Decoded::GalileoAlmanac),
                    );
                }
            }
            Gnss::Glonass => {
                if let Some(e) = glonass::build_ephemeris(acc, prn) {
                    out.push(Decoded::GlonassEphemeris(e));
                }
                out.extend(glonass::build_almanacs(acc).into_iter().map(Decoded::GlonassAlmanac));
            }
            Gnss::BeiDou => {
                if let Some(e) = beidou_d1::build_ephemeris(acc, prn) {
                    out.push(Decoded::BeiDouEphemeris(e));
                }
                out.extend(
                    beidou_d1::build_almanacs(acc)
                        .into_iter()
                        .map(Decoded::BeiDouAlmanac),
                );
            }
        }

        Ok(out)
    }

    /// Every `(fingerprint, field name, value)` decoded so far for this
    /// satellite, including fields no typed record surfaces (GPS C-NAV
    /// clock/iono/UTC/EOP parameters among them).
    pub fn raw_fields(&self, gnss: Gnss, prn: u16) -> Vec<(Uuid, String, DecodedValue)> {
        match self.streams.get(&(gnss, prn)) {
            Some(stream) => stream
                .acc
                .fields()
                .map(|(uuid, name, value)| (*uuid, String::from(name), *value))
                .collect(),
            None => Vec::new(),
        }
    }
}

//! Per-constellation static layout tables (C2).
//!
//! Every table here is literal data — an ordered `(name, descriptor)`
//! slice — transcribed once and never touched by decode logic. `resolve`
//! is the `uuid_to_layout` lookup named in spec's Design Notes: it maps a
//! frame fingerprint to the table that decodes it, collapsing the many
//! almanac pages that share one physical layout onto a single table.

pub mod beidou_d1;
pub mod galileo_inav;
pub mod glonass;
pub mod gps_cnav;
pub mod gps_lnav;

use crate::descriptor::Layout;
use crate::uuid::{Constellation, Uuid};

/// Looks up the layout a frame fingerprint decodes against. `None` means
/// the UUID was identified but no layout is registered for it — C5 turns
/// that into a silent, idempotent skip (spec's `UnknownLayout`).
pub fn resolve(uuid: &Uuid) -> Option<Layout> {
    match uuid.constellation {
        Constellation::GpsLNav => gps_lnav::resolve(uuid),
        Constellation::GpsCNav => gps_cnav::resolve(uuid),
        Constellation::GalileoINav => galileo_inav::resolve(uuid),
        Constellation::Glonass => glonass::resolve(uuid),
        Constellation::BeiDouD1 => beidou_d1::resolve(uuid),
        Constellation::BeiDouD2 => None,
    }
}

/// Looks up a named packed-substructure sub-layout (spec's "packed
/// substructure" field-name convention), independent of constellation —
/// substructure keys are unique crate-wide.
pub fn resolve_substructure(key: &str) -> Option<Layout> {
    match key {
        "red_alm_item" => Some(gps_cnav::RED_ALM_ITEM),
        _ => None,
    }
}

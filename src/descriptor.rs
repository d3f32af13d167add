//! Field descriptors and layouts (C2).
//!
//! A [`Layout`] is literal data — an ordered slice of `(name, descriptor)`
//! pairs transcribed from a constellation's interface control document.
//! There is no logic here beyond the types themselves; `layouts/` holds
//! the actual tables.

use crate::bits::{sign_and_scale, DecodedValue, Frame, Sign};

/// One field within a frame layout.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    pub start: u16,
    pub len: u16,
    pub sign: Sign,
    pub scale: Option<f64>,
    /// Set when this field's decoded bits are themselves a bit string to
    /// be re-decoded against the named sub-layout (a packed
    /// substructure, e.g. GPS C-NAV's reduced-almanac packets).
    pub substructure: Option<&'static str>,
}

impl FieldDescriptor {
    pub const fn unsigned(start: u16, len: u16) -> Self {
        FieldDescriptor {
            start,
            len,
            sign: Sign::Unsigned,
            scale: None,
            substructure: None,
        }
    }

    pub const fn unsigned_scaled(start: u16, len: u16, scale: f64) -> Self {
        FieldDescriptor {
            start,
            len,
            sign: Sign::Unsigned,
            scale: Some(scale),
            substructure: None,
        }
    }

    pub const fn twos_complement(start: u16, len: u16, scale: f64) -> Self {
        FieldDescriptor {
            start,
            len,
            sign: Sign::TwosComplement,
            scale: Some(scale),
            substructure: None,
        }
    }

    pub const fn twos_complement_raw(start: u16, len: u16) -> Self {
        FieldDescriptor {
            start,
            len,
            sign: Sign::TwosComplement,
            scale: None,
            substructure: None,
        }
    }

    pub const fn signed_magnitude(start: u16, len: u16, scale: f64) -> Self {
        FieldDescriptor {
            start,
            len,
            sign: Sign::SignedMagnitude,
            scale: Some(scale),
            substructure: None,
        }
    }

    pub const fn substructure(start: u16, len: u16, key: &'static str) -> Self {
        FieldDescriptor {
            start,
            len,
            sign: Sign::Unsigned,
            scale: None,
            substructure: Some(key),
        }
    }

    /// `apply_descriptor` from the bit-extractor component: reads this
    /// field out of `frame` and applies its sign rule and scale.
    pub fn apply(&self, frame: &Frame) -> DecodedValue {
        let raw = frame.window(self.start, self.len);
        sign_and_scale(raw, self.len as u32, self.sign, self.scale)
    }
}

/// An ordered field-name -> descriptor mapping, transcribed as static
/// data rather than constructed in code.
pub type Layout = &'static [(&'static str, FieldDescriptor)];

//! Generic frame decoder (C3): applies a [`Layout`] to a [`Frame`],
//! producing a flat list of `(field name, value)` pairs ready for the
//! accumulator.
//!
//! Two conventions are handled uniformly across every constellation
//! rather than re-implemented per layout:
//! - a field named `foo_msb` immediately followed by `foo_lsb` is
//!   concatenated into one value before the `_msb` descriptor's sign and
//!   scale are applied, per the MSB/LSB split several ICDs use for wide
//!   fields;
//! - a field whose descriptor names a `substructure` is re-decoded
//!   against that sub-layout, with its fields stored under
//!   `"<field>.<sub_field>"`.

#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::bits::{append, sign_and_scale, DecodedValue, Frame};
use crate::descriptor::Layout;
use crate::error::NavMsgError;
use crate::layouts::resolve_substructure;

/// Decodes every field in `layout` against `frame`, returning owned
/// field names so a packed substructure's `"<field>.<sub_field>"` name
/// and a plain field's own name share one representation.
pub fn decode(frame: &Frame, layout: Layout) -> Result<Vec<(String, DecodedValue)>, NavMsgError> {
    let mut out = Vec::new();
    let mut i = 0;
    while i < layout.len() {
        let (name, descriptor) = layout[i];

        if let Some(sub_key) = descriptor.substructure {
            let sub_layout = resolve_substructure(sub_key).ok_or(NavMsgError::MalformedLayout {
                reason: "substructure field names an unregistered sub-layout",
            })?;
            let sub_frame = frame.sub(descriptor.start, descriptor.len);
            for (sub_name, value) in decode(&sub_frame, sub_layout)? {
                out.push((format!("{name}.{sub_name}"), value));
            }
            i += 1;
            continue;
        }

        if let Some(prefix) = name.strip_suffix("_msb") {
            let (lsb_name, lsb_descriptor) = layout.get(i + 1).copied().ok_or(
                NavMsgError::MalformedLayout {
                    reason: "_msb field has no following _lsb field",
                },
            )?;
            if lsb_name != format!("{prefix}_lsb") {
                return Err(NavMsgError::MalformedLayout {
                    reason: "_msb field is not immediately followed by its _lsb field",
                });
            }
            let high = frame.window(descriptor.start, descriptor.len);
            let low = frame.window(lsb_descriptor.start, lsb_descriptor.len);
            let combined = append(high, low, lsb_descriptor.len as u32);
            let combined_width = descriptor.len as u32 + lsb_descriptor.len as u32;
            let value = sign_and_scale(combined, combined_width, descriptor.sign, descriptor.scale);
            out.push((prefix.to_string(), value));
            i += 2;
            continue;
        }

        if name.ends_with("_lsb") {
            return Err(NavMsgError::MalformedLayout {
                reason: "_lsb field with no preceding _msb field",
            });
        }

        out.push((name.to_string(), descriptor.apply(frame)));
        i += 1;
    }
    Ok(out)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::descriptor::FieldDescriptor as FD;

    static PAIR: &[(&str, FD)] = &[
        ("m_zero_msb", FD::twos_complement_raw(0, 4)),
        ("m_zero_lsb", FD::unsigned(4, 4)),
    ];

    #[test]
    fn msb_lsb_pair_combines_into_one_value() {
        let mut frame = Frame::zeros(8);
        frame.set_window(0, 4, 0b0001);
        frame.set_window(4, 4, 0b0010);
        let decoded = decode(&frame, PAIR).unwrap();
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].0, "m_zero");
        match decoded[0].1 {
            DecodedValue::Int(v) => assert_eq!(v, 0b0001_0010),
            _ => panic!("expected an integer"),
        }
    }

    static ORPHAN_LSB: &[(&str, FD)] = &[("m_zero_lsb", FD::unsigned(0, 4))];

    #[test]
    fn orphan_lsb_is_malformed_layout() {
        let frame = Frame::zeros(8);
        assert!(decode(&frame, ORPHAN_LSB).is_err());
    }

    static SUBSTRUCTURE_HOLDER: &[(&str, FD)] =
        &[("item", FD::substructure(0, 8, "__decode_test_item"))];

    #[test]
    fn substructure_field_gets_compound_name() {
        // Exercised indirectly through the real gps_cnav substructure
        // table in integration tests; this just checks name formatting
        // would read "item.sv_id" given an unregistered key fails
        // cleanly instead of panicking.
        let frame = Frame::zeros(8);
        assert!(decode(&frame, SUBSTRUCTURE_HOLDER).is_err());
    }
}

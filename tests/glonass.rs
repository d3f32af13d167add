//! End-to-end GLONASS ephemeris and almanac assembly.

use gnss_navmsg::bits::Frame;
use gnss_navmsg::gnss::SignalId;
use gnss_navmsg::{Decoded, Dispatcher};

/// Packs an 85-bit GLONASS string into the four data-words
/// [`Frame::from_glonass_words`] expects (32 + 32 + 21, with the last 11
/// bits of the third word unused).
fn words_from_string(frame: &Frame) -> [u32; 4] {
    let w0 = frame.window(0, 32) as u32;
    let w1 = frame.window(32, 32) as u32;
    let w2 = (frame.window(64, 21) as u32) << 11;
    [w0, w1, w2, 0]
}

fn string_with(string_number: u8, set: impl FnOnce(&mut Frame)) -> Frame {
    let mut frame = Frame::zeros(85);
    frame.set_window(81, 4, string_number as u128);
    set(&mut frame);
    frame
}

#[test]
fn assembles_ephemeris_from_strings_one_through_four() {
    let mut dispatcher = Dispatcher::new();
    let strings = [
        string_with(1, |f| {
            f.set_window(0, 5, 10); // t_k_hour
            f.set_window(5, 6, 20); // t_k_min
        }),
        string_with(2, |f| {
            f.set_window(0, 7, 30); // t_b
        }),
        string_with(3, |f| {
            f.set_window(0, 11, 5); // gamma_n
        }),
        string_with(4, |f| {
            f.set_window(27, 5, 3); // e_n
        }),
    ];

    for string in &strings {
        assert!(dispatcher
            .ingest(SignalId::GlonassL1Of, 7, &words_from_string(string), None)
            .unwrap());
    }

    let decoded = dispatcher.decoded(gnss_navmsg::Gnss::Glonass, 7).unwrap();
    let ephemeris = decoded
        .iter()
        .find_map(|d| match d {
            Decoded::GlonassEphemeris(e) => Some(*e),
            _ => None,
        })
        .expect("ephemeris should assemble once strings 1-4 are ingested");

    assert_eq!(ephemeris.slot, 7);
    assert_eq!(ephemeris.t_k_hour, 10);
    assert_eq!(ephemeris.e_n, 3);
}

#[test]
fn almanac_strings_six_and_seven_without_frame_number_are_not_stored() {
    let mut dispatcher = Dispatcher::new();
    let string6 = string_with(6, |f| f.set_window(0, 5, 3));
    let stored = dispatcher
        .ingest(SignalId::GlonassL1Of, 7, &words_from_string(&string6), None)
        .unwrap();
    assert!(!stored);
}

#[test]
fn almanac_pair_with_frame_number_yields_a_slot() {
    let mut dispatcher = Dispatcher::new();
    let string6 = string_with(6, |f| {
        f.set_window(0, 5, 3); // n_a = slot 3
        f.set_window(5, 2, 1); // m_n_a
    });
    let string7 = string_with(7, |f| {
        f.set_window(0, 5, 1); // h_n_a
    });

    assert!(dispatcher
        .ingest(SignalId::GlonassL1Of, 9, &words_from_string(&string6), Some(1))
        .unwrap());
    assert!(dispatcher
        .ingest(SignalId::GlonassL1Of, 9, &words_from_string(&string7), Some(1))
        .unwrap());

    let decoded = dispatcher.decoded(gnss_navmsg::Gnss::Glonass, 9).unwrap();
    let almanac = decoded
        .iter()
        .find_map(|d| match d {
            Decoded::GlonassAlmanac(a) => Some(*a),
            _ => None,
        })
        .expect("almanac slot should assemble from strings 6 and 7");
    assert_eq!(almanac.slot, 3);
    assert_eq!(almanac.h_n_a, 1);
}

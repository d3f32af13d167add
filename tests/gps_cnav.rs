//! End-to-end GPS C-NAV ephemeris assembly (messages 10/11, matched by
//! `toe`) and the message-31 reduced-almanac packed substructure.

use gnss_navmsg::bits::Frame;
use gnss_navmsg::gnss::SignalId;
use gnss_navmsg::{Decoded, Dispatcher};

fn words_from_frame(frame: &Frame) -> [u32; 10] {
    let mut words = [0u32; 10];
    for (i, word) in words.iter_mut().enumerate() {
        *word = frame.window(i as u16 * 30, 30) as u32;
    }
    words
}

// identify::gps_cnav reads prn at window_from_end(286, 6) and msg_type at
// window_from_end(280, 6) of a 300-bit frame: bits[8..14] and bits[14..20].
fn with_header(prn: u128, msg_type: u128, set: impl FnOnce(&mut Frame)) -> Frame {
    let mut frame = Frame::zeros(300);
    frame.set_window(8, 6, prn);
    frame.set_window(14, 6, msg_type);
    set(&mut frame);
    frame
}

#[test]
fn assembles_ephemeris_when_messages_ten_and_eleven_agree_on_toe() {
    let mut dispatcher = Dispatcher::new();
    let toe_raw: u128 = 100;

    let msg10 = with_header(5, 10, |f| {
        f.set_window(20, 13, 2000); // wn
        f.set_window(209, 11, toe_raw);
    });
    let msg11 = with_header(5, 11, |f| {
        f.set_window(280, 11, toe_raw);
    });

    dispatcher
        .ingest(SignalId::GpsL2C, 5, &words_from_frame(&msg10), None)
        .unwrap();
    dispatcher
        .ingest(SignalId::GpsL2C, 5, &words_from_frame(&msg11), None)
        .unwrap();

    let decoded = dispatcher.decoded(gnss_navmsg::Gnss::Gps, 5).unwrap();
    let ephemeris = decoded
        .iter()
        .find_map(|d| match d {
            Decoded::GpsCNavEphemeris(e) => Some(*e),
            _ => None,
        })
        .expect("c-nav ephemeris should assemble once messages 10 and 11 agree");
    assert_eq!(ephemeris.prn, 5);
    assert_eq!(ephemeris.wn, 2000);
    assert_eq!(ephemeris.toe, toe_raw as f64 * 300.0);
}

#[test]
fn mismatched_toe_between_messages_ten_and_eleven_is_an_error() {
    let mut dispatcher = Dispatcher::new();
    let msg10 = with_header(5, 10, |f| f.set_window(209, 11, 100));
    let msg11 = with_header(5, 11, |f| f.set_window(280, 11, 200));

    dispatcher
        .ingest(SignalId::GpsL2C, 5, &words_from_frame(&msg10), None)
        .unwrap();
    dispatcher
        .ingest(SignalId::GpsL2C, 5, &words_from_frame(&msg11), None)
        .unwrap();

    let result = dispatcher.decoded(gnss_navmsg::Gnss::Gps, 5);
    assert!(result.is_err());
}

#[test]
fn reduced_almanac_decodes_four_packed_entries() {
    let mut dispatcher = Dispatcher::new();
    // red_alm_1 occupies bits[147..178) of EPHEMERIS... REDUCED_ALM_31;
    // within it sv_id is the first 7 bits.
    let frame = with_header(5, 31, |f| {
        f.set_window(147, 7, 12); // red_alm_1.sv_id
    });

    dispatcher
        .ingest(SignalId::GpsL2C, 5, &words_from_frame(&frame), None)
        .unwrap();

    let decoded = dispatcher.decoded(gnss_navmsg::Gnss::Gps, 5).unwrap();
    let entries: Vec<_> = decoded
        .iter()
        .filter_map(|d| match d {
            Decoded::CNavReducedAlmanac(a) => Some(*a),
            _ => None,
        })
        .collect();
    assert_eq!(entries.len(), 1); // the other three slots have sv_id == 0 and are skipped
    assert_eq!(entries[0].prn, 12);
}

//! End-to-end GPS L-NAV ephemeris and almanac assembly: builds synthetic
//! subframes bit-by-bit, feeds them through [`Dispatcher::ingest`], and
//! checks the records that come back out.

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

/// Subframe 3's word 3 (bits 60-75) doubles as the `data_id` field this
/// crate's `identify` reads for every subframe; setting `cic`'s raw bits
/// to 0b01... at the top satisfies both readings at once.
const SF2_IODE_WITH_DATA_ID: u128 = 0b01_000101; // data_id=01, iode=69
const SF3_CIC_WITH_DATA_ID: u16 = 0b0100_0000_0000_0000; // data_id=01, cic raw=16384

fn build_subframe2() -> Frame {
    let mut frame = Frame::zeros(300);
    frame.set_window(49, 3, 2); // subframe_id
    frame.set_window(60, 8, SF2_IODE_WITH_DATA_ID); // iode (and data_id)
    frame.set_window(68, 16, 800); // crs raw
    frame.set_window(84, 16, 1000); // delta_n raw
    frame.set_window(100, 8, 0); // m_zero_msb
    frame.set_window(108, 24, 5_000_000); // m_zero_lsb
    frame.set_window(132, 16, 2000); // cuc raw
    frame.set_window(148, 8, 1); // e_msb
    frame.set_window(156, 24, 3_000_000); // e_lsb
    frame.set_window(180, 16, 1500); // cus raw
    frame.set_window(196, 8, 2); // sqrt_a_msb
    frame.set_window(204, 24, 7_000_000); // sqrt_a_lsb
    frame.set_window(228, 16, 26_560); // toe raw (*16 -> seconds of week)
    frame
}

fn build_subframe3() -> Frame {
    let mut frame = Frame::zeros(300);
    frame.set_window(49, 3, 3); // subframe_id
    frame.set_window(60, 16, SF3_CIC_WITH_DATA_ID as u128); // cic (and data_id)
    frame.set_window(76, 8, 0); // omega_zero_msb
    frame.set_window(84, 24, 1_234_567); // omega_zero_lsb
    frame.set_window(108, 16, 900); // cis raw
    frame.set_window(124, 8, 0); // i_zero_msb
    frame.set_window(132, 24, 2_345_678); // i_zero_lsb
    frame.set_window(156, 16, 700); // crc raw
    frame.set_window(172, 8, 0); // omega_msb
    frame.set_window(180, 24, 3_456_789); // omega_lsb
    frame.set_window(204, 24, 0x100); // omega_dot raw
    frame.set_window(228, 14, 10); // idot raw
    frame
}

#[test]
fn assembles_ephemeris_from_subframes_two_and_three() {
    let mut dispatcher = Dispatcher::new();
    let sf2 = build_subframe2();
    let sf3 = build_subframe3();

    assert!(dispatcher
        .ingest(SignalId::GpsL1Ca, 12, &words_from_frame(&sf2), None)
        .unwrap());
    assert!(dispatcher
        .ingest(SignalId::GpsL1Ca, 12, &words_from_frame(&sf3), None)
        .unwrap());

    let decoded = dispatcher.decoded(gnss_navmsg::Gnss::Gps, 12).unwrap();
    let ephemeris = decoded
        .iter()
        .find_map(|d| match d {
            Decoded::GpsEphemeris(e) => Some(*e),
            _ => None,
        })
        .expect("ephemeris should assemble once both subframes are ingested");

    assert_eq!(ephemeris.prn, 12);
    assert_eq!(ephemeris.iode, 69);
    assert_eq!(ephemeris.toe, 26_560.0 * 16.0);
}

#[test]
fn ephemeris_is_absent_with_only_one_subframe() {
    let mut dispatcher = Dispatcher::new();
    dispatcher
        .ingest(SignalId::GpsL1Ca, 12, &words_from_frame(&build_subframe2()), None)
        .unwrap();

    let decoded = dispatcher.decoded(gnss_navmsg::Gnss::Gps, 12).unwrap();
    assert!(!decoded.iter().any(|d| matches!(d, Decoded::GpsEphemeris(_))));
}

#[test]
fn rejects_a_frame_with_the_wrong_data_id() {
    let mut dispatcher = Dispatcher::new();
    let mut frame = Frame::zeros(300);
    frame.set_window(49, 3, 2);
    frame.set_window(60, 2, 0b10); // wrong data_id
    let result = dispatcher.ingest(SignalId::GpsL1Ca, 12, &words_from_frame(&frame), None);
    assert!(result.is_err());
}

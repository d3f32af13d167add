//! End-to-end Galileo I-NAV identification, even/odd and alert-page
//! rejection, and ephemeris/almanac assembly.

use gnss_navmsg::gnss::SignalId;
use gnss_navmsg::{Decoded, Dispatcher};

/// Packs a 128-bit stitched Galileo frame back into the five raw
/// half-page data-words [`Dispatcher::ingest`] expects, setting the
/// even/odd (bit 31) and page-type (bit 30) flags on both halves so the
/// frame passes the even/odd invariant: first half even (0), second
/// half odd (1), neither an alert page.
fn words_for_frame(first_30_bits: u32, rest: &[u32; 4]) -> [u32; 5] {
    let word0 = first_30_bits & 0x3fff_ffff; // even (bit31=0), nominal (bit30=0)
    let mut word4 = rest[3];
    word4 |= 1 << 31; // odd
    word4 &= !(1 << 30); // nominal page
    [word0, rest[0], rest[1], rest[2], word4]
}

/// Builds the raw words for one word type, writing `word_type` into the
/// first 6 bits and the caller's payload bits after that, entirely
/// within the stitched frame's bit numbering (word0 contributes its low
/// 30 bits, word1/word2 contribute 32 bits each, word3 and word4
/// contribute their top 18/16 bits after the flag bits).
fn build_word(word_type: u32, set: impl FnOnce(&mut [u8; 128])) -> [u32; 5] {
    let mut bits = [0u8; 128];
    for i in 0..6 {
        bits[i] = ((word_type >> (5 - i)) & 1) as u8;
    }
    set(&mut bits);

    let mut word0: u32 = 0;
    for &b in &bits[0..30] {
        word0 = (word0 << 1) | b as u32;
    }
    let mut word1: u32 = 0;
    for &b in &bits[30..62] {
        word1 = (word1 << 1) | b as u32;
    }
    let mut word2: u32 = 0;
    for &b in &bits[62..94] {
        word2 = (word2 << 1) | b as u32;
    }
    let mut word3_payload: u32 = 0;
    for &b in &bits[94..112] {
        word3_payload = (word3_payload << 1) | b as u32;
    }
    let mut word4_payload: u32 = 0;
    for &b in &bits[112..128] {
        word4_payload = (word4_payload << 1) | b as u32;
    }
    let word3 = word3_payload << 14;
    let word4 = word4_payload << 14;

    words_for_frame(word0, &[word1, word2, word3, word4])
}

fn set_bits(bits: &mut [u8; 128], start: usize, width: usize, raw: u128) {
    for i in 0..width {
        bits[start + i] = ((raw >> (width - 1 - i)) & 1) as u8;
    }
}

#[test]
fn assembles_ephemeris_from_word_types_one_through_four() {
    let mut dispatcher = Dispatcher::new();
    let iod: u128 = 12;

    let w1 = build_word(1, |b| {
        set_bits(b, 6, 10, iod); // iod field for word types 1-4
        set_bits(b, 16, 14, 100); // toe raw
    });
    let w2 = build_word(2, |b| {
        set_bits(b, 6, 10, iod);
    });
    let w3 = build_word(3, |b| {
        set_bits(b, 6, 10, iod);
    });
    let w4 = build_word(4, |b| {
        set_bits(b, 6, 10, iod);
    });

    for words in [&w1, &w2, &w3, &w4] {
        dispatcher
            .ingest(SignalId::GalileoE1B, 3, words, None)
            .unwrap();
    }

    let decoded = dispatcher.decoded(gnss_navmsg::Gnss::Galileo, 3).unwrap();
    let ephemeris = decoded
        .iter()
        .find_map(|d| match d {
            Decoded::GalileoEphemeris(e) => Some(*e),
            _ => None,
        })
        .expect("ephemeris should assemble once word types 1-4 share one iod");
    assert_eq!(ephemeris.sv_id, 3);
    assert_eq!(ephemeris.toe, 100.0 * 60.0);
}

#[test]
fn odd_half_marked_even_is_rejected_as_malformed() {
    let mut dispatcher = Dispatcher::new();
    let mut words = build_word(1, |b| set_bits(b, 6, 10, 1));
    words[4] &= !(1 << 31); // clear the required odd flag on the second half

    let result = dispatcher.ingest(SignalId::GalileoE1B, 3, &words, None);
    assert!(result.is_err());
}

#[test]
fn alert_page_on_second_half_is_rejected_as_malformed() {
    let mut dispatcher = Dispatcher::new();
    let mut words = build_word(1, |b| set_bits(b, 6, 10, 1));
    words[4] |= 1 << 30; // set the alert-page flag on the second half

    let result = dispatcher.ingest(SignalId::GalileoE1B, 3, &words, None);
    assert!(result.is_err());
}

#[test]
fn almanac_skips_the_dummy_satellite_id_zero() {
    let mut dispatcher = Dispatcher::new();
    let iod_a: u128 = 5;

    let w7 = build_word(7, |b| {
        set_bits(b, 6, 4, iod_a); // iod_a field for word types 7-10
                                  // alm_sv_id left at 0: dummy slot
    });
    let w10 = build_word(10, |b| {
        set_bits(b, 6, 4, iod_a);
    });

    dispatcher
        .ingest(SignalId::GalileoE1B, 3, &w7, None)
        .unwrap();
    dispatcher
        .ingest(SignalId::GalileoE1B, 3, &w10, None)
        .unwrap();

    let decoded = dispatcher.decoded(gnss_navmsg::Gnss::Galileo, 3).unwrap();
    let almanacs: Vec<_> = decoded
        .iter()
        .filter_map(|d| match d {
            Decoded::GalileoAlmanac(a) => Some(*a),
            _ => None,
        })
        .collect();
    assert!(almanacs.is_empty(), "dummy satellite id 0 must not produce an almanac entry");
}

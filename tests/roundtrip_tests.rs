mod common;

use rand::Rng;
use rstest::*;

use zipper::{compress, decompress};

use crate::common::*;

#[rstest]
#[case("a")]
#[case("zzzz")]
#[case("aaab")]
#[case("abracadabra")]
#[case("The quick brown fox jumps over the lazy dog.\n")]
#[case("tabs\tand\r\nnewlines\n\n")]
#[case("naïve café")]
#[case("日本語のテキスト")]
#[case("🦀 ferris 🦀")]
#[case("\u{0}\u{1}\u{7f}")]
fn decompress_reverses_compress(#[case] text: &str) {
    let packed = compress(text).unwrap();
    assert_eq!(decompress(&packed).unwrap(), text);
}

#[test]
fn random_ascii_texts_round_trip() {
    let mut rng = seeded_rng();
    let alphabet: Vec<char> = (' '..='~').collect();

    for _ in 0..50 {
        let len = rng.gen_range(1..2000);
        let text = random_text(&mut rng, &alphabet, len);
        assert_eq!(decompress(&compress(&text).unwrap()).unwrap(), text);
    }
}

#[test]
fn random_multi_byte_texts_round_trip() {
    let mut rng = seeded_rng();
    let alphabet = ['a', 'b', ' ', 'é', 'ß', 'λ', '中', '€', '🦀', '𝄞'];

    for _ in 0..50 {
        let len = rng.gen_range(1..500);
        let text = random_text(&mut rng, &alphabet, len);
        assert_eq!(decompress(&compress(&text).unwrap()).unwrap(), text);
    }
}

#[test]
fn skewed_distribution_round_trips_and_shrinks() {
    let mut rng = seeded_rng();
    let text: String = (0..10_000)
        .map(|_| match rng.gen_range(0..100) {
            0..=79 => 'e',
            80..=94 => 't',
            95..=98 => 'a',
            _ => 'q',
        })
        .collect();

    let packed = compress(&text).unwrap();
    assert!(packed.len() < text.len() / 4);
    assert_eq!(decompress(&packed).unwrap(), text);
}

#[test]
fn wide_alphabet_round_trips() {
    // every byte UTF-8 can produce from one- and two-byte characters, plus a
    // few three- and four-byte lead bytes
    let text: String = ('\u{0}'..='\u{7ff}')
        .chain(['\u{ffff}', '\u{10ffff}', '\u{40000}', '\u{80000}', '\u{c0000}'])
        .collect();
    assert_eq!(table_of(&text).len(), 227);
    assert_eq!(decompress(&compress(&text).unwrap()).unwrap(), text);
}

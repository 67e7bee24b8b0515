#![allow(dead_code)]

use rand::prelude::*;
use rand::rngs::StdRng;

use zipper::frequency::ByteFrequencies;
use zipper::table::CodeTable;
use zipper::tree::HuffNode;

pub const SEED: u64 = 0x5eed;

pub fn table_of(text: &str) -> CodeTable {
    let tree = HuffNode::build(&ByteFrequencies::of(text.as_bytes())).unwrap();
    CodeTable::from_tree(&tree)
}

/// Random text of `len` characters drawn from `alphabet`.
pub fn random_text(rng: &mut StdRng, alphabet: &[char], len: usize) -> String {
    (0..len)
        .map(|_| *alphabet.choose(rng).unwrap())
        .collect()
}

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(SEED)
}

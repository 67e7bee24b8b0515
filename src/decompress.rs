use log::debug;

use crate::bitstream::BitReader;
use crate::error::{HuffmanError, Result};
use crate::table_codec::read_table;

/// Recovers the text from a stream produced by [`compress`](crate::compress).
///
/// The length header counts characters, so each step decodes a lead byte and
/// then as many continuation bytes as its UTF-8 width calls for. Trailing
/// padding bits are never inspected.
pub fn decompress(compressed: &[u8]) -> Result<String> {
    let mut reader = BitReader::new(compressed);

    let length = reader.take_i32()?;
    let char_count = usize::try_from(length).map_err(|_| HuffmanError::NegativeLength(length))?;
    let table = read_table(&mut reader)?;
    debug!(
        "decompressing {} characters over {} symbols",
        char_count,
        table.len()
    );

    // every byte costs at least one bit
    let mut output = Vec::with_capacity(char_count.min(reader.remaining()));
    for _ in 0..char_count {
        let lead = table.decode_next(&mut reader)?;
        output.push(lead);
        for _ in 1..utf8_width(lead) {
            output.push(table.decode_next(&mut reader)?);
        }
    }

    debug!("decompressed {} bytes", output.len());
    Ok(String::from_utf8(output)?)
}

/// Sequence length announced by a UTF-8 lead byte. Stray continuation and
/// invalid bytes count as one and are rejected by the final validation.
fn utf8_width(lead: u8) -> usize {
    match lead.leading_ones() {
        2 => 2,
        3 => 3,
        4 => 4,
        _ => 1,
    }
}

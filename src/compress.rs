use log::debug;

use crate::bitstream::BitWriter;
use crate::error::{HuffmanError, Result};
use crate::frequency::ByteFrequencies;
use crate::table::CodeTable;
use crate::table_codec::write_table;
use crate::tree::HuffNode;

/// Compresses `text` into a self-describing stream.
///
/// The stream opens with the character count of `text` as a little-endian
/// `i32`, followed by the code table and then one code per UTF-8 byte.
pub fn compress(text: &str) -> Result<Vec<u8>> {
    let data = text.as_bytes();
    let char_count = text.chars().count();
    let length =
        i32::try_from(char_count).map_err(|_| HuffmanError::InputTooLong(char_count))?;

    let frequencies = ByteFrequencies::of(data);
    let tree = HuffNode::build(&frequencies)?;
    let table = CodeTable::from_tree(&tree);
    debug!(
        "compressing {} characters ({} bytes) over {} symbols",
        char_count,
        data.len(),
        table.len()
    );

    let mut writer = BitWriter::new();
    writer.append_i32(length);
    write_table(&table, &mut writer)?;

    let codes = table.codes_by_symbol();
    for &byte in data {
        let code = codes[byte as usize].ok_or(HuffmanError::UnknownSymbol(byte))?;
        writer.append_bits(code);
    }

    let packed = writer.pack();
    debug!("compressed to {} bytes", packed.len());
    Ok(packed)
}

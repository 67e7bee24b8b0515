//! Code table header layout:
//!
//! ```text
//! [1 byte]  row count - 1
//! per row:
//!   [1 byte]  symbol
//!   [1 byte]  code length in bits
//!   [n bits]  code
//! ```
//!
//! Rows are packed back to back with no byte alignment between them.

use crate::bitstream::{BitReader, BitWriter};
use crate::error::{HuffmanError, Result};
use crate::table::{CodeRow, CodeTable};

pub fn write_table(table: &CodeTable, writer: &mut BitWriter) -> Result<()> {
    let Some(last_row) = table.len().checked_sub(1) else {
        return Err(HuffmanError::EmptyInput);
    };
    let last_row =
        u8::try_from(last_row).map_err(|_| HuffmanError::TableOverflow("more than 256 rows"))?;
    let lengths = table
        .rows()
        .iter()
        .map(|row| match row.code.len() {
            0 => Err(HuffmanError::EmptyCode { symbol: row.symbol }),
            len => u8::try_from(len)
                .map_err(|_| HuffmanError::TableOverflow("code longer than 255 bits")),
        })
        .collect::<Result<Vec<u8>>>()?;

    writer.append_u8(last_row);
    for (row, length) in table.rows().iter().zip(lengths) {
        writer.append_u8(row.symbol);
        writer.append_u8(length);
        writer.append_bits(&row.code);
    }
    Ok(())
}

pub fn read_table(reader: &mut BitReader) -> Result<CodeTable> {
    let row_count = reader.take_u8()? as usize + 1;
    let mut rows = Vec::with_capacity(row_count);

    for _ in 0..row_count {
        let symbol = reader.take_u8()?;
        let code_length = reader.take_u8()? as usize;
        // an empty code would match without consuming anything
        if code_length == 0 {
            return Err(HuffmanError::EmptyCode { symbol });
        }
        let code = reader.take_bits(code_length)?.to_bitvec();
        rows.push(CodeRow { symbol, code });
    }
    Ok(CodeTable::from_rows(rows))
}

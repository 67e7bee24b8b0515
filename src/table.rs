use bitvec::prelude::*;
use log::trace;

use crate::bitstream::{BitReader, BitStr, Bits};
use crate::error::{HuffmanError, Result};
use crate::tree::HuffNode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeRow {
    pub symbol: u8,
    pub code: Bits,
}

/// Symbol codes in depth-first, left-before-right tree order.
///
/// Row order is part of the format: decoding takes the first row, in this
/// order, whose code matches the upcoming bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    rows: Vec<CodeRow>,
}

impl CodeTable {
    pub fn from_tree(root: &HuffNode) -> Self {
        let mut rows = Vec::new();
        match root {
            // a lone leaf has no path, but every code needs at least one bit
            HuffNode::Leaf { symbol, .. } => rows.push(CodeRow {
                symbol: *symbol,
                code: bitvec![u8, Lsb0; 0],
            }),
            HuffNode::Internal { .. } => collect_rows(root, &mut rows, &mut Bits::new()),
        }
        trace!("code table: {rows:?}");
        CodeTable { rows }
    }

    pub(crate) fn from_rows(rows: Vec<CodeRow>) -> Self {
        CodeTable { rows }
    }

    pub fn rows(&self) -> &[CodeRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Codes indexed by symbol, for encoding.
    pub fn codes_by_symbol(&self) -> [Option<&BitStr>; 256] {
        let mut codes = [None; 256];
        for row in &self.rows {
            codes[row.symbol as usize] = Some(row.code.as_bitslice());
        }
        codes
    }

    /// Decodes one symbol by scanning rows in table order and consuming the
    /// first code that matches the upcoming bits.
    pub fn decode_next(&self, reader: &mut BitReader) -> Result<u8> {
        for row in &self.rows {
            let length = row.code.len();
            let matched = reader
                .peek_bits(length)
                .is_ok_and(|bits| bits == row.code.as_bitslice());
            if matched {
                reader.take_bits(length)?;
                return Ok(row.symbol);
            }
        }

        if reader.remaining() == 0 {
            let shortest = self.rows.iter().map(|row| row.code.len()).min();
            return Err(HuffmanError::Exhausted {
                requested: shortest.unwrap_or(0),
                remaining: 0,
            });
        }
        Err(HuffmanError::UnknownCode {
            offset: reader.position(),
        })
    }
}

fn collect_rows(node: &HuffNode, rows: &mut Vec<CodeRow>, path: &mut Bits) {
    match node {
        HuffNode::Leaf { symbol, .. } => rows.push(CodeRow {
            symbol: *symbol,
            code: path.clone(),
        }),
        HuffNode::Internal { left, right, .. } => {
            path.push(false);
            collect_rows(left, rows, path);
            path.pop();

            path.push(true);
            collect_rows(right, rows, path);
            path.pop();
        }
    }
}

use std::string::FromUtf8Error;

use thiserror::Error;

/// Errors returned by compression and decompression.
#[derive(Debug, Error)]
pub enum HuffmanError {
    /// A byte to encode has no row in the code table.
    #[error("byte {0:#04x} not found in table")]
    UnknownSymbol(u8),
    /// No table row matches the bits at the given stream offset.
    #[error("bits at offset {offset} not found in table")]
    UnknownCode { offset: usize },
    /// A read asked for more bits than the stream holds.
    #[error("exhausted stream: requested {requested} bits, {remaining} remaining")]
    Exhausted { requested: usize, remaining: usize },
    /// A stored table row has a code of zero bits.
    #[error("row for byte {symbol:#04x} has an empty code")]
    EmptyCode { symbol: u8 },
    /// The table has more rows, or longer codes, than its one-byte fields can hold.
    #[error("code table does not fit its header: {0}")]
    TableOverflow(&'static str),
    /// There is no tree for an input without symbols.
    #[error("cannot build a tree from empty input")]
    EmptyInput,
    /// The character count does not fit the 32-bit length header.
    #[error("input of {0} characters does not fit the length header")]
    InputTooLong(usize),
    /// The length header holds a negative count.
    #[error("negative length header: {0}")]
    NegativeLength(i32),
    /// The decoded bytes do not form UTF-8 text.
    #[error("decoded bytes are not valid UTF-8: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, HuffmanError>;

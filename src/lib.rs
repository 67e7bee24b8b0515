//! # zipper
//!
//! Byte-level Huffman compression of text into a compact, self-describing
//! bit stream.
//!
//! ```rust
//! let packed = zipper::compress("abracadabra")?;
//! assert_eq!(zipper::decompress(&packed)?, "abracadabra");
//! # Ok::<(), zipper::HuffmanError>(())
//! ```

pub mod bitstream;
pub mod error;
pub mod frequency;
pub mod table;
pub mod table_codec;
pub mod tree;

mod compress;
mod decompress;

pub use compress::compress;
pub use decompress::decompress;
pub use error::HuffmanError;

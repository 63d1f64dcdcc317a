//! Huffman coding over byte symbols.
//!
//! A `Tree` is built from the symbol frequencies of a text, `Codes` derived
//! from it encode the text into a string of `0`s and `1`s. The tree is
//! serialized alongside so that the receiver can rebuild it and decode the
//! bits again.
//!
//! ```
//! let compressed = huffcode::compress(b"aaabbc").unwrap();
//! assert_eq!(compressed.tree, b"LcLbBLaB");
//! assert_eq!(compressed.bits, "111010100");
//! let text = huffcode::decompress(&compressed.bits, &compressed.tree).unwrap();
//! assert_eq!(text, b"aaabbc");
//! ```

extern crate arrayvec;
extern crate buffer;
#[macro_use] extern crate log;

#[macro_use]
mod macros;

pub mod code;
pub mod config;
pub mod decompress;
pub mod frequencies;
pub mod selector;
pub mod serialize;
pub mod tree;

pub use code::Code;
pub use code::Codes;
pub use code::CompressError;
pub use code::UnknownSymbol;
pub use config::Config;
pub use decompress::DecompressError;
pub use frequencies::Frequencies;
pub use selector::HeapSelector;
pub use selector::Selector;
pub use selector::TieBreak;
pub use serialize::DeserializeError;
pub use tree::EmptyInput;
pub use tree::Node;
pub use tree::NodeId;
pub use tree::Tree;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Error {
    EmptyInput,
    Deserialize(DeserializeError),
    Decompress(DecompressError),
    UnknownSymbol(u8),
}

impl From<EmptyInput> for Error {
    fn from(_: EmptyInput) -> Error {
        Error::EmptyInput
    }
}

impl From<DeserializeError> for Error {
    fn from(e: DeserializeError) -> Error {
        Error::Deserialize(e)
    }
}

impl From<DecompressError> for Error {
    fn from(e: DecompressError) -> Error {
        Error::Decompress(e)
    }
}

impl From<UnknownSymbol> for Error {
    fn from(UnknownSymbol(symbol): UnknownSymbol) -> Error {
        Error::UnknownSymbol(symbol)
    }
}

/// Result of compressing a text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Compressed {
    /// The encoded text, `0`s and `1`s.
    pub bits: String,
    /// The serialized tree needed for decoding.
    pub tree: Vec<u8>,
    /// The code of each symbol of the text.
    pub codes: Codes,
}

/// Compresses `text` using the default `Config`.
pub fn compress(text: &[u8]) -> Result<Compressed, EmptyInput> {
    Config::default().compress(text)
}

/// Decodes `bits` with the tree serialized in `serialized_tree`.
pub fn decompress(bits: &str, serialized_tree: &[u8]) -> Result<Vec<u8>, Error> {
    let tree = Tree::deserialize(serialized_tree)?;
    Ok(tree.decompress(bits)?)
}

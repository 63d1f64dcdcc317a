use crate::tree::NodeId;
use crate::tree::Tree;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum DecompressError {
    /// The input ended in the middle of a code.
    Truncated,
    /// A character other than `0` or `1`.
    InvalidBit(u8),
    /// A `1` bit for a tree made of a single leaf, whose only code is `0`.
    InvalidPath,
}

/// Cursor walking from the root towards a leaf, one bit at a time.
struct Decoder<'a> {
    tree: &'a Tree,
    cursor: NodeId,
}

impl<'a> Decoder<'a> {
    fn new(tree: &'a Tree) -> Decoder<'a> {
        Decoder {
            tree: tree,
            cursor: tree.root(),
        }
    }
    /// Returns the decoded symbol if `bit` completes a code.
    fn step(&mut self, bit: bool) -> Result<Option<u8>, DecompressError> {
        let root = self.tree.root_node();
        if root.is_leaf() {
            if bit {
                return Err(DecompressError::InvalidPath);
            }
            return Ok(root.symbol());
        }
        let next = unwrap_or_return!(self.tree.node(self.cursor).child(bit),
            Err(DecompressError::InvalidPath));
        let node = self.tree.node(next);
        if node.is_leaf() {
            self.cursor = self.tree.root();
            Ok(node.symbol())
        } else {
            self.cursor = next;
            Ok(None)
        }
    }
    fn decode<I>(mut self, bits: I) -> Result<Vec<u8>, DecompressError>
        where I: Iterator<Item=Result<bool, DecompressError>>
    {
        let mut result = Vec::new();
        for bit in bits {
            if let Some(symbol) = self.step(bit?)? {
                result.push(symbol);
            }
        }
        if self.cursor != self.tree.root() {
            return Err(DecompressError::Truncated);
        }
        Ok(result)
    }
}

fn parse_bit(c: u8) -> Result<bool, DecompressError> {
    match c {
        b'0' => Ok(false),
        b'1' => Ok(true),
        _ => Err(DecompressError::InvalidBit(c)),
    }
}

impl Tree {
    /// Decodes a string of `0`s and `1`s, walking from the root to a leaf
    /// for every output symbol.
    pub fn decompress(&self, bits: &str) -> Result<Vec<u8>, DecompressError> {
        Decoder::new(self).decode(bits.bytes().map(parse_bit))
    }
    /// Decodes the first `num_bits` bits of `input`, packed least
    /// significant bit first.
    pub fn decompress_packed(&self, input: &[u8], num_bits: usize)
        -> Result<Vec<u8>, DecompressError>
    {
        if num_bits > input.len() * 8 {
            return Err(DecompressError::Truncated);
        }
        let bits = input.iter()
            .flat_map(|&b| (0..8).map(move |i| Ok::<_, DecompressError>((b >> i) & 1 != 0)))
            .take(num_bits);
        Decoder::new(self).decode(bits)
    }
}

use arrayvec::ArrayVec;
use buffer::Buffer;
use buffer::BufferRef;
use buffer::CapacityError;
use buffer::with_buffer;
use crate::frequencies::NUM_SYMBOLS;
use crate::tree::NodeId;
use crate::tree::Tree;
use std::fmt::Write;
use std::fmt;
use std::iter;
use std::slice;

/// Longest possible code, a tree over 256 symbols is at most 255 levels
/// deep.
pub const MAX_CODE_LEN: usize = 256;

/// The symbol is not part of the code table.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct UnknownSymbol(pub u8);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CompressError {
    UnknownSymbol(u8),
    Capacity(CapacityError),
}

impl From<UnknownSymbol> for CompressError {
    fn from(UnknownSymbol(symbol): UnknownSymbol) -> CompressError {
        CompressError::UnknownSymbol(symbol)
    }
}

impl From<CapacityError> for CompressError {
    fn from(e: CapacityError) -> CompressError {
        CompressError::Capacity(e)
    }
}

/// Path from the root to a leaf, `false` meaning left.
#[derive(Clone, Default, Eq, Hash, PartialEq)]
pub struct Code {
    bits: ArrayVec<[bool; MAX_CODE_LEN]>,
}

impl Code {
    fn with(&self, bit: bool) -> Code {
        let mut result = self.clone();
        result.bits.push(bit);
        result
    }
    pub fn len(&self) -> usize {
        self.bits.len()
    }
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }
    pub fn bit(&self, idx: usize) -> bool {
        self.bits[idx]
    }
    pub fn bits(&self) -> iter::Cloned<slice::Iter<bool>> {
        self.bits.iter().cloned()
    }
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.bits.starts_with(&self.bits)
    }
}

impl fmt::Debug for Code {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for bit in self.bits() {
            f.write_char(if bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Code table, the code of every symbol present in a tree.
#[derive(Clone, Eq, PartialEq)]
pub struct Codes {
    codes: Vec<Option<Code>>,
}

impl Codes {
    /// Derives the code of every leaf by walking the tree in pre-order,
    /// appending a `0` when descending left and a `1` when descending right.
    ///
    /// A tree made of a single leaf assigns the code `0` to its symbol.
    pub fn from_tree(tree: &Tree) -> Codes {
        let mut codes: Vec<Option<Code>> = (0..NUM_SYMBOLS).map(|_| None).collect();
        if tree.is_single_leaf() {
            if let Some(symbol) = tree.root_node().symbol() {
                codes[symbol as usize] = Some(Code::default().with(false));
            }
            return Codes { codes: codes };
        }

        // Right child is pushed first so that the left subtree is visited
        // first.
        let mut stack: Vec<(NodeId, Code)> = vec![(tree.root(), Code::default())];
        while let Some((id, code)) = stack.pop() {
            let node = tree.node(id);
            match node.children() {
                None => {
                    if let Some(symbol) = node.symbol() {
                        codes[symbol as usize] = Some(code);
                    }
                }
                Some([left, right]) => {
                    stack.push((right, code.with(true)));
                    stack.push((left, code.with(false)));
                }
            }
        }
        Codes { codes: codes }
    }
    pub fn get(&self, symbol: u8) -> Option<&Code> {
        self.codes[symbol as usize].as_ref()
    }
    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.iter().count()
    }
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
    /// Iterates over `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> Iter {
        Iter {
            iter: self.codes.iter().enumerate(),
        }
    }
    fn lookup(&self, symbol: u8) -> Result<&Code, UnknownSymbol> {
        self.get(symbol).ok_or(UnknownSymbol(symbol))
    }
    /// Concatenates the codes of `input` into a string of `0`s and `1`s.
    pub fn compress(&self, input: &[u8]) -> Result<String, UnknownSymbol> {
        let mut result = String::new();
        for &symbol in input {
            for bit in self.lookup(symbol)?.bits() {
                result.push(if bit { '1' } else { '0' });
            }
        }
        Ok(result)
    }
    pub fn compressed_bit_len(&self, input: &[u8]) -> Result<usize, UnknownSymbol> {
        let mut result = 0;
        for &symbol in input {
            result += self.lookup(symbol)?.len();
        }
        Ok(result)
    }
    /// Number of bytes `compress_packed` writes for `input`.
    pub fn compressed_len(&self, input: &[u8]) -> Result<usize, UnknownSymbol> {
        Ok((self.compressed_bit_len(input)? + 7) / 8)
    }
    /// Packs the codes of `input` into bytes, starting at the least
    /// significant bit. The last byte is padded with zero bits, the bit
    /// length has to be transmitted separately.
    ///
    /// `buffer` must have room for `compressed_len(input)` bytes. A
    /// `&mut Vec<u8>` only offers its spare capacity, so reserve it first.
    pub fn compress_packed<'a, B: Buffer<'a>>(&self, input: &[u8], buffer: B)
        -> Result<&'a [u8], CompressError>
    {
        with_buffer(buffer, |b| self.compress_packed_impl(input, b))
    }
    fn compress_packed_impl<'d, 's>(&self, input: &[u8], mut buffer: BufferRef<'d, 's>)
        -> Result<&'d [u8], CompressError>
    {
        let mut byte = 0;
        let mut num_bits = 0;
        for &symbol in input {
            for bit in self.lookup(symbol)?.bits() {
                byte |= (bit as u8) << num_bits;
                num_bits += 1;
                if num_bits == 8 {
                    buffer.write(&[byte])?;
                    byte = 0;
                    num_bits = 0;
                }
            }
        }
        if num_bits != 0 {
            buffer.write(&[byte])?;
        }
        Ok(buffer.initialized())
    }
}

pub struct Iter<'a> {
    iter: iter::Enumerate<slice::Iter<'a, Option<Code>>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (u8, &'a Code);
    fn next(&mut self) -> Option<(u8, &'a Code)> {
        for (i, code) in self.iter.by_ref() {
            if let Some(code) = code.as_ref() {
                return Some((i as u8, code));
            }
        }
        None
    }
}

impl fmt::Debug for Codes {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter().map(|(s, c)| (s as char, c))).finish()
    }
}

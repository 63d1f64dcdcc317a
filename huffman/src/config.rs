use crate::Compressed;
use crate::code::Codes;
use crate::frequencies::Frequencies;
use crate::selector::TieBreak;
use crate::tree::EmptyInput;
use crate::tree::Tree;

/// Settings for building trees.
///
/// The default breaks frequency ties by ascending symbol value.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Config {
    pub tie_break: TieBreak,
}

impl Config {
    pub fn new() -> Config {
        Default::default()
    }
    pub fn tie_break(mut self, tie_break: TieBreak) -> Config {
        self.tie_break = tie_break;
        self
    }
    pub fn build(&self, frequencies: &Frequencies) -> Result<Tree, EmptyInput> {
        Tree::build(frequencies, self.tie_break)
    }
    /// Builds a tree over the symbols of `text` and encodes `text` with it.
    pub fn compress(&self, text: &[u8]) -> Result<Compressed, EmptyInput> {
        let tree = self.build(&Frequencies::from_text(text))?;
        let codes = Codes::from_tree(&tree);
        let bits = match codes.compress(text) {
            Ok(bits) => bits,
            Err(e) => unreachable!("code table misses a symbol of its own input: {:?}", e),
        };
        Ok(Compressed {
            bits: bits,
            tree: tree.serialize(),
            codes: codes,
        })
    }
}

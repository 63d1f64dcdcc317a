//! Textual tree format.
//!
//! The tree is written in post-order (left subtree, right subtree, node). A
//! leaf is written as `L` followed by its symbol byte, a branch as a single
//! `B`. Token boundaries follow from the scan position alone, so symbols
//! need no escaping. Frequencies are not preserved.

use arrayvec::ArrayVec;
use crate::frequencies::NUM_SYMBOLS;
use crate::tree::NodeId;
use crate::tree::Nodes;
use crate::tree::Tree;
use std::mem;

pub const LEAF: u8 = b'L';
pub const BRANCH: u8 = b'B';

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum DeserializeError {
    /// The input ended right after a leaf marker.
    MissingSymbol,
    /// A branch marker with fewer than two nodes to merge.
    StackUnderflow,
    /// The input ended with more than one unmerged node.
    LeftoverNodes(usize),
    /// The input contained no node at all.
    NoRoot,
    /// A byte other than a leaf or branch marker at a token boundary.
    UnknownToken(u8),
    /// The same symbol occurred in two leaves.
    DuplicateSymbol(u8),
}

fn serialize_node(tree: &Tree, id: NodeId, out: &mut Vec<u8>) {
    let node = tree.node(id);
    match node.children() {
        Some([left, right]) => {
            serialize_node(tree, left, out);
            serialize_node(tree, right, out);
            out.push(BRANCH);
        }
        None => {
            if let Some(symbol) = node.symbol() {
                out.extend_from_slice(&[LEAF, symbol]);
            }
        }
    }
}

impl Tree {
    pub fn serialize(&self) -> Vec<u8> {
        let mut result = Vec::with_capacity(self.len() * 2);
        self.serialize_into(&mut result);
        result
    }
    /// Appends the serialized tree to `out`.
    pub fn serialize_into(&self, out: &mut Vec<u8>) {
        // Depth is bounded by the 256 possible leaves.
        serialize_node(self, self.root(), out);
    }
    /// Rebuilds a tree from the output of `serialize`.
    ///
    /// Each leaf is pushed onto a stack, each branch pops its right and then
    /// its left child. Exactly one node has to remain at the end. The
    /// resulting nodes have a frequency of zero.
    pub fn deserialize(serialized: &[u8]) -> Result<Tree, DeserializeError> {
        let mut nodes = Nodes::new();
        let mut seen = [false; NUM_SYMBOLS];
        // Every stack entry contains a distinct leaf, hence at most 256.
        let mut stack: ArrayVec<[NodeId; NUM_SYMBOLS]> = ArrayVec::new();
        let mut iter = serialized.iter();
        while let Some(&token) = iter.next() {
            match token {
                LEAF => {
                    let &symbol = unwrap_or_return!(iter.next(),
                        Err(DeserializeError::MissingSymbol));
                    if mem::replace(&mut seen[symbol as usize], true) {
                        return Err(DeserializeError::DuplicateSymbol(symbol));
                    }
                    stack.push(nodes.leaf(symbol, 0));
                }
                BRANCH => {
                    let right = unwrap_or_return!(stack.pop(),
                        Err(DeserializeError::StackUnderflow));
                    let left = unwrap_or_return!(stack.pop(),
                        Err(DeserializeError::StackUnderflow));
                    stack.push(nodes.branch(left, right));
                }
                _ => return Err(DeserializeError::UnknownToken(token)),
            }
        }
        let root = match stack.len() {
            0 => return Err(DeserializeError::NoRoot),
            1 => stack[0],
            n => return Err(DeserializeError::LeftoverNodes(n)),
        };
        let tree = nodes.into_tree(root);
        debug!("deserialized tree, symbols={} nodes={}", tree.num_leaves(), tree.len());
        Ok(tree)
    }
}

use crate::frequencies::Frequencies;
use crate::selector::Entry;
use crate::selector::HeapSelector;
use crate::selector::Selector;
use crate::selector::TieBreak;
use std::slice;

/// Attempted to build a tree without any symbols.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct EmptyInput;

/// Index of a node inside its `Tree`.
///
/// A tree has at most 256 leaves and thus at most 511 nodes, so 16 bits
/// suffice.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NodeId(pub(crate) u16);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Kind {
    Leaf(u8),
    Branch([NodeId; 2]),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Node {
    kind: Kind,
    frequency: u64,
    parent: Option<NodeId>,
}

impl Node {
    /// The node's symbol, `None` for branches.
    pub fn symbol(&self) -> Option<u8> {
        match self.kind {
            Kind::Leaf(symbol) => Some(symbol),
            Kind::Branch(_) => None,
        }
    }
    /// Sum of the leaf frequencies below this node.
    ///
    /// Always zero for deserialized trees.
    pub fn frequency(&self) -> u64 {
        self.frequency
    }
    /// Left and right child, `None` for leaves.
    pub fn children(&self) -> Option<[NodeId; 2]> {
        match self.kind {
            Kind::Leaf(_) => None,
            Kind::Branch(children) => Some(children),
        }
    }
    pub fn left(&self) -> Option<NodeId> {
        self.children().map(|c| c[0])
    }
    pub fn right(&self) -> Option<NodeId> {
        self.children().map(|c| c[1])
    }
    /// Child reached by following `bit` (`false` is left).
    pub fn child(&self, bit: bool) -> Option<NodeId> {
        self.children().map(|c| c[bit as usize])
    }
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
    pub fn is_leaf(&self) -> bool {
        self.children().is_none()
    }
    pub fn is_branch(&self) -> bool {
        !self.is_leaf()
    }
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Node storage shared by the builder and the deserializer.
#[derive(Clone, Debug, Default)]
pub(crate) struct Nodes {
    nodes: Vec<Node>,
}

impl Nodes {
    pub fn new() -> Nodes {
        Default::default()
    }
    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u16);
        assert!(id.index() == self.nodes.len(), "too many tree nodes");
        self.nodes.push(node);
        id
    }
    pub fn leaf(&mut self, symbol: u8, frequency: u64) -> NodeId {
        self.push(Node {
            kind: Kind::Leaf(symbol),
            frequency: frequency,
            parent: None,
        })
    }
    pub fn branch(&mut self, left: NodeId, right: NodeId) -> NodeId {
        let frequency = self.nodes[left.index()].frequency
            .saturating_add(self.nodes[right.index()].frequency);
        let id = self.push(Node {
            kind: Kind::Branch([left, right]),
            frequency: frequency,
            parent: None,
        });
        for &child in &[left, right] {
            let child = &mut self.nodes[child.index()];
            assert!(child.parent.is_none(), "node merged twice");
            child.parent = Some(id);
        }
        id
    }
    pub fn into_tree(self, root: NodeId) -> Tree {
        assert!(self.nodes[root.index()].is_root());
        Tree {
            nodes: self.nodes,
            root: root,
        }
    }
}

/// A Huffman tree.
///
/// The nodes are kept in an arena owned by the tree, children and parents
/// are referred to by `NodeId`. Exactly one node, the root, has no parent.
#[derive(Clone, Debug)]
pub struct Tree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Tree {
    /// Builds the tree for the given symbol frequencies, selecting merge
    /// candidates with a `HeapSelector`.
    pub fn build(frequencies: &Frequencies, tie_break: TieBreak)
        -> Result<Tree, EmptyInput>
    {
        Tree::build_with(frequencies, &mut HeapSelector::new(tie_break))
    }
    /// Builds the tree for the given symbol frequencies, drawing merge
    /// candidates from `selector`.
    ///
    /// The two lowest nodes are repeatedly merged into a branch, the first
    /// one removed becoming the left child, until a single node is left.
    /// With only one distinct symbol, the tree consists of a single leaf.
    ///
    /// `selector` must be empty and is left empty.
    pub fn build_with<S: Selector>(frequencies: &Frequencies, selector: &mut S)
        -> Result<Tree, EmptyInput>
    {
        assert!(selector.is_empty(), "selector must start out empty");
        let mut nodes = Nodes::new();
        for (symbol, frequency) in frequencies {
            let node = nodes.leaf(symbol, frequency);
            selector.insert(Entry {
                frequency: frequency,
                symbol: symbol,
                node: node,
            });
        }

        let root = loop {
            let t1 = selector.remove_min().ok_or(EmptyInput)?;
            let t2 = match selector.remove_min() {
                Some(t2) => t2,
                None => break t1.node,
            };
            let node = nodes.branch(t1.node, t2.node);
            let frequency = t1.frequency.saturating_add(t2.frequency);
            trace!("merged node={} freq={} with node={} freq={} into node={}",
                t1.node.index(), t1.frequency, t2.node.index(), t2.frequency,
                node.index());
            selector.insert(Entry {
                frequency: frequency,
                symbol: 0,
                node: node,
            });
        };

        let tree = nodes.into_tree(root);
        debug!("built tree, symbols={} nodes={} freq={}",
            tree.num_leaves(), tree.len(), tree.node(root).frequency());
        Ok(tree)
    }
    pub fn root(&self) -> NodeId {
        self.root
    }
    /// Panics if `id` belongs to another tree with more nodes.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }
    pub fn root_node(&self) -> &Node {
        self.node(self.root)
    }
    /// Number of nodes, leaves and branches.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    pub fn num_leaves(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }
    /// Whether the tree consists of nothing but its root leaf.
    pub fn is_single_leaf(&self) -> bool {
        self.root_node().is_leaf()
    }
    /// Iterates over all nodes in arena order.
    pub fn nodes(&self) -> slice::Iter<Node> {
        self.nodes.iter()
    }
}

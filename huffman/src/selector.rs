use std::cmp::Ordering;
use std::collections::BinaryHeap;
use crate::tree::NodeId;

/// Secondary ordering between nodes of equal frequency.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum TieBreak {
    /// Lower symbol value is selected first.
    Ascending,
    /// Higher symbol value is selected first.
    Descending,
}

impl Default for TieBreak {
    fn default() -> TieBreak {
        TieBreak::Ascending
    }
}

/// A tree node waiting to be merged.
///
/// Branch nodes carry the symbol key `0`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Entry {
    pub frequency: u64,
    pub symbol: u8,
    pub node: NodeId,
}

/// Min-priority queue the tree builder draws its merge candidates from.
///
/// Entries are ordered by frequency, then by symbol in the direction of the
/// selector's `TieBreak`. Entries equal in both must still come out in a
/// deterministic order.
pub trait Selector {
    fn insert(&mut self, entry: Entry);
    fn peek_min(&self) -> Option<Entry>;
    fn remove_min(&mut self) -> Option<Entry>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct Queued {
    // (frequency, symbol key, insertion sequence), smallest first.
    key: (u64, u8, u64),
    entry: Entry,
}

impl Ord for Queued {
    fn cmp(&self, other: &Queued) -> Ordering {
        // `BinaryHeap` is a max-heap.
        other.key.cmp(&self.key)
    }
}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Queued) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// `Selector` on top of `std::collections::BinaryHeap`.
///
/// Entries equal in frequency and symbol come out in insertion order.
#[derive(Clone, Debug)]
pub struct HeapSelector {
    heap: BinaryHeap<Queued>,
    tie_break: TieBreak,
    next_seq: u64,
}

impl HeapSelector {
    pub fn new(tie_break: TieBreak) -> HeapSelector {
        HeapSelector {
            heap: BinaryHeap::new(),
            tie_break: tie_break,
            next_seq: 0,
        }
    }
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }
}

impl Selector for HeapSelector {
    fn insert(&mut self, entry: Entry) {
        let symbol_key = match self.tie_break {
            TieBreak::Ascending => entry.symbol,
            TieBreak::Descending => !entry.symbol,
        };
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Queued {
            key: (entry.frequency, symbol_key, seq),
            entry: entry,
        });
    }
    fn peek_min(&self) -> Option<Entry> {
        self.heap.peek().map(|q| q.entry)
    }
    fn remove_min(&mut self) -> Option<Entry> {
        self.heap.pop().map(|q| q.entry)
    }
    fn len(&self) -> usize {
        self.heap.len()
    }
}

use std::fmt;
use std::iter;
use std::slice;

pub const NUM_SYMBOLS: usize = 256;

/// Occurrence count of every byte value.
#[derive(Clone)]
pub struct Frequencies {
    counts: [u64; NUM_SYMBOLS],
}

impl Default for Frequencies {
    fn default() -> Frequencies {
        Frequencies::new()
    }
}

impl Frequencies {
    pub fn new() -> Frequencies {
        Frequencies { counts: [0; NUM_SYMBOLS] }
    }
    pub fn from_text(text: &[u8]) -> Frequencies {
        let mut result = Frequencies::new();
        result.add(text);
        result
    }
    pub fn from_array(counts: &[u64; NUM_SYMBOLS]) -> Frequencies {
        Frequencies { counts: *counts }
    }
    pub fn add(&mut self, text: &[u8]) {
        for &b in text {
            self.counts[b as usize] += 1;
        }
    }
    pub fn get(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }
    /// Number of distinct symbols with a non-zero count.
    pub fn num_symbols(&self) -> usize {
        self.counts.iter().filter(|&&c| c != 0).count()
    }
    pub fn total(&self) -> u64 {
        self.counts.iter().fold(0u64, |s, &c| s.saturating_add(c))
    }
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }
    /// Iterates over `(symbol, count)` pairs with non-zero count, in
    /// ascending symbol order.
    pub fn iter(&self) -> Iter {
        Iter {
            iter: self.counts.iter().enumerate(),
        }
    }
}

pub struct Iter<'a> {
    iter: iter::Enumerate<slice::Iter<'a, u64>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (u8, u64);
    fn next(&mut self) -> Option<(u8, u64)> {
        for (i, &count) in self.iter.by_ref() {
            if count != 0 {
                return Some((i as u8, count));
            }
        }
        None
    }
}

impl<'a> IntoIterator for &'a Frequencies {
    type Item = (u8, u64);
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl fmt::Debug for Frequencies {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod test {
    use super::Frequencies;

    #[test]
    fn tally() {
        let f = Frequencies::from_text(b"aaabbc");
        assert_eq!(f.get(b'a'), 3);
        assert_eq!(f.get(b'b'), 2);
        assert_eq!(f.get(b'c'), 1);
        assert_eq!(f.get(b'd'), 0);
        assert_eq!(f.num_symbols(), 3);
        assert_eq!(f.total(), 6);
        assert_eq!(f.iter().collect::<Vec<_>>(), [(b'a', 3), (b'b', 2), (b'c', 1)]);
    }

    #[test]
    fn empty() {
        let f = Frequencies::from_text(b"");
        assert!(f.is_empty());
        assert_eq!(f.num_symbols(), 0);
        assert_eq!(f.iter().next(), None);
    }

    #[test]
    fn total_saturates() {
        let mut counts = [0; 256];
        counts[0] = u64::MAX;
        counts[1] = 2;
        assert_eq!(Frequencies::from_array(&counts).total(), u64::MAX);
    }

    #[test]
    fn extremes() {
        let f = Frequencies::from_text(&[0, 255, 255]);
        assert_eq!(f.iter().collect::<Vec<_>>(), [(0, 1), (255, 2)]);
    }
}

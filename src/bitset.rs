//! Fixed-width bit set for coverage-chart columns.
//!
//! Each prime implicant of a [`CoverageChart`][crate::chart::CoverageChart]
//! stores the assignments it satisfies as a bit set, and the cover solver
//! tracks the still-uncovered columns with another one. Removing a column
//! from the chart is a single `remove` on the live-column mask rather than a
//! mutation of every implicant's row.

/// A bit set over `0..width`, backed by a vector of u64 words.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BitSet {
    /// Storage: each u64 holds 64 bits
    words: Vec<u64>,
    /// Number of addressable bits
    width: usize,
    /// Number of set bits (cached for O(1) len())
    count: usize,
}

impl BitSet {
    /// Number of bits per word.
    const BITS_PER_WORD: usize = 64;

    /// Creates an empty bit set over `0..width`.
    pub fn new(width: usize) -> Self {
        Self {
            words: vec![0; width.div_ceil(Self::BITS_PER_WORD)],
            width,
            count: 0,
        }
    }

    /// Creates a bit set over `0..width` with every bit set.
    pub fn full(width: usize) -> Self {
        let mut bs = Self::new(width);
        for word in &mut bs.words {
            *word = u64::MAX;
        }
        let tail = width % Self::BITS_PER_WORD;
        if tail != 0 {
            if let Some(last) = bs.words.last_mut() {
                *last = (1u64 << tail) - 1;
            }
        }
        bs.count = width;
        bs
    }

    /// Returns the number of set bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if no bits are set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the number of addressable bits.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn word_and_bit(index: usize) -> (usize, usize) {
        (index / Self::BITS_PER_WORD, index % Self::BITS_PER_WORD)
    }

    /// Returns true if the bit at the given index is set.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        if index >= self.width {
            return false;
        }
        let (word_idx, bit_idx) = Self::word_and_bit(index);
        (self.words[word_idx] >> bit_idx) & 1 == 1
    }

    /// Sets the bit at the given index. Returns true if the bit was not previously set.
    ///
    /// # Panics
    ///
    /// Panics if `index >= width`.
    #[inline]
    pub fn insert(&mut self, index: usize) -> bool {
        assert!(
            index < self.width,
            "bit index {} out of range for width {}",
            index,
            self.width
        );
        let (word_idx, bit_idx) = Self::word_and_bit(index);
        let mask = 1u64 << bit_idx;
        let was_clear = self.words[word_idx] & mask == 0;
        if was_clear {
            self.words[word_idx] |= mask;
            self.count += 1;
        }
        was_clear
    }

    /// Clears the bit at the given index. Returns true if the bit was previously set.
    #[inline]
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.width {
            return false;
        }
        let (word_idx, bit_idx) = Self::word_and_bit(index);
        let mask = 1u64 << bit_idx;
        let was_set = self.words[word_idx] & mask != 0;
        if was_set {
            self.words[word_idx] &= !mask;
            self.count -= 1;
        }
        was_set
    }

    /// Counts the bits set in both `self` and `other`.
    pub fn intersection_count(&self, other: &BitSet) -> usize {
        self.words
            .iter()
            .zip(&other.words)
            .map(|(a, b)| (a & b).count_ones() as usize)
            .sum()
    }

    /// Clears every bit that is set in `other`.
    pub fn difference_with(&mut self, other: &BitSet) {
        for (a, b) in self.words.iter_mut().zip(&other.words) {
            *a &= !b;
        }
        self.recount();
    }

    /// Keeps only the indices for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(usize) -> bool) {
        let drop: Vec<usize> = self.iter().filter(|&i| !keep(i)).collect();
        for i in drop {
            self.remove(i);
        }
    }

    fn recount(&mut self) {
        self.count = self.words.iter().map(|w| w.count_ones() as usize).sum();
    }

    /// Returns an iterator over all set bit indices, in ascending order.
    pub fn iter(&self) -> BitSetIter<'_> {
        BitSetIter {
            bitset: self,
            word_idx: 0,
            current_word: self.words.first().copied().unwrap_or(0),
        }
    }
}

impl Extend<usize> for BitSet {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        for index in iter {
            self.insert(index);
        }
    }
}

/// Iterator over set bits in a BitSet.
pub struct BitSetIter<'a> {
    bitset: &'a BitSet,
    word_idx: usize,
    current_word: u64,
}

impl Iterator for BitSetIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current_word != 0 {
                let bit_idx = self.current_word.trailing_zeros() as usize;
                self.current_word &= self.current_word - 1; // Clear lowest set bit
                return Some(self.word_idx * BitSet::BITS_PER_WORD + bit_idx);
            }

            self.word_idx += 1;
            if self.word_idx >= self.bitset.words.len() {
                return None;
            }
            self.current_word = self.bitset.words[self.word_idx];
        }
    }
}

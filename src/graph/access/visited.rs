//! Dense visited set for graph traversals.
//!
//! Vertex ids are array indices, so the visited state is a plain word-packed
//! bitmap sized to the vertex id bound at the start of each traversal.

const WORD_BITS: usize = u64::BITS as usize;

/// A dense, word-packed visited set.
pub(crate) struct VisitedSet {
    words: Vec<u64>,
    len: usize,
}

impl VisitedSet {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(WORD_BITS)],
            len,
        }
    }

    #[inline]
    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` iff `node` was not yet visited, marking it visited.
    #[inline]
    pub(crate) fn try_visit(&mut self, node: usize) -> bool {
        debug_assert!(node < self.len, "node {node} out of bounds for n={}", self.len);
        let (word, mask) = (node / WORD_BITS, 1u64 << (node % WORD_BITS));
        let fresh = self.words[word] & mask == 0;
        self.words[word] |= mask;
        fresh
    }

    #[inline]
    pub(crate) fn is_visited(&self, node: usize) -> bool {
        let (word, mask) = (node / WORD_BITS, 1u64 << (node % WORD_BITS));
        self.words.get(word).is_some_and(|w| w & mask != 0)
    }

    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    pub(crate) fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }
}

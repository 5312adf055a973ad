//! Buffer for holding base 1e7 words.

use crate::defs::Word;
use core::ops::Deref;
use core::ops::DerefMut;
use core::ops::Index;
use core::ops::IndexMut;
use core::slice::SliceIndex;
use smallvec::SmallVec;

/// Number of words kept inline before the buffer spills to the heap.
/// Eight words hold 56 digits, which covers the default precision with room for guard digits.
const INLINE_WORDS: usize = 8;

/// Buffer for holding base 1e7 words, most significant word first.
#[derive(Debug, Clone, Default, Hash, PartialEq, Eq)]
pub(crate) struct WordBuf {
    inner: SmallVec<[Word; INLINE_WORDS]>,
}

impl WordBuf {
    #[inline]
    pub fn new() -> Self {
        WordBuf {
            inner: SmallVec::new(),
        }
    }

    #[inline]
    pub fn from_slice(d: &[Word]) -> Self {
        WordBuf {
            inner: SmallVec::from_slice(d),
        }
    }

    #[inline]
    pub fn from_word(w: Word) -> Self {
        let mut inner = SmallVec::new();
        inner.push(w);
        WordBuf { inner }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn push(&mut self, w: Word) {
        self.inner.push(w);
    }

    #[inline]
    pub fn insert(&mut self, idx: usize, w: Word) {
        self.inner.insert(idx, w);
    }

    #[inline]
    pub fn remove(&mut self, idx: usize) -> Word {
        self.inner.remove(idx)
    }

    #[inline]
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Truncates the buffer to `n` words. Returns true if any words were dropped.
    #[inline]
    pub fn trunc_to(&mut self, n: usize) -> bool {
        let ret = self.inner.len() > n;
        self.inner.truncate(n);
        ret
    }

    /// Pads the buffer with zero words at the end up to `n` words.
    #[inline]
    pub fn extend_to(&mut self, n: usize) {
        if n > self.inner.len() {
            self.inner.resize(n, 0);
        }
    }

    /// Prepends `n` zero words.
    pub fn shift_right(&mut self, n: usize) {
        self.inner.insert_many(0, core::iter::repeat(0).take(n));
    }

    // Remove trailing words containing zeroes.
    pub fn trunc_trailing_zeroes(&mut self) {
        while self.inner.last() == Some(&0) {
            self.inner.pop();
        }
    }

    // Remove leading words containing zeroes. Returns the number of words removed.
    pub fn trunc_leading_zeroes(&mut self) -> usize {
        let n = self.inner.iter().take_while(|w| **w == 0).count();
        if n > 0 {
            self.inner.drain(..n);
        }
        n
    }
}

impl<I: SliceIndex<[Word]>> IndexMut<I> for WordBuf {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        self.inner.index_mut(index)
    }
}

impl<I: SliceIndex<[Word]>> Index<I> for WordBuf {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        self.inner.index(index)
    }
}

impl Deref for WordBuf {
    type Target = [Word];

    #[inline]
    fn deref(&self) -> &[Word] {
        self.inner.deref()
    }
}

impl DerefMut for WordBuf {
    #[inline]
    fn deref_mut(&mut self) -> &mut [Word] {
        self.inner.deref_mut()
    }
}

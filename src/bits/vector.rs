//! Fixed-length bit string representation.

use rand::Rng;
use std::fmt;

const WORD_BITS: usize = 32;

/// A fixed-length string of bits packed into 32-bit words.
///
/// Bit `i` lives in word `i / 32` at position `i % 32`. Bits of the last word
/// beyond `len` are always zero, so whole-word comparisons and popcounts are
/// exact.
///
/// ```
/// use u_evo::bits::BitVector;
///
/// let mut v = BitVector::new(40);
/// v.set(0, true);
/// v.flip(35);
/// assert_eq!(v.count_ones(), 2);
/// assert_eq!(v.get32(0), 1);
/// assert_eq!(v.get32(1), 1 << 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BitVector {
    words: Vec<u32>,
    len: usize,
}

impl BitVector {
    /// Creates a bit vector of `len` zero bits.
    pub fn new(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(WORD_BITS)],
            len,
        }
    }

    /// Creates a bit vector of `len` uniformly random bits.
    pub fn random<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        let mut v = Self::new(len);
        for w in v.words.iter_mut() {
            *w = rng.next_u32();
        }
        v.clear_unused();
        v
    }

    /// Creates a bit vector from booleans, index 0 first.
    pub fn from_bools(bits: &[bool]) -> Self {
        let mut v = Self::new(bits.len());
        for (i, &b) in bits.iter().enumerate() {
            v.set(i, b);
        }
        v
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns bit `i`.
    ///
    /// # Panics
    /// Panics if `i >= len`.
    pub fn get(&self, i: usize) -> bool {
        self.check_index(i);
        (self.words[i / WORD_BITS] >> (i % WORD_BITS)) & 1 == 1
    }

    /// Sets bit `i` to `value`.
    ///
    /// # Panics
    /// Panics if `i >= len`.
    pub fn set(&mut self, i: usize, value: bool) {
        self.check_index(i);
        let mask = 1u32 << (i % WORD_BITS);
        if value {
            self.words[i / WORD_BITS] |= mask;
        } else {
            self.words[i / WORD_BITS] &= !mask;
        }
    }

    /// Flips bit `i`.
    ///
    /// # Panics
    /// Panics if `i >= len`.
    pub fn flip(&mut self, i: usize) {
        self.check_index(i);
        self.words[i / WORD_BITS] ^= 1u32 << (i % WORD_BITS);
    }

    /// Number of 1 bits.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Number of 0 bits.
    pub fn count_zeros(&self) -> usize {
        self.len - self.count_ones()
    }

    /// Returns block `block` of 32 bits (bits `32*block .. 32*block + 32`)
    /// as an unsigned integer, lowest index in the least significant bit.
    ///
    /// # Panics
    /// Panics if the block does not exist.
    pub fn get32(&self, block: usize) -> u32 {
        assert!(
            block < self.words.len(),
            "block {block} out of range for {} bits",
            self.len
        );
        self.words[block]
    }

    /// Overwrites block `block` of 32 bits. Bits past `len` are discarded.
    ///
    /// # Panics
    /// Panics if the block does not exist.
    pub fn set32(&mut self, block: usize, value: u32) {
        assert!(
            block < self.words.len(),
            "block {block} out of range for {} bits",
            self.len
        );
        self.words[block] = value;
        self.clear_unused();
    }

    /// Swaps bits `from..to` between `self` and `other`.
    ///
    /// # Panics
    /// Panics if lengths differ or the range exceeds the length.
    pub fn exchange(&mut self, other: &mut BitVector, from: usize, to: usize) {
        assert_eq!(self.len, other.len, "bit vectors must have equal length");
        assert!(
            from <= to && to <= self.len,
            "invalid range {from}..{to} for {} bits",
            self.len
        );
        let mut i = from;
        while i < to {
            let word = i / WORD_BITS;
            let offset = i % WORD_BITS;
            let span = (WORD_BITS - offset).min(to - i);
            let mask = if span == WORD_BITS {
                u32::MAX
            } else {
                ((1u32 << span) - 1) << offset
            };
            let diff = (self.words[word] ^ other.words[word]) & mask;
            self.words[word] ^= diff;
            other.words[word] ^= diff;
            i += span;
        }
    }

    /// Swaps bit `i` between `self` and `other`.
    pub fn exchange_bit(&mut self, other: &mut BitVector, i: usize) {
        self.exchange(other, i, i + 1);
    }

    /// Iterates over the bits, index 0 first.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |i| (self.words[i / WORD_BITS] >> (i % WORD_BITS)) & 1 == 1)
    }

    fn check_index(&self, i: usize) {
        assert!(i < self.len, "bit index {i} out of range for {} bits", self.len);
    }

    fn clear_unused(&mut self) {
        let used = self.len % WORD_BITS;
        if used != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= (1u32 << used) - 1;
            }
        }
    }
}

/// Renders the bits with the highest index first.
impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..self.len).rev() {
            f.write_str(if self.get(i) { "1" } else { "0" })?;
        }
        Ok(())
    }
}

//! `BitArray` struct and core implementation.

use alloc::{boxed::Box, vec};

use rand::RngCore;

use crate::{
    iter::{Iter, Ones},
    reverse::reverse_bits,
    rotate::{rotate_bits, rotate_left_bits},
    storage::{byte_count, load_bit, store_bit, tail_mask, try_alloc_zeroed},
    traits::AllocError,
};

/// A fixed-size array of bits packed eight to a byte.
///
/// # Overview
///
/// `BitArray` owns a byte buffer of `len().div_ceil(8)` bytes. Bit `i` is
/// stored in byte `i / 8` at position `i % 8`, least significant bit first.
/// The array never grows or shrinks after construction.
///
/// Besides constant-time [`get`](Self::get) and [`set`](Self::set), the
/// array supports in-place [`rotate`](Self::rotate) of any contiguous
/// sub-range by any signed amount, without an auxiliary buffer.
///
/// # Tail Bits
///
/// When the length is not a multiple of 8, the high bits of the final byte
/// are not part of the array. No public operation reads them and their value
/// is unspecified (see [`random_fill`](Self::random_fill)). Comparisons and
/// hashing ignore them.
///
/// # Examples
///
/// ```
/// use packed_bitarray::BitArray;
///
/// let mut bits = BitArray::try_new(8)?;
/// bits.set(0, true);
/// bits.set(1, true);
///
/// // Rotate the whole array one place to the right.
/// bits.rotate(0, 8, 1);
/// assert!(!bits.get(0));
/// assert!(bits.get(1));
/// assert!(bits.get(2));
/// # Ok::<(), packed_bitarray::AllocError>(())
/// ```
pub struct BitArray {
    bits: usize,
    bytes: Box<[u8]>,
}

impl BitArray {
    /// Creates a bit array of `bits` bits, all zero.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the backing buffer cannot be allocated. No
    /// partially constructed array is produced.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bitarray::BitArray;
    ///
    /// let bits = BitArray::try_new(10)?;
    /// assert_eq!(bits.len(), 10);
    /// assert_eq!(bits.as_bytes(), &[0, 0]);
    /// # Ok::<(), packed_bitarray::AllocError>(())
    /// ```
    pub fn try_new(bits: usize) -> Result<Self, AllocError> {
        let bytes = try_alloc_zeroed(bits)?;
        Ok(Self { bits, bytes })
    }

    /// Creates a bit array of `bits` bits, all zero.
    ///
    /// Allocation failure aborts, as it does for `Vec`. Use
    /// [`try_new`](Self::try_new) to handle it instead.
    #[must_use]
    pub fn new(bits: usize) -> Self {
        Self {
            bits,
            bytes: vec![0; byte_count(bits)].into_boxed_slice(),
        }
    }

    /// Returns the number of addressable bits.
    #[must_use]
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.bits
    }

    /// Returns `true` if the array holds no bits.
    #[must_use]
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Returns the backing bytes.
    ///
    /// Bit `i` is `bytes[i / 8] >> (i % 8) & 1`. The unused high bits of the
    /// last byte are unspecified.
    #[must_use]
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline(always)]
    #[track_caller]
    fn check_index(&self, i: usize) {
        assert!(
            i < self.bits,
            "bit index {i} out of bounds for length {}",
            self.bits
        );
    }

    /// Returns the value of bit `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bitarray::BitArray;
    ///
    /// let mut bits = BitArray::new(16);
    /// bits.set(9, true);
    /// assert!(bits.get(9));
    /// assert!(!bits.get(8));
    /// ```
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn get(&self, i: usize) -> bool {
        self.check_index(i);
        load_bit(&self.bytes, i)
    }

    /// Sets bit `i` to `v`, leaving every other bit unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    #[inline]
    #[track_caller]
    pub fn set(&mut self, i: usize, v: bool) {
        self.check_index(i);
        store_bit(&mut self.bytes, i, v);
    }

    /// Sets bit `i` to `v` and returns its previous value.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bitarray::BitArray;
    ///
    /// let mut bits = BitArray::new(4);
    /// assert!(!bits.replace(2, true));
    /// assert!(bits.replace(2, false));
    /// ```
    #[track_caller]
    pub fn replace(&mut self, i: usize, v: bool) -> bool {
        self.check_index(i);
        let prev = load_bit(&self.bytes, i);
        store_bit(&mut self.bytes, i, v);
        prev
    }

    /// Flips bit `i` and returns its new value.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    #[track_caller]
    pub fn toggle(&mut self, i: usize) -> bool {
        self.check_index(i);
        let v = !load_bit(&self.bytes, i);
        store_bit(&mut self.bytes, i, v);
        v
    }

    /// Sets every bit to `v`.
    pub fn fill(&mut self, v: bool) {
        self.bytes.fill(if v { u8::MAX } else { 0 });
    }

    /// Overwrites the whole buffer, unused tail bits included, with bytes
    /// drawn from `rng`.
    ///
    /// Passing a seeded generator makes the result reproducible.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bitarray::BitArray;
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let mut a = BitArray::new(100);
    /// let mut b = BitArray::new(100);
    /// a.random_fill(&mut StdRng::seed_from_u64(7));
    /// b.random_fill(&mut StdRng::seed_from_u64(7));
    /// assert_eq!(a, b);
    /// ```
    pub fn random_fill<R: RngCore + ?Sized>(&mut self, rng: &mut R) {
        rng.fill_bytes(&mut self.bytes);
    }

    /// Returns the number of set bits.
    #[must_use]
    pub fn count_ones(&self) -> usize {
        let Some((last, full)) = self.bytes.split_last() else {
            return 0;
        };
        let body: usize = full.iter().map(|b| b.count_ones() as usize).sum();
        body + (last & tail_mask(self.bits)).count_ones() as usize
    }

    /// Returns the number of unset bits.
    #[must_use]
    pub fn count_zeros(&self) -> usize {
        self.bits - self.count_ones()
    }

    /// Reverses the order of the bits in the inclusive range `[left, right]`.
    ///
    /// The bit at `left + k` moves to `right - k`. An empty or single-bit
    /// range (`left >= right`) is left unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `left <= right` and `right >= self.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bitarray::BitArray;
    ///
    /// let mut bits: BitArray = "0b0011".parse()?;
    /// bits.reverse(0, 3);
    /// assert_eq!(bits.to_string(), "1100");
    /// # Ok::<(), packed_bitarray::ParseBitArrayError>(())
    /// ```
    #[track_caller]
    pub fn reverse(&mut self, left: usize, right: usize) {
        if left > right {
            return;
        }
        assert!(
            right < self.bits,
            "reverse range [{left}, {right}] out of bounds for length {}",
            self.bits
        );
        reverse_bits(&mut self.bytes, left, right);
    }

    #[inline(always)]
    #[track_caller]
    fn check_range(&self, offset: usize, length: usize) {
        let end = offset.checked_add(length);
        assert!(
            end.is_some_and(|end| end <= self.bits),
            "rotate range {offset}+{length} out of bounds for length {}",
            self.bits
        );
    }

    /// Rotates the sub-range `[offset, offset + length)` so that every bit
    /// moves `right_amount` places to the right, wrapping around within the
    /// sub-range. A negative amount rotates left.
    ///
    /// Amounts are reduced modulo `length`, so any multiple of `length`
    /// leaves the array unchanged. Bits outside the sub-range are never
    /// touched.
    ///
    /// # Panics
    ///
    /// Panics if `offset + length > self.len()`. The check runs before any
    /// bit is modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bitarray::BitArray;
    ///
    /// let mut bits: BitArray = "1111100000".parse()?;
    /// bits.rotate(2, 6, 2);
    /// assert_eq!(bits.to_string(), "1110001100");
    ///
    /// bits.rotate(2, 6, -2);
    /// assert_eq!(bits.to_string(), "1111100000");
    /// # Ok::<(), packed_bitarray::ParseBitArrayError>(())
    /// ```
    #[track_caller]
    pub fn rotate(&mut self, offset: usize, length: usize, right_amount: isize) {
        self.check_range(offset, length);
        rotate_bits(&mut self.bytes, offset, length, right_amount);
    }

    /// Rotates `[offset, offset + length)` left by `amount` places, towards
    /// lower indices.
    ///
    /// # Panics
    ///
    /// Panics if `offset + length > self.len()`.
    #[track_caller]
    pub fn rotate_left(&mut self, offset: usize, length: usize, amount: usize) {
        self.check_range(offset, length);
        if length == 0 {
            return;
        }
        rotate_left_bits(&mut self.bytes, offset, length, amount % length);
    }

    /// Rotates `[offset, offset + length)` right by `amount` places, towards
    /// higher indices.
    ///
    /// # Panics
    ///
    /// Panics if `offset + length > self.len()`.
    #[track_caller]
    pub fn rotate_right(&mut self, offset: usize, length: usize, amount: usize) {
        self.check_range(offset, length);
        if length == 0 {
            return;
        }
        let left_amount = match amount % length {
            0 => 0,
            right => length - right,
        };
        rotate_left_bits(&mut self.bytes, offset, length, left_amount);
    }

    /// Returns an iterator over every bit as a `bool`, starting at index 0.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Returns an iterator over the indices of the set bits, ascending.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bitarray::BitArray;
    ///
    /// let bits: BitArray = "0b1000_0101_0".parse()?;
    /// assert_eq!(bits.ones().collect::<Vec<_>>(), vec![1, 3, 8]);
    /// # Ok::<(), packed_bitarray::ParseBitArrayError>(())
    /// ```
    #[must_use]
    pub fn ones(&self) -> Ones<'_> {
        Ones::new(self)
    }

    /// Bytes with the unused tail bits cleared, for comparisons.
    pub(crate) fn masked_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        let last = self.bytes.len().saturating_sub(1);
        let tail = tail_mask(self.bits);
        self.bytes
            .iter()
            .enumerate()
            .map(move |(i, &b)| if i == last { b & tail } else { b })
    }

    /// Builds an array from raw bytes, using the first `bits` bits.
    pub(crate) fn from_raw(bits: usize, bytes: Box<[u8]>) -> Self {
        debug_assert_eq!(bytes.len(), byte_count(bits));
        Self { bits, bytes }
    }
}

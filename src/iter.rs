//! Iterator implementations for `BitArray`.

use alloc::vec::Vec;
use core::iter::{FromIterator, FusedIterator};

use crate::{
    BitArray,
    macros::bitpos,
    storage::{BITS_PER_BYTE, load_bit, store_bit},
};

/// An iterator over every bit of a [`BitArray`] as a `bool`.
///
/// This struct is created by the [`iter`](BitArray::iter) method. It yields
/// `len()` values, index 0 first, and can also run from the back.
///
/// # Examples
///
/// ```
/// use packed_bitarray::BitArray;
///
/// let bits: BitArray = "0b011".parse()?;
/// let forward: Vec<bool> = bits.iter().collect();
/// assert_eq!(forward, vec![true, true, false]);
///
/// let backward: Vec<bool> = bits.iter().rev().collect();
/// assert_eq!(backward, vec![false, true, true]);
/// # Ok::<(), packed_bitarray::ParseBitArrayError>(())
/// ```
#[derive(Clone)]
pub struct Iter<'a> {
    bytes: &'a [u8],
    pos: usize,  // next bit from the front
    rpos: usize, // one past the next bit from the back
}

impl<'a> Iter<'a> {
    pub(crate) fn new(array: &'a BitArray) -> Self {
        Self {
            bytes: array.as_bytes(),
            pos: 0,
            rpos: array.len(),
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.rpos {
            return None;
        }
        let bit = load_bit(self.bytes, self.pos);
        self.pos += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len();
        (n, Some(n))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.pos = self.pos.saturating_add(n).min(self.rpos);
        self.next()
    }
}

impl ExactSizeIterator for Iter<'_> {
    fn len(&self) -> usize {
        self.rpos - self.pos
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.rpos <= self.pos {
            return None;
        }
        self.rpos -= 1;
        Some(load_bit(self.bytes, self.rpos))
    }
}

impl FusedIterator for Iter<'_> {}

/// An iterator over the indices of the set bits of a [`BitArray`].
///
/// This struct is created by the [`ones`](BitArray::ones) method. Bytes with
/// no set bits are skipped whole.
#[derive(Clone)]
pub struct Ones<'a> {
    bytes: &'a [u8],
    pos: usize,
    end: usize,
}

impl<'a> Ones<'a> {
    pub(crate) fn new(array: &'a BitArray) -> Self {
        Self {
            bytes: array.as_bytes(),
            pos: 0,
            end: array.len(),
        }
    }
}

impl Iterator for Ones<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.end {
            let (bi, bp) = bitpos!(self.pos);
            let byte = self.bytes[bi] >> bp;
            if byte == 0 {
                self.pos = (bi + 1) * BITS_PER_BYTE;
                continue;
            }

            let result = self.pos + byte.trailing_zeros() as usize;
            if result >= self.end {
                self.pos = self.end;
                return None;
            }
            self.pos = result + 1;
            return Some(result);
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.end.saturating_sub(self.pos)))
    }
}

impl FusedIterator for Ones<'_> {}

impl<'a> IntoIterator for &'a BitArray {
    type IntoIter = Iter<'a>;
    type Item = bool;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<bool> for BitArray {
    /// Collects bits into an array, the first item becoming bit 0.
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut bytes = Vec::new();
        let mut bits = 0;
        for v in iter {
            if bits % BITS_PER_BYTE == 0 {
                bytes.push(0);
            }
            store_bit(&mut bytes, bits, v);
            bits += 1;
        }
        Self::from_raw(bits, bytes.into_boxed_slice())
    }
}

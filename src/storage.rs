//! Internal byte storage and byte/bit addressing helpers for the bit array.
//!
//! Bit `i` lives in byte `i / 8` at position `i % 8`, counted from the least
//! significant bit. Every function that touches the packing goes through this
//! module so the layout cannot be misindexed elsewhere.

use alloc::{boxed::Box, vec::Vec};

use crate::{
    macros::{bitpos, warn_event},
    traits::AllocError,
};

/// Number of bits packed into one byte of storage.
pub(crate) const BITS_PER_BYTE: usize = 8;

/// Number of bytes needed to hold `bits` bits.
#[inline(always)]
pub(crate) const fn byte_count(bits: usize) -> usize {
    bits.div_ceil(BITS_PER_BYTE)
}

/// Mask selecting bit position `pos` (0..8) within a byte.
#[inline(always)]
pub(crate) const fn mask(pos: usize) -> u8 {
    1 << pos
}

/// Reverses the bit order of a byte.
///
/// Bit 0 becomes bit 7, bit 1 becomes bit 6, and so on. Applying it twice
/// returns the original byte.
///
/// # Examples
///
/// ```
/// use packed_bitarray::reverse_byte;
///
/// assert_eq!(reverse_byte(0b0000_0011), 0b1100_0000);
/// assert_eq!(reverse_byte(reverse_byte(0x5a)), 0x5a);
/// ```
#[must_use]
#[inline(always)]
pub const fn reverse_byte(byte: u8) -> u8 {
    byte.reverse_bits()
}

/// Allocates a zero-filled buffer able to hold `bits` bits.
///
/// The reservation is fallible; on failure nothing is allocated and the
/// requested sizes are reported back.
pub(crate) fn try_alloc_zeroed(bits: usize) -> Result<Box<[u8]>, AllocError> {
    let bytes = byte_count(bits);
    let mut vec = Vec::new();
    if vec.try_reserve_exact(bytes).is_err() {
        warn_event!(bits, bytes, "bit array allocation failed");
        return Err(AllocError { bits, bytes });
    }
    vec.resize(bytes, 0);
    Ok(vec.into_boxed_slice())
}

/// Reads bit `i` of `buf`.
#[inline(always)]
pub(crate) fn load_bit(buf: &[u8], i: usize) -> bool {
    let (idx, bp) = bitpos!(i);
    buf[idx] & mask(bp) != 0
}

/// Writes bit `i` of `buf`, leaving every other bit unchanged.
#[inline(always)]
pub(crate) fn store_bit(buf: &mut [u8], i: usize, v: bool) {
    let (idx, bp) = bitpos!(i);
    let byte = &mut buf[idx];
    if v {
        *byte |= mask(bp);
    } else {
        *byte &= !mask(bp);
    }
}

/// Exchanges bits `i` and `j` of `buf`.
#[inline(always)]
pub(crate) fn swap_bits(buf: &mut [u8], i: usize, j: usize) {
    let (a, b) = (load_bit(buf, i), load_bit(buf, j));
    if a != b {
        store_bit(buf, i, b);
        store_bit(buf, j, a);
    }
}

/// Loads the 8 bits `[start, start + 8)` as a byte, bit `start` landing in
/// the least significant position. `start` need not be byte-aligned.
#[inline(always)]
pub(crate) fn load_byte_at(buf: &[u8], start: usize) -> u8 {
    let (idx, bp) = bitpos!(start);
    if bp == 0 {
        return buf[idx];
    }
    let pair = u16::from_le_bytes([buf[idx], buf[idx + 1]]);
    (pair >> bp) as u8
}

/// Stores `byte` into the 8 bits `[start, start + 8)`, preserving the bits
/// around them. `start` need not be byte-aligned.
#[inline(always)]
pub(crate) fn store_byte_at(buf: &mut [u8], start: usize, byte: u8) {
    let (idx, bp) = bitpos!(start);
    if bp == 0 {
        buf[idx] = byte;
        return;
    }
    let pair = u16::from_le_bytes([buf[idx], buf[idx + 1]]);
    let keep = !(0x00ff_u16 << bp);
    let [lo, hi] = ((pair & keep) | (u16::from(byte) << bp)).to_le_bytes();
    buf[idx] = lo;
    buf[idx + 1] = hi;
}

/// Mask of the addressable bits in the final byte of a `bits`-bit buffer.
#[inline(always)]
pub(crate) const fn tail_mask(bits: usize) -> u8 {
    match bits % BITS_PER_BYTE {
        0 => u8::MAX,
        rem => (1 << rem) - 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_byte_is_self_inverse() {
        for b in 0..=u8::MAX {
            assert_eq!(reverse_byte(reverse_byte(b)), b);
        }
        assert_eq!(reverse_byte(0b1000_0000), 0b0000_0001);
        assert_eq!(reverse_byte(0b1110_0100), 0b0010_0111);
    }

    #[test]
    fn test_byte_count() {
        assert_eq!(byte_count(0), 0);
        assert_eq!(byte_count(1), 1);
        assert_eq!(byte_count(8), 1);
        assert_eq!(byte_count(9), 2);
        assert_eq!(byte_count(usize::MAX), usize::MAX / 8 + 1);
    }

    #[test]
    fn test_load_store_bit() {
        let mut buf = [0u8; 2];
        store_bit(&mut buf, 0, true);
        store_bit(&mut buf, 9, true);
        assert_eq!(buf, [0b0000_0001, 0b0000_0010]);
        assert!(load_bit(&buf, 9));
        store_bit(&mut buf, 9, false);
        assert_eq!(buf, [0b0000_0001, 0]);
    }

    #[test]
    fn test_unaligned_byte_access() {
        let mut buf = [0b1010_0000u8, 0b0000_0101];
        assert_eq!(load_byte_at(&buf, 4), 0b0101_1010);
        assert_eq!(load_byte_at(&buf, 0), 0b1010_0000);

        store_byte_at(&mut buf, 3, 0xff);
        assert_eq!(buf, [0b1111_1000, 0b0000_0111]);

        let mut buf = [0xffu8, 0xff, 0xff];
        store_byte_at(&mut buf, 5, 0);
        assert_eq!(buf, [0b0001_1111, 0b1110_0000, 0xff]);
    }

    #[test]
    fn test_tail_mask() {
        assert_eq!(tail_mask(8), 0xff);
        assert_eq!(tail_mask(16), 0xff);
        assert_eq!(tail_mask(3), 0b111);
        assert_eq!(tail_mask(10), 0b11);
    }
}

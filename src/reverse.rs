//! In-place reversal of an arbitrary bit range.
//!
//! A range `[left, right]` is reversed by pairing every bit with its mirror
//! `left + right - i`. Pairs are exchanged one bit at a time until the left
//! cursor reaches a byte boundary; from there the interior is exchanged a
//! whole byte at a time, flipping the bit order of each relocated byte.
//!
//! If the leading and trailing partial bytes hold the same number of range
//! bits, the mirror of an aligned byte is itself aligned and the interior
//! pass is a plain byte swap. Otherwise each mirrored byte straddles two
//! storage bytes and is moved with an unaligned 8-bit load/store.

use crate::{
    macros::trace_event,
    storage::{BITS_PER_BYTE, load_byte_at, reverse_byte, store_byte_at, swap_bits},
};

/// Reverses the bits of `buf` over the inclusive range `[left, right]`.
///
/// The bit at `left + k` moves to `right - k`. Bits outside the range are
/// never written. `left >= right` is a no-op.
pub(crate) fn reverse_bits(buf: &mut [u8], left: usize, right: usize) {
    if left >= right {
        return;
    }
    let whole_left = left.next_multiple_of(BITS_PER_BYTE);
    let whole_end = (right + 1) / BITS_PER_BYTE * BITS_PER_BYTE;

    // Too short to carry a byte on each side of the midpoint.
    if whole_left >= whole_end || right - left + 1 < 2 * BITS_PER_BYTE {
        reverse_bitwise(buf, left, right);
        return;
    }

    let (mut i, mut j) = (left, right);
    while i < whole_left {
        swap_bits(buf, i, j);
        i += 1;
        j -= 1;
    }

    let aligned = (j + 1) % BITS_PER_BYTE == 0;
    trace_event!(left, right, aligned, "reversing bit range");
    if aligned {
        reverse_aligned(buf, &mut i, &mut j);
    } else {
        reverse_unaligned(buf, &mut i, &mut j);
    }

    if aligned && j + 1 - i == BITS_PER_BYTE {
        let mid = i / BITS_PER_BYTE;
        buf[mid] = reverse_byte(buf[mid]);
        return;
    }
    reverse_bitwise(buf, i, j);
}

/// Swaps whole bytes from both ends inward while `[i, j]` still holds two
/// disjoint bytes. Both cursors must sit on byte boundaries.
fn reverse_aligned(buf: &mut [u8], i: &mut usize, j: &mut usize) {
    debug_assert!(*i % BITS_PER_BYTE == 0 && (*j + 1) % BITS_PER_BYTE == 0);
    let (mut lo, mut hi) = (*i / BITS_PER_BYTE, *j / BITS_PER_BYTE);
    while lo < hi {
        let (a, b) = (buf[lo], buf[hi]);
        buf[lo] = reverse_byte(b);
        buf[hi] = reverse_byte(a);
        lo += 1;
        hi -= 1;
    }
    // An odd byte in the middle is left for the caller to flip once.
    *i = lo * BITS_PER_BYTE;
    *j = if lo == hi {
        *i + BITS_PER_BYTE - 1
    } else {
        *i - 1
    };
}

/// Moves aligned bytes at `i` against the 8 bits ending at `j`, which start
/// mid-byte.
fn reverse_unaligned(buf: &mut [u8], i: &mut usize, j: &mut usize) {
    debug_assert!(*i % BITS_PER_BYTE == 0);
    while *j + 1 - *i >= 2 * BITS_PER_BYTE {
        let lo = *i / BITS_PER_BYTE;
        let hi_start = *j + 1 - BITS_PER_BYTE;
        let (a, b) = (buf[lo], load_byte_at(buf, hi_start));
        buf[lo] = reverse_byte(b);
        store_byte_at(buf, hi_start, reverse_byte(a));
        *i += BITS_PER_BYTE;
        *j -= BITS_PER_BYTE;
    }
}

/// Bit-at-a-time reversal of `[i, j]`.
fn reverse_bitwise(buf: &mut [u8], mut i: usize, mut j: usize) {
    while i < j {
        swap_bits(buf, i, j);
        i += 1;
        j -= 1;
    }
}

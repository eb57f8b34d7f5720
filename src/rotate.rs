//! Cyclic rotation of a bit sub-range by three reversals.

use crate::{macros::trace_event, modulo::floor_mod, reverse::reverse_bits};

/// Rotates `[offset, offset + length)` of `buf` so every bit moves
/// `right_amount` places to the right, wrapping within the sub-range.
/// Negative amounts rotate left.
pub(crate) fn rotate_bits(buf: &mut [u8], offset: usize, length: usize, right_amount: isize) {
    if length == 0 {
        return;
    }
    // Same as floor_mod(-right_amount, length) without negating isize::MIN.
    let left_amount = match floor_mod(right_amount, length) {
        0 => 0,
        right => length - right,
    };
    rotate_left_bits(buf, offset, length, left_amount);
}

/// Rotates `[offset, offset + length)` of `buf` left by `left_amount`, which
/// must already be reduced below `length`.
pub(crate) fn rotate_left_bits(buf: &mut [u8], offset: usize, length: usize, left_amount: usize) {
    debug_assert!(left_amount < length.max(1));
    if left_amount == 0 {
        return;
    }
    let (l, m, r) = (offset, offset + left_amount, offset + length - 1);
    trace_event!(offset, length, left_amount, "rotating bit range");
    reverse_bits(buf, l, m - 1);
    reverse_bits(buf, m, r);
    reverse_bits(buf, l, r);
}

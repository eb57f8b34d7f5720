//! Euclidean modulo for signed rotation amounts.

/// Returns `n` modulo `m` under the mathematical definition, always in
/// `0..m` regardless of the sign of `n`.
///
/// Rust's `%` keeps the sign of the dividend (`-1 % 10 == -1`), which is the
/// wrong answer for normalizing a rotation amount into an index range.
///
/// # Panics
///
/// Panics if `m` is zero.
///
/// # Examples
///
/// ```
/// use packed_bitarray::floor_mod;
///
/// assert_eq!(floor_mod(7, 5), 2);
/// assert_eq!(floor_mod(-1, 10), 9);
/// assert_eq!(floor_mod(-10, 10), 0);
/// ```
#[must_use]
#[track_caller]
pub fn floor_mod(n: isize, m: usize) -> usize {
    assert!(m != 0, "modulus must be non-zero");
    let rem = n.unsigned_abs() % m;
    if n >= 0 || rem == 0 { rem } else { m - rem }
}

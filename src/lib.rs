//! A fixed-size, densely packed bit array with fast in-place rotation of
//! arbitrary sub-ranges.
//!
//! This crate provides [`BitArray`], an array of `len` bits stored eight to a
//! byte. Besides constant-time single-bit access it can rotate any
//! contiguous sub-range left or right by any amount, in place and without an
//! auxiliary buffer.
//!
//! # Features
//!
//! - **Packed storage**: `len.div_ceil(8)` bytes, least significant bit first
//! - **Fallible construction** via [`BitArray::try_new`]
//! - **Sub-range rotation** by any signed amount ([`BitArray::rotate`])
//! - **Range reversal** ([`BitArray::reverse`])
//! - **Reproducible random fill** from a caller-supplied `rand` generator
//! - **`no_std` support** with `alloc`
//! - **Optional `tracing` events** behind the `tracing` feature
//!
//! # Examples
//!
//! ```
//! use packed_bitarray::BitArray;
//!
//! let mut bits = BitArray::try_new(10)?;
//! for i in 5..10 {
//!     bits.set(i, true);
//! }
//! assert_eq!(bits.to_string(), "1111100000");
//!
//! // Rotate bits 2..8 two places towards higher indices.
//! bits.rotate(2, 6, 2);
//! assert_eq!(bits.to_string(), "1110001100");
//!
//! // Negative amounts rotate the other way.
//! bits.rotate(2, 6, -2);
//! assert_eq!(bits.to_string(), "1111100000");
//! # Ok::<(), packed_bitarray::AllocError>(())
//! ```
//!
//! # Rotation Strategy
//!
//! A left rotation by `k` of a range is performed as three reversals: the
//! first `k` bits, the remaining bits, then the whole range. Each reversal
//! exchanges the partial bytes at the edges of its range bit by bit and the
//! byte-aligned interior a byte at a time, flipping the bit order of every
//! relocated byte. Rotation therefore costs `O(length)` with roughly one
//! memory operation per byte of the interior.
//!
//! # Performance
//!
//! - `get`/`set` are O(1)
//! - `reverse` and `rotate` are O(length) and allocation free
//! - No interior mutability or locking: share across threads behind your own
//!   lock when mutating

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

// Module declarations
mod bitarray;
mod iter;
mod macros;
mod modulo;
mod reverse;
mod rotate;
mod storage;
mod traits;

// Re-exports
pub use bitarray::BitArray;
pub use iter::{Iter, Ones};
pub use modulo::floor_mod;
pub use storage::reverse_byte;
pub use traits::{AllocError, ParseBitArrayError};

//! Error types and trait implementations for `BitArray`.

use alloc::{boxed::Box, vec::Vec};
use core::{
    fmt,
    hash::{Hash, Hasher},
    ops::Index,
    str::FromStr,
};

use crate::{
    BitArray,
    storage::{byte_count, store_bit},
};

/// Error returned when the buffer backing a [`BitArray`] cannot be
/// allocated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocError {
    /// Number of bits requested
    pub bits: usize,
    /// Number of bytes that could not be allocated
    pub bytes: usize,
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to allocate {} bytes for a {}-bit array",
            self.bytes, self.bits
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AllocError {}

/// Errors that can occur when parsing a binary string into a [`BitArray`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseBitArrayError {
    /// Invalid character found in the binary string.
    InvalidChar {
        /// The invalid character found
        ch: char,
        /// The position of the invalid character
        pos: usize,
    },

    /// Empty string provided.
    Empty,
}

impl fmt::Display for ParseBitArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidChar { ch, pos } => {
                write!(
                    f,
                    "invalid character '{ch}' at position {pos} in binary string"
                )
            }
            Self::Empty => write!(f, "cannot parse bit array from empty string"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseBitArrayError {}

impl Default for BitArray {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Clone for BitArray {
    fn clone(&self) -> Self {
        Self::from_raw(self.len(), Box::from(self.as_bytes()))
    }
}

impl PartialEq for BitArray {
    /// Two arrays are equal when they have the same length and the same
    /// addressable bits. Unused tail bits are ignored.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.masked_bytes().eq(other.masked_bytes())
    }
}

impl Eq for BitArray {}

impl Hash for BitArray {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for byte in self.masked_bytes() {
            state.write_u8(byte);
        }
    }
}

impl Index<usize> for BitArray {
    type Output = bool;

    /// Returns a reference to a static `true` or `false` matching the bit at
    /// the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bitarray::BitArray;
    ///
    /// let mut bits = BitArray::new(8);
    /// bits.set(5, true);
    /// assert!(bits[5]);
    /// assert!(!bits[4]);
    /// ```
    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        if self.get(index) { &true } else { &false }
    }
}

impl fmt::Binary for BitArray {
    /// Formats the array as exactly `len()` binary digits, the highest index
    /// first and bit 0 rightmost, with a `0b` prefix in alternate mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bitarray::BitArray;
    ///
    /// let mut bits = BitArray::new(5);
    /// bits.set(0, true);
    /// bits.set(3, true);
    /// assert_eq!(format!("{bits:b}"), "01001");
    /// assert_eq!(format!("{bits:#b}"), "0b01001");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0b")?;
        }
        for bit in self.iter().rev() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Display for BitArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(self, f)
    }
}

impl fmt::Debug for BitArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitArray({}; {self:#b})", self.len())
    }
}

impl FromStr for BitArray {
    type Err = ParseBitArrayError;

    /// Parses a binary string into a [`BitArray`].
    ///
    /// The input may start with `0b` and contain only `0`, `1` and `_`
    /// separators. The rightmost digit becomes bit 0 and the array length is
    /// the number of digits, leading zeros included.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseBitArrayError`] if the string has no digits or holds
    /// any other character.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::str::FromStr;
    /// use packed_bitarray::BitArray;
    ///
    /// let bits = BitArray::from_str("0b0101")?;
    /// assert_eq!(bits.len(), 4);
    /// assert!(bits.get(0));
    /// assert!(!bits.get(1));
    /// assert!(bits.get(2));
    /// assert!(!bits.get(3));
    ///
    /// # Ok::<(), packed_bitarray::ParseBitArrayError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("0b").unwrap_or(s).as_bytes();

        let mut digits = 0;
        for (pos, &v) in s.iter().enumerate() {
            match v {
                b'0' | b'1' => digits += 1,
                b'_' => {}
                _ => return Err(ParseBitArrayError::InvalidChar { ch: v as char, pos }),
            }
        }
        if digits == 0 {
            return Err(ParseBitArrayError::Empty);
        }

        let mut bytes: Vec<u8> = alloc::vec![0; byte_count(digits)];
        let mut bit = 0;
        for &v in s.iter().rev() {
            if v == b'_' {
                continue;
            }
            store_bit(&mut bytes, bit, v == b'1');
            bit += 1;
        }
        debug_assert_eq!(bit, digits);
        Ok(Self::from_raw(digits, bytes.into_boxed_slice()))
    }
}

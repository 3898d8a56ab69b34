//! The bit array backing the sieve.

use crate::bits;

use std::collections::TryReserveError;

//-----------------------------------------------------------------------------

/// A fixed-size array of bits based on [`Vec`] of `u64` values.
///
/// The length is chosen at construction time and every bit starts unset.
/// Construction is the only operation that allocates, and it reports failure
/// instead of aborting, so a caller can refuse an oversized request
/// gracefully.
///
/// # Examples
///
/// ```
/// use compact_sieve::bit_field::BitField;
///
/// let mut field = BitField::try_with_len(137).unwrap();
/// assert_eq!(field.len(), 137);
/// assert_eq!(field.count_ones(), 0);
///
/// field.set_bit(1, true);
/// field.set_bit(33, true);
/// field.set_bit(95, true);
/// assert!(field.get_bit(33));
/// assert!(!field.get_bit(34));
/// assert_eq!(field.count_ones(), 3);
/// ```
///
/// # Notes
///
/// * The unused part of the last integer is always set to `0`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BitField {
    bit_len: usize,
    data: Vec<u64>,
}

impl BitField {
    /// Creates a field of `len` unset bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use compact_sieve::bit_field::BitField;
    ///
    /// let field = BitField::try_with_len(137).unwrap();
    /// assert_eq!(field.len(), 137);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`TryReserveError`] if the underlying vector cannot be
    /// allocated. The field itself is never partially constructed.
    ///
    /// ```
    /// use compact_sieve::bit_field::BitField;
    ///
    /// assert!(BitField::try_with_len(1 << 60).is_err());
    /// ```
    pub fn try_with_len(len: usize) -> Result<BitField, TryReserveError> {
        let words = bits::bits_to_words(len);
        let mut data: Vec<u64> = Vec::new();
        data.try_reserve_exact(words)?;
        data.resize(words, 0);

        Ok(BitField {
            bit_len: len,
            data,
        })
    }

    /// Returns the length of the field in bits.
    pub fn len(&self) -> usize {
        self.bit_len
    }

    /// Returns `true` if the field is empty.
    pub fn is_empty(&self) -> bool {
        self.bit_len == 0
    }

    /// Writes a bit to the field.
    ///
    /// # Arguments
    ///
    /// * `bit_offset`: Offset in the bit field.
    /// * `bit`: The value of the bit.
    ///
    /// # Panics
    ///
    /// May panic if `bit_offset` is not a valid offset in the field.
    pub fn set_bit(&mut self, bit_offset: usize, bit: bool) {
        let (index, offset) = bits::split_offset(bit_offset);
        self.data[index] &= !(1u64 << offset);
        self.data[index] |= (bit as u64) << offset;
    }

    /// Reads a bit from the field.
    ///
    /// # Panics
    ///
    /// May panic if `bit_offset` is not a valid offset in the field.
    pub fn get_bit(&self, bit_offset: usize) -> bool {
        let (index, offset) = bits::split_offset(bit_offset);
        (self.data[index] & (1u64 << offset)) != 0
    }

    /// Returns the number of set bits in the field.
    ///
    /// Each storage word is counted with a population count and the counts
    /// are summed.
    ///
    /// # Examples
    ///
    /// ```
    /// use compact_sieve::bit_field::BitField;
    ///
    /// let mut field = BitField::try_with_len(90).unwrap();
    /// field.set_bit(17, true);
    /// field.set_bit(89, true);
    /// assert_eq!(field.count_ones(), 2);
    /// ```
    pub fn count_ones(&self) -> usize {
        self.data.iter().map(|word| word.count_ones() as usize).sum()
    }
}

//-----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits;

    #[test]
    fn empty_field() {
        let empty = BitField::try_with_len(0).unwrap();
        assert!(empty.is_empty(), "Created a non-empty empty field");
        assert_eq!(empty.len(), 0, "Nonzero length for an empty field");
        assert_eq!(empty.count_ones(), 0, "Nonzero count for an empty field");
    }

    #[test]
    fn field_lengths() {
        let lengths: Vec<usize> = vec![1, 63, 64, 65, 137, 8192];
        for len in lengths.iter() {
            let field = BitField::try_with_len(*len).unwrap();
            assert_eq!(field.len(), *len, "Invalid length for a {}-bit field", len);
            assert!(!field.is_empty(), "A {}-bit field claims to be empty", len);
        }
    }

    #[test]
    fn initially_clear() {
        let field = BitField::try_with_len(137).unwrap();
        for i in 0..field.len() {
            assert!(!field.get_bit(i), "Bit {} was set in a fresh field", i);
        }
        assert_eq!(field.count_ones(), 0, "Nonzero count for a fresh field");
    }

    #[test]
    fn set_and_get() {
        let mut field = BitField::try_with_len(137).unwrap();
        for i in 0..field.len() {
            field.set_bit(i, i % 3 == 1);
        }
        for i in 0..field.len() {
            assert_eq!(field.get_bit(i), i % 3 == 1, "Invalid bit {}", i);
        }

        // Overwrite everything and check again.
        for i in 0..field.len() {
            field.set_bit(i, i % 3 != 1);
        }
        for i in 0..field.len() {
            assert_eq!(field.get_bit(i), i % 3 != 1, "Invalid bit {} after overwrite", i);
        }
    }

    #[test]
    fn count_over_word_boundaries() {
        let len = 3 * bits::WORD_BITS + 17;
        let mut field = BitField::try_with_len(len).unwrap();
        let mut expected = 0;
        for i in (0..len).step_by(7) {
            field.set_bit(i, true);
            expected += 1;
        }
        assert_eq!(field.count_ones(), expected, "Invalid count across word boundaries");

        // Setting an already set bit must not change the count.
        field.set_bit(0, true);
        assert_eq!(field.count_ones(), expected, "Count changed when re-setting a bit");

        field.set_bit(0, false);
        assert_eq!(field.count_ones(), expected - 1, "Count did not decrease when clearing a bit");
    }

    #[test]
    fn failed_allocation() {
        // 2^60 bits is far beyond any real allocation.
        let result = BitField::try_with_len(1usize << 60);
        assert!(result.is_err(), "An absurd allocation request succeeded");
    }
}

//-----------------------------------------------------------------------------

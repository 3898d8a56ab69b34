//! # A prime-counting sieve over a compacted bitfield
//!
//! This crate counts the primes in `[2, limit]` with a Sieve of Eratosthenes
//! that stores one bit per odd number. Even numbers are never stored, which
//! halves the memory use, and the composite marks are counted at the end with
//! a word-parallel population count.
//!
//! The entry point is [`sieve::count_primes`]. The bit array behind it lives
//! in [`bit_field`], and the word-level arithmetic in [`bits`].
//!
//! # Notes
//!
//! * This crate assumes that `usize` is 64-bit. With a 32-bit `usize`, limits
//! above `2^33` cannot be represented in the bit field.
//! * Counting is fastest with the POPCNT instruction, but the code does not
//! require it.

pub mod bit_field;
pub mod bits;
pub mod sieve;

#[cfg(any(test, feature = "bench"))]
#[doc(hidden)]
pub mod internal;

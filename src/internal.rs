// Reference implementations for tests and benchmarks.

use crate::bit_field::BitField;

//-----------------------------------------------------------------------------

// Counts the primes in `[2, limit]` with one bit per integer, sieving from 2.
// This is the uncompacted baseline: twice the memory of the compacted sieve,
// with the even numbers stored and struck out like everything else.
pub fn count_primes_dense(limit: u64) -> u32 {
    if limit <= 1 {
        return 0;
    }

    let mut field = BitField::try_with_len(limit as usize + 1).unwrap();

    let mut p: u64 = 2;
    while p * p <= limit {
        let mut i = (2 * p) as usize;
        while i <= limit as usize {
            field.set_bit(i, true);
            i += p as usize;
        }
        loop {
            p += 1;
            if !field.get_bit(p as usize) {
                break;
            }
        }
    }

    // Bits 0 and 1 are never set, and `limit - 1` counts the numbers in
    // `[2, limit]`.
    (limit - 1 - field.count_ones() as u64) as u32
}

//-----------------------------------------------------------------------------

// Counts the primes in `[2, limit]` by trial division.
pub fn count_primes_trial(limit: u64) -> u32 {
    let mut result = 0;
    for n in 2..=limit {
        let mut divisor = 2;
        let mut prime = true;
        while divisor * divisor <= n {
            if n % divisor == 0 {
                prime = false;
                break;
            }
            divisor += 1;
        }
        if prime {
            result += 1;
        }
    }
    result
}

//-----------------------------------------------------------------------------

//! memcmp

use crate::volatile;

/// Compares two slices of memory content and returns their accumulated difference: zero if they
/// are equal, non-zero otherwise.
///
/// Every byte of both slices is read, through volatile loads, whatever the position of the first
/// difference. The first `len - len % 4` bytes are read as four byte words.
///
/// # Panics
/// If the slices have different lengths.
///
/// ## Leaks
/// The execution time of the function grows linearly with the length of the input. This is
/// considered safe.
///
/// ## Examples
///
/// ```rust
/// use ctflow_constant_time::memdiff;
/// assert_eq!(memdiff(b"", b""), 0);
/// assert_eq!(memdiff(b"abcde", b"abcde"), 0);
/// assert_ne!(memdiff(b"abcde", b"abcdf"), 0);
/// ```
#[inline]
pub fn memdiff(a: &[u8], b: &[u8]) -> u32 {
    assert!(a.len() == b.len());

    let mut diff = 0u32;

    let (a_words, a_tail) = a.split_at(a.len() - a.len() % 4);
    let (b_words, b_tail) = b.split_at(a_words.len());

    for (x, y) in a_words.chunks_exact(4).zip(b_words.chunks_exact(4)) {
        let x = volatile::read_word(x);
        let y = volatile::read_word(y);
        diff |= x ^ y;
    }

    for (x, y) in a_tail.iter().zip(b_tail.iter()) {
        // read both before combining so the volatile accesses stay in order
        let x = volatile::read_u8(x);
        let y = volatile::read_u8(y);
        diff |= (x ^ y) as u32;
    }

    diff
}

/// Compares two slices of memory content and returns whether they are equal
///
/// ## Leaks
/// If the two slices have differents lengths, the function will return immediately. This
/// effectively leaks the information whether the slices have equal length or not. This is widely
/// considered safe.
///
/// The execution time of the function grows approx. linear with the length of the input. This is
/// considered safe.
///
/// ## Examples
///
/// ```rust
/// use ctflow_constant_time::memcmp;
/// let a = [0, 0, 0, 0];
/// let b = [0, 0, 0, 1];
/// let c = [0, 0, 0];
/// assert!(memcmp(&a, &a));
/// assert!(!memcmp(&a, &b));
/// assert!(!memcmp(&a, &c));
/// ```
#[inline]
pub fn memcmp(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && memdiff(a, b) == 0
}

#[cfg(test)]
/// Functional and access-trace tests of the buffer comparison
mod tests {
    use super::*;
    use crate::volatile::trace;
    use proptest::prelude::*;

    #[test]
    fn every_length_and_position() {
        for len in 0..=19usize {
            let a: Vec<u8> = (0..len as u8).map(|i| i.wrapping_mul(31)).collect();
            assert_eq!(memdiff(&a, &a.clone()), 0, "len {len}");
            for pos in 0..len {
                let mut b = a.clone();
                b[pos] ^= 0x80;
                assert_ne!(memdiff(&a, &b), 0, "len {len}, pos {pos}");
            }
        }
    }

    #[test]
    #[should_panic]
    fn length_mismatch_panics() {
        memdiff(b"abc", b"ab");
    }

    #[test]
    fn access_trace_does_not_depend_on_content() {
        let a = [0x5au8; 23];
        let mut b = [0u8; 23];

        b.copy_from_slice(&a);
        let (d, equal) = trace::capture(|| memdiff(&a, &b));
        assert_eq!(d, 0);

        b[0] ^= 1;
        let (d, first_differs) = trace::capture(|| memdiff(&a, &b));
        assert_ne!(d, 0);

        assert_eq!(equal, first_differs);
        // 5 words and 3 tail bytes from each slice
        assert_eq!(equal.len(), 2 * (5 + 3));
    }

    proptest! {
        #[test]
        fn memdiff_is_zero_iff_equal(a in any::<Vec<u8>>(), flip in any::<prop::sample::Index>(), bits in 1..=255u8) {
            prop_assert_eq!(memdiff(&a, &a), 0);
            if !a.is_empty() {
                let mut b = a.clone();
                b[flip.index(a.len())] ^= bits;
                prop_assert_ne!(memdiff(&a, &b), 0);
                prop_assert!(!memcmp(&a, &b));
            }
        }

        #[test]
        fn memcmp_matches_slice_eq(a in any::<Vec<u8>>(), b in any::<Vec<u8>>()) {
            prop_assert_eq!(memcmp(&a, &b), a == b);
        }
    }
}

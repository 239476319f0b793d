#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
//! constant-flow implementations of some primitives
//!
//! Internal library of the ctflow cryptography stack providing branchless, constant-trace
//! building blocks: their instruction sequence and the memory addresses they touch depend on the
//! sizes of their inputs only, never on the values of secret inputs.
//!
//! - masks and boolean tests on machine words ([uint_mask], [bool_eq], [range_mask], [mask_lt],
//!   [limb_lt], ...)
//! - comparison of whole buffers ([memdiff], [memcmp])
//! - conditional selection and copying ([select], [copy_if_eq], [copy_at_secret_offset],
//!   [compact_left])
//! - conditional assignment, swap and comparison of multi-precision integers ([cond_assign],
//!   [cond_swap], [lt_unsigned], [lt_signed])
//! - RSAES-PKCS1-v1_5 decoding resistant to Bleichenbacher-style padding oracles
//!   ([rsaes_pkcs1_v15_unpadding])
//!
//! # Examples
//!
//! ```rust
//! use ctflow_constant_time::{memcmp, memdiff, select};
//!
//! let a = [1, 2, 3, 4];
//! let b = [1, 2, 3, 4];
//! let c = [1, 2, 3, 5];
//!
//! // Compare for equality
//! assert!(memcmp(&a, &b));
//! assert!(!memcmp(&a, &c));
//! assert_ne!(memdiff(&a, &c), 0);
//!
//! // Select without branching
//! let flag = memdiff(&a, &b);
//! assert_eq!(select(flag, 10, 20), 20);
//! ```
//!
//! # Security Notes
//!
//! While these functions aim to be constant-time, they may leak timing information in some cases:
//!
//! - [mask_lt], [mask_ge] and [bool_gt] are only correct for operands below `2^(usize::BITS - 1)`
//!   (`usize::MAX >> 1`); larger operands give wrong results, e.g. `mask_lt(usize::MAX, 0)` is
//!   all ones. Buffer lengths and offsets always satisfy this. [limb_lt] covers the full range.
//! - Length mismatches between inputs are immediately detectable
//! - Execution time scales with input size (quadratically for [compact_left] and the
//!   PKCS#1 decoder)
//! - Growing a multi-precision integer in [cond_assign] and [cond_swap] allocates, in time
//!   depending on the limb counts
//!
//! The compiler is kept from reintroducing branches by routing secret buffers through volatile
//! loads and secret-derived masks through [core::hint::black_box]. This is best effort; the
//! generated code should be checked on the targets that matter.

mod compare;
mod error;
mod mask;
mod memcmp;
mod mpi;
mod pkcs1;
mod select;
mod volatile;

#[cfg(all(test, feature = "constant_time_tests"))]
mod timing;

pub use compare::{bool_gt, limb_lt, mask_ge, mask_lt};
pub use error::Error;
pub use mask::{bool_eq, limb_mask, range_mask, size_mask, uint_mask};
pub use memcmp::{memcmp, memdiff};
pub use mpi::{
    cond_assign, cond_swap, limbs_cond_assign, limbs_cond_swap, lt_signed, lt_unsigned,
    sign_is_negative, Limb, Mpi, MpiStorage, MPI_MAX_LIMBS, SIGN_NEGATIVE, SIGN_POSITIVE,
};
pub use pkcs1::{
    rsaes_pkcs1_v15_unpadding, Pkcs1Status, Unpadded, BLOCK_TYPE_ENCRYPTION, MIN_PADDING_LEN,
    PKCS1_OVERHEAD,
};
pub use select::{compact_left, copy_at_secret_offset, copy_if_eq, select, select_size};

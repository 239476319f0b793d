//! Error type

use thiserror::Error;

/// Errors reported by this crate
///
/// [Error::BadInputData] and [Error::AllocFailed] depend only on public sizes and are returned
/// through ordinary control flow. [Error::InvalidPadding] and [Error::OutputTooLarge] describe
/// secret-dependent outcomes; they are never returned directly by a constant-flow routine, only by
/// [crate::Unpadded::into_result] once the caller decides to act on the outcome.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Caller error: inconsistent sizes or an input that can not be valid whatever its content
    #[error("bad input data: {0}")]
    BadInputData(&'static str),

    /// Growing a multi-precision integer failed
    #[error("could not allocate {limbs} limbs")]
    AllocFailed {
        /// Requested limb count
        limbs: usize,
    },

    /// The decrypted block is not PKCS#1 v1.5 encryption padding
    #[error("invalid padding")]
    InvalidPadding,

    /// The plaintext does not fit into the output buffer
    #[error("output buffer too small for the plaintext")]
    OutputTooLarge,
}

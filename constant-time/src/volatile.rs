//! Volatile memory access
//!
//! Secret buffers are read and written through these helpers so the optimizer can not prove the
//! accesses free of side effects. Without this it may turn an accumulation loop such as the one
//! in [crate::memdiff] into one that exits early once the accumulator saturates.
//!
//! In test builds every access is additionally recorded by [trace], which lets the test suite
//! check that two secret inputs of the same shape produce the same sequence of addresses.

use core::hint::black_box;
use core::ptr;

use crate::Limb;

/// Reads one byte through a volatile load.
#[inline(always)]
pub(crate) fn read_u8(src: &u8) -> u8 {
    #[cfg(test)]
    trace::record(trace::Access::Read, src as *const u8 as usize);
    // Safety: `src` is a valid, aligned reference
    unsafe { ptr::read_volatile(src) }
}

/// Writes one byte through a volatile store.
#[inline(always)]
pub(crate) fn write_u8(dst: &mut u8, val: u8) {
    #[cfg(test)]
    trace::record(trace::Access::Write, dst as *mut u8 as usize);
    // Safety: `dst` is a valid, aligned, exclusive reference
    unsafe { ptr::write_volatile(dst, val) }
}

/// Reads the first four bytes of `src` through a single volatile load and returns them as a
/// native-endian word.
///
/// # Panics
/// If `src` is shorter than four bytes.
#[inline(always)]
pub(crate) fn read_word(src: &[u8]) -> u32 {
    assert!(src.len() >= 4);
    #[cfg(test)]
    trace::record(trace::Access::Read, src.as_ptr() as usize);
    // Safety: `src` holds at least four bytes and `[u8; 4]` has an alignment of one, so the
    // load is in bounds and aligned at any address
    u32::from_ne_bytes(unsafe { ptr::read_volatile(src.as_ptr() as *const [u8; 4]) })
}

/// Writes `val` to the first four bytes of `dst` through a single volatile store, in native
/// byte order.
///
/// # Panics
/// If `dst` is shorter than four bytes.
#[inline(always)]
pub(crate) fn write_word(dst: &mut [u8], val: u32) {
    assert!(dst.len() >= 4);
    #[cfg(test)]
    trace::record(trace::Access::Write, dst.as_mut_ptr() as usize);
    // Safety: as for [read_word], with an exclusive borrow of `dst`
    unsafe { ptr::write_volatile(dst.as_mut_ptr() as *mut [u8; 4], val.to_ne_bytes()) }
}

/// Reads one limb through a volatile load.
#[inline(always)]
pub(crate) fn read_limb(src: &Limb) -> Limb {
    #[cfg(test)]
    trace::record(trace::Access::Read, src as *const Limb as usize);
    // Safety: `src` is a valid, aligned reference
    unsafe { ptr::read_volatile(src) }
}

/// Writes one limb through a volatile store.
#[inline(always)]
pub(crate) fn write_limb(dst: &mut Limb, val: Limb) {
    #[cfg(test)]
    trace::record(trace::Access::Write, dst as *mut Limb as usize);
    // Safety: `dst` is a valid, aligned, exclusive reference
    unsafe { ptr::write_volatile(dst, val) }
}

/// Passes a secret-derived value through an opaque barrier.
///
/// Masks computed from secret data are routed through here before they are used, so the
/// compiler can not see that they only take two values and rebuild a branch from them.
#[inline(always)]
pub(crate) fn opaque<T>(v: T) -> T {
    black_box(v)
}

//! ARM NEON `uint8x16` intrinsic emulation.
//!
//! One function per emulated instruction, keeping the NEON names
//! (`neon::vaddq_u8` emulates `vaddq_u8`). On aarch64 (`cfg(neon)`) these
//! are native passthroughs; on x86 (`cfg(sse)`) they map to the SSE2
//! 128-bit integer instructions where one exists; the portable lane loop
//! covers the rest. All byte lane arithmetic wraps modulo 2⁸.

#[cfg(all(sse, target_arch = "x86"))]
use core::arch::x86::*;
#[cfg(all(sse, target_arch = "x86_64"))]
use core::arch::x86_64::*;

#[cfg(neon)]
use core::arch::aarch64 as arch;

use crate::vector::U8x16;

/// Lane-wise wrapping `a + b`. Emulates `vaddq_u8`.
#[inline(always)]
pub fn vaddq_u8(a: U8x16, b: U8x16) -> U8x16 {
    #[cfg(neon)]
    return U8x16::from_u8x16_t(unsafe { arch::vaddq_u8(a.to_u8x16_t(), b.to_u8x16_t()) });
    #[cfg(sse)]
    return U8x16::from_m128i(unsafe { _mm_add_epi8(a.to_m128i(), b.to_m128i()) });
    #[cfg(fallback)]
    return U8x16::from_fn(|i| a[i].wrapping_add(b[i]));
}

/// Lane-wise wrapping `a - b`. Emulates `vsubq_u8`.
#[inline(always)]
pub fn vsubq_u8(a: U8x16, b: U8x16) -> U8x16 {
    #[cfg(neon)]
    return U8x16::from_u8x16_t(unsafe { arch::vsubq_u8(a.to_u8x16_t(), b.to_u8x16_t()) });
    #[cfg(sse)]
    return U8x16::from_m128i(unsafe { _mm_sub_epi8(a.to_m128i(), b.to_m128i()) });
    #[cfg(fallback)]
    return U8x16::from_fn(|i| a[i].wrapping_sub(b[i]));
}

/// Lane-wise wrapping `a * b`. Emulates `vmulq_u8`.
///
/// SSE2 has no 8-bit multiply, so x86 builds use the lane loop too.
#[inline(always)]
pub fn vmulq_u8(a: U8x16, b: U8x16) -> U8x16 {
    #[cfg(neon)]
    return U8x16::from_u8x16_t(unsafe { arch::vmulq_u8(a.to_u8x16_t(), b.to_u8x16_t()) });
    #[cfg(not(neon))]
    return U8x16::from_fn(|i| a[i].wrapping_mul(b[i]));
}

/// Broadcasts one byte to every lane. Emulates `vdupq_n_u8`.
#[inline(always)]
pub fn vdupq_n_u8(value: u8) -> U8x16 {
    #[cfg(neon)]
    return U8x16::from_u8x16_t(unsafe { arch::vdupq_n_u8(value) });
    #[cfg(sse)]
    return U8x16::from_m128i(unsafe { _mm_set1_epi8(value as i8) });
    #[cfg(fallback)]
    return U8x16::splat(value);
}

/// Loads sixteen bytes. Emulates `vld1q_u8`.
#[inline(always)]
pub fn vld1q_u8(mem: &[u8; 16]) -> U8x16 {
    U8x16::from_array(*mem)
}

/// Stores sixteen bytes. Emulates `vst1q_u8`.
#[inline(always)]
pub fn vst1q_u8(mem: &mut [u8; 16], a: U8x16) {
    *mem = a.to_array();
}

//! Reciprocal and reciprocal-square-root estimates.
//!
//! The hardware instructions are approximations with a guaranteed relative
//! error of at most 1.5 × 2⁻¹², not exact results. The x86 passthrough uses
//! the hardware estimate; the portable paths compute the exact value, which
//! trivially satisfies the same bound. Bit-exact matching of the hardware
//! seed tables is not attempted — callers comparing results across paths
//! must use the documented tolerance, never equality.

#[cfg(all(sse, target_arch = "x86"))]
use core::arch::x86::*;
#[cfg(all(sse, target_arch = "x86_64"))]
use core::arch::x86_64::*;

use crate::vector::F32x4;

/// Maximum relative error of the estimate operations, from the ISA manual.
pub const ESTIMATE_RELATIVE_ERROR: f32 = 1.5 / 4096.0;

/// Lane-wise approximate `1 / a`. Emulates `_mm_rcp_ps`.
#[inline(always)]
pub fn rcp_ps(a: F32x4) -> F32x4 {
    #[cfg(sse)]
    return F32x4::from_m128(unsafe { _mm_rcp_ps(a.to_m128()) });
    #[cfg(not(sse))]
    return F32x4::from_fn(|i| 1.0 / a[i]);
}

/// Approximate `1 / a[0]` in lane 0, lanes 1..3 from `a`. Emulates
/// `_mm_rcp_ss`.
#[inline(always)]
pub fn rcp_ss(a: F32x4) -> F32x4 {
    #[cfg(sse)]
    return F32x4::from_m128(unsafe { _mm_rcp_ss(a.to_m128()) });
    #[cfg(not(sse))]
    return {
        let mut r = a.to_array();
        r[0] = 1.0 / a[0];
        F32x4::from_array(r)
    };
}

/// Lane-wise approximate `1 / sqrt(a)`. Emulates `_mm_rsqrt_ps`.
#[inline(always)]
pub fn rsqrt_ps(a: F32x4) -> F32x4 {
    #[cfg(sse)]
    return F32x4::from_m128(unsafe { _mm_rsqrt_ps(a.to_m128()) });
    #[cfg(not(sse))]
    return F32x4::from_fn(|i| 1.0 / a[i].sqrt());
}

/// Approximate `1 / sqrt(a[0])` in lane 0, lanes 1..3 from `a`. Emulates
/// `_mm_rsqrt_ss`.
#[inline(always)]
pub fn rsqrt_ss(a: F32x4) -> F32x4 {
    #[cfg(sse)]
    return F32x4::from_m128(unsafe { _mm_rsqrt_ss(a.to_m128()) });
    #[cfg(not(sse))]
    return {
        let mut r = a.to_array();
        r[0] = 1.0 / a[0].sqrt();
        F32x4::from_array(r)
    };
}

//! Arithmetic lane operations: add/sub/mul/div/sqrt, min/max, averages,
//! sum of absolute differences, high-half multiply.

#[cfg(all(sse, target_arch = "x86"))]
use core::arch::x86::*;
#[cfg(all(sse, target_arch = "x86_64"))]
use core::arch::x86_64::*;

#[cfg(neon)]
use core::arch::aarch64::*;

use crate::vector::{F32x4, I16x4, U16x4, U8x8};

macro_rules! packed_binop_ps {
    ($(#[$doc:meta])* $name:ident, $intr:ident, $vintr:ident, $op:tt) => {
        $(#[$doc])*
        #[inline(always)]
        pub fn $name(a: F32x4, b: F32x4) -> F32x4 {
            #[cfg(sse)]
            return F32x4::from_m128(unsafe { $intr(a.to_m128(), b.to_m128()) });
            #[cfg(neon)]
            return F32x4::from_f32x4_t(unsafe { $vintr(a.to_f32x4_t(), b.to_f32x4_t()) });
            #[cfg(fallback)]
            return F32x4::from_fn(|i| a[i] $op b[i]);
        }
    };
}

// Lane 0 gets the operation result, lanes 1..3 are copied from `a`.
macro_rules! lane0_binop_ss {
    ($(#[$doc:meta])* $name:ident, $intr:ident, $op:tt) => {
        $(#[$doc])*
        #[inline(always)]
        pub fn $name(a: F32x4, b: F32x4) -> F32x4 {
            #[cfg(sse)]
            return F32x4::from_m128(unsafe { $intr(a.to_m128(), b.to_m128()) });
            #[cfg(not(sse))]
            return {
                let mut r = a.to_array();
                r[0] = a[0] $op b[0];
                F32x4::from_array(r)
            };
        }
    };
}

packed_binop_ps!(
    /// Lane-wise `a + b`. Emulates `_mm_add_ps`.
    add_ps, _mm_add_ps, vaddq_f32, +
);
packed_binop_ps!(
    /// Lane-wise `a - b`. Emulates `_mm_sub_ps`.
    sub_ps, _mm_sub_ps, vsubq_f32, -
);
packed_binop_ps!(
    /// Lane-wise `a * b`. Emulates `_mm_mul_ps`.
    mul_ps, _mm_mul_ps, vmulq_f32, *
);
packed_binop_ps!(
    /// Lane-wise `a / b`. Emulates `_mm_div_ps`.
    div_ps, _mm_div_ps, vdivq_f32, /
);

lane0_binop_ss!(
    /// `a[0] + b[0]` in lane 0, lanes 1..3 from `a`. Emulates `_mm_add_ss`.
    add_ss, _mm_add_ss, +
);
lane0_binop_ss!(
    /// `a[0] - b[0]` in lane 0, lanes 1..3 from `a`. Emulates `_mm_sub_ss`.
    sub_ss, _mm_sub_ss, -
);
lane0_binop_ss!(
    /// `a[0] * b[0]` in lane 0, lanes 1..3 from `a`. Emulates `_mm_mul_ss`.
    mul_ss, _mm_mul_ss, *
);
lane0_binop_ss!(
    /// `a[0] / b[0]` in lane 0, lanes 1..3 from `a`. Emulates `_mm_div_ss`.
    div_ss, _mm_div_ss, /
);

/// Lane-wise square root (correctly rounded, so all paths agree bit-exactly).
/// Emulates `_mm_sqrt_ps`.
#[inline(always)]
pub fn sqrt_ps(a: F32x4) -> F32x4 {
    #[cfg(sse)]
    return F32x4::from_m128(unsafe { _mm_sqrt_ps(a.to_m128()) });
    #[cfg(neon)]
    return F32x4::from_f32x4_t(unsafe { vsqrtq_f32(a.to_f32x4_t()) });
    #[cfg(fallback)]
    return F32x4::from_fn(|i| a[i].sqrt());
}

/// `sqrt(a[0])` in lane 0, lanes 1..3 from `a`. Emulates `_mm_sqrt_ss`.
#[inline(always)]
pub fn sqrt_ss(a: F32x4) -> F32x4 {
    #[cfg(sse)]
    return F32x4::from_m128(unsafe { _mm_sqrt_ss(a.to_m128()) });
    #[cfg(not(sse))]
    return {
        let mut r = a.to_array();
        r[0] = a[0].sqrt();
        F32x4::from_array(r)
    };
}

/// Lane-wise minimum with the instruction's operand-order bias: the result
/// is `a[i]` only when `a[i] < b[i]`, so NaN in either operand (and exact
/// equality) yields `b[i]`. This is not `f32::min`. Emulates `_mm_min_ps`.
#[inline(always)]
pub fn min_ps(a: F32x4, b: F32x4) -> F32x4 {
    #[cfg(sse)]
    return F32x4::from_m128(unsafe { _mm_min_ps(a.to_m128(), b.to_m128()) });
    #[cfg(neon)]
    return unsafe {
        // compare-and-select rather than vminq, which has its own NaN rule
        let va = a.to_f32x4_t();
        let vb = b.to_f32x4_t();
        F32x4::from_f32x4_t(vbslq_f32(vcltq_f32(va, vb), va, vb))
    };
    #[cfg(fallback)]
    return F32x4::from_fn(|i| if a[i] < b[i] { a[i] } else { b[i] });
}

/// Lane-wise maximum with the instruction's operand-order bias: the result
/// is `a[i]` only when `a[i] > b[i]`. Emulates `_mm_max_ps`.
#[inline(always)]
pub fn max_ps(a: F32x4, b: F32x4) -> F32x4 {
    #[cfg(sse)]
    return F32x4::from_m128(unsafe { _mm_max_ps(a.to_m128(), b.to_m128()) });
    #[cfg(neon)]
    return unsafe {
        let va = a.to_f32x4_t();
        let vb = b.to_f32x4_t();
        F32x4::from_f32x4_t(vbslq_f32(vcgtq_f32(va, vb), va, vb))
    };
    #[cfg(fallback)]
    return F32x4::from_fn(|i| if a[i] > b[i] { a[i] } else { b[i] });
}

/// Minimum of lane 0 (same bias as [`min_ps`]), lanes 1..3 from `a`.
/// Emulates `_mm_min_ss`.
#[inline(always)]
pub fn min_ss(a: F32x4, b: F32x4) -> F32x4 {
    #[cfg(sse)]
    return F32x4::from_m128(unsafe { _mm_min_ss(a.to_m128(), b.to_m128()) });
    #[cfg(not(sse))]
    return {
        let mut r = a.to_array();
        r[0] = if a[0] < b[0] { a[0] } else { b[0] };
        F32x4::from_array(r)
    };
}

/// Maximum of lane 0 (same bias as [`max_ps`]), lanes 1..3 from `a`.
/// Emulates `_mm_max_ss`.
#[inline(always)]
pub fn max_ss(a: F32x4, b: F32x4) -> F32x4 {
    #[cfg(sse)]
    return F32x4::from_m128(unsafe { _mm_max_ss(a.to_m128(), b.to_m128()) });
    #[cfg(not(sse))]
    return {
        let mut r = a.to_array();
        r[0] = if a[0] > b[0] { a[0] } else { b[0] };
        F32x4::from_array(r)
    };
}

/// Lane-wise signed 16-bit minimum. Emulates `_mm_min_pi16`.
#[inline(always)]
pub fn min_pi16(a: I16x4, b: I16x4) -> I16x4 {
    I16x4::from_fn(|i| a[i].min(b[i]))
}

/// Lane-wise signed 16-bit maximum. Emulates `_mm_max_pi16`.
#[inline(always)]
pub fn max_pi16(a: I16x4, b: I16x4) -> I16x4 {
    I16x4::from_fn(|i| a[i].max(b[i]))
}

/// Lane-wise unsigned byte minimum. Emulates `_mm_min_pu8`.
#[inline(always)]
pub fn min_pu8(a: U8x8, b: U8x8) -> U8x8 {
    U8x8::from_fn(|i| a[i].min(b[i]))
}

/// Lane-wise unsigned byte maximum. Emulates `_mm_max_pu8`.
#[inline(always)]
pub fn max_pu8(a: U8x8, b: U8x8) -> U8x8 {
    U8x8::from_fn(|i| a[i].max(b[i]))
}

/// Lane-wise unsigned byte average, rounding half up: `(a + b + 1) >> 1`
/// computed in 16 bits so the sum cannot wrap. Emulates `_mm_avg_pu8`.
#[inline(always)]
pub fn avg_pu8(a: U8x8, b: U8x8) -> U8x8 {
    U8x8::from_fn(|i| ((u16::from(a[i]) + u16::from(b[i]) + 1) >> 1) as u8)
}

/// Lane-wise unsigned 16-bit average, rounding half up in 32 bits.
/// Emulates `_mm_avg_pu16`.
#[inline(always)]
pub fn avg_pu16(a: U16x4, b: U16x4) -> U16x4 {
    U16x4::from_fn(|i| ((u32::from(a[i]) + u32::from(b[i]) + 1) >> 1) as u16)
}

/// Sum of absolute byte differences: `Σ|a[i] - b[i]|` over all eight lanes,
/// zero-extended into lane 0 of the result; lanes 1..3 are zero. Emulates
/// `_mm_sad_pu8`.
#[inline(always)]
pub fn sad_pu8(a: U8x8, b: U8x8) -> U16x4 {
    let mut sum: u16 = 0;
    for i in 0..U8x8::LANES {
        sum += (i16::from(a[i]) - i16::from(b[i])).unsigned_abs();
    }
    U16x4::from_array([sum, 0, 0, 0])
}

/// High 16 bits of the 32-bit unsigned product, per lane. Emulates
/// `_mm_mulhi_pu16`.
#[inline(always)]
pub fn mulhi_pu16(a: U16x4, b: U16x4) -> U16x4 {
    U16x4::from_fn(|i| ((u32::from(a[i]) * u32::from(b[i])) >> 16) as u16)
}

//! Conversion operations.
//!
//! Float→int conversions without a `t` in the name round to nearest with
//! ties to even (the x86 default rounding mode); the `cvtt*` forms truncate
//! toward zero. A result outside the destination range, or a NaN input,
//! produces the x86 "integer indefinite" value (`i32::MIN` / `i64::MIN`) —
//! not Rust's saturating `as` — so the portable paths agree bit-for-bit
//! with the hardware passthrough. Narrowing packs (`cvtps_pi16`,
//! `cvtps_pi8`) apply signed saturation *after* the indefinite rule, which
//! is why a huge positive float packs to the most negative narrow value,
//! exactly as the instruction sequence does.
//!
//! Several conversions update only part of the destination; the untouched
//! lanes come from the first operand and are documented per function.

#[cfg(all(sse, target_arch = "x86"))]
use core::arch::x86::*;
#[cfg(all(sse, target_arch = "x86_64"))]
use core::arch::x86_64::*;

use crate::vector::{F32x4, I16x4, I32x2, I8x8, U16x4, U8x8};

// 2^31 and 2^63 are exactly representable as f32; the upper bounds are
// exclusive because i32::MAX / i64::MAX themselves round up in f32.
#[inline(always)]
pub(crate) fn f32_to_i32_rne(x: f32) -> i32 {
    let r = x.round_ties_even();
    if r >= -2_147_483_648.0 && r < 2_147_483_648.0 {
        r as i32
    } else {
        i32::MIN // integer indefinite, also the NaN result
    }
}

#[inline(always)]
pub(crate) fn f32_to_i32_trunc(x: f32) -> i32 {
    let r = x.trunc();
    if r >= -2_147_483_648.0 && r < 2_147_483_648.0 {
        r as i32
    } else {
        i32::MIN
    }
}

#[cfg(not(all(sse, target_arch = "x86_64")))]
#[inline(always)]
pub(crate) fn f32_to_i64_rne(x: f32) -> i64 {
    let r = x.round_ties_even();
    if r >= -9_223_372_036_854_775_808.0 && r < 9_223_372_036_854_775_808.0 {
        r as i64
    } else {
        i64::MIN
    }
}

#[cfg(not(all(sse, target_arch = "x86_64")))]
#[inline(always)]
pub(crate) fn f32_to_i64_trunc(x: f32) -> i64 {
    let r = x.trunc();
    if r >= -9_223_372_036_854_775_808.0 && r < 9_223_372_036_854_775_808.0 {
        r as i64
    } else {
        i64::MIN
    }
}

/// Converts two packed i32 into lanes 0..1; lanes 2..3 from `a` (exact
/// widening). Emulates `_mm_cvt_pi2ps`.
#[inline(always)]
pub fn cvt_pi2ps(a: F32x4, b: I32x2) -> F32x4 {
    let mut r = a.to_array();
    r[0] = b[0] as f32;
    r[1] = b[1] as f32;
    F32x4::from_array(r)
}

/// Converts lanes 0..1 to packed i32, rounding to nearest even. Emulates
/// `_mm_cvt_ps2pi`.
#[inline(always)]
pub fn cvt_ps2pi(a: F32x4) -> I32x2 {
    I32x2::from_array([f32_to_i32_rne(a[0]), f32_to_i32_rne(a[1])])
}

/// Converts `b` into lane 0 (exact); lanes 1..3 from `a`. Emulates
/// `_mm_cvt_si2ss`.
#[inline(always)]
pub fn cvt_si2ss(a: F32x4, b: i32) -> F32x4 {
    #[cfg(sse)]
    return F32x4::from_m128(unsafe { _mm_cvtsi32_ss(a.to_m128(), b) });
    #[cfg(not(sse))]
    return {
        let mut r = a.to_array();
        r[0] = b as f32;
        F32x4::from_array(r)
    };
}

/// Lane 0 to i32, rounding to nearest even. Emulates `_mm_cvt_ss2si`.
#[inline(always)]
pub fn cvt_ss2si(a: F32x4) -> i32 {
    cvtss_si32(a)
}

/// Four packed i16 to four f32 lanes (exact widening). Emulates
/// `_mm_cvtpi16_ps`.
#[inline(always)]
pub fn cvtpi16_ps(a: I16x4) -> F32x4 {
    F32x4::from_fn(|i| f32::from(a[i]))
}

/// Same operation as [`cvt_pi2ps`]. Emulates `_mm_cvtpi32_ps`.
#[inline(always)]
pub fn cvtpi32_ps(a: F32x4, b: I32x2) -> F32x4 {
    cvt_pi2ps(a, b)
}

/// Two i32 pairs to four f32 lanes: `[a0, a1, b0, b1]`. Emulates
/// `_mm_cvtpi32x2_ps`.
#[inline(always)]
pub fn cvtpi32x2_ps(a: I32x2, b: I32x2) -> F32x4 {
    F32x4::from_array([a[0] as f32, a[1] as f32, b[0] as f32, b[1] as f32])
}

/// Low four i8 lanes to four f32 lanes (exact widening). Emulates
/// `_mm_cvtpi8_ps`.
#[inline(always)]
pub fn cvtpi8_ps(a: I8x8) -> F32x4 {
    F32x4::from_fn(|i| f32::from(a[i]))
}

/// Four f32 lanes to packed i16: round to nearest even, indefinite on
/// overflow, then signed saturation. `cvtps_pi16` of a huge positive value
/// is therefore `-32768`. Emulates `_mm_cvtps_pi16`.
#[inline(always)]
pub fn cvtps_pi16(a: F32x4) -> I16x4 {
    I16x4::from_fn(|i| {
        let wide = f32_to_i32_rne(a[i]);
        wide.clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16
    })
}

/// Lanes 0..1 to packed i32, rounding to nearest even. Emulates
/// `_mm_cvtps_pi32`.
#[inline(always)]
pub fn cvtps_pi32(a: F32x4) -> I32x2 {
    cvt_ps2pi(a)
}

/// Four f32 lanes to i8 in byte lanes 0..3 (round, indefinite, saturate);
/// byte lanes 4..7 are zero. Emulates `_mm_cvtps_pi8`.
#[inline(always)]
pub fn cvtps_pi8(a: F32x4) -> I8x8 {
    I8x8::from_fn(|i| {
        if i < F32x4::LANES {
            let wide = f32_to_i32_rne(a[i]);
            wide.clamp(i32::from(i8::MIN), i32::from(i8::MAX)) as i8
        } else {
            0
        }
    })
}

/// Four packed u16 to four f32 lanes (exact widening). Emulates
/// `_mm_cvtpu16_ps`.
#[inline(always)]
pub fn cvtpu16_ps(a: U16x4) -> F32x4 {
    F32x4::from_fn(|i| f32::from(a[i]))
}

/// Low four u8 lanes to four f32 lanes (exact widening). Emulates
/// `_mm_cvtpu8_ps`.
#[inline(always)]
pub fn cvtpu8_ps(a: U8x8) -> F32x4 {
    F32x4::from_fn(|i| f32::from(a[i]))
}

/// Same operation as [`cvt_si2ss`]. Emulates `_mm_cvtsi32_ss`.
#[inline(always)]
pub fn cvtsi32_ss(a: F32x4, b: i32) -> F32x4 {
    cvt_si2ss(a, b)
}

/// Converts `b` into lane 0, rounding to nearest (not all i64 are
/// representable in f32); lanes 1..3 from `a`. Emulates `_mm_cvtsi64_ss`.
#[inline(always)]
pub fn cvtsi64_ss(a: F32x4, b: i64) -> F32x4 {
    #[cfg(all(sse, target_arch = "x86_64"))]
    return F32x4::from_m128(unsafe { _mm_cvtsi64_ss(a.to_m128(), b) });
    #[cfg(not(all(sse, target_arch = "x86_64")))]
    return {
        let mut r = a.to_array();
        r[0] = b as f32;
        F32x4::from_array(r)
    };
}

/// Extracts lane 0. Emulates `_mm_cvtss_f32`.
#[inline(always)]
pub fn cvtss_f32(a: F32x4) -> f32 {
    #[cfg(sse)]
    return unsafe { _mm_cvtss_f32(a.to_m128()) };
    #[cfg(not(sse))]
    return a[0];
}

/// Lane 0 to i32, rounding to nearest even. Emulates `_mm_cvtss_si32`.
#[inline(always)]
pub fn cvtss_si32(a: F32x4) -> i32 {
    #[cfg(sse)]
    return unsafe { _mm_cvtss_si32(a.to_m128()) };
    #[cfg(not(sse))]
    return f32_to_i32_rne(a[0]);
}

/// Lane 0 to i64, rounding to nearest even. Emulates `_mm_cvtss_si64`.
#[inline(always)]
pub fn cvtss_si64(a: F32x4) -> i64 {
    #[cfg(all(sse, target_arch = "x86_64"))]
    return unsafe { _mm_cvtss_si64(a.to_m128()) };
    #[cfg(not(all(sse, target_arch = "x86_64")))]
    return f32_to_i64_rne(a[0]);
}

/// Lanes 0..1 to packed i32, truncating toward zero. Emulates
/// `_mm_cvtt_ps2pi`.
#[inline(always)]
pub fn cvtt_ps2pi(a: F32x4) -> I32x2 {
    I32x2::from_array([f32_to_i32_trunc(a[0]), f32_to_i32_trunc(a[1])])
}

/// Lane 0 to i32, truncating toward zero. Emulates `_mm_cvtt_ss2si`.
#[inline(always)]
pub fn cvtt_ss2si(a: F32x4) -> i32 {
    cvttss_si32(a)
}

/// Lane 0 to i32, truncating toward zero. Emulates `_mm_cvttss_si32`.
#[inline(always)]
pub fn cvttss_si32(a: F32x4) -> i32 {
    #[cfg(sse)]
    return unsafe { _mm_cvttss_si32(a.to_m128()) };
    #[cfg(not(sse))]
    return f32_to_i32_trunc(a[0]);
}

/// Lane 0 to i64, truncating toward zero. Emulates `_mm_cvttss_si64`.
#[inline(always)]
pub fn cvttss_si64(a: F32x4) -> i64 {
    #[cfg(all(sse, target_arch = "x86_64"))]
    return unsafe { _mm_cvttss_si64(a.to_m128()) };
    #[cfg(not(all(sse, target_arch = "x86_64")))]
    return f32_to_i64_trunc(a[0]);
}

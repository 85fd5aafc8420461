//! Comparison and mask operations.
//!
//! Every packed predicate produces, per lane, all-ones if it holds and
//! all-zeros otherwise — never a partial pattern. Ordered predicates
//! (`eq,lt,le,gt,ge`) are false when either operand is NaN; the negated
//! forms (`neq,nlt,nle,ngt,nge`) are the bitwise complement of the
//! corresponding ordered predicate and are therefore *true* on NaN. That
//! makes `cmpnlt_ps` a different operation from `cmpge_ps`, and it is why
//! the negated forms are implemented as complements, not as independent
//! relations.

#[cfg(all(sse, target_arch = "x86"))]
use core::arch::x86::*;
#[cfg(all(sse, target_arch = "x86_64"))]
use core::arch::x86_64::*;

#[cfg(neon)]
use core::arch::aarch64::*;

use crate::vector::{F32x4, I8x8};

/// All-ones or all-zeros lane for a 32-bit predicate result.
#[cfg(not(sse))]
#[inline(always)]
fn mask32(p: bool) -> f32 {
    f32::from_bits(if p { u32::MAX } else { 0 })
}

macro_rules! packed_cmp_ps {
    ($(#[$doc:meta])* $name:ident, $intr:ident,
     |$x:ident, $y:ident| $pred:expr,
     |$va:ident, $vb:ident| $vexpr:expr) => {
        $(#[$doc])*
        #[inline(always)]
        pub fn $name(a: F32x4, b: F32x4) -> F32x4 {
            #[cfg(sse)]
            return F32x4::from_m128(unsafe { $intr(a.to_m128(), b.to_m128()) });
            #[cfg(neon)]
            return unsafe {
                let $va = a.to_f32x4_t();
                let $vb = b.to_f32x4_t();
                F32x4::from_f32x4_t(vreinterpretq_f32_u32($vexpr))
            };
            #[cfg(fallback)]
            return F32x4::from_fn(|i| {
                let $x = a[i];
                let $y = b[i];
                mask32($pred)
            });
        }
    };
}

// Lane 0 gets the mask, lanes 1..3 are copied from `a`.
macro_rules! lane0_cmp_ss {
    ($(#[$doc:meta])* $name:ident, $intr:ident, |$x:ident, $y:ident| $pred:expr) => {
        $(#[$doc])*
        #[inline(always)]
        pub fn $name(a: F32x4, b: F32x4) -> F32x4 {
            #[cfg(sse)]
            return F32x4::from_m128(unsafe { $intr(a.to_m128(), b.to_m128()) });
            #[cfg(not(sse))]
            return {
                let mut r = a.to_array();
                let $x = a[0];
                let $y = b[0];
                r[0] = mask32($pred);
                F32x4::from_array(r)
            };
        }
    };
}

packed_cmp_ps!(
    /// Lane-wise `a == b` mask. Emulates `_mm_cmpeq_ps`.
    cmpeq_ps, _mm_cmpeq_ps, |x, y| x == y, |va, vb| vceqq_f32(va, vb)
);
packed_cmp_ps!(
    /// Lane-wise `a < b` mask. Emulates `_mm_cmplt_ps`.
    cmplt_ps, _mm_cmplt_ps, |x, y| x < y, |va, vb| vcltq_f32(va, vb)
);
packed_cmp_ps!(
    /// Lane-wise `a <= b` mask. Emulates `_mm_cmple_ps`.
    cmple_ps, _mm_cmple_ps, |x, y| x <= y, |va, vb| vcleq_f32(va, vb)
);
packed_cmp_ps!(
    /// Lane-wise `a > b` mask. Emulates `_mm_cmpgt_ps`.
    cmpgt_ps, _mm_cmpgt_ps, |x, y| x > y, |va, vb| vcgtq_f32(va, vb)
);
packed_cmp_ps!(
    /// Lane-wise `a >= b` mask. Emulates `_mm_cmpge_ps`.
    cmpge_ps, _mm_cmpge_ps, |x, y| x >= y, |va, vb| vcgeq_f32(va, vb)
);
packed_cmp_ps!(
    /// Lane-wise NOT(`a == b`) mask; true on NaN. Emulates `_mm_cmpneq_ps`.
    cmpneq_ps, _mm_cmpneq_ps, |x, y| !(x == y), |va, vb| vmvnq_u32(vceqq_f32(va, vb))
);
packed_cmp_ps!(
    /// Lane-wise NOT(`a < b`) mask; true on NaN, unlike [`cmpge_ps`].
    /// Emulates `_mm_cmpnlt_ps`.
    cmpnlt_ps, _mm_cmpnlt_ps, |x, y| !(x < y), |va, vb| vmvnq_u32(vcltq_f32(va, vb))
);
packed_cmp_ps!(
    /// Lane-wise NOT(`a <= b`) mask; true on NaN. Emulates `_mm_cmpnle_ps`.
    cmpnle_ps, _mm_cmpnle_ps, |x, y| !(x <= y), |va, vb| vmvnq_u32(vcleq_f32(va, vb))
);
packed_cmp_ps!(
    /// Lane-wise NOT(`a > b`) mask; true on NaN. Emulates `_mm_cmpngt_ps`.
    cmpngt_ps, _mm_cmpngt_ps, |x, y| !(x > y), |va, vb| vmvnq_u32(vcgtq_f32(va, vb))
);
packed_cmp_ps!(
    /// Lane-wise NOT(`a >= b`) mask; true on NaN. Emulates `_mm_cmpnge_ps`.
    cmpnge_ps, _mm_cmpnge_ps, |x, y| !(x >= y), |va, vb| vmvnq_u32(vcgeq_f32(va, vb))
);
packed_cmp_ps!(
    /// Lane-wise "both operands are non-NaN" mask. Emulates `_mm_cmpord_ps`.
    cmpord_ps, _mm_cmpord_ps,
    |x, y| x == x && y == y,
    |va, vb| vandq_u32(vceqq_f32(va, va), vceqq_f32(vb, vb))
);
packed_cmp_ps!(
    /// Lane-wise "either operand is NaN" mask. Emulates `_mm_cmpunord_ps`.
    cmpunord_ps, _mm_cmpunord_ps,
    |x, y| x != x || y != y,
    |va, vb| vmvnq_u32(vandq_u32(vceqq_f32(va, va), vceqq_f32(vb, vb)))
);

lane0_cmp_ss!(
    /// `a[0] == b[0]` mask in lane 0. Emulates `_mm_cmpeq_ss`.
    cmpeq_ss, _mm_cmpeq_ss, |x, y| x == y
);
lane0_cmp_ss!(
    /// `a[0] < b[0]` mask in lane 0. Emulates `_mm_cmplt_ss`.
    cmplt_ss, _mm_cmplt_ss, |x, y| x < y
);
lane0_cmp_ss!(
    /// `a[0] <= b[0]` mask in lane 0. Emulates `_mm_cmple_ss`.
    cmple_ss, _mm_cmple_ss, |x, y| x <= y
);
lane0_cmp_ss!(
    /// `a[0] > b[0]` mask in lane 0. Emulates `_mm_cmpgt_ss`.
    cmpgt_ss, _mm_cmpgt_ss, |x, y| x > y
);
lane0_cmp_ss!(
    /// `a[0] >= b[0]` mask in lane 0. Emulates `_mm_cmpge_ss`.
    cmpge_ss, _mm_cmpge_ss, |x, y| x >= y
);
lane0_cmp_ss!(
    /// NOT(`a[0] == b[0]`) mask in lane 0; true on NaN. Emulates `_mm_cmpneq_ss`.
    cmpneq_ss, _mm_cmpneq_ss, |x, y| !(x == y)
);
lane0_cmp_ss!(
    /// NOT(`a[0] < b[0]`) mask in lane 0; true on NaN. Emulates `_mm_cmpnlt_ss`.
    cmpnlt_ss, _mm_cmpnlt_ss, |x, y| !(x < y)
);
lane0_cmp_ss!(
    /// NOT(`a[0] <= b[0]`) mask in lane 0; true on NaN. Emulates `_mm_cmpnle_ss`.
    cmpnle_ss, _mm_cmpnle_ss, |x, y| !(x <= y)
);
lane0_cmp_ss!(
    /// NOT(`a[0] > b[0]`) mask in lane 0; true on NaN. Emulates `_mm_cmpngt_ss`.
    cmpngt_ss, _mm_cmpngt_ss, |x, y| !(x > y)
);
lane0_cmp_ss!(
    /// NOT(`a[0] >= b[0]`) mask in lane 0; true on NaN. Emulates `_mm_cmpnge_ss`.
    cmpnge_ss, _mm_cmpnge_ss, |x, y| !(x >= y)
);
lane0_cmp_ss!(
    /// "Both lane-0 operands non-NaN" mask in lane 0. Emulates `_mm_cmpord_ss`.
    cmpord_ss, _mm_cmpord_ss, |x, y| x == x && y == y
);
lane0_cmp_ss!(
    /// "Either lane-0 operand is NaN" mask in lane 0. Emulates `_mm_cmpunord_ss`.
    cmpunord_ss, _mm_cmpunord_ss, |x, y| x != x || y != y
);

// The comi*/ucomi* families differ only in whether the hardware instruction
// signals an FP exception on a NaN operand. FP exception state is not
// modeled here, so both families share one implementation; on NaN operands
// the x86 passthrough additionally returns the hardware's unordered flag
// result, which the portable comparison does not reproduce. Known gap;
// callers relying on comi-with-NaN behavior are relying on exception state
// that does not exist in this layer.
macro_rules! comi_ss {
    ($(#[$doc:meta])* $name:ident, $intr:ident, |$x:ident, $y:ident| $pred:expr) => {
        $(#[$doc])*
        #[inline(always)]
        pub fn $name(a: F32x4, b: F32x4) -> i32 {
            #[cfg(sse)]
            return unsafe { $intr(a.to_m128(), b.to_m128()) };
            #[cfg(not(sse))]
            return {
                let $x = a[0];
                let $y = b[0];
                $pred as i32
            };
        }
    };
}

comi_ss!(
    /// `a[0] == b[0]` as 0/1. Emulates `_mm_comieq_ss`.
    comieq_ss, _mm_comieq_ss, |x, y| x == y
);
comi_ss!(
    /// `a[0] >= b[0]` as 0/1. Emulates `_mm_comige_ss`.
    comige_ss, _mm_comige_ss, |x, y| x >= y
);
comi_ss!(
    /// `a[0] > b[0]` as 0/1. Emulates `_mm_comigt_ss`.
    comigt_ss, _mm_comigt_ss, |x, y| x > y
);
comi_ss!(
    /// `a[0] <= b[0]` as 0/1. Emulates `_mm_comile_ss`.
    comile_ss, _mm_comile_ss, |x, y| x <= y
);
comi_ss!(
    /// `a[0] < b[0]` as 0/1. Emulates `_mm_comilt_ss`.
    comilt_ss, _mm_comilt_ss, |x, y| x < y
);
comi_ss!(
    /// `a[0] != b[0]` as 0/1. Emulates `_mm_comineq_ss`.
    comineq_ss, _mm_comineq_ss, |x, y| x != y
);

comi_ss!(
    /// Non-signalling `a[0] == b[0]` as 0/1. Emulates `_mm_ucomieq_ss`.
    ucomieq_ss, _mm_ucomieq_ss, |x, y| x == y
);
comi_ss!(
    /// Non-signalling `a[0] >= b[0]` as 0/1. Emulates `_mm_ucomige_ss`.
    ucomige_ss, _mm_ucomige_ss, |x, y| x >= y
);
comi_ss!(
    /// Non-signalling `a[0] > b[0]` as 0/1. Emulates `_mm_ucomigt_ss`.
    ucomigt_ss, _mm_ucomigt_ss, |x, y| x > y
);
comi_ss!(
    /// Non-signalling `a[0] <= b[0]` as 0/1. Emulates `_mm_ucomile_ss`.
    ucomile_ss, _mm_ucomile_ss, |x, y| x <= y
);
comi_ss!(
    /// Non-signalling `a[0] < b[0]` as 0/1. Emulates `_mm_ucomilt_ss`.
    ucomilt_ss, _mm_ucomilt_ss, |x, y| x < y
);
comi_ss!(
    /// Non-signalling `a[0] != b[0]` as 0/1. Emulates `_mm_ucomineq_ss`.
    ucomineq_ss, _mm_ucomineq_ss, |x, y| x != y
);

/// Packs the sign bit of each lane into bits 0..3 of the result. Emulates
/// `_mm_movemask_ps`.
#[inline(always)]
pub fn movemask_ps(a: F32x4) -> i32 {
    #[cfg(sse)]
    return unsafe { _mm_movemask_ps(a.to_m128()) };
    #[cfg(not(sse))]
    return {
        let mut r = 0;
        for i in 0..F32x4::LANES {
            r |= ((a[i].to_bits() >> 31) as i32) << i;
        }
        r
    };
}

/// Packs the sign bit of each byte lane into bits 0..7 of the result.
/// Emulates `_mm_movemask_pi8`.
#[inline(always)]
pub fn movemask_pi8(a: I8x8) -> i32 {
    let mut r = 0;
    for i in 0..I8x8::LANES {
        r |= (((a[i] as u8) >> 7) as i32) << i;
    }
    r
}

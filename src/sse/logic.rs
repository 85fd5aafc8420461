//! Bitwise logical operations.
//!
//! Operands are treated as 128 opaque bits: reinterpret, apply the
//! operator, reinterpret back. No numeric semantics apply — NaN payloads
//! and signalling bits pass through exactly as stored.

#[cfg(all(sse, target_arch = "x86"))]
use core::arch::x86::*;
#[cfg(all(sse, target_arch = "x86_64"))]
use core::arch::x86_64::*;

#[cfg(neon)]
use core::arch::aarch64::*;

use crate::vector::{F32x4, I32x4};

macro_rules! bitwise_ps {
    ($(#[$doc:meta])* $name:ident, $intr:ident,
     |$vx:ident, $vy:ident| $vexpr:expr,
     |$x:ident, $y:ident| $bits:expr) => {
        $(#[$doc])*
        #[inline(always)]
        pub fn $name(a: F32x4, b: F32x4) -> F32x4 {
            #[cfg(sse)]
            return F32x4::from_m128(unsafe { $intr(a.to_m128(), b.to_m128()) });
            #[cfg(neon)]
            return unsafe {
                let $vx = vreinterpretq_u32_f32(a.to_f32x4_t());
                let $vy = vreinterpretq_u32_f32(b.to_f32x4_t());
                F32x4::from_f32x4_t(vreinterpretq_f32_u32($vexpr))
            };
            #[cfg(fallback)]
            return F32x4::from_fn(|i| {
                let $x = a[i].to_bits();
                let $y = b[i].to_bits();
                f32::from_bits($bits)
            });
        }
    };
}

bitwise_ps!(
    /// Bitwise `a & b`. Emulates `_mm_and_ps`.
    and_ps, _mm_and_ps, |x, y| vandq_u32(x, y), |x, y| x & y
);
bitwise_ps!(
    /// Bitwise `!a & b` (note the operand order). Emulates `_mm_andnot_ps`.
    andnot_ps, _mm_andnot_ps, |x, y| vbicq_u32(y, x), |x, y| !x & y
);
bitwise_ps!(
    /// Bitwise `a | b`. Emulates `_mm_or_ps`.
    or_ps, _mm_or_ps, |x, y| vorrq_u32(x, y), |x, y| x | y
);
bitwise_ps!(
    /// Bitwise `a ^ b`. Emulates `_mm_xor_ps`.
    xor_ps, _mm_xor_ps, |x, y| veorq_u32(x, y), |x, y| x ^ y
);

/// Reinterprets four f32 lanes as four i32 lanes, zero cost. Emulates
/// `_mm_castps_si128`.
#[inline(always)]
pub fn castps_si128(a: F32x4) -> I32x4 {
    a.bitcast_i32()
}

/// Reinterprets four i32 lanes as four f32 lanes, zero cost. Emulates
/// `_mm_castsi128_ps`.
#[inline(always)]
pub fn castsi128_ps(a: I32x4) -> F32x4 {
    a.bitcast_f32()
}

//! Fixed-width vector value types and checked reinterpretation.
//!
//! One type exists per (element width, lane count, signedness/float)
//! combination. Each is a `#[repr(C)]` fixed-size array with the emulated
//! register's natural alignment, so every view of the same register class
//! aliases identical bytes. The C-style union is replaced by explicit,
//! checked reinterpretation: all types implement [`bytemuck::Pod`], and any
//! two same-size views convert with `bytemuck::cast`, which rejects size
//! mismatches at compile time. Total sizes are pinned with compile-time
//! assertions; a failure there is a platform ABI mismatch, never a runtime
//! condition.
//!
//! Conversions to and from the native register types (`__m128`,
//! `uint8x16_t`, ...) exist only on builds where that ISA was selected, and
//! go through unaligned load/store intrinsics — a ≤16-byte copy the
//! optimizer eliminates.

#[cfg(all(sse, target_arch = "x86"))]
use core::arch::x86::*;
#[cfg(all(sse, target_arch = "x86_64"))]
use core::arch::x86_64::*;

#[cfg(neon)]
use core::arch::aarch64::*;

use core::ops::Index;

use bytemuck::{Pod, Zeroable};

use crate::error::{length_mismatch, LanewiseError};

macro_rules! lanes_common {
    ($name:ident, $elem:ty, $lanes:expr, $bytes:expr) => {
        impl $name {
            /// Number of lanes.
            pub const LANES: usize = $lanes;

            /// Builds a vector from its lanes in memory order (lane 0 first).
            #[inline(always)]
            pub const fn from_array(lanes: [$elem; $lanes]) -> Self {
                Self(lanes)
            }

            /// Returns the lanes in memory order (lane 0 first).
            #[inline(always)]
            pub const fn to_array(self) -> [$elem; $lanes] {
                self.0
            }

            /// Broadcasts one value to every lane.
            #[inline(always)]
            pub const fn splat(value: $elem) -> Self {
                Self([value; $lanes])
            }

            /// Builds a vector by calling `f` with each lane index.
            #[inline(always)]
            pub fn from_fn(f: impl FnMut(usize) -> $elem) -> Self {
                Self(core::array::from_fn(f))
            }
        }

        impl Index<usize> for $name {
            type Output = $elem;

            #[inline(always)]
            fn index(&self, lane: usize) -> &$elem {
                &self.0[lane]
            }
        }

        impl TryFrom<&[$elem]> for $name {
            type Error = LanewiseError;

            /// Builds a vector from a slice of exactly `LANES` elements.
            fn try_from(slice: &[$elem]) -> Result<Self, LanewiseError> {
                let lanes: [$elem; $lanes] = slice
                    .try_into()
                    .map_err(|_| length_mismatch($lanes, slice.len()))?;
                Ok(Self(lanes))
            }
        }

        // Plain array of a primitive type, no padding possible; the size
        // assertion below pins the layout contract.
        unsafe impl Zeroable for $name {}
        unsafe impl Pod for $name {}

        const _: () = assert!(core::mem::size_of::<$name>() == $bytes);
    };
}

/// Four packed `f32` lanes; emulates the SSE `__m128` register.
#[derive(Copy, Clone, Debug)]
#[repr(C, align(16))]
pub struct F32x4(pub(crate) [f32; 4]);

lanes_common!(F32x4, f32, 4, 16);

/// Four packed `i32` lanes; emulates the `__m128i` register.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(C, align(16))]
pub struct I32x4(pub(crate) [i32; 4]);

lanes_common!(I32x4, i32, 4, 16);

/// Sixteen packed `u8` lanes; emulates the NEON `uint8x16_t` register.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(C, align(16))]
pub struct U8x16(pub(crate) [u8; 16]);

lanes_common!(U8x16, u8, 16, 16);

/// Eight packed `i8` lanes; one view of the MMX `__m64` register.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(C, align(8))]
pub struct I8x8(pub(crate) [i8; 8]);

lanes_common!(I8x8, i8, 8, 8);

/// Four packed `i16` lanes; one view of the MMX `__m64` register.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(C, align(8))]
pub struct I16x4(pub(crate) [i16; 4]);

lanes_common!(I16x4, i16, 4, 8);

/// Two packed `i32` lanes; one view of the MMX `__m64` register.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(C, align(8))]
pub struct I32x2(pub(crate) [i32; 2]);

lanes_common!(I32x2, i32, 2, 8);

/// Eight packed `u8` lanes; one view of the MMX `__m64` register.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(C, align(8))]
pub struct U8x8(pub(crate) [u8; 8]);

lanes_common!(U8x8, u8, 8, 8);

/// Four packed `u16` lanes; one view of the MMX `__m64` register.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(C, align(8))]
pub struct U16x4(pub(crate) [u16; 4]);

lanes_common!(U16x4, u16, 4, 8);

impl F32x4 {
    /// Reinterprets the 128 bits as four `i32` lanes. No numeric
    /// conversion takes place; NaN payloads survive bit-exactly.
    #[inline(always)]
    pub fn bitcast_i32(self) -> I32x4 {
        bytemuck::cast(self)
    }
}

impl I32x4 {
    /// Reinterprets the 128 bits as four `f32` lanes. No numeric
    /// conversion takes place.
    #[inline(always)]
    pub fn bitcast_f32(self) -> F32x4 {
        bytemuck::cast(self)
    }
}

#[cfg(sse)]
impl F32x4 {
    #[inline(always)]
    pub(crate) fn to_m128(self) -> __m128 {
        unsafe { _mm_loadu_ps(self.0.as_ptr()) }
    }

    #[inline(always)]
    pub(crate) fn from_m128(v: __m128) -> Self {
        let mut lanes = [0.0f32; 4];
        unsafe { _mm_storeu_ps(lanes.as_mut_ptr(), v) };
        Self(lanes)
    }
}

#[cfg(sse)]
impl I32x4 {
    #[inline(always)]
    pub(crate) fn to_m128i(self) -> __m128i {
        unsafe { _mm_loadu_si128(self.0.as_ptr() as *const __m128i) }
    }

    #[inline(always)]
    pub(crate) fn from_m128i(v: __m128i) -> Self {
        let mut lanes = [0i32; 4];
        unsafe { _mm_storeu_si128(lanes.as_mut_ptr() as *mut __m128i, v) };
        Self(lanes)
    }
}

#[cfg(sse)]
impl U8x16 {
    #[inline(always)]
    pub(crate) fn to_m128i(self) -> __m128i {
        unsafe { _mm_loadu_si128(self.0.as_ptr() as *const __m128i) }
    }

    #[inline(always)]
    pub(crate) fn from_m128i(v: __m128i) -> Self {
        let mut lanes = [0u8; 16];
        unsafe { _mm_storeu_si128(lanes.as_mut_ptr() as *mut __m128i, v) };
        Self(lanes)
    }
}

#[cfg(neon)]
impl F32x4 {
    #[inline(always)]
    pub(crate) fn to_f32x4_t(self) -> float32x4_t {
        unsafe { vld1q_f32(self.0.as_ptr()) }
    }

    #[inline(always)]
    pub(crate) fn from_f32x4_t(v: float32x4_t) -> Self {
        let mut lanes = [0.0f32; 4];
        unsafe { vst1q_f32(lanes.as_mut_ptr(), v) };
        Self(lanes)
    }
}

#[cfg(neon)]
impl U8x16 {
    #[inline(always)]
    pub(crate) fn to_u8x16_t(self) -> uint8x16_t {
        unsafe { vld1q_u8(self.0.as_ptr()) }
    }

    #[inline(always)]
    pub(crate) fn from_u8x16_t(v: uint8x16_t) -> Self {
        let mut lanes = [0u8; 16];
        unsafe { vst1q_u8(lanes.as_mut_ptr(), v) };
        Self(lanes)
    }
}

//! Data movement: constructors, loads, stores, moves, shuffles, unpacks,
//! lane insert/extract, and the masked byte store.
//!
//! Memory operands are references to fixed-size arrays. The "aligned"
//! variants (`load_ps`, `store_ps`, ...) are implemented with always-safe
//! unaligned access — a behavior-preserving relaxation of the ISA's
//! alignment requirement, chosen over a fatal runtime check. The `stream_*`
//! operations are plain stores; the non-temporal cache hint has no portable
//! meaning.
//!
//! Immediate control operands are const generics checked at compile time:
//! the ISA encodes them into the opcode, so a runtime value cannot exist on
//! real hardware.

#[cfg(all(sse, target_arch = "x86"))]
use core::arch::x86::*;
#[cfg(all(sse, target_arch = "x86_64"))]
use core::arch::x86_64::*;

use crate::vector::{F32x4, I16x4, I32x2, I32x4, I8x8, U16x4, U8x8};

// Monomorphization-time range check for immediate operands.
struct ImmBits<const IMM: i32, const BITS: u32>;

impl<const IMM: i32, const BITS: u32> ImmBits<IMM, BITS> {
    const CHECK: () = assert!(
        IMM >= 0 && (IMM as u32) >> BITS == 0,
        "immediate control operand out of range"
    );
}

/// Builds a vector from four floats, highest lane first (Intel argument
/// order). Emulates `_mm_set_ps`.
#[inline(always)]
pub fn set_ps(e3: f32, e2: f32, e1: f32, e0: f32) -> F32x4 {
    F32x4::from_array([e0, e1, e2, e3])
}

/// Builds a vector from four floats, lowest lane first. Emulates
/// `_mm_setr_ps`.
#[inline(always)]
pub fn setr_ps(e0: f32, e1: f32, e2: f32, e3: f32) -> F32x4 {
    F32x4::from_array([e0, e1, e2, e3])
}

/// `a` in lane 0, zeros elsewhere. Emulates `_mm_set_ss`.
#[inline(always)]
pub fn set_ss(a: f32) -> F32x4 {
    F32x4::from_array([a, 0.0, 0.0, 0.0])
}

/// Broadcasts `a` to all lanes. Emulates `_mm_set1_ps` / `_mm_set_ps1`.
#[inline(always)]
pub fn set1_ps(a: f32) -> F32x4 {
    F32x4::splat(a)
}

/// The all-zero vector. Emulates `_mm_setzero_ps`.
#[inline(always)]
pub fn setzero_ps() -> F32x4 {
    F32x4::splat(0.0)
}

/// A vector with no value contract beyond being valid; this implementation
/// returns zeros, but callers must not rely on that. Emulates
/// `_mm_undefined_ps`.
#[inline(always)]
pub fn undefined_ps() -> F32x4 {
    F32x4::splat(0.0)
}

/// Builds an integer vector from four i32, highest lane first. Emulates
/// `_mm_set_epi32`.
#[inline(always)]
pub fn set_epi32(e3: i32, e2: i32, e1: i32, e0: i32) -> I32x4 {
    I32x4::from_array([e0, e1, e2, e3])
}

/// Builds a vector from eight i8, highest lane first. Emulates
/// `_mm_set_pi8`.
#[allow(clippy::too_many_arguments)]
#[inline(always)]
pub fn set_pi8(e7: i8, e6: i8, e5: i8, e4: i8, e3: i8, e2: i8, e1: i8, e0: i8) -> I8x8 {
    I8x8::from_array([e0, e1, e2, e3, e4, e5, e6, e7])
}

/// Builds a vector from four i16, highest lane first. Emulates
/// `_mm_set_pi16`.
#[inline(always)]
pub fn set_pi16(e3: i16, e2: i16, e1: i16, e0: i16) -> I16x4 {
    I16x4::from_array([e0, e1, e2, e3])
}

/// Builds a vector from eight u8, highest lane first.
#[allow(clippy::too_many_arguments)]
#[inline(always)]
pub fn set_pu8(e7: u8, e6: u8, e5: u8, e4: u8, e3: u8, e2: u8, e1: u8, e0: u8) -> U8x8 {
    U8x8::from_array([e0, e1, e2, e3, e4, e5, e6, e7])
}

/// Builds a vector from four u16, highest lane first.
#[inline(always)]
pub fn set_pu16(e3: u16, e2: u16, e1: u16, e0: u16) -> U16x4 {
    U16x4::from_array([e0, e1, e2, e3])
}

/// Loads four floats. Alignment is not required (see module docs).
/// Emulates `_mm_load_ps`.
#[inline(always)]
pub fn load_ps(mem: &[f32; 4]) -> F32x4 {
    F32x4::from_array(*mem)
}

/// Loads four floats from unaligned memory. Emulates `_mm_loadu_ps`.
#[inline(always)]
pub fn loadu_ps(mem: &[f32; 4]) -> F32x4 {
    F32x4::from_array(*mem)
}

/// Broadcasts one float to all lanes. Emulates `_mm_load_ps1` /
/// `_mm_load1_ps`.
#[inline(always)]
pub fn load_ps1(mem: &f32) -> F32x4 {
    F32x4::splat(*mem)
}

/// Same operation as [`load_ps1`]. Emulates `_mm_load1_ps`.
#[inline(always)]
pub fn load1_ps(mem: &f32) -> F32x4 {
    load_ps1(mem)
}

/// One float into lane 0, zeros elsewhere. Emulates `_mm_load_ss`.
#[inline(always)]
pub fn load_ss(mem: &f32) -> F32x4 {
    F32x4::from_array([*mem, 0.0, 0.0, 0.0])
}

/// Replaces lanes 2..3 with the two floats at `mem`; lanes 0..1 from `a`.
/// Emulates `_mm_loadh_pi`.
#[inline(always)]
pub fn loadh_pi(a: F32x4, mem: &[f32; 2]) -> F32x4 {
    F32x4::from_array([a[0], a[1], mem[0], mem[1]])
}

/// Replaces lanes 0..1 with the two floats at `mem`; lanes 2..3 from `a`.
/// Emulates `_mm_loadl_pi`.
#[inline(always)]
pub fn loadl_pi(a: F32x4, mem: &[f32; 2]) -> F32x4 {
    F32x4::from_array([mem[0], mem[1], a[2], a[3]])
}

/// Loads four floats in reversed order: lane `i` = `mem[3 - i]`. Emulates
/// `_mm_loadr_ps`.
#[inline(always)]
pub fn loadr_ps(mem: &[f32; 4]) -> F32x4 {
    F32x4::from_array([mem[3], mem[2], mem[1], mem[0]])
}

/// Stores four lanes. Alignment is not required (see module docs).
/// Emulates `_mm_store_ps`.
#[inline(always)]
pub fn store_ps(mem: &mut [f32; 4], a: F32x4) {
    *mem = a.to_array();
}

/// Stores four lanes to unaligned memory. Emulates `_mm_storeu_ps`.
#[inline(always)]
pub fn storeu_ps(mem: &mut [f32; 4], a: F32x4) {
    *mem = a.to_array();
}

/// Broadcasts lane 0 to all four destination elements. Emulates
/// `_mm_store_ps1` / `_mm_store1_ps`.
#[inline(always)]
pub fn store_ps1(mem: &mut [f32; 4], a: F32x4) {
    *mem = [a[0]; 4];
}

/// Same operation as [`store_ps1`]. Emulates `_mm_store1_ps`.
#[inline(always)]
pub fn store1_ps(mem: &mut [f32; 4], a: F32x4) {
    store_ps1(mem, a);
}

/// Stores lane 0 only. Emulates `_mm_store_ss`.
#[inline(always)]
pub fn store_ss(mem: &mut f32, a: F32x4) {
    *mem = a[0];
}

/// Stores lanes 2..3. Emulates `_mm_storeh_pi`.
#[inline(always)]
pub fn storeh_pi(mem: &mut [f32; 2], a: F32x4) {
    *mem = [a[2], a[3]];
}

/// Stores lanes 0..1. Emulates `_mm_storel_pi`.
#[inline(always)]
pub fn storel_pi(mem: &mut [f32; 2], a: F32x4) {
    *mem = [a[0], a[1]];
}

/// Stores the four lanes in reversed order: `mem[i]` = lane `3 - i`.
/// Emulates `_mm_storer_ps`.
#[inline(always)]
pub fn storer_ps(mem: &mut [f32; 4], a: F32x4) {
    *mem = [a[3], a[2], a[1], a[0]];
}

/// Non-temporal store; portably a plain store. Emulates `_mm_stream_ps`.
#[inline(always)]
pub fn stream_ps(mem: &mut [f32; 4], a: F32x4) {
    *mem = a.to_array();
}

/// Non-temporal 64-bit store; portably a plain store. Emulates
/// `_mm_stream_pi`.
#[inline(always)]
pub fn stream_pi(mem: &mut I32x2, a: I32x2) {
    *mem = a;
}

/// `b[0]` into lane 0, lanes 1..3 from `a`. Emulates `_mm_move_ss`.
#[inline(always)]
pub fn move_ss(a: F32x4, b: F32x4) -> F32x4 {
    #[cfg(sse)]
    return F32x4::from_m128(unsafe { _mm_move_ss(a.to_m128(), b.to_m128()) });
    #[cfg(not(sse))]
    return F32x4::from_array([b[0], a[1], a[2], a[3]]);
}

/// High halves: `[b2, b3, a2, a3]`. Emulates `_mm_movehl_ps`.
#[inline(always)]
pub fn movehl_ps(a: F32x4, b: F32x4) -> F32x4 {
    #[cfg(sse)]
    return F32x4::from_m128(unsafe { _mm_movehl_ps(a.to_m128(), b.to_m128()) });
    #[cfg(not(sse))]
    return F32x4::from_array([b[2], b[3], a[2], a[3]]);
}

/// Low halves: `[a0, a1, b0, b1]`. Emulates `_mm_movelh_ps`.
#[inline(always)]
pub fn movelh_ps(a: F32x4, b: F32x4) -> F32x4 {
    #[cfg(sse)]
    return F32x4::from_m128(unsafe { _mm_movelh_ps(a.to_m128(), b.to_m128()) });
    #[cfg(not(sse))]
    return F32x4::from_array([a[0], a[1], b[0], b[1]]);
}

/// Interleaves the low halves: `[a0, b0, a1, b1]`. Emulates
/// `_mm_unpacklo_ps`.
#[inline(always)]
pub fn unpacklo_ps(a: F32x4, b: F32x4) -> F32x4 {
    #[cfg(sse)]
    return F32x4::from_m128(unsafe { _mm_unpacklo_ps(a.to_m128(), b.to_m128()) });
    #[cfg(not(sse))]
    return F32x4::from_array([a[0], b[0], a[1], b[1]]);
}

/// Interleaves the high halves: `[a2, b2, a3, b3]`. Emulates
/// `_mm_unpackhi_ps`.
#[inline(always)]
pub fn unpackhi_ps(a: F32x4, b: F32x4) -> F32x4 {
    #[cfg(sse)]
    return F32x4::from_m128(unsafe { _mm_unpackhi_ps(a.to_m128(), b.to_m128()) });
    #[cfg(not(sse))]
    return F32x4::from_array([a[2], b[2], a[3], b[3]]);
}

/// Selects output lanes by 2-bit fields of `MASK`: lane 0 = `a[MASK & 3]`,
/// lane 1 = `a[(MASK >> 2) & 3]`, lane 2 = `b[(MASK >> 4) & 3]`, lane 3 =
/// `b[(MASK >> 6) & 3]`. `MASK` must fit in 8 bits. Emulates
/// `_mm_shuffle_ps`.
#[inline(always)]
pub fn shuffle_ps<const MASK: i32>(a: F32x4, b: F32x4) -> F32x4 {
    let () = ImmBits::<MASK, 8>::CHECK;

    #[cfg(sse)]
    return F32x4::from_m128(unsafe { _mm_shuffle_ps::<MASK>(a.to_m128(), b.to_m128()) });
    #[cfg(not(sse))]
    return F32x4::from_array([
        a[(MASK & 3) as usize],
        a[((MASK >> 2) & 3) as usize],
        b[((MASK >> 4) & 3) as usize],
        b[((MASK >> 6) & 3) as usize],
    ]);
}

/// Selects the four i16 output lanes from `a` by 2-bit fields of `IMM8`,
/// same field layout as [`shuffle_ps`]. Emulates `_mm_shuffle_pi16`.
#[inline(always)]
pub fn shuffle_pi16<const IMM8: i32>(a: I16x4) -> I16x4 {
    let () = ImmBits::<IMM8, 8>::CHECK;

    I16x4::from_fn(|i| a[((IMM8 >> (2 * i)) & 3) as usize])
}

/// Replaces lane `LANE` (2-bit immediate) with the low 16 bits of `i`.
/// Emulates `_mm_insert_pi16`.
#[inline(always)]
pub fn insert_pi16<const LANE: i32>(a: I16x4, i: i32) -> I16x4 {
    let () = ImmBits::<LANE, 2>::CHECK;

    let mut r = a.to_array();
    r[LANE as usize] = i as i16;
    I16x4::from_array(r)
}

/// Extracts lane `LANE` (2-bit immediate), zero-extended to i32. Emulates
/// `_mm_extract_pi16`.
#[inline(always)]
pub fn extract_pi16<const LANE: i32>(a: I16x4) -> i32 {
    let () = ImmBits::<LANE, 2>::CHECK;

    i32::from(a[LANE as usize] as u16)
}

/// Conditionally stores each byte of `a` whose mask lane has its sign bit
/// set; other destination bytes are left untouched. Emulates
/// `_mm_maskmove_si64`.
#[inline(always)]
pub fn maskmove_si64(a: I8x8, mask: I8x8, mem: &mut [i8; 8]) {
    for i in 0..I8x8::LANES {
        if mask[i] < 0 {
            mem[i] = a[i];
        }
    }
}

/// Clears the MMX/x87 register state on hardware; a documented no-op here,
/// kept so ported code compiles unchanged. Emulates `_mm_empty`.
#[inline(always)]
pub fn empty() {}

//! x86 SSE1 intrinsic emulation, including the MMX-register integer
//! extensions (`pavgb`, `psadbw`, `pmaxsw`, ...) the instruction set added.
//!
//! One function per emulated instruction; names drop the `_mm_` prefix, so
//! `sse::add_ps` emulates `_mm_add_ps`. On x86 builds (`cfg(sse)`) each
//! function forwards to the real instruction where Rust's `core::arch`
//! exposes it; on aarch64 (`cfg(neon)`) a NEON composition is used where a
//! bit-exact one exists; everywhere else a portable lane loop defines the
//! semantics. The 64-bit MMX-register operations are lane loops on every
//! target because `core::arch` removed the `__m64` intrinsics; their results
//! are unaffected.
//!
//! Immediate control operands (`shuffle_ps`, `insert_pi16`, ...) are const
//! generics: the defining ISA encodes them into the instruction opcode, so a
//! runtime value is a porting bug and is rejected at compile time.

mod approx;
mod arith;
mod cmp;
mod cvt;
mod logic;
mod mem;

pub use approx::*;
pub use arith::*;
pub use cmp::*;
pub use cvt::*;
pub use logic::*;
pub use mem::*;

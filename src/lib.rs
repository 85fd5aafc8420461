//! Portable re-implementations of CPU vector-instruction-set intrinsics.
//!
//! `lanewise` lets code written against one instruction set's intrinsics run
//! on hardware that lacks that instruction set. Every emulated instruction is
//! a single pure function; at build time it compiles to one of three bodies:
//!
//! - **native passthrough** — the real hardware instruction, when the build
//!   target supports it (`cfg(sse)` on x86/x86_64, `cfg(neon)` on aarch64);
//! - **alternate-ISA mapping** — a composition of a different native
//!   instruction set present on the host, used only where the composition is
//!   bit-exact;
//! - **scalar fallback** — a portable per-lane loop (`cfg(fallback)`, and
//!   everywhere a native mapping does not exist).
//!
//! All paths produce numerically identical results; the `rcp`/`rsqrt`
//! estimate operations are tolerance-equivalent instead (see
//! [`sse::rcp_ps`]). Selection happens entirely in `build.rs` — there is no
//! runtime dispatch and no shared state between calls.
//!
//! # Modules
//!
//! - [`sse`] — the x86 SSE1 family (`add_ps`, `cmpnlt_ps`, `cvtt_ss2si`,
//!   `shuffle_ps`, ...) including the MMX-register integer extensions
//!   (`avg_pu8`, `sad_pu8`, ...).
//! - [`neon`] — the ARM NEON `uint8x16` family (`vaddq_u8`, ...).
//! - [`vector`] — the fixed-width vector value types shared by both.
//!
//! # Example
//!
//! ```rust
//! use lanewise::sse;
//!
//! let a = sse::set_ps(4.0, 3.0, 2.0, 1.0);
//! let b = sse::set1_ps(10.0);
//! assert_eq!(sse::add_ps(a, b).to_array(), [11.0, 12.0, 13.0, 14.0]);
//! ```

pub mod error;
pub mod neon;
pub mod sse;
pub mod vector;

pub use error::{LanewiseError, Result};
pub use vector::{F32x4, I16x4, I32x2, I32x4, I8x8, U16x4, U8x16, U8x8};

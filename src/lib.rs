// src/lib.rs
//! # itch-endian
//!
//! Byte-order reversal primitives for decoding binary feeds of known, fixed
//! endianness (market-data protocols such as Nasdaq ITCH transmit every
//! multi-byte field big-endian).
//!
//! ## Features
//!
//! - 🎯 **One operation**: reverse the byte sequence of a 1-, 2-, 4-, or 8-byte value
//! - 🔒 **Stateless**: pure functions, safe to call from any number of threads
//! - ⚡ **Zero cost**: compiles down to the `bswap` instruction on supported widths
//! - ✅ **Fail loud**: an unsupported width panics instead of returning a mis-swapped value
//!
//! ## Quick Start
//!
//! ```rust
//! use itch_endian::{endian_swap, EndianSwap};
//!
//! // Generic form, for any 1/2/4/8-byte Pod value
//! let field: u32 = endian_swap(0xA0860100u32);
//! assert_eq!(field, 0x000186A0);
//!
//! // Compile-time form, when the concrete type is known
//! assert_eq!(0x1234u16.swap_endian(), 0x3412);
//! ```
//!
//! Swapping is self-inverse, so the same call decodes and encodes:
//!
//! ```rust
//! use itch_endian::swap_endianness;
//!
//! let mut samples = [0x0102u16, 0x0304];
//! swap_endianness(&mut samples);
//! assert_eq!(samples, [0x0201, 0x0403]);
//! swap_endianness(&mut samples);
//! assert_eq!(samples, [0x0102, 0x0304]);
//! ```

pub mod swap;

pub use swap::{endian_swap, swap_endianness, EndianSwap};

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");

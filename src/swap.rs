// src/swap.rs
use bytemuck::Pod;
use std::mem;

/// Reverse the byte order of a fixed-width value.
///
/// Works on any [`Pod`] type whose size is exactly 1, 2, 4, or 8 bytes:
/// the value is reinterpreted as an unsigned integer of the same width,
/// its bytes are reversed, and the result is reinterpreted back. This is
/// a pure byte permutation; no arithmetic conversion is involved, so it
/// is safe for float bit patterns as well.
///
/// A 1-byte value is returned unchanged. Applying the operation twice
/// returns the original value.
///
/// # Panics
///
/// Panics if `size_of::<T>()` is not 1, 2, 4, or 8. Silently mis-swapping
/// an odd-width value would corrupt decoded fields with no observable
/// signal, so this is treated as a contract violation rather than a
/// recoverable error. Use fixed-width types (or [`EndianSwap`]) to rule
/// it out at compile time.
#[inline]
pub fn endian_swap<T: Pod>(t: T) -> T {
    match mem::size_of::<T>() {
        1 => t,
        2 => bytemuck::cast(bytemuck::cast::<T, u16>(t).swap_bytes()),
        4 => bytemuck::cast(bytemuck::cast::<T, u32>(t).swap_bytes()),
        8 => bytemuck::cast(bytemuck::cast::<T, u64>(t).swap_bytes()),
        n => panic!("endian_swap: unsupported value width {n} (expected 1, 2, 4, or 8 bytes)"),
    }
}

/// Reverse the byte order of every element of a slice, in place.
///
/// The bulk form of [`endian_swap`], for whole blocks of raw samples read
/// from a stream of the opposite endianness. Same width contract: element
/// widths other than 1, 2, 4, or 8 bytes panic.
pub fn swap_endianness<T: Pod>(data: &mut [T]) {
    let width = mem::size_of::<T>();
    match width {
        1 => {}
        2 | 4 | 8 => {
            let bytes: &mut [u8] = bytemuck::cast_slice_mut(data);
            for chunk in bytes.chunks_exact_mut(width) {
                chunk.reverse();
            }
        }
        n => panic!(
            "swap_endianness: unsupported element width {n} (expected 1, 2, 4, or 8 bytes)"
        ),
    }
}

/// Byte-order reversal with the width fixed at compile time.
///
/// Implemented only for the 1-, 2-, 4-, and 8-byte scalar primitives, so
/// calling it on an unsupported width is a compile error rather than a
/// runtime panic. Prefer this over [`endian_swap`] whenever the concrete
/// type is known.
pub trait EndianSwap: Copy {
    /// Returns `self` with its byte sequence reversed.
    #[must_use]
    fn swap_endian(self) -> Self;
}

macro_rules! impl_endian_swap {
    ($($int:ty),* $(,)?) => {$(
        impl EndianSwap for $int {
            #[inline]
            fn swap_endian(self) -> Self {
                self.swap_bytes()
            }
        }
    )*};
}

impl_endian_swap!(u8, i8, u16, i16, u32, i32, u64, i64);

impl EndianSwap for f32 {
    #[inline]
    fn swap_endian(self) -> Self {
        Self::from_bits(self.to_bits().swap_bytes())
    }
}

impl EndianSwap for f64 {
    #[inline]
    fn swap_endian(self) -> Self {
        Self::from_bits(self.to_bits().swap_bytes())
    }
}

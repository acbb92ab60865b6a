//! Bit packing with a padding sentinel.
//!
//! A bit sequence of length `n` is stored in whole bytes by prepending
//! `p - 1` zero bits and a single one bit, where `p = 8 - n % 8`. The
//! padding is therefore between 1 and 8 bits, and a sequence whose length is
//! already a multiple of 8 gains a full extra byte. Bits are packed most
//! significant first, so bit 0 of the stream is the top bit of byte 0.
//!
//! Unpacking finds the first one bit in the first byte and drops everything
//! up to and including it.

use crate::error::Error;
use crate::huffman::Result;
use bitvec::prelude::*;
use log::{debug, warn};
use std::fs;
use std::path::Path;

/// How the unpacker treats a first byte that carries no sentinel bit.
///
/// The packer never produces such a byte, so it only shows up in corrupted
/// or foreign input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnpackMode {
    /// Reject the stream with `Error::MissingSentinel`.
    #[default]
    Strict,
    /// Drop exactly the first 8 bits and keep the rest.
    Lenient,
}

/// Pack a string of '0' and '1' characters into sentinel-padded bytes.
///
/// # Errors
///
/// Returns `Error::InvalidBit` for any other character; nothing is packed in
/// that case.
pub fn pack_bits(bits: &str) -> Result<Vec<u8>> {
    if let Some(bad) = bits.chars().find(|ch| *ch != '0' && *ch != '1') {
        return Err(Error::InvalidBit(bad));
    }

    let padding = 8 - bits.len() % 8;
    let mut packed: BitVec<u8, Msb0> = BitVec::with_capacity(padding + bits.len());
    packed.resize(padding - 1, false);
    packed.push(true);
    packed.extend(bits.bytes().map(|bit| bit == b'1'));

    debug!(
        "packed {} bits with {} padding bits into {} bytes",
        bits.len(),
        padding,
        packed.len() / 8
    );
    Ok(packed.into_vec())
}

/// Unpack sentinel-padded bytes, rejecting a missing sentinel.
pub fn unpack_bits(bytes: &[u8]) -> Result<String> {
    unpack_bits_with(bytes, UnpackMode::Strict)
}

/// Unpack sentinel-padded bytes back into a string of '0' and '1'.
///
/// # Errors
///
/// Returns `Error::EmptyStream` for empty input and, in strict mode,
/// `Error::MissingSentinel` when the first byte is zero.
pub fn unpack_bits_with(bytes: &[u8], mode: UnpackMode) -> Result<String> {
    if bytes.is_empty() {
        return Err(Error::EmptyStream);
    }

    let bits = bytes.view_bits::<Msb0>();
    let start = match bits[..8].first_one() {
        Some(sentinel) => sentinel + 1,
        None => match mode {
            UnpackMode::Strict => return Err(Error::MissingSentinel),
            UnpackMode::Lenient => {
                warn!("no padding sentinel in first byte, dropping it");
                8
            }
        },
    };

    Ok(bits[start..]
        .iter()
        .by_vals()
        .map(|bit| if bit { '1' } else { '0' })
        .collect())
}

/// Pack `bits` and write the bytes to `path`.
///
/// The file is not touched when `bits` contains an invalid character.
pub fn write_bit_string<P: AsRef<Path>>(path: P, bits: &str) -> Result<()> {
    let bytes = pack_bits(bits)?;
    fs::write(path, bytes)?;
    Ok(())
}

/// Read the whole file at `path` and unpack it.
pub fn read_bit_string<P: AsRef<Path>>(path: P, mode: UnpackMode) -> Result<String> {
    let bytes = fs::read(path)?;
    unpack_bits_with(&bytes, mode)
}

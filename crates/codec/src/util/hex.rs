// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Nibble-level hexadecimal conversion.
//!
//! Every byte maps to two characters of the lowercase alphabet, high nibble
//! first. Decoding accepts either case.

use crate::error::HexError;

static DIGITS: [u8; 16] = *b"0123456789abcdef";

/// Converts bytes into their lowercase hexadecimal representation. The result
/// is always twice as long as `data`.
pub fn encode_hex(data: &[u8]) -> String {
	let mut out = String::with_capacity(data.len() << 1);
	for &byte in data {
		out.push(DIGITS[(byte >> 4 & 0x0f) as usize] as char);
		out.push(DIGITS[(byte & 0x0f) as usize] as char);
	}
	out
}

/// Converts a string of hexadecimal digits into bytes.
///
/// Fails if the string has an odd number of characters or contains anything
/// other than `0-9`, `a-f` and `A-F`. Positions in errors are character
/// offsets.
pub fn decode_hex(text: &str) -> Result<Vec<u8>, HexError> {
	let length = text.chars().count();
	if length & 0x01 != 0 {
		return Err(HexError::OddLength {
			length,
		});
	}

	let mut out = Vec::with_capacity(length >> 1);
	let mut chars = text.chars().enumerate();
	while let (Some((i, hi)), Some((j, lo))) = (chars.next(), chars.next()) {
		out.push(nibble(hi, i)? << 4 | nibble(lo, j)?);
	}
	Ok(out)
}

/// Same as [`decode_hex`] over ASCII bytes, one character per byte.
pub fn decode_hex_bytes(data: &[u8]) -> Result<Vec<u8>, HexError> {
	if data.len() & 0x01 != 0 {
		return Err(HexError::OddLength {
			length: data.len(),
		});
	}

	data.chunks_exact(2)
		.enumerate()
		.map(|(i, pair)| {
			let hi = nibble(char::from(pair[0]), i << 1)?;
			let lo = nibble(char::from(pair[1]), (i << 1) + 1)?;
			Ok(hi << 4 | lo)
		})
		.collect()
}

fn nibble(character: char, position: usize) -> Result<u8, HexError> {
	match character {
		'0'..='9' => Ok(character as u8 - b'0'),
		'a'..='f' => Ok(character as u8 - b'a' + 10),
		'A'..='F' => Ok(character as u8 - b'A' + 10),
		_ => Err(HexError::InvalidDigit {
			character,
			position,
		}),
	}
}

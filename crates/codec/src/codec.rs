// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use tracing::{debug, instrument};

use crate::{
	error::{DecodingError, EncodingError},
	util::hex::{decode_hex, decode_hex_bytes, encode_hex},
	value::Value,
};

/// Encodes a byte sequence into another byte sequence.
pub trait BinaryEncoder {
	fn encode(&self, data: &[u8]) -> Vec<u8>;
}

/// Decodes a byte sequence produced by the matching [`BinaryEncoder`].
pub trait BinaryDecoder {
	fn decode(&self, data: &[u8]) -> Result<Vec<u8>, DecodingError>;
}

/// Encodes a value that may be either text or bytes.
pub trait Encoder {
	fn encode_value(&self, value: Value) -> Result<Vec<u8>, EncodingError>;
}

/// Decodes a value that may be either text or bytes.
pub trait Decoder {
	fn decode_value(&self, value: Value) -> Result<Vec<u8>, DecodingError>;
}

/// Hexadecimal codec.
///
/// Encoding always yields the bytes of lowercase hex text. Decoding accepts
/// either case and fails on odd-length input or characters outside the hex
/// alphabet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hex;

impl Hex {
	pub fn new() -> Self {
		Self
	}
}

impl BinaryEncoder for Hex {
	#[instrument(name = "hex::encode", level = "trace", skip_all, fields(len = data.len()))]
	fn encode(&self, data: &[u8]) -> Vec<u8> {
		encode_hex(data).into_bytes()
	}
}

impl BinaryDecoder for Hex {
	#[instrument(name = "hex::decode", level = "trace", skip_all, fields(len = data.len()))]
	fn decode(&self, data: &[u8]) -> Result<Vec<u8>, DecodingError> {
		decode_hex_bytes(data).map_err(|err| {
			let err = DecodingError::from(err);
			debug!(code = err.code(), "hex decode failed: {}", err.message());
			err
		})
	}
}

impl Encoder for Hex {
	#[instrument(name = "hex::encode_value", level = "trace", skip_all)]
	fn encode_value(&self, value: Value) -> Result<Vec<u8>, EncodingError> {
		Ok(match value {
			Value::Text(text) => BinaryEncoder::encode(self, text.as_bytes()),
			Value::Bytes(bytes) => BinaryEncoder::encode(self, &bytes),
		})
	}
}

impl Decoder for Hex {
	#[instrument(name = "hex::decode_value", level = "trace", skip_all)]
	fn decode_value(&self, value: Value) -> Result<Vec<u8>, DecodingError> {
		let result = match value {
			Value::Text(text) => decode_hex(&text),
			Value::Bytes(bytes) => decode_hex_bytes(&bytes),
		};
		result.map_err(|err| {
			let err = DecodingError::from(err);
			debug!(code = err.code(), "hex decode failed: {}", err.message());
			err
		})
	}
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

use crate::error::TypeMismatch;

const EXPECTED: &str = "text or bytes";

/// Input accepted by the generic [`Encoder`](crate::Encoder) and
/// [`Decoder`](crate::Decoder) capabilities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
	Text(String),
	Bytes(Vec<u8>),
}

impl Value {
	/// The UTF-8 bytes of text, or the bytes themselves.
	pub fn as_bytes(&self) -> &[u8] {
		match self {
			Value::Text(text) => text.as_bytes(),
			Value::Bytes(bytes) => bytes,
		}
	}

	pub fn into_bytes(self) -> Vec<u8> {
		match self {
			Value::Text(text) => text.into_bytes(),
			Value::Bytes(bytes) => bytes,
		}
	}
}

impl From<String> for Value {
	fn from(text: String) -> Self {
		Value::Text(text)
	}
}

impl From<&str> for Value {
	fn from(text: &str) -> Self {
		Value::Text(text.to_string())
	}
}

impl From<Vec<u8>> for Value {
	fn from(bytes: Vec<u8>) -> Self {
		Value::Bytes(bytes)
	}
}

impl From<&[u8]> for Value {
	fn from(bytes: &[u8]) -> Self {
		Value::Bytes(bytes.to_vec())
	}
}

impl<const N: usize> From<[u8; N]> for Value {
	fn from(bytes: [u8; N]) -> Self {
		Value::Bytes(bytes.to_vec())
	}
}

impl TryFrom<serde_json::Value> for Value {
	type Error = TypeMismatch;

	fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
		match value {
			serde_json::Value::String(text) => Ok(Value::Text(text)),
			serde_json::Value::Array(items) => items
				.into_iter()
				.map(|item| {
					item.as_u64().and_then(|n| u8::try_from(n).ok()).ok_or(TypeMismatch {
						expected: EXPECTED,
						actual: "array with non-byte elements",
					})
				})
				.collect::<Result<Vec<u8>, _>>()
				.map(Value::Bytes),
			other => Err(TypeMismatch {
				expected: EXPECTED,
				actual: json_kind(&other),
			}),
		}
	}
}

fn json_kind(value: &serde_json::Value) -> &'static str {
	match value {
		serde_json::Value::Null => "null",
		serde_json::Value::Bool(_) => "boolean",
		serde_json::Value::Number(_) => "number",
		serde_json::Value::String(_) => "string",
		serde_json::Value::Array(_) => "array",
		serde_json::Value::Object(_) => "object",
	}
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Hex codec diagnostic functions

use crate::error::Diagnostic;

/// Input to the decoder has an odd number of characters
pub fn odd_length(length: usize) -> Diagnostic {
	Diagnostic {
		code: "HEX_001".to_string(),
		message: "odd number of characters".to_string(),
		label: Some(format!("input has {} characters", length)),
		help: Some("Every byte is written as exactly two hex digits".to_string()),
		notes: vec![],
	}
}

/// Input to the decoder contains a character outside the hex alphabet
pub fn invalid_digit(character: char, position: usize) -> Diagnostic {
	Diagnostic {
		code: "HEX_002".to_string(),
		message: format!("invalid hexadecimal digit {:?} at position {}", character, position),
		label: Some("Invalid hex character found".to_string()),
		help: Some("Hex strings should only contain 0-9, a-f, A-F characters".to_string()),
		notes: vec![],
	}
}

/// Unexpected failure on the encode path
pub fn encoding_failed(reason: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: "HEX_003".to_string(),
		message: reason.into(),
		label: None,
		help: None,
		notes: vec![],
	}
}

/// Codec input was neither text nor a byte sequence
pub fn type_mismatch(expected: &str, actual: &str) -> Diagnostic {
	Diagnostic {
		code: "HEX_004".to_string(),
		message: format!("expected {}, got {}", expected, actual),
		label: Some(format!("{} value", actual)),
		help: Some("Pass a string or an array of integers between 0 and 255".to_string()),
		notes: vec![],
	}
}

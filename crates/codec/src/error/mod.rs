// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

pub mod diagnostic;
mod render;

pub use render::DefaultRenderer;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_fmt(format_args!("{}", self.code))
	}
}

pub trait IntoDiagnostic {
	fn into_diagnostic(self) -> Diagnostic;
}

/// Failure of the nibble-level conversion itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HexError {
	#[error("odd number of characters")]
	OddLength {
		length: usize,
	},

	#[error("invalid hexadecimal digit {character:?} at position {position}")]
	InvalidDigit {
		character: char,
		position: usize,
	},
}

impl IntoDiagnostic for HexError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			HexError::OddLength {
				length,
			} => diagnostic::hex::odd_length(length),
			HexError::InvalidDigit {
				character,
				position,
			} => diagnostic::hex::invalid_digit(character, position),
		}
	}
}

/// Raised by the decode side of a codec.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}", DefaultRenderer::render_string(.0))]
pub struct DecodingError(pub Diagnostic);

impl DecodingError {
	pub fn diagnostic(self) -> Diagnostic {
		self.0
	}

	pub fn code(&self) -> &str {
		&self.0.code
	}

	pub fn message(&self) -> &str {
		&self.0.message
	}
}

impl From<HexError> for DecodingError {
	fn from(err: HexError) -> Self {
		Self(err.into_diagnostic())
	}
}

/// Raised by the encode side of a codec.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}", DefaultRenderer::render_string(.0))]
pub struct EncodingError(pub Diagnostic);

impl EncodingError {
	pub fn diagnostic(self) -> Diagnostic {
		self.0
	}

	pub fn code(&self) -> &str {
		&self.0.code
	}

	pub fn message(&self) -> &str {
		&self.0.message
	}
}

impl From<HexError> for EncodingError {
	fn from(err: HexError) -> Self {
		Self(diagnostic::hex::encoding_failed(err.to_string()))
	}
}

/// A dynamically typed value could not be used as codec input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected}, got {actual}")]
pub struct TypeMismatch {
	pub expected: &'static str,
	pub actual: &'static str,
}

impl IntoDiagnostic for TypeMismatch {
	fn into_diagnostic(self) -> Diagnostic {
		diagnostic::hex::type_mismatch(self.expected, self.actual)
	}
}

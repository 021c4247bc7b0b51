// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

pub mod codec;
pub mod error;
pub mod util;
pub mod value;

pub use codec::{BinaryDecoder, BinaryEncoder, Decoder, Encoder, Hex};
pub use error::{DecodingError, Diagnostic, EncodingError, HexError, IntoDiagnostic, TypeMismatch};
pub use util::hex::{decode_hex, decode_hex_bytes, encode_hex};
pub use value::Value;

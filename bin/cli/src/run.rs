// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::io::{self, Read, Write};

use hexcodec::{
	Decoder, DecodingError, Encoder, EncodingError, Hex, IntoDiagnostic, TypeMismatch, Value, error::DefaultRenderer,
};
use tracing::{debug, instrument};

use crate::cli::{Cli, Command};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
	#[error("{0}")]
	Decoding(#[from] DecodingError),

	#[error("{0}")]
	Encoding(#[from] EncodingError),

	#[error("{}", render_mismatch(.0))]
	TypeMismatch(#[from] TypeMismatch),

	#[error("invalid JSON input: {0}")]
	Json(#[from] serde_json::Error),

	#[error(transparent)]
	Io(#[from] io::Error),
}

fn render_mismatch(mismatch: &TypeMismatch) -> String {
	DefaultRenderer::render_string(&mismatch.clone().into_diagnostic())
}

/// Executes one CLI command, reading from `stdin` when no input argument is
/// given and writing the result to `stdout`.
#[instrument(name = "cli::run", level = "debug", skip_all, fields(json = cli.json))]
pub fn run(cli: &Cli, stdin: impl Read, mut stdout: impl Write) -> Result<(), CliError> {
	match &cli.command {
		Command::Encode {
			input,
		} => {
			let value = read_value(input.as_deref(), cli.json, stdin, false)?;
			debug!(len = value.as_bytes().len(), "encoding");
			let mut encoded = Hex.encode_value(value)?;
			encoded.push(b'\n');
			stdout.write_all(&encoded)?;
		}
		Command::Decode {
			input,
		} => {
			let value = read_value(input.as_deref(), cli.json, stdin, true)?;
			debug!(len = value.as_bytes().len(), "decoding");
			let decoded = Hex.decode_value(value)?;
			if cli.json {
				writeln!(stdout, "{}", serde_json::to_string(&decoded)?)?;
			} else {
				stdout.write_all(&decoded)?;
			}
		}
	}
	stdout.flush()?;
	Ok(())
}

fn read_value(input: Option<&str>, json: bool, mut stdin: impl Read, trim: bool) -> Result<Value, CliError> {
	if json {
		let text = match input {
			Some(text) => text.to_string(),
			None => {
				let mut text = String::new();
				stdin.read_to_string(&mut text)?;
				text
			}
		};
		let value: serde_json::Value = serde_json::from_str(&text)?;
		return Ok(Value::try_from(value)?);
	}

	match input {
		Some(text) => Ok(Value::from(text)),
		None => {
			let mut bytes = Vec::new();
			stdin.read_to_end(&mut bytes)?;
			if trim {
				while matches!(bytes.last(), Some(&(b'\n' | b'\r'))) {
					bytes.pop();
				}
			}
			Ok(Value::from(bytes))
		}
	}
}

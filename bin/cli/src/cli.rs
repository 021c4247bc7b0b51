// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use clap::{ArgAction, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "hexcodec", version, about = "Encode bytes as hex text and back")]
pub struct Cli {
	#[command(subcommand)]
	pub command: Command,

	/// Treat input as a JSON string or byte array
	#[arg(long, global = true)]
	pub json: bool,

	/// Log filter used when RUST_LOG is not set
	#[arg(long, global = true, default_value = "warn")]
	pub log_level: String,

	/// Increase log verbosity (-v debug, -vv trace)
	#[arg(short, long, global = true, action = ArgAction::Count)]
	pub verbose: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
	/// Encode input as lowercase hex text
	Encode {
		/// Input text, read from stdin when omitted
		input: Option<String>,
	},
	/// Decode hex text into raw bytes
	Decode {
		/// Hex text, read from stdin when omitted
		input: Option<String>,
	},
}

impl Cli {
	pub fn log_filter(&self) -> &str {
		match self.verbose {
			0 => self.log_level.as_str(),
			1 => "debug",
			_ => "trace",
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_encode() {
		let cli = Cli::try_parse_from(["hexcodec", "encode", "A"]).unwrap();
		assert_eq!(
			cli.command,
			Command::Encode {
				input: Some("A".to_string())
			}
		);
		assert!(!cli.json);
		assert_eq!(cli.log_filter(), "warn");
	}

	#[test]
	fn test_parse_decode_from_stdin() {
		let cli = Cli::try_parse_from(["hexcodec", "decode", "--json"]).unwrap();
		assert_eq!(
			cli.command,
			Command::Decode {
				input: None
			}
		);
		assert!(cli.json);
	}

	#[test]
	fn test_verbosity() {
		let cli = Cli::try_parse_from(["hexcodec", "-v", "encode"]).unwrap();
		assert_eq!(cli.log_filter(), "debug");
		let cli = Cli::try_parse_from(["hexcodec", "encode", "-vv"]).unwrap();
		assert_eq!(cli.log_filter(), "trace");
		let cli = Cli::try_parse_from(["hexcodec", "--log-level", "hexcodec=trace", "decode"]).unwrap();
		assert_eq!(cli.log_filter(), "hexcodec=trace");
	}

	#[test]
	fn test_missing_subcommand() {
		assert!(Cli::try_parse_from(["hexcodec"]).is_err());
	}
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{error::Error, fs, path::Path};

use hexcodec::{Decoder, Encoder, Hex, Value};
use test_each_file::test_each_path;

test_each_path! { in "crates/codec/tests/vectors" as vectors => run_test }

fn run_test(path: &Path) {
	let script = fs::read_to_string(path).expect("failed to read vector file");
	for (number, line) in script.lines().enumerate() {
		let line = line.trim();
		if line.is_empty() || line.starts_with('#') {
			continue;
		}
		if let Err(err) = run_line(line) {
			panic!("{}:{}: {}: {}", path.display(), number + 1, line, err);
		}
	}
}

fn run_line(line: &str) -> Result<(), Box<dyn Error>> {
	let (command, expected) = line.split_once(" => ").ok_or("missing ' => '")?;
	let (name, input) = command.split_once(' ').ok_or("missing input")?;
	let value: Value = serde_json::from_str(input)?;

	let result = match name {
		"encode" => Hex.encode_value(value).map_err(|err| err.code().to_string()),
		"decode" => Hex.decode_value(value).map_err(|err| err.code().to_string()),
		name => return Err(format!("invalid command {name}").into()),
	};

	match (result, expected.strip_prefix("error ")) {
		(Err(code), Some(expected_code)) => {
			if code != expected_code {
				return Err(format!("expected {expected_code}, got {code}").into());
			}
		}
		(Err(code), None) => return Err(format!("unexpected error {code}").into()),
		(Ok(output), Some(expected_code)) => {
			return Err(format!("expected {expected_code}, got {output:?}").into());
		}
		(Ok(output), None) => {
			let actual = match name {
				"encode" => serde_json::to_string(&String::from_utf8(output)?)?,
				_ => serde_json::to_string(&output)?,
			};
			let expected = serde_json::to_string(&serde_json::from_str::<serde_json::Value>(expected)?)?;
			if actual != expected {
				return Err(format!("expected {expected}, got {actual}").into());
			}
		}
	}
	Ok(())
}

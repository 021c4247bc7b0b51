// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::Write;

use super::Diagnostic;

pub struct DefaultRenderer;

impl DefaultRenderer {
	pub fn render(&self, d: &Diagnostic) -> String {
		let mut output = String::new();

		let _ = write!(&mut output, "error[{}]: {}", d.code, d.message);

		if let Some(label) = &d.label {
			let _ = write!(&mut output, "\n  = {}", label);
		}

		if let Some(help) = &d.help {
			let _ = write!(&mut output, "\n\nhelp: {}", help);
		}

		for note in &d.notes {
			let _ = write!(&mut output, "\n\nnote: {}", note);
		}

		output
	}

	pub fn render_string(diagnostic: &Diagnostic) -> String {
		DefaultRenderer.render(diagnostic)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_render_minimal() {
		let diagnostic = Diagnostic {
			code: "HEX_000".to_string(),
			message: "something failed".to_string(),
			label: None,
			help: None,
			notes: vec![],
		};
		assert_eq!(DefaultRenderer::render_string(&diagnostic), "error[HEX_000]: something failed");
	}

	#[test]
	fn test_render_full() {
		let diagnostic = Diagnostic {
			code: "HEX_000".to_string(),
			message: "something failed".to_string(),
			label: Some("here".to_string()),
			help: Some("do this instead".to_string()),
			notes: vec!["first".to_string(), "second".to_string()],
		};
		assert_eq!(
			DefaultRenderer::render_string(&diagnostic),
			"error[HEX_000]: something failed\n  = here\n\nhelp: do this instead\n\nnote: first\n\nnote: second"
		);
	}
}

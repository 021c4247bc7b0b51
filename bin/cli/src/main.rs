// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod cli;
mod run;

use std::{io, process::ExitCode};

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::Cli;

fn main() -> ExitCode {
	let cli = Cli::parse();

	let env_filter = EnvFilter::try_from_default_env()
		.or_else(|_| EnvFilter::try_new(cli.log_filter()))
		.unwrap_or_else(|_| EnvFilter::new("warn"));
	tracing_subscriber::fmt().with_env_filter(env_filter).with_writer(io::stderr).init();

	match run::run(&cli, io::stdin().lock(), io::stdout().lock()) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			debug!(?err, "command failed");
			eprintln!("{}", err);
			ExitCode::FAILURE
		}
	}
}

#![allow(dead_code)]

use assert_cmd::Command;

pub fn args_cmd() -> Command {
	let mut cmd = Command::cargo_bin("generate-from-args").unwrap_or_else(|e| panic!("{e}"));
	cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
	cmd
}

pub fn document_cmd() -> Command {
	let mut cmd = Command::cargo_bin("generate-from-document").unwrap_or_else(|e| panic!("{e}"));
	cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
	cmd
}

pub const CONDITIONAL_TEMPLATE: &str = "//# if args[0] == \"x\"\nmatched\n//# endif\n";

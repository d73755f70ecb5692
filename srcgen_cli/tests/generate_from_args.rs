use srcgen_core::AnyEmptyResult;

mod common;

use common::CONDITIONAL_TEMPLATE;
use common::args_cmd;

#[test]
fn renders_to_stdout_by_default() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let template = tmp.path().join("cond.tpl");
	std::fs::write(&template, CONDITIONAL_TEMPLATE)?;

	args_cmd()
		.arg(&template)
		.arg("x")
		.assert()
		.success()
		.stdout("matched\n");

	args_cmd()
		.arg(&template)
		.arg("y")
		.assert()
		.success()
		.stdout("");

	Ok(())
}

#[test]
fn writes_output_file_with_flag() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let template = tmp.path().join("list.tpl.h");
	let output = tmp.path().join("list.h");
	std::fs::write(
		&template,
		"//## one entry per argument\nconst char* kNames[] = {\n//# for name in args\n    \
		 \"${ name }\",\n//# endfor\n};\n",
	)?;

	args_cmd()
		.arg("-o")
		.arg(&output)
		.arg(&template)
		.args(["alpha", "beta"])
		.assert()
		.success()
		.stdout("");

	let content = std::fs::read_to_string(&output)?;
	assert!(content.contains("    \"alpha\",\n    \"beta\",\n};\n"), "{content:?}");
	assert!(!content.contains("one entry per argument"));

	Ok(())
}

#[test]
fn no_arguments_bind_an_empty_sequence() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let template = tmp.path().join("count.tpl");
	std::fs::write(&template, "count=${ args | length }\n")?;

	args_cmd()
		.arg(&template)
		.assert()
		.success()
		.stdout("count=0\n");

	Ok(())
}

#[test]
fn hyphenated_arguments_after_separator() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let template = tmp.path().join("echo.tpl");
	std::fs::write(&template, "${ args | join(\" \") }\n")?;

	args_cmd()
		.arg(&template)
		.args(["--", "-x", "--flag"])
		.assert()
		.success()
		.stdout("-x --flag\n");

	Ok(())
}

#[test]
fn undefined_variable_fails_without_creating_output() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let template = tmp.path().join("missing.tpl");
	let output = tmp.path().join("missing.h");
	std::fs::write(&template, "${ undefinedVar }\n")?;

	args_cmd()
		.arg("-o")
		.arg(&output)
		.arg(&template)
		.assert()
		.failure()
		.code(2)
		.stderr(predicates::str::contains("srcgen::unresolved_variable"));

	assert!(!output.exists());

	Ok(())
}

#[test]
fn malformed_template_is_reported() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let template = tmp.path().join("broken.tpl");
	std::fs::write(&template, "//# if args\nnever closed\n")?;

	args_cmd()
		.arg(&template)
		.assert()
		.failure()
		.code(2)
		.stdout("")
		.stderr(predicates::str::contains("srcgen::compile"));

	Ok(())
}

#[test]
fn missing_template_is_reported() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	args_cmd()
		.arg(tmp.path().join("nope.tpl"))
		.assert()
		.failure()
		.code(2)
		.stderr(predicates::str::contains("srcgen::read"));

	Ok(())
}

#[test]
fn missing_template_argument_is_a_usage_error() {
	args_cmd()
		.assert()
		.failure()
		.stderr(predicates::str::contains("TEMPLATE_FILE"));
}

#[test]
fn config_changes_delimiters() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let config = tmp.path().join("srcgen.toml");
	let template = tmp.path().join("run.tpl.sh");
	std::fs::write(
		&config,
		"[delimiters]\nline_statement_prefix = \"#%\"\nline_comment_prefix = \"#%#\"\n",
	)?;
	std::fs::write(&template, "#% for a in args\necho ${ a }\n#% endfor\n")?;

	args_cmd()
		.arg("--config")
		.arg(&config)
		.arg(&template)
		.args(["one", "two"])
		.assert()
		.success()
		.stdout("echo one\necho two\n");

	Ok(())
}

#[test]
fn invalid_config_is_reported() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let config = tmp.path().join("srcgen.toml");
	let template = tmp.path().join("t.tpl");
	std::fs::write(&config, "[delimiters]\nblock_start = \"%\"\n")?;
	std::fs::write(&template, "text\n")?;

	args_cmd()
		.arg("-c")
		.arg(&config)
		.arg(&template)
		.assert()
		.failure()
		.code(2)
		.stderr(predicates::str::contains("srcgen::invalid_delimiters"));

	Ok(())
}

#[test]
fn verbose_logs_stay_off_stdout() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let template = tmp.path().join("cond.tpl");
	std::fs::write(&template, CONDITIONAL_TEMPLATE)?;

	args_cmd()
		.arg("-vvv")
		.arg(&template)
		.arg("x")
		.assert()
		.success()
		.stdout("matched\n")
		.stderr(predicates::str::contains("compiling template"));

	Ok(())
}

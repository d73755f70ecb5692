use std::path::PathBuf;

use clap::CommandFactory;
use clap::Parser;
use rstest::rstest;
use similar_asserts::assert_eq;

use super::*;

#[test]
fn clap_definitions_are_valid() {
	GenerateFromArgsCli::command().debug_assert();
	GenerateFromDocumentCli::command().debug_assert();
}

#[rstest]
#[case::stdout(&["gen", "t.tpl"], None, vec![])]
#[case::output_first(&["gen", "-o", "out.h", "t.tpl", "a", "b"], Some("out.h"), vec!["a", "b"])]
#[case::output_last(&["gen", "t.tpl", "a", "-o", "out.h"], Some("out.h"), vec!["a"])]
#[case::hyphenated(&["gen", "t.tpl", "--", "-x", "--flag"], None, vec!["-x", "--flag"])]
fn parses_positional_invocations(
	#[case] argv: &[&str],
	#[case] output: Option<&str>,
	#[case] args: Vec<&str>,
) {
	let cli = GenerateFromArgsCli::try_parse_from(argv).unwrap_or_else(|e| panic!("{e}"));
	assert_eq!(cli.template_file, PathBuf::from("t.tpl"));
	assert_eq!(cli.output, output.map(PathBuf::from));
	let expected: Vec<String> = args.iter().map(ToString::to_string).collect();
	assert_eq!(cli.template_args, expected);
}

#[test]
fn template_file_is_required() {
	assert!(GenerateFromArgsCli::try_parse_from(["gen"]).is_err());
	assert!(GenerateFromArgsCli::try_parse_from(["gen", "-o", "out.h"]).is_err());
}

#[test]
fn parses_document_invocation() {
	let cli = GenerateFromDocumentCli::try_parse_from([
		"gen", "-vv", "--config", "srcgen.toml", "doc.yml", "t.tpl", "out.h",
	])
	.unwrap_or_else(|e| panic!("{e}"));
	assert_eq!(cli.document_file, PathBuf::from("doc.yml"));
	assert_eq!(cli.template_file, PathBuf::from("t.tpl"));
	assert_eq!(cli.output_file, PathBuf::from("out.h"));
	assert_eq!(cli.common.verbose, 2);
	assert_eq!(cli.common.config, Some(PathBuf::from("srcgen.toml")));
}

#[rstest]
#[case::nothing(&["gen"])]
#[case::no_template(&["gen", "doc.yml"])]
#[case::no_output(&["gen", "doc.yml", "t.tpl"])]
#[case::extra(&["gen", "doc.yml", "t.tpl", "out.h", "more"])]
fn document_invocation_needs_exactly_three_paths(#[case] argv: &[&str]) {
	assert!(GenerateFromDocumentCli::try_parse_from(argv).is_err());
}

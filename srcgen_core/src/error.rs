use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum SrcgenError {
	#[error("failed to read `{}`: {source}", path.display())]
	#[diagnostic(code(srcgen::read))]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to write `{}`: {source}", path.display())]
	#[diagnostic(
		code(srcgen::write),
		help("the output file may be partially written; rerun the build step to regenerate it")
	)]
	Write {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to compile template `{}`: {message}", path.display())]
	#[diagnostic(
		code(srcgen::compile),
		help("check that every `//#` directive is well formed and every block is closed")
	)]
	Compile {
		path: PathBuf,
		line: Option<usize>,
		message: String,
	},

	#[error("failed to parse document `{}`: {reason}", path.display())]
	#[diagnostic(code(srcgen::document_parse))]
	DocumentParse { path: PathBuf, reason: String },

	#[error("document `{}` must contain a top-level mapping, found {found}", path.display())]
	#[diagnostic(
		code(srcgen::structural_mismatch),
		help("the top level of the document is bound key by key into the template namespace")
	)]
	StructuralMismatch { path: PathBuf, found: &'static str },

	#[error("document `{}` has a non-string top-level key: {key}", path.display())]
	#[diagnostic(
		code(srcgen::invalid_variable_name),
		help("top-level keys become template variable names and must be strings")
	)]
	InvalidVariableName { path: PathBuf, key: String },

	#[error("unresolved variable in `{template}`: {message}")]
	#[diagnostic(
		code(srcgen::unresolved_variable),
		help("every variable referenced by the template must be supplied as an argument or document key")
	)]
	UnresolvedVariable {
		template: String,
		line: Option<usize>,
		message: String,
	},

	#[error("failed to render `{template}`: {message}")]
	#[diagnostic(code(srcgen::render))]
	Render {
		template: String,
		line: Option<usize>,
		message: String,
	},

	#[error("invalid delimiter profile: {0}")]
	#[diagnostic(
		code(srcgen::invalid_delimiters),
		help("start delimiters must be distinct, at least two characters, and not prefixes of each other")
	)]
	InvalidDelimiters(String),

	#[error("failed to parse config file `{}`: {reason}", path.display())]
	#[diagnostic(
		code(srcgen::config_parse),
		help("check that the config is valid TOML with an optional [delimiters] section")
	)]
	ConfigParse { path: PathBuf, reason: String },
}

impl SrcgenError {
	/// The 1-indexed template line the error points at, when known.
	pub fn line(&self) -> Option<usize> {
		match self {
			Self::Compile { line, .. }
			| Self::UnresolvedVariable { line, .. }
			| Self::Render { line, .. } => *line,
			_ => None,
		}
	}
}

pub type SrcgenResult<T> = Result<T, SrcgenError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;

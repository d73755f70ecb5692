use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;

use derive_more::Deref;
use derive_more::DerefMut;
use minijinja::Value;
use serde_yaml_ng::Value as Document;

use crate::SrcgenError;
use crate::SrcgenResult;

/// Name under which positional arguments are exposed to templates.
pub const ARGS_VARIABLE: &str = "args";

/// Variables visible to a template at render time, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Deref, DerefMut)]
pub struct Namespace(BTreeMap<String, Value>);

impl Namespace {
	pub fn new() -> Self {
		Self::default()
	}

	/// The namespace as a single engine value, used as the render context.
	pub fn to_value(&self) -> Value {
		Value::from(self.0.clone())
	}
}

impl FromIterator<(String, Value)> for Namespace {
	fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

/// Supported on-disk formats for structured documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
	/// YAML, which also covers JSON documents.
	Yaml,
	Toml,
}

impl DocumentFormat {
	/// Pick a format from the file extension. Anything that is not `.toml` is
	/// read as YAML.
	pub fn from_path(path: &Path) -> Self {
		match path
			.extension()
			.and_then(|e| e.to_str())
			.map(str::to_ascii_lowercase)
			.as_deref()
		{
			Some("toml") => Self::Toml,
			_ => Self::Yaml,
		}
	}
}

/// Builds a [`Namespace`] from one of the two supported input shapes.
#[derive(Debug, Clone)]
pub enum Binder {
	/// Command-line arguments, bound as a single `args` sequence.
	Positional(Vec<String>),
	/// A parsed document whose top-level entries become variables.
	Structured {
		/// Where the document came from, for error messages.
		origin: PathBuf,
		document: Document,
	},
}

impl Binder {
	pub fn positional<I, S>(args: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self::Positional(args.into_iter().map(Into::into).collect())
	}

	/// Read and parse a document file, choosing the parser by extension.
	pub fn structured_from_path(path: &Path) -> SrcgenResult<Self> {
		let content = std::fs::read_to_string(path).map_err(|source| {
			SrcgenError::Read {
				path: path.to_path_buf(),
				source,
			}
		})?;

		Self::structured_from_str(&content, DocumentFormat::from_path(path), path)
	}

	/// Parse `content` as a document of the given format. `origin` is only
	/// used in error messages.
	pub fn structured_from_str(
		content: &str,
		format: DocumentFormat,
		origin: &Path,
	) -> SrcgenResult<Self> {
		let document = parse_document(content, format, origin)?;
		Ok(Self::Structured {
			origin: origin.to_path_buf(),
			document,
		})
	}

	/// Produce the namespace for this input.
	pub fn bind(&self) -> SrcgenResult<Namespace> {
		match self {
			Self::Positional(args) => {
				tracing::debug!(count = args.len(), "binding positional arguments");
				let mut namespace = Namespace::new();
				namespace.insert(ARGS_VARIABLE.to_string(), Value::from(args.clone()));
				Ok(namespace)
			}
			Self::Structured { origin, document } => bind_document(document, origin),
		}
	}
}

fn bind_document(document: &Document, origin: &Path) -> SrcgenResult<Namespace> {
	let Document::Mapping(mapping) = document else {
		return Err(SrcgenError::StructuralMismatch {
			path: origin.to_path_buf(),
			found: document_kind(document),
		});
	};

	let mut namespace = Namespace::new();
	for (key, value) in mapping {
		let Document::String(name) = key else {
			return Err(SrcgenError::InvalidVariableName {
				path: origin.to_path_buf(),
				key: describe_key(key),
			});
		};
		namespace.insert(name.clone(), Value::from_serialize(value));
	}
	tracing::debug!(
		path = %origin.display(),
		variables = namespace.len(),
		"bound document"
	);

	Ok(namespace)
}

fn parse_document(content: &str, format: DocumentFormat, origin: &Path) -> SrcgenResult<Document> {
	match format {
		DocumentFormat::Yaml => {
			let parse_error = |e: serde_yaml_ng::Error| {
				SrcgenError::DocumentParse {
					path: origin.to_path_buf(),
					reason: e.to_string(),
				}
			};
			let mut document: Document = serde_yaml_ng::from_str(content).map_err(parse_error)?;
			document.apply_merge().map_err(parse_error)?;
			Ok(document)
		}
		DocumentFormat::Toml => {
			let table: toml::Table = toml::from_str(content).map_err(|e| {
				SrcgenError::DocumentParse {
					path: origin.to_path_buf(),
					reason: e.to_string(),
				}
			})?;
			Ok(toml_to_document(toml::Value::Table(table)))
		}
	}
}

/// Convert a TOML value into the document model. Datetimes become strings.
fn toml_to_document(value: toml::Value) -> Document {
	match value {
		toml::Value::String(s) => Document::String(s),
		toml::Value::Integer(i) => Document::Number(i.into()),
		toml::Value::Float(f) => Document::Number(f.into()),
		toml::Value::Boolean(b) => Document::Bool(b),
		toml::Value::Datetime(dt) => Document::String(dt.to_string()),
		toml::Value::Array(arr) => {
			Document::Sequence(arr.into_iter().map(toml_to_document).collect())
		}
		toml::Value::Table(table) => {
			Document::Mapping(
				table
					.into_iter()
					.map(|(k, v)| (Document::String(k), toml_to_document(v)))
					.collect(),
			)
		}
	}
}

fn document_kind(document: &Document) -> &'static str {
	match document {
		Document::Null => "null",
		Document::Bool(_) => "a boolean",
		Document::Number(_) => "a number",
		Document::String(_) => "a string",
		Document::Sequence(_) => "a sequence",
		Document::Mapping(_) => "a mapping",
		Document::Tagged(_) => "a tagged value",
	}
}

fn describe_key(key: &Document) -> String {
	serde_yaml_ng::to_string(key).map_or_else(
		|_| document_kind(key).to_string(),
		|s| s.trim_end().to_string(),
	)
}

use std::path::Path;
use std::path::PathBuf;

use minijinja::AutoEscape;
use minijinja::Environment;
use minijinja::ErrorKind;
use minijinja::UndefinedBehavior;
use minijinja::Value;
use minijinja::syntax::SyntaxConfig;

use crate::DelimiterProfile;
use crate::SrcgenError;
use crate::SrcgenResult;

/// Compiles template sources with a fixed [`DelimiterProfile`].
///
/// Nothing is cached. Each call to [`TemplateCompiler::compile`] reads the
/// file again and builds a fresh engine environment, so a template edited
/// mid-build is always seen as it is on disk.
#[derive(Clone)]
pub struct TemplateCompiler {
	profile: DelimiterProfile,
	syntax: SyntaxConfig,
}

impl TemplateCompiler {
	pub fn new(profile: DelimiterProfile) -> SrcgenResult<Self> {
		let syntax = profile.syntax_config()?;
		Ok(Self { profile, syntax })
	}

	pub fn profile(&self) -> &DelimiterProfile {
		&self.profile
	}

	/// Read and compile the template at `path`.
	pub fn compile(&self, path: &Path) -> SrcgenResult<CompiledTemplate> {
		let source = std::fs::read_to_string(path).map_err(|source| {
			SrcgenError::Read {
				path: path.to_path_buf(),
				source,
			}
		})?;
		tracing::debug!(path = %path.display(), bytes = source.len(), "compiling template");

		self.compile_named(path.to_path_buf(), source)
	}

	/// Compile an in-memory template registered under `name`.
	pub fn compile_str(&self, name: &str, source: &str) -> SrcgenResult<CompiledTemplate> {
		self.compile_named(PathBuf::from(name), source.to_string())
	}

	fn compile_named(&self, path: PathBuf, source: String) -> SrcgenResult<CompiledTemplate> {
		let name = path.display().to_string();
		let source = strip_trailing_comments(&source, &self.profile.line_comment_prefix);
		let mut env = self.environment();
		env.add_template_owned(name.clone(), source)
			.map_err(|e| {
				SrcgenError::Compile {
					path,
					line: e.line(),
					message: e.to_string(),
				}
			})?;

		Ok(CompiledTemplate { env, name })
	}

	fn environment(&self) -> Environment<'static> {
		let mut env = Environment::new();
		env.set_syntax(self.syntax.clone());
		env.set_undefined_behavior(UndefinedBehavior::Strict);
		env.set_keep_trailing_newline(true);
		env.set_trim_blocks(true);
		env.set_lstrip_blocks(true);
		env.set_auto_escape_callback(|_| AutoEscape::None);
		env.add_function("load_yaml", load_yaml);
		env
	}
}

impl std::fmt::Debug for TemplateCompiler {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TemplateCompiler")
			.field("profile", &self.profile)
			.finish_non_exhaustive()
	}
}

/// A template compiled against one delimiter profile, ready to render.
///
/// Owns its engine environment outright; nothing is shared with other
/// compilations.
#[derive(Debug)]
pub struct CompiledTemplate {
	env: Environment<'static>,
	name: String,
}

impl CompiledTemplate {
	/// Name the template was registered under (its path for file templates).
	pub fn name(&self) -> &str {
		&self.name
	}

	pub(crate) fn render_value(&self, ctx: Value) -> Result<String, minijinja::Error> {
		self.env.get_template(&self.name)?.render(ctx)
	}
}

/// Cut line comments that follow text on the same line, keeping the line
/// ending. A comment that opens its line is left for the engine, which drops
/// the whole line.
fn strip_trailing_comments(source: &str, prefix: &str) -> String {
	source
		.split_inclusive('\n')
		.map(|line| {
			let (body, ending) = line
				.strip_suffix("\r\n")
				.map(|body| (body, "\r\n"))
				.or_else(|| line.strip_suffix('\n').map(|body| (body, "\n")))
				.unwrap_or((line, ""));

			match body.find(prefix) {
				Some(at) if !body[..at].trim().is_empty() => format!("{}{ending}", &body[..at]),
				_ => line.to_string(),
			}
		})
		.collect()
}

/// Template function: parse a YAML file and return its contents.
///
/// Relative paths resolve against the working directory of the process, which
/// is where build systems run the generator from.
fn load_yaml(path: &str) -> Result<Value, minijinja::Error> {
	let content = std::fs::read_to_string(path).map_err(|e| {
		minijinja::Error::new(
			ErrorKind::InvalidOperation,
			format!("load_yaml: cannot read `{path}`"),
		)
		.with_source(e)
	})?;
	let value: serde_yaml_ng::Value = serde_yaml_ng::from_str(&content)
		.and_then(|mut value: serde_yaml_ng::Value| value.apply_merge().map(|()| value))
		.map_err(|e| {
			minijinja::Error::new(
				ErrorKind::InvalidOperation,
				format!("load_yaml: cannot parse `{path}`"),
			)
			.with_source(e)
		})?;

	Ok(Value::from_serialize(&value))
}

use std::path::Path;

use serde::Deserialize;

use crate::DelimiterProfile;
use crate::SrcgenError;
use crate::SrcgenResult;

/// Conventional name for a generator config file.
pub const CONFIG_FILE_NAME: &str = "srcgen.toml";

/// Configuration loaded from a `srcgen.toml` file.
///
/// ```toml
/// [delimiters]
/// line_statement_prefix = "#%"
/// line_comment_prefix = "#%#"
/// ```
///
/// Fields left out keep their C-family defaults. The generator never looks
/// for this file on its own; it is only read when passed explicitly, so a
/// build step behaves the same wherever it runs.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SrcgenConfig {
	/// Token set for directives, comments and expressions.
	#[serde(default)]
	pub delimiters: DelimiterProfile,
}

impl SrcgenConfig {
	/// Load and validate the config at `path`.
	pub fn load(path: &Path) -> SrcgenResult<Self> {
		let content = std::fs::read_to_string(path).map_err(|source| {
			SrcgenError::Read {
				path: path.to_path_buf(),
				source,
			}
		})?;

		let config = Self::from_toml(&content).map_err(|reason| {
			SrcgenError::ConfigParse {
				path: path.to_path_buf(),
				reason,
			}
		})?;
		config.delimiters.validate()?;
		tracing::debug!(path = %path.display(), "loaded config");

		Ok(config)
	}

	/// Load the config at `path` when given, the defaults otherwise.
	pub fn load_or_default(path: Option<&Path>) -> SrcgenResult<Self> {
		path.map_or_else(|| Ok(Self::default()), Self::load)
	}

	fn from_toml(content: &str) -> Result<Self, String> {
		toml::from_str(content).map_err(|e| e.to_string())
	}
}

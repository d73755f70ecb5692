//! Delimiter profiles handed to the template compiler.
//!
//! The default profile spells every directive, comment and expression with
//! tokens that a C-family compiler reads as ordinary comments (or, for
//! `${ ... }`, that never appear in C++ source), so a template stays a
//! readable skeleton of the file it generates:
//!
//! ```text
//! //## `kinds` comes from the document.
//! enum class Kind {
//!     //# for kind in kinds
//!     k${ kind.name } = ${ kind.code },
//!     //# endfor
//! };
//! ```

use minijinja::syntax::SyntaxConfig;
use serde::Deserialize;

use crate::SrcgenError;
use crate::SrcgenResult;

/// Prefix marking a whole line as a directive.
pub const DEFAULT_LINE_STATEMENT_PREFIX: &str = "//#";
/// Prefix marking the rest of a line as a template comment.
pub const DEFAULT_LINE_COMMENT_PREFIX: &str = "//##";

/// Token set used to tell directives and comments apart from literal output.
///
/// Every field is plain data so other host languages can be accommodated
/// without touching the compiler. Missing fields in a config file fall back to
/// [`DelimiterProfile::c_family`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DelimiterProfile {
	/// Whole-line directive start. The directive ends at the end of the line.
	pub line_statement_prefix: String,
	/// Whole-line or trailing comment start.
	pub line_comment_prefix: String,
	/// Inline directive start.
	pub block_start: String,
	/// Inline directive end.
	pub block_end: String,
	/// Inline comment start.
	pub comment_start: String,
	/// Inline comment end.
	pub comment_end: String,
	/// Expression output start.
	pub variable_start: String,
	/// Expression output end.
	pub variable_end: String,
}

impl Default for DelimiterProfile {
	fn default() -> Self {
		Self::c_family()
	}
}

impl DelimiterProfile {
	/// The profile for C, C++ and JavaScript templates.
	pub fn c_family() -> Self {
		Self {
			line_statement_prefix: DEFAULT_LINE_STATEMENT_PREFIX.to_string(),
			line_comment_prefix: DEFAULT_LINE_COMMENT_PREFIX.to_string(),
			block_start: "/*%".to_string(),
			block_end: "%*/".to_string(),
			comment_start: "/*#".to_string(),
			comment_end: "#*/".to_string(),
			variable_start: "${".to_string(),
			variable_end: "}".to_string(),
		}
	}

	/// All tokens of the profile, starts before ends.
	pub fn tokens(&self) -> [&str; 8] {
		[
			self.line_statement_prefix.as_str(),
			self.line_comment_prefix.as_str(),
			self.block_start.as_str(),
			self.comment_start.as_str(),
			self.variable_start.as_str(),
			self.block_end.as_str(),
			self.comment_end.as_str(),
			self.variable_end.as_str(),
		]
	}

	/// Check the profile can be lexed unambiguously.
	pub fn validate(&self) -> SrcgenResult<()> {
		let starts = [
			("block_start", self.block_start.as_str()),
			("comment_start", self.comment_start.as_str()),
			("variable_start", self.variable_start.as_str()),
		];

		for (name, token) in starts {
			if token.chars().count() < 2 {
				return Err(SrcgenError::InvalidDelimiters(format!(
					"`{name}` must be at least two characters, got `{token}`"
				)));
			}
		}

		for (i, (a_name, a)) in starts.iter().enumerate() {
			for (b_name, b) in starts.iter().skip(i + 1) {
				if a.starts_with(b) || b.starts_with(a) {
					return Err(SrcgenError::InvalidDelimiters(format!(
						"`{a_name}` (`{a}`) and `{b_name}` (`{b}`) overlap"
					)));
				}
			}
		}

		let ends = [
			("block_end", self.block_end.as_str()),
			("comment_end", self.comment_end.as_str()),
			("variable_end", self.variable_end.as_str()),
			("line_statement_prefix", self.line_statement_prefix.as_str()),
			("line_comment_prefix", self.line_comment_prefix.as_str()),
		];
		for (name, token) in ends {
			if token.trim().is_empty() {
				return Err(SrcgenError::InvalidDelimiters(format!(
					"`{name}` must not be empty"
				)));
			}
		}

		if self.line_statement_prefix == self.line_comment_prefix {
			return Err(SrcgenError::InvalidDelimiters(format!(
				"`line_statement_prefix` and `line_comment_prefix` are both `{}`",
				self.line_statement_prefix
			)));
		}

		Ok(())
	}

	/// Build the engine syntax configuration for this profile.
	pub fn syntax_config(&self) -> SrcgenResult<SyntaxConfig> {
		self.validate()?;

		SyntaxConfig::builder()
			.block_delimiters(self.block_start.clone(), self.block_end.clone())
			.variable_delimiters(self.variable_start.clone(), self.variable_end.clone())
			.comment_delimiters(self.comment_start.clone(), self.comment_end.clone())
			.line_statement_prefix(self.line_statement_prefix.clone())
			.line_comment_prefix(self.line_comment_prefix.clone())
			.build()
			.map_err(|e| SrcgenError::InvalidDelimiters(e.to_string()))
	}
}

use minijinja::ErrorKind;

use crate::CompiledTemplate;
use crate::Namespace;
use crate::SrcgenError;
use crate::SrcgenResult;

/// Render `template` with `namespace` as its only variable scope.
///
/// A reference to a name missing from the namespace fails with
/// [`SrcgenError::UnresolvedVariable`]; any other runtime failure inside a
/// directive or expression fails with [`SrcgenError::Render`].
pub fn render(template: &CompiledTemplate, namespace: &Namespace) -> SrcgenResult<String> {
	tracing::debug!(
		template = template.name(),
		variables = namespace.len(),
		"rendering template"
	);

	template
		.render_value(namespace.to_value())
		.map_err(|e| {
			let name = e
				.name()
				.map_or_else(|| template.name().to_string(), ToString::to_string);
			let line = e.line();
			let message = e.to_string();

			if e.kind() == ErrorKind::UndefinedError {
				SrcgenError::UnresolvedVariable {
					template: name,
					line,
					message,
				}
			} else {
				SrcgenError::Render {
					template: name,
					line,
					message,
				}
			}
		})
}

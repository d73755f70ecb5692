use std::path::Path;

use crate::Binder;
use crate::OutputSink;
use crate::SrcgenResult;
use crate::TemplateCompiler;
use crate::render;

/// Bind, compile and render the template at `template_path`.
pub fn render_file(
	compiler: &TemplateCompiler,
	template_path: &Path,
	binder: &Binder,
) -> SrcgenResult<String> {
	let namespace = binder.bind()?;
	let compiled = compiler.compile(template_path)?;
	render(&compiled, &namespace)
}

/// Run one full generation: bind, compile, render, then write to `sink`.
///
/// The sink is only touched once rendering has succeeded, so a failing
/// template never creates or truncates the output file.
#[tracing::instrument(skip_all, fields(template = %template_path.display()))]
pub fn generate(
	compiler: &TemplateCompiler,
	template_path: &Path,
	binder: &Binder,
	sink: &OutputSink,
) -> SrcgenResult<()> {
	let text = render_file(compiler, template_path, binder)?;
	sink.write(&text)?;
	tracing::info!(bytes = text.len(), "generated");

	Ok(())
}

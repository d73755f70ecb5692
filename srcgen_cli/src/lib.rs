use std::path::PathBuf;
use std::process;

use clap::ArgAction;
use clap::Args;
use clap::Parser;
use srcgen_core::Binder;
use srcgen_core::OutputSink;
use srcgen_core::SrcgenConfig;
use srcgen_core::SrcgenResult;
use srcgen_core::TemplateCompiler;
use srcgen_core::generate;
use tracing_subscriber::EnvFilter;

/// Exit status for any generation failure.
pub const FAILURE_EXIT_CODE: i32 = 2;

/// Options shared by both generators.
#[derive(Debug, Args)]
pub struct CommonArgs {
	/// Load delimiter settings from a `srcgen.toml` file.
	#[arg(long, short, value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Increase log verbosity on stderr (`-v` info, `-vv` debug, `-vvv`
	/// trace). `RUST_LOG` takes precedence when set.
	#[arg(long, short, action = ArgAction::Count)]
	pub verbose: u8,

	/// Disable colored output.
	#[arg(long, default_value_t = false)]
	pub no_color: bool,
}

impl CommonArgs {
	fn use_color(&self) -> bool {
		!self.no_color && std::env::var_os("NO_COLOR").is_none()
	}

	/// Build a compiler from the configured (or default) delimiter profile.
	pub fn compiler(&self) -> SrcgenResult<TemplateCompiler> {
		let config = SrcgenConfig::load_or_default(self.config.as_deref())?;
		TemplateCompiler::new(config.delimiters)
	}
}

#[derive(Debug, Parser)]
#[command(
	name = "generate-from-args",
	version,
	about = "Render a template with positional arguments bound to `args`.",
	long_about = "Render a template with positional arguments bound to `args`.\n\nDirectives \
	              are written as C-family comments so the template stays a readable source \
	              file:\n\n  //# if args[0] == \"debug\"\n  #define DEBUG 1\n  //# endif\n\nOutput \
	              goes to stdout unless `-o` is given."
)]
pub struct GenerateFromArgsCli {
	/// Output file. Defaults to standard output.
	#[arg(short = 'o', value_name = "OUTPUT")]
	pub output: Option<PathBuf>,

	/// Template source file.
	#[arg(value_name = "TEMPLATE_FILE")]
	pub template_file: PathBuf,

	/// Arguments exposed to the template, in order, as the `args` sequence.
	/// Use `--` before arguments that start with a hyphen.
	#[arg(value_name = "ARG")]
	pub template_args: Vec<String>,

	#[command(flatten)]
	pub common: CommonArgs,
}

impl GenerateFromArgsCli {
	pub fn run(&self) -> SrcgenResult<()> {
		let compiler = self.common.compiler()?;
		let binder = Binder::positional(self.template_args.iter().cloned());
		let sink = OutputSink::from_option(self.output.clone());
		generate(&compiler, &self.template_file, &binder, &sink)
	}
}

#[derive(Debug, Parser)]
#[command(
	name = "generate-from-document",
	version,
	about = "Render a template with the top-level keys of a YAML or TOML document as variables.",
	long_about = "Render a template with the top-level keys of a YAML or TOML document as \
	              variables.\n\nThe document must contain a mapping at the top level. Files \
	              ending in `.toml` are read as TOML; everything else (including JSON) is read \
	              as YAML. Duplicate keys are rejected."
)]
pub struct GenerateFromDocumentCli {
	/// YAML, JSON or TOML document whose top-level keys become variables.
	#[arg(value_name = "DOCUMENT_FILE")]
	pub document_file: PathBuf,

	/// Template source file.
	#[arg(value_name = "TEMPLATE_FILE")]
	pub template_file: PathBuf,

	/// File to write the rendered output to.
	#[arg(value_name = "OUTPUT_FILE")]
	pub output_file: PathBuf,

	#[command(flatten)]
	pub common: CommonArgs,
}

impl GenerateFromDocumentCli {
	pub fn run(&self) -> SrcgenResult<()> {
		let compiler = self.common.compiler()?;
		let binder = Binder::structured_from_path(&self.document_file)?;
		let sink = OutputSink::File(self.output_file.clone());
		generate(&compiler, &self.template_file, &binder, &sink)
	}
}

/// Install logging and diagnostics, run `task`, and exit non-zero with a
/// rendered report if it fails.
pub fn run_main(common: &CommonArgs, task: impl FnOnce() -> SrcgenResult<()>) {
	let use_color = common.use_color();
	init_tracing(common.verbose, use_color);

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	if let Err(e) = task() {
		let report: miette::Report = e.into();
		eprintln!("{report:?}");
		process::exit(FAILURE_EXIT_CODE);
	}
}

/// Send logs to stderr so generated code on stdout stays clean.
fn init_tracing(verbose: u8, use_color: bool) {
	let level = match verbose {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	};
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_target(false)
		.with_ansi(use_color)
		.with_writer(std::io::stderr)
		.try_init()
		.ok();
}

#[cfg(test)]
mod __tests;

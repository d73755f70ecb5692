//! `srcgen_core` is the engine behind the `generate-from-args` and
//! `generate-from-document` build tools. It compiles a template whose
//! directives are hidden inside C-family comments, binds a set of parameters
//! into the template's variables and writes the rendered source file.
//!
//! ## Processing Pipeline
//!
//! ```text
//! positional args / YAML or TOML document
//!   -> Binder (builds the variable namespace)
//!   -> TemplateCompiler (reads the template, applies the delimiter profile)
//!   -> render (runs the template against the namespace)
//!   -> OutputSink (stdout or a file)
//! ```
//!
//! ## Template Syntax
//!
//! Templates are [`minijinja`](https://docs.rs/minijinja) templates with the
//! C-family [`DelimiterProfile`]:
//!
//! ```text
//! //## Only emitted for debug builds.
//! //# if args[0] == "debug"
//! #define SRCGEN_DEBUG 1
//! //# endif
//! const char* kName = "${ args[1] }";
//! ```
//!
//! Variables are strict: referencing a name the namespace does not define is
//! an error, never an empty string.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use srcgen_core::Binder;
//! use srcgen_core::DelimiterProfile;
//! use srcgen_core::OutputSink;
//! use srcgen_core::TemplateCompiler;
//! use srcgen_core::generate;
//!
//! let compiler = TemplateCompiler::new(DelimiterProfile::c_family()).unwrap();
//! let binder = Binder::positional(["debug", "widget"]);
//! let sink = OutputSink::File("widget.h".into());
//! generate(&compiler, Path::new("widget.tpl.h"), &binder, &sink).unwrap();
//! ```

pub use binder::*;
pub use compiler::*;
pub use config::*;
pub use delimiters::*;
pub use error::*;
pub use generate::*;
pub use renderer::*;
pub use sink::*;

mod binder;
mod compiler;
pub mod config;
pub mod delimiters;
#[allow(unused_assignments)]
mod error;
mod generate;
mod renderer;
mod sink;

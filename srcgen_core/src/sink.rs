use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use crate::SrcgenError;
use crate::SrcgenResult;

/// Where rendered output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSink {
	Stdout,
	/// A file opened with truncate-create semantics.
	File(PathBuf),
}

impl OutputSink {
	/// `None` means standard output.
	pub fn from_option(path: Option<PathBuf>) -> Self {
		path.map_or(Self::Stdout, Self::File)
	}

	/// Write `text` to the destination.
	///
	/// The file handle lives only for the duration of this call and is closed
	/// on every return path. A failed write is reported but the partially
	/// written file is left in place.
	pub fn write(&self, text: &str) -> SrcgenResult<()> {
		match self {
			Self::Stdout => {
				let stdout = std::io::stdout();
				let mut handle = stdout.lock();
				write_all(&mut handle, text).map_err(|source| {
					SrcgenError::Write {
						path: PathBuf::from("<stdout>"),
						source,
					}
				})
			}
			Self::File(path) => write_file(path, text),
		}
	}
}

fn write_file(path: &Path, text: &str) -> SrcgenResult<()> {
	let to_error = |source| {
		SrcgenError::Write {
			path: path.to_path_buf(),
			source,
		}
	};

	let file = File::create(path).map_err(to_error)?;
	let mut writer = BufWriter::new(file);
	write_all(&mut writer, text).map_err(to_error)?;
	tracing::debug!(path = %path.display(), bytes = text.len(), "wrote output");

	Ok(())
}

fn write_all(writer: &mut impl Write, text: &str) -> std::io::Result<()> {
	writer.write_all(text.as_bytes())?;
	writer.flush()
}

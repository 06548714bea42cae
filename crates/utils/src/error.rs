use std::{fmt, io, path::Path};

use thiserror::Error;
use tracing::error;

/// Log the error of a finished operation, if any, under the given context
pub fn report_error<T>(context: &str, res: &Result<T, impl fmt::Display>) {
	if let Err(e) = res {
		error!(%context, "{e:#}");
	}
}

/// File I/O error that remembers which path caused it
#[derive(Error, Debug)]
pub struct FileIOError {
	pub path: Box<Path>,
	#[source]
	pub source: io::Error,
	pub maybe_context: Option<&'static str>,
}

impl fmt::Display for FileIOError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "file I/O error")?;

		if let Some(context) = self.maybe_context {
			write!(f, " ({context})")?;
		}

		write!(f, ": {}; path: '{}'", self.source, self.path.display())
	}
}

impl<P: AsRef<Path>> From<(P, io::Error)> for FileIOError {
	fn from((path, source): (P, io::Error)) -> Self {
		Self {
			path: path.as_ref().into(),
			source,
			maybe_context: None,
		}
	}
}

impl<P: AsRef<Path>> From<(P, io::Error, &'static str)> for FileIOError {
	fn from((path, source, context): (P, io::Error, &'static str)) -> Self {
		Self {
			path: path.as_ref().into(),
			source,
			maybe_context: Some(context),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	use tracing_test::traced_test;

	#[test]
	fn display_includes_path_and_context() {
		let tester = |err: FileIOError, expected: &str| {
			assert_eq!(err.to_string(), expected);
		};

		tester(
			FileIOError::from((
				"/etc/mappings.json",
				io::Error::new(io::ErrorKind::NotFound, "missing"),
			)),
			"file I/O error: missing; path: '/etc/mappings.json'",
		);

		tester(
			FileIOError::from((
				"/etc/mappings.json",
				io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
				"reading mappings",
			)),
			"file I/O error (reading mappings): denied; path: '/etc/mappings.json'",
		);
	}

	#[test]
	#[traced_test]
	fn report_error_logs_only_failures() {
		report_error("all good", &Ok::<(), String>(()));
		assert!(!logs_contain("all good"));

		report_error("loading", &Err::<(), _>("boom".to_string()));
		assert!(logs_contain("boom"));
	}
}

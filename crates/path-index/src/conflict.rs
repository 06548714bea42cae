use std::path::{Path, PathBuf};

use thiserror::Error;

/// Why a path was refused by the index. Every path reported here is already normalized.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathConflict {
	#[error("path has no components after normalization: <path='{}'>", .path.display())]
	Empty { path: PathBuf },
	#[error("path is already registered: <path='{}'>", .path.display())]
	Duplicate { path: PathBuf },
	#[error(
		"path is nested under a registered path: <path='{}', registered='{}'>",
		.path.display(),
		.ancestor.display()
	)]
	Descendant { path: PathBuf, ancestor: PathBuf },
	#[error(
		"path contains a registered path: <path='{}', registered='{}'>",
		.path.display(),
		.descendant.display()
	)]
	Ancestor { path: PathBuf, descendant: PathBuf },
}

impl PathConflict {
	/// The refused path
	#[must_use]
	pub fn path(&self) -> &Path {
		match self {
			Self::Empty { path }
			| Self::Duplicate { path }
			| Self::Descendant { path, .. }
			| Self::Ancestor { path, .. } => path,
		}
	}

	/// The registered path the refused one collides with, if there is one
	#[must_use]
	pub fn registered(&self) -> Option<&Path> {
		match self {
			Self::Empty { .. } => None,
			Self::Duplicate { path } => Some(path),
			Self::Descendant { ancestor, .. } => Some(ancestor),
			Self::Ancestor { descendant, .. } => Some(descendant),
		}
	}
}

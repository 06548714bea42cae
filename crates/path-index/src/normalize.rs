//! Lexical path normalization.
//!
//! Nothing here touches the filesystem: symlinks are not resolved and paths that don't exist
//! normalize just fine.

use std::{
	ffi::OsString,
	path::{Component, Path, PathBuf},
};

/// Path-like values that can be rewritten without `.` and `..` segments and split into
/// the components the index is keyed on.
pub trait NormalizePath {
	/// Removes `.` segments, resolves `..` against the preceding normal segment and drops
	/// trailing separators.
	///
	/// A `..` right after the root can't climb any higher and is dropped, while leading `..`
	/// segments of a relative path are kept as they are.
	#[must_use]
	fn lexically_normalized(&self) -> PathBuf;

	/// The components of the normalized path, in order. The root of an absolute path is
	/// its first component.
	#[must_use]
	fn normalized_components(&self) -> Vec<OsString> {
		self.lexically_normalized()
			.components()
			.map(|component| component.as_os_str().to_os_string())
			.collect()
	}
}

impl<P: AsRef<Path> + ?Sized> NormalizePath for P {
	fn lexically_normalized(&self) -> PathBuf {
		let mut components = Vec::new();

		for component in self.as_ref().components() {
			match component {
				Component::CurDir => {}
				Component::ParentDir => match components.last() {
					Some(Component::Normal(_)) => {
						components.pop();
					}
					Some(Component::RootDir) => {}
					Some(Component::Prefix(_) | Component::ParentDir | Component::CurDir) | None => {
						components.push(component);
					}
				},
				Component::Prefix(_) | Component::RootDir | Component::Normal(_) => {
					components.push(component);
				}
			}
		}

		components.into_iter().collect()
	}
}

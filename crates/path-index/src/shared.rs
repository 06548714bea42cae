use std::{
	path::{Path, PathBuf},
	sync::Arc,
};

use parking_lot::Mutex;

use super::{conflict::PathConflict, index::PathConflictIndex};

/// Cloneable handle to one [`PathConflictIndex`] shared between threads.
///
/// A single lock guards the whole index and is held for the entire traversal of every call,
/// as a traversal interleaved with another insertion could observe half built paths.
#[derive(Debug, Default, Clone)]
pub struct SharedPathConflictIndex {
	inner: Arc<Mutex<PathConflictIndex>>,
}

impl SharedPathConflictIndex {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert_or_detect_conflict(&self, path: impl AsRef<Path>) -> bool {
		self.inner.lock().insert_or_detect_conflict(path)
	}

	pub fn try_insert(&self, path: impl AsRef<Path>) -> Result<(), PathConflict> {
		self.inner.lock().try_insert(path)
	}

	pub fn check(&self, path: impl AsRef<Path>) -> Result<(), PathConflict> {
		self.inner.lock().check(path)
	}

	#[must_use]
	pub fn contains(&self, path: impl AsRef<Path>) -> bool {
		self.inner.lock().contains(path)
	}

	#[must_use]
	pub fn paths(&self) -> Vec<PathBuf> {
		self.inner.lock().paths()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.inner.lock().len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.inner.lock().is_empty()
	}
}

impl From<PathConflictIndex> for SharedPathConflictIndex {
	fn from(index: PathConflictIndex) -> Self {
		Self {
			inner: Arc::new(Mutex::new(index)),
		}
	}
}

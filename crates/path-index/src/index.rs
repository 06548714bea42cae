use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use super::{conflict::PathConflict, node::TrieNode, normalize::NormalizePath};

/// Set of accepted paths where no path is equal to, nested under or containing another one.
///
/// Paths only ever get added. Every insertion is checked against everything accepted before it,
/// so the order of insertions decides which of two conflicting paths wins.
#[derive(Debug, Default, Clone)]
pub struct PathConflictIndex {
	root: TrieNode,
	len: usize,
}

impl PathConflictIndex {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers `path` unless it conflicts with an already registered path.
	///
	/// Returns `true` if a conflict was detected, in which case the path was not registered,
	/// and `false` if the path was accepted. Paths that normalize to nothing are never accepted.
	pub fn insert_or_detect_conflict(&mut self, path: impl AsRef<Path>) -> bool {
		match self.try_insert(path) {
			Ok(()) => false,
			Err(conflict) => {
				debug!(%conflict, "Path refused by the conflict index;");
				true
			}
		}
	}

	/// Same as [`PathConflictIndex::insert_or_detect_conflict`], telling which registered path
	/// got in the way.
	pub fn try_insert(&mut self, path: impl AsRef<Path>) -> Result<(), PathConflict> {
		let path = path.as_ref().lexically_normalized();

		if path.components().next().is_none() {
			return Err(PathConflict::Empty { path });
		}

		let mut current = &mut self.root;
		let mut depth = 0;

		for component in path.components() {
			let name = component.as_os_str();
			if name.is_empty() {
				break;
			}

			if current.is_terminal() {
				return Err(PathConflict::Descendant {
					ancestor: path.components().take(depth).collect(),
					path: path.clone(),
				});
			}

			current = current.child_or_insert(name);
			depth += 1;
		}

		if current.is_terminal() {
			return Err(PathConflict::Duplicate { path });
		}

		if current.has_children() {
			return Err(PathConflict::Ancestor {
				descendant: path.join(current.first_path_below()),
				path,
			});
		}

		current.mark_terminal();
		self.len += 1;

		trace!(path = %path.display(), registered = self.len, "Path registered;");

		Ok(())
	}

	/// What [`PathConflictIndex::try_insert`] would answer for `path`, without registering it.
	pub fn check(&self, path: impl AsRef<Path>) -> Result<(), PathConflict> {
		let path = path.as_ref().lexically_normalized();

		if path.components().next().is_none() {
			return Err(PathConflict::Empty { path });
		}

		let mut current = &self.root;

		for (depth, component) in path.components().enumerate() {
			if current.is_terminal() {
				return Err(PathConflict::Descendant {
					ancestor: path.components().take(depth).collect(),
					path: path.clone(),
				});
			}

			match current.child(component.as_os_str()) {
				Some(child) => current = child,
				// Nothing registered goes through here, so the rest of the path would be new
				None => return Ok(()),
			}
		}

		if current.is_terminal() {
			return Err(PathConflict::Duplicate { path });
		}

		if current.has_children() {
			return Err(PathConflict::Ancestor {
				descendant: path.join(current.first_path_below()),
				path,
			});
		}

		Ok(())
	}

	/// Whether `path` itself was registered
	#[must_use]
	pub fn contains(&self, path: impl AsRef<Path>) -> bool {
		let path = path.as_ref().lexically_normalized();

		if path.components().next().is_none() {
			return false;
		}

		path.components()
			.try_fold(&self.root, |node, component| {
				node.child(component.as_os_str())
			})
			.is_some_and(TrieNode::is_terminal)
	}

	/// Read-only view of the trie, starting at the node above every first component
	#[must_use]
	pub const fn root(&self) -> &TrieNode {
		&self.root
	}

	/// Every registered path, in component order
	#[must_use]
	pub fn paths(&self) -> Vec<PathBuf> {
		let mut paths = Vec::with_capacity(self.len);
		self.root.collect_terminals(Path::new(""), &mut paths);
		paths
	}

	/// Number of registered paths
	#[must_use]
	pub const fn len(&self) -> usize {
		self.len
	}

	#[must_use]
	pub const fn is_empty(&self) -> bool {
		self.len == 0
	}
}

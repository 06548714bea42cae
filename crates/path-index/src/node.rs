use std::{
	collections::BTreeMap,
	ffi::{OsStr, OsString},
	path::{Path, PathBuf},
};

/// A single path component in the index, owning every node below it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TrieNode {
	children: BTreeMap<OsString, TrieNode>,
	is_terminal: bool,
}

impl TrieNode {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Whether some registered path ends exactly at this node
	#[must_use]
	pub const fn is_terminal(&self) -> bool {
		self.is_terminal
	}

	#[must_use]
	pub fn has_children(&self) -> bool {
		!self.children.is_empty()
	}

	#[must_use]
	pub fn child(&self, name: &OsStr) -> Option<&Self> {
		self.children.get(name)
	}

	/// Fetches the child named `name`, creating an empty one only if there is none yet.
	/// An existing child is never replaced or reset.
	pub(crate) fn child_or_insert(&mut self, name: &OsStr) -> &mut Self {
		self.children
			.entry(name.to_os_string())
			.or_insert_with(Self::new)
	}

	pub(crate) fn mark_terminal(&mut self) {
		self.is_terminal = true;
	}

	/// Path, relative to this node, of the first registered path below it in component order.
	/// Empty if this node has no children.
	pub(crate) fn first_path_below(&self) -> PathBuf {
		let mut path = PathBuf::new();
		let mut node = self;

		while let Some((name, child)) = node.children.iter().next() {
			path.push(name);
			if child.is_terminal {
				break;
			}
			node = child;
		}

		path
	}

	/// Appends every registered path at or below this node, given the path of this node.
	pub(crate) fn collect_terminals(&self, path: &Path, out: &mut Vec<PathBuf>) {
		if self.is_terminal {
			out.push(path.to_path_buf());
		}

		for (name, child) in &self.children {
			child.collect_terminals(&path.join(name), out);
		}
	}
}

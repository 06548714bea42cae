use pc_path_index::{PathConflict, PathConflictIndex};

use std::path::PathBuf;

use tracing_test::traced_test;

fn insert_all(paths: &[&str]) -> Vec<bool> {
	let mut index = PathConflictIndex::new();
	paths
		.iter()
		.map(|path| index.insert_or_detect_conflict(path))
		.collect()
}

#[test]
fn first_insertion_never_conflicts() {
	for path in ["/", "/a", "/a/b/c", "relative/path", "../up", "/a/./b/../c/"] {
		assert_eq!(insert_all(&[path]), vec![false], "{path}");
	}
}

#[test]
fn exact_duplicate_conflicts() {
	for path in ["/", "/a", "/a/b/c", "relative/path", "../up"] {
		assert_eq!(insert_all(&[path, path]), vec![false, true], "{path}");
	}
}

#[test]
fn descendant_conflicts() {
	assert_eq!(insert_all(&["/a/b", "/a/b/c"]), vec![false, true]);
}

#[test]
fn ancestor_conflicts() {
	assert_eq!(insert_all(&["/a/b", "/a"]), vec![false, true]);
}

#[test]
fn siblings_do_not_conflict() {
	assert_eq!(insert_all(&["/a/b", "/a/c"]), vec![false, false]);
}

#[test]
fn normalized_equivalent_conflicts() {
	assert_eq!(insert_all(&["/a/b", "/a/./b/../b"]), vec![false, true]);
}

#[test]
fn trailing_separator_is_the_same_path() {
	assert_eq!(insert_all(&["/a/b", "/a/b/"]), vec![false, true]);
}

#[test]
fn unrelated_subtrees_in_any_order() {
	assert_eq!(insert_all(&["/x/y", "/a/b"]), vec![false, false]);
	assert_eq!(insert_all(&["/a/b", "/x/y"]), vec![false, false]);
}

#[test]
fn conflicting_insert_leaves_registered_paths_untouched() {
	let mut index = PathConflictIndex::new();

	for path in ["/a/b", "/a/c/d", "/x"] {
		assert!(!index.insert_or_detect_conflict(path));
	}

	for path in ["/a/b", "/a/b/c/d", "/a", "/a/c", "/x/y/z", "/", "", "/a/c/d/"] {
		let before = index.paths();

		assert!(index.insert_or_detect_conflict(path), "{path} should conflict");
		assert_eq!(index.paths(), before, "{path} changed the registered paths");
		assert_eq!(index.len(), 3);
	}
}

#[test]
fn end_to_end_scenario() {
	assert_eq!(
		insert_all(&["/a/b", "/a/b/c", "/a/b", "/a", "/x", "/x/y"]),
		vec![false, true, true, true, false, true]
	);
}

#[test]
fn relative_and_absolute_paths_are_distinct() {
	assert_eq!(insert_all(&["/a/b", "a/b", "a"]), vec![false, false, true]);
}

#[test]
fn parent_dir_cannot_escape_the_root() {
	assert_eq!(insert_all(&["/etc", "/../etc"]), vec![false, true]);
	assert_eq!(insert_all(&["../etc", "/etc"]), vec![false, false]);
}

#[test]
fn registered_paths_after_a_mixed_run() {
	let mut index = PathConflictIndex::new();

	let verdicts = ["/srv/www", "/srv/www/html", "/srv/db/", "/home/./user", "/srv"]
		.map(|path| index.insert_or_detect_conflict(path));

	assert_eq!(verdicts, [false, true, false, false, true]);

	assert_eq!(
		index.paths(),
		vec![
			PathBuf::from("/home/user"),
			PathBuf::from("/srv/db"),
			PathBuf::from("/srv/www"),
		]
	);
}

#[test]
#[traced_test]
fn refusals_are_logged_with_their_reason() {
	let mut index = PathConflictIndex::new();

	assert!(!index.insert_or_detect_conflict("/var/lib"));
	assert!(index.insert_or_detect_conflict("/var/lib/app"));

	assert!(logs_contain("Path refused by the conflict index"));
	assert!(logs_contain("nested under a registered path"));
}

#[test]
fn typed_reason_matches_boolean_verdict() {
	let mut typed = PathConflictIndex::new();
	let mut plain = PathConflictIndex::new();

	for path in ["/a/b", "/a", "/a/b/c", "/a/b", "/c", "", "/c/"] {
		let reason = typed.try_insert(path);
		assert_eq!(reason.is_err(), plain.insert_or_detect_conflict(path), "{path}");

		if let Err(PathConflict::Descendant { ancestor, .. }) = reason {
			assert!(typed.contains(ancestor));
		}
	}
}

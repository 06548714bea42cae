//!
//! # Path Conflict Index
//!
//! An append-only prefix tree over path components that accepts a path only if no previously
//! accepted path is equal to it, nested under it, or nested inside it.
//!
//! Paths are normalized lexically before use, so `/a/./b/../b/` and `/a/b` are the same path.
//!
//! ## Basic example
//!
//! ```
//! use pc_path_index::PathConflictIndex;
//!
//! let mut index = PathConflictIndex::new();
//!
//! assert!(!index.insert_or_detect_conflict("/a/b"));
//! assert!(index.insert_or_detect_conflict("/a/b/c"));
//! assert!(index.insert_or_detect_conflict("/a"));
//! assert!(!index.insert_or_detect_conflict("/a/c"));
//! ```

#![warn(
	clippy::all,
	clippy::pedantic,
	clippy::correctness,
	clippy::perf,
	clippy::style,
	clippy::suspicious,
	clippy::complexity,
	clippy::nursery,
	clippy::unwrap_used,
	unused_qualifications,
	rust_2018_idioms,
	trivial_casts,
	trivial_numeric_casts,
	unused_allocation,
	clippy::unnecessary_cast,
	clippy::cast_lossless,
	clippy::cast_possible_truncation,
	clippy::cast_possible_wrap,
	clippy::cast_precision_loss,
	clippy::cast_sign_loss,
	clippy::dbg_macro,
	clippy::deprecated_cfg_attr,
	clippy::separated_literal_suffix,
	deprecated
)]
#![forbid(deprecated_in_future)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

mod conflict;
mod index;
mod node;
pub mod normalize;
mod shared;

pub use conflict::PathConflict;
pub use index::PathConflictIndex;
pub use node::TrieNode;
pub use normalize::NormalizePath;
pub use shared::SharedPathConflictIndex;

//!
//! # Mappings
//!
//! Source/destination path pairs read from a JSON configuration file, and the sequential
//! validation pass that refuses any mapping whose paths overlap with an earlier one.
//!
//! ```
//! use pc_mappings::{MappingConfig, PathMapping};
//!
//! let config = MappingConfig::new(vec![
//!     PathMapping::new("/data/photos", "/backup/photos"),
//!     PathMapping::new("/data/photos/raw", "/backup/raw"),
//! ]);
//!
//! let report = pc_mappings::validate_config(&config);
//!
//! assert_eq!(report.accepted.len(), 1);
//! assert_eq!(report.conflicts[0].position, 1);
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

pub mod config;
mod error;
pub mod validate;

pub use config::{MappingConfig, PathMapping};
pub use error::Error;
pub use validate::{
	validate_config, validate_file, MappingConflict, MappingSide, MappingValidator,
	ValidationOptions, ValidationReport,
};

//! Mappings configuration file

use pc_utils::error::FileIOError;

use std::{
	fs,
	path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{validate::ValidationOptions, Error};

/// A single source/destination pair, as written in the configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathMapping {
	pub source: PathBuf,
	pub destination: PathBuf,
}

impl PathMapping {
	pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
		Self {
			source: source.into(),
			destination: destination.into(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingConfig {
	/// Config schema version
	pub version: u32,

	/// Directory that relative sources and destinations are anchored on
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub base_dir: Option<PathBuf>,

	/// Which checks the validation pass runs
	#[serde(default)]
	pub validation: ValidationOptions,

	/// Mappings in the order they must be validated
	#[serde(default)]
	pub mappings: Vec<PathMapping>,
}

impl MappingConfig {
	#[must_use]
	pub const fn target_version() -> u32 {
		1
	}

	#[must_use]
	pub fn new(mappings: Vec<PathMapping>) -> Self {
		Self {
			version: Self::target_version(),
			base_dir: None,
			validation: ValidationOptions::default(),
			mappings,
		}
	}

	#[must_use]
	pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
		self.base_dir = Some(base_dir.into());
		self
	}

	#[must_use]
	pub const fn with_validation(mut self, validation: ValidationOptions) -> Self {
		self.validation = validation;
		self
	}

	/// Load a configuration file, refusing versions newer than the one we understand
	pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Error> {
		let path = path.as_ref();

		info!(path = %path.display(), "Loading mappings config;");

		let bytes =
			fs::read(path).map_err(|e| FileIOError::from((path, e, "reading mappings config")))?;

		let config = serde_json::from_slice::<Self>(&bytes).map_err(|source| Error::Deserialize {
			path: path.into(),
			source,
		})?;

		if config.version > Self::target_version() {
			return Err(Error::UnsupportedVersion {
				found: config.version,
				supported: Self::target_version(),
			});
		}

		debug!(
			version = config.version,
			mappings = config.mappings.len(),
			"Mappings config loaded;"
		);

		Ok(config)
	}

	/// Save the configuration as pretty JSON, creating missing parent directories
	pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), Error> {
		let path = path.as_ref();

		if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
			fs::create_dir_all(parent)
				.map_err(|e| FileIOError::from((parent, e, "creating mappings config directory")))?;
		}

		let json = serde_json::to_string_pretty(self)?;
		fs::write(path, json)
			.map_err(|e| FileIOError::from((path, e, "writing mappings config")))?;

		info!(path = %path.display(), "Saved mappings config;");

		Ok(())
	}

	/// Mappings with relative paths joined onto `base_dir`, if there is one
	#[must_use]
	pub fn resolved_mappings(&self) -> Vec<PathMapping> {
		let Some(base_dir) = &self.base_dir else {
			return self.mappings.clone();
		};

		let resolve = |path: &Path| {
			if path.is_relative() {
				base_dir.join(path)
			} else {
				path.to_path_buf()
			}
		};

		self.mappings
			.iter()
			.map(|PathMapping { source, destination }| PathMapping {
				source: resolve(source),
				destination: resolve(destination),
			})
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_fields_take_defaults() {
		let config = serde_json::from_str::<MappingConfig>(r#"{ "version": 1 }"#).unwrap();

		assert_eq!(config, MappingConfig::new(vec![]));
	}

	#[test]
	fn partial_validation_options() {
		let config = serde_json::from_str::<MappingConfig>(
			r#"{
				"version": 1,
				"validation": { "fail_fast": false },
				"mappings": [{ "source": "/a", "destination": "/b" }]
			}"#,
		)
		.unwrap();

		assert_eq!(
			config.validation,
			ValidationOptions {
				fail_fast: false,
				..Default::default()
			}
		);
		assert_eq!(config.mappings, vec![PathMapping::new("/a", "/b")]);
	}

	#[test]
	fn resolved_mappings() {
		let tester = |base_dir: Option<&str>, mapping: PathMapping, expected: PathMapping, msg| {
			let mut config = MappingConfig::new(vec![mapping]);
			config.base_dir = base_dir.map(PathBuf::from);

			assert_eq!(config.resolved_mappings(), vec![expected], "{msg}");
		};

		tester(
			None,
			PathMapping::new("src", "dst"),
			PathMapping::new("src", "dst"),
			"without a base dir nothing changes",
		);

		tester(
			Some("/work"),
			PathMapping::new("src", "out/dst"),
			PathMapping::new("/work/src", "/work/out/dst"),
			"both sides relative",
		);

		tester(
			Some("/work"),
			PathMapping::new("/abs/src", "dst"),
			PathMapping::new("/abs/src", "/work/dst"),
			"absolute paths are left alone",
		);
	}
}

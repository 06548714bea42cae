//! Sequential validation of mappings against path conflict indexes.

use pc_path_index::{PathConflict, PathConflictIndex};
use pc_utils::report_error;

use std::{fmt, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, instrument, warn};

use super::{
	config::{MappingConfig, PathMapping},
	Error,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationOptions {
	/// No two sources may overlap
	pub check_sources: bool,
	/// No two destinations may overlap
	pub check_destinations: bool,
	/// A destination may not overlap with its own source
	pub check_self_overlap: bool,
	/// Stop at the first conflicting mapping
	pub fail_fast: bool,
}

impl Default for ValidationOptions {
	fn default() -> Self {
		Self {
			check_sources: true,
			check_destinations: true,
			check_self_overlap: true,
			fail_fast: true,
		}
	}
}

/// Which part of a mapping was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MappingSide {
	Source,
	Destination,
	SelfOverlap,
}

impl fmt::Display for MappingSide {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Source => write!(f, "source"),
			Self::Destination => write!(f, "destination"),
			Self::SelfOverlap => write!(f, "source and destination"),
		}
	}
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("mapping #{position} refused on its {side}: {reason}")]
pub struct MappingConflict {
	/// Position of the mapping in the configuration, starting at 0
	pub position: usize,
	pub side: MappingSide,
	#[source]
	pub reason: PathConflict,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationReport {
	pub accepted: Vec<PathMapping>,
	pub conflicts: Vec<MappingConflict>,
}

impl ValidationReport {
	#[must_use]
	pub fn is_clean(&self) -> bool {
		self.conflicts.is_empty()
	}

	/// The accepted mappings, or the first conflict found
	pub fn into_result(self) -> Result<Vec<PathMapping>, Error> {
		match self.conflicts.into_iter().next() {
			Some(conflict) => Err(conflict.into()),
			None => Ok(self.accepted),
		}
	}
}

/// Drives one validation pass. Sources and destinations each get their own index, so a
/// path may show up once as a source and once as a destination.
#[derive(Debug, Default)]
pub struct MappingValidator {
	options: ValidationOptions,
	sources: PathConflictIndex,
	destinations: PathConflictIndex,
}

impl MappingValidator {
	#[must_use]
	pub fn new(options: ValidationOptions) -> Self {
		Self {
			options,
			..Default::default()
		}
	}

	/// Validates one mapping against every mapping accepted so far, registering it only if
	/// all enabled checks pass.
	pub fn validate_mapping(
		&mut self,
		position: usize,
		mapping: &PathMapping,
	) -> Result<(), MappingConflict> {
		let refuse = |side, reason| MappingConflict {
			position,
			side,
			reason,
		};

		if self.options.check_self_overlap {
			let mut pair = PathConflictIndex::new();

			if pair.try_insert(&mapping.source).is_ok() {
				match pair.try_insert(&mapping.destination) {
					// An empty destination is reported by the destination check
					Ok(()) | Err(PathConflict::Empty { .. }) => {}
					Err(reason) => return Err(refuse(MappingSide::SelfOverlap, reason)),
				}
			}
		}

		if self.options.check_sources {
			self.sources
				.check(&mapping.source)
				.map_err(|reason| refuse(MappingSide::Source, reason))?;
		}

		if self.options.check_destinations {
			self.destinations
				.check(&mapping.destination)
				.map_err(|reason| refuse(MappingSide::Destination, reason))?;
		}

		if self.options.check_sources {
			self.sources
				.try_insert(&mapping.source)
				.map_err(|reason| refuse(MappingSide::Source, reason))?;
		}

		if self.options.check_destinations {
			self.destinations
				.try_insert(&mapping.destination)
				.map_err(|reason| refuse(MappingSide::Destination, reason))?;
		}

		Ok(())
	}

	/// Validates mappings in order. Conflicting mappings are left out of the accepted list and
	/// never influence later ones.
	#[instrument(skip_all, fields(fail_fast = self.options.fail_fast))]
	pub fn validate(
		&mut self,
		mappings: impl IntoIterator<Item = PathMapping>,
	) -> ValidationReport {
		let mut report = ValidationReport::default();

		for (position, mapping) in mappings.into_iter().enumerate() {
			match self.validate_mapping(position, &mapping) {
				Ok(()) => report.accepted.push(mapping),
				Err(conflict) => {
					warn!(
						position,
						source = %mapping.source.display(),
						destination = %mapping.destination.display(),
						%conflict,
						"Mapping refused;"
					);

					report.conflicts.push(conflict);

					if self.options.fail_fast {
						break;
					}
				}
			}
		}

		info!(
			accepted = report.accepted.len(),
			conflicts = report.conflicts.len(),
			"Mappings validation finished;"
		);

		report
	}
}

/// Runs a fresh validation pass over a configuration's resolved mappings, with the options
/// the configuration asks for.
pub fn validate_config(config: &MappingConfig) -> ValidationReport {
	info!(mappings = config.mappings.len(), "Validating mappings config;");

	MappingValidator::new(config.validation).validate(config.resolved_mappings())
}

/// Loads a configuration file and validates it in one go, logging the failure if there is one.
pub fn validate_file(path: impl AsRef<Path>) -> Result<Vec<PathMapping>, Error> {
	let res = MappingConfig::load_from(path)
		.and_then(|config| validate_config(&config).into_result());

	report_error("mappings validation", &res);

	res
}

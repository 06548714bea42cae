use pc_utils::error::FileIOError;

use std::path::Path;

use thiserror::Error;

use super::validate::MappingConflict;

#[derive(Error, Debug)]
pub enum Error {
	// User errors
	#[error("invalid mappings config: <path='{}'>: {source}", .path.display())]
	Deserialize {
		path: Box<Path>,
		#[source]
		source: serde_json::Error,
	},
	#[error("unsupported mappings config version: <found='{found}', supported='{supported}'>")]
	UnsupportedVersion { found: u32, supported: u32 },
	#[error(transparent)]
	Conflict(#[from] MappingConflict),

	// Internal errors
	#[error("mappings config serialization error: {0}")]
	Serialize(#[from] serde_json::Error),
	#[error(transparent)]
	FileIO(#[from] FileIOError),
}

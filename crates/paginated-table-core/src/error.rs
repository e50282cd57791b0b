//! Error types for pagination state and table construction

use thiserror::Error;

/// Result type for paginated table operations
pub type Result<T> = std::result::Result<T, TableError>;

/// Errors raised while building pagination state, describing a table, or
/// rendering it
///
/// Every error is raised synchronously by the call that detected it and is
/// never retried internally. A host integration usually maps
/// [`TableError::InvalidArgument`] coming from request parameters to a
/// 400-class response.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum TableError {
	/// A value was out of range or could not be parsed
	#[error("Invalid argument: {0}")]
	InvalidArgument(String),

	/// A table description was used in a way its current row mode forbids
	#[error("Invalid table state: {0}")]
	InvalidTableState(String),

	/// A link renderer produced a link before being prepared
	#[error("Link renderer used before prepare")]
	NotPrepared,

	/// The collection failed to order or slice its data
	#[error("Collection error: {0}")]
	Collection(String),

	/// A settings document could not be loaded
	#[error("Invalid settings: {0}")]
	Settings(String),

	/// A query string could not be decoded
	#[error("Malformed query string: {0}")]
	Query(#[from] serde_urlencoded::de::Error),
}

impl TableError {
	/// Returns true for [`TableError::InvalidArgument`]
	pub fn is_invalid_argument(&self) -> bool {
		matches!(self, Self::InvalidArgument(_))
	}

	/// Returns true for [`TableError::InvalidTableState`]
	pub fn is_invalid_table_state(&self) -> bool {
		matches!(self, Self::InvalidTableState(_))
	}
}

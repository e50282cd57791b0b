//! Defaults applied when a page is built without explicit values

use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};

/// Default page size when `per_page` is absent
pub const DEFAULT_ROWS: usize = 20;

/// Default sort column when `sort_column` is absent
pub const DEFAULT_SORT_COLUMN: &str = "id";

/// Page construction defaults
///
/// Missing fields fall back to their defaults when deserialized, so a
/// settings document only needs to name what it changes.
///
/// # Example
///
/// ```rust
/// use paginated_table_core::PageSettings;
///
/// let settings = PageSettings::new().default_rows(50).default_sort_column("name");
/// assert_eq!(settings.default_rows, 50);
/// assert!(settings.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSettings {
	/// Number of rows per page
	pub default_rows: usize,
	/// Column used for ordering
	pub default_sort_column: String,
}

impl Default for PageSettings {
	fn default() -> Self {
		Self {
			default_rows: DEFAULT_ROWS,
			default_sort_column: DEFAULT_SORT_COLUMN.to_string(),
		}
	}
}

impl PageSettings {
	/// Creates settings with the built-in defaults
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the default page size
	pub fn default_rows(mut self, rows: usize) -> Self {
		self.default_rows = rows;
		self
	}

	/// Sets the default sort column
	pub fn default_sort_column(mut self, column: impl Into<String>) -> Self {
		self.default_sort_column = column.into();
		self
	}

	/// Checks that the defaults would build a valid page
	pub fn validate(&self) -> Result<()> {
		if self.default_rows == 0 {
			return Err(TableError::Settings(
				"default_rows must be at least 1".to_string(),
			));
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_settings() {
		let settings = PageSettings::default();
		assert_eq!(settings.default_rows, 20);
		assert_eq!(settings.default_sort_column, "id");
	}

	#[test]
	fn test_zero_default_rows_is_rejected() {
		let result = PageSettings::new().default_rows(0).validate();
		assert!(matches!(result, Err(TableError::Settings(_))));
	}
}

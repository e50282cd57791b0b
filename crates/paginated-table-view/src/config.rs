//! Table settings loaded from TOML
//!
//! ```toml
//! [page]
//! default_rows = 50
//! default_sort_column = "name"
//!
//! [chrome]
//! inner_window = 2
//! previous_label = "Prev"
//! ```

use paginated_table_core::{PageSettings, Result, TableError};
use serde::{Deserialize, Serialize};

/// Pages shown on each side of the current page
pub const DEFAULT_INNER_WINDOW: usize = 4;

/// Pages shown at each end of the range
pub const DEFAULT_OUTER_WINDOW: usize = 1;

/// Settings for the standard pagination chrome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeSettings {
	/// Pages shown on each side of the current page
	pub inner_window: usize,
	/// Pages shown at the start and end of the range
	pub outer_window: usize,
	/// Text of the previous page link
	pub previous_label: String,
	/// Text of the next page link
	pub next_label: String,
}

impl Default for ChromeSettings {
	fn default() -> Self {
		Self {
			inner_window: DEFAULT_INNER_WINDOW,
			outer_window: DEFAULT_OUTER_WINDOW,
			previous_label: "\u{2190} Previous".to_string(),
			next_label: "Next \u{2192}".to_string(),
		}
	}
}

/// Every setting a paginated table call reads
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSettings {
	/// Defaults for pagination parameters missing from the request
	pub page: PageSettings,
	/// Pagination chrome layout and labels
	pub chrome: ChromeSettings,
}

impl TableSettings {
	/// Parses and validates settings from a TOML document
	///
	/// Missing tables and keys fall back to their defaults.
	///
	/// # Examples
	///
	/// ```rust
	/// use paginated_table_view::config::TableSettings;
	///
	/// let settings = TableSettings::from_toml_str("[page]\ndefault_rows = 5\n").unwrap();
	/// assert_eq!(settings.page.default_rows, 5);
	/// assert_eq!(settings.page.default_sort_column, "id");
	/// assert_eq!(settings.chrome.inner_window, 4);
	/// ```
	pub fn from_toml_str(document: &str) -> Result<Self> {
		let settings: Self =
			toml::from_str(document).map_err(|e| TableError::Settings(e.to_string()))?;
		settings.validate()?;
		Ok(settings)
	}

	/// Checks every nested settings group
	pub fn validate(&self) -> Result<()> {
		self.page.validate()
	}
}

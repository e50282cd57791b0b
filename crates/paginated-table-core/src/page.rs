//! Pagination and sort state

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::data_page::OrderClause;
use crate::error::{Result, TableError};
use crate::settings::PageSettings;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
	/// Ascending order (`asc`)
	#[default]
	Asc,
	/// Descending order (`desc`)
	Desc,
}

impl SortDirection {
	/// Returns the opposite direction
	pub fn opposite(self) -> Self {
		match self {
			Self::Asc => Self::Desc,
			Self::Desc => Self::Asc,
		}
	}

	/// Returns the parameter form of this direction
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Asc => "asc",
			Self::Desc => "desc",
		}
	}
}

impl fmt::Display for SortDirection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for SortDirection {
	type Err = TableError;

	fn from_str(s: &str) -> Result<Self> {
		match s {
			"asc" => Ok(Self::Asc),
			"desc" => Ok(Self::Desc),
			other => Err(TableError::InvalidArgument(format!(
				"sort direction must be 'asc' or 'desc', got {other:?}"
			))),
		}
	}
}

/// Immutable pagination and sort state for one request
///
/// A `Page` is always valid: `number` and `rows` are at least 1 and the sort
/// direction is one of the two [`SortDirection`] values. Derived pages are
/// produced by [`Page::with_number`] and [`Page::with_sort_column`]; a page is
/// never mutated in place.
///
/// # Example
///
/// ```rust
/// use paginated_table_core::{Page, SortDirection};
///
/// let page = Page::new(3, 10, "name", SortDirection::Asc).unwrap();
///
/// let toggled = page.with_sort_column("name");
/// assert_eq!(toggled.number(), 1);
/// assert_eq!(toggled.sort_direction(), SortDirection::Desc);
///
/// let other = page.with_sort_column("email");
/// assert_eq!(other.sort_column(), "email");
/// assert_eq!(other.sort_direction(), SortDirection::Asc);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Page {
	number: usize,
	rows: usize,
	sort_column: String,
	sort_direction: SortDirection,
}

impl Page {
	/// Creates a page from explicit values
	///
	/// # Errors
	///
	/// Returns [`TableError::InvalidArgument`] when `number` or `rows` is zero.
	pub fn new(
		number: usize,
		rows: usize,
		sort_column: impl Into<String>,
		sort_direction: SortDirection,
	) -> Result<Self> {
		Ok(Self {
			number: positive("number", number)?,
			rows: positive("rows", rows)?,
			sort_column: sort_column.into(),
			sort_direction,
		})
	}

	/// Starts building a page whose omitted fields take their defaults
	pub fn builder() -> PageBuilder {
		PageBuilder::default()
	}

	/// Current page, 1-indexed
	pub fn number(&self) -> usize {
		self.number
	}

	/// Page size
	pub fn rows(&self) -> usize {
		self.rows
	}

	/// Column the data is ordered by
	pub fn sort_column(&self) -> &str {
		&self.sort_column
	}

	/// Direction the data is ordered in
	pub fn sort_direction(&self) -> SortDirection {
		self.sort_direction
	}

	/// Returns the direction opposite to `direction`
	pub fn opposite_sort_direction(direction: SortDirection) -> SortDirection {
		direction.opposite()
	}

	/// Returns a page showing `number` with the same size and ordering
	///
	/// # Errors
	///
	/// Returns [`TableError::InvalidArgument`] when `number` is zero.
	pub fn with_number(&self, number: usize) -> Result<Self> {
		Ok(Self {
			number: positive("number", number)?,
			..self.clone()
		})
	}

	/// Returns the first page ordered by `column`
	///
	/// Sorting by the current column flips the direction; sorting by any
	/// other column starts ascending.
	pub fn with_sort_column(&self, column: impl Into<String>) -> Self {
		let column = column.into();
		let sort_direction = if column == self.sort_column {
			self.sort_direction.opposite()
		} else {
			SortDirection::Asc
		};
		Self {
			number: 1,
			rows: self.rows,
			sort_column: column,
			sort_direction,
		}
	}

	/// Returns the ordering clause for this page, e.g. `name desc`
	pub fn order_clause(&self) -> OrderClause {
		OrderClause::new(self.sort_column.clone(), self.sort_direction)
	}
}

/// Builder for [`Page`] applying [`PageSettings`] defaults to omitted fields
///
/// Numeric fields accept signed values so that out-of-range input reaches
/// validation instead of wrapping.
#[derive(Debug, Clone, Default)]
pub struct PageBuilder {
	number: Option<i64>,
	rows: Option<i64>,
	sort_column: Option<String>,
	sort_direction: Option<SortDirection>,
	settings: PageSettings,
}

impl PageBuilder {
	/// Sets the page number
	pub fn number(mut self, number: i64) -> Self {
		self.number = Some(number);
		self
	}

	/// Sets the page size
	pub fn rows(mut self, rows: i64) -> Self {
		self.rows = Some(rows);
		self
	}

	/// Sets the sort column
	pub fn sort_column(mut self, column: impl Into<String>) -> Self {
		self.sort_column = Some(column.into());
		self
	}

	/// Sets the sort direction
	pub fn sort_direction(mut self, direction: SortDirection) -> Self {
		self.sort_direction = Some(direction);
		self
	}

	/// Uses `settings` for omitted page size and sort column
	pub fn settings(mut self, settings: &PageSettings) -> Self {
		self.settings = settings.clone();
		self
	}

	/// Validates the fields and builds the page
	///
	/// # Errors
	///
	/// Returns [`TableError::InvalidArgument`] when the number or page size is
	/// not a positive integer.
	pub fn build(self) -> Result<Page> {
		let number = match self.number {
			Some(number) => signed_positive("number", number)?,
			None => 1,
		};
		let rows = match self.rows {
			Some(rows) => signed_positive("rows", rows)?,
			None => positive("rows", self.settings.default_rows)?,
		};
		Ok(Page {
			number,
			rows,
			sort_column: self
				.sort_column
				.unwrap_or(self.settings.default_sort_column),
			sort_direction: self.sort_direction.unwrap_or_default(),
		})
	}
}

fn positive(field: &str, value: usize) -> Result<usize> {
	if value == 0 {
		return Err(TableError::InvalidArgument(format!(
			"{field} must be a positive integer, got 0"
		)));
	}
	Ok(value)
}

fn signed_positive(field: &str, value: i64) -> Result<usize> {
	usize::try_from(value)
		.ok()
		.filter(|v| *v > 0)
		.ok_or_else(|| {
			TableError::InvalidArgument(format!(
				"{field} must be a positive integer, got {value}"
			))
		})
}

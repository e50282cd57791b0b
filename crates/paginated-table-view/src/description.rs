//! Declarative table descriptions
//!
//! A [`TableDescription`] is filled in by a configuration closure once per
//! render call and only read afterwards. Columns are added either directly
//! to the table, which puts them into a single implicit row, or to explicit
//! rows created with [`TableDescription::row`]. A description uses one style
//! or the other; mixing them is an error.

mod column;

use paginated_table_core::{Result, TableError};

pub use column::{Column, title_case};

/// Options for a whole table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableOptions {
	/// Singular name of one entry, such as `user`
	pub model_label: Option<String>,
}

impl TableOptions {
	/// Creates empty options
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the model label
	pub fn model_label(mut self, label: impl Into<String>) -> Self {
		self.model_label = Some(label.into());
		self
	}
}

/// Options for one row of a table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowOptions {
	/// CSS class of the `tr` elements rendered for this row
	pub css_class: Option<String>,
}

impl RowOptions {
	/// Creates empty options
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the CSS class
	pub fn css_class(mut self, class: impl Into<String>) -> Self {
		self.css_class = Some(class.into());
		self
	}
}

/// A group of columns rendered as one `tr` per datum
#[derive(Debug)]
pub struct RowDescription<T> {
	options: RowOptions,
	columns: Vec<Column<T>>,
}

impl<T> RowDescription<T> {
	fn new(options: RowOptions) -> Self {
		Self {
			options,
			columns: Vec::new(),
		}
	}

	/// Appends a column
	pub fn column(&mut self, column: Column<T>) -> &mut Self {
		self.columns.push(column);
		self
	}

	/// Columns in declaration order
	pub fn columns(&self) -> &[Column<T>] {
		&self.columns
	}

	/// Options of this row
	pub fn options(&self) -> &RowOptions {
		&self.options
	}
}

#[derive(Debug)]
enum RowMode<T> {
	Uninitialized,
	Implicit(RowDescription<T>),
	Explicit(Vec<RowDescription<T>>),
}

/// Columns and rows of a paginated table
///
/// # Example
///
/// ```rust
/// use paginated_table_core::{FieldValue, Record};
/// use paginated_table_view::{Column, RowOptions, TableDescription, TableOptions};
///
/// struct Order;
///
/// impl Record for Order {
///     fn field(&self, _name: &str) -> Option<FieldValue> {
///         None
///     }
/// }
///
/// let description = TableDescription::<Order>::build(TableOptions::new(), |table| {
///     table.row(RowOptions::new(), |row| {
///         row.column(Column::new("number")).column(Column::new("placed_at"));
///     })?;
///     table.row(RowOptions::new().css_class("detail"), |row| {
///         row.column(Column::new("notes").sortable(false));
///     })?;
///     Ok(())
/// })
/// .unwrap();
///
/// assert_eq!(description.rows().len(), 2);
/// assert_eq!(description.colspan("all").unwrap(), "2");
/// ```
#[derive(Debug)]
pub struct TableDescription<T> {
	options: TableOptions,
	mode: RowMode<T>,
}

impl<T> TableDescription<T> {
	/// Creates an empty description
	pub fn new(options: TableOptions) -> Self {
		Self {
			options,
			mode: RowMode::Uninitialized,
		}
	}

	/// Creates a description and runs `configure` on it
	///
	/// Errors returned by `configure` are propagated.
	pub fn build<F>(options: TableOptions, configure: F) -> Result<Self>
	where
		F: FnOnce(&mut Self) -> Result<()>,
	{
		let mut description = Self::new(options);
		configure(&mut description)?;
		Ok(description)
	}

	/// Appends a column to the implicit default row
	///
	/// The default row is created by the first call. Fails once
	/// [`TableDescription::row`] has been used.
	pub fn column(&mut self, column: Column<T>) -> Result<&mut Self> {
		match &mut self.mode {
			RowMode::Uninitialized => {
				let mut row = RowDescription::new(RowOptions::default());
				row.column(column);
				self.mode = RowMode::Implicit(row);
			}
			RowMode::Implicit(row) => {
				row.column(column);
			}
			RowMode::Explicit(_) => {
				return Err(TableError::InvalidTableState(format!(
					"cannot add column `{}` to the table after explicit rows were declared",
					column.name()
				)));
			}
		}
		Ok(self)
	}

	/// Appends an explicit row and runs `configure` on it
	///
	/// Fails once [`TableDescription::column`] has been used.
	pub fn row<F>(&mut self, options: RowOptions, configure: F) -> Result<&mut Self>
	where
		F: FnOnce(&mut RowDescription<T>),
	{
		let mut row = RowDescription::new(options);
		configure(&mut row);
		match &mut self.mode {
			RowMode::Uninitialized => self.mode = RowMode::Explicit(vec![row]),
			RowMode::Explicit(rows) => rows.push(row),
			RowMode::Implicit(_) => {
				return Err(TableError::InvalidTableState(
					"cannot declare a row after columns were added to the table".to_string(),
				));
			}
		}
		Ok(self)
	}

	/// Rows in declaration order
	pub fn rows(&self) -> &[RowDescription<T>] {
		match &self.mode {
			RowMode::Uninitialized => &[],
			RowMode::Implicit(row) => std::slice::from_ref(row),
			RowMode::Explicit(rows) => rows,
		}
	}

	/// Every column of every row in declaration order
	pub fn columns(&self) -> impl Iterator<Item = &Column<T>> {
		self.rows().iter().flat_map(|row| row.columns().iter())
	}

	/// Number of cells a full-width cell spans
	///
	/// The only supported scope is `"all"`, the widest row's column count.
	pub fn colspan(&self, scope: &str) -> Result<String> {
		match scope {
			"all" => Ok(self
				.rows()
				.iter()
				.map(|row| row.columns().len())
				.max()
				.unwrap_or(0)
				.to_string()),
			other => Err(TableError::InvalidArgument(format!(
				"unsupported colspan scope `{other}`"
			))),
		}
	}

	/// The model label from the table options
	pub fn model_label(&self) -> Option<&str> {
		self.options.model_label.as_deref()
	}

	/// Options of this table
	pub fn options(&self) -> &TableOptions {
		&self.options
	}
}

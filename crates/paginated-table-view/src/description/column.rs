//! Column definitions

use std::fmt;

use paginated_table_core::Record;

use crate::markup::{IntoView, View};

type CellRenderer<T> = Box<dyn Fn(&T) -> View + Send + Sync>;

/// One column of a paginated table
///
/// A column has a name, used both as the sort key and for the default
/// header, and a cell renderer. Columns are sortable unless disabled.
///
/// # Example
///
/// ```rust
/// use paginated_table_core::{FieldValue, Record};
/// use paginated_table_view::Column;
///
/// struct User {
///     first_name: String,
/// }
///
/// impl Record for User {
///     fn field(&self, name: &str) -> Option<FieldValue> {
///         (name == "first_name").then(|| self.first_name.as_str().into())
///     }
/// }
///
/// let column = Column::<User>::new("first_name");
/// assert_eq!(column.render_header(), "First Name");
///
/// let user = User { first_name: "Ada".to_string() };
/// assert_eq!(column.render_cell(&user).text_content(), "Ada");
/// ```
pub struct Column<T> {
	name: String,
	header: Option<String>,
	sortable: bool,
	renderer: CellRenderer<T>,
}

impl<T: Record + 'static> Column<T> {
	/// Creates a column that displays the record field called `name`
	///
	/// A record without that field renders an empty cell.
	pub fn new(name: impl Into<String>) -> Self {
		let name = name.into();
		let field = name.clone();
		Self::from_renderer(
			name,
			Box::new(move |datum: &T| match datum.field(&field) {
				Some(value) => View::text(value.to_string()),
				None => {
					tracing::trace!(column = %field, "Record has no such field, rendering empty cell");
					View::empty()
				}
			}),
		)
	}
}

impl<T: 'static> Column<T> {
	/// Creates a column whose cells are produced by `renderer`
	pub fn with_renderer<F, V>(name: impl Into<String>, renderer: F) -> Self
	where
		F: Fn(&T) -> V + Send + Sync + 'static,
		V: IntoView,
	{
		Self::from_renderer(
			name.into(),
			Box::new(move |datum: &T| renderer(datum).into_view()),
		)
	}
}

impl<T> Column<T> {
	fn from_renderer(name: String, renderer: CellRenderer<T>) -> Self {
		Self {
			name,
			header: None,
			sortable: true,
			renderer,
		}
	}

	/// Sets whether this column is sortable
	pub fn sortable(mut self, sortable: bool) -> Self {
		self.sortable = sortable;
		self
	}

	/// Overrides the header text
	pub fn header(mut self, label: impl Into<String>) -> Self {
		self.header = Some(label.into());
		self
	}

	/// Returns the name of this column
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns whether this column can be sorted
	pub fn is_sortable(&self) -> bool {
		self.sortable
	}

	/// Returns the header text: the override, or the title-cased name
	pub fn render_header(&self) -> String {
		match &self.header {
			Some(label) => label.clone(),
			None => title_case(&self.name),
		}
	}

	/// Renders the cell content for `datum`
	pub fn render_cell(&self, datum: &T) -> View {
		(self.renderer)(datum)
	}
}

impl<T> fmt::Debug for Column<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Column")
			.field("name", &self.name)
			.field("header", &self.header)
			.field("sortable", &self.sortable)
			.finish_non_exhaustive()
	}
}

/// Converts an identifier into a human readable title
///
/// Words are split on `_`, `-`, whitespace and lower-to-upper case changes.
///
/// ```rust
/// use paginated_table_view::title_case;
///
/// assert_eq!(title_case("created_at"), "Created At");
/// assert_eq!(title_case("firstName"), "First Name");
/// assert_eq!(title_case("  e-mail "), "E Mail");
/// ```
pub fn title_case(name: &str) -> String {
	let mut words: Vec<String> = Vec::new();
	let mut current = String::new();
	let mut previous: Option<char> = None;

	for c in name.chars() {
		if c == '_' || c == '-' || c.is_whitespace() {
			if !current.is_empty() {
				words.push(std::mem::take(&mut current));
			}
			previous = None;
			continue;
		}
		let boundary = c.is_uppercase()
			&& previous.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit());
		if boundary && !current.is_empty() {
			words.push(std::mem::take(&mut current));
		}
		current.push(c);
		previous = Some(c);
	}
	if !current.is_empty() {
		words.push(current);
	}

	words
		.iter()
		.map(|word| capitalize(word))
		.collect::<Vec<_>>()
		.join(" ")
}

fn capitalize(word: &str) -> String {
	let mut chars = word.chars();
	match chars.next() {
		Some(first) => first
			.to_uppercase()
			.chain(chars.flat_map(char::to_lowercase))
			.collect(),
		None => String::new(),
	}
}

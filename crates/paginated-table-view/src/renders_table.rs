//! Table rendering
//!
//! The output has this shape; every element is built through the host view's
//! [`content_tag`](HostView::content_tag):
//!
//! ```text
//! div.pagination
//! ├── div.header
//! │   ├── div.info    summary text
//! │   └── div.links   pagination chrome
//! ├── table.paginated
//! │   ├── thead       one tr per row description, one th per column
//! │   └── tbody       one tr per row description and datum, one td per column
//! └── div.header      (same as above)
//! ```

use paginated_table_core::{PageSlice, Result};

use crate::description::{Column, RowDescription, TableDescription};
use crate::host::{HostView, entry_names};
use crate::link_renderer::LinkRenderer;
use crate::markup::{Attributes, View};

/// Renders one page of data as a paginated table
pub struct RendersTable<'a, T> {
	view: &'a dyn HostView,
	description: &'a TableDescription<T>,
	data: &'a PageSlice<T>,
	link_renderer: &'a LinkRenderer<'a>,
}

impl<'a, T> RendersTable<'a, T> {
	/// Creates a renderer over a description and one page of data
	pub fn new(
		view: &'a dyn HostView,
		description: &'a TableDescription<T>,
		data: &'a PageSlice<T>,
		link_renderer: &'a LinkRenderer<'a>,
	) -> Self {
		Self {
			view,
			description,
			data,
			link_renderer,
		}
	}

	/// Renders the whole widget: pagination, table, pagination
	pub fn render(&self) -> Result<View> {
		let content = View::fragment([
			self.render_pagination_area()?,
			self.render_table()?,
			self.render_pagination_area()?,
		]);
		Ok(self.tag("div", content, Attributes::class("pagination")))
	}

	/// Summary and page links
	pub fn render_pagination_area(&self) -> Result<View> {
		let content = View::fragment([
			self.render_pagination_info(),
			self.render_pagination_links()?,
		]);
		Ok(self.tag("div", content, Attributes::class("header")))
	}

	/// Summary text of the entries on this page
	pub fn render_pagination_info(&self) -> View {
		let info = self
			.view
			.page_entries_info(&self.data.info(), self.description.model_label());
		self.tag("div", View::text(info), Attributes::class("info"))
	}

	/// Pagination chrome
	pub fn render_pagination_links(&self) -> Result<View> {
		let links = self
			.view
			.pagination_links(&self.data.info(), self.link_renderer)?;
		Ok(self.tag("div", links, Attributes::class("links")))
	}

	/// The table element
	pub fn render_table(&self) -> Result<View> {
		let content = View::fragment([self.render_table_header()?, self.render_table_body()?]);
		Ok(self.tag("table", content, Attributes::class("paginated")))
	}

	/// Header section with one row per row description
	pub fn render_table_header(&self) -> Result<View> {
		let rows = self
			.description
			.rows()
			.iter()
			.map(|row| self.render_table_header_row(row))
			.collect::<Result<Vec<_>>>()?;
		Ok(self.tag("thead", View::fragment(rows), Attributes::new()))
	}

	/// Header cells of one row description
	pub fn render_table_header_row(&self, row: &RowDescription<T>) -> Result<View> {
		let cells = row
			.columns()
			.iter()
			.map(|column| self.render_table_header_column(column))
			.collect::<Result<Vec<_>>>()?;
		Ok(self.tag("tr", View::fragment(cells), row_attributes(row)))
	}

	/// One header cell
	pub fn render_table_header_column(&self, column: &Column<T>) -> Result<View> {
		let content = self.render_table_header_column_content(column)?;
		Ok(self.tag("th", content, Attributes::new()))
	}

	/// Sort link for sortable columns, plain header text otherwise
	pub fn render_table_header_column_content(&self, column: &Column<T>) -> Result<View> {
		let header = column.render_header();
		if column.is_sortable() {
			self.link_renderer.sort_link(header, column.name())
		} else {
			Ok(View::text(header))
		}
	}

	/// Body section with the rows of every datum in slice order
	///
	/// An empty page renders a single full-width `tr.empty` row.
	pub fn render_table_body(&self) -> Result<View> {
		let content = if self.data.is_empty() {
			self.render_empty_row()?
		} else {
			View::fragment(
				self.data
					.iter()
					.map(|datum| self.render_table_body_row(datum))
					.collect::<Vec<_>>(),
			)
		};
		Ok(self.tag("tbody", content, Attributes::new()))
	}

	fn render_empty_row(&self) -> Result<View> {
		let (_, plural) = entry_names(self.description.model_label());
		let cell = self.tag(
			"td",
			View::text(format!("No {plural} found")),
			Attributes::new().with("colspan", self.description.colspan("all")?),
		);
		Ok(self.tag("tr", cell, Attributes::class("empty")))
	}

	/// One `tr` per row description for `datum`
	pub fn render_table_body_row(&self, datum: &T) -> View {
		View::fragment(
			self.description
				.rows()
				.iter()
				.map(|row| {
					let cells = row
						.columns()
						.iter()
						.map(|column| self.render_table_body_cell(datum, column))
						.collect::<Vec<_>>();
					self.tag("tr", View::fragment(cells), row_attributes(row))
				})
				.collect::<Vec<_>>(),
		)
	}

	/// One body cell
	pub fn render_table_body_cell(&self, datum: &T, column: &Column<T>) -> View {
		self.tag("td", column.render_cell(datum), Attributes::new())
	}

	fn tag(&self, name: &str, content: View, attrs: Attributes) -> View {
		self.view.content_tag(name, content, attrs)
	}
}

fn row_attributes<T>(row: &RowDescription<T>) -> Attributes {
	match &row.options().css_class {
		Some(class) => Attributes::class(class.clone()),
		None => Attributes::new(),
	}
}

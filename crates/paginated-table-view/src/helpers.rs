//! Entry points for rendering a paginated table

use paginated_table_core::{DataPage, Orderable, PageParams, PageSettings, Result};

use crate::description::{TableDescription, TableOptions};
use crate::host::HostView;
use crate::link_renderer::{LinkOptions, LinkRenderer};
use crate::markup::View;
use crate::renders_table::RendersTable;

/// Renders one page of `collection` as a sortable, paginated table
///
/// The page, page size and sort order come from the request parameters of
/// `view`, with `settings` supplying defaults for missing ones. `configure`
/// declares the columns.
///
/// # Errors
///
/// Fails with [`TableError::InvalidArgument`](paginated_table_core::TableError::InvalidArgument)
/// for invalid request parameters, and propagates errors from `configure`
/// and from the collection.
///
/// # Example
///
/// ```rust
/// use paginated_table_core::{FieldValue, PageSettings, Record};
/// use paginated_table_view::{Column, StandardView, TableOptions, paginated_table};
///
/// #[derive(Clone)]
/// struct Fruit(&'static str);
///
/// impl Record for Fruit {
///     fn field(&self, name: &str) -> Option<FieldValue> {
///         (name == "name").then(|| self.0.into())
///     }
/// }
///
/// let fruits = vec![Fruit("pear"), Fruit("apple"), Fruit("fig")];
/// let view = StandardView::from_request("/fruits?sort_column=name&per_page=2").unwrap();
///
/// let table = paginated_table(
///     &view,
///     &fruits,
///     TableOptions::new().model_label("fruit"),
///     &PageSettings::default(),
///     |table| {
///         table.column(Column::new("name"))?;
///         Ok(())
///     },
/// )
/// .unwrap();
///
/// let html = table.render_to_string();
/// assert!(html.contains("<td>apple</td><"));
/// assert!(html.contains("Displaying fruits 1 - 2 of 3 in total"));
/// ```
pub fn paginated_table<C, F>(
	view: &dyn HostView,
	collection: &C,
	options: TableOptions,
	settings: &PageSettings,
	configure: F,
) -> Result<View>
where
	C: Orderable + ?Sized,
	F: FnOnce(&mut TableDescription<C::Item>) -> Result<()>,
{
	let params = view.request_params();
	let page = PageParams::create_page_from_params_with(&params, settings)?;
	let description = TableDescription::build(options, configure)?;
	let data = DataPage::new(collection, &page).data()?;
	tracing::debug!(
		page = page.number(),
		rows = page.rows(),
		order = %page.order_clause(),
		len = data.len(),
		"Rendering paginated table"
	);

	let mut link_renderer = LinkRenderer::new(&page);
	link_renderer.prepare(data.info(), LinkOptions::default(), view);

	RendersTable::new(view, &description, &data, &link_renderer).render()
}

/// Same as [`paginated_table`], serialized to HTML
pub fn render_paginated_table<C, F>(
	view: &dyn HostView,
	collection: &C,
	options: TableOptions,
	settings: &PageSettings,
	configure: F,
) -> Result<String>
where
	C: Orderable + ?Sized,
	F: FnOnce(&mut TableDescription<C::Item>) -> Result<()>,
{
	paginated_table(view, collection, options, settings, configure).map(|table| table.render_to_string())
}

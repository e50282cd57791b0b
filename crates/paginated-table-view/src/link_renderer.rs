//! Sort and page link generation
//!
//! [`LinkRenderer`] turns the current [`Page`] into link targets: sort links
//! for header cells and page links for the pagination chrome. URLs and link
//! markup come from the [`HostView`]; every link carries the remote flag so
//! that client-side code can load it in place.

use std::fmt;

use paginated_table_core::{Page, PageParams, ParamMap, Result, SliceInfo, TableError};

use crate::host::{HostView, PageLinkRenderer};
use crate::markup::{Attributes, IntoView, View};

/// Attribute marking a link as remote
pub const REMOTE_ATTR: &str = "data-remote";

/// Extra settings for generated links
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkOptions {
	/// Parameters added to every generated URL
	///
	/// Pagination parameters of the target page take precedence.
	pub params: ParamMap,
}

impl LinkOptions {
	/// Creates empty options
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a parameter to every generated URL
	pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.params.insert(key.into(), value.into());
		self
	}
}

struct Prepared<'a> {
	view: &'a dyn HostView,
	info: SliceInfo,
	options: LinkOptions,
}

/// Link policy for one render call
///
/// A renderer must be [prepared](LinkRenderer::prepare) with the paged data
/// and host view before it produces links; until then every link method
/// fails with [`TableError::NotPrepared`].
pub struct LinkRenderer<'a> {
	page: &'a Page,
	prepared: Option<Prepared<'a>>,
}

impl<'a> LinkRenderer<'a> {
	/// Creates a renderer for the current page
	pub fn new(page: &'a Page) -> Self {
		Self {
			page,
			prepared: None,
		}
	}

	/// Binds the renderer to the paged data and the host view
	pub fn prepare(&mut self, info: SliceInfo, options: LinkOptions, view: &'a dyn HostView) {
		self.prepared = Some(Prepared {
			view,
			info,
			options,
		});
	}

	/// The current page
	pub fn page(&self) -> &'a Page {
		self.page
	}

	/// Position of the paged data, once prepared
	pub fn slice_info(&self) -> Result<SliceInfo> {
		Ok(self.prepared()?.info)
	}

	/// Renders a link that sorts the table by `column_name`
	///
	/// The target is the first page sorted by that column; the direction
	/// flips when the table is already sorted by it.
	pub fn sort_link(&self, text: impl IntoView, column_name: &str) -> Result<View> {
		let prepared = self.prepared()?;
		let target = self.page.with_sort_column(column_name);
		let url = url_for(prepared, &target);
		tracing::debug!(column = column_name, %url, "Built sort link");
		Ok(prepared.view.link_to(
			text.into_view(),
			&url,
			Attributes::new().with(REMOTE_ATTR, "true"),
		))
	}

	fn prepared(&self) -> Result<&Prepared<'a>> {
		self.prepared.as_ref().ok_or(TableError::NotPrepared)
	}
}

impl PageLinkRenderer for LinkRenderer<'_> {
	fn page_link(&self, text: &str, number: usize, attrs: Attributes) -> Result<View> {
		let prepared = self.prepared()?;
		let target = self.page.with_number(number)?;
		let url = url_for(prepared, &target);
		tracing::debug!(number, %url, "Built page link");
		self.tag("a", View::text(text.to_string()), attrs.with("href", url))
	}

	fn tag(&self, name: &str, content: View, mut attrs: Attributes) -> Result<View> {
		let prepared = self.prepared()?;
		if name == "a" {
			let href = attrs.remove("href").unwrap_or_default();
			attrs.set(REMOTE_ATTR, "true");
			Ok(prepared.view.link_to(content, &href, attrs))
		} else {
			Ok(prepared.view.content_tag(name, content, attrs))
		}
	}
}

impl fmt::Debug for LinkRenderer<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("LinkRenderer")
			.field("page", &self.page)
			.field("prepared", &self.prepared.is_some())
			.finish()
	}
}

fn url_for(prepared: &Prepared<'_>, target: &Page) -> String {
	let mut params = prepared.options.params.clone();
	params.extend(PageParams::to_params(target));
	prepared.view.url_for(&params)
}

#[cfg(test)]
mod tests {
	use super::*;
	use paginated_table_core::SortDirection;

	#[test]
	fn test_unprepared_renderer_fails() {
		let page = Page::new(1, 5, "name", SortDirection::Asc).unwrap();
		let renderer = LinkRenderer::new(&page);
		assert!(matches!(
			renderer.sort_link("Name", "name"),
			Err(TableError::NotPrepared)
		));
		assert!(matches!(
			renderer.tag("span", View::empty(), Attributes::new()),
			Err(TableError::NotPrepared)
		));
		assert!(matches!(renderer.slice_info(), Err(TableError::NotPrepared)));
	}

	#[test]
	fn test_link_options_param() {
		let options = LinkOptions::new().param("filter", "active");
		assert_eq!(options.params.get("filter").map(String::as_str), Some("active"));
	}
}

//! Host view integration
//!
//! A [`HostView`] is the page-rendering context a table is embedded in. It
//! knows the current request parameters, how to turn parameters into a URL,
//! and how to emit links and tags. Only [`HostView::request_params`] and
//! [`HostView::url_for`] are required; the remaining methods default to the
//! standard markup, pagination chrome and summary text of this crate.

mod chrome;
mod standard;

use std::borrow::Cow;

use paginated_table_core::{ParamMap, Result, SliceInfo};

use crate::config::ChromeSettings;
use crate::markup::{Attributes, ElementView, IntoView, View};

pub use chrome::{entry_names, standard_entries_info, standard_pagination_links};
pub use standard::StandardView;

/// Link policy used by pagination chrome
///
/// [`crate::LinkRenderer`] is the implementation used by tables; chrome only
/// ever needs page links and plain tags.
pub trait PageLinkRenderer {
	/// Renders a link to page `number` keeping the current sort state
	fn page_link(&self, text: &str, number: usize, attrs: Attributes) -> Result<View>;

	/// Renders a tag; `a` tags become links to their `href` attribute
	fn tag(&self, name: &str, content: View, attrs: Attributes) -> Result<View>;
}

/// The view context a paginated table renders into
pub trait HostView {
	/// Parameters of the current request
	fn request_params(&self) -> ParamMap;

	/// Builds a URL for the current resource with `params` applied
	fn url_for(&self, params: &ParamMap) -> String;

	/// Builds a link element
	fn link_to(&self, content: View, href: &str, attrs: Attributes) -> View {
		ElementView::new("a")
			.attr("href", href.to_string())
			.attrs(attrs)
			.child(content)
			.into_view()
	}

	/// Builds an element named `name` around `content`
	fn content_tag(&self, name: &str, content: View, attrs: Attributes) -> View {
		ElementView::new(name.to_string())
			.attrs(attrs)
			.child(content)
			.into_view()
	}

	/// Layout and labels of the pagination chrome
	fn chrome_settings(&self) -> Cow<'_, ChromeSettings> {
		Cow::Owned(ChromeSettings::default())
	}

	/// Summary text such as `Displaying entries 6 - 10 of 42 in total`
	///
	/// `entry_name` is the singular name of one entry; `None` means "entry".
	fn page_entries_info(&self, info: &SliceInfo, entry_name: Option<&str>) -> String {
		standard_entries_info(info, entry_name)
	}

	/// Previous, numbered and next page links
	fn pagination_links(
		&self,
		info: &SliceInfo,
		renderer: &dyn PageLinkRenderer,
	) -> Result<View> {
		standard_pagination_links(info, renderer, &self.chrome_settings())
	}
}

impl<V: HostView + ?Sized> HostView for &V {
	fn request_params(&self) -> ParamMap {
		(**self).request_params()
	}

	fn url_for(&self, params: &ParamMap) -> String {
		(**self).url_for(params)
	}

	fn link_to(&self, content: View, href: &str, attrs: Attributes) -> View {
		(**self).link_to(content, href, attrs)
	}

	fn content_tag(&self, name: &str, content: View, attrs: Attributes) -> View {
		(**self).content_tag(name, content, attrs)
	}

	fn chrome_settings(&self) -> Cow<'_, ChromeSettings> {
		(**self).chrome_settings()
	}

	fn page_entries_info(&self, info: &SliceInfo, entry_name: Option<&str>) -> String {
		(**self).page_entries_info(info, entry_name)
	}

	fn pagination_links(
		&self,
		info: &SliceInfo,
		renderer: &dyn PageLinkRenderer,
	) -> Result<View> {
		(**self).pagination_links(info, renderer)
	}
}

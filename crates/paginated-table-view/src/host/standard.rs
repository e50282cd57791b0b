//! A ready-made host view for a single request URL

use std::borrow::Cow;

use paginated_table_core::{PageParams, ParamMap, Result, TableError};
use url::Url;

use super::HostView;
use crate::config::ChromeSettings;

const LOCAL_BASE: &str = "http://localhost";

/// Host view built from the URL of the current request
///
/// Relative request targets such as `/users?page=2` produce relative links;
/// absolute URLs produce absolute links. Links keep every query parameter of
/// the request and override the ones a table sets.
///
/// # Examples
///
/// ```rust
/// use paginated_table_core::ParamMap;
/// use paginated_table_view::{HostView, StandardView};
///
/// let view = StandardView::from_request("/users?filter=active&page=3").unwrap();
/// let mut params = ParamMap::new();
/// params.insert("page".to_string(), "4".to_string());
/// assert_eq!(view.url_for(&params), "/users?filter=active&page=4");
/// ```
#[derive(Debug, Clone)]
pub struct StandardView {
	url: Url,
	absolute: bool,
	params: ParamMap,
	chrome: ChromeSettings,
}

impl StandardView {
	/// Creates a view from a request target or absolute URL
	pub fn from_request(target: &str) -> Result<Self> {
		let (url, absolute) = match Url::parse(target) {
			Ok(url) => (url, true),
			Err(_) => {
				let base = Url::parse(LOCAL_BASE).map_err(invalid_url)?;
				(base.join(target).map_err(invalid_url)?, false)
			}
		};
		let params = PageParams::decode_query(url.query().unwrap_or(""))?;
		tracing::debug!(path = url.path(), params = params.len(), "Resolved request target");
		Ok(Self {
			url,
			absolute,
			params,
			chrome: ChromeSettings::default(),
		})
	}

	/// Replaces the pagination chrome settings
	pub fn with_chrome(mut self, chrome: ChromeSettings) -> Self {
		self.chrome = chrome;
		self
	}

	/// Path of the request
	pub fn path(&self) -> &str {
		self.url.path()
	}

	/// Decoded query parameters of the request
	pub fn params(&self) -> &ParamMap {
		&self.params
	}
}

impl HostView for StandardView {
	fn request_params(&self) -> ParamMap {
		self.params.clone()
	}

	fn url_for(&self, params: &ParamMap) -> String {
		let mut merged = self.params.clone();
		merged.extend(params.iter().map(|(k, v)| (k.clone(), v.clone())));

		let mut url = self.url.clone();
		url.set_fragment(None);
		if merged.is_empty() {
			url.set_query(None);
		} else {
			url.query_pairs_mut().clear().extend_pairs(merged.iter());
		}

		if self.absolute {
			url.to_string()
		} else {
			match url.query() {
				Some(query) => format!("{}?{}", url.path(), query),
				None => url.path().to_string(),
			}
		}
	}

	fn chrome_settings(&self) -> Cow<'_, ChromeSettings> {
		Cow::Borrowed(&self.chrome)
	}
}

fn invalid_url(err: url::ParseError) -> TableError {
	TableError::InvalidArgument(format!("invalid request URL: {err}"))
}

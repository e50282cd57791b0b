//! Conversion between [`Page`] and request parameters
//!
//! Request parameters are a flat string map using four keys:
//!
//! | Key | Page field |
//! |-----|------------|
//! | `page` | [`Page::number`] |
//! | `per_page` | [`Page::rows`] |
//! | `sort_column` | [`Page::sort_column`] |
//! | `sort_direction` | [`Page::sort_direction`] |

use std::collections::BTreeMap;

use url::form_urlencoded;

use crate::error::{Result, TableError};
use crate::page::{Page, SortDirection};
use crate::settings::PageSettings;

/// Query parameter carrying the page number
pub const PAGE_PARAM: &str = "page";

/// Query parameter carrying the page size
pub const PER_PAGE_PARAM: &str = "per_page";

/// Query parameter carrying the sort column
pub const SORT_COLUMN_PARAM: &str = "sort_column";

/// Query parameter carrying the sort direction
pub const SORT_DIRECTION_PARAM: &str = "sort_direction";

/// Flat, ordered request parameter map
pub type ParamMap = BTreeMap<String, String>;

/// Stateless conversions between [`Page`] and [`ParamMap`]
///
/// # Example
///
/// ```rust
/// use paginated_table_core::{PageParams, ParamMap};
///
/// let params: ParamMap = [("page", "2"), ("per_page", "5"), ("sort_column", "name")]
///     .into_iter()
///     .map(|(k, v)| (k.to_string(), v.to_string()))
///     .collect();
///
/// let page = PageParams::create_page_from_params(&params).unwrap();
/// assert_eq!(page.number(), 2);
/// assert_eq!(page.rows(), 5);
///
/// assert_eq!(
///     PageParams::to_query(&page),
///     "page=2&per_page=5&sort_column=name&sort_direction=asc"
/// );
/// ```
pub struct PageParams;

impl PageParams {
	/// Builds a page from request parameters using the default settings
	///
	/// Missing keys take the defaults from [`PageSettings::default`].
	///
	/// # Errors
	///
	/// Returns [`TableError::InvalidArgument`] when `page` or `per_page` is
	/// not a positive integer or `sort_direction` is neither `asc` nor `desc`.
	pub fn create_page_from_params(params: &ParamMap) -> Result<Page> {
		Self::create_page_from_params_with(params, &PageSettings::default())
	}

	/// Builds a page from request parameters using `settings` for missing keys
	///
	/// Empty `page`, `per_page` and `sort_direction` values are treated the
	/// same as missing keys. `sort_column` is taken as given, even when empty.
	pub fn create_page_from_params_with(params: &ParamMap, settings: &PageSettings) -> Result<Page> {
		let mut builder = Page::builder().settings(settings);
		if let Some(number) = lookup(params, PAGE_PARAM) {
			builder = builder.number(parse_integer(PAGE_PARAM, number)?);
		}
		if let Some(rows) = lookup(params, PER_PAGE_PARAM) {
			builder = builder.rows(parse_integer(PER_PAGE_PARAM, rows)?);
		}
		if let Some(column) = params.get(SORT_COLUMN_PARAM) {
			builder = builder.sort_column(column);
		}
		if let Some(direction) = lookup(params, SORT_DIRECTION_PARAM) {
			builder = builder.sort_direction(direction.parse::<SortDirection>().inspect_err(reject)?);
		}
		let page = builder.build().inspect_err(reject)?;
		tracing::debug!(
			number = page.number(),
			rows = page.rows(),
			sort_column = page.sort_column(),
			sort_direction = %page.sort_direction(),
			"Resolved page from request parameters"
		);
		Ok(page)
	}

	/// Decodes a raw query string and builds a page from it
	///
	/// # Errors
	///
	/// Returns [`TableError::Query`] when the query string cannot be decoded,
	/// and the errors of [`PageParams::create_page_from_params_with`] otherwise.
	pub fn create_page_from_query(query: &str, settings: &PageSettings) -> Result<Page> {
		let params = Self::decode_query(query)?;
		Self::create_page_from_params_with(&params, settings)
	}

	/// Converts a page into its four request parameters
	pub fn to_params(page: &Page) -> ParamMap {
		let mut params = ParamMap::new();
		params.insert(PAGE_PARAM.to_string(), page.number().to_string());
		params.insert(PER_PAGE_PARAM.to_string(), page.rows().to_string());
		params.insert(SORT_COLUMN_PARAM.to_string(), page.sort_column().to_string());
		params.insert(
			SORT_DIRECTION_PARAM.to_string(),
			page.sort_direction().to_string(),
		);
		params
	}

	/// Converts a page into a URL-encoded query string
	pub fn to_query(page: &Page) -> String {
		Self::encode_query(&Self::to_params(page))
	}

	/// Decodes a URL-encoded query string into a parameter map
	///
	/// A leading `?` is ignored. Later duplicates of a key win.
	pub fn decode_query(query: &str) -> Result<ParamMap> {
		let query = query.strip_prefix('?').unwrap_or(query);
		let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query)?;
		Ok(pairs.into_iter().collect())
	}

	/// Encodes a parameter map as a URL-encoded query string
	pub fn encode_query(params: &ParamMap) -> String {
		form_urlencoded::Serializer::new(String::new())
			.extend_pairs(params.iter())
			.finish()
	}
}

fn lookup<'a>(params: &'a ParamMap, key: &str) -> Option<&'a str> {
	params
		.get(key)
		.map(String::as_str)
		.filter(|value| !value.trim().is_empty())
}

fn reject(err: &TableError) {
	tracing::warn!(%err, "Rejected pagination parameters");
}

fn parse_integer(key: &str, value: &str) -> Result<i64> {
	value.trim().parse::<i64>().map_err(|_| {
		tracing::warn!(key, value, "Rejected non-integer pagination parameter");
		TableError::InvalidArgument(format!("{key} must be an integer, got {value:?}"))
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_decode_query_ignores_leading_question_mark() {
		let params = PageParams::decode_query("?page=3&q=a+b").unwrap();
		assert_eq!(params.get("page").map(String::as_str), Some("3"));
		assert_eq!(params.get("q").map(String::as_str), Some("a b"));
	}

	#[test]
	fn test_encode_query_escapes_values() {
		let mut params = ParamMap::new();
		params.insert("sort_column".to_string(), "first name".to_string());
		assert_eq!(PageParams::encode_query(&params), "sort_column=first+name");
	}

	#[test]
	fn test_empty_values_fall_back_to_defaults() {
		let params = PageParams::decode_query("page=&per_page=").unwrap();
		let page = PageParams::create_page_from_params(&params).unwrap();
		assert_eq!(page.number(), 1);
		assert_eq!(page.rows(), 20);
	}

	#[test]
	fn test_empty_sort_column_is_kept() {
		let params = PageParams::decode_query("sort_column=").unwrap();
		let page = PageParams::create_page_from_params(&params).unwrap();
		assert_eq!(page.sort_column(), "");
	}
}

//! Standard pagination chrome and summary text

use paginated_table_core::{PageRangeItem, Result, SliceInfo};

use super::PageLinkRenderer;
use crate::config::ChromeSettings;
use crate::markup::{Attributes, View};

const GAP: &str = "\u{2026}";

/// Singular and plural names for one entry of a table
///
/// `None` or a blank label yields `("entry", "entries")`.
///
/// # Examples
///
/// ```rust
/// use paginated_table_view::host::entry_names;
///
/// assert_eq!(entry_names(Some("category")), ("category".to_string(), "categories".to_string()));
/// assert_eq!(entry_names(None), ("entry".to_string(), "entries".to_string()));
/// ```
pub fn entry_names(label: Option<&str>) -> (String, String) {
	match label.map(str::trim).filter(|label| !label.is_empty()) {
		Some(label) => (label.to_string(), pluralize(label)),
		None => ("entry".to_string(), "entries".to_string()),
	}
}

fn pluralize(word: &str) -> String {
	if ["s", "x", "z", "ch", "sh"].iter().any(|suffix| word.ends_with(suffix)) {
		return format!("{word}es");
	}
	if let Some(stem) = word.strip_suffix('y')
		&& !stem.ends_with(['a', 'e', 'i', 'o', 'u'])
		&& !stem.is_empty()
	{
		return format!("{stem}ies");
	}
	format!("{word}s")
}

/// Summary of which entries the current page shows
pub fn standard_entries_info(info: &SliceInfo, entry_name: Option<&str>) -> String {
	let (singular, plural) = entry_names(entry_name);
	match info.total_entries {
		0 => format!("No {plural} found"),
		_ if info.len == 0 => format!(
			"No {plural} on page {} of {}",
			info.number,
			info.total_pages()
		),
		1 => format!("Displaying 1 {singular}"),
		total if info.total_pages() == 1 => format!("Displaying all {total} {plural}"),
		total => format!(
			"Displaying {plural} {} - {} of {total} in total",
			info.start_index(),
			info.end_index()
		),
	}
}

/// Previous link, elided page numbers and next link
///
/// Renders nothing when everything fits on one page.
pub fn standard_pagination_links(
	info: &SliceInfo,
	renderer: &dyn PageLinkRenderer,
	settings: &ChromeSettings,
) -> Result<View> {
	if info.total_pages() <= 1 {
		return Ok(View::empty());
	}

	let mut items = Vec::new();
	items.push(edge_link(
		renderer,
		&settings.previous_label,
		info.previous_page(),
		"previous_page",
	)?);

	for item in info.elided_page_range(settings.inner_window, settings.outer_window) {
		let view = match item {
			PageRangeItem::Number(number) if number == info.number => renderer.tag(
				"em",
				View::text(number.to_string()),
				Attributes::class("current"),
			)?,
			PageRangeItem::Number(number) => {
				renderer.page_link(&number.to_string(), number, Attributes::new())?
			}
			PageRangeItem::Gap => renderer.tag("span", View::text(GAP), Attributes::class("gap"))?,
		};
		items.push(view);
	}

	items.push(edge_link(
		renderer,
		&settings.next_label,
		info.next_page(),
		"next_page",
	)?);

	Ok(View::Fragment(items))
}

fn edge_link(
	renderer: &dyn PageLinkRenderer,
	label: &str,
	target: Option<usize>,
	class: &'static str,
) -> Result<View> {
	match target {
		Some(number) => renderer.page_link(label, number, Attributes::class(class)),
		None => renderer.tag(
			"span",
			View::text(label.to_string()),
			Attributes::class(format!("{class} disabled")),
		),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::markup::{ElementView, IntoView};

	struct PlainLinks;

	impl PageLinkRenderer for PlainLinks {
		fn page_link(&self, text: &str, number: usize, attrs: Attributes) -> Result<View> {
			Ok(ElementView::new("a")
				.attr("href", format!("?page={number}"))
				.attrs(attrs)
				.child(text.to_string())
				.into_view())
		}

		fn tag(&self, name: &str, content: View, attrs: Attributes) -> Result<View> {
			Ok(ElementView::new(name.to_string())
				.attrs(attrs)
				.child(content)
				.into_view())
		}
	}

	fn info(number: usize, total_entries: usize) -> SliceInfo {
		let start = (number - 1) * 10;
		SliceInfo {
			number,
			rows: 10,
			total_entries,
			len: total_entries.saturating_sub(start).min(10),
		}
	}

	#[test]
	fn test_entry_names_pluralize() {
		assert_eq!(entry_names(Some("user")).1, "users");
		assert_eq!(entry_names(Some("box")).1, "boxes");
		assert_eq!(entry_names(Some("day")).1, "days");
		assert_eq!(entry_names(Some("  ")).1, "entries");
	}

	#[test]
	fn test_entries_info_variants() {
		assert_eq!(standard_entries_info(&info(1, 0), None), "No entries found");
		assert_eq!(standard_entries_info(&info(1, 1), Some("user")), "Displaying 1 user");
		assert_eq!(
			standard_entries_info(&info(1, 7), Some("user")),
			"Displaying all 7 users"
		);
		assert_eq!(
			standard_entries_info(&info(2, 42), None),
			"Displaying entries 11 - 20 of 42 in total"
		);
	}

	#[test]
	fn test_entries_info_past_the_end() {
		assert_eq!(
			standard_entries_info(&info(8, 25), Some("product")),
			"No products on page 8 of 3"
		);
		assert_eq!(standard_entries_info(&info(2, 1), None), "No entries on page 2 of 1");
	}

	#[test]
	fn test_past_the_end_links_back_to_last_page() {
		let view = standard_pagination_links(&info(8, 25), &PlainLinks, &ChromeSettings::default())
			.unwrap();
		let html = view.render_to_string();
		assert!(html.starts_with("<a href=\"?page=3\" class=\"previous_page\">"));
		assert!(!html.contains("<em"));
		assert!(html.ends_with("<span class=\"next_page disabled\">Next \u{2192}</span>"));
	}

	#[test]
	fn test_single_page_renders_nothing() {
		let view = standard_pagination_links(&info(1, 7), &PlainLinks, &ChromeSettings::default())
			.unwrap();
		assert_eq!(view, View::Empty);
	}

	#[test]
	fn test_first_page_disables_previous() {
		let view = standard_pagination_links(&info(1, 30), &PlainLinks, &ChromeSettings::default())
			.unwrap();
		assert_eq!(
			view.render_to_string(),
			concat!(
				"<span class=\"previous_page disabled\">\u{2190} Previous</span>",
				"<em class=\"current\">1</em>",
				"<a href=\"?page=2\">2</a>",
				"<a href=\"?page=3\">3</a>",
				"<a href=\"?page=2\" class=\"next_page\">Next \u{2192}</a>",
			)
		);
	}

	#[test]
	fn test_last_page_disables_next_and_shows_gap() {
		let settings = ChromeSettings {
			inner_window: 1,
			outer_window: 1,
			..ChromeSettings::default()
		};
		let view = standard_pagination_links(&info(10, 100), &PlainLinks, &settings).unwrap();
		let html = view.render_to_string();
		assert!(html.starts_with("<a href=\"?page=9\" class=\"previous_page\">"));
		assert!(html.contains("<a href=\"?page=1\">1</a><span class=\"gap\">\u{2026}</span><a href=\"?page=9\">9</a>"));
		assert!(html.ends_with("<span class=\"next_page disabled\">Next \u{2192}</span>"));
	}
}

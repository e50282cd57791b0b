
use fixtures::{RecordingView, page, params};
use paginated_table_core::{Page, SliceInfo, TableError};
use paginated_table_view::{
	Attributes, LinkOptions, LinkRenderer, PageLinkRenderer, REMOTE_ATTR, View,
};
use rstest::*;

fn info() -> SliceInfo {
	SliceInfo {
		number: 2,
		rows: 5,
		total_entries: 12,
		len: 5,
	}
}

#[rstest]
fn test_sort_link_toggles_current_column(page: Page) {
	let view = RecordingView::default();
	let mut renderer = LinkRenderer::new(&page);
	renderer.prepare(info(), LinkOptions::new(), &view);

	let link = renderer.sort_link("Name", "name").unwrap();

	assert_eq!(
		view.last_url_params(),
		Some(params(&[
			("page", "1"),
			("per_page", "5"),
			("sort_column", "name"),
			("sort_direction", "asc"),
		]))
	);
	let a = link.as_element().unwrap();
	assert_eq!(a.tag_name(), "a");
	assert_eq!(
		a.get_attr("href"),
		Some("/users?page=1&per_page=5&sort_column=name&sort_direction=asc")
	);
	assert_eq!(a.get_attr(REMOTE_ATTR), Some("true"));
	assert_eq!(link.text_content(), "Name");
}

#[rstest]
fn test_sort_link_on_other_column_starts_ascending(page: Page) {
	let view = RecordingView::default();
	let mut renderer = LinkRenderer::new(&page);
	renderer.prepare(info(), LinkOptions::new(), &view);

	renderer.sort_link("Email", "email").unwrap();

	let target = view.last_url_params().unwrap();
	assert_eq!(target["sort_column"], "email");
	assert_eq!(target["sort_direction"], "asc");
	assert_eq!(target["page"], "1");
}

#[rstest]
fn test_tag_a_becomes_remote_link(page: Page) {
	let view = RecordingView::default();
	let mut renderer = LinkRenderer::new(&page);
	renderer.prepare(info(), LinkOptions::new(), &view);

	let link = renderer
		.tag(
			"a",
			View::text("text"),
			Attributes::class("highlight").with("href", "/somewhere"),
		)
		.unwrap();

	assert_eq!(view.links.get(), 1);
	assert!(view.tags.borrow().is_empty());
	assert_eq!(
		link.render_to_string(),
		"<a href=\"/somewhere\" class=\"highlight\" data-remote=\"true\">text</a>"
	);
}

#[rstest]
fn test_other_tags_delegate_to_content_tag(page: Page) {
	let view = RecordingView::default();
	let mut renderer = LinkRenderer::new(&page);
	renderer.prepare(info(), LinkOptions::new(), &view);

	let span = renderer
		.tag("span", View::text("foo"), Attributes::class("gap"))
		.unwrap();

	assert_eq!(view.links.get(), 0);
	assert_eq!(*view.tags.borrow(), ["span"]);
	assert_eq!(span.render_to_string(), "<span class=\"gap\">foo</span>");
}

#[rstest]
fn test_page_link_keeps_sort_state(page: Page) {
	let view = RecordingView::default();
	let mut renderer = LinkRenderer::new(&page);
	renderer.prepare(info(), LinkOptions::new(), &view);

	let link = renderer
		.page_link("3", 3, Attributes::class("next_page"))
		.unwrap();

	assert_eq!(
		view.last_url_params(),
		Some(params(&[
			("page", "3"),
			("per_page", "5"),
			("sort_column", "name"),
			("sort_direction", "desc"),
		]))
	);
	let a = link.as_element().unwrap();
	assert_eq!(a.get_attr("class"), Some("next_page"));
	assert_eq!(a.get_attr(REMOTE_ATTR), Some("true"));
}

#[rstest]
fn test_page_link_to_page_zero_is_rejected(page: Page) {
	let view = RecordingView::default();
	let mut renderer = LinkRenderer::new(&page);
	renderer.prepare(info(), LinkOptions::new(), &view);

	let err = renderer.page_link("0", 0, Attributes::new()).unwrap_err();
	assert!(err.is_invalid_argument());
}

#[rstest]
fn test_link_options_params_are_merged(page: Page) {
	let view = RecordingView::default();
	let mut renderer = LinkRenderer::new(&page);
	renderer.prepare(
		info(),
		LinkOptions::new().param("filter", "active").param("page", "99"),
		&view,
	);

	renderer.page_link("1", 1, Attributes::new()).unwrap();

	let target = view.last_url_params().unwrap();
	assert_eq!(target["filter"], "active");
	assert_eq!(target["page"], "1");
}

#[rstest]
fn test_links_require_prepare(page: Page) {
	let renderer = LinkRenderer::new(&page);
	assert!(matches!(
		renderer.page_link("1", 1, Attributes::new()),
		Err(TableError::NotPrepared)
	));
}

#[rstest]
fn test_prepare_exposes_slice_info(page: Page) {
	let view = RecordingView::default();
	let mut renderer = LinkRenderer::new(&page);
	renderer.prepare(info(), LinkOptions::new(), &view);
	assert_eq!(renderer.slice_info().unwrap(), info());
	assert_eq!(renderer.page(), &page);
}

//! End-to-end tests through the facade crate

use paginated_table::prelude::*;
use rstest::*;

#[derive(Debug, Clone)]
struct Product {
	sku: String,
	price: f64,
	stock: Option<i64>,
}

impl Record for Product {
	fn field(&self, name: &str) -> Option<FieldValue> {
		match name {
			"sku" => Some(self.sku.as_str().into()),
			"price" => Some(self.price.into()),
			"stock" => Some(self.stock.into()),
			_ => None,
		}
	}
}

#[fixture]
fn products() -> Vec<Product> {
	(1..=12_i32)
		.map(|i| Product {
			sku: format!("SKU-{i:03}"),
			price: f64::from(i) * 1.5,
			stock: (i % 3 != 0).then_some(i64::from(i)),
		})
		.collect()
}

fn columns(table: &mut TableDescription<Product>) -> Result<()> {
	table.column(Column::new("sku").header("SKU"))?;
	table.column(Column::new("price"))?;
	table.column(Column::with_renderer("stock", |p: &Product| match p.stock {
		Some(n) => format!("{n} left"),
		None => "sold out".to_string(),
	}))?;
	Ok(())
}

#[rstest]
fn test_settings_drive_defaults(products: Vec<Product>) {
	let settings = TableSettings::from_toml_str(
		r#"
		[page]
		default_rows = 4
		default_sort_column = "price"

		[chrome]
		previous_label = "Prev"
		next_label = "Next"
		"#,
	)
	.unwrap();
	let view = StandardView::from_request("/products")
		.unwrap()
		.with_chrome(settings.chrome.clone());

	let html = render_paginated_table(
		&view,
		&products,
		TableOptions::new().model_label("product"),
		&settings.page,
		columns,
	)
	.unwrap();

	assert!(html.contains("Displaying products 1 - 4 of 12 in total"));
	assert!(html.contains("<td>SKU-004</td>"));
	assert!(!html.contains("<td>SKU-005</td>"));
	assert!(html.contains("<span class=\"previous_page disabled\">Prev</span>"));
	assert!(html.contains("<td>sold out</td>"));
}

#[rstest]
fn test_follow_sort_link_round_trip(products: Vec<Product>) {
	let view = StandardView::from_request("/products?sort_column=sku&page=2&per_page=5").unwrap();
	let page = PageParams::create_page_from_params(&view.request_params()).unwrap();

	// clicking the active sort header goes back to page one, reversed
	let next = page.with_sort_column("sku");
	let url = view.url_for(&PageParams::to_params(&next));
	assert_eq!(
		url,
		"/products?page=1&per_page=5&sort_column=sku&sort_direction=desc"
	);

	let followed = StandardView::from_request(&url).unwrap();
	let html = render_paginated_table(
		&followed,
		&products,
		TableOptions::new(),
		&PageSettings::default(),
		columns,
	)
	.unwrap();

	let first = html.find("<td>SKU-012</td>").unwrap();
	let last = html.find("<td>SKU-008</td>").unwrap();
	assert!(first < last);
	assert!(!html.contains("<td>SKU-007</td>"));
}

#[rstest]
fn test_float_column_sorts_numerically(products: Vec<Product>) {
	let view = StandardView::from_request("/products?sort_column=price&sort_direction=desc&per_page=2")
		.unwrap();

	let table = paginated_table(
		&view,
		&products,
		TableOptions::new(),
		&PageSettings::default(),
		columns,
	)
	.unwrap();

	let html = table.render_to_string();
	assert!(html.contains("<td>SKU-012</td><td>18</td>"));
	assert!(html.contains("<td>SKU-011</td><td>16.5</td>"));
}

#[rstest]
fn test_page_beyond_end_renders_empty_body(products: Vec<Product>) {
	let view = StandardView::from_request("/products?page=9&per_page=5").unwrap();

	let html = render_paginated_table(
		&view,
		&products,
		TableOptions::new().model_label("product"),
		&PageSettings::default(),
		columns,
	)
	.unwrap();

	assert!(html.contains("<tr class=\"empty\"><td colspan=\"3\">No products found</td></tr>"));
	assert!(html.contains("<div class=\"info\">No products on page 9 of 3</div>"));
	assert!(html.contains("<a href=\"/products?page=3&amp;per_page=5&amp;sort_column=id&amp;sort_direction=asc\" class=\"previous_page\""));
}

#[rstest]
fn test_bad_query_string_is_rejected() {
	let view = StandardView::from_request("/products?page=two").unwrap();
	let products: Vec<Product> = Vec::new();

	let err = paginated_table(
		&view,
		&products,
		TableOptions::new(),
		&PageSettings::default(),
		columns,
	)
	.unwrap_err();

	assert!(matches!(err, TableError::InvalidArgument(_)));
}

use paginated_table_core::{Page, PageParams, PageSettings, ParamMap, SortDirection, TableError};
use proptest::prelude::*;
use rstest::*;

fn params(pairs: &[(&str, &str)]) -> ParamMap {
	pairs
		.iter()
		.map(|(k, v)| (k.to_string(), v.to_string()))
		.collect()
}

#[rstest]
fn test_create_page_from_params() {
	let page = PageParams::create_page_from_params(&params(&[
		("page", "2"),
		("per_page", "5"),
		("sort_column", "name"),
		("sort_direction", "desc"),
	]))
	.unwrap();
	assert_eq!(page.number(), 2);
	assert_eq!(page.rows(), 5);
	assert_eq!(page.sort_column(), "name");
	assert_eq!(page.sort_direction(), SortDirection::Desc);
}

#[rstest]
fn test_missing_params_use_settings() {
	let settings = PageSettings::new().default_rows(15).default_sort_column("created_at");
	let page = PageParams::create_page_from_params_with(&ParamMap::new(), &settings).unwrap();
	assert_eq!(page.number(), 1);
	assert_eq!(page.rows(), 15);
	assert_eq!(page.sort_column(), "created_at");
	assert_eq!(page.sort_direction(), SortDirection::Asc);
}

#[rstest]
#[case::non_numeric_page(&[("page", "foo")])]
#[case::fractional_page(&[("page", "1.5")])]
#[case::zero_page(&[("page", "0")])]
#[case::negative_rows(&[("per_page", "-1")])]
#[case::non_numeric_rows(&[("per_page", "foo")])]
#[case::bad_direction(&[("sort_direction", "sideways")])]
fn test_invalid_params_are_rejected(#[case] pairs: &[(&str, &str)]) {
	let result = PageParams::create_page_from_params(&params(pairs));
	assert!(matches!(result, Err(TableError::InvalidArgument(_))));
}

#[rstest]
#[case("")]
#[case("   ")]
#[case(" name ")]
fn test_sort_column_round_trips_verbatim(#[case] column: &str) {
	let page = Page::new(1, 20, column, SortDirection::Asc).unwrap();
	let params = PageParams::to_params(&page);
	let restored = PageParams::create_page_from_params(&params).unwrap();
	assert_eq!(restored.sort_column(), column);
	assert_eq!(PageParams::to_params(&restored), params);
}

#[rstest]
fn test_to_params() {
	let page = Page::new(2, 5, "name", SortDirection::Desc).unwrap();
	assert_eq!(
		PageParams::to_params(&page),
		params(&[
			("page", "2"),
			("per_page", "5"),
			("sort_column", "name"),
			("sort_direction", "desc"),
		])
	);
}

#[rstest]
fn test_create_page_from_query() {
	let page = PageParams::create_page_from_query(
		"?page=3&sort_column=last+name&sort_direction=desc&filter=x",
		&PageSettings::default(),
	)
	.unwrap();
	assert_eq!(page.number(), 3);
	assert_eq!(page.sort_column(), "last name");
	assert_eq!(page.sort_direction(), SortDirection::Desc);
}

#[rstest]
fn test_to_query() {
	let page = Page::new(1, 20, "last name", SortDirection::Asc).unwrap();
	assert_eq!(
		PageParams::to_query(&page),
		"page=1&per_page=20&sort_column=last+name&sort_direction=asc"
	);
}

proptest! {
	#[test]
	fn prop_params_round_trip(
		number in 1usize..100_000,
		rows in 1usize..1_000,
		column in "[A-Za-z0-9_ .-]{0,16}",
		descending in any::<bool>(),
	) {
		let direction = if descending { SortDirection::Desc } else { SortDirection::Asc };
		let page = Page::new(number, rows, column, direction).unwrap();
		let params = PageParams::to_params(&page);
		let restored = PageParams::create_page_from_params(&params).unwrap();
		prop_assert_eq!(PageParams::to_params(&restored), params);
		prop_assert_eq!(restored, page);
	}

	#[test]
	fn prop_query_round_trip(number in 1usize..1_000, column in "[a-z &=?]{0,10}") {
		let page = Page::new(number, 10, column, SortDirection::Desc).unwrap();
		let restored = PageParams::create_page_from_query(
			&PageParams::to_query(&page),
			&PageSettings::default(),
		)
		.unwrap();
		prop_assert_eq!(restored, page);
	}
}

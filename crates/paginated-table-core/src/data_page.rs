//! Ordering and slicing a collection for the current page

use std::cmp::Reverse;
use std::fmt;

use crate::error::Result;
use crate::page::{Page, SortDirection};
use crate::record::{FieldValue, Record};

/// Ordering clause handed to a collection, displayed as `<column> <direction>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderClause {
	column: String,
	direction: SortDirection,
}

impl OrderClause {
	/// Creates a new ordering clause
	pub fn new(column: impl Into<String>, direction: SortDirection) -> Self {
		Self {
			column: column.into(),
			direction,
		}
	}

	/// Column to order by
	pub fn column(&self) -> &str {
		&self.column
	}

	/// Direction to order in
	pub fn direction(&self) -> SortDirection {
		self.direction
	}
}

impl fmt::Display for OrderClause {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {}", self.column, self.direction)
	}
}

/// One entry of an elided page range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRangeItem {
	/// A page number to show
	Number(usize),
	/// A run of hidden page numbers
	Gap,
}

/// Position of a slice within the whole collection
///
/// This is what pagination chrome and summary text need to know about a
/// page of data, without the items themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceInfo {
	/// Current page number (1-indexed)
	pub number: usize,
	/// Items per page
	pub rows: usize,
	/// Total number of items across all pages
	pub total_entries: usize,
	/// Number of items on this page
	pub len: usize,
}

impl SliceInfo {
	/// Returns the total number of pages, at least 1
	pub fn total_pages(&self) -> usize {
		if self.total_entries == 0 || self.rows == 0 {
			1
		} else {
			self.total_entries.div_ceil(self.rows)
		}
	}

	/// Returns the 1-based index of the first item on this page, or 0 when
	/// the page is empty
	pub fn start_index(&self) -> usize {
		if self.len == 0 {
			0
		} else {
			(self.number - 1) * self.rows + 1
		}
	}

	/// Returns the 1-based index of the last item on this page, or 0 when
	/// the page is empty
	pub fn end_index(&self) -> usize {
		if self.len == 0 {
			0
		} else {
			self.start_index() + self.len - 1
		}
	}

	/// Returns true if there is a next page
	pub fn has_next(&self) -> bool {
		self.number < self.total_pages()
	}

	/// Returns true if there is a previous page
	pub fn has_previous(&self) -> bool {
		self.number > 1
	}

	/// Returns the next page number, if any
	pub fn next_page(&self) -> Option<usize> {
		self.has_next().then(|| self.number + 1)
	}

	/// Returns the previous page number, if any
	///
	/// From a page past the end this is the last page.
	pub fn previous_page(&self) -> Option<usize> {
		self.has_previous()
			.then(|| (self.number - 1).min(self.total_pages()))
	}

	/// Returns every page number (1-indexed)
	pub fn page_range(&self) -> std::ops::RangeInclusive<usize> {
		1..=self.total_pages()
	}

	/// Returns the page numbers to show with gaps for long ranges
	///
	/// `inner_window` pages are kept on each side of the current page and
	/// `outer_window` pages at each end. A gap hiding exactly one page is
	/// replaced by that page.
	///
	/// # Example
	///
	/// ```rust
	/// use paginated_table_core::{PageRangeItem::{Gap, Number}, SliceInfo};
	///
	/// let info = SliceInfo { number: 10, rows: 10, total_entries: 200, len: 10 };
	/// assert_eq!(
	///     info.elided_page_range(2, 1),
	///     vec![Number(1), Gap, Number(8), Number(9), Number(10), Number(11), Number(12), Gap, Number(20)]
	/// );
	/// ```
	pub fn elided_page_range(&self, inner_window: usize, outer_window: usize) -> Vec<PageRangeItem> {
		let total = self.total_pages();
		let current = self.number.min(total);

		let window_start = current.saturating_sub(inner_window).max(1);
		let window_end = current.saturating_add(inner_window).min(total);

		let mut shown: Vec<usize> = (1..=outer_window.min(total))
			.chain(window_start..=window_end)
			.chain(total.saturating_sub(outer_window) + 1..=total)
			.collect();
		shown.sort_unstable();
		shown.dedup();

		let mut result = Vec::with_capacity(shown.len() + 2);
		let mut previous = 0;
		for number in shown {
			match number - previous {
				1 => {}
				2 => result.push(PageRangeItem::Number(number - 1)),
				_ => result.push(PageRangeItem::Gap),
			}
			result.push(PageRangeItem::Number(number));
			previous = number;
		}
		result
	}
}

/// The items of one page plus their position in the whole collection
#[derive(Debug, Clone, PartialEq)]
pub struct PageSlice<T> {
	items: Vec<T>,
	number: usize,
	rows: usize,
	total_entries: usize,
}

impl<T> PageSlice<T> {
	/// Creates a slice from already ordered and sliced items
	pub fn new(items: Vec<T>, number: usize, rows: usize, total_entries: usize) -> Self {
		Self {
			items,
			number,
			rows,
			total_entries,
		}
	}

	/// Items on this page, in display order
	pub fn items(&self) -> &[T] {
		&self.items
	}

	/// Consumes the slice and returns its items
	pub fn into_items(self) -> Vec<T> {
		self.items
	}

	/// Iterates over the items on this page
	pub fn iter(&self) -> std::slice::Iter<'_, T> {
		self.items.iter()
	}

	/// Number of items on this page
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Returns true if this page has no items
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Returns the position of this slice in the collection
	pub fn info(&self) -> SliceInfo {
		SliceInfo {
			number: self.number,
			rows: self.rows,
			total_entries: self.total_entries,
			len: self.items.len(),
		}
	}
}

impl<'a, T> IntoIterator for &'a PageSlice<T> {
	type Item = &'a T;
	type IntoIter = std::slice::Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.iter()
	}
}

/// A collection that can order itself by a named column and cut out one page
///
/// Database-backed collections implement this by issuing an ordered,
/// limited query. Slices and vectors of [`Record`]s implement it in memory.
pub trait Orderable {
	/// Type of the items in the collection
	type Item;

	/// Orders the collection by `clause` and returns page `number` of size
	/// `rows` (1-indexed)
	fn order_and_page(
		&self,
		clause: &OrderClause,
		number: usize,
		rows: usize,
	) -> Result<PageSlice<Self::Item>>;
}

impl<T: Record + Clone> Orderable for [T] {
	type Item = T;

	fn order_and_page(
		&self,
		clause: &OrderClause,
		number: usize,
		rows: usize,
	) -> Result<PageSlice<T>> {
		let mut ordered: Vec<&T> = self.iter().collect();
		let key = |item: &&T| item.field(clause.column()).unwrap_or(FieldValue::Null);
		match clause.direction() {
			SortDirection::Asc => ordered.sort_by_cached_key(key),
			SortDirection::Desc => ordered.sort_by_cached_key(|item| Reverse(key(item))),
		}

		let start = number.saturating_sub(1).saturating_mul(rows);
		let items: Vec<T> = ordered.into_iter().skip(start).take(rows).cloned().collect();
		tracing::debug!(
			clause = %clause,
			number,
			rows,
			total = self.len(),
			returned = items.len(),
			"Ordered and paged in-memory collection"
		);
		Ok(PageSlice::new(items, number, rows, self.len()))
	}
}

impl<T: Record + Clone> Orderable for Vec<T> {
	type Item = T;

	fn order_and_page(
		&self,
		clause: &OrderClause,
		number: usize,
		rows: usize,
	) -> Result<PageSlice<T>> {
		self.as_slice().order_and_page(clause, number, rows)
	}
}

/// A [`Page`] bound to a collection
///
/// The collection and the page are borrowed. Every call to
/// [`DataPage::data`] asks the collection again; nothing is cached.
pub struct DataPage<'a, C: Orderable + ?Sized> {
	collection: &'a C,
	page: &'a Page,
}

impl<'a, C: Orderable + ?Sized> DataPage<'a, C> {
	/// Binds `page` to `collection`
	pub fn new(collection: &'a C, page: &'a Page) -> Self {
		Self { collection, page }
	}

	/// The page this view was created with
	pub fn page(&self) -> &'a Page {
		self.page
	}

	/// Orders the collection by the page's sort state and returns its slice
	///
	/// # Errors
	///
	/// Propagates any error reported by the collection.
	pub fn data(&self) -> Result<PageSlice<C::Item>> {
		self.collection
			.order_and_page(&self.page.order_clause(), self.page.number(), self.page.rows())
	}
}

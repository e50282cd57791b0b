//! Pagination and sort state for paginated tables
//!
//! This crate holds the request-scoped state model behind a sortable,
//! paginated table: which page is shown, how many rows it has, and which
//! column it is ordered by. It also binds that state to a collection and
//! produces the ordered, sliced data for the current page.
//!
//! # Features
//!
//! - **Page**: Immutable pagination and sort state with validated construction
//! - **PageParams**: Conversion between [`Page`] and `?page=N&per_page=N&sort_column=..&sort_direction=..`
//! - **DataPage**: Delegates ordering and slicing to any [`Orderable`] collection
//! - **Record**: Explicit field access used for in-memory ordering and default cell rendering
//!
//! # Example
//!
//! ```rust
//! use paginated_table_core::{DataPage, FieldValue, Page, Record, SortDirection};
//!
//! #[derive(Clone)]
//! struct User {
//!     name: String,
//! }
//!
//! impl Record for User {
//!     fn field(&self, name: &str) -> Option<FieldValue> {
//!         match name {
//!             "name" => Some(self.name.as_str().into()),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let users: Vec<User> = ["Carol", "Alice", "Bob"]
//!     .into_iter()
//!     .map(|name| User { name: name.to_string() })
//!     .collect();
//!
//! let page = Page::builder()
//!     .rows(2)
//!     .sort_column("name")
//!     .sort_direction(SortDirection::Asc)
//!     .build()
//!     .unwrap();
//!
//! let slice = DataPage::new(&users, &page).data().unwrap();
//! let names: Vec<&str> = slice.iter().map(|u| u.name.as_str()).collect();
//! assert_eq!(names, ["Alice", "Bob"]);
//! assert_eq!(slice.info().total_pages(), 2);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod data_page;
pub mod error;
pub mod page;
pub mod params;
pub mod record;
pub mod settings;

// Re-exports for convenience
pub use data_page::{DataPage, OrderClause, Orderable, PageRangeItem, PageSlice, SliceInfo};
pub use error::{Result, TableError};
pub use page::{Page, PageBuilder, SortDirection};
pub use params::{
	PAGE_PARAM, PER_PAGE_PARAM, PageParams, ParamMap, SORT_COLUMN_PARAM, SORT_DIRECTION_PARAM,
};
pub use record::{FieldValue, Record};
pub use settings::PageSettings;

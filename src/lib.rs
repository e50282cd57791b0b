//! # Paginated Table
//!
//! Sortable, paginated HTML tables driven by request parameters.
//!
//! A table call reads `page`, `per_page`, `sort_column` and `sort_direction`
//! from the current request, asks the collection for that page of ordered
//! rows, and renders the rows together with pagination controls. Header
//! links toggle the sort order; page links keep it.
//!
//! ## Feature Flags
//!
//! - `view` (default) - Table descriptions, HTML rendering and [`StandardView`](view::StandardView)
//!
//! Without `view` only the [`core`] state model is available, for hosts that
//! render tables themselves.
//!
//! ## Quick Start
//!
//! ```rust
//! # #[cfg(feature = "view")]
//! # {
//! use paginated_table::prelude::*;
//!
//! #[derive(Clone)]
//! struct Book {
//!     title: &'static str,
//!     year: i64,
//! }
//!
//! impl Record for Book {
//!     fn field(&self, name: &str) -> Option<FieldValue> {
//!         match name {
//!             "title" => Some(self.title.into()),
//!             "year" => Some(self.year.into()),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let books = vec![
//!     Book { title: "Dune", year: 1965 },
//!     Book { title: "Neuromancer", year: 1984 },
//!     Book { title: "Foundation", year: 1951 },
//! ];
//!
//! let view = StandardView::from_request("/books?sort_column=year&sort_direction=desc").unwrap();
//! let html = render_paginated_table(
//!     &view,
//!     &books,
//!     TableOptions::new().model_label("book"),
//!     &PageSettings::default(),
//!     |table| {
//!         table.column(Column::new("title"))?;
//!         table.column(Column::new("year"))?;
//!         Ok(())
//!     },
//! )
//! .unwrap();
//!
//! assert!(html.contains("Displaying all 3 books"));
//! assert!(html.find("Neuromancer") < html.find("Foundation"));
//! # }
//! ```

#![warn(missing_docs)]

pub mod core;

#[cfg(feature = "view")]
pub mod view;

pub use paginated_table_core::{
	DataPage, FieldValue, Orderable, Page, PageParams, PageSettings, PageSlice, Record, Result,
	SortDirection, TableError,
};

#[cfg(feature = "view")]
pub use paginated_table_view::{
	Column, HostView, RowOptions, StandardView, TableDescription, TableOptions, TableSettings,
	View, paginated_table, render_paginated_table,
};

/// Prelude module for convenient imports
///
/// Import everything commonly needed with:
/// ```rust
/// use paginated_table::prelude::*;
/// ```
pub mod prelude {
	// Core types - always available
	pub use crate::core::{
		DataPage, FieldValue, OrderClause, Orderable, Page, PageParams, PageSettings, PageSlice,
		ParamMap, Record, Result, SliceInfo, SortDirection, TableError,
	};

	// External
	pub use serde::{Deserialize, Serialize};

	#[cfg(feature = "view")]
	pub use crate::view::{
		Attributes, ChromeSettings, Column, ElementView, HostView, IntoView, LinkOptions,
		LinkRenderer, PageLinkRenderer, RowDescription, RowOptions, StandardView,
		TableDescription, TableOptions, TableSettings, View, paginated_table,
		render_paginated_table,
	};
}

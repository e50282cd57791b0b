//! Table descriptions and HTML rendering
//!
//! This module re-exports `paginated-table-view`.
//!
//! ## Example
//!
//! ```rust
//! use paginated_table::prelude::*;
//! use std::collections::BTreeMap;
//!
//! type Row = BTreeMap<String, FieldValue>;
//!
//! let rows: Vec<Row> = ["b", "a"]
//!     .into_iter()
//!     .map(|name| Row::from([("name".to_string(), FieldValue::from(name))]))
//!     .collect();
//!
//! let view = StandardView::from_request("/rows?sort_column=name").unwrap();
//! let html = render_paginated_table(&view, &rows, TableOptions::new(), &PageSettings::default(), |table| {
//!     table.column(Column::new("name"))?;
//!     Ok(())
//! })
//! .unwrap();
//!
//! assert!(html.contains("<tbody><tr><td>a</td></tr><tr><td>b</td></tr></tbody>"));
//! ```

pub use paginated_table_view::*;

//! Pagination and sort state
//!
//! This module re-exports `paginated-table-core`: the [`Page`] model, request
//! parameter conversion through [`PageParams`], and [`DataPage`], which asks
//! an [`Orderable`] collection for the ordered rows of the current page.

pub use paginated_table_core::*;

//! Table description and HTML rendering for paginated tables
//!
//! This crate turns one page of data into a sortable, paginated HTML table.
//! Columns are declared with a [`TableDescription`]; the page, page size and
//! sort order come from the request parameters of a [`HostView`]. Header
//! cells of sortable columns link to the same table sorted by that column,
//! and pagination chrome links to the other pages while keeping the sort
//! order.
//!
//! ## Architecture
//!
//! - [`markup`]: the [`View`] tree every renderer produces, with HTML serialization
//! - [`host`]: the [`HostView`] integration trait and the ready-made [`StandardView`]
//! - [`description`]: [`TableDescription`], [`RowDescription`] and [`Column`]
//! - [`link_renderer`]: sort and page links for the current page
//! - [`renders_table`]: the rendering pass over description and data
//! - [`helpers`]: the [`paginated_table`] entry point
//! - [`config`]: settings loaded from TOML
//!
//! ## Example
//!
//! ```rust
//! use paginated_table_core::{FieldValue, Record};
//! use paginated_table_view::{Column, StandardView, TableOptions, config::TableSettings, render_paginated_table};
//!
//! #[derive(Clone)]
//! struct User {
//!     id: i64,
//!     email: String,
//! }
//!
//! impl Record for User {
//!     fn field(&self, name: &str) -> Option<FieldValue> {
//!         match name {
//!             "id" => Some(self.id.into()),
//!             "email" => Some(self.email.as_str().into()),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let users: Vec<User> = (1..=3)
//!     .map(|id| User { id, email: format!("user{id}@example.com") })
//!     .collect();
//!
//! let settings = TableSettings::from_toml_str("[page]\ndefault_rows = 10\n").unwrap();
//! let view = StandardView::from_request("/users?sort_direction=desc")
//!     .unwrap()
//!     .with_chrome(settings.chrome.clone());
//!
//! let html = render_paginated_table(&view, &users, TableOptions::new(), &settings.page, |table| {
//!     table.column(Column::new("id"))?;
//!     table.column(Column::with_renderer("email", |user: &User| user.email.to_uppercase()).sortable(false))?;
//!     Ok(())
//! })
//! .unwrap();
//!
//! assert!(html.starts_with("<div class=\"pagination\"><div class=\"header\">"));
//! assert!(html.contains("<td>3</td><td>USER3@EXAMPLE.COM</td>"));
//! assert!(html.contains("<th>Email</th>"));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod description;
pub mod helpers;
pub mod host;
pub mod link_renderer;
pub mod markup;
pub mod renders_table;

pub use config::{ChromeSettings, TableSettings};
pub use description::{Column, RowDescription, RowOptions, TableDescription, TableOptions, title_case};
pub use helpers::{paginated_table, render_paginated_table};
pub use host::{HostView, PageLinkRenderer, StandardView};
pub use link_renderer::{LinkOptions, LinkRenderer, REMOTE_ATTR};
pub use markup::{Attributes, ElementView, IntoView, View};
pub use renders_table::RendersTable;

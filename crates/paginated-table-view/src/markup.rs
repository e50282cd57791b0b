//! Markup tree and HTML serialization
//!
//! Rendering produces a [`View`] tree rather than strings so that host views
//! and tests can inspect the structure before it is serialized with
//! [`View::render_to_string`].

use std::borrow::Cow;

type AttrName = Cow<'static, str>;
type AttrValue = Cow<'static, str>;

/// Ordered HTML attributes
///
/// Setting an attribute that is already present replaces its value in place,
/// keeping the original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(AttrName, AttrValue)>);

impl Attributes {
	/// Creates an empty attribute list
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the list with `name` set to `value`
	pub fn with(mut self, name: impl Into<AttrName>, value: impl Into<AttrValue>) -> Self {
		self.set(name, value);
		self
	}

	/// Shorthand for a list holding only a `class` attribute
	pub fn class(class: impl Into<AttrValue>) -> Self {
		Self::new().with("class", class)
	}

	/// Sets `name` to `value`
	pub fn set(&mut self, name: impl Into<AttrName>, value: impl Into<AttrValue>) {
		let name = name.into();
		let value = value.into();
		match self.0.iter_mut().find(|(existing, _)| *existing == name) {
			Some(entry) => entry.1 = value,
			None => self.0.push((name, value)),
		}
	}

	/// Returns the value of `name`
	pub fn get(&self, name: &str) -> Option<&str> {
		self.0
			.iter()
			.find(|(existing, _)| existing == name)
			.map(|(_, value)| value.as_ref())
	}

	/// Removes `name` and returns its value
	pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
		let index = self.0.iter().position(|(existing, _)| existing == name)?;
		Some(self.0.remove(index).1)
	}

	/// Iterates over the attributes in insertion order
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(name, value)| (name.as_ref(), value.as_ref()))
	}

	/// Number of attributes
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true if there are no attributes
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl<N, V> FromIterator<(N, V)> for Attributes
where
	N: Into<AttrName>,
	V: Into<AttrValue>,
{
	fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
		let mut attrs = Self::new();
		for (name, value) in iter {
			attrs.set(name, value);
		}
		attrs
	}
}

/// Renderable content
#[derive(Debug, Clone, PartialEq)]
pub enum View {
	/// An element.
	Element(ElementView),
	/// Escaped text.
	Text(Cow<'static, str>),
	/// Several views without a wrapper element.
	Fragment(Vec<View>),
	/// Renders nothing.
	Empty,
}

/// An element in the view tree
#[derive(Debug, Clone, PartialEq)]
pub struct ElementView {
	tag: Cow<'static, str>,
	attrs: Attributes,
	children: Vec<View>,
	is_void: bool,
}

impl ElementView {
	/// Creates a new element view.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		let tag = tag.into();
		let is_void = matches!(
			tag.as_ref(),
			"area"
				| "base" | "br"
				| "col" | "embed"
				| "hr" | "img"
				| "input" | "link"
				| "meta" | "source"
				| "track" | "wbr"
		);
		Self {
			tag,
			attrs: Attributes::new(),
			children: Vec::new(),
			is_void,
		}
	}

	/// Sets an attribute.
	pub fn attr(mut self, name: impl Into<AttrName>, value: impl Into<AttrValue>) -> Self {
		self.attrs.set(name, value);
		self
	}

	/// Sets every attribute of `attrs`.
	pub fn attrs(mut self, attrs: Attributes) -> Self {
		for (name, value) in attrs.0 {
			self.attrs.set(name, value);
		}
		self
	}

	/// Adds a child view.
	pub fn child(mut self, child: impl IntoView) -> Self {
		match child.into_view() {
			View::Empty => {}
			View::Fragment(views) => self.children.extend(views),
			view => self.children.push(view),
		}
		self
	}

	/// Adds multiple child views.
	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoView>) -> Self {
		for child in children {
			self = self.child(child);
		}
		self
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the attributes.
	pub fn attributes(&self) -> &Attributes {
		&self.attrs
	}

	/// Returns the value of one attribute.
	pub fn get_attr(&self, name: &str) -> Option<&str> {
		self.attrs.get(name)
	}

	/// Returns the child views.
	pub fn child_views(&self) -> &[View] {
		&self.children
	}

	/// Returns the child elements, skipping text.
	pub fn child_elements(&self) -> impl Iterator<Item = &ElementView> {
		self.children.iter().filter_map(View::as_element)
	}

	/// Returns whether this is a void element.
	pub fn is_void(&self) -> bool {
		self.is_void
	}
}

impl View {
	/// Creates an element view.
	pub fn element(tag: impl Into<Cow<'static, str>>) -> ElementView {
		ElementView::new(tag)
	}

	/// Creates a text view.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(content.into())
	}

	/// Creates a fragment view.
	pub fn fragment(children: impl IntoIterator<Item = impl IntoView>) -> Self {
		Self::Fragment(children.into_iter().map(|c| c.into_view()).collect())
	}

	/// Creates an empty view.
	pub fn empty() -> Self {
		Self::Empty
	}

	/// Returns the element if this view is one.
	pub fn as_element(&self) -> Option<&ElementView> {
		match self {
			Self::Element(el) => Some(el),
			_ => None,
		}
	}

	/// Returns the unescaped text of this view and all its descendants.
	pub fn text_content(&self) -> String {
		let mut output = String::new();
		self.text_content_inner(&mut output);
		output
	}

	fn text_content_inner(&self, output: &mut String) {
		match self {
			View::Element(el) => {
				for child in el.child_views() {
					child.text_content_inner(output);
				}
			}
			View::Text(text) => output.push_str(text),
			View::Fragment(children) => {
				for child in children {
					child.text_content_inner(output);
				}
			}
			View::Empty => {}
		}
	}

	/// Renders the view to an HTML string.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_to_string_inner(&mut output);
		output
	}

	fn render_to_string_inner(&self, output: &mut String) {
		match self {
			View::Element(el) => {
				output.push('<');
				output.push_str(el.tag_name());

				for (name, value) in el.attrs.iter() {
					output.push(' ');
					output.push_str(name);
					output.push_str("=\"");
					output.push_str(&html_escape(value));
					output.push('"');
				}

				if el.is_void() {
					output.push_str(" />");
				} else {
					output.push('>');
					for child in el.child_views() {
						child.render_to_string_inner(output);
					}
					output.push_str("</");
					output.push_str(el.tag_name());
					output.push('>');
				}
			}
			View::Text(text) => {
				output.push_str(&html_escape(text));
			}
			View::Fragment(children) => {
				for child in children {
					child.render_to_string_inner(output);
				}
			}
			View::Empty => {}
		}
	}
}

/// Trait for types that can be converted into a View.
pub trait IntoView {
	/// Converts self into a View.
	fn into_view(self) -> View;
}

impl IntoView for View {
	fn into_view(self) -> View {
		self
	}
}

impl IntoView for ElementView {
	fn into_view(self) -> View {
		View::Element(self)
	}
}

impl IntoView for String {
	fn into_view(self) -> View {
		View::Text(Cow::Owned(self))
	}
}

impl IntoView for &'static str {
	fn into_view(self) -> View {
		View::Text(Cow::Borrowed(self))
	}
}

impl<T: IntoView> IntoView for Option<T> {
	fn into_view(self) -> View {
		match self {
			Some(v) => v.into_view(),
			None => View::Empty,
		}
	}
}

impl<T: IntoView> IntoView for Vec<T> {
	fn into_view(self) -> View {
		View::Fragment(self.into_iter().map(|v| v.into_view()).collect())
	}
}

impl IntoView for () {
	fn into_view(self) -> View {
		View::Empty
	}
}

/// Escapes HTML special characters.
fn html_escape(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '<', '>', '"', '\'']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		for c in s.chars() {
			match c {
				'&' => escaped.push_str("&amp;"),
				'<' => escaped.push_str("&lt;"),
				'>' => escaped.push_str("&gt;"),
				'"' => escaped.push_str("&quot;"),
				'\'' => escaped.push_str("&#x27;"),
				_ => escaped.push(c),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_attributes_replace_in_place() {
		let attrs = Attributes::new()
			.with("class", "a")
			.with("href", "/x")
			.with("class", "b");
		let pairs: Vec<_> = attrs.iter().collect();
		assert_eq!(pairs, vec![("class", "b"), ("href", "/x")]);
	}

	#[test]
	fn test_attributes_remove() {
		let mut attrs = Attributes::class("current").with("href", "/x");
		assert_eq!(attrs.remove("href").as_deref(), Some("/x"));
		assert_eq!(attrs.remove("href"), None);
		assert_eq!(attrs.len(), 1);
	}

	#[test]
	fn test_render_element_with_children() {
		let view = ElementView::new("div")
			.attr("class", "info")
			.child("Hello, ")
			.child(ElementView::new("strong").child("World"))
			.into_view();
		assert_eq!(
			view.render_to_string(),
			"<div class=\"info\">Hello, <strong>World</strong></div>"
		);
	}

	#[test]
	fn test_render_void_element() {
		assert_eq!(ElementView::new("br").into_view().render_to_string(), "<br />");
	}

	#[test]
	fn test_render_escapes_text_and_attributes() {
		let view = ElementView::new("a")
			.attr("href", "/users?page=2&sort_column=name")
			.child("<script>alert('x')</script>")
			.into_view();
		assert_eq!(
			view.render_to_string(),
			"<a href=\"/users?page=2&amp;sort_column=name\">&lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt;</a>"
		);
	}

	#[test]
	fn test_fragments_are_flattened_into_children() {
		let el = ElementView::new("tr")
			.child(View::fragment(["a", "b"]))
			.child(View::empty());
		assert_eq!(el.child_views().len(), 2);
	}

	#[test]
	fn test_text_content() {
		let view = ElementView::new("p")
			.child("a & ")
			.child(ElementView::new("em").child("b"))
			.into_view();
		assert_eq!(view.text_content(), "a & b");
	}
}

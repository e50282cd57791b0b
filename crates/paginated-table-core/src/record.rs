//! Field access for table data
//!
//! Table rows are read through [`Record::field`] instead of reflection. The
//! same accessor drives in-memory ordering and default cell rendering.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// A single field value read from a record
///
/// Values are totally ordered: `Null < Bool < numbers < Text`. Integers and
/// floats compare numerically with each other.
#[derive(Debug, Clone)]
pub enum FieldValue {
	/// Missing or null value
	Null,
	/// Boolean value
	Bool(bool),
	/// Integer value
	Integer(i64),
	/// Floating point value
	Float(f64),
	/// Text value
	Text(String),
}

impl FieldValue {
	fn rank(&self) -> u8 {
		match self {
			Self::Null => 0,
			Self::Bool(_) => 1,
			Self::Integer(_) | Self::Float(_) => 2,
			Self::Text(_) => 3,
		}
	}
}

impl Ord for FieldValue {
	fn cmp(&self, other: &Self) -> Ordering {
		match (self, other) {
			(Self::Bool(a), Self::Bool(b)) => a.cmp(b),
			(Self::Integer(a), Self::Integer(b)) => a.cmp(b),
			(Self::Float(a), Self::Float(b)) => a.partial_cmp(b).unwrap_or_else(|| a.total_cmp(b)),
			(Self::Integer(a), Self::Float(b)) => cmp_integer_float(*a, *b),
			(Self::Float(a), Self::Integer(b)) => cmp_integer_float(*b, *a).reverse(),
			(Self::Text(a), Self::Text(b)) => a.cmp(b),
			_ => self.rank().cmp(&other.rank()),
		}
	}
}

/// Compares an integer with a float by exact value
///
/// NaN sorts by its sign bit, above or below every number.
fn cmp_integer_float(integer: i64, float: f64) -> Ordering {
	// 2^63, the first float past i64::MAX
	const LIMIT: f64 = 9_223_372_036_854_775_808.0;

	if float.is_nan() {
		return (integer as f64).total_cmp(&float);
	}
	if float >= LIMIT {
		return Ordering::Less;
	}
	if float < -LIMIT {
		return Ordering::Greater;
	}
	let floor = float.floor();
	match integer.cmp(&(floor as i64)) {
		Ordering::Equal if float > floor => Ordering::Less,
		ordering => ordering,
	}
}

impl PartialOrd for FieldValue {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl PartialEq for FieldValue {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

impl Eq for FieldValue {}

impl fmt::Display for FieldValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Null => Ok(()),
			Self::Bool(value) => write!(f, "{value}"),
			Self::Integer(value) => write!(f, "{value}"),
			Self::Float(value) => write!(f, "{value}"),
			Self::Text(value) => f.write_str(value),
		}
	}
}

impl From<String> for FieldValue {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<&str> for FieldValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<bool> for FieldValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<i32> for FieldValue {
	fn from(value: i32) -> Self {
		Self::Integer(i64::from(value))
	}
}

impl From<i64> for FieldValue {
	fn from(value: i64) -> Self {
		Self::Integer(value)
	}
}

impl From<u32> for FieldValue {
	fn from(value: u32) -> Self {
		Self::Integer(i64::from(value))
	}
}

impl From<f64> for FieldValue {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Null, Into::into)
	}
}

/// Named field access on a table row
///
/// # Example
///
/// ```rust
/// use paginated_table_core::{FieldValue, Record};
///
/// struct Book {
///     title: String,
///     pages: i32,
/// }
///
/// impl Record for Book {
///     fn field(&self, name: &str) -> Option<FieldValue> {
///         match name {
///             "title" => Some(self.title.as_str().into()),
///             "pages" => Some(self.pages.into()),
///             _ => None,
///         }
///     }
/// }
///
/// let book = Book { title: "Dune".to_string(), pages: 412 };
/// assert_eq!(book.field("pages"), Some(FieldValue::Integer(412)));
/// assert_eq!(book.field("author"), None);
/// ```
pub trait Record {
	/// Returns the value of the field called `name`, or `None` if the record
	/// has no such field
	fn field(&self, name: &str) -> Option<FieldValue>;
}

impl<R: Record + ?Sized> Record for &R {
	fn field(&self, name: &str) -> Option<FieldValue> {
		(**self).field(name)
	}
}

impl Record for BTreeMap<String, FieldValue> {
	fn field(&self, name: &str) -> Option<FieldValue> {
		self.get(name).cloned()
	}
}

impl Record for HashMap<String, FieldValue> {
	fn field(&self, name: &str) -> Option<FieldValue> {
		self.get(name).cloned()
	}
}

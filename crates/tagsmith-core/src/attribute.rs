//! Attribute values.

use std::borrow::Cow;

use tagsmith_escape::{Escape, Markup};

/// The value stored under an attribute name.
///
/// [`Null`](AttributeValue::Null) and `Bool(true)` render as a bare attribute
/// name (`<input disabled />`). Everything else renders as `name="value"`
/// with the value escaped, except [`Markup`] which is already safe.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum AttributeValue {
	/// Present without a value.
	Null,
	/// A boolean flag.
	///
	/// # Notes
	///
	/// `Bool(false)` stored with [`Tag::set_attribute`](crate::Tag::set_attribute)
	/// renders as `name="false"`, which browsers still treat as present for
	/// boolean attributes such as `disabled`. Use
	/// [`Tag::set_or_remove_attribute`](crate::Tag::set_or_remove_attribute)
	/// to drop the attribute instead.
	Bool(bool),
	/// Plain text, escaped on render.
	Text(String),
	/// An integer.
	Int(i64),
	/// A floating point number.
	Float(f64),
	/// Known-safe markup, emitted verbatim.
	Markup(Markup),
	/// A sequence of values, rendered one after another.
	List(Vec<AttributeValue>),
}

impl AttributeValue {
	/// Returns `true` if this value renders as a bare attribute name.
	pub fn is_bare(&self) -> bool {
		matches!(self, AttributeValue::Null | AttributeValue::Bool(true))
	}

	/// Returns `true` if this value counts as empty.
	///
	/// See [`is_empty_attribute_value`].
	pub fn is_empty(&self) -> bool {
		is_empty_attribute_value(self)
	}

	/// Coerces the value to unescaped text.
	///
	/// # Examples
	///
	/// ```
	/// use tagsmith_core::AttributeValue;
	///
	/// assert_eq!(AttributeValue::from("a&b").to_text(), "a&b");
	/// assert_eq!(AttributeValue::from(12).to_text(), "12");
	/// assert_eq!(AttributeValue::Null.to_text(), "");
	/// ```
	pub fn to_text(&self) -> Cow<'_, str> {
		match self {
			AttributeValue::Null => Cow::Borrowed(""),
			AttributeValue::Bool(value) => Cow::Owned(value.to_string()),
			AttributeValue::Text(text) => Cow::Borrowed(text),
			AttributeValue::Int(value) => Cow::Owned(value.to_string()),
			AttributeValue::Float(value) => Cow::Owned(value.to_string()),
			AttributeValue::Markup(markup) => Cow::Borrowed(markup.as_str()),
			AttributeValue::List(items) => Cow::Owned(
				items
					.iter()
					.map(|item| item.to_text())
					.collect::<String>(),
			),
		}
	}
}

/// The "empty" test used by
/// [`Tag::set_or_remove_attribute`](crate::Tag::set_or_remove_attribute).
///
/// A value is empty when it is `Null`, `Bool(false)`, an empty string, empty
/// markup, or an empty list. Numeric zero is **not** empty: `value="0"` is a
/// meaningful attribute.
///
/// # Examples
///
/// ```
/// use tagsmith_core::{AttributeValue, is_empty_attribute_value};
///
/// assert!(is_empty_attribute_value(&AttributeValue::Null));
/// assert!(is_empty_attribute_value(&AttributeValue::from("")));
/// assert!(is_empty_attribute_value(&AttributeValue::from(false)));
/// assert!(!is_empty_attribute_value(&AttributeValue::from(0)));
/// ```
pub fn is_empty_attribute_value(value: &AttributeValue) -> bool {
	match value {
		AttributeValue::Null => true,
		AttributeValue::Bool(flag) => !flag,
		AttributeValue::Text(text) => text.is_empty(),
		AttributeValue::Markup(markup) => markup.is_empty(),
		AttributeValue::List(items) => items.is_empty(),
		AttributeValue::Int(_) | AttributeValue::Float(_) => false,
	}
}

impl Escape for AttributeValue {
	fn escape_into(&self, out: &mut String) {
		match self {
			AttributeValue::Null => {}
			AttributeValue::Bool(value) => value.escape_into(out),
			AttributeValue::Text(text) => text.escape_into(out),
			AttributeValue::Int(value) => value.escape_into(out),
			AttributeValue::Float(value) => value.escape_into(out),
			AttributeValue::Markup(markup) => markup.escape_into(out),
			AttributeValue::List(items) => items.escape_into(out),
		}
	}
}

impl From<&str> for AttributeValue {
	fn from(value: &str) -> Self {
		AttributeValue::Text(value.to_string())
	}
}

impl From<String> for AttributeValue {
	fn from(value: String) -> Self {
		AttributeValue::Text(value)
	}
}

impl From<&String> for AttributeValue {
	fn from(value: &String) -> Self {
		AttributeValue::Text(value.clone())
	}
}

impl From<Cow<'_, str>> for AttributeValue {
	fn from(value: Cow<'_, str>) -> Self {
		AttributeValue::Text(value.into_owned())
	}
}

impl From<bool> for AttributeValue {
	fn from(value: bool) -> Self {
		AttributeValue::Bool(value)
	}
}

impl From<Markup> for AttributeValue {
	fn from(value: Markup) -> Self {
		AttributeValue::Markup(value)
	}
}

impl From<f32> for AttributeValue {
	fn from(value: f32) -> Self {
		AttributeValue::Float(f64::from(value))
	}
}

impl From<f64> for AttributeValue {
	fn from(value: f64) -> Self {
		AttributeValue::Float(value)
	}
}

impl<T: Into<AttributeValue>> From<Option<T>> for AttributeValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(AttributeValue::Null, Into::into)
	}
}

impl<T: Into<AttributeValue>> From<Vec<T>> for AttributeValue {
	fn from(values: Vec<T>) -> Self {
		AttributeValue::List(values.into_iter().map(Into::into).collect())
	}
}

macro_rules! impl_from_lossless_int {
	($($ty:ty),* $(,)?) => {
		$(
			impl From<$ty> for AttributeValue {
				fn from(value: $ty) -> Self {
					AttributeValue::Int(i64::from(value))
				}
			}
		)*
	};
}

macro_rules! impl_from_wide_int {
	($($ty:ty),* $(,)?) => {
		$(
			impl From<$ty> for AttributeValue {
				fn from(value: $ty) -> Self {
					i64::try_from(value)
						.map(AttributeValue::Int)
						.unwrap_or_else(|_| AttributeValue::Text(value.to_string()))
				}
			}
		)*
	};
}

impl_from_lossless_int!(i8, i16, i32, i64, u8, u16, u32);
impl_from_wide_int!(u64, usize, isize, i128, u128);

//! Known-safe markup wrapper.

use std::fmt;

/// A string of HTML that is known to be safe to emit without escaping.
///
/// `Markup` is produced by the escaping functions and by tag rendering. When a
/// `Markup` value is escaped again it passes through unchanged, so nested
/// rendered tags are never double-escaped.
///
/// There is deliberately no `From<String>` conversion: turning arbitrary text
/// into `Markup` has to be spelled out with [`Markup::from_trusted`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Markup(String);

impl Markup {
	/// Creates an empty `Markup`.
	pub fn new() -> Self {
		Self(String::new())
	}

	/// Wraps a string the caller vouches for as safe HTML.
	///
	/// # Examples
	///
	/// ```
	/// use tagsmith_escape::Markup;
	///
	/// let safe = Markup::from_trusted("<b>Bold</b>");
	/// assert_eq!(safe.as_str(), "<b>Bold</b>");
	/// ```
	pub fn from_trusted(html: impl Into<String>) -> Self {
		Self(html.into())
	}

	/// Returns the markup as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Consumes the wrapper and returns the underlying string.
	pub fn into_string(self) -> String {
		self.0
	}

	/// Returns `true` if the markup is the empty string.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Length of the markup in bytes.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Appends another piece of safe markup.
	///
	/// # Examples
	///
	/// ```
	/// use tagsmith_escape::{Markup, escape};
	///
	/// let mut html = Markup::from_trusted("<p>");
	/// html.push_markup(&escape("a & b"));
	/// html.push_markup(&Markup::from_trusted("</p>"));
	/// assert_eq!(html, "<p>a &amp; b</p>");
	/// ```
	pub fn push_markup(&mut self, other: &Markup) {
		self.0.push_str(&other.0);
	}

	pub(crate) fn buffer_mut(&mut self) -> &mut String {
		&mut self.0
	}
}

impl fmt::Display for Markup {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for Markup {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl From<Markup> for String {
	fn from(markup: Markup) -> Self {
		markup.0
	}
}

impl PartialEq<str> for Markup {
	fn eq(&self, other: &str) -> bool {
		self.0 == other
	}
}

impl PartialEq<&str> for Markup {
	fn eq(&self, other: &&str) -> bool {
		self.0 == *other
	}
}

impl PartialEq<String> for Markup {
	fn eq(&self, other: &String) -> bool {
		&self.0 == other
	}
}

impl FromIterator<Markup> for Markup {
	fn from_iter<I: IntoIterator<Item = Markup>>(iter: I) -> Self {
		let mut out = Markup::new();
		for item in iter {
			out.push_markup(&item);
		}
		out
	}
}

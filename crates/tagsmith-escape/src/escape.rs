//! Escaping of values into [`Markup`].

use std::borrow::Cow;

use crate::Markup;

const SPECIAL_CHARS: [char; 5] = ['&', '<', '>', '"', '\''];

/// Escapes HTML special characters in a string.
///
/// - `&` → `&amp;`
/// - `<` → `&lt;`
/// - `>` → `&gt;`
/// - `"` → `&quot;`
/// - `'` → `&#x27;`
///
/// Returns a borrowed reference if no escaping is needed.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// use tagsmith_escape::escape_str;
///
/// assert_eq!(escape_str("Hello"), Cow::Borrowed("Hello"));
/// assert_eq!(escape_str("5 < 10 & 10 > 5"), "5 &lt; 10 &amp; 10 &gt; 5");
/// ```
pub fn escape_str(text: &str) -> Cow<'_, str> {
	if text.contains(SPECIAL_CHARS) {
		let mut escaped = String::with_capacity(text.len() + 10);
		push_escaped(text, &mut escaped);
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(text)
	}
}

fn push_escaped(text: &str, out: &mut String) {
	for ch in text.chars() {
		push_escaped_char(ch, out);
	}
}

fn push_escaped_char(ch: char, out: &mut String) {
	match ch {
		'&' => out.push_str("&amp;"),
		'<' => out.push_str("&lt;"),
		'>' => out.push_str("&gt;"),
		'"' => out.push_str("&quot;"),
		'\'' => out.push_str("&#x27;"),
		_ => out.push(ch),
	}
}

/// A value that knows how to write itself into HTML.
///
/// Plain values are escaped; [`Markup`] is written verbatim. Sequences write
/// their items one after another with no separator.
pub trait Escape {
	/// Appends the escaped form of `self` to `out`.
	fn escape_into(&self, out: &mut String);
}

impl Escape for str {
	fn escape_into(&self, out: &mut String) {
		push_escaped(self, out);
	}
}

impl Escape for String {
	fn escape_into(&self, out: &mut String) {
		push_escaped(self, out);
	}
}

impl Escape for Cow<'_, str> {
	fn escape_into(&self, out: &mut String) {
		push_escaped(self, out);
	}
}

impl Escape for char {
	fn escape_into(&self, out: &mut String) {
		push_escaped_char(*self, out);
	}
}

impl Escape for Markup {
	fn escape_into(&self, out: &mut String) {
		out.push_str(self.as_str());
	}
}

impl<T: Escape + ?Sized> Escape for &T {
	fn escape_into(&self, out: &mut String) {
		(**self).escape_into(out);
	}
}

impl<T: Escape + ?Sized> Escape for Box<T> {
	fn escape_into(&self, out: &mut String) {
		(**self).escape_into(out);
	}
}

impl<T: Escape> Escape for Option<T> {
	fn escape_into(&self, out: &mut String) {
		if let Some(value) = self {
			value.escape_into(out);
		}
	}
}

impl<T: Escape> Escape for [T] {
	fn escape_into(&self, out: &mut String) {
		for item in self {
			item.escape_into(out);
		}
	}
}

impl<T: Escape, const N: usize> Escape for [T; N] {
	fn escape_into(&self, out: &mut String) {
		self.as_slice().escape_into(out);
	}
}

impl<T: Escape> Escape for Vec<T> {
	fn escape_into(&self, out: &mut String) {
		self.as_slice().escape_into(out);
	}
}

macro_rules! impl_escape_for_display {
	($($ty:ty),* $(,)?) => {
		$(
			impl Escape for $ty {
				fn escape_into(&self, out: &mut String) {
					push_escaped(&self.to_string(), out);
				}
			}
		)*
	};
}

impl_escape_for_display!(
	i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool,
);

/// Escapes a value, returning known-safe [`Markup`].
///
/// Values that are already [`Markup`] pass through unchanged.
///
/// # Examples
///
/// ```
/// use tagsmith_escape::{Markup, escape};
///
/// assert_eq!(escape("<script>alert('XSS')</script>"),
///            "&lt;script&gt;alert(&#x27;XSS&#x27;)&lt;/script&gt;");
/// assert_eq!(escape(&42), "42");
/// assert_eq!(escape(&Markup::from_trusted("<hr />")), "<hr />");
/// assert_eq!(escape(&vec!["<", ">"]), "&lt;&gt;");
/// ```
pub fn escape<T: Escape + ?Sized>(value: &T) -> Markup {
	let mut out = Markup::new();
	value.escape_into(out.buffer_mut());
	out
}

/// Escapes every item of a sequence and joins them with `separator`.
///
/// The separator goes through the same escaping as the items, so a plain
/// string separator is escaped while a [`Markup`] separator is kept as is.
///
/// # Examples
///
/// ```
/// use tagsmith_escape::{Markup, escape_join};
///
/// assert_eq!(escape_join(["a", "b"], ""), "ab");
/// assert_eq!(escape_join(["x", "y"], Markup::from_trusted("<br />")), "x<br />y");
/// assert_eq!(escape_join(["1", "2"], " & "), "1 &amp; 2");
/// ```
pub fn escape_join<I, S>(items: I, separator: S) -> Markup
where
	I: IntoIterator,
	I::Item: Escape,
	S: Escape,
{
	let mut out = Markup::new();
	let buffer = out.buffer_mut();
	for (index, item) in items.into_iter().enumerate() {
		if index > 0 {
			separator.escape_into(buffer);
		}
		item.escape_into(buffer);
	}
	out
}

//! Tag content: nodes, the content slot, and renderable producers.

use std::fmt;
use std::sync::Arc;

use tagsmith_escape::{Escape, Markup, escape_join};

use crate::error::TagResult;
use crate::tag::Tag;

/// Anything that can render itself to known-safe markup.
///
/// Implemented by [`Tag`] and [`Markup`]; wrap a closure with [`from_fn`] to
/// nest arbitrary producers as content.
pub trait ToHtml {
	/// Renders to markup that must not be escaped again.
	fn to_html(&self) -> TagResult<Markup>;
}

impl ToHtml for Markup {
	fn to_html(&self) -> TagResult<Markup> {
		Ok(self.clone())
	}
}

impl ToHtml for Tag {
	fn to_html(&self) -> TagResult<Markup> {
		self.render()
	}
}

/// A [`ToHtml`] producer backed by a closure. See [`from_fn`].
#[derive(Clone)]
pub struct FromFn<F>(F);

impl<F> ToHtml for FromFn<F>
where
	F: Fn() -> TagResult<Markup>,
{
	fn to_html(&self) -> TagResult<Markup> {
		(self.0)()
	}
}

impl<F> fmt::Debug for FromFn<F> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("FromFn").field(&"<closure>").finish()
	}
}

/// Turns a closure into a renderable content producer.
///
/// # Examples
///
/// ```
/// use tagsmith_core::{Node, Tag, from_fn};
/// use tagsmith_escape::escape;
///
/// let clock = Node::component(from_fn(|| Ok(escape("12:00 <noon>"))));
/// let tag = Tag::with_content("time", clock);
/// assert_eq!(tag.render().unwrap(), "<time>12:00 &lt;noon&gt;</time>");
/// ```
pub fn from_fn<F>(f: F) -> FromFn<F>
where
	F: Fn() -> TagResult<Markup>,
{
	FromFn(f)
}

/// A single content item.
#[derive(Clone)]
pub enum Node {
	/// Plain text, escaped on render.
	Text(String),
	/// Known-safe markup, emitted verbatim.
	Markup(Markup),
	/// A nested tag, rendered and emitted without re-escaping.
	Tag(Box<Tag>),
	/// Any other producer of renderable content.
	Component(Arc<dyn ToHtml + Send + Sync>),
}

impl Node {
	/// Creates a text node.
	pub fn text(text: impl Into<String>) -> Self {
		Node::Text(text.into())
	}

	/// Wraps a custom producer.
	pub fn component<T>(component: T) -> Self
	where
		T: ToHtml + Send + Sync + 'static,
	{
		Node::Component(Arc::new(component))
	}

	/// Returns the text if this is a text node.
	pub fn as_text(&self) -> Option<&str> {
		match self {
			Node::Text(text) => Some(text),
			_ => None,
		}
	}

	/// Returns the nested tag if this is a tag node.
	pub fn as_tag(&self) -> Option<&Tag> {
		match self {
			Node::Tag(tag) => Some(tag),
			_ => None,
		}
	}

	fn is_blank(&self) -> bool {
		match self {
			Node::Text(text) => text.is_empty(),
			Node::Markup(markup) => markup.is_empty(),
			Node::Tag(_) | Node::Component(_) => false,
		}
	}

	fn to_fragment(&self) -> TagResult<Fragment<'_>> {
		Ok(match self {
			Node::Text(text) => Fragment::Text(text),
			Node::Markup(markup) => Fragment::Safe(markup.clone()),
			Node::Tag(tag) => Fragment::Safe(tag.render()?),
			Node::Component(component) => Fragment::Safe(component.to_html()?),
		})
	}
}

impl fmt::Debug for Node {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Node::Text(text) => f.debug_tuple("Text").field(text).finish(),
			Node::Markup(markup) => f.debug_tuple("Markup").field(markup).finish(),
			Node::Tag(tag) => f.debug_tuple("Tag").field(tag).finish(),
			Node::Component(_) => f.debug_tuple("Component").field(&"<component>").finish(),
		}
	}
}

impl PartialEq for Node {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Node::Text(a), Node::Text(b)) => a == b,
			(Node::Markup(a), Node::Markup(b)) => a == b,
			(Node::Tag(a), Node::Tag(b)) => a == b,
			(Node::Component(a), Node::Component(b)) => Arc::ptr_eq(a, b),
			_ => false,
		}
	}
}

impl From<&str> for Node {
	fn from(text: &str) -> Self {
		Node::Text(text.to_string())
	}
}

impl From<String> for Node {
	fn from(text: String) -> Self {
		Node::Text(text)
	}
}

impl From<&String> for Node {
	fn from(text: &String) -> Self {
		Node::Text(text.clone())
	}
}

impl From<char> for Node {
	fn from(ch: char) -> Self {
		Node::Text(ch.to_string())
	}
}

impl From<Markup> for Node {
	fn from(markup: Markup) -> Self {
		Node::Markup(markup)
	}
}

impl From<Tag> for Node {
	fn from(tag: Tag) -> Self {
		Node::Tag(Box::new(tag))
	}
}

impl From<Box<Tag>> for Node {
	fn from(tag: Box<Tag>) -> Self {
		Node::Tag(tag)
	}
}

macro_rules! impl_node_from_display {
	($($ty:ty),* $(,)?) => {
		$(
			impl From<$ty> for Node {
				fn from(value: $ty) -> Self {
					Node::Text(value.to_string())
				}
			}
		)*
	};
}

impl_node_from_display!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, f32, f64);

/// A content item ready to be written: text still to escape, or safe markup.
enum Fragment<'a> {
	Text(&'a str),
	Safe(Markup),
}

impl Escape for Fragment<'_> {
	fn escape_into(&self, out: &mut String) {
		match self {
			Fragment::Text(text) => text.escape_into(out),
			Fragment::Safe(markup) => markup.escape_into(out),
		}
	}
}

/// The content slot of a tag: nothing, one item, or an ordered sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Content {
	/// No content.
	#[default]
	Empty,
	/// A single item.
	Single(Node),
	/// An ordered sequence of items.
	Sequence(Vec<Node>),
}

impl Content {
	/// Returns `true` if rendering the content produces nothing.
	///
	/// The empty slot, an empty sequence, and a single empty text or markup
	/// item all count as empty. A sequence holding empty items does not.
	pub fn is_empty(&self) -> bool {
		match self {
			Content::Empty => true,
			Content::Single(node) => node.is_blank(),
			Content::Sequence(nodes) => nodes.is_empty(),
		}
	}

	/// The content as a slice of items.
	pub fn as_slice(&self) -> &[Node] {
		match self {
			Content::Empty => &[],
			Content::Single(node) => std::slice::from_ref(node),
			Content::Sequence(nodes) => nodes,
		}
	}

	/// Converts the content into an owned sequence of items.
	pub fn into_vec(self) -> Vec<Node> {
		match self {
			Content::Empty => Vec::new(),
			Content::Single(node) => vec![node],
			Content::Sequence(nodes) => nodes,
		}
	}

	/// Renders every item, escaping text, and joins the results
	/// with no separator.
	pub fn render(&self) -> TagResult<Markup> {
		let fragments = self
			.as_slice()
			.iter()
			.map(Node::to_fragment)
			.collect::<TagResult<Vec<_>>>()?;
		Ok(escape_join(fragments, ""))
	}

	/// Concatenates the content into a single item.
	///
	/// A scalar is returned as is. A sequence made only of text joins into one
	/// text node; any other sequence is rendered into a single markup node so
	/// that text items are escaped and nested tags are not.
	pub fn joined(&self) -> TagResult<Node> {
		match self {
			Content::Empty => Ok(Node::Text(String::new())),
			Content::Single(node) => Ok(node.clone()),
			Content::Sequence(nodes) => {
				let texts: Option<Vec<&str>> = nodes.iter().map(Node::as_text).collect();
				match texts {
					Some(texts) => Ok(Node::Text(texts.concat())),
					None => self.render().map(Node::Markup),
				}
			}
		}
	}
}

/// Conversion into a [`Content`] slot.
///
/// Scalars become [`Content::Single`]; vectors and arrays become
/// [`Content::Sequence`].
pub trait IntoContent {
	/// Converts self into content.
	fn into_content(self) -> Content;
}

impl IntoContent for Content {
	fn into_content(self) -> Content {
		self
	}
}

impl IntoContent for Node {
	fn into_content(self) -> Content {
		Content::Single(self)
	}
}

impl<T: Into<Node>> IntoContent for Vec<T> {
	fn into_content(self) -> Content {
		Content::Sequence(self.into_iter().map(Into::into).collect())
	}
}

impl<T: Into<Node>, const N: usize> IntoContent for [T; N] {
	fn into_content(self) -> Content {
		Content::Sequence(self.into_iter().map(Into::into).collect())
	}
}

impl<T: IntoContent> IntoContent for Option<T> {
	fn into_content(self) -> Content {
		self.map_or(Content::Empty, IntoContent::into_content)
	}
}

macro_rules! impl_into_content_single {
	($($ty:ty),* $(,)?) => {
		$(
			impl IntoContent for $ty {
				fn into_content(self) -> Content {
					Content::Single(Node::from(self))
				}
			}
		)*
	};
}

impl_into_content_single!(
	&str, String, &String, char, Markup, Tag, Box<Tag>,
	i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, f32, f64,
);

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Content::Empty, true)]
	#[case(Content::Sequence(vec![]), true)]
	#[case("".into_content(), true)]
	#[case(Markup::new().into_content(), true)]
	#[case(vec![""].into_content(), false)]
	#[case("x".into_content(), false)]
	#[case(Tag::new("br").into_content(), false)]
	fn test_content_is_empty(#[case] content: Content, #[case] expected: bool) {
		assert_eq!(content.is_empty(), expected);
	}

	#[rstest]
	fn test_as_slice_normalizes_scalar() {
		let content = "x".into_content();
		assert_eq!(content.as_slice(), &[Node::text("x")]);
		assert!(Content::Empty.as_slice().is_empty());
	}

	#[rstest]
	fn test_render_escapes_text_but_not_tags() {
		let content = vec![Node::text("a < b"), Node::from(Tag::with_content("b", "c"))].into_content();
		assert_eq!(content.render().unwrap(), "a &lt; b<b>c</b>");
	}

	#[rstest]
	fn test_joined_text_sequence_stays_text() {
		let content = vec!["<a", "b>"].into_content();
		assert_eq!(content.joined().unwrap(), Node::text("<ab>"));
	}

	#[rstest]
	fn test_joined_mixed_sequence_becomes_markup() {
		let content = vec![Node::text("<"), Node::from(Tag::new("hr"))].into_content();
		assert_eq!(
			content.joined().unwrap(),
			Node::Markup(Markup::from_trusted("&lt;<hr />"))
		);
	}

	#[rstest]
	fn test_joined_scalar_is_returned_as_is() {
		let content = 5i32.into_content();
		assert_eq!(content.joined().unwrap(), Node::text("5"));
		assert_eq!(Content::Empty.joined().unwrap(), Node::text(""));
	}

	#[rstest]
	fn test_option_content() {
		assert_eq!(None::<&str>.into_content(), Content::Empty);
		assert_eq!(Some("x").into_content(), "x".into_content());
	}

	#[rstest]
	fn test_component_failure_propagates() {
		let failing = Node::component(from_fn(|| {
			Err(crate::TagError::Component("boom".to_string()))
		}));
		let content = vec![Node::text("ok"), failing].into_content();
		assert_eq!(
			content.render(),
			Err(crate::TagError::Component("boom".to_string()))
		);
	}

	#[rstest]
	fn test_component_equality_is_identity() {
		let node = Node::component(Markup::from_trusted("<i>"));
		let copy = node.clone();
		assert_eq!(node, copy);
		assert_ne!(node, Node::component(Markup::from_trusted("<i>")));
	}
}

//! The tag object model.

use std::borrow::Cow;
use std::fmt;

use indexmap::{IndexMap, IndexSet};
use tracing::trace;

use crate::attribute::{AttributeValue, is_empty_attribute_value};
use crate::class::ClassNames;
use crate::error::TagResult;
use crate::hook::PreRenderHook;
use crate::node::{Content, IntoContent, Node};

pub(crate) const CLASS_ATTRIBUTE: &str = "class";

/// What an attribute name maps to.
///
/// The `class` attribute is backed by the tag's class set; its entry only
/// records the position at which it is rendered.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum AttributeSlot {
	Value(AttributeValue),
	Classes,
}

/// A renderable HTML element.
///
/// A tag owns a fixed name, an ordered attribute map, an ordered class set and
/// a content slot. It can be mutated freely and rendered any number of times;
/// rendering never changes the tag.
///
/// # Example
///
/// ```
/// use tagsmith_core::Tag;
///
/// let mut item = Tag::new("li");
/// item.set_attribute("id", "first")
///     .add_class(["item", "active"])
///     .set_content("Fish & Chips");
///
/// assert_eq!(
///     item.render().unwrap(),
///     r#"<li id="first" class="item active">Fish &amp; Chips</li>"#
/// );
/// ```
#[derive(Clone)]
pub struct Tag {
	tag_name: Cow<'static, str>,
	pub(crate) attributes: IndexMap<String, AttributeSlot>,
	pub(crate) classes: IndexSet<String>,
	pub(crate) content: Content,
	pub(crate) pre_render: Option<PreRenderHook>,
}

impl Tag {
	/// Creates an empty tag.
	///
	/// The tag name is trusted and never escaped; it must not come from
	/// end-user input.
	pub fn new(tag_name: impl Into<Cow<'static, str>>) -> Self {
		Self {
			tag_name: tag_name.into(),
			attributes: IndexMap::new(),
			classes: IndexSet::new(),
			content: Content::Empty,
			pre_render: None,
		}
	}

	/// Creates a tag with initial content.
	pub fn with_content(tag_name: impl Into<Cow<'static, str>>, content: impl IntoContent) -> Self {
		let mut tag = Self::new(tag_name);
		tag.content = content.into_content();
		tag
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag_name
	}

	// Attributes

	/// Sets an attribute, overwriting any previous value.
	///
	/// An existing key keeps its position; a new key is appended. Setting
	/// `class` replaces the class set with the given names. Flag values
	/// (`Null`, `Bool`) carry no names and leave the class set unchanged.
	pub fn set_attribute(
		&mut self,
		key: impl Into<String>,
		value: impl Into<AttributeValue>,
	) -> &mut Self {
		let key = key.into();
		let value = value.into();
		if key == CLASS_ATTRIBUTE {
			if !matches!(value, AttributeValue::Null | AttributeValue::Bool(_)) {
				self.classes = class_tokens(&value).into_iter().collect();
			}
			self.attributes.entry(key).or_insert(AttributeSlot::Classes);
		} else {
			self.attributes.insert(key, AttributeSlot::Value(value));
		}
		self
	}

	/// Sets the attribute if `value` is non-empty, otherwise removes it.
	///
	/// Emptiness follows [`is_empty_attribute_value`].
	///
	/// # Examples
	///
	/// ```
	/// use tagsmith_core::Tag;
	///
	/// let mut input = Tag::new("input");
	/// input.set_attribute("id", "email");
	/// input.set_or_remove_attribute("id", "");
	/// assert!(!input.has_attribute("id"));
	///
	/// input.set_or_remove_attribute("value", 0);
	/// assert!(input.has_attribute("value"));
	/// ```
	pub fn set_or_remove_attribute(
		&mut self,
		key: impl Into<String>,
		value: impl Into<AttributeValue>,
	) -> &mut Self {
		let key = key.into();
		let value = value.into();
		if is_empty_attribute_value(&value) {
			self.remove_attribute(&key)
		} else {
			self.set_attribute(key, value)
		}
	}

	/// Removes an attribute; a no-op if it is absent.
	pub fn remove_attribute(&mut self, key: &str) -> &mut Self {
		if key == CLASS_ATTRIBUTE {
			self.classes.clear();
		}
		self.attributes.shift_remove(key);
		self
	}

	/// Returns the attribute value, or `default` if it is absent.
	pub fn get_attribute(&self, key: &str, default: impl Into<AttributeValue>) -> AttributeValue {
		self.attribute(key).unwrap_or_else(|| default.into())
	}

	/// Returns the attribute value if present.
	///
	/// `class` is reported as the space-joined class set, and only when the
	/// set is non-empty.
	pub fn attribute(&self, key: &str) -> Option<AttributeValue> {
		match self.attributes.get(key)? {
			AttributeSlot::Value(value) => Some(value.clone()),
			AttributeSlot::Classes => self.class_value(),
		}
	}

	/// Returns `true` if the attribute is present.
	pub fn has_attribute(&self, key: &str) -> bool {
		match self.attributes.get(key) {
			Some(AttributeSlot::Value(_)) => true,
			Some(AttributeSlot::Classes) => !self.classes.is_empty(),
			None => false,
		}
	}

	/// Replaces every attribute, including the class set.
	pub fn set_attributes<I, K, V>(&mut self, attributes: I) -> &mut Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<AttributeValue>,
	{
		self.attributes.clear();
		self.classes.clear();
		for (key, value) in attributes {
			self.set_attribute(key, value);
		}
		self
	}

	/// Merges attributes into the tag.
	///
	/// Each entry goes through [`set_or_remove_attribute`](Self::set_or_remove_attribute)
	/// when the key is absent, or when `overwrite_if_exists` is set. Existing
	/// keys are otherwise left alone.
	///
	/// # Examples
	///
	/// ```
	/// use tagsmith_core::{AttributeValue, Tag};
	///
	/// let mut button = Tag::new("button");
	/// button.set_attribute("type", "submit");
	///
	/// button.add_attributes([("type", "reset"), ("name", "go")], false);
	/// assert_eq!(button.get_attribute("type", AttributeValue::Null), AttributeValue::from("submit"));
	/// assert!(button.has_attribute("name"));
	///
	/// button.add_attributes([("type", "reset")], true);
	/// assert_eq!(button.get_attribute("type", AttributeValue::Null), AttributeValue::from("reset"));
	/// ```
	pub fn add_attributes<I, K, V>(&mut self, attributes: I, overwrite_if_exists: bool) -> &mut Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<AttributeValue>,
	{
		for (key, value) in attributes {
			let key = key.into();
			if overwrite_if_exists || !self.has_attribute(&key) {
				self.set_or_remove_attribute(key, value);
			}
		}
		self
	}

	/// Iterates over the attributes in render order.
	///
	/// The class set appears as a single `class` entry at its recorded
	/// position, and is skipped while empty.
	pub fn attributes(&self) -> impl Iterator<Item = (&str, Cow<'_, AttributeValue>)> + '_ {
		self.attributes
			.iter()
			.filter_map(move |(name, slot)| match slot {
				AttributeSlot::Value(value) => Some((name.as_str(), Cow::Borrowed(value))),
				AttributeSlot::Classes => self
					.class_value()
					.map(|value| (name.as_str(), Cow::Owned(value))),
			})
	}

	// Classes

	/// Adds one or more class names. Adding a name twice is a no-op.
	///
	/// # Examples
	///
	/// ```
	/// use tagsmith_core::Tag;
	///
	/// let mut div = Tag::new("div");
	/// div.add_class("a").add_class("a").add_class(["b", "c"]);
	/// assert_eq!(div.classes(), ["a", "b", "c"]);
	/// ```
	pub fn add_class(&mut self, names: impl Into<ClassNames>) -> &mut Self {
		let names = names.into();
		if names.is_empty() {
			return self;
		}
		self.classes.extend(names);
		if !self.attributes.contains_key(CLASS_ATTRIBUTE) {
			self.attributes
				.insert(CLASS_ATTRIBUTE.to_string(), AttributeSlot::Classes);
		}
		self
	}

	/// Removes one or more class names; absent names are ignored.
	pub fn remove_class(&mut self, names: impl Into<ClassNames>) -> &mut Self {
		for name in names.into() {
			self.classes.shift_remove(&name);
		}
		self
	}

	/// Returns `true` if the class is set.
	pub fn has_class(&self, name: &str) -> bool {
		self.classes.contains(name)
	}

	/// The class names in insertion order.
	pub fn classes(&self) -> Vec<&str> {
		self.classes.iter().map(String::as_str).collect()
	}

	fn class_value(&self) -> Option<AttributeValue> {
		if self.classes.is_empty() {
			None
		} else {
			let joined = self
				.classes
				.iter()
				.map(String::as_str)
				.collect::<Vec<_>>()
				.join(" ");
			Some(AttributeValue::Text(joined))
		}
	}

	// Content

	/// Replaces the content.
	pub fn set_content(&mut self, content: impl IntoContent) -> &mut Self {
		self.content = content.into_content();
		self
	}

	/// The content as a sequence of items.
	pub fn content(&self) -> &[Node] {
		self.content.as_slice()
	}

	/// The content slot as stored: empty, a single item, or a sequence.
	pub fn content_slot(&self) -> &Content {
		&self.content
	}

	/// The content concatenated into a single item.
	///
	/// See [`Content::joined`].
	pub fn joined_content(&self) -> TagResult<Node> {
		self.content.joined()
	}

	/// Appends content after the existing items.
	///
	/// The content slot becomes a sequence; a sequence argument contributes
	/// each of its items.
	///
	/// # Examples
	///
	/// ```
	/// use tagsmith_core::{Node, Tag};
	///
	/// let mut p = Tag::with_content("p", "b");
	/// p.append_content("c").prepend_content("a");
	/// assert_eq!(p.content(), [Node::text("a"), Node::text("b"), Node::text("c")]);
	/// ```
	pub fn append_content(&mut self, content: impl IntoContent) -> &mut Self {
		let mut items = std::mem::take(&mut self.content).into_vec();
		items.extend(content.into_content().into_vec());
		self.content = Content::Sequence(items);
		self
	}

	/// Inserts content before the existing items.
	///
	/// The content slot becomes a sequence; a sequence argument contributes
	/// each of its items, in order.
	pub fn prepend_content(&mut self, content: impl IntoContent) -> &mut Self {
		let mut items = content.into_content().into_vec();
		items.extend(std::mem::take(&mut self.content).into_vec());
		self.content = Content::Sequence(items);
		self
	}

	/// Removes all content.
	pub fn clear_content(&mut self) -> &mut Self {
		self.content = Content::Empty;
		self
	}

	/// Returns `true` if the content renders to something.
	pub fn has_content(&self) -> bool {
		!self.content.is_empty()
	}

	// Hooks

	/// Installs a hook that adjusts a copy of the tag before serialization.
	pub fn set_pre_render_hook(&mut self, hook: PreRenderHook) -> &mut Self {
		self.pre_render = Some(hook);
		self
	}

	/// Removes the pre-render hook.
	pub fn clear_pre_render_hook(&mut self) -> &mut Self {
		self.pre_render = None;
		self
	}

	/// Builder form of [`set_pre_render_hook`](Self::set_pre_render_hook).
	pub fn with_pre_render_hook(mut self, hook: PreRenderHook) -> Self {
		self.pre_render = Some(hook);
		self
	}

	pub(crate) fn prepared(&self) -> Cow<'_, Tag> {
		match &self.pre_render {
			Some(hook) => {
				let mut copy = self.clone();
				copy.pre_render = None;
				trace!(target: "tagsmith::render", tag = %self.tag_name, "applying pre-render hook");
				hook(&mut copy);
				Cow::Owned(copy)
			}
			None => Cow::Borrowed(self),
		}
	}

	// Copy

	/// Replaces this tag's content, attributes and classes with copies of
	/// `other`'s. The tag name and pre-render hook are kept.
	pub fn copy_from(&mut self, other: &Tag) -> &mut Self {
		self.content = other.content.clone();
		self.attributes = other.attributes.clone();
		self.classes = other.classes.clone();
		self
	}

	// Builder helpers

	/// Builder form of [`set_attribute`](Self::set_attribute).
	pub fn attr(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
		self.set_attribute(key, value);
		self
	}

	/// Builder form of [`add_class`](Self::add_class).
	pub fn class(mut self, names: impl Into<ClassNames>) -> Self {
		self.add_class(names);
		self
	}

	/// Builder form of [`append_content`](Self::append_content).
	pub fn child(mut self, content: impl IntoContent) -> Self {
		self.append_content(content);
		self
	}
}

fn class_tokens(value: &AttributeValue) -> ClassNames {
	match value {
		AttributeValue::Null | AttributeValue::Bool(_) => ClassNames::default(),
		AttributeValue::List(items) => ClassNames::from(
			items
				.iter()
				.map(|item| class_tokens(item).into_iter().collect::<Vec<_>>())
				.collect::<Vec<_>>(),
		),
		other => ClassNames::from(other.to_text().as_ref()),
	}
}

impl PartialEq for Tag {
	fn eq(&self, other: &Self) -> bool {
		self.tag_name == other.tag_name
			&& self.attributes.iter().eq(other.attributes.iter())
			&& self.classes.iter().eq(other.classes.iter())
			&& self.content == other.content
	}
}

impl fmt::Debug for Tag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Tag")
			.field("tag_name", &self.tag_name)
			.field("attributes", &self.attributes)
			.field("classes", &self.classes)
			.field("content", &self.content)
			.field("has_pre_render_hook", &self.pre_render.is_some())
			.finish()
	}
}

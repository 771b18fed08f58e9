//! Constructors for elements that are rarely useful without an attribute.

use tagsmith_core::{AttributeValue, IntoContent, Tag};

use crate::registry::ElementKind;

/// An `<option>` with a `value`.
///
/// # Examples
///
/// ```
/// use tagsmith_elements::option;
///
/// let opt = option("nl", "Netherlands");
/// assert_eq!(opt.render().unwrap(), r#"<option value="nl">Netherlands</option>"#);
/// ```
pub fn option(value: impl Into<AttributeValue>, label: impl IntoContent) -> Tag {
	ElementKind::OPTION.with_content(label).attr("value", value)
}

/// An `<a>` pointing at `href`.
///
/// The href is checked when the tag is rendered, not here.
pub fn anchor(href: impl Into<AttributeValue>, content: impl IntoContent) -> Tag {
	ElementKind::A.with_content(content).attr("href", href)
}

/// An `<img>` with `src` and `alt`. An empty `alt` is kept, marking the image
/// as decorative.
pub fn image(src: impl Into<AttributeValue>, alt: impl Into<AttributeValue>) -> Tag {
	ElementKind::IMG.tag().attr("src", src).attr("alt", alt)
}

/// An `<input>` of the given type. An empty `name` is omitted.
///
/// # Examples
///
/// ```
/// use tagsmith_elements::input;
///
/// assert_eq!(
///     input("email", "contact").render().unwrap(),
///     r#"<input type="email" name="contact" />"#
/// );
/// assert_eq!(input("submit", "").render().unwrap(), r#"<input type="submit" />"#);
/// ```
pub fn input(input_type: impl Into<AttributeValue>, name: impl Into<AttributeValue>) -> Tag {
	let mut tag = ElementKind::INPUT.tag().attr("type", input_type);
	tag.set_or_remove_attribute("name", name);
	tag
}

/// A `<label>` bound to the control with id `target_id`.
pub fn label_for(target_id: impl Into<AttributeValue>, content: impl IntoContent) -> Tag {
	ElementKind::LABEL.with_content(content).attr("for", target_id)
}

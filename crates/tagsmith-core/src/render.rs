//! Serialization of a [`Tag`] to markup.

use std::fmt;

use tagsmith_escape::{Escape, Markup};
use tracing::error;

use crate::attribute::{AttributeValue, is_empty_attribute_value};
use crate::error::TagResult;
use crate::security::{check_href, check_markup_href, is_self_closing};
use crate::tag::Tag;

const HREF_ATTRIBUTE: &str = "href";

impl Tag {
	/// Renders the tag to known-safe markup.
	///
	/// 1. The pre-render hook, if any, adjusts a private copy of the tag.
	/// 2. A non-empty `href` is checked with [`check_href`], or with
	///    [`check_markup_href`] when it holds markup.
	/// 3. Attributes are written in insertion order; bare values (`Null`,
	///    `Bool(true)`) as a lone name, everything else as `name="escaped"`.
	/// 4. Empty content on a self-closing tag gives `<tag attrs />`; anything
	///    else gives `<tag attrs>content</tag>` with the content escaped.
	///
	/// Rendering does not mutate the tag, so repeated calls produce identical
	/// output.
	///
	/// # Errors
	///
	/// Returns [`TagError::UnsafeHref`](crate::TagError::UnsafeHref) if this
	/// tag, or any tag nested in its content, carries a `javascript:` href.
	///
	/// # Examples
	///
	/// ```
	/// use tagsmith_core::Tag;
	///
	/// let input = Tag::new("input").attr("disabled", true);
	/// assert_eq!(input.render().unwrap(), "<input disabled />");
	///
	/// let link = Tag::with_content("a", "x").attr("href", "javascript:alert(1)");
	/// assert!(link.render().is_err());
	/// ```
	pub fn render(&self) -> TagResult<Markup> {
		self.prepared().serialize()
	}

	/// Renders the tag, degrading failures to their message text.
	///
	/// This is the containment boundary for contexts that cannot propagate an
	/// error, such as [`Display`](fmt::Display) formatting. A failure is logged
	/// at `error` level under the `tagsmith::render` target and its message is
	/// returned in place of the markup. Use [`render`](Self::render) wherever
	/// the error can be handled.
	///
	/// # Examples
	///
	/// ```
	/// use tagsmith_core::Tag;
	///
	/// let link = Tag::with_content("a", "x").attr("href", "javascript:void(0)");
	/// assert!(link.render_or_fallback().starts_with("Unsafe href rejected"));
	/// ```
	pub fn render_or_fallback(&self) -> String {
		match self.render() {
			Ok(markup) => markup.into_string(),
			Err(err) => {
				error!(
					target: "tagsmith::render",
					tag = self.tag_name(),
					error = %err,
					"rendering failed, substituting the error message"
				);
				err.to_string()
			}
		}
	}

	fn serialize(&self) -> TagResult<Markup> {
		self.validate_href()?;

		let tag_name = self.tag_name();
		let mut out = String::with_capacity(tag_name.len() * 2 + 5);
		out.push('<');
		out.push_str(tag_name);
		self.write_attributes(&mut out);

		if self.content.is_empty() && is_self_closing(tag_name) {
			out.push_str(" />");
			return Ok(Markup::from_trusted(out));
		}

		out.push('>');
		out.push_str(self.content.render()?.as_str());
		out.push_str("</");
		out.push_str(tag_name);
		out.push('>');
		Ok(Markup::from_trusted(out))
	}

	fn validate_href(&self) -> TagResult<()> {
		match self.attribute(HREF_ATTRIBUTE) {
			Some(href) if is_empty_attribute_value(&href) => Ok(()),
			Some(href @ (AttributeValue::Markup(_) | AttributeValue::List(_))) => {
				check_markup_href(&href.to_text())
			}
			Some(href) => check_href(&href.to_text()),
			None => Ok(()),
		}
	}

	fn write_attributes(&self, out: &mut String) {
		for (name, value) in self.attributes() {
			out.push(' ');
			out.push_str(name);
			if !value.is_bare() {
				out.push_str("=\"");
				AttributeValue::escape_into(&value, out);
				out.push('"');
			}
		}
	}
}

impl fmt::Display for Tag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.render_or_fallback())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::hook::pre_render_hook;
	use crate::node::{Node, from_fn};
	use crate::{SELF_CLOSING_TAGS, TagError};
	use rstest::rstest;
	use tagsmith_escape::escape;

	#[rstest]
	fn test_self_closing_tags_render_closed_when_empty() {
		for name in SELF_CLOSING_TAGS {
			assert_eq!(Tag::new(*name).render().unwrap(), format!("<{name} />"));
		}
	}

	#[rstest]
	#[case("div")]
	#[case("p")]
	#[case("span")]
	#[case("textarea")]
	fn test_other_tags_render_open_close_pair(#[case] name: &'static str) {
		assert_eq!(Tag::new(name).render().unwrap(), format!("<{name}></{name}>"));
	}

	#[rstest]
	fn test_self_closing_tag_with_forced_content() {
		let tag = Tag::with_content("br", "oops");
		assert_eq!(tag.render().unwrap(), "<br>oops</br>");
	}

	#[rstest]
	fn test_self_closing_tag_with_empty_string_content() {
		let tag = Tag::with_content("hr", "");
		assert_eq!(tag.render().unwrap(), "<hr />");
	}

	#[rstest]
	fn test_bare_attributes() {
		let input = Tag::new("input")
			.attr("type", "checkbox")
			.attr("checked", true)
			.attr("data-x", AttributeValue::Null);
		assert_eq!(
			input.render().unwrap(),
			r#"<input type="checkbox" checked data-x />"#
		);
	}

	#[rstest]
	fn test_false_renders_as_text_value() {
		let div = Tag::new("div").attr("data-open", false);
		assert_eq!(div.render().unwrap(), r#"<div data-open="false"></div>"#);
	}

	#[rstest]
	fn test_attribute_values_are_escaped() {
		let div = Tag::new("div").attr("title", r#"" onmouseover="alert('x')"#);
		assert_eq!(
			div.render().unwrap(),
			r#"<div title="&quot; onmouseover=&quot;alert(&#x27;x&#x27;)"></div>"#
		);
	}

	#[rstest]
	fn test_markup_attribute_value_is_not_escaped() {
		let div = Tag::new("div").attr("title", Markup::from_trusted("&copy; 2026"));
		assert_eq!(div.render().unwrap(), r#"<div title="&copy; 2026"></div>"#);
	}

	#[rstest]
	fn test_attribute_names_are_not_escaped() {
		let div = Tag::new("div").attr("x-on:click.prevent", "go");
		assert_eq!(
			div.render().unwrap(),
			r#"<div x-on:click.prevent="go"></div>"#
		);
	}

	#[rstest]
	fn test_numeric_attribute_values() {
		let td = Tag::new("td").attr("colspan", 2).attr("data-ratio", 0.5);
		assert_eq!(
			td.render().unwrap(),
			r#"<td colspan="2" data-ratio="0.5"></td>"#
		);
	}

	#[rstest]
	fn test_class_rendered_at_its_insertion_position() {
		let mut div = Tag::new("div");
		div.set_attribute("id", "main");
		div.add_class("wide");
		div.set_attribute("title", "t");
		div.add_class("tall");
		assert_eq!(
			div.render().unwrap(),
			r#"<div id="main" class="wide tall" title="t"></div>"#
		);
	}

	#[rstest]
	fn test_empty_class_set_is_omitted() {
		let mut div = Tag::new("div").class("x");
		div.remove_class("x");
		assert_eq!(div.render().unwrap(), "<div></div>");
	}

	#[rstest]
	fn test_class_names_are_escaped() {
		let div = Tag::new("div").class("a\"b");
		assert_eq!(div.render().unwrap(), r#"<div class="a&quot;b"></div>"#);
	}

	#[rstest]
	fn test_content_is_escaped() {
		let div = Tag::with_content("div", "<script>");
		assert_eq!(div.render().unwrap(), "<div>&lt;script&gt;</div>");
	}

	#[rstest]
	fn test_nested_tag_is_not_double_escaped() {
		let div = Tag::with_content("div", Tag::with_content("p", "x"));
		assert_eq!(div.render().unwrap(), "<div><p>x</p></div>");
	}

	#[rstest]
	fn test_sequence_content_joined_without_separator() {
		let ul = Tag::with_content(
			"ul",
			vec![
				Node::from(Tag::with_content("li", "a & b")),
				Node::text(" <sep> "),
				Node::from(Tag::with_content("li", "c")),
			],
		);
		assert_eq!(
			ul.render().unwrap(),
			"<ul><li>a &amp; b</li> &lt;sep&gt; <li>c</li></ul>"
		);
	}

	#[rstest]
	#[case("javascript:alert(1)")]
	#[case("JavaScript:alert(1)")]
	#[case(" javascript:alert(1)")]
	#[case("java\tscript:alert(1)")]
	fn test_unsafe_href_fails(#[case] href: &str) {
		let link = Tag::with_content("a", "click").attr("href", href);
		assert_eq!(
			link.render(),
			Err(TagError::UnsafeHref {
				href: href.to_string()
			})
		);
	}

	#[rstest]
	#[case("#javascript:alert(1)", "#javascript:alert(1)")]
	#[case("/javascript:alert(1)", "/javascript:alert(1)")]
	#[case("https://example.com/?a=1&b=2", "https://example.com/?a=1&amp;b=2")]
	fn test_allowed_href_rendered_escaped(#[case] href: &str, #[case] rendered: &str) {
		let link = Tag::with_content("a", "go").attr("href", href);
		assert_eq!(
			link.render().unwrap(),
			format!(r#"<a href="{rendered}">go</a>"#)
		);
	}

	#[rstest]
	fn test_empty_href_is_not_checked() {
		let link = Tag::new("a").attr("href", "");
		assert_eq!(link.render().unwrap(), r#"<a href=""></a>"#);
	}

	#[rstest]
	fn test_href_check_applies_to_markup_values() {
		let link = Tag::new("a").attr("href", Markup::from_trusted("javascript:go()"));
		assert!(link.render().unwrap_err().is_unsafe_href());
	}

	#[rstest]
	#[case(Markup::from_trusted("javascript&#58;alert(1)"))]
	#[case(Markup::from_trusted("&#x6A;avascript:alert(1)"))]
	fn test_markup_href_is_checked_after_decoding(#[case] href: Markup) {
		let link = Tag::new("a").attr("href", href.clone());
		assert_eq!(
			link.render(),
			Err(TagError::UnsafeHref {
				href: href.into_string()
			})
		);
	}

	#[rstest]
	fn test_text_href_with_reference_is_escaped_not_rejected() {
		let link = Tag::new("a").attr("href", "javascript&#58;alert(1)");
		assert_eq!(
			link.render().unwrap(),
			r#"<a href="javascript&amp;#58;alert(1)"></a>"#
		);
	}

	#[rstest]
	fn test_href_on_any_tag_is_checked() {
		let base = Tag::new("link").attr("href", "javascript:x");
		assert!(base.render().is_err());
	}

	#[rstest]
	fn test_unsafe_href_in_nested_tag_propagates() {
		let inner = Tag::with_content("a", "x").attr("href", "javascript:x");
		let outer = Tag::with_content("div", inner);
		assert!(outer.render().unwrap_err().is_unsafe_href());
	}

	#[rstest]
	fn test_render_is_idempotent() {
		let tag = Tag::with_content("p", vec!["a", "<b>"])
			.attr("id", "x")
			.class(["c1", "c2"]);
		let first = tag.render().unwrap();
		let second = tag.render().unwrap();
		assert_eq!(first, second);
	}

	#[rstest]
	fn test_pre_render_hook_does_not_mutate_receiver() {
		let hook = pre_render_hook(|tag: &mut Tag| {
			tag.add_class("hooked");
			tag.append_content("!");
		});
		let tag = Tag::with_content("p", "hi").with_pre_render_hook(hook);
		assert_eq!(tag.render().unwrap(), r#"<p class="hooked">hi!</p>"#);
		assert_eq!(tag.render().unwrap(), r#"<p class="hooked">hi!</p>"#);
		assert!(!tag.has_class("hooked"));
		assert_eq!(tag.content(), [Node::text("hi")]);
	}

	#[rstest]
	fn test_pre_render_hook_output_is_href_checked() {
		let hook = pre_render_hook(|tag: &mut Tag| {
			tag.set_attribute("href", "javascript:alert(1)");
		});
		let link = Tag::new("a").with_pre_render_hook(hook);
		assert!(link.render().is_err());
	}

	#[rstest]
	fn test_component_content() {
		let component = Node::component(from_fn(|| Ok(escape("1 < 2"))));
		let span = Tag::with_content("span", component);
		assert_eq!(span.render().unwrap(), "<span>1 &lt; 2</span>");
	}

	#[rstest]
	fn test_display_renders_markup() {
		let p = Tag::with_content("p", "ok");
		assert_eq!(format!("{p}"), "<p>ok</p>");
	}

	#[rstest]
	fn test_display_falls_back_to_error_message() {
		let link = Tag::with_content("a", "x").attr("href", "javascript:alert(1)");
		let expected = TagError::UnsafeHref {
			href: "javascript:alert(1)".to_string(),
		}
		.to_string();
		assert_eq!(link.to_string(), expected);
		assert_eq!(link.render_or_fallback(), expected);
	}
}

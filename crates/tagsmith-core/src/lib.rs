//! # tagsmith-core
//!
//! A small object model for building HTML programmatically, escaping by
//! default.
//!
//! ## Overview
//!
//! [`Tag`] is the single renderable element. It owns:
//!
//! - a fixed tag name (trusted, never escaped),
//! - an ordered attribute map whose values are escaped on render,
//! - an ordered class set, rendered as one `class` attribute,
//! - a content slot holding text, safe markup, nested tags, or any other
//!   [`ToHtml`] producer.
//!
//! [`Tag::render`] returns [`Markup`], so a rendered tag nested in another
//! tag's content is emitted as is rather than escaped twice.
//!
//! ## Security rules
//!
//! - An `href` that resolves to a `javascript:` URI makes rendering fail with
//!   [`TagError::UnsafeHref`]. Anchor (`#...`) and same-origin (`/...`)
//!   references are exempt. See [`check_href`]. Markup hrefs are checked
//!   after decoding character references, see [`check_markup_href`].
//! - Tags listed in [`SELF_CLOSING_TAGS`] render as `<tag />` while their
//!   content is empty.
//!
//! ## Example
//!
//! ```
//! use tagsmith_core::Tag;
//!
//! let mut card = Tag::new("div");
//! card.add_class("card")
//!     .set_content(Tag::with_content("p", "<b>not bold</b>"));
//!
//! assert_eq!(
//!     card.render().unwrap(),
//!     r#"<div class="card"><p>&lt;b&gt;not bold&lt;/b&gt;</p></div>"#
//! );
//! ```
//!
//! ## Logging
//!
//! Diagnostics go through `tracing`: rejected hrefs are reported at `warn`
//! (target `tagsmith::security`) and [`Tag::render_or_fallback`] reports the
//! failures it swallows at `error` (target `tagsmith::render`).

mod attribute;
mod class;
mod error;
mod hook;
mod node;
mod render;
mod security;
mod tag;

pub use attribute::{AttributeValue, is_empty_attribute_value};
pub use class::ClassNames;
pub use error::{TagError, TagResult};
pub use hook::{PreRenderHook, pre_render_hook};
pub use node::{Content, FromFn, IntoContent, Node, ToHtml, from_fn};
pub use security::{
	HrefKind, SELF_CLOSING_TAGS, check_href, check_markup_href, classify_href, is_self_closing,
};
pub use tag::Tag;

pub use tagsmith_escape::{Escape, Markup, escape, escape_join};

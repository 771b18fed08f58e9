//! # tagsmith
//!
//! Build HTML programmatically, with escaping by default.
//!
//! The crate is a facade over the workspace members:
//!
//! - [`escape`]: the escaping rules and the [`Markup`] known-safe wrapper
//! - `tagsmith-core`: the [`Tag`] object model and its render pipeline,
//!   re-exported at the crate root
//! - [`elements`]: the HTML element catalogue (feature `elements`, on by default)
//!
//! ## Quick Example
//!
//! ```
//! use tagsmith::prelude::*;
//!
//! let mut greeting = Tag::new("p");
//! greeting
//!     .add_class("greeting")
//!     .set_content(vec![Node::text("Hello, "), Tag::with_content("b", "<world>").into()]);
//!
//! assert_eq!(
//!     greeting.render().unwrap(),
//!     r#"<p class="greeting">Hello, <b>&lt;world&gt;</b></p>"#
//! );
//! ```
//!
//! ## Security
//!
//! Text content and attribute values are always escaped; only [`Markup`] is
//! emitted verbatim. An `href` resolving to a `javascript:` URI fails the
//! render with [`TagError::UnsafeHref`].
//!
//! ## Feature Flags
//!
//! - `elements` (default): the element registry and constructors
//! - `serde`: `Serialize` for [`Markup`] and [`AttributeValue`]
//! - `full`: all of the above

#[cfg(feature = "elements")]
pub mod elements;
pub mod escape;

pub use tagsmith_core::{
	AttributeValue, ClassNames, Content, FromFn, HrefKind, IntoContent, Node, PreRenderHook,
	SELF_CLOSING_TAGS, Tag, TagError, TagResult, ToHtml, check_href, check_markup_href,
	classify_href, from_fn, is_empty_attribute_value, is_self_closing, pre_render_hook,
};
pub use tagsmith_escape::Markup;

pub mod prelude {
	pub use crate::escape::{Escape, escape};
	pub use crate::{
		AttributeValue, IntoContent, Markup, Node, Tag, TagError, TagResult, ToHtml, from_fn,
		pre_render_hook,
	};

	#[cfg(feature = "elements")]
	pub use crate::elements::{ElementKind, render_collection};
}

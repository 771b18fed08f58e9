//! Error types for tag rendering.

use thiserror::Error;

/// Result type for rendering operations
pub type TagResult<T> = Result<T, TagError>;

/// Errors raised while rendering a tag
///
/// Only rendering can fail; every mutator and getter on
/// [`Tag`](crate::Tag) is total.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
	/// An `href` attribute resolved to a `javascript:` URI.
	///
	/// Raised instead of sanitizing the value: it means either an attack or a
	/// caller bug, and the render call must not produce output.
	#[error("Unsafe href rejected: {href:?} resolves to a javascript: URI")]
	UnsafeHref {
		/// The offending attribute value, as given.
		href: String,
	},

	/// A custom content producer failed to render.
	#[error("Content component failed to render: {0}")]
	Component(String),
}

impl TagError {
	/// Returns `true` for the href security failure.
	pub fn is_unsafe_href(&self) -> bool {
		matches!(self, TagError::UnsafeHref { .. })
	}
}

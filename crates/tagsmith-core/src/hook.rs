//! Pre-render hooks.

use std::sync::Arc;

use crate::tag::Tag;

/// Adjusts a tag just before it is serialized.
///
/// The hook receives a private copy of the tag, never the tag being rendered,
/// so it can synthesize derived attributes or content without making
/// [`Tag::render`] stateful.
pub type PreRenderHook = Arc<dyn Fn(&mut Tag) + Send + Sync>;

/// Wraps a closure as a [`PreRenderHook`].
///
/// # Examples
///
/// ```
/// use tagsmith_core::{Tag, pre_render_hook};
///
/// let hook = pre_render_hook(|tag: &mut Tag| {
///     if !tag.has_attribute("rel") {
///         tag.set_attribute("rel", "noopener");
///     }
/// });
/// let link = Tag::with_content("a", "docs").with_pre_render_hook(hook);
/// assert_eq!(link.render().unwrap(), r#"<a rel="noopener">docs</a>"#);
/// assert!(!link.has_attribute("rel"));
/// ```
pub fn pre_render_hook<F>(hook: F) -> PreRenderHook
where
	F: Fn(&mut Tag) + Send + Sync + 'static,
{
	Arc::new(hook)
}

//! Rendering security rules: the self-closing tag set and `href` validation.

use tracing::warn;

use crate::error::{TagError, TagResult};

/// Void elements, rendered as `<tag />` when they have no content.
pub const SELF_CLOSING_TAGS: &[&str] = &[
	"area", "base", "br", "col", "command", "embed", "frame", "hr", "img", "input", "keygen",
	"link", "meta", "param", "source", "track", "wbr",
];

const JAVASCRIPT_SCHEME: &str = "javascript:";

/// Returns `true` if `tag_name` is in [`SELF_CLOSING_TAGS`].
///
/// The match is exact; tag names are lower case by convention.
///
/// # Examples
///
/// ```
/// use tagsmith_core::is_self_closing;
///
/// assert!(is_self_closing("br"));
/// assert!(!is_self_closing("div"));
/// ```
pub fn is_self_closing(tag_name: &str) -> bool {
	SELF_CLOSING_TAGS.contains(&tag_name)
}

/// How an `href` value is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HrefKind {
	/// Starts with `#`.
	Anchor,
	/// Starts with a single `/` (not the protocol-relative `//`).
	SameOrigin,
	/// Anything else, including absolute and protocol-relative URLs.
	Other,
}

/// Classifies an `href` value by its first characters.
///
/// # Examples
///
/// ```
/// use tagsmith_core::{HrefKind, classify_href};
///
/// assert_eq!(classify_href("#top"), HrefKind::Anchor);
/// assert_eq!(classify_href("/about"), HrefKind::SameOrigin);
/// assert_eq!(classify_href("//cdn.example.com"), HrefKind::Other);
/// assert_eq!(classify_href("https://example.com"), HrefKind::Other);
/// ```
pub fn classify_href(href: &str) -> HrefKind {
	if href.starts_with('#') {
		HrefKind::Anchor
	} else if href.starts_with('/') && !href.starts_with("//") {
		HrefKind::SameOrigin
	} else {
		HrefKind::Other
	}
}

/// Rejects `href` values that resolve to a `javascript:` URI.
///
/// Anchor and same-origin references cannot carry a scheme in first position
/// and are accepted without further inspection. For anything else, every
/// character that is not alphanumeric, `/` or `:` is dropped and the result is
/// matched case-insensitively against `javascript:`, which defeats
/// obfuscations such as `java\tscript:` or ` JavaScript:`.
///
/// # Errors
///
/// Returns [`TagError::UnsafeHref`] when the value is rejected.
///
/// # Examples
///
/// ```
/// use tagsmith_core::check_href;
///
/// assert!(check_href("https://example.com").is_ok());
/// assert!(check_href("#javascript:alert(1)").is_ok());
/// assert!(check_href("/javascript:alert(1)").is_ok());
/// assert!(check_href("javascript:alert(1)").is_err());
/// assert!(check_href(" JaVa\tScRiPt:alert(1)").is_err());
/// ```
pub fn check_href(href: &str) -> TagResult<()> {
	if classify_href(href) != HrefKind::Other {
		return Ok(());
	}

	let normalized: String = href
		.chars()
		.filter(|c| c.is_alphanumeric() || *c == '/' || *c == ':')
		.collect::<String>()
		.to_lowercase();

	if normalized.starts_with(JAVASCRIPT_SCHEME) {
		warn!(target: "tagsmith::security", href, "rejected javascript: href");
		return Err(TagError::UnsafeHref {
			href: href.to_string(),
		});
	}
	Ok(())
}

/// [`check_href`] for an href that is already markup and is emitted verbatim.
///
/// Character references are decoded before the check, matching what a
/// browser sees. A rejection reports the value as written.
///
/// # Errors
///
/// Returns [`TagError::UnsafeHref`] when the decoded value is rejected.
///
/// # Examples
///
/// ```
/// use tagsmith_core::check_markup_href;
///
/// assert!(check_markup_href("https://example.com/?a=1&amp;b=2").is_ok());
/// assert!(check_markup_href("javascript&#58;alert(1)").is_err());
/// ```
pub fn check_markup_href(href: &str) -> TagResult<()> {
	let decoded = html_escape::decode_html_entities(href);
	check_href(&decoded).map_err(|_| TagError::UnsafeHref {
		href: href.to_string(),
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("area")]
	#[case("base")]
	#[case("br")]
	#[case("col")]
	#[case("command")]
	#[case("embed")]
	#[case("frame")]
	#[case("hr")]
	#[case("img")]
	#[case("input")]
	#[case("keygen")]
	#[case("link")]
	#[case("meta")]
	#[case("param")]
	#[case("source")]
	#[case("track")]
	#[case("wbr")]
	fn test_self_closing_set(#[case] name: &str) {
		assert!(is_self_closing(name));
	}

	#[rstest]
	#[case("div")]
	#[case("p")]
	#[case("a")]
	#[case("script")]
	#[case("BR")]
	fn test_not_self_closing(#[case] name: &str) {
		assert!(!is_self_closing(name));
	}

	#[rstest]
	fn test_self_closing_set_size() {
		assert_eq!(SELF_CLOSING_TAGS.len(), 17);
	}

	#[rstest]
	#[case("#", HrefKind::Anchor)]
	#[case("#section-2", HrefKind::Anchor)]
	#[case("/", HrefKind::SameOrigin)]
	#[case("/path/to/page", HrefKind::SameOrigin)]
	#[case("//evil.example.com", HrefKind::Other)]
	#[case("", HrefKind::Other)]
	#[case("page.html", HrefKind::Other)]
	#[case(" /leading-space", HrefKind::Other)]
	fn test_classify_href(#[case] href: &str, #[case] expected: HrefKind) {
		assert_eq!(classify_href(href), expected);
	}

	#[rstest]
	#[case("javascript:alert(1)")]
	#[case("JAVASCRIPT:alert(1)")]
	#[case("  javascript:void(0)")]
	#[case("java\nscript:alert(1)")]
	#[case("java script:alert(1)")]
	#[case("j.a.v.a.s.c.r.i.p.t:alert(1)")]
	#[case("\u{0}javascript:alert(1)")]
	#[case("javascript:")]
	fn test_check_href_rejects(#[case] href: &str) {
		assert_eq!(
			check_href(href),
			Err(TagError::UnsafeHref {
				href: href.to_string()
			})
		);
	}

	#[rstest]
	#[case("https://example.com/javascript:x")]
	#[case("mailto:someone@example.com")]
	#[case("#javascript:alert(1)")]
	#[case("/javascript:alert(1)")]
	#[case("relative/page.html")]
	#[case("javascrip:alert(1)")]
	#[case("")]
	fn test_check_href_accepts(#[case] href: &str) {
		assert!(check_href(href).is_ok());
	}

	#[rstest]
	fn test_protocol_relative_is_not_exempt_but_cannot_carry_the_scheme() {
		let href = "//javascript:alert(1)";
		// Not exempt: it goes through normalization like any absolute URL.
		assert_eq!(classify_href(href), HrefKind::Other);
		// The slashes survive stripping, so the normalized form never starts
		// with the scheme.
		assert!(check_href(href).is_ok());
	}

	#[rstest]
	#[case("javascript&#58;alert(1)")]
	#[case("javascript&#x3A;alert(1)")]
	#[case("&#106;avascript:alert(1)")]
	#[case("java&#9;script:alert(1)")]
	fn test_check_markup_href_decodes_references(#[case] href: &str) {
		assert!(check_href(href).is_ok());
		assert_eq!(
			check_markup_href(href),
			Err(TagError::UnsafeHref {
				href: href.to_string()
			})
		);
	}

	#[rstest]
	#[case("https://example.com/?a=1&amp;b=2")]
	#[case("&#35;javascript:alert(1)")]
	#[case("/docs")]
	fn test_check_markup_href_accepts(#[case] href: &str) {
		assert!(check_markup_href(href).is_ok());
	}
}

//! The element table.

use std::fmt;

use tagsmith_core::{IntoContent, Markup, Tag, TagResult, escape_join, is_self_closing};
use tracing::debug;

/// One HTML element: a display name and the tag name it renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementKind {
	name: &'static str,
	tag_name: &'static str,
}

impl ElementKind {
	const fn new(name: &'static str, tag_name: &'static str) -> Self {
		Self { name, tag_name }
	}

	/// Human readable name, e.g. `"Paragraph"`.
	pub const fn name(&self) -> &'static str {
		self.name
	}

	/// The tag name used in markup, e.g. `"p"`.
	pub const fn tag_name(&self) -> &'static str {
		self.tag_name
	}

	/// Returns `true` if an empty instance renders as `<tag />`.
	pub fn is_self_closing(&self) -> bool {
		is_self_closing(self.tag_name)
	}

	/// An empty tag of this kind.
	pub fn tag(self) -> Tag {
		Tag::new(self.tag_name)
	}

	/// A tag of this kind holding `content`.
	pub fn with_content(self, content: impl IntoContent) -> Tag {
		Tag::with_content(self.tag_name, content)
	}

	/// One tag per item, in input order.
	///
	/// # Examples
	///
	/// ```
	/// use tagsmith_elements::ElementKind;
	///
	/// let cells = ElementKind::TD.collection(vec![1, 2]);
	/// assert_eq!(cells.len(), 2);
	/// assert_eq!(cells[1].render().unwrap(), "<td>2</td>");
	/// ```
	pub fn collection<I>(self, items: I) -> Vec<Tag>
	where
		I: IntoIterator,
		I::Item: IntoContent,
	{
		items
			.into_iter()
			.map(|item| self.with_content(item))
			.collect()
	}
}

impl fmt::Display for ElementKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "<{}>", self.tag_name)
	}
}

/// Finds an element by tag name, ignoring ASCII case.
///
/// # Examples
///
/// ```
/// use tagsmith_elements::{ElementKind, lookup};
///
/// assert_eq!(lookup("TD"), Some(ElementKind::TD));
/// assert_eq!(lookup("blink"), None);
/// ```
pub fn lookup(tag_name: &str) -> Option<ElementKind> {
	let found = ELEMENTS
		.iter()
		.copied()
		.find(|kind| kind.tag_name.eq_ignore_ascii_case(tag_name));
	if found.is_none() {
		debug!(target: "tagsmith::elements", tag_name, "no registered element");
	}
	found
}

/// Every registered element, containers first, then void elements.
pub fn all() -> &'static [ElementKind] {
	ELEMENTS
}

/// Renders tags one after another with no separator.
///
/// # Errors
///
/// Fails with the first error any of the tags reports.
pub fn render_collection(tags: &[Tag]) -> TagResult<Markup> {
	let rendered = tags
		.iter()
		.map(Tag::render)
		.collect::<TagResult<Vec<_>>>()?;
	Ok(escape_join(rendered, ""))
}

macro_rules! element_table {
	(
		containers {
			$($cconst:ident => $cname:literal, $ctag:literal, $cctor:ident;)*
		}
		voids {
			$($vconst:ident => $vname:literal, $vtag:literal, $vctor:ident;)*
		}
		bare {
			$($bconst:ident => $bname:literal, $btag:literal;)*
		}
	) => {
		impl ElementKind {
			$(
				#[doc = concat!("The `<", $ctag, ">` element.")]
				pub const $cconst: ElementKind = ElementKind::new($cname, $ctag);
			)*
			$(
				#[doc = concat!("The void `<", $vtag, ">` element.")]
				pub const $vconst: ElementKind = ElementKind::new($vname, $vtag);
			)*
			$(
				#[doc = concat!("The `<", $btag, ">` element.")]
				pub const $bconst: ElementKind = ElementKind::new($bname, $btag);
			)*
		}

		static ELEMENTS: &[ElementKind] = &[
			$(ElementKind::$cconst,)*
			$(ElementKind::$bconst,)*
			$(ElementKind::$vconst,)*
		];

		$(
			#[doc = concat!("Builds a `<", $ctag, ">` tag holding `content`.")]
			pub fn $cctor(content: impl IntoContent) -> Tag {
				ElementKind::$cconst.with_content(content)
			}
		)*

		$(
			#[doc = concat!("Builds an empty `<", $vtag, ">` tag.")]
			pub fn $vctor() -> Tag {
				ElementKind::$vconst.tag()
			}
		)*
	};
}

element_table! {
	containers {
		// Document and metadata
		HTML => "Document", "html", html;
		HEAD => "Head", "head", head;
		TITLE => "Title", "title", title;
		STYLE => "Style", "style", style;
		SCRIPT => "Script", "script", script;
		NOSCRIPT => "NoScript", "noscript", noscript;
		TEMPLATE => "Template", "template", template;
		BODY => "Body", "body", body;

		// Sectioning
		HEADER => "Header", "header", header;
		FOOTER => "Footer", "footer", footer;
		MAIN => "Main", "main", main;
		NAV => "Navigation", "nav", nav;
		SECTION => "Section", "section", section;
		ARTICLE => "Article", "article", article;
		ASIDE => "Aside", "aside", aside;
		ADDRESS => "Address", "address", address;
		H1 => "Heading1", "h1", h1;
		H2 => "Heading2", "h2", h2;
		H3 => "Heading3", "h3", h3;
		H4 => "Heading4", "h4", h4;
		H5 => "Heading5", "h5", h5;
		H6 => "Heading6", "h6", h6;
		HGROUP => "HeadingGroup", "hgroup", hgroup;
		SEARCH => "Search", "search", search;

		// Grouping
		P => "Paragraph", "p", p;
		DIV => "Division", "div", div;
		PRE => "Preformatted", "pre", pre;
		BLOCKQUOTE => "BlockQuote", "blockquote", blockquote;
		OL => "OrderedList", "ol", ol;
		UL => "UnorderedList", "ul", ul;
		LI => "ListItem", "li", li;
		MENU => "Menu", "menu", menu;
		DL => "DescriptionList", "dl", dl;
		DT => "DescriptionTerm", "dt", dt;
		DD => "DescriptionDetails", "dd", dd;
		FIGURE => "Figure", "figure", figure;
		FIGCAPTION => "FigureCaption", "figcaption", figcaption;

		// Text level
		A => "Anchor", "a", a;
		EM => "Emphasis", "em", em;
		STRONG => "Strong", "strong", strong;
		SMALL => "Small", "small", small;
		S => "Strikethrough", "s", s;
		CITE => "Citation", "cite", cite;
		Q => "Quote", "q", q;
		DFN => "Definition", "dfn", dfn;
		ABBR => "Abbreviation", "abbr", abbr;
		RUBY => "Ruby", "ruby", ruby;
		RT => "RubyText", "rt", rt;
		RP => "RubyParenthesis", "rp", rp;
		DATA => "Data", "data", data;
		TIME => "Time", "time", time;
		CODE => "Code", "code", code;
		VAR => "Variable", "var", var;
		SAMP => "SampleOutput", "samp", samp;
		KBD => "KeyboardInput", "kbd", kbd;
		SUB => "Subscript", "sub", sub;
		SUP => "Superscript", "sup", sup;
		I => "Italic", "i", i;
		B => "Bold", "b", b;
		U => "Underline", "u", u;
		MARK => "Mark", "mark", mark;
		BDI => "BidiIsolate", "bdi", bdi;
		BDO => "BidiOverride", "bdo", bdo;
		SPAN => "Span", "span", span;
		INS => "Insertion", "ins", ins;
		DEL => "Deletion", "del", del;

		// Embedded content
		PICTURE => "Picture", "picture", picture;
		IFRAME => "InlineFrame", "iframe", iframe;
		OBJECT => "Object", "object", object;
		VIDEO => "Video", "video", video;
		AUDIO => "Audio", "audio", audio;
		MAP => "ImageMap", "map", map;
		CANVAS => "Canvas", "canvas", canvas;
		SVG => "Svg", "svg", svg;
		MATH => "Math", "math", math;

		// Tables
		TABLE => "Table", "table", table;
		CAPTION => "Caption", "caption", caption;
		COLGROUP => "ColumnGroup", "colgroup", colgroup;
		THEAD => "TableHead", "thead", thead;
		TBODY => "TableBody", "tbody", tbody;
		TFOOT => "TableFoot", "tfoot", tfoot;
		TR => "TableRow", "tr", tr;
		TH => "TableHeader", "th", th;
		TD => "TableCell", "td", td;

		// Forms
		FORM => "Form", "form", form;
		LABEL => "Label", "label", label;
		BUTTON => "Button", "button", button;
		SELECT => "Select", "select", select;
		DATALIST => "DataList", "datalist", datalist;
		OPTGROUP => "OptionGroup", "optgroup", optgroup;
		TEXTAREA => "TextArea", "textarea", textarea;
		OUTPUT => "Output", "output", output;
		PROGRESS => "Progress", "progress", progress;
		METER => "Meter", "meter", meter;
		FIELDSET => "FieldSet", "fieldset", fieldset;
		LEGEND => "Legend", "legend", legend;

		// Interactive
		DETAILS => "Details", "details", details;
		SUMMARY => "Summary", "summary", summary;
		DIALOG => "Dialog", "dialog", dialog;
		SLOT => "Slot", "slot", slot;
	}
	voids {
		BASE => "Base", "base", base;
		LINK => "Link", "link", link;
		META => "Meta", "meta", meta;
		HR => "ThematicBreak", "hr", hr;
		BR => "LineBreak", "br", br;
		WBR => "WordBreakOpportunity", "wbr", wbr;
		SOURCE => "Source", "source", source;
		IMG => "Image", "img", img;
		EMBED => "Embed", "embed", embed;
		PARAM => "Parameter", "param", param;
		TRACK => "Track", "track", track;
		AREA => "ImageMapArea", "area", area;
		COL => "Column", "col", col;
	}
	bare {
		OPTION => "Option", "option";
		INPUT => "Input", "input";
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::collections::HashSet;

	#[rstest]
	fn test_tag_names_are_unique() {
		let names: HashSet<&str> = all().iter().map(ElementKind::tag_name).collect();
		assert_eq!(names.len(), all().len());
	}

	#[rstest]
	fn test_void_elements_match_self_closing_set() {
		for kind in all() {
			let expected = matches!(
				kind.tag_name(),
				"base" | "link" | "meta" | "hr" | "br" | "wbr" | "source" | "img" | "embed"
					| "param" | "track" | "area" | "col" | "input"
			);
			assert_eq!(kind.is_self_closing(), expected, "{kind}");
		}
	}

	#[rstest]
	#[case("p", Some(ElementKind::P))]
	#[case("TABLE", Some(ElementKind::TABLE))]
	#[case("Option", Some(ElementKind::OPTION))]
	#[case("blink", None)]
	#[case("", None)]
	fn test_lookup(#[case] tag_name: &str, #[case] expected: Option<ElementKind>) {
		assert_eq!(lookup(tag_name), expected);
	}

	#[rstest]
	fn test_element_kind_accessors() {
		assert_eq!(ElementKind::LI.name(), "ListItem");
		assert_eq!(ElementKind::LI.tag_name(), "li");
		assert_eq!(ElementKind::LI.to_string(), "<li>");
	}

	#[rstest]
	fn test_constructors_build_plain_tags() {
		assert_eq!(p("x"), Tag::with_content("p", "x"));
		assert_eq!(hr(), Tag::new("hr"));
		assert_eq!(h2("Title").render().unwrap(), "<h2>Title</h2>");
		assert_eq!(col().render().unwrap(), "<col />");
	}

	#[rstest]
	fn test_collection_preserves_order() {
		let items = ElementKind::LI.collection(["a", "b", "c"]);
		let texts: Vec<_> = items
			.iter()
			.map(|tag| tag.joined_content().unwrap())
			.collect();
		assert_eq!(texts, ["a", "b", "c"].map(tagsmith_core::Node::text));
	}

	#[rstest]
	fn test_collection_of_nothing() {
		assert!(ElementKind::LI.collection(Vec::<&str>::new()).is_empty());
		assert_eq!(render_collection(&[]).unwrap(), "");
	}

	#[rstest]
	fn test_render_collection_surfaces_errors() {
		let tags = vec![
			a("ok").attr("href", "/home"),
			a("bad").attr("href", "javascript:void(0)"),
		];
		assert!(render_collection(&tags).unwrap_err().is_unsafe_href());
	}
}

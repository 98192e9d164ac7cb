//! Tag classification tables for the HTML subset CMS content uses

/// Whether a tag is a void element that never takes children
#[must_use]
pub fn is_void_tag(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

/// Whether a tag's content is raw text: no child elements, no entity decoding
#[must_use]
pub fn is_raw_text_tag(tag: &str) -> bool {
    matches!(tag, "script" | "style")
}

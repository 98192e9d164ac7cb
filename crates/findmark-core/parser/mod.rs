//! Lenient HTML-fragment parser
//!
//! Builds an owned [`Fragment`] tree out of CMS-rendered HTML. Recovery is
//! the default: stray end tags are dropped, unclosed elements are closed at
//! end of input, and comment or doctype junk is skipped. Every recoverable
//! problem is recorded as a [`ParseIssue`] on the fragment; the only hard
//! failure is pathological nesting depth.

pub mod entities;

use crate::dom::tags::{is_raw_text_tag, is_void_tag};
use crate::dom::{Element, Fragment, Node};
use crate::errors::{CoreError, Result};

/// Hard limit on element nesting depth
pub const MAX_DEPTH: usize = 256;

/// Tag name of the synthetic fragment root
pub(crate) const FRAGMENT_TAG: &str = "#fragment";

/// A recoverable problem found while parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    /// What went wrong
    pub kind: IssueKind,
    /// Byte offset into the source where the problem was noticed
    pub offset: usize,
}

/// Kinds of recoverable parse problems
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    /// An end tag with no matching open element
    StrayEndTag {
        /// Tag name from the end tag, lowercased
        tag: String,
    },
    /// An element still open at end of input
    UnclosedElement {
        /// Tag name of the element closed implicitly
        tag: String,
    },
    /// A raw-text element (`script`/`style`) with no end tag
    UnterminatedRawText {
        /// Tag name of the raw-text element
        tag: String,
    },
    /// A comment with no closing `-->`
    UnterminatedComment,
}

/// Parse an HTML fragment into an owned content tree
///
/// # Errors
///
/// Returns [`CoreError::NestingTooDeep`] when element nesting exceeds
/// [`MAX_DEPTH`]. All other malformations are recovered from and reported
/// via [`Fragment::issues`].
pub fn parse_fragment(source: &str) -> Result<Fragment> {
    Parser::new(source).run()
}

struct Parser<'a> {
    source: &'a str,
    pos: usize,
    root: Element,
    open: Vec<Element>,
    issues: Vec<ParseIssue>,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            root: Element::new(FRAGMENT_TAG),
            open: Vec::new(),
            issues: Vec::new(),
        }
    }

    fn run(mut self) -> Result<Fragment> {
        while self.pos < self.source.len() {
            let rest = &self.source[self.pos..];
            match rest.find('<') {
                None => {
                    let text = &self.source[self.pos..];
                    self.pos = self.source.len();
                    self.push_decoded_text(text);
                }
                Some(rel) => {
                    let lt = self.pos + rel;
                    if is_markup_start(&self.source[lt..]) {
                        let text = &self.source[self.pos..lt];
                        self.pos = lt;
                        self.push_decoded_text(text);
                        self.handle_markup()?;
                    } else {
                        // Literal '<' in prose, e.g. "a < b"
                        let end = next_char_boundary(self.source, lt + 1);
                        let text = &self.source[self.pos..end];
                        self.pos = end;
                        self.push_decoded_text(text);
                    }
                }
            }
        }

        // Close anything still open at end of input
        while let Some(el) = self.open.pop() {
            self.issues.push(ParseIssue {
                kind: IssueKind::UnclosedElement {
                    tag: el.tag.clone(),
                },
                offset: self.source.len(),
            });
            self.attach(el);
        }

        Ok(Fragment::new(self.root, self.issues))
    }

    /// Element currently receiving children
    fn current(&mut self) -> &mut Element {
        self.open.last_mut().unwrap_or(&mut self.root)
    }

    fn attach(&mut self, el: Element) {
        self.current().children.push(Node::Element(el));
    }

    /// Decode and append text, merging with a preceding text sibling
    fn push_decoded_text(&mut self, raw: &str) {
        if raw.is_empty() {
            return;
        }
        let decoded = entities::decode(raw);
        let target = self.current();
        if let Some(Node::Text(prev)) = target.children.last_mut() {
            prev.push_str(&decoded);
        } else {
            target.children.push(Node::Text(decoded));
        }
    }

    /// Dispatch on the markup construct starting at `self.pos` (a `<`)
    fn handle_markup(&mut self) -> Result<()> {
        let rest = &self.source[self.pos..];
        if rest.starts_with("<!--") {
            self.handle_comment();
        } else if rest.starts_with("</") {
            self.handle_end_tag();
        } else if rest.starts_with("<!") || rest.starts_with("<?") {
            self.skip_past_gt();
        } else {
            self.handle_start_tag()?;
        }
        Ok(())
    }

    fn handle_comment(&mut self) {
        let body_start = self.pos + 4;
        match self.source[body_start..].find("-->") {
            Some(rel) => {
                let body = &self.source[body_start..body_start + rel];
                self.pos = body_start + rel + 3;
                let comment = Node::Comment(body.to_string());
                self.current().children.push(comment);
            }
            None => {
                self.issues.push(ParseIssue {
                    kind: IssueKind::UnterminatedComment,
                    offset: self.pos,
                });
                let body = self.source[body_start..].to_string();
                self.pos = self.source.len();
                self.current().children.push(Node::Comment(body));
            }
        }
    }

    fn handle_end_tag(&mut self) {
        let offset = self.pos;
        self.pos += 2;
        let tag = self.read_name();
        self.skip_past_gt();

        // Close down to the matching open element, implicitly closing
        // anything nested inside it. No match means the end tag is stray.
        match self.open.iter().rposition(|el| el.tag == tag) {
            Some(idx) => {
                while self.open.len() > idx {
                    if let Some(el) = self.open.pop() {
                        self.attach(el);
                    }
                }
            }
            None => self.issues.push(ParseIssue {
                kind: IssueKind::StrayEndTag { tag },
                offset,
            }),
        }
    }

    fn handle_start_tag(&mut self) -> Result<()> {
        self.pos += 1;
        let tag = self.read_name();
        let mut el = Element::new(tag.clone());
        let self_closing = self.parse_attrs(&mut el);

        if self_closing || is_void_tag(&tag) {
            self.attach(el);
        } else if is_raw_text_tag(&tag) {
            self.consume_raw_text(el);
        } else {
            if self.open.len() + 1 > MAX_DEPTH {
                return Err(CoreError::NestingTooDeep {
                    depth: self.open.len() + 1,
                    limit: MAX_DEPTH,
                });
            }
            self.open.push(el);
        }
        Ok(())
    }

    /// Parse attributes up to the closing `>`; returns whether `/>` was seen
    fn parse_attrs(&mut self, el: &mut Element) -> bool {
        loop {
            self.skip_whitespace();
            match self.peek_byte() {
                None => return false,
                Some(b'>') => {
                    self.pos += 1;
                    return false;
                }
                Some(b'/') => {
                    self.pos += 1;
                    if self.peek_byte() == Some(b'>') {
                        self.pos += 1;
                        return true;
                    }
                }
                Some(_) => {
                    let name = self.read_attr_name();
                    if name.is_empty() {
                        // Junk byte; consume it so the loop always advances
                        self.pos = next_char_boundary(self.source, self.pos + 1);
                        continue;
                    }
                    self.skip_whitespace();
                    let value = if self.peek_byte() == Some(b'=') {
                        self.pos += 1;
                        self.skip_whitespace();
                        self.read_attr_value()
                    } else {
                        String::new()
                    };
                    el.set_attr(name, value);
                }
            }
        }
    }

    fn read_attr_value(&mut self) -> String {
        match self.peek_byte() {
            Some(quote @ (b'"' | b'\'')) => {
                self.pos += 1;
                let start = self.pos;
                let end = self.source[start..]
                    .find(quote as char)
                    .map_or(self.source.len(), |rel| start + rel);
                let raw = &self.source[start..end];
                self.pos = (end + 1).min(self.source.len());
                entities::decode(raw)
            }
            _ => {
                let start = self.pos;
                while let Some(b) = self.peek_byte() {
                    if b.is_ascii_whitespace() || b == b'>' || b == b'/' {
                        break;
                    }
                    self.pos = next_char_boundary(self.source, self.pos + 1);
                }
                entities::decode(&self.source[start..self.pos])
            }
        }
    }

    /// Consume the body of a raw-text element up to its matching end tag
    fn consume_raw_text(&mut self, mut el: Element) {
        let start = self.pos;
        match find_end_tag_ci(&self.source[start..], &el.tag) {
            Some(rel) => {
                let body = &self.source[start..start + rel];
                if !body.is_empty() {
                    el.children.push(Node::Text(body.to_string()));
                }
                self.pos = start + rel;
                self.skip_past_gt();
            }
            None => {
                self.issues.push(ParseIssue {
                    kind: IssueKind::UnterminatedRawText {
                        tag: el.tag.clone(),
                    },
                    offset: start,
                });
                let body = &self.source[start..];
                if !body.is_empty() {
                    el.children.push(Node::Text(body.to_string()));
                }
                self.pos = self.source.len();
            }
        }
        self.attach(el);
    }

    /// Read a tag name: ASCII alphanumerics plus `-`/`:`, lowercased
    fn read_name(&mut self) -> String {
        let start = self.pos;
        while let Some(b) = self.peek_byte() {
            if b.is_ascii_alphanumeric() || b == b'-' || b == b':' {
                self.pos += 1;
            } else {
                break;
            }
        }
        self.source[start..self.pos].to_ascii_lowercase()
    }

    /// Read an attribute name: anything up to `=`, whitespace, `>` or `/`
    fn read_attr_name(&mut self) -> String {
        let start = self.pos;
        while let Some(b) = self.peek_byte() {
            if b == b'=' || b == b'>' || b == b'/' || b.is_ascii_whitespace() {
                break;
            }
            self.pos = next_char_boundary(self.source, self.pos + 1);
        }
        self.source[start..self.pos].to_ascii_lowercase()
    }

    fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek_byte() {
            if b.is_ascii_whitespace() {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn skip_past_gt(&mut self) {
        match self.source[self.pos..].find('>') {
            Some(rel) => self.pos += rel + 1,
            None => self.pos = self.source.len(),
        }
    }

    fn peek_byte(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos).copied()
    }
}

/// Whether the `<` starting `rest` opens a markup construct
fn is_markup_start(rest: &str) -> bool {
    match rest.as_bytes().get(1) {
        Some(b) => b.is_ascii_alphabetic() || *b == b'/' || *b == b'!' || *b == b'?',
        None => false,
    }
}

/// Round a byte offset up to the next char boundary
fn next_char_boundary(source: &str, mut pos: usize) -> usize {
    while pos < source.len() && !source.is_char_boundary(pos) {
        pos += 1;
    }
    pos.min(source.len())
}

/// Case-insensitive search for `</tag` in raw-text content
///
/// Works on bytes throughout: candidate positions may fall anywhere in
/// multibyte content. The name must be followed by whitespace, `/`, `>`,
/// or end of input, so `</scripty>` does not terminate a `script` element.
fn find_end_tag_ci(haystack: &str, tag: &str) -> Option<usize> {
    let tag = tag.as_bytes();
    let needle_len = tag.len() + 2;
    let bytes = haystack.as_bytes();
    if bytes.len() < needle_len {
        return None;
    }
    (0..=bytes.len() - needle_len).find(|&i| {
        bytes[i] == b'<'
            && bytes[i + 1] == b'/'
            && bytes[i + 2..i + needle_len].eq_ignore_ascii_case(tag)
            && match bytes.get(i + needle_len) {
                None => true,
                Some(&b) => b == b'>' || b == b'/' || b.is_ascii_whitespace(),
            }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn first_element(fragment: &Fragment) -> &Element {
        fragment.root().children[0]
            .as_element()
            .expect("expected element")
    }

    #[test]
    fn parses_nested_elements() {
        let fragment = parse_fragment("<p>Hello <strong>World</strong>!</p>").unwrap();
        let p = first_element(&fragment);
        assert_eq!(p.tag, "p");
        assert_eq!(p.children.len(), 3);
        assert_eq!(p.text_content(), "Hello World!");
        assert!(fragment.issues().is_empty());
    }

    #[test]
    fn parses_attributes() {
        let fragment =
            parse_fragment(r#"<a href="https://example.com" class='link' hidden>x</a>"#).unwrap();
        let a = first_element(&fragment);
        assert_eq!(a.attr("href"), Some("https://example.com"));
        assert_eq!(a.attr("class"), Some("link"));
        assert_eq!(a.attr("hidden"), Some(""));
    }

    #[test]
    fn decodes_entities_in_text_and_attrs() {
        let fragment = parse_fragment(r#"<p title="a &amp; b">5 &lt; 6</p>"#).unwrap();
        let p = first_element(&fragment);
        assert_eq!(p.attr("title"), Some("a & b"));
        assert_eq!(p.text_content(), "5 < 6");
    }

    #[test]
    fn void_elements_take_no_children() {
        let fragment = parse_fragment("<p>one<br>two<img src=x>three</p>").unwrap();
        let p = first_element(&fragment);
        assert_eq!(p.text_content(), "onetwothree");
        assert_eq!(p.children.len(), 5);
    }

    #[test]
    fn self_closing_syntax_accepted() {
        let fragment = parse_fragment("<div><span/>after</div>").unwrap();
        let div = first_element(&fragment);
        assert_eq!(div.children.len(), 2);
        assert_eq!(div.text_content(), "after");
    }

    #[test]
    fn raw_text_swallows_markup() {
        let fragment = parse_fragment("<script>if (a < b) { x(\"<p>\"); }</script>").unwrap();
        let script = first_element(&fragment);
        assert_eq!(script.tag, "script");
        assert_eq!(script.text_content(), "if (a < b) { x(\"<p>\"); }");
    }

    #[test]
    fn raw_text_with_multibyte_content_parses() {
        // A stray "</" followed by multibyte text must not break the scan
        let fragment = parse_fragment("<script>a</b€€</script>").unwrap();
        let script = first_element(&fragment);
        assert_eq!(script.text_content(), "a</b€€");
        assert!(fragment.issues().is_empty());
    }

    #[test]
    fn raw_text_end_tag_requires_name_boundary() {
        let fragment = parse_fragment("<script>x</scripty></script>").unwrap();
        let script = first_element(&fragment);
        assert_eq!(script.text_content(), "x</scripty>");
        assert_eq!(fragment.root().children.len(), 1);
    }

    #[test]
    fn raw_text_end_tag_with_whitespace_accepted() {
        let fragment = parse_fragment("<style>a{}</style >after").unwrap();
        assert_eq!(first_element(&fragment).text_content(), "a{}");
        assert_eq!(fragment.root().children[1].as_text(), Some("after"));
    }

    #[test]
    fn raw_text_entities_not_decoded() {
        let fragment = parse_fragment("<style>a&amp;b</style>").unwrap();
        assert_eq!(first_element(&fragment).text_content(), "a&amp;b");
    }

    #[test]
    fn unclosed_elements_closed_at_eof() {
        let fragment = parse_fragment("<div><p>dangling").unwrap();
        let div = first_element(&fragment);
        assert_eq!(div.text_content(), "dangling");
        assert_eq!(fragment.issues().len(), 2);
    }

    #[test]
    fn stray_end_tag_ignored() {
        let fragment = parse_fragment("<p>text</span></p>").unwrap();
        assert_eq!(first_element(&fragment).text_content(), "text");
        assert!(matches!(
            fragment.issues()[0].kind,
            IssueKind::StrayEndTag { ref tag } if tag == "span"
        ));
    }

    #[test]
    fn end_tag_closes_intermediates() {
        let fragment = parse_fragment("<div><em>a<span>b</div>c").unwrap();
        let div = first_element(&fragment);
        assert_eq!(div.tag, "div");
        assert_eq!(div.text_content(), "ab");
        assert_eq!(fragment.root().children[1].as_text(), Some("c"));
    }

    #[test]
    fn literal_less_than_kept_as_text() {
        let fragment = parse_fragment("<p>a < b and a <3 b</p>").unwrap();
        assert_eq!(first_element(&fragment).text_content(), "a < b and a <3 b");
    }

    #[test]
    fn comments_preserved() {
        let fragment = parse_fragment("<p>a<!-- note -->b</p>").unwrap();
        let p = first_element(&fragment);
        assert_eq!(p.children.len(), 3);
        assert_eq!(p.text_content(), "ab");
    }

    #[test]
    fn doctype_junk_skipped() {
        let fragment = parse_fragment("<!DOCTYPE html><p>x</p>").unwrap();
        assert_eq!(fragment.text_content(), "x");
    }

    #[test]
    fn tag_names_lowercased() {
        let fragment = parse_fragment("<DIV CLASS=big>x</DIV>").unwrap();
        let div = first_element(&fragment);
        assert_eq!(div.tag, "div");
        assert_eq!(div.attr("class"), Some("big"));
    }

    #[test]
    fn nesting_limit_enforced() {
        let source = "<div>".repeat(MAX_DEPTH + 1);
        let err = parse_fragment(&source).unwrap_err();
        assert!(matches!(err, CoreError::NestingTooDeep { .. }));
    }

    #[test]
    fn empty_input_yields_empty_fragment() {
        let fragment = parse_fragment("").unwrap();
        assert!(fragment.root().children.is_empty());
        assert!(fragment.issues().is_empty());
    }
}

//! Inline `{...}` highlight markup.
//!
//! A marked column's cell text may wrap substrings in `{` `}` to request a
//! distinct highlight style; the delimiters themselves are never printed.
//! An unmatched opening delimiter (or a stray closing one) is not markup:
//! it stays a literal character, counts toward visible width, and passes
//! through unstyled.

/// Opening highlight delimiter.
pub const OPEN: char = '{';

/// Closing highlight delimiter.
pub const CLOSE: char = '}';

/// One piece of a parsed sub-line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Plain text, printed as-is.
    Literal(&'a str),
    /// Text that was enclosed in `{...}`; delimiters already removed.
    Marked(&'a str),
}

/// Splits a sub-line into literal and marked segments.
///
/// # Example
///
/// ```rust
/// use phonabet_render::table::markup::{segments, Segment};
///
/// assert_eq!(
///     segments("a{b}c"),
///     vec![
///         Segment::Literal("a"),
///         Segment::Marked("b"),
///         Segment::Literal("c"),
///     ]
/// );
/// // Unmatched opener stays literal
/// assert_eq!(segments("a{bc"), vec![Segment::Literal("a{bc")]);
/// ```
pub fn segments(line: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut rest = line;

    while let Some(open) = rest.find(OPEN) {
        let Some(close_rel) = rest[open + OPEN.len_utf8()..].find(CLOSE) else {
            // No closer left: the opener and everything after it is literal
            break;
        };
        let close = open + OPEN.len_utf8() + close_rel;

        if open > 0 {
            out.push(Segment::Literal(&rest[..open]));
        }
        out.push(Segment::Marked(&rest[open + OPEN.len_utf8()..close]));
        rest = &rest[close + CLOSE.len_utf8()..];
    }

    if !rest.is_empty() {
        out.push(Segment::Literal(rest));
    }
    out
}

/// Removes the delimiters of every balanced `{...}` pair, keeping the
/// enclosed text. Unbalanced delimiters are left in place.
///
/// # Example
///
/// ```rust
/// use phonabet_render::table::markup::strip;
///
/// assert_eq!(strip("a{b}c"), "abc");
/// assert_eq!(strip("no markup"), "no markup");
/// assert_eq!(strip("left{over"), "left{over");
/// ```
pub fn strip(line: &str) -> String {
    segments(line)
        .into_iter()
        .map(|seg| match seg {
            Segment::Literal(s) | Segment::Marked(s) => s,
        })
        .collect()
}

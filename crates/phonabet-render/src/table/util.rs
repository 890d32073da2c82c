//! ANSI-aware text measurement and padding.
//!
//! All functions here treat terminal escape sequences as invisible: they are
//! preserved in output but never count toward display width. Measurement is
//! in display cells, so CJK characters count as 2 and combining marks as 0.

use unicode_width::UnicodeWidthChar;

use super::types::Align;

/// Strategy for measuring the on-screen width of a string.
///
/// Implementations decide which byte sequences are invisible. The sizing and
/// rendering passes consume this trait rather than a hard-coded escape list,
/// so the width computation is decoupled from any specific terminal color
/// scheme.
pub trait VisibleWidth {
    /// Width of `text` in display cells, invisible sequences excluded.
    fn width(&self, text: &str) -> usize;
}

/// The default ANSI-aware measurer.
///
/// Skips ESC-introduced sequences (a CSI sequence ends at the first ASCII
/// letter or `~`) and sums per-character Unicode widths for the rest.
///
/// # Example
///
/// ```rust
/// use phonabet_render::{AnsiWidth, VisibleWidth};
///
/// assert_eq!(AnsiWidth.width("hello"), 5);
/// assert_eq!(AnsiWidth.width("\x1b[31mred\x1b[0m"), 3);
/// assert_eq!(AnsiWidth.width("日本"), 4); // CJK is 2 cells per char
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiWidth;

impl VisibleWidth for AnsiWidth {
    fn width(&self, text: &str) -> usize {
        let mut width = 0;
        let mut in_escape = false;

        for c in text.chars() {
            if c == '\x1b' {
                in_escape = true;
                continue;
            }
            if in_escape {
                // CSI sequences end with a letter (@ through ~)
                if c.is_ascii_alphabetic() || c == '~' {
                    in_escape = false;
                }
                continue;
            }
            width += UnicodeWidthChar::width(c).unwrap_or(0);
        }

        width
    }
}

/// Returns the display width of a string, ignoring ANSI escape codes.
pub fn display_width(s: &str) -> usize {
    AnsiWidth.width(s)
}

/// Pads a string on the left (right-aligns) to reach the target width.
///
/// # Example
///
/// ```rust
/// use phonabet_render::table::pad_left;
///
/// assert_eq!(pad_left("42", 5), "   42");
/// assert_eq!(pad_left("hello", 3), "hello"); // never truncates
/// ```
pub fn pad_left(s: &str, width: usize) -> String {
    pad_to(&AnsiWidth, s, width, Align::Right)
}

/// Pads a string on the right (left-aligns) to reach the target width.
pub fn pad_right(s: &str, width: usize) -> String {
    pad_to(&AnsiWidth, s, width, Align::Left)
}

/// Pads a string on both sides (centers) to reach the target width.
///
/// When the remaining space is odd, the extra cell goes on the right.
///
/// # Example
///
/// ```rust
/// use phonabet_render::table::pad_center;
///
/// assert_eq!(pad_center("hi", 6), "  hi  ");
/// assert_eq!(pad_center("hi", 5), " hi  "); // extra space on right
/// ```
pub fn pad_center(s: &str, width: usize) -> String {
    pad_to(&AnsiWidth, s, width, Align::Center)
}

/// Pads `s` to `width` display cells using the given measurer and alignment.
///
/// Strings already at or beyond the target width are returned unchanged;
/// padding never truncates.
pub(crate) fn pad_to(measure: &dyn VisibleWidth, s: &str, width: usize, align: Align) -> String {
    let current = measure.width(s);
    if current >= width {
        return s.to_string();
    }

    let extra = width - current;
    match align {
        Align::Left => format!("{}{}", s, " ".repeat(extra)),
        Align::Right => format!("{}{}", " ".repeat(extra), s),
        Align::Center => {
            let left = extra / 2;
            let right = extra - left;
            format!("{}{}{}", " ".repeat(left), s, " ".repeat(right))
        }
    }
}

//! Style registry for managing named styles.
//!
//! The renderer looks styles up by name ([`BRIGHT`] for highlighted columns,
//! [`MARK`] for `{...}` spans) and treats the resulting escape sequences as
//! invisible for width purposes. Unknown names fall back to unstyled text, so
//! a plain registry turns all styling off.

use console::Style;
use std::collections::HashMap;

/// Style name applied to the whole text of a highlighted column.
pub const BRIGHT: &str = "bright";

/// Style name applied to `{...}` spans in a marked column.
pub const MARK: &str = "mark";

/// A collection of named styles.
///
/// Styles are registered by name and applied to cell text during rendering.
/// Color output follows `console`'s terminal detection unless [`forced`].
///
/// # Example
///
/// ```rust
/// use phonabet_render::Styles;
/// use console::Style;
///
/// let styles = Styles::new()
///     .add("bright", Style::new().cyan())
///     .add("mark", Style::new().yellow());
///
/// // Unknown names pass text through unchanged
/// assert_eq!(styles.apply("typo", "hello"), "hello");
/// ```
///
/// [`forced`]: Styles::forced
#[derive(Debug, Clone, Default)]
pub struct Styles {
    styles: HashMap<String, Style>,
}

impl Styles {
    /// Creates an empty style registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with no styles at all. Every `apply` is a no-op, so
    /// rendered output is byte-stable plain text.
    pub fn plain() -> Self {
        Self::default()
    }

    /// The default terminal registry: cyan for [`BRIGHT`], yellow for
    /// [`MARK`]. Whether escape codes are actually emitted follows
    /// `console`'s terminal detection.
    pub fn terminal() -> Self {
        Self::new()
            .add(BRIGHT, Style::new().cyan())
            .add(MARK, Style::new().yellow())
    }

    /// Adds a named style, replacing any existing style with the same name.
    /// Returns self for chaining.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    /// Forces escape-code emission for every registered style, regardless of
    /// terminal detection. Used by tests and anywhere output must be
    /// deterministic.
    pub fn forced(mut self) -> Self {
        for style in self.styles.values_mut() {
            *style = style.clone().force_styling(true);
        }
        self
    }

    /// Applies the named style to `text`, returning the styled string.
    ///
    /// Unknown names return `text` unchanged.
    pub fn apply(&self, name: &str, text: &str) -> String {
        match self.styles.get(name) {
            Some(style) => style.apply_to(text).to_string(),
            None => text.to_string(),
        }
    }

    /// Whether a style with this name is registered.
    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }
}

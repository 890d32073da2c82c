//! Unicode-aware box-drawn table layout and rendering.
//!
//! Rendering is two sequential passes over the grid:
//!
//! 1. **Sizing** ([`Layout::measure`]): every cell is split on newlines into
//!    sub-lines; each sub-line's *visible* width (escapes and, in marked
//!    columns, `{` `}` delimiters excluded) feeds the running maximum per
//!    column, and the tallest cell sets each row's height.
//! 2. **Rendering** ([`TableRenderer::render`]): the table is emitted line by
//!    line: top border, each row's sub-lines with vertical bars and padded
//!    cells, separators between rows, bottom border after the last row.
//!
//! Width measurement goes through the [`VisibleWidth`] strategy so the
//! sizing pass is decoupled from any particular escape-sequence scheme;
//! [`AnsiWidth`] is the default ANSI-aware measurer.

mod layout;
pub mod markup;
mod renderer;
mod types;
mod util;

pub use layout::Layout;
pub use renderer::TableRenderer;
pub use types::{Align, TableSpec, TableSpecBuilder};
pub use util::{display_width, pad_center, pad_left, pad_right, AnsiWidth, VisibleWidth};

//! # Phonabet Render - Box-Drawn Terminal Tables
//!
//! `phonabet-render` lays out a two-dimensional grid of text cells as an
//! aligned, Unicode box-drawn table on a character terminal. It correctly
//! handles variable-width Unicode text, embedded ANSI escape sequences,
//! per-column alignment and color rules, and multi-line cells with
//! synchronized row heights.
//!
//! This crate is the rendering foundation for the `phonabet` CLI, but can be
//! used independently by any application that needs bordered tabular output.
//!
//! ## Core Concepts
//!
//! - [`TableSpec`]: the full input to the renderer — rows of cells, an
//!   optional header row, and per-column style directives
//! - [`TableRenderer`]: computes column widths and row heights from the
//!   *visible* content, then streams the table line by line to a [`Sink`]
//! - [`Styles`]: named-style registry supplying the highlight colors
//! - Inline markup: a `{...}` span in a marked column gets a distinct
//!   highlight style, with the delimiters stripped from output
//!
//! ## Quick Start
//!
//! ```rust
//! use phonabet_render::{Styles, TableRenderer, TableSpec};
//!
//! let spec = TableSpec::builder()
//!     .header(["Name", "Status"])
//!     .row(["Alice", "active"])
//!     .row(["Bob", "pending"])
//!     .build();
//!
//! let output = TableRenderer::render_to_string(&spec, Styles::plain()).unwrap();
//! assert!(output.starts_with('┌'));
//! ```
//!
//! ## Width Semantics
//!
//! Column widths are computed from visible width only: ANSI escape sequences
//! never count, and in marked columns the `{` `}` highlight delimiters do not
//! count either (they are replaced by styling in the output). Measurement is
//! Unicode-aware, so CJK characters count as two cells and combining marks as
//! zero.

pub mod error;
pub mod output;
pub mod style;
pub mod table;

pub use error::TableError;
pub use output::{BufferSink, Sink, StdoutSink};
pub use style::Styles;
pub use table::{
    display_width, Align, AnsiWidth, Layout, TableRenderer, TableSpec, TableSpecBuilder,
    VisibleWidth,
};

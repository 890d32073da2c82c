//! Core types for table specification.
//!
//! [`TableSpec`] is the full input to the renderer: body rows, an optional
//! header row, and typed per-column style directives (which columns are
//! centered, highlighted, or marked). A spec is built once per render; the
//! renderer never mutates or caches it.

use std::collections::BTreeSet;

/// Text alignment within a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    /// Left-align text (pad on the right).
    #[default]
    Left,
    /// Right-align text (pad on the left).
    Right,
    /// Center text (pad on both sides, extra cell on the right).
    Center,
}

/// Complete specification of a table to render.
///
/// All rows (the header included) must have the same cell count; a mismatch
/// is rejected by the sizing pass before any output is written.
#[derive(Clone, Debug)]
pub struct TableSpec {
    /// Body rows, in order.
    pub data: Vec<Vec<String>>,
    /// Optional header row, logically inserted as row 0 when present.
    pub header: Option<Vec<String>>,
    /// Alignment applied only to header cells.
    pub header_align: Align,
    /// Alignment for body cells absent a per-column override.
    pub default_align: Align,
    /// Body columns forced to centered alignment.
    pub center_columns: BTreeSet<usize>,
    /// Columns whose whole cell text gets the bright style.
    pub highlighted_columns: BTreeSet<usize>,
    /// Columns whose `{...}` spans get the mark style.
    pub marked_columns: BTreeSet<usize>,
}

impl Default for TableSpec {
    fn default() -> Self {
        TableSpec {
            data: Vec::new(),
            header: None,
            header_align: Align::Center,
            default_align: Align::Left,
            center_columns: BTreeSet::new(),
            highlighted_columns: BTreeSet::new(),
            marked_columns: BTreeSet::new(),
        }
    }
}

impl TableSpec {
    /// Create an empty spec with default directives.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a spec builder.
    pub fn builder() -> TableSpecBuilder {
        TableSpecBuilder::default()
    }

    /// Column count, established by the header when present, otherwise by
    /// the first body row.
    pub fn num_columns(&self) -> usize {
        self.header
            .as_ref()
            .or_else(|| self.data.first())
            .map(|row| row.len())
            .unwrap_or(0)
    }

    /// True when there is nothing to render at all.
    pub fn is_empty(&self) -> bool {
        self.header.is_none() && self.data.is_empty()
    }

    /// The effective grid: the header (when present) followed by the body.
    pub(crate) fn grid(&self) -> impl Iterator<Item = &Vec<String>> {
        self.header.iter().chain(self.data.iter())
    }

    /// Whether `grid_row` indexes the synthesized header row.
    pub(crate) fn is_header_row(&self, grid_row: usize) -> bool {
        self.header.is_some() && grid_row == 0
    }

    /// Alignment for one cell of the effective grid.
    pub(crate) fn align_for(&self, grid_row: usize, col: usize) -> Align {
        if self.is_header_row(grid_row) {
            self.header_align
        } else if self.center_columns.contains(&col) {
            Align::Center
        } else {
            self.default_align
        }
    }
}

/// Builder for constructing [`TableSpec`] instances.
#[derive(Clone, Debug, Default)]
pub struct TableSpecBuilder {
    spec: TableSpec,
}

impl TableSpecBuilder {
    /// Set the header row.
    pub fn header<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.spec.header = Some(cells.into_iter().map(Into::into).collect());
        self
    }

    /// Append one body row.
    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.spec
            .data
            .push(cells.into_iter().map(Into::into).collect());
        self
    }

    /// Append multiple body rows.
    pub fn rows<I, R, S>(mut self, rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for row in rows {
            self.spec
                .data
                .push(row.into_iter().map(Into::into).collect());
        }
        self
    }

    /// Set the header alignment (default: centered).
    pub fn header_align(mut self, align: Align) -> Self {
        self.spec.header_align = align;
        self
    }

    /// Set the body default alignment (default: left).
    pub fn default_align(mut self, align: Align) -> Self {
        self.spec.default_align = align;
        self
    }

    /// Force a body column to centered alignment.
    pub fn center_column(mut self, col: usize) -> Self {
        self.spec.center_columns.insert(col);
        self
    }

    /// Apply the bright style to a column's whole cell text.
    pub fn highlight_column(mut self, col: usize) -> Self {
        self.spec.highlighted_columns.insert(col);
        self
    }

    /// Treat `{...}` spans in a column as highlight markup.
    pub fn mark_column(mut self, col: usize) -> Self {
        self.spec.marked_columns.insert(col);
        self
    }

    /// Build the [`TableSpec`].
    pub fn build(self) -> TableSpec {
        self.spec
    }
}

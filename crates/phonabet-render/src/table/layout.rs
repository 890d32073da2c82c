//! Sizing pass: column widths and row heights.
//!
//! [`Layout::measure`] walks the effective grid once, splitting cells into
//! newline-separated sub-lines. A column's width is the maximum visible
//! width of any sub-line it holds; a row's height is the sub-line count of
//! its tallest cell. The render pass then emits against these fixed sizes.

use super::markup;
use super::types::TableSpec;
use super::util::{AnsiWidth, VisibleWidth};
use crate::error::TableError;

/// Resolved sizes for one render, computed fresh per call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    /// Visible width of each column in display cells.
    pub column_widths: Vec<usize>,
    /// Printed text-line count of each effective-grid row (header first
    /// when present), minimum 1.
    pub row_heights: Vec<usize>,
}

impl Layout {
    /// Measure a spec with the default ANSI-aware width measurer.
    ///
    /// Fails with [`TableError::ColumnMismatch`] when any row's cell count
    /// differs from the table's column count.
    pub fn measure(spec: &TableSpec) -> Result<Layout, TableError> {
        Self::measure_with(spec, &AnsiWidth)
    }

    /// Measure a spec with an injected width measurer.
    ///
    /// Visible width excludes whatever the measurer treats as invisible
    /// (escape sequences for [`AnsiWidth`]) and, in marked columns only,
    /// the balanced `{` `}` delimiter pairs.
    pub fn measure_with(
        spec: &TableSpec,
        measure: &dyn VisibleWidth,
    ) -> Result<Layout, TableError> {
        let columns = spec.num_columns();
        let mut column_widths = vec![0usize; columns];
        let mut row_heights = Vec::new();

        for (r, row) in spec.grid().enumerate() {
            if row.len() != columns {
                return Err(TableError::ColumnMismatch {
                    row: r,
                    expected: columns,
                    found: row.len(),
                });
            }

            let mut height = 1;
            for (c, cell) in row.iter().enumerate() {
                let mut sub_lines = 0;
                for line in cell.split('\n') {
                    sub_lines += 1;
                    let visible = if spec.marked_columns.contains(&c) {
                        measure.width(&markup::strip(line))
                    } else {
                        measure.width(line)
                    };
                    column_widths[c] = column_widths[c].max(visible);
                }
                height = height.max(sub_lines);
            }
            row_heights.push(height);
        }

        Ok(Layout {
            column_widths,
            row_heights,
        })
    }

    /// Total printed width of every line: content cells plus the left,
    /// inner, and right border bars.
    pub fn total_width(&self) -> usize {
        self.column_widths.iter().sum::<usize>() + self.column_widths.len() + 1
    }
}

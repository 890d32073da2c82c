//! Render pass: borders, alignment, and styled cell emission.

use super::layout::Layout;
use super::markup::{self, Segment};
use super::types::{Align, TableSpec};
use super::util::{pad_to, AnsiWidth, VisibleWidth};
use crate::error::TableError;
use crate::output::{BufferSink, Sink};
use crate::style::{self, Styles};

/// Light Unicode box-drawing characters for the table frame.
#[derive(Clone, Copy, Debug)]
struct BorderChars {
    horizontal: char,
    vertical: char,
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
    left_t: char,
    cross: char,
    right_t: char,
    top_t: char,
    bottom_t: char,
}

const LIGHT: BorderChars = BorderChars {
    horizontal: '─',
    vertical: '│',
    top_left: '┌',
    top_right: '┐',
    bottom_left: '└',
    bottom_right: '┘',
    left_t: '├',
    cross: '┼',
    right_t: '┤',
    top_t: '┬',
    bottom_t: '┴',
};

/// Kind of horizontal border line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LineKind {
    Top,
    Middle,
    Bottom,
}

/// Renders a [`TableSpec`] as a bordered table on an output sink.
///
/// The renderer holds the sink, the style registry, and the width measurer.
/// Each [`render`] call is self-contained: sizing is computed fresh from the
/// given spec and discarded afterwards.
///
/// # Example
///
/// ```rust
/// use phonabet_render::{BufferSink, Styles, TableRenderer, TableSpec};
///
/// let spec = TableSpec::builder()
///     .header(["Name"])
///     .row(["Alice"])
///     .build();
///
/// let mut renderer = TableRenderer::new(BufferSink::new()).styles(Styles::plain());
/// renderer.render(&spec).unwrap();
/// let output = renderer.into_sink().into_string();
/// assert_eq!(output.lines().count(), 5); // top, header, separator, body, bottom
/// ```
///
/// [`render`]: TableRenderer::render
pub struct TableRenderer<W: Sink> {
    sink: W,
    styles: Styles,
    measure: Box<dyn VisibleWidth>,
}

impl<W: Sink> TableRenderer<W> {
    /// Create a renderer writing to `sink` with the default terminal styles
    /// and the ANSI-aware width measurer.
    pub fn new(sink: W) -> Self {
        TableRenderer {
            sink,
            styles: Styles::terminal(),
            measure: Box::new(AnsiWidth),
        }
    }

    /// Replace the style registry.
    pub fn styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    /// Replace the width measurer.
    pub fn measure(mut self, measure: impl VisibleWidth + 'static) -> Self {
        self.measure = Box::new(measure);
        self
    }

    /// Consume the renderer, returning the sink.
    pub fn into_sink(self) -> W {
        self.sink
    }

    /// Render the spec to the sink, line by line.
    ///
    /// An empty spec (no header, no body) writes nothing. A malformed spec
    /// fails before any line is written; a table is never half-emitted
    /// except when the sink itself errors mid-write.
    pub fn render(&mut self, spec: &TableSpec) -> Result<(), TableError> {
        for line in self.assemble(spec)? {
            self.sink.write_line(&line)?;
        }
        Ok(())
    }

    /// Assemble every output line without touching the sink.
    fn assemble(&self, spec: &TableSpec) -> Result<Vec<String>, TableError> {
        if spec.is_empty() {
            return Ok(Vec::new());
        }

        let layout = Layout::measure_with(spec, self.measure.as_ref())?;
        let grid: Vec<&Vec<String>> = spec.grid().collect();

        let mut lines = Vec::new();
        lines.push(border_line(&layout, LineKind::Top));

        for (r, row) in grid.iter().enumerate() {
            if r > 0 {
                lines.push(border_line(&layout, LineKind::Middle));
            }
            for sub in 0..layout.row_heights[r] {
                lines.push(self.content_line(spec, &layout, r, row, sub));
            }
        }

        lines.push(border_line(&layout, LineKind::Bottom));
        Ok(lines)
    }

    /// One printed text-line of a row: left bar, padded cells with inner
    /// bars, right bar.
    fn content_line(
        &self,
        spec: &TableSpec,
        layout: &Layout,
        grid_row: usize,
        row: &[String],
        sub: usize,
    ) -> String {
        let mut line = String::new();
        line.push(LIGHT.vertical);

        for (c, cell) in row.iter().enumerate() {
            if c > 0 {
                line.push(LIGHT.vertical);
            }
            // Cells shorter than the row height pad out with empty sub-lines
            let text = cell.split('\n').nth(sub).unwrap_or("");
            line.push_str(&self.format_cell(
                spec,
                text,
                layout.column_widths[c],
                spec.align_for(grid_row, c),
                c,
            ));
        }

        line.push(LIGHT.vertical);
        line
    }

    /// Style and pad one sub-line of one cell.
    fn format_cell(
        &self,
        spec: &TableSpec,
        text: &str,
        width: usize,
        align: Align,
        col: usize,
    ) -> String {
        let styled = if spec.marked_columns.contains(&col) {
            self.apply_marks(text)
        } else {
            text.to_string()
        };

        let styled = if spec.highlighted_columns.contains(&col) {
            self.styles.apply(style::BRIGHT, &styled)
        } else {
            styled
        };

        pad_to(self.measure.as_ref(), &styled, width, align)
    }

    /// Strip `{...}` delimiters and wrap the enclosed spans in the mark
    /// style; unmatched delimiters pass through unstyled.
    fn apply_marks(&self, text: &str) -> String {
        markup::segments(text)
            .into_iter()
            .map(|seg| match seg {
                Segment::Literal(s) => s.to_string(),
                Segment::Marked(s) => self.styles.apply(style::MARK, s),
            })
            .collect()
    }
}

impl TableRenderer<BufferSink> {
    /// Render a spec into a string using the given styles.
    pub fn render_to_string(spec: &TableSpec, styles: Styles) -> Result<String, TableError> {
        let mut renderer = TableRenderer::new(BufferSink::new()).styles(styles);
        renderer.render(spec)?;
        Ok(renderer.into_sink().into_string())
    }
}

/// A horizontal border: corner or T-piece, per-column fill, joints at every
/// column boundary.
fn border_line(layout: &Layout, kind: LineKind) -> String {
    let (left, joint, right) = match kind {
        LineKind::Top => (LIGHT.top_left, LIGHT.top_t, LIGHT.top_right),
        LineKind::Middle => (LIGHT.left_t, LIGHT.cross, LIGHT.right_t),
        LineKind::Bottom => (LIGHT.bottom_left, LIGHT.bottom_t, LIGHT.bottom_right),
    };

    let mut line = String::new();
    line.push(left);
    for (i, &width) in layout.column_widths.iter().enumerate() {
        if i > 0 {
            line.push(joint);
        }
        for _ in 0..width {
            line.push(LIGHT.horizontal);
        }
    }
    line.push(right);
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::display_width;
    use console::Style;

    fn render_plain(spec: &TableSpec) -> String {
        TableRenderer::render_to_string(spec, Styles::plain()).unwrap()
    }

    fn forced_styles() -> Styles {
        Styles::new()
            .add(style::BRIGHT, Style::new().cyan())
            .add(style::MARK, Style::new().red())
            .forced()
    }

    #[test]
    fn single_cell_box() {
        let spec = TableSpec::builder().row(["hi"]).build();
        assert_eq!(render_plain(&spec), "┌──┐\n│hi│\n└──┘\n");
    }

    #[test]
    fn header_and_body_box() {
        // Scenario: header ["Name"], body [["Alice"]] — interior width 5
        let spec = TableSpec::builder().header(["Name"]).row(["Alice"]).build();
        assert_eq!(
            render_plain(&spec),
            "┌─────┐\n\
             │Name │\n\
             ├─────┤\n\
             │Alice│\n\
             └─────┘\n"
        );
    }

    #[test]
    fn separators_between_rows_only() {
        let spec = TableSpec::builder()
            .row(["a"])
            .row(["b"])
            .row(["c"])
            .build();
        let output = render_plain(&spec);
        let lines: Vec<&str> = output.lines().collect();
        // one top border, two separators, one bottom border
        assert_eq!(lines.len(), 7);
        assert_eq!(lines.iter().filter(|l| l.starts_with('┌')).count(), 1);
        assert_eq!(lines.iter().filter(|l| l.starts_with('├')).count(), 2);
        assert_eq!(lines.iter().filter(|l| l.starts_with('└')).count(), 1);
    }

    #[test]
    fn border_joints_at_column_boundaries() {
        let spec = TableSpec::builder().row(["ab", "c"]).build();
        assert_eq!(
            render_plain(&spec),
            "┌──┬─┐\n\
             │ab│c│\n\
             └──┴─┘\n"
        );
    }

    #[test]
    fn empty_spec_writes_nothing() {
        let spec = TableSpec::new();
        assert_eq!(render_plain(&spec), "");
    }

    #[test]
    fn multi_line_cell_pads_shorter_neighbors() {
        let spec = TableSpec::builder()
            .row(["line1\nline2longer", "x"])
            .build();
        assert_eq!(
            render_plain(&spec),
            "┌───────────┬─┐\n\
             │line1      │x│\n\
             │line2longer│ │\n\
             └───────────┴─┘\n"
        );
    }

    #[test]
    fn every_line_has_equal_visible_width() {
        let spec = TableSpec::builder()
            .header(["Type", "Name", "Examples"])
            .row(["vowel", "Around-around", "{a} in about\n{a} in Tina"])
            .row(["consonant", "Pop-pop", "{p} in pop"])
            .mark_column(2)
            .highlight_column(1)
            .build();
        let output =
            TableRenderer::render_to_string(&spec, forced_styles()).unwrap();
        let widths: Vec<usize> = output.lines().map(display_width).collect();
        assert!(!widths.is_empty());
        assert!(
            widths.iter().all(|&w| w == widths[0]),
            "ragged line widths: {:?}",
            widths
        );
    }

    #[test]
    fn marked_span_styled_and_delimiters_stripped() {
        let spec = TableSpec::builder().row(["a{b}c"]).mark_column(0).build();
        let output = TableRenderer::render_to_string(&spec, forced_styles()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[1], "│a\x1b[31mb\x1b[0mc│");
        // visible width 3, not 5
        assert_eq!(lines[0], "┌───┐");
    }

    #[test]
    fn marked_column_plain_styles_still_strips() {
        let spec = TableSpec::builder().row(["a{b}c"]).mark_column(0).build();
        assert_eq!(render_plain(&spec), "┌───┐\n│abc│\n└───┘\n");
    }

    #[test]
    fn unmarked_column_keeps_braces_verbatim() {
        let spec = TableSpec::builder().row(["a{b}c"]).build();
        assert_eq!(render_plain(&spec), "┌─────┐\n│a{b}c│\n└─────┘\n");
    }

    #[test]
    fn unmatched_delimiter_passes_through_unstyled() {
        let spec = TableSpec::builder().row(["ab{cd"]).mark_column(0).build();
        let output = TableRenderer::render_to_string(&spec, forced_styles()).unwrap();
        assert!(output.contains("ab{cd"));
        assert!(!output.contains('\x1b'));
    }

    #[test]
    fn highlighted_column_wraps_whole_cell() {
        let spec = TableSpec::builder()
            .row(["hot", "cold"])
            .highlight_column(0)
            .build();
        let output = TableRenderer::render_to_string(&spec, forced_styles()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[1], "│\x1b[36mhot\x1b[0m│cold│");
    }

    #[test]
    fn centered_column_splits_padding() {
        let spec = TableSpec::builder()
            .row(["ab", "wide-neighbor"])
            .row(["x", "wide-neighbor"])
            .center_column(0)
            .build();
        let output = render_plain(&spec);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[1], "│ab│wide-neighbor│");
        // odd leftover: floor on the left, remainder on the right
        assert_eq!(lines[3], "│x │wide-neighbor│");
    }

    #[test]
    fn right_alignment_pads_left() {
        let spec = TableSpec::builder()
            .row(["1", "filler"])
            .row(["9999", "filler"])
            .default_align(Align::Right)
            .build();
        let output = render_plain(&spec);
        assert!(output.contains("│   1│"));
        assert!(output.contains("│9999│"));
    }

    #[test]
    fn header_centered_by_default() {
        let spec = TableSpec::builder()
            .header(["Hd"])
            .row(["body-cell"])
            .build();
        let output = render_plain(&spec);
        let lines: Vec<&str> = output.lines().collect();
        // 9 wide: 3 left, 4 right
        assert_eq!(lines[1], "│   Hd    │");
    }

    #[test]
    fn zero_width_column_renders_bar_pair() {
        let spec = TableSpec::builder().row(["", "x"]).build();
        assert_eq!(render_plain(&spec), "┌┬─┐\n││x│\n└┴─┘\n");
    }

    #[test]
    fn malformed_spec_writes_nothing() {
        let spec = TableSpec::builder().row(["a", "b"]).row(["c"]).build();
        let mut renderer = TableRenderer::new(BufferSink::new()).styles(Styles::plain());
        let err = renderer.render(&spec).unwrap_err();
        assert!(matches!(err, TableError::ColumnMismatch { .. }));
        assert_eq!(renderer.into_sink().contents(), "");
    }

    #[test]
    fn header_only_renders_box() {
        let spec = TableSpec::builder().header(["Hd"]).build();
        assert_eq!(render_plain(&spec), "┌──┐\n│Hd│\n└──┘\n");
    }

    #[test]
    fn cjk_cells_align() {
        let spec = TableSpec::builder()
            .row(["日本", "ok"])
            .row(["x", "ok"])
            .build();
        let output = render_plain(&spec);
        let widths: Vec<usize> = output.lines().map(display_width).collect();
        assert!(widths.iter().all(|&w| w == widths[0]));
        assert!(output.contains("│日本│"));
        assert!(output.contains("│x   │"));
    }
}

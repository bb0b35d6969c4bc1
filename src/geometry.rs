//! The label grid: resolved sheet geometry, the cursor walking over it, and the
//! rectangles and cut lines derived from both.
//!
//! Everything here is in millimetres, measured from the top-left corner of the page.

use crate::format::LabelFormat;
use crate::pagesize;
use crate::units::{self, Mm};
use crate::LabelError;

/// Inset applied to every edge of a label before content is drawn into it
pub const DEFAULT_LABEL_PADDING: Mm = Mm(3.0);

/// A point on the page, from the top-left corner
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Point {
    pub x: Mm,
    pub y: Mm,
}

/// Width and height of something on the page
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Size {
    pub width: Mm,
    pub height: Mm,
}

/// The area inside one grid cell that content should be drawn into. Produced fresh for
/// every placement.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Label {
    /// Top-left corner of the content area
    pub position: Point,
    /// Size of the content area, i.e. the label size less the padding on both sides
    pub size: Size,
}

/// A straight line between two points on the page
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineSegment {
    pub from: Point,
    pub to: Point,
}

/// A [LabelFormat] with every length converted to millimetres and the paper size
/// resolved to physical dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedGeometry {
    pub page_size: Size,
    pub margin_left: Mm,
    pub margin_top: Mm,
    pub space_x: Mm,
    pub space_y: Mm,
    pub columns: usize,
    pub rows: usize,
    pub label_size: Size,
    pub padding: Mm,
    pub cut_lines: bool,
}

impl ResolvedGeometry {
    /// Convert a format into millimetres, using [DEFAULT_LABEL_PADDING].
    ///
    /// Fails if the format's unit can't be converted, or if its paper size is unknown.
    pub fn resolve(format: &LabelFormat) -> Result<ResolvedGeometry, LabelError> {
        let to_mm = |value: f32| units::convert(value, &format.unit, "mm").map(Mm);

        let (page_width, page_height) = pagesize::from_name(&format.paper_size)
            .ok_or_else(|| LabelError::UnknownPaperSize(format.paper_size.clone()))?;

        Ok(ResolvedGeometry {
            page_size: Size {
                width: page_width.into(),
                height: page_height.into(),
            },
            margin_left: to_mm(format.margin_left)?,
            margin_top: to_mm(format.margin_top)?,
            space_x: to_mm(format.space_x)?,
            space_y: to_mm(format.space_y)?,
            columns: format.columns,
            rows: format.rows,
            label_size: Size {
                width: to_mm(format.width)?,
                height: to_mm(format.height)?,
            },
            padding: DEFAULT_LABEL_PADDING,
            cut_lines: format.cut_lines,
        })
    }

    pub fn labels_per_page(&self) -> usize {
        self.columns * self.rows
    }

    /// The padded content area of the cell at (`row`, `col`)
    pub fn label_at(&self, row: usize, col: usize) -> Label {
        let pitch_x = self.label_size.width + self.space_x;
        let pitch_y = self.label_size.height + self.space_y;

        Label {
            position: Point {
                x: self.margin_left + pitch_x * col as f32 + self.padding,
                y: self.margin_top + pitch_y * row as f32 + self.padding,
            },
            size: Size {
                width: self.label_size.width - self.padding * 2.0,
                height: self.label_size.height - self.padding * 2.0,
            },
        }
    }

    /// Guides for cutting the sheet apart: `columns + 1` vertical lines followed by
    /// `rows + 1` horizontal lines, each centred in the gutter between labels and
    /// running across the whole page. Empty if the format doesn't want cut lines.
    pub fn cut_lines(&self) -> Vec<LineSegment> {
        if !self.cut_lines {
            return Vec::new();
        }

        let pitch_x = self.label_size.width + self.space_x;
        let pitch_y = self.label_size.height + self.space_y;
        let mut lines = Vec::with_capacity(self.columns + self.rows + 2);

        for col in 0..=self.columns {
            let x = self.margin_left + pitch_x * col as f32 - self.space_x / 2.0;
            lines.push(LineSegment {
                from: Point { x, y: Mm(0.0) },
                to: Point {
                    x,
                    y: self.page_size.height,
                },
            });
        }

        for row in 0..=self.rows {
            let y = self.margin_top + pitch_y * row as f32 - self.space_y / 2.0;
            lines.push(LineSegment {
                from: Point { x: Mm(0.0), y },
                to: Point {
                    x: self.page_size.width,
                    y,
                },
            });
        }

        lines
    }
}

/// Where the next label goes. The position is a two-digit counter: the column ticks over
/// into the row, and the row ticking over flags that the next label needs a fresh page.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cursor {
    row: usize,
    col: usize,
    rows: usize,
    columns: usize,
    pending_page: bool,
}

impl Cursor {
    /// Start a cursor on a `rows` × `columns` grid. The starting position is reduced into
    /// the grid by taking the magnitude of its remainder, so callers can pass in how many
    /// rows/columns of a partially used sheet are already gone without range checks.
    ///
    /// A new cursor always has a page pending.
    ///
    /// Panics if `rows` or `columns` is zero; [LabelFormat::validate] rules that out for
    /// catalog formats.
    pub fn new(rows: usize, columns: usize, start_row: i64, start_col: i64) -> Cursor {
        assert!(rows > 0 && columns > 0, "label grid must not be empty");

        Cursor {
            row: normalize_start(start_row, rows),
            col: normalize_start(start_col, columns),
            rows,
            columns,
            pending_page: true,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Whether the next placement has to start a new page first
    pub fn pending_page(&self) -> bool {
        self.pending_page
    }

    /// Clear the pending flag, returning whether it was set
    pub fn take_pending_page(&mut self) -> bool {
        std::mem::replace(&mut self.pending_page, false)
    }

    /// Move to the next cell, left to right then top to bottom
    pub fn advance(&mut self) {
        self.col += 1;
        if self.col >= self.columns {
            self.col = 0;
            self.row += 1;

            if self.row >= self.rows {
                self.row = 0;
                self.pending_page = true;
            }
        }
    }
}

fn normalize_start(start: i64, count: usize) -> usize {
    (start % count as i64).unsigned_abs() as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Catalog;
    use proptest::prelude::*;

    fn business_cards() -> ResolvedGeometry {
        let catalog = Catalog::builtin();
        ResolvedGeometry::resolve(catalog.lookup("90x54").unwrap()).expect("format resolves")
    }

    fn close(a: Mm, b: Mm) -> bool {
        (*a - *b).abs() < 1e-4
    }

    #[test]
    fn inch_formats_resolve_to_mm() {
        let catalog = Catalog::builtin();
        let geometry = ResolvedGeometry::resolve(catalog.lookup("5160").unwrap()).unwrap();
        assert!(close(geometry.label_size.width, Mm(2.625 * 25.4)));
        assert!(close(geometry.label_size.height, Mm(25.4)));
        assert!(close(geometry.margin_top, Mm(12.7)));
        assert!(close(geometry.page_size.width, Mm(215.9)));
        assert_eq!(geometry.padding, DEFAULT_LABEL_PADDING);
    }

    #[test]
    fn mm_formats_are_copied_exactly() {
        let geometry = business_cards();
        assert_eq!(geometry.margin_left, Mm(15.0));
        assert_eq!(geometry.margin_top, Mm(13.5));
        assert_eq!(geometry.label_size.width, Mm(90.0));
        assert_eq!(geometry.label_size.height, Mm(54.0));
    }

    #[test]
    fn unsupported_units_stop_resolution() {
        let mut format = Catalog::builtin().lookup("90x54").unwrap().clone();
        format.unit = "furlong".to_string();
        let err = ResolvedGeometry::resolve(&format).unwrap_err();
        assert!(matches!(err, LabelError::UnsupportedUnit { .. }));
    }

    #[test]
    fn unknown_paper_stops_resolution() {
        let mut format = Catalog::builtin().lookup("90x54").unwrap().clone();
        format.paper_size = "Foolscap".to_string();
        let err = ResolvedGeometry::resolve(&format).unwrap_err();
        assert!(matches!(err, LabelError::UnknownPaperSize(name) if name == "Foolscap"));
    }

    #[test]
    fn first_label_sits_inside_the_margins() {
        let geometry = business_cards();
        let label = geometry.label_at(0, 0);
        assert_eq!(label.position.x, Mm(15.0 + 3.0));
        assert_eq!(label.position.y, Mm(13.5 + 3.0));
        assert_eq!(label.size.width, Mm(84.0));
        assert_eq!(label.size.height, Mm(48.0));
    }

    #[test]
    fn spacing_is_included_in_the_pitch() {
        let catalog = Catalog::builtin();
        let geometry = ResolvedGeometry::resolve(catalog.lookup("L7160").unwrap()).unwrap();
        let label = geometry.label_at(2, 1);
        assert!(close(label.position.x, Mm(7.2 + (63.5 + 2.5) + 3.0)));
        assert!(close(label.position.y, Mm(15.15 + 2.0 * 38.1 + 3.0)));
    }

    #[test]
    fn cut_lines_sit_in_the_gutters() {
        let catalog = Catalog::builtin();
        let mut geometry = ResolvedGeometry::resolve(catalog.lookup("L7160").unwrap()).unwrap();
        assert!(geometry.cut_lines().is_empty());

        geometry.cut_lines = true;
        let lines = geometry.cut_lines();
        assert_eq!(lines.len(), 3 + 1 + 7 + 1);

        let first_vertical = lines[0];
        assert!(close(first_vertical.from.x, Mm(7.2 - 1.25)));
        assert_eq!(first_vertical.from.y, Mm(0.0));
        assert_eq!(first_vertical.to.y, geometry.page_size.height);

        let last_vertical = lines[3];
        assert!(close(last_vertical.from.x, Mm(7.2 + 3.0 * 66.0 - 1.25)));

        let first_horizontal = lines[4];
        assert!(close(first_horizontal.from.y, Mm(15.15)));
        assert_eq!(first_horizontal.to.x, geometry.page_size.width);
    }

    #[test]
    fn start_position_wraps_into_the_grid() {
        let cursor = Cursor::new(2, 2, 4, 1);
        assert_eq!((cursor.row(), cursor.col()), (0, 1));
        assert!(cursor.pending_page());

        let cursor = Cursor::new(5, 2, -1, -3);
        assert_eq!((cursor.row(), cursor.col()), (1, 1));
    }

    #[test]
    fn cursor_rolls_over_to_a_new_page() {
        let mut cursor = Cursor::new(5, 2, 4, 1);
        assert!(cursor.take_pending_page());
        assert!(!cursor.pending_page());

        cursor.advance();
        assert_eq!((cursor.row(), cursor.col()), (0, 0));
        assert!(cursor.pending_page());
    }

    proptest! {
        #[test]
        fn advancing_counts_through_the_grid(rows in 1usize..12, columns in 1usize..12, n in 0usize..500) {
            let mut cursor = Cursor::new(rows, columns, 0, 0);
            cursor.take_pending_page();
            for _ in 0..n {
                cursor.advance();
            }

            prop_assert_eq!(cursor.row(), (n / columns) % rows);
            prop_assert_eq!(cursor.col(), n % columns);
            prop_assert_eq!(cursor.pending_page(), n > 0 && n % (rows * columns) == 0);
        }

        #[test]
        fn placement_follows_the_grid(row in 0usize..5, col in 0usize..2) {
            let geometry = business_cards();
            let label = geometry.label_at(row, col);
            let expected_x = 15.0 + col as f32 * (90.0 + 0.0) + 3.0;
            let expected_y = 13.5 + row as f32 * (54.0 + 0.0) + 3.0;
            prop_assert!((*label.position.x - expected_x).abs() < 1e-4);
            prop_assert!((*label.position.y - expected_y).abs() < 1e-4);
            prop_assert_eq!(label.size, Size { width: Mm(84.0), height: Mm(48.0) });
        }
    }
}

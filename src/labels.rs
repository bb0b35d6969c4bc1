//! Sheets of labels.
//!
//! A [`LabelDocument`] walks over the grid of a [`LabelFormat`](crate::LabelFormat)
//! one label at a time, left to right and top to bottom, starting new pages as sheets
//! fill up. Each label is either plain text ([`LabelDocument::add_label`]) or drawn by a
//! callback that receives the [`Canvas`] and the [`Label`] box to draw into
//! ([`LabelDocument::add_custom_label`]).
//!
//! # Example
//!
//! ```
//! use pdf_labels::{Align, LabelDocument, Mm, Pt};
//!
//! let mut doc = LabelDocument::new("90x54", 0, 0).expect("90x54 is a built-in format");
//! doc.canvas_mut().set_font("Helvetica", "", Pt(11.0)).unwrap();
//!
//! doc.add_label("Jane Doe\n12 Main St\nSpringfield");
//! doc.add_custom_label(|canvas, label| {
//!     canvas.set_font("Helvetica", "B", Pt(14.0)).unwrap();
//!     canvas.cell(label.size.width, label.size.height, "ACME Corp.", Align::CENTRE);
//!     canvas.rect(label.position.x, label.position.y, label.size.width, label.size.height);
//! });
//!
//! let pdf = doc.to_bytes().expect("can render");
//! assert!(pdf.starts_with(b"%PDF"));
//! ```

use crate::canvas::{Align, Canvas};
use crate::format::Catalog;
use crate::geometry::{Cursor, Label, ResolvedGeometry};
use crate::units::*;
use crate::LabelError;
use std::io::{BufWriter, Write};
use std::path::Path;

/// A PDF document made of sheets of labels
pub struct LabelDocument {
    format_name: String,
    geometry: ResolvedGeometry,
    cursor: Cursor,
    canvas: Canvas,
}

impl LabelDocument {
    /// Start a document using one of the [built-in formats](Catalog::builtin).
    ///
    /// `start_row` and `start_col` say where on the first sheet to begin, so sheets that
    /// are partially used up can be fed through the printer again. They are reduced into
    /// the grid by the magnitude of their remainder (`|row % rows|`), so any value is
    /// accepted.
    pub fn new(format_name: &str, start_row: i64, start_col: i64) -> Result<LabelDocument, LabelError> {
        Self::from_catalog(&Catalog::builtin(), format_name, start_row, start_col)
    }

    /// Start a document using a format from `catalog`, see [LabelDocument::new]
    pub fn from_catalog(
        catalog: &Catalog,
        format_name: &str,
        start_row: i64,
        start_col: i64,
    ) -> Result<LabelDocument, LabelError> {
        let format = catalog.lookup(format_name)?;
        let geometry = ResolvedGeometry::resolve(format)?;
        let cursor = Cursor::new(geometry.rows, geometry.columns, start_row, start_col);

        let page_size = (
            Pt::from(geometry.page_size.width),
            Pt::from(geometry.page_size.height),
        );

        log::debug!(
            "new label document: format {format_name} ({} × {} on {}), starting at row {}, column {}",
            geometry.columns,
            geometry.rows,
            format.paper_size,
            cursor.row(),
            cursor.col()
        );

        Ok(LabelDocument {
            format_name: format_name.to_string(),
            geometry,
            cursor,
            canvas: Canvas::new(page_size),
        })
    }

    /// Draw `text` into the next label, aligned to the top-left of the label. Each line
    /// of `text` becomes a line on the label; long lines are not wrapped.
    pub fn add_label(&mut self, text: &str) {
        self.add_custom_label(|canvas, label| {
            canvas.cell(label.size.width, label.size.height, text, Align::LEFT_TOP);
        });
    }

    /// Add one plain text label per item, see [LabelDocument::add_label]
    pub fn add_labels<I, S>(&mut self, texts: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for text in texts {
            self.add_label(text.as_ref());
        }
    }

    /// Draw the next label with `draw`, which receives the canvas (with its cursor
    /// already at the top-left of the label's content area) and the label's box.
    pub fn add_custom_label<F>(&mut self, draw: F)
    where
        F: FnOnce(&mut Canvas, Label),
    {
        let label = self.place();
        draw(&mut self.canvas, label);
        self.cursor.advance();
    }

    /// Leave the next label empty
    pub fn skip_label(&mut self) {
        self.cursor.advance();
    }

    fn place(&mut self) -> Label {
        if self.cursor.take_pending_page() {
            self.add_label_page();
        }

        let label = self
            .geometry
            .label_at(self.cursor.row(), self.cursor.col());
        log::trace!(
            "placing label at row {}, column {} on page {}",
            self.cursor.row(),
            self.cursor.col(),
            self.canvas.page_no()
        );
        self.canvas.set_xy(label.position.x, label.position.y);
        label
    }

    fn add_label_page(&mut self) {
        let page = self.canvas.add_page();
        log::debug!("started page {page} of {}", self.format_name);

        for line in self.geometry.cut_lines() {
            self.canvas
                .line(line.from.x, line.from.y, line.to.x, line.to.y);
        }
    }

    /// Change the inset between each label's edge and its content area. Affects labels
    /// placed from now on.
    pub fn set_label_padding(&mut self, padding: Mm) {
        self.geometry.padding = padding;
    }

    /// The name of the format this document was created with
    pub fn format_name(&self) -> &str {
        &self.format_name
    }

    /// The format's geometry, in millimetres
    pub fn geometry(&self) -> &ResolvedGeometry {
        &self.geometry
    }

    /// Where the next label will go
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn labels_per_page(&self) -> usize {
        self.geometry.labels_per_page()
    }

    pub fn page_count(&self) -> usize {
        self.canvas.page_count()
    }

    /// The 1-based number of the current page, or 0 if no label has been added yet
    pub fn page_no(&self) -> usize {
        self.canvas.page_no()
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// The canvas, for setting fonts, colours, line widths and document info
    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    /// Render the document and write it to `w`. A document without any labels still
    /// gets one (empty) sheet.
    pub fn write<W: Write>(mut self, w: W) -> Result<usize, LabelError> {
        if self.canvas.page_count() == 0 {
            self.add_label_page();
        }
        self.canvas.write(w)
    }

    /// Render the document into memory
    pub fn to_bytes(self) -> Result<Vec<u8>, LabelError> {
        let mut bytes = Vec::new();
        self.write(&mut bytes)?;
        Ok(bytes)
    }

    /// Render the document into a file at `path`, replacing the file if it exists
    pub fn output_to_file_and_close<P: AsRef<Path>>(self, path: P) -> Result<(), LabelError> {
        let file = std::fs::File::create(path.as_ref())?;
        self.write(BufWriter::new(file))?;
        Ok(())
    }
}

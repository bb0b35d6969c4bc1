//! A drawing surface with a top-left origin and millimetre coordinates.
//!
//! PDF page space has its origin at the bottom-left corner and measures in points.
//! Label sheets are specified from the top-left corner in millimetres (or inches), so
//! the [`Canvas`] translates between the two: everything passed in or returned is in
//! [`Mm`] from the top-left corner of the current page.
//!
//! The canvas keeps the state a typical PDF drawing API does: a drawing cursor, the
//! current font, text and line colours, and the line width. [`Canvas::cell`] draws text
//! at the cursor, the same way label content is drawn.

use crate::colour::{colours, Colour};
use crate::document::Document;
use crate::font::StandardFont;
use crate::image::Image;
use crate::info::Info;
use crate::layout::wrap_text;
use crate::page::{ImageLayout, LineLayout, OutlineLayout, Page, SpanFont, SpanLayout};
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::units::*;
use crate::LabelError;
use id_arena::Id;
use std::io::Write;

/// How text is placed within a cell, horizontally
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum HorizontalAlign {
    #[default]
    Left,
    Centre,
    Right,
}

/// How text is placed within a cell, vertically
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum VerticalAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// Alignment of a block of text inside a cell. The default is left/top.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Align {
    pub horizontal: HorizontalAlign,
    pub vertical: VerticalAlign,
}

impl Align {
    pub const LEFT_TOP: Align = Align {
        horizontal: HorizontalAlign::Left,
        vertical: VerticalAlign::Top,
    };
    pub const CENTRE: Align = Align {
        horizontal: HorizontalAlign::Centre,
        vertical: VerticalAlign::Middle,
    };

    pub fn new(horizontal: HorizontalAlign, vertical: VerticalAlign) -> Align {
        Align {
            horizontal,
            vertical,
        }
    }
}

/// Default stroke width for lines, roughly a hairline that still survives printing
pub const DEFAULT_LINE_WIDTH: Mm = Mm(0.2);
pub const DEFAULT_FONT_SIZE: Pt = Pt(12.0);

/// The render handle that label content is drawn through. See the [module
/// documentation](self) for the coordinate system.
pub struct Canvas {
    document: Document,
    page_size: PageSize,
    current_page: Option<usize>,
    x: Mm,
    y: Mm,
    font: StandardFont,
    font_size: Pt,
    text_colour: Colour,
    draw_colour: Colour,
    line_width: Mm,
}

impl Canvas {
    /// Create a canvas whose pages will all be `page_size`. No page exists until
    /// [Canvas::add_page] is called.
    pub fn new(page_size: PageSize) -> Canvas {
        Canvas {
            document: Document::default(),
            page_size,
            current_page: None,
            x: Mm(0.0),
            y: Mm(0.0),
            font: StandardFont::Helvetica,
            font_size: DEFAULT_FONT_SIZE,
            text_colour: colours::BLACK,
            draw_colour: colours::BLACK,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }

    /// Start a new page with no margins and move the cursor to its top-left corner.
    /// Returns the 1-based number of the new page.
    pub fn add_page(&mut self) -> usize {
        let index = self.document.add_page(Page::new(self.page_size));
        self.current_page = Some(index);
        self.x = Mm(0.0);
        self.y = Mm(0.0);
        index + 1
    }

    /// How many pages the document has
    pub fn page_count(&self) -> usize {
        self.document.pages.len()
    }

    /// The 1-based number of the page being drawn on, or 0 before the first page
    pub fn page_no(&self) -> usize {
        self.current_page.map(|i| i + 1).unwrap_or(0)
    }

    /// Width and height of the pages
    pub fn page_size(&self) -> (Mm, Mm) {
        (self.page_size.0.into(), self.page_size.1.into())
    }

    pub fn set_xy(&mut self, x: Mm, y: Mm) {
        self.x = x;
        self.y = y;
    }

    pub fn set_x(&mut self, x: Mm) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: Mm) {
        self.y = y;
    }

    /// The current position of the drawing cursor
    pub fn xy(&self) -> (Mm, Mm) {
        (self.x, self.y)
    }

    /// Select a standard font by family and style, i.e. `("Arial", "B", Pt(10.0))`.
    /// See [StandardFont::from_family] for what's accepted.
    pub fn set_font(&mut self, family: &str, style: &str, size: Pt) -> Result<(), LabelError> {
        let font = StandardFont::from_family(family, style)?;
        self.set_standard_font(font, size);
        Ok(())
    }

    pub fn set_standard_font(&mut self, font: StandardFont, size: Pt) {
        self.font = font;
        self.font_size = size;
    }

    pub fn set_font_size(&mut self, size: Pt) {
        self.font_size = size;
    }

    pub fn font(&self) -> (StandardFont, Pt) {
        (self.font, self.font_size)
    }

    /// Colour used for text
    pub fn set_text_colour<C: Into<Colour>>(&mut self, colour: C) {
        self.text_colour = colour.into();
    }

    /// Colour used for lines and outlines
    pub fn set_draw_colour<C: Into<Colour>>(&mut self, colour: C) {
        self.draw_colour = colour.into();
    }

    pub fn set_line_width(&mut self, width: Mm) {
        self.line_width = width;
    }

    pub fn set_info(&mut self, info: Info) {
        self.document.set_info(info);
    }

    /// Width of `text` in the current font
    pub fn string_width(&self, text: &str) -> Mm {
        self.font.width_of_text(text, self.font_size).into()
    }

    /// Distance between the baselines of two lines of text in the current font
    pub fn line_height(&self) -> Mm {
        self.font.line_height(self.font_size).into()
    }

    /// Draw `text` in a `width` × `height` box at the cursor, then move the cursor right
    /// by `width`. Every `\n` starts a new line; lines are never wrapped. Text that runs
    /// past the box is still drawn.
    pub fn cell(&mut self, width: Mm, height: Mm, text: &str, align: Align) {
        let lines: Vec<&str> = text.lines().collect();
        self.draw_lines(width, height, &lines, align);
        self.x += width;
    }

    /// Like [Canvas::cell], but wraps text at word boundaries to fit `width` and only
    /// draws the lines that fit in `height`. Returns how many lines were left out.
    pub fn multi_cell(&mut self, width: Mm, height: Mm, text: &str, align: Align) -> usize {
        let lines = wrap_text(text, self.font, self.font_size, width.into());
        let fits = if *self.line_height() > 0.0 {
            (*height / *self.line_height()).floor().max(0.0) as usize
        } else {
            lines.len()
        };
        let shown = lines.len().min(fits);

        let visible: Vec<&str> = lines[..shown].iter().map(String::as_str).collect();
        self.draw_lines(width, height, &visible, align);
        self.x += width;
        lines.len() - shown
    }

    fn draw_lines(&mut self, width: Mm, height: Mm, lines: &[&str], align: Align) {
        if lines.is_empty() {
            return;
        }

        let font_index = self.document.font_index(self.font);
        let line_height = self.line_height();
        let ascent: Mm = self.font.ascent(self.font_size).into();
        let block_height = line_height * (lines.len() - 1) as f32 + ascent
            - Mm::from(self.font.descent(self.font_size));

        let top = match align.vertical {
            VerticalAlign::Top => self.y,
            VerticalAlign::Middle => self.y + (height - block_height) / 2.0,
            VerticalAlign::Bottom => self.y + height - block_height,
        };

        let mut spans = Vec::with_capacity(lines.len());
        for (i, line) in lines.iter().enumerate() {
            let line_width = self.string_width(line);
            let x = match align.horizontal {
                HorizontalAlign::Left => self.x,
                HorizontalAlign::Centre => self.x + (width - line_width) / 2.0,
                HorizontalAlign::Right => self.x + width - line_width,
            };
            let baseline = top + ascent + line_height * i as f32;

            spans.push(SpanLayout {
                text: line.to_string(),
                font: SpanFont {
                    index: font_index,
                    size: self.font_size,
                },
                colour: self.text_colour,
                coords: self.to_page_space(x, baseline),
            });
        }

        if let Some(page) = self.page_mut() {
            for span in spans {
                page.add_span(span);
            }
        }
    }

    /// Draw a straight line between two points
    pub fn line(&mut self, x1: Mm, y1: Mm, x2: Mm, y2: Mm) {
        let line = LineLayout {
            from: self.to_page_space(x1, y1),
            to: self.to_page_space(x2, y2),
            colour: self.draw_colour,
            width: self.line_width.into(),
        };
        if let Some(page) = self.page_mut() {
            page.add_line(line);
        }
    }

    /// Outline a rectangle whose top-left corner is at (`x`, `y`)
    pub fn rect(&mut self, x: Mm, y: Mm, width: Mm, height: Mm) {
        let outline = OutlineLayout {
            rect: self.to_page_rect(x, y, width, height),
            colour: self.draw_colour,
            width: self.line_width.into(),
        };
        if let Some(page) = self.page_mut() {
            page.add_outline(outline);
        }
    }

    /// Store an image in the document so it can be drawn with [Canvas::image]
    pub fn add_image(&mut self, image: Image) -> Id<Image> {
        self.document.add_image(image)
    }

    /// Draw a stored image, stretched to fill the box whose top-left corner is at
    /// (`x`, `y`)
    pub fn image(&mut self, image: Id<Image>, x: Mm, y: Mm, width: Mm, height: Mm) {
        let layout = ImageLayout {
            image,
            position: self.to_page_rect(x, y, width, height),
        };
        if let Some(page) = self.page_mut() {
            page.add_image(layout);
        }
    }

    /// Pixel size of a stored image, if it exists
    pub fn image_size(&self, image: Id<Image>) -> Option<(u32, u32)> {
        self.document.images.get(image).map(|i| (i.width, i.height))
    }

    /// Serialize the whole document to `w`, returning the number of bytes written
    pub fn write<W: Write>(self, w: W) -> Result<usize, LabelError> {
        self.document.write(w)
    }

    fn page_mut(&mut self) -> Option<&mut Page> {
        let page = self
            .current_page
            .and_then(|index| self.document.pages.get_mut(index));
        if page.is_none() {
            log::warn!("nothing drawn: the document has no page yet");
        }
        page
    }

    fn to_page_space(&self, x: Mm, y: Mm) -> (Pt, Pt) {
        (x.into(), self.page_size.1 - Pt::from(y))
    }

    fn to_page_rect(&self, x: Mm, y: Mm, width: Mm, height: Mm) -> Rect {
        let (x1, y2) = self.to_page_space(x, y);
        let (x2, y1) = self.to_page_space(x + width, y + height);
        Rect { x1, y1, x2, y2 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageContents;
    use crate::pagesize;

    fn close(a: Pt, b: Pt) -> bool {
        (*a - *b).abs() < 1e-3
    }

    fn spans(canvas: &Canvas) -> Vec<SpanLayout> {
        canvas.document.pages[canvas.current_page.unwrap()]
            .contents
            .iter()
            .filter_map(|c| match c {
                PageContents::Text(spans) => Some(spans.clone()),
                _ => None,
            })
            .flatten()
            .collect()
    }

    #[test]
    fn pages_are_counted_from_one() {
        let mut canvas = Canvas::new(pagesize::A4);
        assert_eq!(canvas.page_no(), 0);
        assert_eq!(canvas.page_count(), 0);
        assert_eq!(canvas.add_page(), 1);
        canvas.set_xy(Mm(10.0), Mm(10.0));
        assert_eq!(canvas.add_page(), 2);
        assert_eq!(canvas.page_no(), 2);
        assert_eq!(canvas.xy(), (Mm(0.0), Mm(0.0)));
    }

    #[test]
    fn drawing_without_a_page_is_ignored() {
        let mut canvas = Canvas::new(pagesize::A4);
        canvas.line(Mm(0.0), Mm(0.0), Mm(10.0), Mm(10.0));
        canvas.cell(Mm(10.0), Mm(10.0), "lost", Align::LEFT_TOP);
        assert_eq!(canvas.page_count(), 0);
    }

    #[test]
    fn top_left_text_hangs_from_the_cursor() {
        let mut canvas = Canvas::new(pagesize::A4);
        canvas.add_page();
        canvas.set_xy(Mm(10.0), Mm(20.0));
        canvas.cell(Mm(50.0), Mm(20.0), "Hello", Align::LEFT_TOP);

        let spans = spans(&canvas);
        assert_eq!(spans.len(), 1);
        let (x, y) = spans[0].coords;
        assert!(close(x, Mm(10.0).into()));
        let expected_baseline = pagesize::A4.1 - Pt::from(Mm(20.0)) - Pt(12.0 * 0.718);
        assert!(close(y, expected_baseline), "{y} vs {expected_baseline}");
        assert_eq!(canvas.xy(), (Mm(60.0), Mm(20.0)));
    }

    #[test]
    fn newlines_stack_downwards() {
        let mut canvas = Canvas::new(pagesize::A4);
        canvas.add_page();
        canvas.cell(Mm(50.0), Mm(20.0), "one\ntwo", Align::LEFT_TOP);

        let spans = spans(&canvas);
        assert_eq!(spans.len(), 2);
        assert!(close(spans[0].coords.1 - spans[1].coords.1, Pt(12.0 * 1.2)));
    }

    #[test]
    fn right_aligned_text_ends_at_the_edge() {
        let mut canvas = Canvas::new(pagesize::A4);
        canvas.add_page();
        canvas
            .set_font("Courier", "", Pt(10.0))
            .expect("courier is a standard font");
        canvas.cell(
            Mm(50.0),
            Mm(10.0),
            "abc",
            Align::new(HorizontalAlign::Right, VerticalAlign::Top),
        );

        let spans = spans(&canvas);
        let text_width = Pt(3.0 * 6.0);
        assert!(close(spans[0].coords.0 + text_width, Mm(50.0).into()));
    }

    #[test]
    fn multi_cell_reports_overflow() {
        let mut canvas = Canvas::new(pagesize::A4);
        canvas.add_page();
        canvas.set_standard_font(StandardFont::Courier, Pt(10.0));
        // each line holds 10 characters of Courier 10pt (6pt each) in 60pt
        let width: Mm = Pt(60.0).into();
        // and the box holds two lines of 12pt each
        let height: Mm = Pt(25.0).into();
        let left_out = canvas.multi_cell(width, height, "aaaa bbbb cccc dddd", Align::LEFT_TOP);
        assert_eq!(left_out, 0);

        canvas.set_x(Mm(0.0));
        let left_out = canvas.multi_cell(
            width,
            height,
            "aaaaaaaa bbbbbbbb cccccccc",
            Align::LEFT_TOP,
        );
        assert_eq!(left_out, 1);
    }

    #[test]
    fn rectangles_flip_into_page_space() {
        let mut canvas = Canvas::new(pagesize::A4);
        canvas.add_page();
        let rect = canvas.to_page_rect(Mm(0.0), Mm(0.0), Mm(10.0), Mm(10.0));
        assert!(close(rect.y2, pagesize::A4.1));
        assert!(close(rect.height(), Mm(10.0).into()));
        assert!(rect.y1 < rect.y2);
    }

    #[test]
    fn unknown_fonts_are_rejected() {
        let mut canvas = Canvas::new(pagesize::A4);
        let err = canvas.set_font("Wingdings", "", Pt(10.0)).unwrap_err();
        assert!(matches!(err, LabelError::UnknownFont { .. }));
        assert_eq!(canvas.font(), (StandardFont::Helvetica, DEFAULT_FONT_SIZE));
    }
}

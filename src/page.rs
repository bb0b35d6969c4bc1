use crate::colour::Colour;
use crate::content::render_contents;
use crate::font::StandardFont;
use crate::image::Image;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::units::*;
use crate::LabelError;
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Name, Pdf};

/// Which font (by its index in the document's font list) and size a span is set in
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub index: usize,
    pub size: Pt,
}

/// A run of text set in a single font and colour, starting at a baseline position
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    /// Start of the baseline, in PDF page space
    pub coords: (Pt, Pt),
}

/// A straight stroked line
#[derive(Clone, PartialEq, Debug)]
pub struct LineLayout {
    pub from: (Pt, Pt),
    pub to: (Pt, Pt),
    pub colour: Colour,
    pub width: Pt,
}

/// The stroked outline of a rectangle
#[derive(Clone, PartialEq, Debug)]
pub struct OutlineLayout {
    pub rect: Rect,
    pub colour: Colour,
    pub width: Pt,
}

/// An image from the document's image arena, stretched to fill `position`
#[derive(Clone, PartialEq, Debug)]
pub struct ImageLayout {
    pub image: Id<Image>,
    pub position: Rect,
}

#[derive(Clone, PartialEq, Debug)]
pub enum PageContents {
    Text(Vec<SpanLayout>),
    Line(LineLayout),
    Outline(OutlineLayout),
    Image(ImageLayout),
}

/// A single page of the document. Contents are positioned in PDF page space, i.e. in
/// points with the origin at the bottom-left corner.
#[derive(Debug)]
pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Everything drawn on the page, in painting order
    pub contents: Vec<PageContents>,
}

impl Page {
    /// Create an empty page of the given size
    pub fn new(size: PageSize) -> Page {
        Page {
            media_box: Rect::from_size(size.0, size.1),
            contents: Vec::default(),
        }
    }

    pub fn width(&self) -> Pt {
        self.media_box.width()
    }

    pub fn height(&self) -> Pt {
        self.media_box.height()
    }

    pub fn add_span(&mut self, span: SpanLayout) {
        self.contents.push(PageContents::Text(vec![span]));
    }

    pub fn add_line(&mut self, line: LineLayout) {
        self.contents.push(PageContents::Line(line));
    }

    pub fn add_outline(&mut self, outline: OutlineLayout) {
        self.contents.push(PageContents::Outline(outline));
    }

    pub fn add_image(&mut self, image: ImageLayout) {
        self.contents.push(PageContents::Image(image));
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        fonts: &[StandardFont],
        images: &Arena<Image>,
        writer: &mut Pdf,
    ) -> Result<(), LabelError> {
        let id = refs.gen(RefType::Page(page_index));
        let page_tree_id = refs.gen(RefType::PageTree);
        let content_id = refs.gen(RefType::ContentForPage(page_index));

        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.parent(page_tree_id);
        page.contents(content_id);

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for (i, _) in fonts.iter().enumerate() {
            resource_fonts.pair(Name(format!("F{i}").as_bytes()), refs.gen(RefType::Font(i)));
        }
        resource_fonts.finish();

        let mut resource_xobjects = resources.x_objects();
        for (id, _) in images.iter() {
            resource_xobjects.pair(
                Name(format!("I{}", id.index()).as_bytes()),
                refs.gen(RefType::Image(id.index())),
            );
        }
        resource_xobjects.finish();
        resources.finish();
        page.finish();

        let rendered = render_contents(&self.contents)?;
        writer.stream(content_id, rendered.as_slice());
        Ok(())
    }
}

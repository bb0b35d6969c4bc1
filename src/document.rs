use crate::{
    font::StandardFont,
    image::Image,
    info::Info,
    page::Page,
    refs::{ObjectReferences, RefType},
    LabelError,
};
use id_arena::{Arena, Id};
use pdf_writer::{Name, Pdf};
use std::io::Write;

#[derive(Default)]
/// A document is the object model of the PDF: it stores all pages, and the fonts and
/// images they refer to, then renders it all out with a call to [Document::write]
pub struct Document {
    pub info: Option<Info>,
    pub pages: Vec<Page>,
    /// Standard fonts used anywhere in the document. A font's index in this list is
    /// how page content refers to it.
    pub fonts: Vec<StandardFont>,
    pub images: Arena<Image>,
}

impl Document {
    /// Sets information about the document. The creator and creation date are always
    /// written, whether this is called or not.
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Add a page to the end of the document, returning its 0-based index
    pub fn add_page(&mut self, page: Page) -> usize {
        self.pages.push(page);
        self.pages.len() - 1
    }

    /// Add an image to the document structure. Images are stored "globally" within the
    /// document, so any page can draw the same image without embedding it twice.
    pub fn add_image(&mut self, image: Image) -> Id<Image> {
        self.images.alloc(image)
    }

    /// The index to refer to `font` by, registering it with the document the first time
    pub fn font_index(&mut self, font: StandardFont) -> usize {
        match self.fonts.iter().position(|f| *f == font) {
            Some(index) => index,
            None => {
                self.fonts.push(font);
                self.fonts.len() - 1
            }
        }
    }

    /// Write the entire document to the writer. The whole document is rendered in memory
    /// first, then written out in one go. Returns the number of bytes written.
    pub fn write<W: Write>(self, mut w: W) -> Result<usize, LabelError> {
        let Document {
            info,
            pages,
            fonts,
            images,
        } = self;

        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        info.unwrap_or_default().write(&mut refs, &mut writer);

        let page_refs: Vec<_> = (0..pages.len())
            .map(|i| refs.gen(RefType::Page(i)))
            .collect();

        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        for (i, font) in fonts.iter().enumerate() {
            writer
                .type1_font(refs.gen(RefType::Font(i)))
                .base_font(Name(font.base_name().as_bytes()))
                .encoding_predefined(Name(b"WinAnsiEncoding"));
        }

        for (id, image) in images.iter() {
            image.write(&mut refs, id.index(), &mut writer);
        }

        for (page_index, page) in pages.iter().enumerate() {
            page.write(&mut refs, page_index, &fonts, &images, &mut writer)?;
        }

        writer.catalog(catalog_id).pages(page_tree_id);

        let bytes = writer.finish();
        w.write_all(bytes.as_slice())?;
        w.flush()?;
        log::info!(
            "wrote PDF with {} page(s), {} bytes",
            pages.len(),
            bytes.len()
        );
        Ok(bytes.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagesize;

    #[test]
    fn fonts_are_registered_once() {
        let mut doc = Document::default();
        assert_eq!(doc.font_index(StandardFont::Helvetica), 0);
        assert_eq!(doc.font_index(StandardFont::CourierBold), 1);
        assert_eq!(doc.font_index(StandardFont::Helvetica), 0);
        assert_eq!(doc.fonts.len(), 2);
    }

    #[test]
    fn written_documents_are_pdfs() {
        let mut doc = Document::default();
        doc.font_index(StandardFont::TimesRoman);
        doc.add_page(Page::new(pagesize::A4));
        doc.add_page(Page::new(pagesize::LETTER));

        let mut out = Vec::new();
        let written = doc.write(&mut out).expect("can write to a vec");
        assert_eq!(written, out.len());
        assert!(out.starts_with(b"%PDF-"));

        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("/Times-Roman"));
        assert!(text.contains("/Count 2"));
    }
}

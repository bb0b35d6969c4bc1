//! Turns page contents into a PDF content stream.

use crate::font::encode_win_ansi;
use crate::page::{LineLayout, OutlineLayout, PageContents, SpanFont, SpanLayout};
use std::io::Write;

/// Render page contents to the bytes of a PDF content stream, painting in order.
#[allow(clippy::write_with_newline)]
pub(crate) fn render_contents(contents: &[PageContents]) -> Result<Vec<u8>, std::io::Error> {
    if contents.is_empty() {
        return Ok(Vec::default());
    }

    let mut content: Vec<u8> = Vec::default();

    for page_content in contents.iter() {
        match page_content {
            PageContents::Text(spans) => {
                render_text_spans(&mut content, spans)?;
            }
            PageContents::Line(line) => {
                render_line(&mut content, line)?;
            }
            PageContents::Outline(outline) => {
                render_outline(&mut content, outline)?;
            }
            PageContents::Image(image) => {
                write!(&mut content, "q\n")?;
                write!(
                    &mut content,
                    "{} 0 0 {} {} {} cm\n",
                    image.position.width(),
                    image.position.height(),
                    image.position.x1,
                    image.position.y1
                )?;
                write!(&mut content, "/I{} Do\n", image.image.index())?;
                write!(&mut content, "Q\n")?;
            }
        }
    }

    Ok(content)
}

#[allow(clippy::write_with_newline)]
fn render_text_spans(content: &mut Vec<u8>, spans: &[SpanLayout]) -> Result<(), std::io::Error> {
    let Some(first) = spans.first() else {
        return Ok(());
    };

    write!(content, "q\n")?;

    let mut current_font: SpanFont = first.font;
    let mut current_colour = first.colour;

    write!(
        content,
        "/F{} {} Tf\n",
        current_font.index, current_font.size
    )?;
    current_colour.write_fill(content)?;

    for span in spans.iter() {
        if span.font != current_font {
            current_font = span.font;
            write!(
                content,
                "/F{} {} Tf\n",
                current_font.index, current_font.size
            )?;
        }
        if span.colour != current_colour {
            current_colour = span.colour;
            current_colour.write_fill(content)?;
        }

        write!(content, "BT\n")?;
        write!(content, "{} {} Td\n", span.coords.0, span.coords.1)?;
        write!(content, "<")?;
        for byte in encode_win_ansi(&span.text) {
            write!(content, "{byte:02x}")?;
        }
        write!(content, "> Tj\n")?;
        write!(content, "ET\n")?;
    }

    write!(content, "Q\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn render_line(content: &mut Vec<u8>, line: &LineLayout) -> Result<(), std::io::Error> {
    write!(content, "q\n")?;
    write!(content, "{} w\n", line.width)?;
    line.colour.write_stroke(content)?;
    write!(content, "{} {} m\n", line.from.0, line.from.1)?;
    write!(content, "{} {} l\n", line.to.0, line.to.1)?;
    write!(content, "S\n")?;
    write!(content, "Q\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn render_outline(content: &mut Vec<u8>, outline: &OutlineLayout) -> Result<(), std::io::Error> {
    write!(content, "q\n")?;
    write!(content, "{} w\n", outline.width)?;
    outline.colour.write_stroke(content)?;
    write!(
        content,
        "{} {} {} {} re\n",
        outline.rect.x1,
        outline.rect.y1,
        outline.rect.width(),
        outline.rect.height()
    )?;
    write!(content, "S\n")?;
    write!(content, "Q\n")?;
    Ok(())
}

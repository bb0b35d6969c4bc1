use pdf_labels::{colours, Align, Colour, HorizontalAlign, LabelDocument, Mm, Pt, VerticalAlign};

struct Card<'a> {
    name: &'a str,
    title: &'a str,
    email: &'a str,
    phone: &'a str,
}

const CARDS: &[Card] = &[
    Card {
        name: "Jane Doe",
        title: "Chief Label Officer",
        email: "jane@example.com",
        phone: "+1 555 0100",
    },
    Card {
        name: "John Roe",
        title: "Head of Adhesives",
        email: "john@example.com",
        phone: "+1 555 0101",
    },
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // 90x54 mm cards, ten to an A4 sheet, with cut lines between them
    let mut cards = LabelDocument::new("90x54", 0, 0)?;
    let accent = Colour::from_hex("#1f6feb").unwrap_or(colours::BLUE);

    for card in CARDS.iter().cycle().take(12) {
        cards.add_custom_label(|canvas, label| {
            let (x, y) = (label.position.x, label.position.y);
            let width = label.size.width;

            // a coloured rule under the name
            canvas.set_draw_colour(accent);
            canvas.set_line_width(Mm(0.6));
            canvas.line(x, y + Mm(14.0), x + width, y + Mm(14.0));

            canvas.set_text_colour(accent);
            canvas
                .set_font("Helvetica", "B", Pt(16.0))
                .expect("helvetica is a standard font");
            canvas.cell(width, Mm(8.0), card.name, Align::LEFT_TOP);

            canvas.set_xy(x, y + Mm(8.0));
            canvas.set_text_colour(colours::BLACK);
            canvas
                .set_font("Helvetica", "I", Pt(10.0))
                .expect("helvetica is a standard font");
            canvas.cell(width, Mm(5.0), card.title, Align::LEFT_TOP);

            canvas.set_xy(x, y + Mm(16.0));
            canvas
                .set_font("Courier", "", Pt(9.0))
                .expect("courier is a standard font");
            canvas.cell(
                width,
                label.size.height - Mm(16.0),
                &format!("{}\n{}", card.email, card.phone),
                Align::new(HorizontalAlign::Right, VerticalAlign::Bottom),
            );
        });
    }

    cards.output_to_file_and_close("business-cards.pdf")?;
    Ok(())
}

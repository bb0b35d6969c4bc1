use pdf_labels::{Info, LabelDocument, Pt};

const ADDRESSES: &[&str] = &[
    "Jane Doe\n12 Main St\nSpringfield\nIL 62701",
    "John Roe\n14 Main St\nSpringfield\nIL 62701",
    "Ada Lovelace\n10 St James's Square\nLondon\nSW1Y 4JH",
    "Grace Hopper\n1 Navy Yard\nArlington\nVA 22202",
    "Alan Turing\nBletchley Park\nMilton Keynes\nMK3 6EB",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // run with `RUST_LOG=debug` to watch the labels being placed
    env_logger::init();

    // Avery L7163: 14 address labels per A4 sheet. The first row of our sheet has
    // already been used up, so start on the second one.
    let mut labels = LabelDocument::new("L7163", 1, 0)?;

    let mut info = Info::new();
    info.title("Address labels").author("pdf-labels");
    labels.canvas_mut().set_info(info);
    labels.canvas_mut().set_font("Helvetica", "", Pt(10.0))?;

    labels.add_labels(ADDRESSES.iter().cycle().take(20));
    println!("20 labels over {} page(s)", labels.page_count());
    labels.output_to_file_and_close("labels.pdf")?;

    Ok(())
}

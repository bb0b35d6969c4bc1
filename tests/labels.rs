use pdf_labels::{Align, Catalog, Info, LabelDocument, LabelError, Mm, Pt};
use pretty_assertions::assert_eq;

fn pdf_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

fn hex(text: &str) -> String {
    text.bytes().map(|b| format!("{b:02x}")).collect()
}

#[test]
fn unknown_formats_are_rejected() {
    let err = LabelDocument::new("NOPE", 0, 0).err().expect("NOPE isn't a format");
    assert!(matches!(err, LabelError::UnknownFormat(ref name) if name == "NOPE"));
    assert_eq!(err.to_string(), "unknown label format: NOPE");
}

#[test]
fn a_full_sheet_stays_on_one_page() {
    let mut doc = LabelDocument::new("90x54", 0, 0).unwrap();
    assert_eq!(doc.labels_per_page(), 10);

    for i in 0..10 {
        doc.add_label(&format!("card {i}"));
    }
    assert_eq!(doc.page_count(), 1);
    assert!(doc.cursor().pending_page());

    doc.add_label("card 10");
    assert_eq!(doc.page_count(), 2);
    assert_eq!(doc.page_no(), 2);
}

#[test]
fn labels_alternate_between_columns() {
    let mut doc = LabelDocument::new("90x54", 0, 0).unwrap();
    let mut positions = Vec::new();
    for _ in 0..4 {
        doc.add_custom_label(|_, label| positions.push(label.position));
    }

    assert_eq!(positions[0].x, Mm(18.0));
    assert_eq!(positions[1].x, Mm(108.0));
    assert_eq!(positions[2].x, Mm(18.0));
    assert_eq!(positions[3].x, Mm(108.0));

    assert_eq!(positions[0].y, positions[1].y);
    assert_eq!(positions[2].y, positions[0].y + Mm(54.0));
}

#[test]
fn starting_part_way_through_a_sheet() {
    let mut doc = LabelDocument::new("90x54", 4, 1).unwrap();
    assert_eq!((doc.cursor().row(), doc.cursor().col()), (4, 1));

    let mut first = None;
    doc.add_custom_label(|_, label| first = Some(label));
    let first = first.unwrap();
    assert_eq!(first.position.x, Mm(15.0 + 90.0 + 3.0));
    assert_eq!(first.position.y, Mm(13.5 + 4.0 * 54.0 + 3.0));
    assert_eq!(doc.page_count(), 1);

    doc.add_label("second");
    assert_eq!(doc.page_count(), 2);
}

#[test]
fn out_of_range_starts_wrap() {
    let doc = LabelDocument::new("L7163", 9, -3).unwrap();
    assert_eq!((doc.cursor().row(), doc.cursor().col()), (2, 1));
}

#[test]
fn custom_labels_draw_through_the_canvas() {
    let mut doc = LabelDocument::new("L7173", 0, 0).unwrap();
    doc.add_custom_label(|canvas, label| {
        canvas.set_font("Times", "B", Pt(14.0)).unwrap();
        canvas.cell(label.size.width, label.size.height, "Centred", Align::CENTRE);
        canvas.rect(
            label.position.x,
            label.position.y,
            label.size.width,
            label.size.height,
        );
    });

    let pdf = pdf_text(&doc.to_bytes().unwrap());
    assert!(pdf.contains("/Times-Bold"));
    assert!(pdf.contains(&format!("<{}> Tj", hex("Centred"))));
    assert!(pdf.contains(" re\nS"));
}

#[test]
fn cut_lines_are_drawn_once_per_page() {
    let mut doc = LabelDocument::new("90x54", 0, 0).unwrap();
    doc.add_labels((0..11).map(|i| format!("card {i}")));
    assert_eq!(doc.page_count(), 2);

    let pdf = pdf_text(&doc.to_bytes().unwrap());
    // 2 columns + 1 and 5 rows + 1 on each of 2 pages
    assert_eq!(pdf.matches(" l\nS").count(), 2 * (3 + 6));
}

#[test]
fn formats_without_cut_lines_draw_none() {
    let mut doc = LabelDocument::new("L7160", 0, 0).unwrap();
    doc.add_label("no guides");
    let pdf = pdf_text(&doc.to_bytes().unwrap());
    assert_eq!(pdf.matches(" l\nS").count(), 0);
}

#[test]
fn inch_formats_are_placed_in_millimetres() {
    let mut doc = LabelDocument::new("5160", 0, 0).unwrap();
    let (width, height) = doc.canvas().page_size();
    assert!((*width - 215.9).abs() < 1e-3);
    assert!((*height - 279.4).abs() < 1e-3);

    let mut first = None;
    doc.add_custom_label(|_, label| first = Some(label));
    let first = first.unwrap();
    assert!((*first.position.x - (0.1875 * 25.4 + 3.0)).abs() < 1e-3);
    assert!((*first.position.y - (0.5 * 25.4 + 3.0)).abs() < 1e-3);
}

#[test]
fn formats_can_come_from_toml() {
    let mut catalog = Catalog::builtin();
    catalog.extend(
        Catalog::from_toml_str(
            r#"
            ["jar-lids"]
            paper_size = "A4"
            unit = "cm"
            margin_left = 1.0
            margin_top = 1.0
            space_x = 1.0
            space_y = 1.0
            columns = 3
            rows = 4
            width = 5.0
            height = 5.0
            "#,
        )
        .expect("valid TOML catalog"),
    );
    assert!(catalog.names().contains(&"jar-lids"));
    assert!(catalog.names().contains(&"L7160"));

    let mut doc = LabelDocument::from_catalog(&catalog, "jar-lids", 0, 1).unwrap();
    assert_eq!(doc.labels_per_page(), 12);
    let mut first = None;
    doc.add_custom_label(|_, label| first = Some(label));
    let first = first.unwrap();
    assert!((*first.position.x - (10.0 + 60.0 + 3.0)).abs() < 1e-3);
    assert!((*first.size.width - 44.0).abs() < 1e-3);
}

#[test]
fn bad_toml_is_an_error() {
    let err = Catalog::from_toml_str("[broken\nrows = 3").unwrap_err();
    assert!(matches!(err, LabelError::Catalog(_)));
}

#[test]
fn documents_are_written_to_disk() {
    let dir = tempfile::tempdir().expect("can create a temp dir");
    let path = dir.path().join("labels.pdf");

    let mut doc = LabelDocument::new("L7163", 0, 0).unwrap();
    let mut info = Info::new();
    info.title("Addresses").author("Jane Doe");
    doc.canvas_mut().set_info(info);
    doc.add_labels(["Jane Doe\n12 Main St", "John Roe\n14 Main St"]);
    doc.output_to_file_and_close(&path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    let pdf = pdf_text(&bytes);
    assert!(pdf.contains("(Addresses)"));
    assert!(pdf.contains(&hex("12 Main St")));
}

#[test]
fn unwritable_paths_report_io_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("labels.pdf");
    let doc = LabelDocument::new("L7163", 0, 0).unwrap();
    let err = doc.output_to_file_and_close(&path).unwrap_err();
    assert!(matches!(err, LabelError::Io(_)));
}

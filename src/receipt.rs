use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};
use thiserror::Error;

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 15.0;
const LINE: f32 = 10.0;
const SEAT_LINE: f32 = 8.0;

#[derive(Debug, Error)]
#[error("receipt rendering failed: {0}")]
pub struct ReceiptError(#[from] printpdf::Error);

/// Everything printed on a ticket receipt, already resolved to display text.
#[derive(Debug, Clone)]
pub struct Receipt {
    pub user_name: String,
    pub email: String,
    pub phone: String,
    pub theatre: String,
    pub movie: String,
    pub showtime: String,
    pub seats: Vec<String>,
    pub total_price: i64,
    pub booking_time: String,
}

impl Receipt {
    /// Body lines below the title, in print order, with their line height.
    fn lines(&self) -> Vec<(String, f32)> {
        let mut lines = vec![
            (format!("Name: {}", self.user_name), LINE),
            (format!("Email: {}", self.email), LINE),
            (format!("Phone: {}", self.phone), LINE),
            (format!("Theatre: {}", self.theatre), LINE),
            (format!("Movie: {}", self.movie), LINE),
            (format!("Showtime: {}", self.showtime), LINE),
            ("Seats:".to_string(), LINE),
        ];
        lines.extend(self.seats.iter().map(|s| (format!(" - {s}"), SEAT_LINE)));
        lines.push((format!("Total Price: Rs.{}", self.total_price), LINE));
        lines.push((format!("Booked at: {}", self.booking_time), LINE));
        lines
    }
}

/// Render a single receipt as PDF bytes. Long seat lists spill onto extra pages.
pub fn render_pdf(receipt: &Receipt) -> Result<Vec<u8>, ReceiptError> {
    let (doc, page, layer) = PdfDocument::new(
        "Movie Ticket Receipt",
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "receipt",
    );
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;

    let mut layer = doc.get_page(page).get_layer(layer);
    let mut y = PAGE_HEIGHT - MARGIN - LINE;
    layer.use_text("Movie Ticket Receipt", 16.0, Mm(PAGE_WIDTH / 2.0 - 30.0), Mm(y), &bold);
    y -= 2.0 * LINE;

    for (text, height) in receipt.lines() {
        if y < MARGIN {
            layer = new_page(&doc);
            y = PAGE_HEIGHT - MARGIN - LINE;
        }
        write_line(&layer, &text, y, &regular);
        y -= height;
    }

    Ok(doc.save_to_bytes()?)
}

fn new_page(doc: &PdfDocumentReference) -> PdfLayerReference {
    let (page, layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "receipt");
    doc.get_page(page).get_layer(layer)
}

fn write_line(layer: &PdfLayerReference, text: &str, y: f32, font: &IndirectFontRef) {
    layer.use_text(printable(text), 12.0, Mm(MARGIN), Mm(y), font);
}

/// Built-in PDF fonts only cover plain ASCII; anything else prints as `?`.
pub fn printable(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_ascii() && !c.is_ascii_control() { c } else { '?' })
        .collect()
}

/// `receipt_<name without spaces>.pdf`, restricted to header-safe characters.
pub fn receipt_file_name(user_name: &str) -> String {
    let stem: String = user_name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();
    if stem.is_empty() {
        "receipt.pdf".to_string()
    } else {
        format!("receipt_{stem}.pdf")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Receipt {
        Receipt {
            user_name: "Asha Rao".into(),
            email: "asha@example.com".into(),
            phone: "9876543210".into(),
            theatre: "PVR Phoenix".into(),
            movie: "Interstellar".into(),
            showtime: "18:30:00".into(),
            seats: vec!["S1".into(), "S2".into(), "V1".into()],
            total_price: 700,
            booking_time: "2026-10-19 18:00".into(),
        }
    }

    #[test]
    fn renders_a_pdf_document() {
        let bytes = render_pdf(&sample()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 500);
    }

    #[test]
    fn many_seats_still_render() {
        let mut receipt = sample();
        receipt.seats = (1..=60).map(|n| format!("S{n}")).collect();
        let bytes = render_pdf(&receipt).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn lines_follow_fixed_field_order() {
        let lines: Vec<String> = sample().lines().into_iter().map(|(l, _)| l).collect();
        assert_eq!(lines[0], "Name: Asha Rao");
        assert_eq!(lines[5], "Showtime: 18:30:00");
        assert_eq!(lines[6], "Seats:");
        assert_eq!(lines[7], " - S1");
        assert_eq!(lines[10], "Total Price: Rs.700");
    }

    #[test]
    fn file_name_drops_spaces_and_unsafe_characters() {
        assert_eq!(receipt_file_name("Asha Rao"), "receipt_AshaRao.pdf");
        assert_eq!(receipt_file_name("a\"b/c"), "receipt_abc.pdf");
        assert_eq!(receipt_file_name("   "), "receipt.pdf");
    }

    #[test]
    fn non_ascii_text_is_replaced() {
        assert_eq!(printable("Café 🎬"), "Caf? ?");
    }
}

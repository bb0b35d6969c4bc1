use crate::{LabelError, Pt};

/// One of the standard PDF fonts that every PDF viewer provides. These are referred to
/// by name only and are never embedded, so documents stay small. Text is encoded with
/// WinAnsiEncoding, which covers Western European languages.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
    TimesRoman,
    TimesBold,
    TimesItalic,
    TimesBoldItalic,
    Courier,
    CourierBold,
    CourierOblique,
    CourierBoldOblique,
}

/// Font metrics, in thousandths of the font size
struct Metrics {
    ascender: i16,
    descender: i16,
}

const HELVETICA_METRICS: Metrics = Metrics {
    ascender: 718,
    descender: -207,
};
const TIMES_METRICS: Metrics = Metrics {
    ascender: 683,
    descender: -217,
};
const COURIER_METRICS: Metrics = Metrics {
    ascender: 629,
    descender: -157,
};

/// Advance widths of Helvetica for the printable ASCII range (0x20..=0x7e)
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // 0x20
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 0x30
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // 0x40
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 0x50
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // 0x60
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 0x70
];

const COURIER_WIDTH: u16 = 600;
const DEFAULT_WIDTH: u16 = 556;

/// Characters 0x80..=0x9f of WinAnsiEncoding; the rest of the upper half matches Latin-1
const WIN_ANSI_HIGH: [(char, u8); 27] = [
    ('€', 0x80),
    ('‚', 0x82),
    ('ƒ', 0x83),
    ('„', 0x84),
    ('…', 0x85),
    ('†', 0x86),
    ('‡', 0x87),
    ('ˆ', 0x88),
    ('‰', 0x89),
    ('Š', 0x8a),
    ('‹', 0x8b),
    ('Œ', 0x8c),
    ('Ž', 0x8e),
    ('‘', 0x91),
    ('’', 0x92),
    ('“', 0x93),
    ('”', 0x94),
    ('•', 0x95),
    ('–', 0x96),
    ('—', 0x97),
    ('˜', 0x98),
    ('™', 0x99),
    ('š', 0x9a),
    ('›', 0x9b),
    ('œ', 0x9c),
    ('ž', 0x9e),
    ('Ÿ', 0x9f),
];

impl StandardFont {
    /// Pick a standard font the way most PDF libraries do: by family name and a style
    /// string containing any of `B` (bold) and `I` (italic), i.e. `("Arial", "BI")`.
    /// `Arial` is treated as `Helvetica`, and `Times New Roman` as `Times`.
    pub fn from_family(family: &str, style: &str) -> Result<StandardFont, LabelError> {
        let style_upper = style.to_ascii_uppercase();
        if !style_upper.chars().all(|c| matches!(c, 'B' | 'I' | 'U' | ' ')) {
            return Err(LabelError::UnknownFont {
                family: family.to_string(),
                style: style.to_string(),
            });
        }
        let bold = style_upper.contains('B');
        let italic = style_upper.contains('I');

        use StandardFont::*;
        let font = match family.trim().to_ascii_lowercase().as_str() {
            "helvetica" | "arial" | "sans" | "sans-serif" => match (bold, italic) {
                (false, false) => Helvetica,
                (true, false) => HelveticaBold,
                (false, true) => HelveticaOblique,
                (true, true) => HelveticaBoldOblique,
            },
            "times" | "times new roman" | "times-roman" | "serif" => match (bold, italic) {
                (false, false) => TimesRoman,
                (true, false) => TimesBold,
                (false, true) => TimesItalic,
                (true, true) => TimesBoldItalic,
            },
            "courier" | "courier new" | "mono" | "monospace" => match (bold, italic) {
                (false, false) => Courier,
                (true, false) => CourierBold,
                (false, true) => CourierOblique,
                (true, true) => CourierBoldOblique,
            },
            _ => {
                return Err(LabelError::UnknownFont {
                    family: family.to_string(),
                    style: style.to_string(),
                })
            }
        };
        Ok(font)
    }

    /// The PostScript name PDF viewers know this font by
    pub fn base_name(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::HelveticaOblique => "Helvetica-Oblique",
            StandardFont::HelveticaBoldOblique => "Helvetica-BoldOblique",
            StandardFont::TimesRoman => "Times-Roman",
            StandardFont::TimesBold => "Times-Bold",
            StandardFont::TimesItalic => "Times-Italic",
            StandardFont::TimesBoldItalic => "Times-BoldItalic",
            StandardFont::Courier => "Courier",
            StandardFont::CourierBold => "Courier-Bold",
            StandardFont::CourierOblique => "Courier-Oblique",
            StandardFont::CourierBoldOblique => "Courier-BoldOblique",
        }
    }

    fn metrics(&self) -> &'static Metrics {
        use StandardFont::*;
        match self {
            Helvetica | HelveticaBold | HelveticaOblique | HelveticaBoldOblique => {
                &HELVETICA_METRICS
            }
            TimesRoman | TimesBold | TimesItalic | TimesBoldItalic => &TIMES_METRICS,
            Courier | CourierBold | CourierOblique | CourierBoldOblique => &COURIER_METRICS,
        }
    }

    fn is_monospaced(&self) -> bool {
        use StandardFont::*;
        matches!(
            self,
            Courier | CourierBold | CourierOblique | CourierBoldOblique
        )
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) for the given font size
    pub fn ascent(&self, size: Pt) -> Pt {
        size * (self.metrics().ascender as f32 / 1000.0)
    }

    /// Calculate the descent (distance from the baseline to the bottom of the font) for the given font size.
    /// Note: this is usually negative
    pub fn descent(&self, size: Pt) -> Pt {
        size * (self.metrics().descender as f32 / 1000.0)
    }

    /// How far to move down between two lines of text. Standard fonts carry no line gap
    /// of their own, so this uses the customary 120% of the font size.
    pub fn line_height(&self, size: Pt) -> Pt {
        size * 1.2
    }

    /// The width of `text` set at `size`. Courier is exact; the proportional faces are
    /// measured with Helvetica's widths, which is close enough to align short label text.
    pub fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        let units: u32 = text
            .chars()
            .map(|ch| u32::from(self.char_width(ch)))
            .sum();
        size * (units as f32 / 1000.0)
    }

    fn char_width(&self, ch: char) -> u16 {
        if self.is_monospaced() {
            return COURIER_WIDTH;
        }
        match ch {
            ' '..='~' => HELVETICA_WIDTHS[ch as usize - 0x20],
            _ => DEFAULT_WIDTH,
        }
    }
}

/// Encode a character in WinAnsiEncoding, if it's representable at all
pub fn win_ansi_byte(ch: char) -> Option<u8> {
    match ch {
        ' '..='~' => Some(ch as u8),
        '\u{a0}'..='\u{ff}' => Some(ch as u32 as u8),
        _ => WIN_ANSI_HIGH
            .iter()
            .find(|(c, _)| *c == ch)
            .map(|&(_, b)| b),
    }
}

/// Encode a string in WinAnsiEncoding, replacing anything that can't be represented
/// with `?`
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| {
            win_ansi_byte(ch).unwrap_or_else(|| {
                log::warn!("character {ch:?} can't be shown with a standard font, using '?'");
                b'?'
            })
        })
        .collect()
}

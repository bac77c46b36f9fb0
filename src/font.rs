use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use pdf_writer::{Name, Pdf};

/// The built-in PDF fonts used for all document text. These are part of the
/// PDF base-14 set, so nothing is embedded in the generated file and every
/// conforming reader supplies the faces itself.
///
/// Because the faces live in the reader, no glyph metrics are available at
/// render time; widths are estimated from a per-font mean advance, which is
/// plenty for centering headers and right-aligning prices.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum BuiltinFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
}

/// A font selection for a single span of text
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub font: BuiltinFont,
    pub size: Pt,
}

impl BuiltinFont {
    /// Every font the document registers, in resource-name order
    pub const ALL: [BuiltinFont; 3] = [
        BuiltinFont::Helvetica,
        BuiltinFont::HelveticaBold,
        BuiltinFont::HelveticaOblique,
    ];

    /// The index of this font in the page resource dictionaries (`/F0`...)
    pub fn index(self) -> usize {
        match self {
            BuiltinFont::Helvetica => 0,
            BuiltinFont::HelveticaBold => 1,
            BuiltinFont::HelveticaOblique => 2,
        }
    }

    /// The PostScript base font name written to the font dictionary
    pub fn base_name(self) -> &'static str {
        match self {
            BuiltinFont::Helvetica => "Helvetica",
            BuiltinFont::HelveticaBold => "Helvetica-Bold",
            BuiltinFont::HelveticaOblique => "Helvetica-Oblique",
        }
    }

    /// Mean horizontal advance per character, as a fraction of the font size
    fn mean_advance(self) -> f32 {
        match self {
            BuiltinFont::Helvetica | BuiltinFont::HelveticaOblique => 0.52,
            BuiltinFont::HelveticaBold => 0.56,
        }
    }

    /// Estimate the width of a run of text at the given size. Character
    /// counting, not glyph measurement
    pub fn width_of_text(self, text: &str, size: Pt) -> Pt {
        size * (text.chars().count() as f32 * self.mean_advance())
    }

    /// Distance from the baseline to the top of the font, per the Helvetica
    /// AFM ascender of 718/1000
    pub fn ascent(self, size: Pt) -> Pt {
        size * 0.718
    }

    pub(crate) fn write(self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let id = refs.gen(RefType::Font(self.index()));
        let mut font = writer.type1_font(id);
        font.base_font(Name(self.base_name().as_bytes()));
        font.pair(Name(b"Encoding"), Name(b"WinAnsiEncoding"));
    }
}

/// Encode text for a WinAnsi content-stream string. ASCII passes through,
/// the handful of punctuation marks WinAnsi relocated are remapped, the
/// Latin-1 block matches byte-for-byte, and anything else degrades to `?`.
pub(crate) fn encode_win_ansi(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for ch in text.chars() {
        let byte = match ch {
            '€' => 0x80,
            '‚' => 0x82,
            '„' => 0x84,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '™' => 0x99,
            ch if (ch as u32) < 0x80 => ch as u8,
            ch if (0xa0..=0xff).contains(&(ch as u32)) => ch as u32 as u8,
            _ => b'?',
        };
        out.push(byte);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_passes_through() {
        assert_eq!(encode_win_ansi("Margherita"), b"Margherita".to_vec());
    }

    #[test]
    fn euro_sign_maps_to_winansi_slot() {
        assert_eq!(encode_win_ansi("€ 6.50"), vec![0x80, b' ', b'6', b'.', b'5', b'0']);
    }

    #[test]
    fn latin_1_block_is_byte_identical() {
        assert_eq!(encode_win_ansi("·è"), vec![0xb7, 0xe8]);
    }

    #[test]
    fn unmappable_characters_degrade_to_question_marks() {
        assert_eq!(encode_win_ansi("🍕"), vec![b'?']);
    }

    #[test]
    fn bold_runs_estimate_wider_than_regular() {
        let text = "Pizzeria La Repubblica";
        let regular = BuiltinFont::Helvetica.width_of_text(text, Pt(12.0));
        let bold = BuiltinFont::HelveticaBold.width_of_text(text, Pt(12.0));
        assert!(bold > regular);
    }
}

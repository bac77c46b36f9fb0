//! Placeholder artwork for menu items that have no photo yet.
//!
//! Each placeholder is a fixed-size card: accent background, a thin inner
//! border, the item name word-wrapped and centered, and the house name as a
//! subtitle. Files are only ever written once; if the target path already
//! exists (for example because the kitchen dropped in a real photo under the
//! same name), the generator leaves it alone.

use crate::error::RenderError;
use crate::layout::wrap_chars;
use image::{Rgba, RgbaImage};
use rusttype::{point, Font, Scale};
use std::path::Path;
use tracing::{debug, warn};

pub const CANVAS_WIDTH: u32 = 400;
pub const CANVAS_HEIGHT: u32 = 300;

const NAME_WRAP_COLUMNS: usize = 16;
const NAME_SIZE: f32 = 44.0;
const SUBTITLE_SIZE: f32 = 18.0;
const SUBTITLE: &str = "Pizzeria La Repubblica";
const LINE_SPACING: f32 = 1.2;
const SUBTITLE_GAP: f32 = 14.0;
const BORDER_INSET: u32 = 10;
const BORDER_WIDTH: u32 = 2;

// the document palette, as raster pixels
const BACKGROUND: Rgba<u8> = Rgba([216, 67, 21, 255]);
const BORDER: Rgba<u8> = Rgba([251, 233, 231, 255]);
const NAME_COLOUR: Rgba<u8> = Rgba([255, 255, 255, 255]);
const SUBTITLE_COLOUR: Rgba<u8> = Rgba([251, 233, 231, 255]);

/// Bold display faces tried first
pub const PREFERRED_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
];

/// Regular faces tried when no bold face resolves
pub const FALLBACK_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
];

/// Which tier of the font-resolution strategy produced a usable face
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FontTier {
    Preferred,
    Fallback,
}

/// What [ensure_placeholder] did for a given path
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PlaceholderOutcome {
    /// A file was already there; nothing was touched
    AlreadyPresent,
    /// A fresh placeholder was written
    Created,
}

/// Walk the two candidate tiers in order and return the first face that both
/// reads and parses, along with the tier it came from. Missing or corrupt
/// candidates are skipped silently; exhausting both tiers is not an error.
pub fn resolve_font(preferred: &[&str], fallback: &[&str]) -> Option<(Font<'static>, FontTier)> {
    let tiers = [
        (FontTier::Preferred, preferred),
        (FontTier::Fallback, fallback),
    ];
    for (tier, candidates) in tiers {
        for path in candidates {
            let Ok(bytes) = std::fs::read(path) else {
                continue;
            };
            if let Some(font) = Font::try_from_vec(bytes) {
                return Some((font, tier));
            }
        }
    }
    None
}

/// Generate a placeholder card for `name` at `path`, if and only if no file
/// already exists there. The containing directory is created when absent.
pub fn ensure_placeholder(path: &Path, name: &str) -> Result<PlaceholderOutcome, RenderError> {
    if path.exists() {
        return Ok(PlaceholderOutcome::AlreadyPresent);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut canvas = RgbaImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, BACKGROUND);
    draw_border(&mut canvas);

    match resolve_font(PREFERRED_FONTS, FALLBACK_FONTS) {
        Some((font, tier)) => {
            debug!(?tier, item = name, "resolved placeholder font");
            draw_card_text(&mut canvas, &font, name);
        }
        None => {
            // font absence is never fatal; the card just stays bare
            warn!(item = name, "no usable display font found, writing bare placeholder");
        }
    }

    canvas.save(path)?;
    Ok(PlaceholderOutcome::Created)
}

fn draw_border(canvas: &mut RgbaImage) {
    let x1 = BORDER_INSET;
    let y1 = BORDER_INSET;
    let x2 = CANVAS_WIDTH - BORDER_INSET - 1;
    let y2 = CANVAS_HEIGHT - BORDER_INSET - 1;

    for x in x1..=x2 {
        for t in 0..BORDER_WIDTH {
            canvas.put_pixel(x, y1 + t, BORDER);
            canvas.put_pixel(x, y2 - t, BORDER);
        }
    }
    for y in y1..=y2 {
        for t in 0..BORDER_WIDTH {
            canvas.put_pixel(x1 + t, y, BORDER);
            canvas.put_pixel(x2 - t, y, BORDER);
        }
    }
}

fn draw_card_text(canvas: &mut RgbaImage, font: &Font<'static>, name: &str) {
    let lines = wrap_chars(name, NAME_WRAP_COLUMNS);
    let name_line_height = NAME_SIZE * LINE_SPACING;

    // centre the name block plus the subtitle as one unit
    let block_height =
        lines.len() as f32 * name_line_height + SUBTITLE_GAP + SUBTITLE_SIZE * LINE_SPACING;
    let mut top = (CANVAS_HEIGHT as f32 - block_height) / 2.0;

    for line in &lines {
        let width = text_width(font, NAME_SIZE, line);
        let x = (CANVAS_WIDTH as f32 - width) / 2.0;
        draw_text(canvas, font, NAME_SIZE, x, top, NAME_COLOUR, line);
        top += name_line_height;
    }

    top += SUBTITLE_GAP;
    let width = text_width(font, SUBTITLE_SIZE, SUBTITLE);
    let x = (CANVAS_WIDTH as f32 - width) / 2.0;
    draw_text(canvas, font, SUBTITLE_SIZE, x, top, SUBTITLE_COLOUR, SUBTITLE);
}

fn text_width(font: &Font<'static>, px: f32, text: &str) -> f32 {
    let scale = Scale::uniform(px);
    text.chars()
        .map(|ch| font.glyph(ch).scaled(scale).h_metrics().advance_width)
        .sum()
}

/// Draw a single line of text with its top edge at `y`, alpha-blending glyph
/// coverage over whatever is already on the canvas
fn draw_text(
    canvas: &mut RgbaImage,
    font: &Font<'static>,
    px: f32,
    x: f32,
    y: f32,
    colour: Rgba<u8>,
    text: &str,
) {
    let scale = Scale::uniform(px);
    let v_metrics = font.v_metrics(scale);
    let baseline = y + v_metrics.ascent;

    for glyph in font.layout(text, scale, point(x, baseline)) {
        let Some(bb) = glyph.pixel_bounding_box() else {
            continue;
        };
        glyph.draw(|gx, gy, coverage| {
            let px = gx as i32 + bb.min.x;
            let py = gy as i32 + bb.min.y;
            if px < 0 || py < 0 || px >= canvas.width() as i32 || py >= canvas.height() as i32 {
                return;
            }
            if coverage <= 0.0 {
                return;
            }
            let dst = canvas.get_pixel_mut(px as u32, py as u32);
            let inv = 1.0 - coverage;
            for i in 0..3 {
                dst.0[i] = (colour.0[i] as f32 * coverage + dst.0[i] as f32 * inv) as u8;
            }
            dst.0[3] = 255;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn generates_once_and_only_once() {
        let dir = TempDir::new().expect("can create temp dir");
        let path = dir.path().join("images").join("margherita.png");

        let first = ensure_placeholder(&path, "Margherita").expect("first generation succeeds");
        assert_eq!(first, PlaceholderOutcome::Created);
        assert!(path.exists());
        let mtime = std::fs::metadata(&path)
            .and_then(|m| m.modified())
            .expect("file has a modification time");

        let second = ensure_placeholder(&path, "Margherita").expect("second call succeeds");
        assert_eq!(second, PlaceholderOutcome::AlreadyPresent);
        let mtime_after = std::fs::metadata(&path)
            .and_then(|m| m.modified())
            .expect("file has a modification time");
        assert_eq!(mtime, mtime_after);
    }

    #[test]
    fn generated_file_is_a_decodable_raster_of_the_fixed_size() {
        let dir = TempDir::new().expect("can create temp dir");
        let path = dir.path().join("frutti_di_mare.png");

        ensure_placeholder(&path, "Frutti di Mare").expect("generation succeeds");

        let decoded = image::open(&path).expect("placeholder decodes");
        assert_eq!(decoded.width(), CANVAS_WIDTH);
        assert_eq!(decoded.height(), CANVAS_HEIGHT);
    }

    #[test]
    fn resolution_skips_unreadable_and_unparseable_candidates() {
        let dir = TempDir::new().expect("can create temp dir");
        let garbage = dir.path().join("not-a-font.ttf");
        std::fs::write(&garbage, b"definitely not sfnt data").expect("can write garbage");
        let garbage = garbage.to_str().unwrap().to_string();
        let missing = dir.path().join("missing.ttf").to_str().unwrap().to_string();

        // both tiers exhaust without erroring
        assert!(resolve_font(&[missing.as_str(), garbage.as_str()], &[garbage.as_str()]).is_none());
        assert!(resolve_font(&[], &[]).is_none());
    }

    #[test]
    fn bare_placeholder_is_still_written_without_a_font() {
        // mirrors the no-font path: border + background only
        let dir = TempDir::new().expect("can create temp dir");
        let path = dir.path().join("bare.png");

        let mut canvas = RgbaImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, BACKGROUND);
        draw_border(&mut canvas);
        canvas.save(&path).expect("can save");

        let decoded = image::open(&path).expect("decodes").to_rgba8();
        assert_eq!(*decoded.get_pixel(0, 0), BACKGROUND);
        assert_eq!(*decoded.get_pixel(BORDER_INSET, BORDER_INSET), BORDER);
    }
}

use super::inline::{InlineImage, MIME_PNG};
use font8x8::{UnicodeFonts, BASIC_FONTS, GREEK_FONTS, LATIN_FONTS};
use image::codecs::png::PngEncoder;
use image::{ImageEncoder, Rgb, RgbImage};
use tracing::warn;

pub const PLACEHOLDER_WIDTH: u32 = 240;
pub const PLACEHOLDER_HEIGHT: u32 = 160;

/// Rendered glyph height in pixels
pub const PLACEHOLDER_GLYPH_SIZE: u32 = 40;

/// #eef2ff
const BACKGROUND: Rgb<u8> = Rgb([0xee, 0xf2, 0xff]);
/// #3730a3
const FOREGROUND: Rgb<u8> = Rgb([0x37, 0x30, 0xa3]);

const FONT_CELL: u32 = 8;
const GLYPH_SCALE: u32 = PLACEHOLDER_GLYPH_SIZE / FONT_CELL;
/// Extra columns painted to the right of each lit pixel to embolden strokes.
const BOLD_SPREAD: u32 = 1;

/// Up to two initials of `name`, upper-cased; `?` when there are none.
#[must_use]
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect();
    if letters.is_empty() {
        "?".to_string()
    } else {
        letters
    }
}

/// Synthesizes the fallback thumbnail for items without a photo.
///
/// Output is a pure function of the name: same name, same bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderGenerator;

impl PlaceholderGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Render the placeholder for `name` as an inline PNG.
    #[must_use]
    pub fn placeholder(&self, name: &str) -> InlineImage {
        let raster = self.raster(name);
        let mut out = Vec::new();
        let encoded = PngEncoder::new(&mut out).write_image(
            raster.as_raw(),
            raster.width(),
            raster.height(),
            image::ExtendedColorType::Rgb8,
        );
        if let Err(e) = encoded {
            // Only reachable on allocation failure.
            warn!("Failed to encode placeholder for {name:?}: {e}");
        }
        InlineImage::from_bytes(MIME_PNG, &out)
    }

    /// Paint the placeholder bitmap: solid background with the initials
    /// centred on both axes.
    #[must_use]
    pub fn raster(&self, name: &str) -> RgbImage {
        let mut canvas = RgbImage::from_pixel(PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT, BACKGROUND);
        let glyphs: Vec<[u8; 8]> = initials(name).chars().map(glyph_for).collect();

        let advance = FONT_CELL * GLYPH_SCALE;
        let (ink_left, ink_right) = ink_extent(&glyphs);
        let ink_width = ink_right.saturating_sub(ink_left);
        // Centre the lit pixels, not the cells: glyph cells carry empty columns.
        let origin_x = (PLACEHOLDER_WIDTH.saturating_sub(ink_width) / 2).saturating_sub(ink_left);
        let origin_y = PLACEHOLDER_HEIGHT.saturating_sub(PLACEHOLDER_GLYPH_SIZE) / 2;

        for (index, glyph) in (0u32..).zip(glyphs) {
            let x = origin_x.saturating_add(advance.saturating_mul(index));
            draw_glyph(&mut canvas, glyph, x, origin_y);
        }
        canvas
    }
}

/// Horizontal span `[left, right)` of the pixels `draw_glyph` lights for
/// `glyphs` laid out from x = 0. Falls back to the full cells when nothing
/// is lit.
fn ink_extent(glyphs: &[[u8; 8]]) -> (u32, u32) {
    let advance = FONT_CELL * GLYPH_SCALE;
    let mut extent: Option<(u32, u32)> = None;
    for (index, glyph) in (0u32..).zip(glyphs) {
        let columns = glyph.iter().fold(0u8, |acc, row| acc | row);
        if columns == 0 {
            continue;
        }
        let first = columns.trailing_zeros();
        let last = FONT_CELL - 1 - columns.leading_zeros();
        let cell = advance.saturating_mul(index);
        let left = cell + first * GLYPH_SCALE;
        let right = cell + (last + 1) * GLYPH_SCALE + BOLD_SPREAD;
        extent = Some(match extent {
            Some((l, r)) => (l.min(left), r.max(right)),
            None => (left, right),
        });
    }
    extent.unwrap_or_else(|| {
        let count = u32::try_from(glyphs.len()).unwrap_or(u32::MAX);
        (0, advance.saturating_mul(count).saturating_add(BOLD_SPREAD))
    })
}

fn glyph_for(ch: char) -> [u8; 8] {
    lookup_glyph(ch)
        .or_else(|| base_letter(ch).and_then(lookup_glyph))
        .or_else(|| BASIC_FONTS.get('?'))
        .unwrap_or([0; 8])
}

fn lookup_glyph(ch: char) -> Option<[u8; 8]> {
    BASIC_FONTS
        .get(ch)
        .or_else(|| LATIN_FONTS.get(ch))
        .or_else(|| GREEK_FONTS.get(ch))
}

/// Unaccented letter for upper-case Latin Extended-A letters the bitmap font
/// lacks (Ł -> L, Ż -> Z).
fn base_letter(ch: char) -> Option<char> {
    let base = match ch {
        'Ā' | 'Ă' | 'Ą' => 'A',
        'Ć' | 'Ĉ' | 'Ċ' | 'Č' => 'C',
        'Ď' | 'Đ' => 'D',
        'Ē' | 'Ĕ' | 'Ė' | 'Ę' | 'Ě' => 'E',
        'Ĝ' | 'Ğ' | 'Ġ' | 'Ģ' => 'G',
        'Ĥ' | 'Ħ' => 'H',
        'Ĩ' | 'Ī' | 'Ĭ' | 'Į' | 'İ' => 'I',
        'Ĵ' => 'J',
        'Ķ' => 'K',
        'Ĺ' | 'Ļ' | 'Ľ' | 'Ŀ' | 'Ł' => 'L',
        'Ń' | 'Ņ' | 'Ň' => 'N',
        'Ō' | 'Ŏ' | 'Ő' => 'O',
        'Ŕ' | 'Ŗ' | 'Ř' => 'R',
        'Ś' | 'Ŝ' | 'Ş' | 'Š' => 'S',
        'Ţ' | 'Ť' | 'Ŧ' => 'T',
        'Ũ' | 'Ū' | 'Ŭ' | 'Ů' | 'Ű' | 'Ų' => 'U',
        'Ŵ' => 'W',
        'Ŷ' | 'Ÿ' => 'Y',
        'Ź' | 'Ż' | 'Ž' => 'Z',
        _ => return None,
    };
    Some(base)
}

fn draw_glyph(canvas: &mut RgbImage, glyph: [u8; 8], origin_x: u32, origin_y: u32) {
    for (row, bits) in (0u32..).zip(glyph) {
        for col in 0..FONT_CELL {
            if (bits >> col) & 1 == 0 {
                continue;
            }
            let px = origin_x + col * GLYPH_SCALE;
            let py = origin_y + row * GLYPH_SCALE;
            for dy in 0..GLYPH_SCALE {
                for dx in 0..GLYPH_SCALE + BOLD_SPREAD {
                    if let Some(pixel) = canvas.get_pixel_mut_checked(px + dx, py + dy) {
                        *pixel = FOREGROUND;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "placeholder_tests.rs"]
mod tests;

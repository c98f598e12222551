use glam::ivec2;

use crate::{Buffer, CGA_PALETTE, Rect, Rgba, TILE_SIZE, font_data::FONT_8X8};

/// Replacement char to show when a character not covered by the font is
/// printed.
const MISSING: char = '?';

const GLYPH_COUNT: i32 = 256;

/// IBM PC code page 437 bitmap font, unpacked into an RGBA glyph strip.
///
/// The strip is 8 pixels wide and stacks all 256 glyphs vertically, so
/// glyph `g` occupies pixel rows `8g..8g+8`. Set bits render as bright
/// white on black.
pub struct Font {
    sheet: Buffer<Rgba>,
}

impl Default for Font {
    fn default() -> Self {
        Font::from_packed(&FONT_8X8)
    }
}

impl Font {
    /// Unpack a 1-bit font into the glyph strip.
    ///
    /// Each glyph is eight bytes, one per pixel row, most significant bit
    /// leftmost.
    pub fn from_packed(bits: &[u8; 2048]) -> Self {
        let sheet = Buffer::from_fn(8, (GLYPH_COUNT * TILE_SIZE) as u32, |x, y| {
            if bits[y as usize] & (0x80 >> x) != 0 {
                CGA_PALETTE[15]
            } else {
                CGA_PALETTE[0]
            }
        });
        Font { sheet }
    }

    pub fn sheet(&self) -> &Buffer<Rgba> {
        &self.sheet
    }

    /// Bounds of one glyph within the strip.
    pub fn glyph(&self, index: u8) -> Rect {
        Rect::sized([TILE_SIZE, TILE_SIZE]) + ivec2(0, index as i32 * TILE_SIZE)
    }

    /// Return the code page 437 glyph index for a character.
    ///
    /// Characters the font does not cover are replaced with the `MISSING`
    /// char.
    pub fn glyph_index(c: char) -> u8 {
        match c {
            'æ' => 0x91,
            c if c.is_ascii() => c as u8,
            _ => MISSING as u8,
        }
    }
}

/// Repack a glyph grid image into the 1-bit font format.
///
/// Expects the 256 glyphs tiled 32 per row, 8 rows in all. A pixel counts
/// as set if its red channel is nonzero.
pub fn pack_sheet(image: &Buffer<Rgba>) -> [u8; 2048] {
    let mut bits = [0; 2048];
    for g in 0..GLYPH_COUNT {
        let origin = ivec2(g % 32, g / 32) * TILE_SIZE;
        for row in 0..TILE_SIZE {
            let mut byte = 0;
            for x in 0..TILE_SIZE {
                if image.get(origin + ivec2(x, row)).r != 0 {
                    byte |= 0x80 >> x;
                }
            }
            bits[(g * TILE_SIZE + row) as usize] = byte;
        }
    }
    bits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_matches_bits() {
        let font = Font::default();
        assert_eq!(font.sheet().dim(), ivec2(8, 2048));

        for (i, &byte) in FONT_8X8.iter().enumerate() {
            for x in 0..8 {
                let set = byte & (0x80 >> x) != 0;
                let pixel = font.sheet().get(ivec2(x, i as i32));
                assert_eq!(pixel, CGA_PALETTE[if set { 15 } else { 0 }]);
            }
        }
    }

    #[test]
    fn glyph_rects() {
        let font = Font::default();

        let a = font.glyph(0x41);
        assert_eq!(a.min(), ivec2(0, 0x41 * 8));
        assert_eq!(a.dim(), ivec2(8, 8));

        // Space is blank, 'A' is not.
        let is_blank = |index: usize| {
            font.sheet()
                .data()
                .iter()
                .skip(index * 64)
                .take(64)
                .all(|&p| p == CGA_PALETTE[0])
        };
        assert!(is_blank(0x20));
        assert!(!is_blank(0x41));
    }

    #[test]
    fn glyph_indices() {
        assert_eq!(Font::glyph_index('A'), 0x41);
        assert_eq!(Font::glyph_index(' '), 0x20);
        assert_eq!(Font::glyph_index('æ'), 0x91);
        assert_eq!(Font::glyph_index('é'), b'?');
    }

    #[test]
    fn pack_inverts_unpack() {
        // Tile the strip glyphs into the grid layout the packer reads.
        let font = Font::default();
        let mut grid = Buffer::new(256, 64);
        for g in 0..=255u8 {
            let dst = ivec2(g as i32 % 32, g as i32 / 32) * 8;
            grid.copy_from(font.sheet(), font.glyph(g), dst);
        }

        assert_eq!(pack_sheet(&grid), FONT_8X8);
    }
}

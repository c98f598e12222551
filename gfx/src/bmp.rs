use crate::{Buffer, Rgba};

/// File header plus BITMAPINFOHEADER.
const HEADER_LEN: usize = 54;

impl Buffer<Rgba> {
    /// Encode the buffer as an uncompressed 32-bit BMP file.
    ///
    /// Pixel rows are stored bottom-up and the red and blue channels
    /// swap places, per the format's little-endian BGRA convention.
    pub fn to_bmp(&self) -> Vec<u8> {
        let image_len = self.data().len() * 4;
        let mut out = Vec::with_capacity(HEADER_LEN + image_len);

        out.extend_from_slice(b"BM");
        out.extend_from_slice(&((HEADER_LEN + image_len) as u32).to_le_bytes());
        out.extend_from_slice(&[0; 4]); // reserved
        out.extend_from_slice(&(HEADER_LEN as u32).to_le_bytes());

        out.extend_from_slice(&40u32.to_le_bytes()); // info header size
        out.extend_from_slice(&self.width().to_le_bytes());
        out.extend_from_slice(&self.height().to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes()); // color planes
        out.extend_from_slice(&32u16.to_le_bytes()); // bits per pixel
        out.extend_from_slice(&0u32.to_le_bytes()); // no compression
        out.extend_from_slice(&(image_len as u32).to_le_bytes());
        out.extend_from_slice(&[0; 16]); // resolution and palette fields

        let width = self.width() as usize;
        for y in (0..self.height() as usize).rev() {
            for p in &self.data()[y * width..(y + 1) * width] {
                out.extend_from_slice(&[p.b, p.g, p.r, p.a]);
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CGA_PALETTE;

    #[test]
    fn header_fields() {
        let bmp = Buffer::<Rgba>::new(3, 2).to_bmp();

        assert_eq!(bmp.len(), HEADER_LEN + 3 * 2 * 4);
        assert_eq!(&bmp[0..2], b"BM");
        assert_eq!(bmp[2..6], (bmp.len() as u32).to_le_bytes());
        assert_eq!(bmp[10..14], 54u32.to_le_bytes());
        assert_eq!(bmp[14..18], 40u32.to_le_bytes());
        assert_eq!(bmp[18..22], 3i32.to_le_bytes());
        assert_eq!(bmp[22..26], 2i32.to_le_bytes());
        assert_eq!(bmp[26..28], 1u16.to_le_bytes());
        assert_eq!(bmp[28..30], 32u16.to_le_bytes());
        assert_eq!(bmp[30..34], 0u32.to_le_bytes());
        assert_eq!(bmp[34..38], (3u32 * 2 * 4).to_le_bytes());
    }

    #[test]
    fn bottom_up_swizzled_rows() {
        // Top row blue, bottom row red.
        let buf = Buffer::from_fn(2, 2, |_, y| {
            if y == 0 {
                CGA_PALETTE[1]
            } else {
                CGA_PALETTE[4]
            }
        });
        let bmp = buf.to_bmp();

        // First stored row is the bottom scanline, with the pixels'
        // red and blue bytes swapped.
        let red_bgra = [0x00, 0x00, 0xaa, 0xff];
        let blue_bgra = [0xaa, 0x00, 0x00, 0xff];
        assert_eq!(bmp[54..58], red_bgra);
        assert_eq!(bmp[58..62], red_bgra);
        assert_eq!(bmp[62..66], blue_bgra);
        assert_eq!(bmp[66..70], blue_bgra);
    }
}

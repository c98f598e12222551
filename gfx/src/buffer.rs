use glam::{IVec2, ivec2};

use crate::{Rect, Rgba};

/// Owned two-dimensional pixel buffer.
pub struct Buffer<P> {
    width: u32,
    height: u32,
    data: Vec<P>,
}

impl<P> AsRef<[P]> for Buffer<P> {
    fn as_ref(&self) -> &[P] {
        &self.data
    }
}

impl<P> AsMut<[P]> for Buffer<P> {
    fn as_mut(&mut self) -> &mut [P] {
        &mut self.data
    }
}

impl<P: Copy + Default> Buffer<P> {
    pub fn new(width: u32, height: u32) -> Self {
        Buffer {
            width,
            height,
            data: vec![Default::default(); (width * height) as usize],
        }
    }

    pub fn from_fn(width: u32, height: u32, f: impl Fn(i32, i32) -> P) -> Self {
        let data = (0..(width * height) as usize)
            .map(|i| f(i as i32 % width as i32, i as i32 / width as i32))
            .collect();
        Buffer {
            width,
            height,
            data,
        }
    }

    pub fn fill(&mut self, p: P) {
        self.data.fill(p);
    }
}

impl<P> Buffer<P> {
    pub fn data(&self) -> &[P] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [P] {
        &mut self.data
    }

    pub fn dim(&self) -> IVec2 {
        ivec2(self.width as i32, self.height as i32)
    }

    pub fn width(&self) -> i32 {
        self.width as i32
    }

    pub fn height(&self) -> i32 {
        self.height as i32
    }

    pub fn area(&self) -> Rect {
        Rect::sized(self.dim())
    }
}

impl<P: Copy> Buffer<P> {
    pub fn get(&self, pos: impl Into<IVec2>) -> P {
        let pos = pos.into();
        assert!(self.area().contains(pos));
        self.data[(pos.y * self.width()) as usize + pos.x as usize]
    }

    /// Copy a rectangular block of `src` into this buffer, with the
    /// block's corner landing on `dst`. Both the source and the
    /// destination rectangle must be in bounds.
    pub fn copy_from(
        &mut self,
        src: &Buffer<P>,
        src_rect: Rect,
        dst: impl Into<IVec2>,
    ) {
        let dst = dst.into();
        assert!(src.area().contains_rect(&src_rect));
        assert!(
            self.area()
                .contains_rect(&(Rect::sized(src_rect.dim()) + dst))
        );

        let w = src_rect.width() as usize;
        for y in 0..src_rect.height() {
            let s = ((src_rect.min().y + y) * src.width() + src_rect.min().x)
                as usize;
            let d = ((dst.y + y) * self.width() + dst.x) as usize;
            self.data_mut()[d..d + w]
                .copy_from_slice(&src.data()[s..s + w]);
        }
    }
}

impl Buffer<Rgba> {
    /// Decode an indexed-palette image, one byte per pixel with the
    /// palette entry in the low 4 bits. Every byte value decodes, the
    /// high bits are ignored.
    pub fn from_indexed(
        width: u32,
        height: u32,
        bytes: &[u8],
        palette: &[Rgba; 16],
    ) -> Self {
        let n = (width * height) as usize;
        assert!(bytes.len() >= n);
        Buffer {
            width,
            height,
            data: bytes[..n]
                .iter()
                .map(|&i| palette[(i & 0xf) as usize])
                .collect(),
        }
    }

    /// Reinterpret raw r, g, b, a bytes as a pixel buffer.
    pub fn from_rgba_bytes(width: u32, height: u32, bytes: &[u8]) -> Self {
        let n = (width * height) as usize * 4;
        assert!(bytes.len() >= n);
        Buffer {
            width,
            height,
            data: bytemuck::cast_slice(&bytes[..n]).to_vec(),
        }
    }

    /// The buffer's pixels as raw bytes, ready to be dumped in a file.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CGA_PALETTE;

    #[test]
    fn block_copy() {
        let src = Buffer::from_fn(4, 4, |x, y| (x + y * 4) as u8);
        let mut dst: Buffer<u8> = Buffer::new(4, 4);

        dst.copy_from(&src, Rect::new([1, 1], [3, 3]), [0, 2]);
        assert_eq!(dst.get([0, 2]), 5);
        assert_eq!(dst.get([1, 2]), 6);
        assert_eq!(dst.get([0, 3]), 9);
        assert_eq!(dst.get([1, 3]), 10);
        // Pixels outside the block keep their value.
        assert_eq!(dst.get([2, 2]), 0);
        assert_eq!(dst.get([0, 0]), 0);
    }

    #[test]
    #[should_panic]
    fn block_copy_out_of_bounds() {
        let src: Buffer<u8> = Buffer::new(4, 4);
        let mut dst: Buffer<u8> = Buffer::new(4, 4);
        dst.copy_from(&src, Rect::sized([4, 4]), [1, 0]);
    }

    #[test]
    fn indexed_decode_roundtrip() {
        // Decoding then re-quantizing against the palette must
        // reproduce the original indices exactly.
        let bytes: Vec<u8> = (0u16..256).map(|i| i as u8).collect();
        let buf = Buffer::from_indexed(16, 16, &bytes, &CGA_PALETTE);

        for (i, p) in buf.data().iter().enumerate() {
            let index = CGA_PALETTE
                .iter()
                .position(|c| c == p)
                .expect("decoded pixel not in palette");
            assert_eq!(index, (bytes[i] & 0xf) as usize);
        }
    }

    #[test]
    fn byte_views() {
        let buf = Buffer::from_indexed(2, 1, &[1, 0], &CGA_PALETTE);
        assert_eq!(
            buf.as_bytes(),
            &[0x00, 0x00, 0xaa, 0xff, 0x00, 0x00, 0x00, 0xff]
        );

        let back = Buffer::from_rgba_bytes(2, 1, buf.as_bytes());
        assert_eq!(back.get([0, 0]), CGA_PALETTE[1]);
        assert_eq!(back.get([1, 0]), CGA_PALETTE[0]);
    }
}

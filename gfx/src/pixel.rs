use bytemuck::{Pod, Zeroable};

/// 32-bit color value, byte order r, g, b, a in memory.
///
/// Matches the pixel layout of the game's raw image dumps, so buffers
/// of these can be written to disk as-is.
#[repr(C)]
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash, Debug, Pod, Zeroable)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgba { r, g, b, a: 0xff }
    }
}

/// The 16-color CGA palette the game's art is drawn in.
///
/// Indexed atlas pixels carry a palette index in their low 4 bits.
pub const CGA_PALETTE: [Rgba; 16] = [
    Rgba::new(0x00, 0x00, 0x00), // 0 black
    Rgba::new(0x00, 0x00, 0xaa), // 1 blue
    Rgba::new(0x00, 0xaa, 0x00), // 2 green
    Rgba::new(0x00, 0xaa, 0xaa), // 3 cyan
    Rgba::new(0xaa, 0x00, 0x00), // 4 red
    Rgba::new(0xaa, 0x00, 0xaa), // 5 magenta
    Rgba::new(0xaa, 0x55, 0x00), // 6 brown
    Rgba::new(0xaa, 0xaa, 0xaa), // 7 light grey
    Rgba::new(0x55, 0x55, 0x55), // 8 dark grey
    Rgba::new(0x55, 0x55, 0xff), // 9 light blue
    Rgba::new(0x55, 0xff, 0x55), // a light green
    Rgba::new(0x55, 0xff, 0xff), // b light cyan
    Rgba::new(0xff, 0x55, 0x55), // c light red
    Rgba::new(0xff, 0x55, 0xff), // d light magenta
    Rgba::new(0xff, 0xff, 0x55), // e yellow
    Rgba::new(0xff, 0xff, 0xff), // f white
];

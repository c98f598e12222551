mod bmp;

mod buffer;
pub use buffer::Buffer;

mod font;
pub use font::{Font, pack_sheet};

mod font_data;
pub use font_data::FONT_8X8;

mod pixel;
pub use pixel::{CGA_PALETTE, Rgba};

mod rect;
pub use rect::Rect;

/// Pixel edge length of map tiles and font glyphs.
pub const TILE_SIZE: i32 = 8;

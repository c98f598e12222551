use gfx::{Buffer, Font, Rect, Rgba, TILE_SIZE};
use glam::{IVec2, ivec2};
use log::{debug, info, warn};
use world::{MapFile, ROOM_HEIGHT, ROOM_WIDTH, Room};

use crate::histogram::TileHistogram;

/// Room width in pixels.
pub const ROOM_W_PX: i32 = ROOM_WIDTH * TILE_SIZE;
/// Room height in pixels, tiles only.
pub const ROOM_H_PX: i32 = ROOM_HEIGHT * TILE_SIZE;
/// Grid cell height in pixels, room tiles plus the label row.
pub const CELL_H_PX: i32 = ROOM_H_PX + TILE_SIZE;

/// Rooms the strip canvas holds, sized for the shipping world map.
pub const STRIP_ROOMS: i32 = 149;
/// Grid canvas width in rooms.
pub const GRID_W: i32 = 19;
/// Grid canvas height in rooms.
pub const GRID_H: i32 = 13;

/// Order in which a room's tile references map to tile positions.
///
/// The shipping map stores a room as 40 columns of 24 tiles. Earlier
/// builds of the game stored rows instead.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum DrawOrder {
    #[default]
    ColumnMajor,
    RowMajor,
}

impl DrawOrder {
    /// Room tile position of the `n`th tile reference in file order.
    pub fn tile_pos(self, n: usize) -> IVec2 {
        let n = n as i32;
        match self {
            DrawOrder::ColumnMajor => ivec2(n / ROOM_HEIGHT, n % ROOM_HEIGHT),
            DrawOrder::RowMajor => ivec2(n % ROOM_WIDTH, n / ROOM_WIDTH),
        }
    }
}

/// Composited world canvases plus the tile usage tally of one full
/// decode pass.
pub struct WorldImages {
    /// All rooms stacked vertically in file order, one 320x192 px block
    /// each.
    pub strip: Buffer<Rgba>,
    /// Rooms placed at their world coordinates, 200 px tall cells with
    /// a name label row under each room's tiles.
    pub grid: Buffer<Rgba>,
    pub histogram: TileHistogram,
}

impl WorldImages {
    /// Render every parsed room into fresh canvases.
    pub fn compose(
        map: &MapFile,
        atlas: &Buffer<Rgba>,
        font: &Font,
        order: DrawOrder,
    ) -> WorldImages {
        let mut images = WorldImages {
            strip: Buffer::new(
                ROOM_W_PX as u32,
                (STRIP_ROOMS * ROOM_H_PX) as u32,
            ),
            grid: Buffer::new(
                (GRID_W * ROOM_W_PX) as u32,
                (GRID_H * CELL_H_PX) as u32,
            ),
            histogram: TileHistogram::default(),
        };

        info!(
            "world size: {} x {} rooms",
            map.bounds.width(),
            map.bounds.height()
        );
        info!(
            "   left : {:+3}, top: {:+3}",
            map.bounds.min.x, map.bounds.min.y
        );
        info!(
            "   right: {:+3}, bot: {:+3}",
            map.bounds.max.x, map.bounds.max.y
        );

        for (i, room) in map.rooms.iter().enumerate() {
            let i = i as i32;
            if i >= STRIP_ROOMS {
                warn!("out of strip canvas space, stopping at room #{i}");
                break;
            }

            debug!("drawing room #{i}");
            images.draw_room_strip(i, room, atlas, order);
            images.place_room_grid(i, room.pos - map.bounds.min, room, font);
        }

        images
    }

    /// Draw a room's tiles into the strip canvas block at index `i`.
    ///
    /// Every reference is recorded in the histogram, references outside
    /// the atlas are then skipped.
    fn draw_room_strip(
        &mut self,
        i: i32,
        room: &Room,
        atlas: &Buffer<Rgba>,
        order: DrawOrder,
    ) {
        let top = ivec2(0, i * ROOM_H_PX);
        for (n, tile) in room.tile_refs().enumerate() {
            self.histogram.record(tile);

            let pos = order.tile_pos(n);
            let Some(cell) = tile.atlas_cell() else {
                warn!(
                    "invalid map tile {:#06x} at {} x {} in room #{i}",
                    tile.0, pos.x, pos.y
                );
                continue;
            };

            let src = Rect::sized([TILE_SIZE, TILE_SIZE]) + cell * TILE_SIZE;
            self.strip.copy_from(atlas, src, top + pos * TILE_SIZE);
        }
    }

    /// Copy strip block `i` into the room's grid cell and label it.
    fn place_room_grid(&mut self, i: i32, cell: IVec2, room: &Room, font: &Font) {
        if !Rect::sized([GRID_W, GRID_H]).contains(cell) {
            warn!(
                "room #{i} cell {} x {} is outside the grid canvas",
                cell.x, cell.y
            );
            return;
        }

        let src = Rect::sized([ROOM_W_PX, ROOM_H_PX]) + ivec2(0, i * ROOM_H_PX);
        let origin = cell * ivec2(ROOM_W_PX, CELL_H_PX);
        self.grid.copy_from(&self.strip, src, origin);
        self.draw_label(room.desc.name, origin + ivec2(0, ROOM_H_PX), font);
    }

    /// Draw a 40-glyph label row at `origin`, the name centered in
    /// blanks so the whole row is painted.
    fn draw_label(&mut self, name: &str, origin: IVec2, font: &Font) {
        let len = name.chars().count() as i32;
        let left_pad = (ROOM_WIDTH - len) / 2;

        let mut glyphs = name.chars().map(Font::glyph_index);
        for col in 0..ROOM_WIDTH {
            let glyph = if col >= left_pad {
                glyphs.next().unwrap_or(b' ')
            } else {
                b' '
            };
            self.grid.copy_from(
                font.sheet(),
                font.glyph(glyph),
                origin + ivec2(col * TILE_SIZE, 0),
            );
        }
    }
}

mod mapfile;
pub use mapfile::{MapFile, MapHeader, Room, TileRef, WorldBounds};

mod rooms;
pub use rooms::{RoomDescriptor, descriptor};

/// Width of a single room in tiles.
pub const ROOM_WIDTH: i32 = 40;
/// Height of a single room in tiles.
pub const ROOM_HEIGHT: i32 = 24;
/// Number of tile references in one room record.
pub const ROOM_TILES: usize = (ROOM_WIDTH * ROOM_HEIGHT) as usize;
/// Edge length of the square tile atlas in tiles.
pub const ATLAS_TILES: i32 = 32;
/// Version tag of the map format this crate decodes.
pub const MAP_VERSION: u16 = 0x0201;

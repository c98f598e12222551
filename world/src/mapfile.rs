//! World map file decoding.
//!
//! A map file is a 22-byte little-endian header followed by one record
//! per room:
//!
//! ```text
//! header: version u16, player start room i32 x i32, two unknown i32
//!         fields, room count i32
//! room:   world position i32 x i32, then 40x24 tile references, one
//!         u16 each
//! ```
//!
//! Tile data is stored a column at a time, 24 consecutive references
//! per column. Any bytes past the last room record are an unparsed
//! trailer.

use anyhow::{Result, bail};
use glam::{IVec2, ivec2};
use log::{debug, info, warn};

use crate::{ATLAS_TILES, MAP_VERSION, ROOM_TILES, RoomDescriptor, descriptor};

/// Byte length of the map file header.
pub const HEADER_LEN: usize = 22;

/// Byte length of one room record.
pub const ROOM_LEN: usize = 8 + 2 * ROOM_TILES;

/// Hard cap on parsed rooms. The shipping map has 149 and a full 19x13
/// world would have 247.
pub const MAX_ROOMS: usize = 250;

fn read_u16(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([data[offset], data[offset + 1]])
}

fn read_i32(data: &[u8], offset: usize) -> i32 {
    i32::from_le_bytes(data[offset..offset + 4].try_into().unwrap())
}

/// Fixed-layout map file header.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct MapHeader {
    pub version: u16,
    pub player_start: IVec2,
    pub unknown1: i32,
    pub unknown2: i32,
    pub room_count: i32,
}

impl MapHeader {
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < HEADER_LEN {
            bail!("map file too short, {} bytes", data.len());
        }

        let version = read_u16(data, 0);
        if version != MAP_VERSION {
            bail!("unrecognized map version {version:#06x}");
        }

        Ok(MapHeader {
            version,
            player_start: ivec2(read_i32(data, 2), read_i32(data, 6)),
            unknown1: read_i32(data, 10),
            unknown2: read_i32(data, 14),
            room_count: read_i32(data, 18),
        })
    }
}

/// 16-bit tile reference, low byte atlas column, high byte atlas row.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct TileRef(pub u16);

impl TileRef {
    pub fn col(self) -> i32 {
        (self.0 & 0xff) as i32
    }

    pub fn row(self) -> i32 {
        (self.0 >> 8) as i32
    }

    /// Atlas cell for this reference, `None` when either coordinate is
    /// outside the atlas.
    pub fn atlas_cell(self) -> Option<IVec2> {
        if self.col() < ATLAS_TILES && self.row() < ATLAS_TILES {
            Some(ivec2(self.col(), self.row()))
        } else {
            None
        }
    }
}

/// One parsed room, tile data borrowed from the map file bytes.
#[derive(Clone, Debug)]
pub struct Room<'a> {
    pub pos: IVec2,
    pub desc: &'static RoomDescriptor,
    tiles: &'a [u8],
}

impl Room<'_> {
    /// Tile references in file order.
    pub fn tile_refs(&self) -> impl Iterator<Item = TileRef> + '_ {
        self.tiles
            .chunks_exact(2)
            .map(|t| TileRef(u16::from_le_bytes([t[0], t[1]])))
    }
}

/// Running min/max over room coordinates.
///
/// Starts zeroed, so the bounds always include the origin even when no
/// room sits there.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct WorldBounds {
    pub min: IVec2,
    pub max: IVec2,
}

impl WorldBounds {
    pub fn include(&mut self, pos: IVec2) {
        self.min = self.min.min(pos);
        self.max = self.max.max(pos);
    }

    /// World width in rooms.
    pub fn width(&self) -> i32 {
        self.max.x - self.min.x + 1
    }

    /// World height in rooms.
    pub fn height(&self) -> i32 {
        self.max.y - self.min.y + 1
    }
}

/// A decoded map file: header, rooms in file order and world bounds.
pub struct MapFile<'a> {
    pub header: MapHeader,
    pub rooms: Vec<Room<'a>>,
    pub bounds: WorldBounds,
    /// Unparsed bytes past the last room record.
    pub trailer: usize,
}

impl<'a> MapFile<'a> {
    /// Decode a map file.
    ///
    /// Fails only on a bad header. A room count that does not fit the
    /// buffer is clamped to the records actually present.
    pub fn parse(data: &'a [u8]) -> Result<MapFile<'a>> {
        let header = MapHeader::parse(data)?;
        info!("map header:");
        info!(
            "  player starting room: {} x {}",
            header.player_start.x, header.player_start.y
        );
        info!("  unknown field 1: {}", header.unknown1);
        info!("  unknown field 2: {}", header.unknown2);
        info!("  total rooms: {}", header.room_count);

        let declared = header.room_count.max(0) as usize;
        let available = (data.len() - HEADER_LEN) / ROOM_LEN;
        let count = declared.min(available).min(MAX_ROOMS);
        if count < declared {
            warn!("map declares {declared} rooms, only decoding {count}");
        }

        let mut rooms = Vec::with_capacity(count);
        let mut bounds = WorldBounds::default();
        for i in 0..count {
            let offset = HEADER_LEN + i * ROOM_LEN;
            let record = &data[offset..offset + ROOM_LEN];
            let pos = ivec2(read_i32(record, 0), read_i32(record, 4));
            let desc = descriptor(pos);
            bounds.include(pos);
            debug!(
                "@ {offset:06X} room #{i:3} ({:+3} x {:+3}), {}",
                pos.x, pos.y, desc.name
            );
            rooms.push(Room {
                pos,
                desc,
                tiles: &record[8..],
            });
        }

        let end = HEADER_LEN + count * ROOM_LEN;
        let trailer = data.len() - end;
        info!("@ {end:06X} unknown trailing map data: {trailer} ({trailer:#06x}) bytes");

        Ok(MapFile {
            header,
            rooms,
            bounds,
            trailer,
        })
    }

    /// Stand-in for a map that failed to decode.
    pub fn empty() -> MapFile<'static> {
        MapFile {
            header: MapHeader::default(),
            rooms: Vec::new(),
            bounds: WorldBounds::default(),
            trailer: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    /// Build map file bytes with each room filled by a single tile ref.
    fn map_bytes(rooms: &[(i32, i32, u16)]) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(&MAP_VERSION.to_le_bytes());
        data.extend_from_slice(&3i32.to_le_bytes());
        data.extend_from_slice(&4i32.to_le_bytes());
        data.extend_from_slice(&0i32.to_le_bytes());
        data.extend_from_slice(&0i32.to_le_bytes());
        data.extend_from_slice(&(rooms.len() as i32).to_le_bytes());
        for &(x, y, fill) in rooms {
            data.extend_from_slice(&x.to_le_bytes());
            data.extend_from_slice(&y.to_le_bytes());
            for _ in 0..ROOM_TILES {
                data.extend_from_slice(&fill.to_le_bytes());
            }
        }
        data
    }

    #[test]
    fn parse_two_rooms() {
        let data = map_bytes(&[(0, 0, 0), (1, 0, 0)]);
        assert_eq!(data.len(), HEADER_LEN + 2 * ROOM_LEN);

        let map = MapFile::parse(&data).unwrap();
        assert_eq!(map.header.version, MAP_VERSION);
        assert_eq!(map.header.player_start, ivec2(3, 4));
        assert_eq!(map.header.room_count, 2);
        assert_eq!(map.rooms.len(), 2);
        assert_eq!(map.rooms[0].pos, ivec2(0, 0));
        assert_eq!(map.rooms[0].desc.name, "Treasure Hunt");
        assert_eq!(map.rooms[1].pos, ivec2(1, 0));
        assert_eq!(map.rooms[1].desc.name, "Danger");
        assert_eq!(map.bounds.min, ivec2(0, 0));
        assert_eq!(map.bounds.max, ivec2(1, 0));
        assert_eq!(map.bounds.width(), 2);
        assert_eq!(map.bounds.height(), 1);
        assert_eq!(map.trailer, 0);
    }

    #[test]
    fn rejects_bad_header() {
        let mut data = map_bytes(&[(0, 0, 0)]);
        data[0] = 0x02;
        data[1] = 0x02;
        assert!(MapFile::parse(&data).is_err());

        assert!(MapFile::parse(&[0; 10]).is_err());
    }

    #[test]
    fn reports_trailer_bytes() {
        let mut data = map_bytes(&[(0, 0, 0), (1, 0, 0)]);
        data.extend_from_slice(&[0xee; 7]);

        let map = MapFile::parse(&data).unwrap();
        assert_eq!(map.rooms.len(), 2);
        assert_eq!(map.trailer, 7);
    }

    #[test]
    fn clamps_room_count() {
        // Declares five rooms but holds one.
        let mut data = map_bytes(&[(0, 0, 0)]);
        data[18..22].copy_from_slice(&5i32.to_le_bytes());
        let map = MapFile::parse(&data).unwrap();
        assert_eq!(map.rooms.len(), 1);

        // A negative count reads as zero.
        data[18..22].copy_from_slice(&(-1i32).to_le_bytes());
        let map = MapFile::parse(&data).unwrap();
        assert_eq!(map.rooms.len(), 0);
        assert_eq!(map.trailer, ROOM_LEN);

        // More records than the room table holds.
        let rooms: Vec<(i32, i32, u16)> =
            (0..251).map(|i| (i % 19, i / 19, 0)).collect();
        let map_data = map_bytes(&rooms);
        let map = MapFile::parse(&map_data).unwrap();
        assert_eq!(map.rooms.len(), MAX_ROOMS);
        assert_eq!(map.trailer, ROOM_LEN);
    }

    #[test]
    fn bounds_include_origin() {
        let data = map_bytes(&[(-3, -2, 0)]);
        let map = MapFile::parse(&data).unwrap();

        assert_eq!(map.bounds.min, ivec2(-3, -2));
        assert_eq!(map.bounds.max, ivec2(0, 0));
        assert_eq!(map.bounds.width(), 4);
        assert_eq!(map.bounds.height(), 3);
    }

    #[test]
    fn tile_refs_decode() {
        let data = map_bytes(&[(0, 0, 0x0102)]);
        let map = MapFile::parse(&data).unwrap();

        let refs: Vec<TileRef> = map.rooms[0].tile_refs().collect();
        assert_eq!(refs.len(), ROOM_TILES);
        assert_eq!(refs[0], TileRef(0x0102));
        assert_eq!(refs[0].col(), 2);
        assert_eq!(refs[0].row(), 1);
        assert_eq!(refs[0].atlas_cell(), Some(ivec2(2, 1)));

        assert_eq!(TileRef(0x1f1f).atlas_cell(), Some(ivec2(31, 31)));
        assert_eq!(TileRef(0x2000).atlas_cell(), None);
        assert_eq!(TileRef(0x0020).atlas_cell(), None);
        assert_eq!(TileRef(0xffff).atlas_cell(), None);
    }
}

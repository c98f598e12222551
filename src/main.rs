use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use gfx::{Buffer, CGA_PALETTE, Font, pack_sheet};
use itertools::Itertools;
use log::{error, info, warn};
use world::MapFile;

mod compose;
mod files;
mod histogram;

use compose::{DrawOrder, STRIP_ROOMS, WorldImages};

/// Binary world map, read from the data directory.
const MAP_FILE: &str = "yhtwtg.map";
/// Indexed tile atlas, 256x256 px, one palette index byte per pixel.
const ATLAS_FILE: &str = "tiles_raw_indexed.data";
/// RGBA glyph sheet consumed by --pack-font, 256x64 px.
const FONT_SHEET_FILE: &str = "font_cga_256x64.data";

const ATLAS_OUT: &str = "tiles_32x32_rgba32_256x256.data";
const STRIP_OUT: &str = "WorldMap1D_1x149_rooms_rgba32_320x28608.data";
const GRID_OUT: &str = "WorldMap2D_19x13_rooms_rgba32_6080x2600.data";
const BMP_OUT: &str = "WorldMap2D_19x13_rooms.bmp";
const FONT_OUT: &str = "font_cga_rgba32_8x2048.data";

/// Map read buffer size, roughly double the shipping map.
const MAP_BUFFER_LEN: usize = 300 * 1024;
/// Atlas read buffer size. Only the leading 64 KiB of index bytes are
/// decoded.
const ATLAS_BUFFER_LEN: usize = 192 * 1024;

/// Atlas image edge in pixels.
const ATLAS_PX: i32 = world::ATLAS_TILES * gfx::TILE_SIZE;

#[derive(Parser, Debug)]
struct Args {
    #[arg(
        long,
        value_name = "DIR",
        default_value = ".",
        help = "Directory holding the game data files"
    )]
    dir: PathBuf,

    #[arg(long, help = "Draw room tiles row by row instead of column by column")]
    row_major: bool,

    #[arg(long, help = "Also dump the expanded font strip as raw RGBA")]
    save_font: bool,

    #[arg(long, help = "Repack the glyph sheet and print it as a Rust array")]
    pack_font: bool,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    info!("data directory: {}", args.dir.display());

    if args.pack_font {
        return pack_font(&args.dir);
    }

    // A missing input only logs an error: the run continues with a
    // zeroed buffer and decodes to an empty world.
    let mut map_bytes = vec![0; MAP_BUFFER_LEN];
    let map_len = files::read_into(&args.dir.join(MAP_FILE), &mut map_bytes)
        .unwrap_or_else(|e| {
            error!("{e:#}");
            0
        });

    let mut atlas_bytes = vec![0; ATLAS_BUFFER_LEN];
    if let Err(e) =
        files::read_into(&args.dir.join(ATLAS_FILE), &mut atlas_bytes)
    {
        error!("{e:#}");
    }

    let map = MapFile::parse(&map_bytes[..map_len]).unwrap_or_else(|e| {
        error!("couldn't decode map: {e:#}");
        MapFile::empty()
    });
    info!("found {} rooms", map.rooms.len());
    if map.rooms.len() != STRIP_ROOMS as usize {
        warn!(
            "unexpected number of rooms, {} != {STRIP_ROOMS}",
            map.rooms.len()
        );
    }

    let atlas = Buffer::from_indexed(
        ATLAS_PX as u32,
        ATLAS_PX as u32,
        &atlas_bytes[..(ATLAS_PX * ATLAS_PX) as usize],
        &CGA_PALETTE,
    );

    let font = Font::default();
    let order = if args.row_major {
        DrawOrder::RowMajor
    } else {
        DrawOrder::ColumnMajor
    };
    let images = WorldImages::compose(&map, &atlas, &font, order);

    // Failed writes are reported, the remaining outputs still go out.
    let save = |name: &str, bytes: &[u8]| {
        if let Err(e) = files::save(&args.dir.join(name), bytes) {
            error!("{e:#}");
        }
    };
    save(ATLAS_OUT, atlas.as_bytes());
    save(STRIP_OUT, images.strip.as_bytes());
    save(GRID_OUT, images.grid.as_bytes());
    save(BMP_OUT, &images.grid.to_bmp());
    if args.save_font {
        save(FONT_OUT, font.sheet().as_bytes());
    }

    images.histogram.print_report();

    Ok(())
}

/// Asset authoring path: re-derive the packed font table from an RGBA
/// glyph sheet and print it as a Rust array literal.
fn pack_font(dir: &Path) -> Result<()> {
    let mut sheet_bytes = vec![0; 256 * 64 * 4];
    files::read_into(&dir.join(FONT_SHEET_FILE), &mut sheet_bytes)?;
    let sheet = Buffer::from_rgba_bytes(256, 64, &sheet_bytes);
    let bits = pack_sheet(&sheet);

    println!("pub const FONT_8X8: [u8; 2048] = [");
    for (glyph, rows) in bits.chunks(8).enumerate() {
        let bytes = rows.iter().map(|b| format!("{b:#04X}")).join(", ");
        println!("    {bytes}, // {glyph:02x}");
    }
    println!("];");

    Ok(())
}

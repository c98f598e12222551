use world::{ATLAS_TILES, TileRef};

/// Per tile reference draw counts over one full decode pass.
///
/// Every drawn reference is counted, valid or not, but only references
/// that land inside the atlas show up in the report.
pub struct TileHistogram {
    counts: Vec<u32>,
}

impl Default for TileHistogram {
    fn default() -> Self {
        TileHistogram {
            counts: vec![0; 1 << 16],
        }
    }
}

impl TileHistogram {
    pub fn record(&mut self, tile: TileRef) {
        self.counts[tile.0 as usize] += 1;
    }

    pub fn count(&self, tile: TileRef) -> u32 {
        self.counts[tile.0 as usize]
    }

    /// Usage totals over the valid atlas cells.
    pub fn summary(&self) -> HistogramSummary {
        let total = (ATLAS_TILES * ATLAS_TILES) as usize;
        let used = (0..ATLAS_TILES)
            .flat_map(|row| (0..ATLAS_TILES).map(move |col| cell_ref(col, row)))
            .filter(|&t| self.count(t) != 0)
            .count();

        HistogramSummary {
            used,
            unused: total - used,
            total,
        }
    }

    /// Print the count for every atlas cell plus the usage totals to
    /// stdout.
    pub fn print_report(&self) {
        println!("Histogram Map Tiles (Tile = 0xYYXX)");
        for row in 0..ATLAS_TILES {
            for col in 0..ATLAS_TILES {
                let tile = cell_ref(col, row);
                print!("{:04X}: {:6}  ", tile.0, self.count(tile));
                if col % 16 == 15 {
                    println!();
                }
            }
        }

        let summary = self.summary();
        println!("Used   tiles: {}", summary.used);
        println!("Unused tiles: {}", summary.unused);
        println!("Total  tiles: {}", summary.total);
        println!("Efficiency: {:5.2}%", summary.percent_used());
    }
}

/// Tile usage totals, counted over the atlas.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct HistogramSummary {
    pub used: usize,
    pub unused: usize,
    pub total: usize,
}

impl HistogramSummary {
    pub fn percent_used(&self) -> f64 {
        100.0 * self.used as f64 / self.total as f64
    }
}

fn cell_ref(col: i32, row: i32) -> TileRef {
    TileRef(((row as u16) << 8) | col as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_every_draw() {
        let mut histogram = TileHistogram::default();
        for _ in 0..3 {
            histogram.record(TileRef(0x0102));
        }
        // Out of atlas range, still counted.
        histogram.record(TileRef(0xffff));

        assert_eq!(histogram.count(TileRef(0x0102)), 3);
        assert_eq!(histogram.count(TileRef(0xffff)), 1);
        assert_eq!(histogram.count(TileRef(0)), 0);
    }

    #[test]
    fn summary_covers_atlas_only() {
        let mut histogram = TileHistogram::default();
        histogram.record(TileRef(0x0000));
        histogram.record(TileRef(0x1f1f));
        // Invalid references never appear in the totals.
        histogram.record(TileRef(0x2000));
        histogram.record(TileRef(0xffff));

        let summary = histogram.summary();
        assert_eq!(summary.used, 2);
        assert_eq!(summary.unused, 1022);
        assert_eq!(summary.total, 1024);
    }

    #[test]
    fn percentage() {
        let mut histogram = TileHistogram::default();
        histogram.record(TileRef(0));

        let summary = histogram.summary();
        assert_eq!(summary.used, 1);
        assert!((summary.percent_used() - 100.0 / 1024.0).abs() < 1e-9);
        assert_eq!(format!("{:5.2}", summary.percent_used()), " 0.10");
    }
}

use std::{
    fs::{self, File},
    io::{self, Read},
    path::Path,
};

use anyhow::{Context, Result};
use log::info;

/// Zero the buffer, then read up to its capacity from `path`.
///
/// Returns the byte count actually read. A file longer than the buffer
/// is truncated at capacity. The buffer stays zeroed when the file
/// cannot be opened.
pub fn read_into(path: &Path, buffer: &mut [u8]) -> Result<usize> {
    buffer.fill(0);

    let mut file = File::open(path)
        .with_context(|| format!("couldn't open {}", path.display()))?;

    let mut total = 0;
    while total < buffer.len() {
        match file.read(&mut buffer[total..]) {
            Ok(0) => break,
            Ok(n) => total += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e.into()),
        }
    }

    info!("read {} bytes from {}", total, path.display());
    Ok(total)
}

/// Write a whole output file.
pub fn save(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes)
        .with_context(|| format!("couldn't write {}", path.display()))?;
    info!("saved {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{
        path::PathBuf,
        time::{SystemTime, UNIX_EPOCH},
    };

    use super::*;

    fn temp_dir() -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock went backwards")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("mapdump_files_{nanos}"));
        fs::create_dir_all(&dir).expect("failed to create temp dir");
        dir
    }

    #[test]
    fn read_caps_at_buffer_len() {
        let dir = temp_dir();
        let path = dir.join("data.bin");
        fs::write(&path, [1, 2, 3, 4, 5]).unwrap();

        // File shorter than the buffer: tail stays zeroed.
        let mut buffer = [0xff; 8];
        assert_eq!(read_into(&path, &mut buffer).unwrap(), 5);
        assert_eq!(buffer, [1, 2, 3, 4, 5, 0, 0, 0]);

        // File longer than the buffer: truncated at capacity.
        let mut buffer = [0xff; 3];
        assert_eq!(read_into(&path, &mut buffer).unwrap(), 3);
        assert_eq!(buffer, [1, 2, 3]);

        // Missing file reports an error and leaves the buffer zeroed.
        let mut buffer = [0xff; 4];
        assert!(read_into(&dir.join("nope.bin"), &mut buffer).is_err());
        assert_eq!(buffer, [0; 4]);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn save_round_trip() {
        let dir = temp_dir();
        let path = dir.join("out.bin");

        save(&path, &[9, 8, 7]).unwrap();
        assert_eq!(fs::read(&path).unwrap(), [9, 8, 7]);

        fs::remove_dir_all(&dir).ok();
    }
}

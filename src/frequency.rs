use std::fs::File;
use std::io::{self, ErrorKind, Read};
use std::path::Path;

use log::{debug, info};

use crate::error::{Error, Result};
use crate::huffman::FreqTable;

/// Bytes pulled from the source per read call.
const CHUNK_SIZE: usize = 10_000;

/// Scans `reader` once and counts every byte value it yields.
pub fn count_frequencies<R: Read>(mut reader: R) -> io::Result<FreqTable> {
    let mut counts = [0u64; 256];
    let mut buffer = vec![0u8; CHUNK_SIZE];
    let mut total = 0u64;

    loop {
        let len = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(len) => len,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        for &byte in &buffer[..len] {
            counts[byte as usize] += 1;
        }
        total += len as u64;
    }

    let freq: FreqTable = counts
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .map(|(byte, &count)| (byte as u8, count))
        .collect();

    debug!(
        "Counted {} bytes, {} unique symbols",
        total,
        freq.len()
    );
    Ok(freq)
}

/// Counts the bytes of the file at `path`.
pub fn count_file_frequencies(path: &Path) -> Result<FreqTable> {
    info!("Reading input file: {}", path.display());

    let unreadable = |source| Error::SourceUnreadable {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(unreadable)?;
    count_frequencies(file).map_err(unreadable)
}

//! Log file loading with transparent gzip support.
//!
//! Minecraft rolls old chat logs into `.log.gz` archives. Compression is
//! detected from the first two bytes of the file, never from its name.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use log::{debug, error};

use crate::config::GZIP_MAGIC;
use crate::error::Result;

/// Whether the file starts with the gzip signature.
///
/// Files shorter than two bytes are never gzip.
pub fn is_gzip(path: &Path) -> Result<bool> {
    let mut reader = BufReader::new(File::open(path)?);
    Ok(starts_with_gzip_magic(&mut reader)?)
}

/// Peek at the buffered header without consuming it.
fn starts_with_gzip_magic<R: BufRead>(reader: &mut R) -> io::Result<bool> {
    let header = reader.fill_buf()?;
    Ok(header.len() >= GZIP_MAGIC.len() && header[..GZIP_MAGIC.len()] == GZIP_MAGIC)
}

/// Read the whole file as text, decompressing it first if it is gzip.
///
/// The file is opened once; the header is sniffed from the same buffered
/// handle that is then read. Bytes that are not valid UTF-8 are replaced
/// rather than rejected.
pub fn read_log(path: &Path) -> Result<String> {
    let mut reader = BufReader::new(File::open(path)?);
    let gzip = starts_with_gzip_magic(&mut reader)?;
    debug!(
        "{} read as {}",
        path.display(),
        if gzip { "gzip" } else { "plain text" }
    );

    let mut bytes = Vec::new();
    if gzip {
        GzDecoder::new(reader).read_to_end(&mut bytes)?;
    } else {
        reader.read_to_end(&mut bytes)?;
    }
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Like [`read_log`], but a failure is logged and yields an empty string so
/// the caller can move on to the next file.
pub fn read_file(path: &Path) -> String {
    match read_log(path) {
        Ok(content) => content,
        Err(e) => {
            error!("Error processing file {}: {}", path.display(), e);
            String::new()
        }
    }
}

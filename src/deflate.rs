//! Single-shot zlib compression and decompression of byte buffers.

use std::io::{self, Read, Write};

use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;

/// Compress the whole buffer as one zlib stream at the default level.
///
/// `size_hint` pre-sizes the output buffer; the result may grow past it.
///
/// # Errors
/// Propagates any I/O error reported by the deflate stream.
pub fn compress(data: &[u8], size_hint: usize) -> io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::with_capacity(size_hint), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

/// Decompress one zlib stream into a freshly allocated buffer.
///
/// `size_hint` pre-sizes the output buffer; the result may grow past it.
///
/// # Errors
/// Fails if `data` is not a valid zlib stream.
pub fn decompress(data: &[u8], size_hint: usize) -> io::Result<Vec<u8>> {
    let mut decoder = ZlibDecoder::new(data);
    let mut decompressed = Vec::with_capacity(size_hint);
    decoder.read_to_end(&mut decompressed)?;
    Ok(decompressed)
}

//! This library handles reading the nested **BIN** blob lists found inside some ARC entries of
//! *Umineko no Naku Koro ni Shun*.
//!
//! # BIN Nested Index Documentation
//!
//! Certain files packed inside the game's ARC archives are themselves bundles of multiple
//! anonymous blobs, indexed by a flat count-prefixed table. The format carries no magic number
//! and no names; the only way to recognize it is to try decoding it.
//!
//! ## File Structure
//!
//! | Offset (bytes) | Field                  | Description                                             |
//! |----------------|------------------------|---------------------------------------------------------|
//! | 0x0000         | File Count             | 4 bytes: Number of records that follow                  |
//! | 0x0004         | Records                | File Count * 8 bytes                                    |
//!
//! Each record:
//!
//! | Offset (bytes) | Field                  | Description                                             |
//! |----------------|------------------------|---------------------------------------------------------|
//! | 0x0000         | Size                   | 4 bytes: Blob length in bytes                           |
//! | 0x0004         | Offset                 | 4 bytes: Absolute offset of the blob                    |
//!
//! Blobs are located by absolute offset into the same byte source. Offsets need not be
//! monotonically increasing, and blobs may overlap or leave gaps; the decoder assumes no
//! packing.
//!
//! ## Additional Information
//!
//! - **Endianness**: Little-endian
//! - **Recognition**: best-effort only; any structural inconsistency means "not a BIN list"
//!

use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{Cursor, Read, Seek, SeekFrom};
use tracing::instrument;

// The original tooling decodes every field as a signed 32-bit integer.
const MAX_FIELD: u32 = i32::MAX as u32;

/// A decoded nested blob list
///
/// Read-only: this codec only ever decodes BIN lists, for exploration and
/// export; it never writes them back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BinFile {
    files: Vec<Vec<u8>>,
}

impl BinFile {
    /// Probe `reader` for a nested blob list.
    ///
    /// This is a content sniff over arbitrary bytes, not a first-class
    /// decode: any structural inconsistency (a count, size or offset outside
    /// the signed 32-bit range, or a blob running past the end of the
    /// source) yields `None` with no further detail.
    #[instrument(skip(reader))]
    pub fn try_parse<R: Read + Seek>(reader: &mut R) -> Option<BinFile> {
        let file_count = reader.read_u32::<LittleEndian>().ok()?;
        if file_count > MAX_FIELD {
            return None;
        }

        let mut files = Vec::new();
        for _ in 0..file_count {
            let size = reader.read_u32::<LittleEndian>().ok()?;
            let offset = reader.read_u32::<LittleEndian>().ok()?;
            if size > MAX_FIELD || offset > MAX_FIELD {
                return None;
            }

            let record_end = reader.stream_position().ok()?;
            reader.seek(SeekFrom::Start(offset as u64)).ok()?;
            let mut blob = vec![0u8; size as usize];
            reader.read_exact(&mut blob).ok()?;
            files.push(blob);
            reader.seek(SeekFrom::Start(record_end)).ok()?;
        }

        Some(BinFile { files })
    }

    /// Probe an in-memory byte slice for a nested blob list.
    pub fn try_parse_bytes(content: &[u8]) -> Option<BinFile> {
        BinFile::try_parse(&mut Cursor::new(content))
    }

    /// Number of blobs in the list
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the list holds no blobs
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Blob at `index`, if present
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        self.files.get(index).map(|blob| blob.as_slice())
    }

    /// Iterate over the blobs in record order
    pub fn files(&self) -> impl Iterator<Item = &[u8]> {
        self.files.iter().map(|blob| blob.as_slice())
    }
}

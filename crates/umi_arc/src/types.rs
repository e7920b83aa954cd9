//! Base types for the structure of an ARC file.

use binrw::{BinRead, BinWrite};

/// Record type tag for a file entry.
pub const ENTRY_FILE: u32 = 0x0000_0000;

/// Record type tag for a folder entry.
pub const ENTRY_FOLDER: u32 = 0x8000_0000;

/// Largest file size the format's size field can carry losslessly.
///
/// The size field is four bytes wide but the game's tooling decodes it as a
/// signed 32-bit integer; anything above this is treated as corrupt.
pub const MAX_FILE_SIZE: u32 = i32::MAX as u32;

/// Byte length of the file header.
pub const HEADER_LEN: u32 = 20;

/// Byte length of one index record inside a folder block.
pub const RECORD_LEN: u32 = 16;

/// ARC file header
///
/// Five little-endian u32 fields. The two magic values are opaque constants
/// echoed from the source archive; the counts and content offset are
/// derivable from the folder blocks and are advisory on read.
#[derive(BinRead, BinWrite, Debug, Copy, Clone, Default, PartialEq)]
#[brw(little)]
pub struct ArcHeader {
    /// First opaque header constant
    pub magic1: u32,

    /// Second opaque header constant
    pub magic2: u32,

    /// Number of folders in the archive, the root included
    pub folder_count: u32,

    /// Number of entries of both kinds, the root included
    pub entry_count: u32,

    /// Offset of the content blob from the start of the file
    pub content_start: u32,
}

/// One index record inside a folder block
///
/// A fixed 16-byte little-endian record describing a single child of a
/// folder. The meaning of `content_location` and `size` depends on the type
/// tag: for files they are the content offset and length, for folders the
/// child block offset and zero.
#[derive(BinRead, BinWrite, Debug, Copy, Clone, Default, PartialEq)]
#[brw(little)]
pub struct RawEntry {
    /// [`ENTRY_FILE`] or [`ENTRY_FOLDER`]
    pub entry_type: u32,

    /// Absolute offset of this entry's null-terminated name
    pub name_offset: u32,

    /// Absolute offset of the content bytes (file) or child block (folder)
    pub content_location: u32,

    /// Content length in bytes (file) or zero (folder)
    pub size: u32,
}

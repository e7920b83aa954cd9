//! This library handles reading from and creating **ARC** files used by *Umineko no Naku Koro ni Shun*.
//!
//! # ARC Archive Format Documentation
//!
//! This crate provides utilities to read and extract data from the **ARC** archive format used by
//! the game *Umineko no Naku Koro ni Shun*. The ARC format is a custom binary format that packs a
//! directory tree of named game assets within a single file. ARC files are typically identified
//! with the `.arc` extension.
//!
//! ## File Structure
//!
//! An ARC file consists of a header, followed by one folder block per folder, a name table, and
//! the content blob.
//!
//! | Offset (bytes) | Field                  | Description                                                |
//! |----------------|------------------------|------------------------------------------------------------|
//! | 0x0000         | Magic 1                | 4 bytes: First header constant, meaning unknown            |
//! | 0x0004         | Magic 2                | 4 bytes: Second header constant, meaning unknown           |
//! | 0x0008         | Folder Count           | 4 bytes: Number of folders in the archive, root included   |
//! | 0x000C         | Entry Count            | 4 bytes: Number of folders and files, root included        |
//! | 0x0010         | Content Start          | 4 bytes: Offset of the content blob                        |
//!
//! ### Header
//!
//! The two magic fields carry constants the game's own writer emits; they do not affect parsing
//! and are echoed back verbatim when an archive is re-serialized. The folder count, entry count
//! and content start are derivable from the folder blocks, and the reader treats them as
//! advisory only: the tree shape always comes from the recursive folder-block walk.
//!
//! ### Folder Blocks
//!
//! The root folder's block starts immediately after the header at offset 20. Every block is a
//! child count followed by a flat array of fixed-size index records:
//!
//! | Offset (bytes) | Field                  | Description                                             |
//! |----------------|------------------------|---------------------------------------------------------|
//! | 0x0000         | Child Count            | 4 bytes: Number of records that follow                  |
//! | 0x0004         | Records                | Child Count * 16 bytes                                  |
//!
//! Each record:
//!
//! | Offset (bytes) | Field                  | Description                                             |
//! |----------------|------------------------|---------------------------------------------------------|
//! | 0x0000         | Entry Type             | 4 bytes: `0x00000000` file, `0x80000000` folder         |
//! | 0x0004         | Name Offset            | 4 bytes: Absolute offset of the name in the name table  |
//! | 0x0008         | Content Location       | 4 bytes: File: absolute offset of the content bytes. Folder: absolute offset of the child's folder block |
//! | 0x000C         | Size                   | 4 bytes: File: content length. Folder: unused, zero     |
//!
//! The root folder has no record of its own and no name.
//!
//! ### Name Table
//!
//! Null-terminated ASCII names, one per non-root entry, concatenated with no padding. Records
//! reference names by absolute file offset.
//!
//! ### Content Blob
//!
//! Raw file bytes, concatenated with no padding or per-file framing. The format applies no
//! compression; a file's bytes are stored exactly as given.
//!
//! ## Canonical Order
//!
//! The game's writer lays the sections out in a fixed, reproducible order, and re-packed
//! archives must follow it to stay byte-compatible:
//!
//! - Folder blocks: root first, then every other folder ordered ancestors-before-descendants
//!   and otherwise reverse-lexicographically by path.
//! - File content (and file names): ascending by qualified path.
//! - Within a folder block: folders before files, then by name with `_` ranked after every
//!   other character.
//!
//! Serializing an archive rewrites each folder's in-memory child list into this canonical
//! order as a side effect.
//!
//! ## Additional Information
//!
//! - **File Extension**: `.arc`
//! - **Endianness**: Little-endian for all multi-byte integers
//! - **Size Limit**: file sizes above `0x7FFFFFFF` are rejected as corrupt
//!

pub mod entry;
pub mod error;
pub mod export;
pub mod import;
pub mod read;
pub mod types;
pub mod write;

pub use entry::{Archive, Entry, FileEntry, FolderEntry};
pub use export::dump_to_dir;

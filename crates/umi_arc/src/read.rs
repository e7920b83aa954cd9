//! Reading ARC archives
//!

use binrw::BinRead;
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{self, Read, Seek, SeekFrom};
use tracing::instrument;

use crate::{
    entry::{Archive, Entry, FileEntry, FolderEntry},
    error::{Error, Result},
    types::{ArcHeader, RawEntry, ENTRY_FILE, ENTRY_FOLDER, MAX_FILE_SIZE},
};

impl Archive {
    /// Read a complete archive into memory.
    ///
    /// The header's folder count, entry count and content offset are advisory
    /// and ignored here; the tree shape is derived entirely from the recursive
    /// folder-block walk starting right after the header. The operation is
    /// all-or-nothing: on any error no partial archive is returned.
    ///
    /// ```no_run
    /// fn list_arc_contents(mut reader: impl std::io::Read + std::io::Seek) -> umi_arc::error::Result<()> {
    ///     let archive = umi_arc::Archive::parse(&mut reader)?;
    ///
    ///     for (path, _) in archive.walk() {
    ///         println!("{path}");
    ///     }
    ///
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(reader), err)]
    pub fn parse<R: Read + Seek>(reader: &mut R) -> Result<Archive> {
        reader.rewind().map_err(map_io)?;
        let header = ArcHeader::read(reader).map_err(map_binrw)?;

        let first_block = reader.stream_position().map_err(map_io)?;
        let root = read_folder(reader, first_block)?;

        Ok(Archive {
            magic1: header.magic1,
            magic2: header.magic2,
            root,
        })
    }
}

/// Parse the folder block at `offset` into a still-nameless folder.
///
/// Name and content reads are random-access side trips; the index cursor is
/// restored after each so the fixed 16-byte records are consumed contiguously.
fn read_folder<R: Read + Seek>(reader: &mut R, offset: u64) -> Result<FolderEntry> {
    reader.seek(SeekFrom::Start(offset)).map_err(map_io)?;
    let child_count = reader.read_u32::<LittleEndian>().map_err(map_io)?;

    let mut folder = FolderEntry::new("");
    for _ in 0..child_count {
        let record = RawEntry::read(reader).map_err(map_binrw)?;
        let record_end = reader.stream_position().map_err(map_io)?;

        reader
            .seek(SeekFrom::Start(record.name_offset as u64))
            .map_err(map_io)?;
        let name = read_name(reader)?;

        match record.entry_type {
            ENTRY_FILE => {
                if record.size > MAX_FILE_SIZE {
                    return Err(Error::OversizedFile(record.size));
                }
                reader
                    .seek(SeekFrom::Start(record.content_location as u64))
                    .map_err(map_io)?;
                let mut content = vec![0u8; record.size as usize];
                reader.read_exact(&mut content).map_err(map_io)?;
                folder.entries.push(Entry::File(FileEntry { name, content }));
            }
            ENTRY_FOLDER => {
                let mut child = read_folder(reader, record.content_location as u64)?;
                child.name = name;
                folder.entries.push(Entry::Folder(child));
            }
            tag => return Err(Error::UnknownEntryType(tag)),
        }

        reader.seek(SeekFrom::Start(record_end)).map_err(map_io)?;
    }

    Ok(folder)
}

fn read_name<R: Read>(reader: &mut R) -> Result<String> {
    let mut raw: Vec<u8> = Vec::new();
    loop {
        let byte = reader.read_u8().map_err(map_io)?;
        if byte == b'\0' {
            break;
        }
        raw.push(byte);
    }
    Ok(String::from_utf8_lossy(&raw).into_owned())
}

fn map_io(err: io::Error) -> Error {
    if err.kind() == io::ErrorKind::UnexpectedEof {
        Error::TruncatedInput
    } else {
        Error::IOError(err)
    }
}

fn map_binrw(err: binrw::Error) -> Error {
    match err {
        binrw::Error::Io(inner) => map_io(inner),
        binrw::Error::Backtrace(backtrace) => match *backtrace.error {
            binrw::Error::Io(inner) => map_io(inner),
            other => Error::BinRWError(other),
        },
        other => Error::BinRWError(other),
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use pretty_assertions::assert_eq;

    use crate::{
        entry::{Archive, Entry},
        error::{Error, Result},
    };

    // One file "a.txt" with content "abc" at the root.
    #[rustfmt::skip]
    const SINGLE_FILE: &[u8] = &[
        // Header (20)
        0x04, 0x00, 0x00, 0x00,
        0x02, 0x00, 0x00, 0x00,
        0x01, 0x00, 0x00, 0x00,
        0x02, 0x00, 0x00, 0x00,
        0x2E, 0x00, 0x00, 0x00,
        // Root folder block (20)
        0x01, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
        0x28, 0x00, 0x00, 0x00,
        0x2E, 0x00, 0x00, 0x00,
        0x03, 0x00, 0x00, 0x00,
        // Names (6)
        0x61, 0x2E, 0x74, 0x78, 0x74, 0x00,
        // Content (3)
        0x61, 0x62, 0x63,
    ];

    // Folder "dir" holding file "b" ("XYZ"), plus root file "a" ("hi").
    #[rustfmt::skip]
    const NESTED: &[u8] = &[
        // Header (20)
        0x0B, 0x00, 0x00, 0x00,
        0x16, 0x00, 0x00, 0x00,
        0x02, 0x00, 0x00, 0x00,
        0x04, 0x00, 0x00, 0x00,
        0x54, 0x00, 0x00, 0x00,
        // Root folder block (36)
        0x02, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x80,
        0x4C, 0x00, 0x00, 0x00,
        0x38, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
        0x50, 0x00, 0x00, 0x00,
        0x54, 0x00, 0x00, 0x00,
        0x02, 0x00, 0x00, 0x00,
        // "dir" folder block (20)
        0x01, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
        0x52, 0x00, 0x00, 0x00,
        0x56, 0x00, 0x00, 0x00,
        0x03, 0x00, 0x00, 0x00,
        // Names (8)
        0x64, 0x69, 0x72, 0x00,
        0x61, 0x00,
        0x62, 0x00,
        // Content (5)
        0x68, 0x69,
        0x58, 0x59, 0x5A,
    ];

    #[test]
    fn read_single_file_archive() -> Result<()> {
        let archive = Archive::parse(&mut Cursor::new(SINGLE_FILE))?;

        assert_eq!(archive.magic1, 4);
        assert_eq!(archive.magic2, 2);
        assert_eq!(archive.root.name, "");
        assert_eq!(archive.folder_count(), 1);
        assert_eq!(archive.file_count(), 1);

        let Entry::File(file) = &archive.root.entries[0] else {
            panic!("expected a file entry");
        };
        assert_eq!(file.name, "a.txt");
        assert_eq!(file.content, b"abc");

        Ok(())
    }

    #[test]
    fn read_nested_archive() -> Result<()> {
        let archive = Archive::parse(&mut Cursor::new(NESTED))?;

        assert_eq!(archive.folder_count(), 2);
        assert_eq!(archive.file_count(), 2);

        let paths: Vec<String> = archive.walk().into_iter().map(|(path, _)| path).collect();
        assert_eq!(paths, vec!["dir", "dir/b", "a"]);

        let Entry::Folder(dir) = &archive.root.entries[0] else {
            panic!("expected a folder entry");
        };
        let Entry::File(inner) = &dir.entries[0] else {
            panic!("expected a file entry");
        };
        assert_eq!(inner.content, b"XYZ");

        Ok(())
    }

    #[test]
    fn read_empty_archive() -> Result<()> {
        #[rustfmt::skip]
        let input = [
            0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x01, 0x00, 0x00, 0x00,
            0x01, 0x00, 0x00, 0x00,
            0x18, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
        ];

        let archive = Archive::parse(&mut Cursor::new(input))?;
        assert_eq!(archive.folder_count(), 1);
        assert_eq!(archive.file_count(), 0);
        assert!(archive.root.entries.is_empty());

        Ok(())
    }

    #[test]
    fn reject_unknown_entry_type() {
        let mut input = SINGLE_FILE.to_vec();
        // Type tag of the only record
        input[20 + 4] = 0x40;

        let result = Archive::parse(&mut Cursor::new(input));
        assert!(matches!(result, Err(Error::UnknownEntryType(0x0000_0040))));
    }

    #[test]
    fn reject_oversized_file() {
        let mut input = SINGLE_FILE.to_vec();
        // Size field of the only record: 0x80000000
        input[20 + 4 + 12..20 + 4 + 16].copy_from_slice(&[0x00, 0x00, 0x00, 0x80]);

        let result = Archive::parse(&mut Cursor::new(input));
        assert!(matches!(result, Err(Error::OversizedFile(0x8000_0000))));
    }

    #[test]
    fn reject_truncated_header() {
        let result = Archive::parse(&mut Cursor::new(&SINGLE_FILE[..10]));
        assert!(matches!(result, Err(Error::TruncatedInput)));
    }

    #[test]
    fn reject_truncated_content() {
        let result = Archive::parse(&mut Cursor::new(&SINGLE_FILE[..SINGLE_FILE.len() - 1]));
        assert!(matches!(result, Err(Error::TruncatedInput)));
    }

    #[test]
    fn reject_truncated_record_array() {
        // Claims one record but ends right after the child count.
        let result = Archive::parse(&mut Cursor::new(&SINGLE_FILE[..24]));
        assert!(matches!(result, Err(Error::TruncatedInput)));
    }
}

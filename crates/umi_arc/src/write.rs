//! Writing ARC archives
//!
//! The writer is a two-pass layout engine. The first pass rewrites every
//! folder's child list into the canonical on-disk order and accounts the
//! exact size of the header region and name table; the second assigns every
//! block, name and content run its absolute offset and emits the sections
//! sequentially. Output is deterministic for a given tree, and matches the
//! layout conventions of the game's own writer byte for byte.

use binrw::BinWrite;
use byteorder::{LittleEndian, WriteBytesExt};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::io::{Seek, Write};
use tracing::instrument;

use crate::{
    entry::{join_path, Archive, Entry, FileEntry, FolderEntry},
    error::{Error, Result},
    types::{ArcHeader, RawEntry, ENTRY_FILE, ENTRY_FOLDER, HEADER_LEN, RECORD_LEN},
};

impl Archive {
    /// Serialize the archive in the game's canonical layout.
    ///
    /// As a side effect every folder's in-memory child list is rewritten into
    /// canonical order (folders before files, names with `_` ranked last), so
    /// a second call produces byte-identical output.
    ///
    /// Fails with [`Error::InconsistentNameTable`] if the encoded name table
    /// does not match the accounted size; this catches names whose encoding
    /// is wider than their character count before they can corrupt offsets.
    #[instrument(skip_all, err)]
    pub fn serialize<W: Write + Seek>(&mut self, writer: &mut W) -> Result<()> {
        canonicalize(&mut self.root);

        // Global folder order: root first, ancestors before descendants,
        // unrelated paths reverse-lexicographic.
        let mut folders: Vec<(String, &FolderEntry)> = vec![(String::new(), &self.root)];
        {
            let mut rest = Vec::new();
            collect_folders(&self.root, "", &mut rest);
            rest.sort_by(|a, b| compare_folder_paths(&a.0, &b.0));
            folders.extend(rest);
        }

        // Global file order: plain ascending by qualified path. The opposite
        // polarity from the folder list is a format constant.
        let mut files: Vec<(String, &FileEntry)> = Vec::new();
        collect_files(&self.root, "", &mut files);
        files.sort_by(|a, b| a.0.cmp(&b.0));

        let folder_count = folders.len() as u32;
        let entry_count = folder_count + files.len() as u32;
        let header_size = (entry_count - 1) * RECORD_LEN + folder_count * 4;

        let name_table_size: u32 = folders
            .iter()
            .skip(1)
            .map(|(_, folder)| folder.name.chars().count() as u32 + 1)
            .chain(
                files
                    .iter()
                    .map(|(_, file)| file.name.chars().count() as u32 + 1),
            )
            .sum();
        let content_start = HEADER_LEN + header_size + name_table_size;

        // Folder blocks are packed back to back starting right after the
        // header, in folder-list order.
        let mut folder_offsets: HashMap<&str, u32> = HashMap::new();
        let mut block_cursor = HEADER_LEN;
        for (path, folder) in &folders {
            folder_offsets.insert(path.as_str(), block_cursor);
            block_cursor += 4 + RECORD_LEN * folder.entries.len() as u32;
        }

        // Names follow the same folders-then-files order; file content runs
        // are assigned in file-list order.
        let mut name_offsets: HashMap<&str, u32> = HashMap::new();
        let mut name_table: Vec<u8> = Vec::new();
        let mut name_cursor = HEADER_LEN + header_size;
        for (path, folder) in folders.iter().skip(1) {
            name_offsets.insert(path.as_str(), name_cursor);
            name_cursor += folder.name.chars().count() as u32 + 1;
            name_table.extend_from_slice(folder.name.as_bytes());
            name_table.push(0);
        }

        let mut content_locations: HashMap<&str, u32> = HashMap::new();
        let mut content: Vec<u8> = Vec::new();
        for (path, file) in &files {
            name_offsets.insert(path.as_str(), name_cursor);
            name_cursor += file.name.chars().count() as u32 + 1;
            name_table.extend_from_slice(file.name.as_bytes());
            name_table.push(0);

            content_locations.insert(path.as_str(), content_start + content.len() as u32);
            content.extend_from_slice(&file.content);
        }

        if name_table.len() as u64 != name_table_size as u64 {
            return Err(Error::InconsistentNameTable {
                expected: name_table_size as u64,
                actual: name_table.len() as u64,
            });
        }

        let header = ArcHeader {
            magic1: self.magic1,
            magic2: self.magic2,
            folder_count,
            entry_count,
            content_start,
        };
        header.write(writer)?;

        for (path, folder) in &folders {
            writer.write_u32::<LittleEndian>(folder.entries.len() as u32)?;
            for child in &folder.entries {
                let child_path = join_path(path, child.name());
                let name_offset = *name_offsets
                    .get(child_path.as_str())
                    .expect("every non-root entry is assigned a name offset");
                let record = match child {
                    Entry::Folder(_) => RawEntry {
                        entry_type: ENTRY_FOLDER,
                        name_offset,
                        content_location: *folder_offsets
                            .get(child_path.as_str())
                            .expect("every folder is assigned a block offset"),
                        size: 0,
                    },
                    Entry::File(file) => RawEntry {
                        entry_type: ENTRY_FILE,
                        name_offset,
                        content_location: *content_locations
                            .get(child_path.as_str())
                            .expect("every file is assigned a content location"),
                        size: file.content.len() as u32,
                    },
                };
                record.write(writer)?;
            }
        }

        writer.write_all(&name_table)?;
        writer.write_all(&content)?;

        Ok(())
    }
}

/// Rewrite `folder`'s child list (recursively) into canonical order:
/// folders before files, then by name with the underscore ranked last.
fn canonicalize(folder: &mut FolderEntry) {
    folder.entries.sort_by(|a, b| {
        b.type_tag()
            .cmp(&a.type_tag())
            .then_with(|| compare_names(a.name(), b.name()))
    });
    for entry in &mut folder.entries {
        if let Entry::Folder(child) = entry {
            canonicalize(child);
        }
    }
}

/// Sibling name order: byte-wise, except that `_` ranks after every other
/// character, and a strict prefix sorts first. Discovered behavior of the
/// game's writer; not subject to simplification.
fn compare_names(a: &str, b: &str) -> Ordering {
    let mut left = a.bytes();
    let mut right = b.bytes();
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                if x == y {
                    continue;
                }
                return match (x == b'_', y == b'_') {
                    (true, false) => Ordering::Greater,
                    (false, true) => Ordering::Less,
                    _ => x.cmp(&y),
                };
            }
        }
    }
}

/// Folder-list order: component-wise over `/`-separated paths. An ancestor
/// sorts before its descendants; the first differing component decides,
/// compared reverse-lexicographically.
fn compare_folder_paths(a: &str, b: &str) -> Ordering {
    let mut left = a.split('/');
    let mut right = b.split('/');
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                if x == y {
                    continue;
                }
                return y.cmp(x);
            }
        }
    }
}

fn collect_folders<'a>(
    folder: &'a FolderEntry,
    prefix: &str,
    out: &mut Vec<(String, &'a FolderEntry)>,
) {
    for entry in &folder.entries {
        if let Entry::Folder(child) = entry {
            let path = join_path(prefix, &child.name);
            collect_folders(child, &path, out);
            out.push((path, child));
        }
    }
}

fn collect_files<'a>(
    folder: &'a FolderEntry,
    prefix: &str,
    out: &mut Vec<(String, &'a FileEntry)>,
) {
    for entry in &folder.entries {
        match entry {
            Entry::File(file) => out.push((join_path(prefix, &file.name), file)),
            Entry::Folder(child) => {
                collect_files(child, &join_path(prefix, &child.name), out);
            }
        }
    }
}

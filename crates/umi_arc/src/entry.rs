//! In-memory tree model for ARC archives.
//!
//! An archive is one nameless root [`FolderEntry`] owning an ordered list of
//! children, each either a [`FileEntry`] holding raw bytes or another folder.
//! Ownership is strictly top-down; no entry refers back to its parent.

use crate::types::{ENTRY_FILE, ENTRY_FOLDER};

/// A node in the archive tree
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// A leaf holding raw bytes
    File(FileEntry),
    /// An interior node holding an ordered child list
    Folder(FolderEntry),
}

impl Entry {
    /// Name of the entry, without any path qualification
    pub fn name(&self) -> &str {
        match self {
            Entry::File(file) => &file.name,
            Entry::Folder(folder) => &folder.name,
        }
    }

    /// The on-disk type tag for this entry kind
    pub fn type_tag(&self) -> u32 {
        match self {
            Entry::File(_) => ENTRY_FILE,
            Entry::Folder(_) => ENTRY_FOLDER,
        }
    }
}

/// A named file entry and its content bytes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileEntry {
    /// Entry name (flat, no separators)
    pub name: String,
    /// Raw content bytes, stored uncompressed
    pub content: Vec<u8>,
}

/// A named folder entry and its ordered children
///
/// Child order is meaningful: it is the order records are laid out in the
/// folder's on-disk block. Serializing an archive rewrites this order into
/// the canonical one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FolderEntry {
    /// Entry name; empty only for the tree root
    pub name: String,
    /// Ordered children
    pub entries: Vec<Entry>,
}

impl FolderEntry {
    /// Create an empty folder
    pub fn new(name: impl Into<String>) -> FolderEntry {
        FolderEntry {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Number of folders in this subtree, this folder included
    ///
    /// Recomputed on every call so it always reflects the live tree.
    pub fn folder_count(&self) -> usize {
        1 + self
            .entries
            .iter()
            .map(|entry| match entry {
                Entry::Folder(folder) => folder.folder_count(),
                Entry::File(_) => 0,
            })
            .sum::<usize>()
    }

    /// Number of files in this subtree
    pub fn file_count(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| match entry {
                Entry::Folder(folder) => folder.file_count(),
                Entry::File(_) => 1,
            })
            .sum()
    }

    /// Flatten the subtree into `(qualified path, entry)` pairs
    ///
    /// Pre-order: a folder appears before its children. Paths are qualified
    /// relative to this folder with `/` as the separator; this folder itself
    /// is not included.
    pub fn walk(&self) -> Vec<(String, &Entry)> {
        let mut out = Vec::new();
        self.walk_into("", &mut out);
        out
    }

    fn walk_into<'a>(&'a self, prefix: &str, out: &mut Vec<(String, &'a Entry)>) {
        for entry in &self.entries {
            let path = join_path(prefix, entry.name());
            out.push((path.clone(), entry));
            if let Entry::Folder(folder) = entry {
                folder.walk_into(&path, out);
            }
        }
    }
}

/// A fully resident ARC archive
///
/// Holds the two opaque header constants and the root folder. Constructed by
/// [`Archive::parse`] or [`Archive::from_directory`], serialized back out by
/// [`Archive::serialize`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Archive {
    /// First header constant, echoed verbatim from the source archive
    pub magic1: u32,
    /// Second header constant, echoed verbatim from the source archive
    pub magic2: u32,
    /// The nameless root folder
    pub root: FolderEntry,
}

impl Archive {
    /// Header constant used for archives built from scratch
    pub const DEFAULT_MAGIC1: u32 = 0;
    /// Header constant used for archives built from scratch
    pub const DEFAULT_MAGIC2: u32 = 0;

    /// Create an empty archive with the default header constants
    pub fn new() -> Archive {
        Archive {
            magic1: Archive::DEFAULT_MAGIC1,
            magic2: Archive::DEFAULT_MAGIC2,
            root: FolderEntry::new(""),
        }
    }

    /// Number of folders in the archive, the root included
    pub fn folder_count(&self) -> usize {
        self.root.folder_count()
    }

    /// Number of files in the archive
    pub fn file_count(&self) -> usize {
        self.root.file_count()
    }

    /// Number of entries of both kinds, the root included
    pub fn entry_count(&self) -> usize {
        self.folder_count() + self.file_count()
    }

    /// Flatten the whole tree into `(qualified path, entry)` pairs
    pub fn walk(&self) -> Vec<(String, &Entry)> {
        self.root.walk()
    }
}

pub(crate) fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_owned()
    } else {
        format!("{prefix}/{name}")
    }
}

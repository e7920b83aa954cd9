//! Building archives from a directory tree on disk.

use std::fs;
use std::path::Path;
use tracing::instrument;

use crate::{
    entry::{Archive, Entry, FileEntry, FolderEntry},
    error::Result,
};

impl Archive {
    /// Build an archive by recursively walking `path`.
    ///
    /// Each regular file becomes a [`FileEntry`] holding the file's bytes and
    /// each subdirectory a recursively populated [`FolderEntry`]. Entries keep
    /// the order the filesystem enumerates them in; the canonical on-disk
    /// order is applied by [`Archive::serialize`], not here. Fresh archives
    /// get the default header constants.
    #[instrument(skip_all, fields(path = %path.as_ref().display()), err)]
    pub fn from_directory<P: AsRef<Path>>(path: P) -> Result<Archive> {
        let mut archive = Archive::new();
        read_dir_into(path.as_ref(), &mut archive.root)?;
        Ok(archive)
    }
}

fn read_dir_into(dir: &Path, folder: &mut FolderEntry) -> Result<()> {
    for dir_entry in fs::read_dir(dir)? {
        let dir_entry = dir_entry?;
        let name = dir_entry.file_name().to_string_lossy().into_owned();

        if dir_entry.file_type()?.is_dir() {
            let mut child = FolderEntry::new(name);
            read_dir_into(&dir_entry.path(), &mut child)?;
            folder.entries.push(Entry::Folder(child));
        } else {
            let content = fs::read(dir_entry.path())?;
            folder.entries.push(Entry::File(FileEntry { name, content }));
        }
    }
    Ok(())
}

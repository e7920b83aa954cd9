//! Dumping archive contents back to the filesystem.

use std::fs;
use std::path::Path;
use tracing::instrument;

use crate::{
    entry::{Entry, FolderEntry},
    error::Result,
};

/// Write every entry under `folder` below `target`.
///
/// Folders become directories (created as needed, existing ones are reused)
/// and files are written with their exact content bytes. Existing files are
/// overwritten.
#[instrument(skip(folder), fields(target = %target.as_ref().display()), err)]
pub fn dump_to_dir<P: AsRef<Path>>(folder: &FolderEntry, target: P) -> Result<()> {
    let target = target.as_ref();
    fs::create_dir_all(target)?;

    for entry in &folder.entries {
        let path = target.join(entry.name());
        match entry {
            Entry::File(file) => fs::write(&path, &file.content)?,
            Entry::Folder(child) => dump_to_dir(child, &path)?,
        }
    }
    Ok(())
}

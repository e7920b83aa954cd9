use clap::Args;
use miette::{Context, IntoDiagnostic, Result};
use std::{
    fs,
    fs::File,
    path::{Path, PathBuf},
};
use tracing::info;
use umi_arc::{Archive, Entry, FolderEntry};
use umi_bin::BinFile;

#[derive(Args)]
pub struct ExtractArgs {
    /// An input ARC file
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// A target directory
    #[arg(short, long, value_name = "DIR")]
    directory: PathBuf,

    /// Dump entries holding a nested BIN blob list as a directory of blobs
    #[arg(long, default_value_t = false)]
    explode_bin: bool,
}

impl ExtractArgs {
    pub fn handle(&self) -> Result<()> {
        let mut f = File::open(&self.file)
            .into_diagnostic()
            .context(format!("path: {}", &self.file.display()))?;
        let archive = Archive::parse(&mut f)?;

        info!(
            "extracting {} files to {}",
            archive.file_count(),
            self.directory.display()
        );

        if self.explode_bin {
            dump_exploded(&archive.root, &self.directory)
        } else {
            umi_arc::dump_to_dir(&archive.root, &self.directory)?;
            Ok(())
        }
    }
}

/// Like [`umi_arc::dump_to_dir`], but entries named `*.bin` that decode as a
/// nested blob list become a directory of numbered blobs.
fn dump_exploded(folder: &FolderEntry, target: &Path) -> Result<()> {
    fs::create_dir_all(target)
        .into_diagnostic()
        .context(format!("creating {}", target.display()))?;

    for entry in &folder.entries {
        let path = target.join(entry.name());
        match entry {
            Entry::Folder(child) => dump_exploded(child, &path)?,
            Entry::File(file) => {
                if entry.name().to_ascii_lowercase().ends_with(".bin") {
                    if let Some(bin) = BinFile::try_parse_bytes(&file.content) {
                        info!("exploding {}", path.display());
                        fs::create_dir_all(&path)
                            .into_diagnostic()
                            .context(format!("creating {}", path.display()))?;
                        for (index, blob) in bin.files().enumerate() {
                            fs::write(path.join(format!("{index}.unknown")), blob)
                                .into_diagnostic()?;
                        }
                        continue;
                    }
                }
                fs::write(&path, &file.content)
                    .into_diagnostic()
                    .context(format!("writing {}", path.display()))?;
            }
        }
    }

    Ok(())
}

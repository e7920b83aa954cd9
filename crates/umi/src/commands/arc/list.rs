use clap::Args;
use miette::{Context, IntoDiagnostic, Result};
use owo_colors::OwoColorize;
use std::{fs::File, path::PathBuf};
use umi_arc::{Archive, Entry};

#[derive(Args)]
pub struct ListArgs {
    /// An input ARC file
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,
}

impl ListArgs {
    pub fn handle(&self) -> Result<()> {
        let mut f = File::open(&self.file)
            .into_diagnostic()
            .context(format!("path: {}", &self.file.display()))?;
        let archive = Archive::parse(&mut f)?;

        println!(
            "{}: {} folders, {} files",
            self.file.display(),
            archive.folder_count(),
            archive.file_count()
        );

        for (path, entry) in archive.walk() {
            match entry {
                Entry::Folder(folder) => {
                    println!("{}  {} entries", path.blue(), folder.entries.len());
                }
                Entry::File(file) => {
                    println!("{}  {} bytes", path, file.content.len());
                }
            }
        }

        Ok(())
    }
}

use clap::Args;
use miette::{miette, Context, IntoDiagnostic, Result};
use std::{fs, path::PathBuf};
use tracing::info;
use umi_bin::BinFile;

#[derive(Args)]
pub struct UnpackArgs {
    /// An input BIN file
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// A target directory
    #[arg(short, long, value_name = "DIR")]
    directory: PathBuf,
}

impl UnpackArgs {
    pub fn handle(&self) -> Result<()> {
        let content = fs::read(&self.file)
            .into_diagnostic()
            .context(format!("path: {}", &self.file.display()))?;

        let bin = BinFile::try_parse_bytes(&content)
            .ok_or_else(|| miette!("{} is not a recognized blob list", self.file.display()))?;

        fs::create_dir_all(&self.directory)
            .into_diagnostic()
            .context(format!("creating {}", &self.directory.display()))?;

        info!("unpacking {} blobs", bin.len());
        for (index, blob) in bin.files().enumerate() {
            let path = self.directory.join(format!("{index}.unknown"));
            info!("writing {}", path.display());
            fs::write(&path, blob).into_diagnostic()?;
        }

        Ok(())
    }
}

pub mod unpack;

#[derive(clap::Subcommand)]
pub enum BinCommands {
    /// Unpack a nested BIN blob list into a directory
    Unpack(unpack::UnpackArgs),
}

impl BinCommands {
    pub fn handle(&self) -> miette::Result<()> {
        match self {
            BinCommands::Unpack(unpack) => unpack.handle(),
        }
    }
}

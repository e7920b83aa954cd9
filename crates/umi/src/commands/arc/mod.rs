pub mod extract;
pub mod list;
pub mod pack;

#[derive(clap::Subcommand)]
pub enum ArcCommands {
    /// List the contents of an ARC file
    List(list::ListArgs),
    /// Extract an ARC file into a directory
    Extract(extract::ExtractArgs),
    /// Pack a directory into an ARC file
    Pack(pack::PackArgs),
}

impl ArcCommands {
    pub fn handle(&self) -> miette::Result<()> {
        match self {
            ArcCommands::List(list) => list.handle(),
            ArcCommands::Extract(extract) => extract.handle(),
            ArcCommands::Pack(pack) => pack.handle(),
        }
    }
}

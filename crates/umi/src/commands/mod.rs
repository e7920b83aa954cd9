pub mod arc;
pub mod bin;

#[derive(clap::Subcommand)]
pub enum Commands {
    /// Handle ARC archive files
    Arc {
        #[command(subcommand)]
        command: arc::ArcCommands,
    },
    /// Handle nested BIN blob lists
    Bin {
        #[command(subcommand)]
        command: bin::BinCommands,
    },
}

impl Commands {
    pub fn handle(&self) -> miette::Result<()> {
        match self {
            Commands::Arc { command } => command.handle(),
            Commands::Bin { command } => command.handle(),
        }
    }
}

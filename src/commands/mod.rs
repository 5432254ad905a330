pub mod init;

use crate::libs::app::TaskManager;
use crate::libs::config::Config;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Some(Commands::Init(args)) => init::cmd(args),
            None => run(),
        }
    }
}

/// Starts the interactive menu loop against the configured store.
fn run() -> Result<()> {
    let config = Config::read()?;
    let mut app = TaskManager::new(&config)?;
    app.setup()?;
    app.run()
}

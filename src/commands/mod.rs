use crate::commands::disc::{InfoCommand, SectorCommand, SubQCommand, TocCommand, WatchCommand};
use clap::{Parser, Subcommand};

pub mod disc;

/// Inspect a directory the way an emulator sees it through the folder CDVD backend.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Info(InfoCommand),
    Toc(TocCommand),
    Sector(SectorCommand),
    Subq(SubQCommand),
    Watch(WatchCommand),
}

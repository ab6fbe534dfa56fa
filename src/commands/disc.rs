use clap::{Parser, ValueEnum};
use folder_cdvd::cd::sector::ReadMode;
use folder_cdvd::disc::media::MediaType;
use std::path::PathBuf;

/// Media types a folder can be presented as
#[derive(ValueEnum, Debug, Clone, Copy, Eq, PartialEq)]
pub enum MediaTypeArg {
    Ps2Dvd,
    DvdVideo,
    Ps2Cd,
    Ps2CdDa,
    Ps1Cd,
    Ps1CdDa,
    CdDa,
}

impl From<MediaTypeArg> for MediaType {
    fn from(value: MediaTypeArg) -> Self {
        match value {
            MediaTypeArg::Ps2Dvd => MediaType::Ps2Dvd,
            MediaTypeArg::DvdVideo => MediaType::DvdVideo,
            MediaTypeArg::Ps2Cd => MediaType::Ps2Cd,
            MediaTypeArg::Ps2CdDa => MediaType::Ps2CdDa,
            MediaTypeArg::Ps1Cd => MediaType::Ps1Cd,
            MediaTypeArg::Ps1CdDa => MediaType::Ps1CdDa,
            MediaTypeArg::CdDa => MediaType::CdDa,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, Eq, PartialEq)]
pub enum ReadModeArg {
    #[value(name = "2352")]
    Raw2352,
    #[value(name = "2340")]
    Mode2340,
    #[value(name = "2328")]
    Mode2328,
    #[value(name = "2048")]
    Mode2048,
}

impl From<ReadModeArg> for ReadMode {
    fn from(value: ReadModeArg) -> Self {
        match value {
            ReadModeArg::Raw2352 => ReadMode::Raw2352,
            ReadModeArg::Mode2340 => ReadMode::Mode2340,
            ReadModeArg::Mode2328 => ReadMode::Mode2328,
            ReadModeArg::Mode2048 => ReadMode::Mode2048,
        }
    }
}

/// Opens a directory and prints what the disc reports about itself.
#[derive(Parser, Debug, Clone, Eq, PartialEq)]
pub struct InfoCommand {
    /// Directory to present as a disc, without one an empty drive is reported
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

/// Dumps the table of contents the disc reports.
#[derive(Parser, Debug, Clone, Eq, PartialEq)]
pub struct TocCommand {
    /// Directory to present as a disc
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Present the directory as this media type instead of a PS2 DVD
    #[arg(long, short = 'm', value_enum)]
    pub media_type: Option<MediaTypeArg>,
}

/// Dumps a single sector in the requested transfer mode.
#[derive(Parser, Debug, Clone, Eq, PartialEq)]
pub struct SectorCommand {
    /// Directory to present as a disc
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Logical sector number
    #[arg(value_name = "LSN")]
    pub lsn: u32,

    /// Transfer mode in bytes per sector
    #[arg(long, short = 'M', value_enum, default_value = "2048")]
    pub mode: ReadModeArg,
}

/// Prints the Q sub-channel record for a sector.
#[derive(Parser, Debug, Clone, Eq, PartialEq)]
pub struct SubQCommand {
    /// Directory to present as a disc
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Logical sector number
    #[arg(value_name = "LSN")]
    pub lsn: u32,
}

/// Keeps the disc open and logs changes made to the directory.
#[derive(Parser, Debug, Clone, Eq, PartialEq)]
pub struct WatchCommand {
    /// Directory to present as a disc
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// How often to rescan the directory
    #[arg(long, short = 'i', value_name = "MILLISECONDS", default_value_t = 1000)]
    pub interval_ms: u64,
}

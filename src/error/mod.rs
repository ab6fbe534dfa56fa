use crate::disc::media::MediaType;
use std::path::PathBuf;
use std::result;
use thiserror::Error;

/// Status the host emulator expects from a failed device call.
pub const STATUS_ERROR: i32 = -1;

/// Status the host emulator expects from a successful device call.
pub const STATUS_OK: i32 = 0;

#[derive(Error, Debug)]
pub enum CdvdError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    BinRWError(#[from] binrw::Error),

    #[error("No path specified")]
    InvalidArgument,

    #[error("Directory '{0}' does not exist")]
    NotFound(PathBuf),

    #[error("Failed to watch directory path '{0}'")]
    WatchFailure(PathBuf),

    #[error("Directory '{0}' doesn't contain any files")]
    EmptyDirectory(PathBuf),

    #[error("Media type {0:?} has no table of contents")]
    UnsupportedMediaType(MediaType),

    #[error("Unknown sector read mode: {0}")]
    InvalidReadMode(u8),

    #[error("Buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("No disc is open")]
    NotOpen,

    #[error("No media in drive")]
    NoMedia,
}

impl CdvdError {
    /// Every failure collapses to the same negative status on the host side.
    pub fn status(&self) -> i32 {
        STATUS_ERROR
    }
}

pub type CdvdResult<T> = result::Result<T, CdvdError>;

/// Converts a device call result into the host's integer status.
pub fn status_of<T>(result: &CdvdResult<T>) -> i32 {
    match result {
        Ok(_) => STATUS_OK,
        Err(err) => err.status(),
    }
}

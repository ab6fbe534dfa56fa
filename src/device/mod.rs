use crate::cd::sector::ReadMode;
use crate::cd::subq::SubChannelQ;
use crate::disc::media::{DualLayerInfo, MediaType, TrayStatus};
use crate::disc::track::{TrackDescriptor, TrackRange};
use crate::error::CdvdResult;
use std::path::Path;

pub mod no_disc;

/// Called by a backend when the media in the drive changes.
pub type NewDiskCallback = Box<dyn FnMut() + Send>;

/// The entry points the host's disc subsystem drives a backend through.
///
/// Only one disc is open per backend; `open` replaces whatever was open before.
pub trait CdvdDevice {
    fn open(&mut self, path: &Path) -> CdvdResult<()>;

    /// Never fails and may be called any number of times.
    fn close(&mut self);

    /// Queues an asynchronous read, picked up by the next `get_buffer`.
    fn read_track(&mut self, lsn: u32, mode: ReadMode) -> CdvdResult<()>;

    /// Completes the queued read into `buffer`.
    fn get_buffer(&mut self, buffer: &mut [u8]) -> CdvdResult<()>;

    fn read_sector(&mut self, buffer: &mut [u8], lsn: u32, mode: ReadMode) -> CdvdResult<()>;

    fn read_subq(&mut self, lsn: u32) -> CdvdResult<SubChannelQ>;

    fn get_tn(&mut self) -> CdvdResult<TrackRange>;

    fn get_td(&mut self, track: u8) -> CdvdResult<TrackDescriptor>;

    /// Writes the table of contents for the current media into `buffer`.
    fn get_toc(&mut self, buffer: &mut [u8]) -> CdvdResult<()>;

    fn get_disk_type(&self) -> MediaType;

    fn get_dual_info(&mut self) -> CdvdResult<DualLayerInfo>;

    fn get_tray_status(&self) -> TrayStatus;

    fn tray_open(&mut self) -> CdvdResult<()>;

    fn tray_close(&mut self) -> CdvdResult<()>;

    fn new_disk_callback(&mut self, callback: NewDiskCallback);
}

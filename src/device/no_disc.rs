use crate::cd::sector::ReadMode;
use crate::cd::subq::SubChannelQ;
use crate::device::{CdvdDevice, NewDiskCallback};
use crate::disc::media::{DualLayerInfo, MediaType, TrayStatus};
use crate::disc::track::{TrackDescriptor, TrackRange};
use crate::error::{CdvdError, CdvdResult};
use log::debug;
use std::path::Path;

/// An empty drive. Opening succeeds, everything that needs media fails.
#[derive(Debug, Default)]
pub struct NoDisc;

impl CdvdDevice for NoDisc {
    fn open(&mut self, path: &Path) -> CdvdResult<()> {
        debug!("No disc backend ignoring path {path:?}");
        Ok(())
    }

    fn close(&mut self) {}

    fn read_track(&mut self, _lsn: u32, _mode: ReadMode) -> CdvdResult<()> {
        Err(CdvdError::NoMedia)
    }

    fn get_buffer(&mut self, _buffer: &mut [u8]) -> CdvdResult<()> {
        Err(CdvdError::NoMedia)
    }

    fn read_sector(&mut self, _buffer: &mut [u8], _lsn: u32, _mode: ReadMode) -> CdvdResult<()> {
        Err(CdvdError::NoMedia)
    }

    fn read_subq(&mut self, _lsn: u32) -> CdvdResult<SubChannelQ> {
        Err(CdvdError::NoMedia)
    }

    fn get_tn(&mut self) -> CdvdResult<TrackRange> {
        Err(CdvdError::NoMedia)
    }

    fn get_td(&mut self, _track: u8) -> CdvdResult<TrackDescriptor> {
        Err(CdvdError::NoMedia)
    }

    fn get_toc(&mut self, _buffer: &mut [u8]) -> CdvdResult<()> {
        Err(CdvdError::UnsupportedMediaType(MediaType::NoDisc))
    }

    fn get_disk_type(&self) -> MediaType {
        MediaType::NoDisc
    }

    fn get_dual_info(&mut self) -> CdvdResult<DualLayerInfo> {
        Ok(DualLayerInfo::default())
    }

    fn get_tray_status(&self) -> TrayStatus {
        TrayStatus::Open
    }

    fn tray_open(&mut self) -> CdvdResult<()> {
        Ok(())
    }

    fn tray_close(&mut self) -> CdvdResult<()> {
        Ok(())
    }

    fn new_disk_callback(&mut self, _callback: NewDiskCallback) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_disc_reports_empty_drive() {
        let mut device = NoDisc;
        assert!(device.open(Path::new("/anywhere")).is_ok());
        assert_eq!(device.get_disk_type(), MediaType::NoDisc);
        assert_eq!(device.get_tray_status(), TrayStatus::Open);
        assert_eq!(device.get_dual_info().unwrap(), DualLayerInfo::default());
    }

    #[test]
    fn test_no_disc_reads_fail() {
        let mut device: Box<dyn CdvdDevice> = Box::new(NoDisc);
        let mut buffer = [0u8; 2352];

        assert!(matches!(
            device.read_sector(&mut buffer, 0, ReadMode::Mode2048),
            Err(CdvdError::NoMedia)
        ));
        assert!(matches!(
            device.get_toc(&mut buffer),
            Err(CdvdError::UnsupportedMediaType(MediaType::NoDisc))
        ));
        assert!(matches!(device.read_subq(0), Err(CdvdError::NoMedia)));
    }
}

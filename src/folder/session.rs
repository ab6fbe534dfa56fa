use crate::cd::RAW_FRAME_SIZE;
use crate::cd::sector::{ReadMode, copy_payload};
use crate::cd::source::FrameSource;
use crate::disc::media::{DualLayerInfo, MediaCategory, MediaType};
use crate::disc::toc::{TrackTable, cd_toc, dvd_structure};
use crate::disc::track::{TrackDescriptor, TrackRange, TrackType};
use crate::error::{CdvdError, CdvdResult};
use crate::folder::scan::DirectoryImage;
use crate::iso9660::layer::LayerSearch;
use crate::iso9660::pvd::PrimaryVolumeDescriptor;
use log::debug;

/// The track listing of a folder-backed disc: one data track at sector 0.
/// The lead-out is not known until files are mapped onto sectors.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleDataTrack;

impl TrackTable for SingleDataTrack {
    fn track_range(&self) -> CdvdResult<TrackRange> {
        Ok(TrackRange { first: 1, last: 1 })
    }

    fn track_descriptor(&self, track: u8) -> CdvdResult<TrackDescriptor> {
        if track == 0 {
            return Ok(TrackDescriptor::default());
        }

        Ok(TrackDescriptor {
            track_type: TrackType::Mode1,
            lsn: 0,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingRead {
    pub lsn: u32,
    pub mode: ReadMode,
}

/// Everything that lives between one `open` and the next `close`.
pub struct Session {
    image: DirectoryImage,
    pvd: PrimaryVolumeDescriptor,
    media_type: MediaType,
    layer: LayerSearch,
    pending_read: Option<PendingRead>,
    source: Box<dyn FrameSource>,
}

impl Session {
    pub fn new(
        image: DirectoryImage,
        pvd: PrimaryVolumeDescriptor,
        source: Box<dyn FrameSource>,
    ) -> Self {
        Self {
            image,
            pvd,
            media_type: MediaType::Ps2Dvd,
            layer: LayerSearch::Unsearched,
            pending_read: None,
            source,
        }
    }

    pub fn image(&self) -> &DirectoryImage {
        &self.image
    }

    pub fn pvd(&self) -> &PrimaryVolumeDescriptor {
        &self.pvd
    }

    pub fn media_type(&self) -> MediaType {
        self.media_type
    }

    pub fn set_media_type(&mut self, media_type: MediaType) {
        debug!("Media type {:?} -> {media_type:?}", self.media_type);
        self.media_type = media_type;
    }

    pub fn layer_search(&self) -> LayerSearch {
        self.layer
    }

    pub fn pending_read(&self) -> Option<PendingRead> {
        self.pending_read
    }

    pub fn layer1_start(&mut self) -> Option<u32> {
        self.layer.resolve(self.source.as_mut())
    }

    pub fn dual_info(&mut self) -> DualLayerInfo {
        DualLayerInfo::from_layer1_start(self.layer1_start())
    }

    pub fn queue_read(&mut self, lsn: u32, mode: ReadMode) {
        self.pending_read = Some(PendingRead { lsn, mode });
    }

    /// Delivers the queued read. Without one the buffer is left untouched.
    pub fn finish_read(&mut self, buffer: &mut [u8]) -> CdvdResult<()> {
        match self.pending_read {
            Some(PendingRead { lsn, mode }) => self.read_sector(buffer, lsn, mode),
            None => Ok(()),
        }
    }

    pub fn read_sector(&mut self, buffer: &mut [u8], lsn: u32, mode: ReadMode) -> CdvdResult<()> {
        if buffer.len() < mode.payload_size() {
            return Err(CdvdError::BufferTooSmall {
                needed: mode.payload_size(),
                actual: buffer.len(),
            });
        }

        let mut frame = [0u8; RAW_FRAME_SIZE];
        self.source.read_frame(lsn, &mut frame)?;
        copy_payload(&frame, mode, buffer)?;
        Ok(())
    }

    /// Builds the table of contents for the current media type and copies it
    /// into `buffer`. Nothing is written on failure.
    pub fn write_toc(&mut self, buffer: &mut [u8]) -> CdvdResult<()> {
        let toc = match self.media_type.category() {
            Some(MediaCategory::Dvd) => dvd_structure(self.layer1_start()),
            Some(MediaCategory::Cd) => cd_toc(&SingleDataTrack),
            None => return Err(CdvdError::UnsupportedMediaType(self.media_type)),
        };

        if buffer.len() < toc.len() {
            return Err(CdvdError::BufferTooSmall {
                needed: toc.len(),
                actual: buffer.len(),
            });
        }

        buffer[..toc.len()].copy_from_slice(&toc);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iso9660::PVD_SECTOR;
    use crate::iso9660::endian::read_u32_be;
    use crate::iso9660::layer::tests::FakeSource;
    use std::path::PathBuf;

    fn session_with(source: FakeSource) -> Session {
        let image = DirectoryImage {
            root: PathBuf::from("/disc"),
            files: Vec::new(),
        };
        Session::new(image, PrimaryVolumeDescriptor::synthesize(), Box::new(source))
    }

    #[test]
    fn test_new_session_defaults() {
        let session = session_with(FakeSource::new(100));
        assert_eq!(session.media_type(), MediaType::Ps2Dvd);
        assert_eq!(session.layer_search(), LayerSearch::Unsearched);
        assert_eq!(session.pending_read(), None);
    }

    #[test]
    fn test_dual_info_scans_once() {
        let source = FakeSource::dual_layer(10_000, 6000);
        let reads = source.reads.clone();
        let mut session = session_with(source);

        let info = session.dual_info();
        assert_eq!(info.dual_type, 1);
        assert_eq!(info.layer1_start, 6000);
        assert_eq!(reads.get(), 2);

        assert_eq!(session.dual_info(), info);
        assert_eq!(reads.get(), 2);
        assert_eq!(session.layer_search(), LayerSearch::Searched(Some(6000)));
    }

    #[test]
    fn test_single_layer_dual_info() {
        let source = FakeSource::new(4096).with_descriptor(PVD_SECTOR, 4096);
        let reads = source.reads.clone();
        let mut session = session_with(source);

        assert_eq!(session.dual_info(), DualLayerInfo::default());
        assert_eq!(session.dual_info(), DualLayerInfo::default());
        assert_eq!(reads.get(), 1);
    }

    #[test]
    fn test_toc_shares_layer_cache() {
        let source = FakeSource::dual_layer(10_000, 6000);
        let reads = source.reads.clone();
        let mut session = session_with(source);

        let mut toc = [0u8; 2048];
        session.write_toc(&mut toc).unwrap();
        assert_eq!(&toc[..6], &[0x24, 0x02, 0xF2, 0x00, 0x41, 0x95]);
        assert_eq!(read_u32_be(&toc, 20), 6000 + 0x30000 - 1);

        session.dual_info();
        session.write_toc(&mut toc).unwrap();
        assert_eq!(reads.get(), 2);
    }

    #[test]
    fn test_cd_toc_skips_layer_search() {
        let source = FakeSource::dual_layer(10_000, 6000);
        let reads = source.reads.clone();
        let mut session = session_with(source);
        session.set_media_type(MediaType::Ps1Cd);

        let mut toc = [0xEEu8; 1024];
        session.write_toc(&mut toc).unwrap();
        assert_eq!(toc[2], 0xA0);
        assert_eq!(reads.get(), 0);
        assert_eq!(session.layer_search(), LayerSearch::Unsearched);
    }

    #[test]
    fn test_toc_buffer_too_small() {
        let mut session = session_with(FakeSource::new(100));
        let mut toc = [0xEEu8; 1024];

        assert!(matches!(
            session.write_toc(&mut toc),
            Err(CdvdError::BufferTooSmall {
                needed: 2048,
                actual: 1024
            })
        ));
        assert!(toc.iter().all(|&b| b == 0xEE));
    }

    #[test]
    fn test_finish_read_without_queue() {
        let source = FakeSource::new(100);
        let reads = source.reads.clone();
        let mut session = session_with(source);

        let mut buffer = [0xEEu8; 2048];
        session.finish_read(&mut buffer).unwrap();
        assert!(buffer.iter().all(|&b| b == 0xEE));
        assert_eq!(reads.get(), 0);
    }

    #[test]
    fn test_queued_read_is_delivered() {
        let source = FakeSource::new(100).with_descriptor(PVD_SECTOR, 100);
        let mut session = session_with(source);

        session.queue_read(PVD_SECTOR, ReadMode::Mode2048);
        assert_eq!(
            session.pending_read(),
            Some(PendingRead {
                lsn: 16,
                mode: ReadMode::Mode2048
            })
        );

        let mut buffer = [0u8; 2048];
        session.finish_read(&mut buffer).unwrap();
        assert_eq!(&buffer[..6], &[1, b'C', b'D', b'0', b'0', b'1']);
    }

    #[test]
    fn test_read_error_is_propagated() {
        let mut source = FakeSource::new(100);
        source.fail = true;
        let mut session = session_with(source);

        let mut buffer = [0u8; 2352];
        assert!(matches!(
            session.read_sector(&mut buffer, 0, ReadMode::Raw2352),
            Err(CdvdError::NoMedia)
        ));
    }

    #[test]
    fn test_single_data_track() {
        assert_eq!(
            SingleDataTrack.track_range().unwrap(),
            TrackRange { first: 1, last: 1 }
        );
        assert_eq!(
            SingleDataTrack.track_descriptor(0).unwrap(),
            TrackDescriptor::default()
        );
        assert_eq!(
            SingleDataTrack.track_descriptor(1).unwrap(),
            TrackDescriptor {
                track_type: TrackType::Mode1,
                lsn: 0
            }
        );
    }
}

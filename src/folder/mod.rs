//! Folder-backed disc: presents a host directory to the emulator as a PS2 DVD.

use crate::cd::sector::ReadMode;
use crate::cd::subq::SubChannelQ;
use crate::device::{CdvdDevice, NewDiskCallback};
use crate::disc::media::{DualLayerInfo, MediaType, TrayStatus};
use crate::disc::toc::TrackTable;
use crate::disc::track::{TrackDescriptor, TrackRange};
use crate::error::{CdvdError, CdvdResult};
use crate::folder::scan::DirectoryImage;
use crate::folder::session::{Session, SingleDataTrack};
use crate::folder::volume::SynthesizedVolume;
use crate::folder::watch::{ChangeNotifier, PollingNotifier};
use crate::iso9660::pvd::PrimaryVolumeDescriptor;
use log::{debug, error, info};
use std::path::Path;

pub mod scan;
pub mod session;
pub mod volume;
pub mod watch;

pub struct DirectoryDisc<N: ChangeNotifier = PollingNotifier> {
    notifier: N,
    session: Option<Session>,
}

impl<N: ChangeNotifier> DirectoryDisc<N> {
    pub fn new(notifier: N) -> Self {
        Self {
            notifier,
            session: None,
        }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Lets the host present the folder as something other than a PS2 DVD.
    /// Holds until the next `open`.
    pub fn set_disk_type(&mut self, media_type: MediaType) -> CdvdResult<()> {
        self.session_mut()?.set_media_type(media_type);
        Ok(())
    }

    fn session_mut(&mut self) -> CdvdResult<&mut Session> {
        self.session.as_mut().ok_or(CdvdError::NotOpen)
    }

    fn open_session(&mut self, path: &Path) -> CdvdResult<Session> {
        if path.as_os_str().is_empty() {
            return Err(CdvdError::InvalidArgument);
        }

        if !path.is_dir() {
            return Err(CdvdError::NotFound(path.to_path_buf()));
        }

        self.notifier
            .subscribe(path)
            .map_err(|_| CdvdError::WatchFailure(path.to_path_buf()))?;

        let image = DirectoryImage::scan(path)?;
        if image.is_empty() {
            return Err(CdvdError::EmptyDirectory(path.to_path_buf()));
        }

        for file in &image.files {
            debug!("Found file: {:?} ({} bytes)", file.path, file.len);
        }

        let pvd = PrimaryVolumeDescriptor::synthesize();
        let source = SynthesizedVolume::new(&pvd, image.block_count())?;

        Ok(Session::new(image, pvd, Box::new(source)))
    }
}

impl<N: ChangeNotifier> CdvdDevice for DirectoryDisc<N> {
    fn open(&mut self, path: &Path) -> CdvdResult<()> {
        self.close();

        match self.open_session(path) {
            Ok(session) => {
                info!(
                    "Opened {:?}: {} files, {} sectors",
                    path,
                    session.image().files.len(),
                    session.image().block_count()
                );
                self.session = Some(session);
                Ok(())
            }
            Err(err) => {
                error!("Failed to open folder disc: {err}");
                self.close();
                Err(err)
            }
        }
    }

    fn close(&mut self) {
        self.notifier.unsubscribe_all();
        self.session = None;
    }

    /// The read itself happens in `get_buffer`.
    fn read_track(&mut self, lsn: u32, mode: ReadMode) -> CdvdResult<()> {
        self.session_mut()?.queue_read(lsn, mode);
        Ok(())
    }

    fn get_buffer(&mut self, buffer: &mut [u8]) -> CdvdResult<()> {
        self.session_mut()?.finish_read(buffer)
    }

    fn read_sector(&mut self, buffer: &mut [u8], lsn: u32, mode: ReadMode) -> CdvdResult<()> {
        self.session_mut()?.read_sector(buffer, lsn, mode)
    }

    fn read_subq(&mut self, lsn: u32) -> CdvdResult<SubChannelQ> {
        Ok(SubChannelQ::synthesize(lsn))
    }

    fn get_tn(&mut self) -> CdvdResult<TrackRange> {
        SingleDataTrack.track_range()
    }

    fn get_td(&mut self, track: u8) -> CdvdResult<TrackDescriptor> {
        SingleDataTrack.track_descriptor(track)
    }

    fn get_toc(&mut self, buffer: &mut [u8]) -> CdvdResult<()> {
        match self.session.as_mut() {
            Some(session) => session.write_toc(buffer),
            None => Err(CdvdError::UnsupportedMediaType(MediaType::NoDisc)),
        }
    }

    fn get_disk_type(&self) -> MediaType {
        self.session
            .as_ref()
            .map(Session::media_type)
            .unwrap_or(MediaType::NoDisc)
    }

    fn get_dual_info(&mut self) -> CdvdResult<DualLayerInfo> {
        Ok(self
            .session
            .as_mut()
            .map(Session::dual_info)
            .unwrap_or_default())
    }

    /// There is no tray to open.
    fn get_tray_status(&self) -> TrayStatus {
        TrayStatus::Closed
    }

    fn tray_open(&mut self) -> CdvdResult<()> {
        Ok(())
    }

    fn tray_close(&mut self) -> CdvdResult<()> {
        Ok(())
    }

    /// A folder never changes media, so the callback is never invoked.
    fn new_disk_callback(&mut self, _callback: NewDiskCallback) {
        debug!("New disk callback registered");
    }
}

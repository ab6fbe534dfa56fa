use crate::cd::sector::Mode2Form1Sector;
use crate::cd::source::FrameSource;
use crate::cd::{ISO_BLOCK_SIZE, RAW_FRAME_SIZE};
use crate::error::CdvdResult;
use crate::folder::scan::HEADER_SECTORS;
use crate::iso9660::PVD_SECTOR;
use crate::iso9660::pvd::PrimaryVolumeDescriptor;

/// Frames for a folder-backed disc.
///
/// PLACEHOLDER: file contents are not mapped onto sectors yet. Sector 16
/// carries the synthesized primary volume descriptor, sector 17 the second
/// (blank) header block, and every other sector reads back as zeroes.
#[derive(Debug)]
pub struct SynthesizedVolume {
    header: [[u8; ISO_BLOCK_SIZE]; HEADER_SECTORS as usize],
    block_count: u32,
}

impl SynthesizedVolume {
    pub fn new(pvd: &PrimaryVolumeDescriptor, block_count: u32) -> CdvdResult<Self> {
        Ok(Self {
            header: [pvd.to_bytes()?, [0; ISO_BLOCK_SIZE]],
            block_count,
        })
    }

    fn user_data(&self, lsn: u32) -> [u8; ISO_BLOCK_SIZE] {
        lsn.checked_sub(PVD_SECTOR)
            .and_then(|index| self.header.get(index as usize))
            .copied()
            .unwrap_or([0; ISO_BLOCK_SIZE])
    }
}

impl FrameSource for SynthesizedVolume {
    fn block_count(&self) -> u32 {
        self.block_count
    }

    fn read_frame(&mut self, lsn: u32, frame: &mut [u8; RAW_FRAME_SIZE]) -> CdvdResult<()> {
        *frame = Mode2Form1Sector::from_user_data(self.user_data(lsn)).to_raw_bytes()?;
        Ok(())
    }
}

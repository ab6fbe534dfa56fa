use crate::cd::RAW_FRAME_SIZE;
use crate::error::CdvdResult;

/// Anything that can hand out raw frames by logical sector number.
pub trait FrameSource {
    /// Number of sectors the source spans.
    fn block_count(&self) -> u32;

    /// Fills `frame` with the raw 2352 byte frame at `lsn`.
    fn read_frame(&mut self, lsn: u32, frame: &mut [u8; RAW_FRAME_SIZE]) -> CdvdResult<()>;
}

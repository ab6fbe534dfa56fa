pub mod msf;
pub mod sector;
pub mod source;
pub mod subq;

/// Size of a raw CD frame, sync pattern and error correction included.
pub const RAW_FRAME_SIZE: usize = 2352;

/// Size of a logical ISO9660 block.
pub const ISO_BLOCK_SIZE: usize = 2048;

/// Offset of the 2048 byte user data inside a raw Mode 2 Form 1 frame.
pub const USER_DATA_OFFSET: usize = 24;

pub const FRAMES_PER_SECOND: u32 = 75;
pub const SECONDS_PER_MINUTE: u32 = 60;

/// The 2 second lead-in every disc address is offset by.
pub const LEAD_IN_FRAMES: u32 = 2 * FRAMES_PER_SECOND;

use crate::cd::{ISO_BLOCK_SIZE, RAW_FRAME_SIZE};
use crate::error::{CdvdError, CdvdResult};
use binrw::prelude::*;
use std::io::Cursor;

/// Transfer mode requested by the host for a sector read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ReadMode {
    /// The whole raw frame.
    Raw2352 = 0,
    /// Everything after the sync pattern.
    Mode2340 = 1,
    /// Everything after the sync pattern, header and sub-header.
    Mode2328 = 2,
    /// User data only.
    Mode2048 = 3,
}

impl ReadMode {
    /// Offset of the payload inside a raw frame.
    pub const fn offset(self) -> usize {
        match self {
            Self::Raw2352 => 0,
            Self::Mode2340 => 12,
            Self::Mode2328 | Self::Mode2048 => 24,
        }
    }

    pub const fn payload_size(self) -> usize {
        match self {
            Self::Raw2352 => RAW_FRAME_SIZE,
            Self::Mode2340 => 2340,
            Self::Mode2328 => 2328,
            Self::Mode2048 => ISO_BLOCK_SIZE,
        }
    }
}

impl TryFrom<u8> for ReadMode {
    type Error = CdvdError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Raw2352),
            1 => Ok(Self::Mode2340),
            2 => Ok(Self::Mode2328),
            3 => Ok(Self::Mode2048),
            other => Err(CdvdError::InvalidReadMode(other)),
        }
    }
}

/// Slice of `frame` the host receives for `mode`.
pub fn decode_sector(frame: &[u8; RAW_FRAME_SIZE], mode: ReadMode) -> &[u8] {
    let start = mode.offset();
    &frame[start..start + mode.payload_size()]
}

/// Copies the payload for `mode` into the front of `out`, returning its length.
pub fn copy_payload(
    frame: &[u8; RAW_FRAME_SIZE],
    mode: ReadMode,
    out: &mut [u8],
) -> CdvdResult<usize> {
    let payload = decode_sector(frame, mode);
    if out.len() < payload.len() {
        return Err(CdvdError::BufferTooSmall {
            needed: payload.len(),
            actual: out.len(),
        });
    }

    out[..payload.len()].copy_from_slice(payload);
    Ok(payload.len())
}

/// A raw Mode 2 Form 1 frame, the layout PS2 discs are mastered with.
#[derive(Debug, BinRead, BinWrite)]
#[br(big)]
#[bw(big)]
pub struct Mode2Form1Sector {
    pub sync: [u8; 12],
    pub header: [u8; 4],
    pub subheader: [u8; 8],
    pub data: [u8; ISO_BLOCK_SIZE],
    #[br(little)]
    #[bw(little)]
    pub edc: u32,
    pub ecc_p: [u8; 172],
    pub ecc_q: [u8; 104],
}

impl Mode2Form1Sector {
    /// Wraps user data in an otherwise zeroed frame. Sync, header and error
    /// correction are left blank since nothing downstream verifies them.
    pub fn from_user_data(data: [u8; ISO_BLOCK_SIZE]) -> Self {
        Self {
            sync: [0; 12],
            header: [0; 4],
            subheader: [0; 8],
            data,
            edc: 0,
            ecc_p: [0; 172],
            ecc_q: [0; 104],
        }
    }

    pub fn to_raw_bytes(&self) -> CdvdResult<[u8; RAW_FRAME_SIZE]> {
        let mut frame = [0u8; RAW_FRAME_SIZE];
        self.write(&mut Cursor::new(&mut frame[..]))?;
        Ok(frame)
    }
}

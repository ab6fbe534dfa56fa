use crate::cd::{RAW_FRAME_SIZE, USER_DATA_OFFSET};

pub mod endian;
pub mod layer;
pub mod pvd;

/// Sector holding the layer 0 primary volume descriptor.
pub const PVD_SECTOR: u32 = 16;

/// Sectors reserved ahead of the volume descriptors.
pub const SYSTEM_AREA_SECTORS: u32 = 16;

/// Type code followed by the standard identifier, as found on every
/// primary volume descriptor.
pub const PVD_SIGNATURE: [u8; 6] = [1, b'C', b'D', b'0', b'0', b'1'];

/// Offset of the little-endian volume space size inside a descriptor.
pub const VOLUME_SPACE_SIZE_OFFSET: usize = 80;

/// Whether the user data of a raw frame starts with a primary volume descriptor.
pub fn has_pvd_signature(frame: &[u8; RAW_FRAME_SIZE]) -> bool {
    frame[USER_DATA_OFFSET..USER_DATA_OFFSET + PVD_SIGNATURE.len()] == PVD_SIGNATURE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_at_user_data_offset() {
        let mut frame = [0u8; RAW_FRAME_SIZE];
        assert!(!has_pvd_signature(&frame));

        frame[..6].copy_from_slice(&PVD_SIGNATURE);
        assert!(!has_pvd_signature(&frame));

        frame[24..30].copy_from_slice(&PVD_SIGNATURE);
        assert!(has_pvd_signature(&frame));
    }
}

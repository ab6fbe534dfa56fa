use crate::cd::LEAD_IN_FRAMES;
use crate::cd::msf::{Msf, itob};
use binrw::binrw;

/// Control nibble of a data track.
pub const CONTROL_DATA_TRACK: u8 = 4;

/// ADR nibble of a Q channel carrying the current position.
pub const ADR_POSITION: u8 = 1;

/// Q sub-channel record as the host reads it: 10 bytes, control and mode
/// packed into the first byte, every number BCD-encoded.
#[binrw]
#[brw(little)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubChannelQ {
    #[bw(calc = (ctrl & 0x0F) | (mode << 4))]
    #[br(temp)]
    ctrl_mode: u8,

    #[br(calc = ctrl_mode & 0x0F)]
    #[bw(ignore)]
    pub ctrl: u8,

    #[br(calc = ctrl_mode >> 4)]
    #[bw(ignore)]
    pub mode: u8,

    pub track_num: u8,
    pub track_index: u8,
    pub track_m: u8,
    pub track_s: u8,
    pub track_f: u8,
    pub pad: u8,
    pub disc_m: u8,
    pub disc_s: u8,
    pub disc_f: u8,
}

impl SubChannelQ {
    /// Fabricates a position record for a single data track starting at
    /// sector 0. The disc timecode adds another lead-in on top of the one
    /// already folded into the track timecode, as the firmware reports it.
    pub fn synthesize(lsn: u32) -> Self {
        let [track_m, track_s, track_f] = Msf::from_lsn(lsn).to_bcd();
        let [disc_m, disc_s, disc_f] = Msf::from_lsn(lsn.wrapping_add(LEAD_IN_FRAMES)).to_bcd();

        Self {
            ctrl: CONTROL_DATA_TRACK,
            mode: ADR_POSITION,
            track_num: itob(1),
            track_index: itob(1),
            track_m,
            track_s,
            track_f,
            pad: 0,
            disc_m,
            disc_s,
            disc_f,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use binrw::{BinRead, BinWrite};
    use std::io::Cursor;

    #[test]
    fn test_synthesize_at_sector_zero() {
        let subq = SubChannelQ::synthesize(0);
        assert_eq!(subq.ctrl, 4);
        assert_eq!(subq.mode, 1);
        assert_eq!(subq.track_num, 0x01);
        assert_eq!(subq.track_index, 0x01);
        assert_eq!((subq.track_m, subq.track_s, subq.track_f), (0x00, 0x02, 0x00));
        assert_eq!((subq.disc_m, subq.disc_s, subq.disc_f), (0x00, 0x04, 0x00));
    }

    #[test]
    fn test_synthesize_bcd_fields() {
        // 4500 - 150 + 75 * 12 + 33 → track 01:12:33
        let subq = SubChannelQ::synthesize(4350 + 75 * 12 + 33);
        assert_eq!((subq.track_m, subq.track_s, subq.track_f), (0x01, 0x12, 0x33));
        assert_eq!((subq.disc_m, subq.disc_s, subq.disc_f), (0x01, 0x14, 0x33));
    }

    #[test]
    fn test_wire_layout() {
        let subq = SubChannelQ::synthesize(0);
        let mut buf = Vec::new();
        subq.write(&mut Cursor::new(&mut buf)).unwrap();

        assert_eq!(buf.len(), 10);
        assert_eq!(buf[0], 0x14);
        assert_eq!(&buf[1..], &[0x01, 0x01, 0x00, 0x02, 0x00, 0x00, 0x00, 0x04, 0x00]);

        let read_back = SubChannelQ::read(&mut Cursor::new(&buf)).unwrap();
        assert_eq!(read_back, subq);
    }
}

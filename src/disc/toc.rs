//! Table of contents blobs in the layouts the host's firmware reports.
//!
//! DVDs answer with a READ DVD STRUCTURE (physical format) block, CDs with a
//! raw TOC made of 10 byte point entries.

use crate::cd::msf::{Msf, itob};
use crate::disc::track::{TrackDescriptor, TrackRange};
use crate::error::CdvdResult;
use crate::iso9660::endian::write_u32_be;
use log::warn;

pub const DVD_STRUCTURE_SIZE: usize = 2048;
pub const CD_TOC_SIZE: usize = 1024;

/// Offset added to the layer 1 start sector in the end-of-layer-0 field.
const LAYER0_END_BIAS: u32 = 0x30000;

/// Dual sided, parallel track path.
const DUAL_LAYER_PTP: u8 = 0x60;

const POINT_FIRST_TRACK: u8 = 0xA0;
const POINT_LAST_TRACK: u8 = 0xA1;
const POINT_LEAD_OUT: u8 = 0xA2;

/// Source of the track listing a CD table of contents is built from.
pub trait TrackTable {
    fn track_range(&self) -> CdvdResult<TrackRange>;

    /// Track 0 asks for the lead-out.
    fn track_descriptor(&self, track: u8) -> CdvdResult<TrackDescriptor>;
}

pub fn dvd_structure(layer1_start: Option<u32>) -> Vec<u8> {
    let mut toc = vec![0u8; DVD_STRUCTURE_SIZE];

    match layer1_start {
        None => {
            toc[..6].copy_from_slice(&[0x04, 0x02, 0xF2, 0x00, 0x86, 0x72]);
            toc[16..20].copy_from_slice(&[0x00, 0x03, 0x00, 0x00]);
        }
        Some(layer1_start) => {
            toc[..6].copy_from_slice(&[0x24, 0x02, 0xF2, 0x00, 0x41, 0x95]);
            toc[14] = DUAL_LAYER_PTP;
            toc[16..20].copy_from_slice(&[0x00, 0x03, 0x00, 0x00]);
            write_u32_be(
                &mut toc,
                20,
                layer1_start.wrapping_add(LAYER0_END_BIAS).wrapping_sub(1),
            );
        }
    }

    toc
}

pub fn cd_toc(tracks: &dyn TrackTable) -> Vec<u8> {
    let mut toc = vec![0u8; CD_TOC_SIZE];

    let range = tracks
        .track_range()
        .unwrap_or(TrackRange { first: 1, last: 0 });
    let lead_out = tracks.track_descriptor(0).unwrap_or_default();

    toc[0] = 0x41;
    toc[1] = 0x00;

    toc[2] = POINT_FIRST_TRACK;
    toc[7] = itob(range.first);

    toc[12] = POINT_LAST_TRACK;
    toc[17] = itob(range.last);

    let [minutes, seconds, _] = Msf::from_lsn(lead_out.lsn).to_bcd();
    toc[22] = POINT_LEAD_OUT;
    toc[27] = minutes;
    toc[28] = seconds;

    for track in range.first..=range.last {
        let base = track as usize * 10;
        if base + 39 >= CD_TOC_SIZE {
            warn!("Track {track} does not fit in the table of contents, skipping");
            continue;
        }

        let (descriptor, number) = match tracks.track_descriptor(track) {
            Ok(descriptor) => (descriptor, itob(track)),
            Err(_) => (TrackDescriptor::default(), 0),
        };
        let [minutes, seconds, frames] = Msf::from_lsn(descriptor.lsn).to_bcd();

        toc[base + 30] = descriptor.track_type as u8;
        toc[base + 32] = number;
        toc[base + 37] = minutes;
        toc[base + 38] = seconds;
        toc[base + 39] = frames;
    }

    toc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disc::track::TrackType;
    use crate::error::CdvdError;
    use crate::iso9660::endian::read_u32_be;

    struct StaticTracks {
        range: TrackRange,
        descriptors: Vec<TrackDescriptor>,
    }

    impl TrackTable for StaticTracks {
        fn track_range(&self) -> CdvdResult<TrackRange> {
            Ok(self.range)
        }

        fn track_descriptor(&self, track: u8) -> CdvdResult<TrackDescriptor> {
            self.descriptors
                .get(track as usize)
                .copied()
                .ok_or(CdvdError::NoMedia)
        }
    }

    struct BrokenTracks;

    impl TrackTable for BrokenTracks {
        fn track_range(&self) -> CdvdResult<TrackRange> {
            Err(CdvdError::NoMedia)
        }

        fn track_descriptor(&self, _track: u8) -> CdvdResult<TrackDescriptor> {
            Err(CdvdError::NoMedia)
        }
    }

    fn single_data_track() -> StaticTracks {
        StaticTracks {
            range: TrackRange { first: 1, last: 1 },
            descriptors: vec![
                TrackDescriptor::default(),
                TrackDescriptor {
                    track_type: TrackType::Mode1,
                    lsn: 0,
                },
            ],
        }
    }

    #[test]
    fn test_dvd_single_layer() {
        let toc = dvd_structure(None);
        assert_eq!(toc.len(), 2048);
        assert_eq!(&toc[..6], &[0x04, 0x02, 0xF2, 0x00, 0x86, 0x72]);
        assert_eq!(&toc[16..20], &[0x00, 0x03, 0x00, 0x00]);
        assert!(toc[6..16].iter().all(|&b| b == 0));
        assert!(toc[20..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_dvd_dual_layer() {
        let toc = dvd_structure(Some(0x0020_0000));
        assert_eq!(toc.len(), 2048);
        assert_eq!(&toc[..6], &[0x24, 0x02, 0xF2, 0x00, 0x41, 0x95]);
        assert_eq!(toc[14], 0x60);
        assert_eq!(&toc[16..20], &[0x00, 0x03, 0x00, 0x00]);
        assert_eq!(read_u32_be(&toc, 20), 0x0020_0000 + 0x30000 - 1);
        assert_eq!(&toc[20..24], &[0x00, 0x22, 0xFF, 0xFF]);
        assert!(toc[24..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_cd_single_track() {
        let toc = cd_toc(&single_data_track());
        assert_eq!(toc.len(), 1024);
        assert_eq!(&toc[..2], &[0x41, 0x00]);
        assert_eq!(toc[2], 0xA0);
        assert_eq!(toc[7], 0x01);
        assert_eq!(toc[12], 0xA1);
        assert_eq!(toc[17], 0x01);
        assert_eq!(toc[22], 0xA2);
        // lead-out at sector 0 is 00:02
        assert_eq!((toc[27], toc[28]), (0x00, 0x02));

        assert_eq!(toc[40], 0x41);
        assert_eq!(toc[42], 0x01);
        assert_eq!((toc[47], toc[48], toc[49]), (0x00, 0x02, 0x00));
        assert!(toc[50..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_cd_track_entries_use_bcd() {
        let tracks = StaticTracks {
            range: TrackRange { first: 1, last: 12 },
            descriptors: (0..=12)
                .map(|i| TrackDescriptor {
                    track_type: if i == 12 {
                        TrackType::Audio
                    } else {
                        TrackType::Mode2
                    },
                    lsn: i * 75,
                })
                .collect(),
        };
        let toc = cd_toc(&tracks);

        assert_eq!(toc[17], 0x12);
        // lead-out descriptor is entry 0
        assert_eq!((toc[27], toc[28]), (0x00, 0x02));

        let base = 12 * 10;
        assert_eq!(toc[base + 30], 0x01);
        assert_eq!(toc[base + 32], 0x12);
        // 12 * 75 + 150 frames = 00:14:00
        assert_eq!((toc[base + 37], toc[base + 38], toc[base + 39]), (0x00, 0x14, 0x00));
        assert_eq!(toc[11 * 10 + 30], 0x61);
    }

    #[test]
    fn test_cd_failed_lookup_reports_track_zero() {
        let mut tracks = single_data_track();
        tracks.range = TrackRange { first: 1, last: 2 };
        let toc = cd_toc(&tracks);

        assert_eq!(toc[42], 0x01);
        assert_eq!(toc[50], 0x00);
        assert_eq!(toc[52], 0x00);
        assert_eq!((toc[57], toc[58], toc[59]), (0x00, 0x02, 0x00));
    }

    #[test]
    fn test_cd_without_track_listing() {
        let toc = cd_toc(&BrokenTracks);
        assert_eq!(toc[7], 0x01);
        assert_eq!(toc[17], 0x00);
        assert_eq!(toc[22], 0xA2);
        assert!(toc[30..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_cd_tracks_past_buffer_are_skipped() {
        let tracks = StaticTracks {
            range: TrackRange { first: 98, last: 99 },
            descriptors: vec![
                TrackDescriptor {
                    track_type: TrackType::Audio,
                    lsn: 0,
                };
                100
            ],
        };
        let toc = cd_toc(&tracks);
        assert_eq!(toc.len(), 1024);
        assert_eq!(toc[98 * 10 + 32], 0x98);
    }
}

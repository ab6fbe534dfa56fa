/// Track type codes reported in track descriptors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum TrackType {
    /// Nothing reported, as for the lead-out of a folder-backed disc
    #[default]
    None = 0x00,
    Audio = 0x01,
    Mode1 = 0x41,
    Mode2 = 0x61,
}

/// First and last track numbers on the disc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackRange {
    pub first: u8,
    pub last: u8,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrackDescriptor {
    pub track_type: TrackType,
    pub lsn: u32,
}

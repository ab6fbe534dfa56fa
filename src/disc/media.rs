/// Disc type codes as the host's CDVD subsystem defines them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum MediaType {
    #[default]
    NoDisc = 0x00,
    Detecting = 0x01,
    DetectingCd = 0x02,
    DetectingDvdSingle = 0x03,
    DetectingDvdDual = 0x04,
    Unknown = 0x05,
    Ps1Cd = 0x10,
    Ps1CdDa = 0x11,
    Ps2Cd = 0x12,
    Ps2CdDa = 0x13,
    Ps2Dvd = 0x14,
    CdDa = 0xFD,
    DvdVideo = 0xFE,
    Illegal = 0xFF,
}

/// Which table of contents layout a media type answers with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaCategory {
    Dvd,
    Cd,
}

impl MediaType {
    pub fn category(self) -> Option<MediaCategory> {
        match self {
            Self::Ps2Dvd | Self::DvdVideo => Some(MediaCategory::Dvd),
            Self::CdDa | Self::Ps2CdDa | Self::Ps2Cd | Self::Ps1CdDa | Self::Ps1Cd => {
                Some(MediaCategory::Cd)
            }
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<u8> for MediaType {
    fn from(value: u8) -> Self {
        match value {
            0x00 => Self::NoDisc,
            0x01 => Self::Detecting,
            0x02 => Self::DetectingCd,
            0x03 => Self::DetectingDvdSingle,
            0x04 => Self::DetectingDvdDual,
            0x05 => Self::Unknown,
            0x10 => Self::Ps1Cd,
            0x11 => Self::Ps1CdDa,
            0x12 => Self::Ps2Cd,
            0x13 => Self::Ps2CdDa,
            0x14 => Self::Ps2Dvd,
            0xFD => Self::CdDa,
            0xFE => Self::DvdVideo,
            _ => Self::Illegal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TrayStatus {
    Closed = 0,
    Open = 1,
}

/// Answer to a dual layer query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DualLayerInfo {
    /// 0 for a single layer disc, 1 for a dual layer one
    pub dual_type: u8,
    /// First sector of layer 1, 0 when there is none
    pub layer1_start: u32,
}

impl DualLayerInfo {
    pub fn from_layer1_start(layer1_start: Option<u32>) -> Self {
        match layer1_start {
            Some(layer1_start) => Self {
                dual_type: 1,
                layer1_start,
            },
            None => Self::default(),
        }
    }
}

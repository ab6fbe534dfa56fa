use crate::cd::source::FrameSource;
use crate::cd::{RAW_FRAME_SIZE, USER_DATA_OFFSET};
use crate::iso9660::endian::read_u32_le;
use crate::iso9660::{PVD_SECTOR, VOLUME_SPACE_SIZE_OFFSET, has_pvd_signature};
use log::{debug, error, info};

/// Progress of the one-shot search for a second disc layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LayerSearch {
    #[default]
    Unsearched,
    /// Search done; holds the layer 1 start sector when one was found.
    Searched(Option<u32>),
}

impl LayerSearch {
    /// Runs the search on first use and returns the cached answer afterwards.
    pub fn resolve(&mut self, source: &mut dyn FrameSource) -> Option<u32> {
        match *self {
            Self::Searched(layer1_start) => layer1_start,
            Self::Unsearched => {
                let layer1_start = find_layer1_start(source);
                *self = Self::Searched(layer1_start);
                layer1_start
            }
        }
    }

    pub fn is_searched(&self) -> bool {
        matches!(self, Self::Searched(_))
    }
}

/// Looks for a second volume behind the one described at sector 16.
///
/// A volume space size smaller than the source means the remaining sectors
/// belong to layer 1, which must start with its own descriptor. Any failure
/// along the way is logged and reported as a single layer disc.
pub fn find_layer1_start(source: &mut dyn FrameSource) -> Option<u32> {
    let mut frame = [0u8; RAW_FRAME_SIZE];

    if let Err(err) = source.read_frame(PVD_SECTOR, &mut frame) {
        error!("Failed to read layer0 Primary Volume Descriptor: {err}");
        return None;
    }

    if !has_pvd_signature(&frame) {
        error!("Invalid layer0 Primary Volume Descriptor");
        return None;
    }

    let volume_size = read_u32_le(&frame, USER_DATA_OFFSET + VOLUME_SPACE_SIZE_OFFSET);
    let block_count = source.block_count();

    debug!("Layer0 volume size: {volume_size} sectors, source: {block_count} sectors");

    if volume_size == 0 || volume_size >= block_count {
        return None;
    }

    if let Err(err) = source.read_frame(volume_size, &mut frame) {
        error!("Failed to read layer1 Primary Volume Descriptor: {err}");
        return None;
    }

    if !has_pvd_signature(&frame) {
        error!("Invalid layer1 Primary Volume Descriptor");
        return None;
    }

    info!("Second layer found at sector {volume_size:#010x}");
    Some(volume_size)
}

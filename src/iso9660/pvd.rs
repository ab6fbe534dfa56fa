use crate::cd::ISO_BLOCK_SIZE;
use crate::error::CdvdResult;
use crate::iso9660::PVD_SIGNATURE;
use crate::iso9660::endian::{BothEndian16, BothEndian32};
use binrw::{BinRead, BinWrite};
use std::io::Cursor;

pub const SYSTEM_IDENTIFIER: &str = "PLAYSTATION";
pub const VOLUME_IDENTIFIER: &str = "1";

/// Sectors the synthesized volume claims to span.
pub const VOLUME_SPACE_SIZE: u32 = 4096;

/// Primary Volume Descriptor, one logical block long.
///
/// Numeric fields ISO9660 records in both byte orders use [`BothEndian32`] and
/// [`BothEndian16`]; everything after the block size is kept as raw bytes.
#[derive(Debug, Clone, PartialEq, Eq, BinRead, BinWrite)]
#[brw(little)]
pub struct PrimaryVolumeDescriptor {
    /// Volume descriptor type, 1 for a primary descriptor
    pub type_code: u8,

    /// Always "CD001"
    pub standard_identifier: [u8; 5],

    /// Always 1
    pub version: u8,

    pub unused1: u8,

    /// System that can act on sectors 0-15, space padded
    pub system_identifier: [u8; 32],

    /// Volume name, space padded
    pub volume_identifier: [u8; 32],

    pub unused2: [u8; 8],

    /// Number of logical blocks in the volume
    pub volume_space_size: BothEndian32,

    pub unused3: [u8; 32],

    /// Number of discs in the set
    pub volume_set_size: BothEndian16,

    /// Number of this disc in the set
    pub volume_sequence_number: BothEndian16,

    pub logical_block_size: BothEndian16,

    pub path_table_size: BothEndian32,

    pub l_path_table_sector: u32,
    pub optional_l_path_table_sector: u32,
    #[brw(big)]
    pub m_path_table_sector: u32,
    #[brw(big)]
    pub optional_m_path_table_sector: u32,

    pub root_directory_entry: [u8; 34],
    pub volume_set_identifier: [u8; 128],
    pub publisher_identifier: [u8; 128],
    pub data_preparer_identifier: [u8; 128],
    pub application_identifier: [u8; 128],
    pub copyright_file_identifier: [u8; 37],
    pub abstract_file_identifier: [u8; 37],
    pub bibliographic_file_identifier: [u8; 37],
    pub creation_date_time: [u8; 17],
    pub modification_date_time: [u8; 17],
    pub expiration_date_time: [u8; 17],
    pub effective_date_time: [u8; 17],
    pub file_structure_version: u8,
    pub unused4: u8,
    pub application_use: [u8; 512],
    pub reserved: [u8; 653],
}

impl PrimaryVolumeDescriptor {
    /// The descriptor every folder-backed disc reports: a single 4096 block
    /// volume with 2048 byte blocks. Path tables, root directory and dates
    /// stay zeroed until directory contents are mapped onto sectors.
    pub fn synthesize() -> Self {
        Self {
            type_code: PVD_SIGNATURE[0],
            standard_identifier: *b"CD001",
            version: 1,
            unused1: 0,
            system_identifier: fill_str(SYSTEM_IDENTIFIER),
            volume_identifier: fill_str(VOLUME_IDENTIFIER),
            unused2: [0; 8],
            volume_space_size: BothEndian32::new(VOLUME_SPACE_SIZE),
            unused3: [0; 32],
            volume_set_size: BothEndian16::new(1),
            volume_sequence_number: BothEndian16::new(1),
            logical_block_size: BothEndian16::new(ISO_BLOCK_SIZE as u16),
            path_table_size: BothEndian32::new(0),
            l_path_table_sector: 0,
            optional_l_path_table_sector: 0,
            m_path_table_sector: 0,
            optional_m_path_table_sector: 0,
            root_directory_entry: [0; 34],
            volume_set_identifier: [0; 128],
            publisher_identifier: [0; 128],
            data_preparer_identifier: [0; 128],
            application_identifier: [0; 128],
            copyright_file_identifier: [0; 37],
            abstract_file_identifier: [0; 37],
            bibliographic_file_identifier: [0; 37],
            creation_date_time: [0; 17],
            modification_date_time: [0; 17],
            expiration_date_time: [0; 17],
            effective_date_time: [0; 17],
            file_structure_version: 0,
            unused4: 0,
            application_use: [0; 512],
            reserved: [0; 653],
        }
    }

    pub fn from_bytes(block: &[u8]) -> CdvdResult<Self> {
        Ok(Self::read(&mut Cursor::new(block))?)
    }

    pub fn to_bytes(&self) -> CdvdResult<[u8; ISO_BLOCK_SIZE]> {
        let mut block = [0u8; ISO_BLOCK_SIZE];
        self.write(&mut Cursor::new(&mut block[..]))?;
        Ok(block)
    }

    pub fn is_primary(&self) -> bool {
        self.type_code == PVD_SIGNATURE[0] && self.standard_identifier == PVD_SIGNATURE[1..]
    }

    /// Whether every field stored in both byte orders agrees with itself.
    pub fn is_consistent(&self) -> bool {
        self.volume_space_size.get().is_some()
            && self.volume_set_size.get().is_some()
            && self.volume_sequence_number.get().is_some()
            && self.logical_block_size.get().is_some()
            && self.path_table_size.get().is_some()
    }
}

/// Copies `value` into a fixed width field, padding the rest with spaces.
fn fill_str<const N: usize>(value: &str) -> [u8; N] {
    let mut field = [b' '; N];
    let len = value.len().min(N);
    field[..len].copy_from_slice(&value.as_bytes()[..len]);
    field
}

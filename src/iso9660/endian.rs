//! Fixed byte order helpers for descriptor fields.
//!
//! ISO9660 stores most numbers twice, little-endian first, big-endian second,
//! so readers on either kind of host can pick the copy they like.

use binrw::{BinRead, BinWrite};
use byteorder::{BigEndian, ByteOrder, LittleEndian};

/// A 32-bit value recorded in both byte orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, BinRead, BinWrite)]
pub struct BothEndian32 {
    #[brw(little)]
    pub lsb: u32,
    #[brw(big)]
    pub msb: u32,
}

impl BothEndian32 {
    pub const fn new(value: u32) -> Self {
        Self {
            lsb: value,
            msb: value,
        }
    }

    /// The value, or `None` when the two copies disagree.
    pub fn get(&self) -> Option<u32> {
        (self.lsb == self.msb).then_some(self.lsb)
    }
}

/// A 16-bit value recorded in both byte orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, BinRead, BinWrite)]
pub struct BothEndian16 {
    #[brw(little)]
    pub lsb: u16,
    #[brw(big)]
    pub msb: u16,
}

impl BothEndian16 {
    pub const fn new(value: u16) -> Self {
        Self {
            lsb: value,
            msb: value,
        }
    }

    pub fn get(&self) -> Option<u16> {
        (self.lsb == self.msb).then_some(self.lsb)
    }
}

pub fn read_u32_le(buf: &[u8], offset: usize) -> u32 {
    LittleEndian::read_u32(&buf[offset..offset + 4])
}

#[cfg(test)]
pub(crate) fn read_u32_be(buf: &[u8], offset: usize) -> u32 {
    BigEndian::read_u32(&buf[offset..offset + 4])
}

#[cfg(test)]
pub(crate) fn read_u16_le(buf: &[u8], offset: usize) -> u16 {
    LittleEndian::read_u16(&buf[offset..offset + 2])
}

#[cfg(test)]
pub(crate) fn read_u16_be(buf: &[u8], offset: usize) -> u16 {
    BigEndian::read_u16(&buf[offset..offset + 2])
}

pub fn write_u32_be(buf: &mut [u8], offset: usize, value: u32) {
    BigEndian::write_u32(&mut buf[offset..offset + 4], value);
}

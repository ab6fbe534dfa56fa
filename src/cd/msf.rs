use crate::cd::{FRAMES_PER_SECOND, LEAD_IN_FRAMES, SECONDS_PER_MINUTE};

/// Minute/second/frame disc address.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Msf {
    pub minutes: u8,
    pub seconds: u8,
    pub frames: u8,
}

impl Msf {
    /// Converts a logical sector number, adding the 150 frame lead-in.
    ///
    /// Minutes wrap past 255 the same way the host's `u8` fields do; DVD sized
    /// addresses never produce meaningful timecodes anyway.
    pub fn from_lsn(lsn: u32) -> Self {
        let total = lsn.wrapping_add(LEAD_IN_FRAMES);
        let frames_per_minute = FRAMES_PER_SECOND * SECONDS_PER_MINUTE;

        Self {
            minutes: (total / frames_per_minute) as u8,
            seconds: ((total / FRAMES_PER_SECOND) % SECONDS_PER_MINUTE) as u8,
            frames: (total % FRAMES_PER_SECOND) as u8,
        }
    }

    /// Decodes a BCD timecode as found in a sub-channel Q record.
    pub fn from_bcd([minutes, seconds, frames]: [u8; 3]) -> Self {
        Self {
            minutes: btoi(minutes),
            seconds: btoi(seconds),
            frames: btoi(frames),
        }
    }

    /// The logical sector number, or `None` for addresses inside the lead-in.
    pub fn to_lsn(&self) -> Option<u32> {
        ((self.minutes as u32 * SECONDS_PER_MINUTE + self.seconds as u32) * FRAMES_PER_SECOND
            + self.frames as u32)
            .checked_sub(LEAD_IN_FRAMES)
    }

    /// The three components, each binary-coded decimal.
    pub fn to_bcd(&self) -> [u8; 3] {
        [itob(self.minutes), itob(self.seconds), itob(self.frames)]
    }
}

/// Integer to binary-coded decimal, one digit per nibble.
pub const fn itob(value: u8) -> u8 {
    ((value / 10) << 4) | (value % 10)
}

/// Binary-coded decimal back to an integer.
pub const fn btoi(value: u8) -> u8 {
    (value >> 4) * 10 + (value & 0x0F)
}

//! A CDVD backend that serves a plain directory to a PS2 emulator as if it
//! were a disc in the drive.

pub mod cd;
pub mod device;
pub mod disc;
pub mod error;
pub mod folder;
pub mod iso9660;

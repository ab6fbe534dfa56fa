use crate::cd::ISO_BLOCK_SIZE;
use crate::error::CdvdResult;
use crate::iso9660::SYSTEM_AREA_SECTORS;
use std::fs;
use std::path::{Path, PathBuf};

/// Sectors taken by the synthesized descriptor blocks after the system area.
pub const HEADER_SECTORS: u32 = 2;

pub fn get_all_files(dir_path: &Path) -> CdvdResult<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir_path)? {
        let path = entry?.path();

        if path.is_dir() {
            files.append(&mut get_all_files(&path)?);
        } else {
            files.push(path);
        }
    }

    Ok(files)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    pub len: u64,
}

impl FileEntry {
    pub fn sectors(&self) -> u64 {
        self.len.div_ceil(ISO_BLOCK_SIZE as u64)
    }
}

/// The files under a disc root and the sector count they add up to.
#[derive(Debug, Clone)]
pub struct DirectoryImage {
    pub root: PathBuf,
    pub files: Vec<FileEntry>,
}

impl DirectoryImage {
    pub fn scan(root: &Path) -> CdvdResult<Self> {
        let mut files = get_all_files(root)?
            .into_iter()
            .map(|path| -> CdvdResult<FileEntry> {
                let len = fs::metadata(&path)?.len();
                Ok(FileEntry { path, len })
            })
            .collect::<CdvdResult<Vec<_>>>()?;
        files.sort_by(|a, b| a.path.cmp(&b.path));

        Ok(Self {
            root: root.to_path_buf(),
            files,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// System area, descriptor blocks, then every file rounded up to whole
    /// blocks. Saturates at `u32::MAX` sectors.
    pub fn block_count(&self) -> u32 {
        let data: u64 = self.files.iter().map(FileEntry::sectors).sum();
        let total = (SYSTEM_AREA_SECTORS + HEADER_SECTORS) as u64 + data;
        u32::try_from(total).unwrap_or(u32::MAX)
    }
}

use crate::{content::content_for, manifest::Manifest};
use std::path::PathBuf;

/// Represents a virtual file or directory entry to be created in memory before writing to disk.
#[derive(Debug, Clone)]
pub struct VirtualEntry {
    /// The target path, relative to the destination root.
    pub destination: PathBuf,
    /// Contents to be written if the entry represents a file.
    pub content: Option<String>,
    /// Indicates whether this entry is a file (`true`) or a directory (`false`).
    pub is_file: bool,
}
/// Represents a virtual file system composed of multiple [`VirtualEntry`] values.
///
/// Entries keep manifest order: each directory is immediately followed by its files, and
/// root files carry bare file names.
#[derive(Debug, Clone, Default)]
pub struct VirtualFS {
    pub entries: Vec<VirtualEntry>,
}
impl VirtualFS {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Stages every directory and file listed in the [`Manifest`]. No I/O is performed.
    pub fn from_manifest(manifest: &Manifest) -> Self {
        let mut vfs = VirtualFS::new();

        for (directory, files) in manifest.entries() {
            if !directory.is_root() {
                log::debug!("staging dir: {}", directory.as_str());
                vfs.entries.push(VirtualEntry {
                    destination: PathBuf::from(directory.as_str()),
                    content: None,
                    is_file: false,
                });
            }

            for file in files {
                let destination = directory.join(file);
                log::debug!("staging file: {}", destination.display());
                vfs.entries.push(VirtualEntry {
                    destination,
                    content: Some(content_for(file)),
                    is_file: true,
                });
            }
        }

        vfs
    }

    #[cfg(test)]
    pub fn directories(&self) -> impl Iterator<Item = &VirtualEntry> {
        self.entries.iter().filter(|e| !e.is_file)
    }

    #[cfg(test)]
    pub fn files(&self) -> impl Iterator<Item = &VirtualEntry> {
        self.entries.iter().filter(|e| e.is_file)
    }
}

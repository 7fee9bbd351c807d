use crate::{
    manifest::{self, Manifest},
    scaffold::{self, apply_vfs, ScaffoldReport},
    vfs::VirtualFS,
};
use colored::Colorize;
use std::path::Path;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum NoteCamError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Manifest(#[from] manifest::ManifestError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Scaffold(#[from] scaffold::ScaffoldError),
}

/// Creates the NoteCam project skeleton under `destination`.
///
/// Existing files at the target paths are overwritten; unrelated files are left alone.
///
/// # Errors
///
/// Returns a [`NoteCamError`] if:
///
/// - The embedded manifest cannot be parsed.
/// - A directory or file cannot be created or written to. Whatever was created before the
///   failure stays on disk, and the completion banner is not printed.
pub fn create_structure<P: AsRef<Path>>(destination: P) -> Result<ScaffoldReport, NoteCamError> {
    let destination = destination.as_ref();

    let manifest = Manifest::builtin()?;

    let vfs = VirtualFS::from_manifest(&manifest);

    log::debug!("staged {} entries", vfs.entries.len());

    println!("{}", "Creating the NoteCam project structure...".bold());

    let report = apply_vfs(&vfs, destination)?;

    log::debug!(
        "{} directories and {} files written under {}",
        report.directories,
        report.files,
        destination.display()
    );

    println!("{}", "Structure created successfully!".bold().green());

    Ok(report)
}

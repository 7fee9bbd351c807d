use crate::{
    errors::{FileOperation, IoError},
    vfs::{VirtualEntry, VirtualFS},
};
use colored::Colorize;
use miette::Diagnostic;
use std::{fs, path::Path};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ScaffoldError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Io(#[from] IoError),
}

/// Counts of what a run created or overwrote.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub directories: usize,
    pub files: usize,
}

/// Materializes `vfs` under `destination_root`, entry by entry, in staging order.
///
/// Directories are created with their parents and tolerate already existing. Files are
/// created or truncated. Nothing that was written is undone when a later step fails.
///
/// # Errors
///
/// Returns the first [`IoError`] raised by the filesystem, wrapped in a [`ScaffoldError`].
pub fn apply_vfs(
    vfs: &VirtualFS,
    destination_root: &Path,
) -> Result<ScaffoldReport, ScaffoldError> {
    let mut report = ScaffoldReport::default();

    // no-op for the current directory
    fs::create_dir_all(destination_root).map_err(|error| {
        IoError::new(FileOperation::Mkdir, destination_root.to_path_buf(), error)
    })?;

    for entry in &vfs.entries {
        if entry.is_file {
            write_file(destination_root, entry)?;
            report.files += 1;
        } else {
            create_directory(destination_root, entry)?;
            report.directories += 1;
        }
    }

    Ok(report)
}

fn create_directory(root: &Path, entry: &VirtualEntry) -> Result<(), ScaffoldError> {
    let path = root.join(&entry.destination);

    fs::create_dir_all(&path)
        .map_err(|error| IoError::new(FileOperation::Mkdir, path.clone(), error))?;

    log::debug!("created dir: {}", path.display());
    println!("{} {}/", "create".blue(), entry.destination.display());

    Ok(())
}

fn write_file(root: &Path, entry: &VirtualEntry) -> Result<(), ScaffoldError> {
    let path = root.join(&entry.destination);
    let contents = entry.content.as_deref().unwrap_or_default();

    fs::write(&path, contents)
        .map_err(|error| IoError::new(FileOperation::Write, path.clone(), error))?;

    log::debug!("wrote {} bytes to: {}", contents.len(), path.display());
    println!("{} {}", "create".green(), entry.destination.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::Manifest;

    fn staged() -> VirtualFS {
        let manifest = Manifest::builtin().expect("embedded manifest parses");
        VirtualFS::from_manifest(&manifest)
    }

    #[test]
    fn applies_every_entry() {
        let dir = tempfile::tempdir().expect("tempdir");

        let report = apply_vfs(&staged(), dir.path()).expect("scaffold succeeds");

        assert_eq!(
            report,
            ScaffoldReport {
                directories: 3,
                files: 23
            }
        );
        assert!(dir.path().join("utils/notifications.js").is_file());
        assert!(dir.path().join(".gitignore").is_file());
    }

    #[test]
    fn rerun_overwrites_instead_of_appending() {
        let dir = tempfile::tempdir().expect("tempdir");
        let vfs = staged();

        apply_vfs(&vfs, dir.path()).expect("first run");
        fs::write(dir.path().join("js/auth.js"), "edited by hand\n").expect("edit");
        apply_vfs(&vfs, dir.path()).expect("second run");

        let auth = fs::read_to_string(dir.path().join("js/auth.js")).expect("read");
        assert_eq!(auth, "// file auth.js\n");
    }

    #[test]
    fn last_duplicate_write_wins() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut vfs = VirtualFS::new();
        for content in ["first", "second"] {
            vfs.entries.push(VirtualEntry {
                destination: "twice.txt".into(),
                content: Some(content.to_string()),
                is_file: true,
            });
        }

        let report = apply_vfs(&vfs, dir.path()).expect("scaffold succeeds");

        assert_eq!(report.files, 2);
        let written = fs::read_to_string(dir.path().join("twice.txt")).expect("read");
        assert_eq!(written, "second");
    }

    #[test]
    fn stops_at_first_failure() {
        let dir = tempfile::tempdir().expect("tempdir");
        // a plain file where the `js` directory should go
        fs::write(dir.path().join("js"), "").expect("blocker");

        let result = apply_vfs(&staged(), dir.path());

        match result {
            Err(ScaffoldError::Io(IoError {
                operation: FileOperation::Mkdir,
                path,
                ..
            })) => assert_eq!(path, dir.path().join("js")),
            other => panic!("expected mkdir failure, got {:?}", other),
        }
        // css came before js and was written, utils came after and was not
        assert!(dir.path().join("css/login.css").is_file());
        assert!(!dir.path().join("utils").exists());
    }

    #[test]
    fn io_failure_keeps_its_diagnostic_code_and_help() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("css"), "").expect("blocker");

        let error = apply_vfs(&staged(), dir.path()).expect_err("mkdir fails");

        assert_eq!(
            error.code().map(|code| code.to_string()).as_deref(),
            Some("notecam::io")
        );
        assert!(error.help().is_some());
        assert!(error.to_string().contains("creating a directory"));
    }
}

//! # Project Merge
//!
//! Copies the user's project into the extracted template and installs the
//! entry script under the name the template's launcher expects.
//!
//! Every merge is a clean copy: the destination
//! (`<template>/pygame-ios/app/pygame-ios`) is deleted first, so files removed
//! from the project do not linger in the app bundle. Entries named like the
//! template directory (or its staging directory) are skipped at any depth,
//! which keeps the template from being copied into itself when it lives inside
//! the project.

use std::fs;
use std::path::{Component, Path, PathBuf};

use log::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config;
use crate::defaults;
use crate::error::{Error, Result};

/// Summary of a completed merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    /// Directory the project was copied into.
    pub destination: PathBuf,
    /// Number of regular files copied.
    pub files_copied: usize,
    /// Location of the renamed entry script.
    pub main_script: PathBuf,
}

/// Copies `project_dir` into `template_dir` and renames `entry_script` to
/// `__main__.py`.
///
/// `entry_script` is relative to `project_dir`. An absolute path is accepted
/// when it points inside the project directory.
pub fn merge_project(
    project_dir: &Path,
    template_dir: &Path,
    entry_script: &Path,
) -> Result<MergeReport> {
    let entry = relative_entry_script(project_dir, entry_script)?;
    let destination = config::app_dir(template_dir);

    if destination.exists() {
        debug!("removing previous copy at {}", destination.display());
        fs::remove_dir_all(&destination).map_err(|e| Error::Filesystem {
            message: format!("Failed to remove '{}': {}", destination.display(), e),
        })?;
    }
    create_dir(&destination)?;

    let files_copied = copy_tree(project_dir, &destination, template_dir)?;
    debug!(
        "copied {} files from {} to {}",
        files_copied,
        project_dir.display(),
        destination.display()
    );

    let copied_entry = destination.join(&entry);
    if !copied_entry.is_file() {
        return Err(Error::EntryScriptMissing { path: copied_entry });
    }

    let main_script = destination.join(defaults::CANONICAL_ENTRY);
    fs::rename(&copied_entry, &main_script).map_err(|e| Error::Filesystem {
        message: format!(
            "Failed to rename '{}' to '{}': {}",
            copied_entry.display(),
            main_script.display(),
            e
        ),
    })?;

    Ok(MergeReport {
        destination,
        files_copied,
        main_script,
    })
}

/// Normalizes the entry script argument to a path relative to the project.
pub fn relative_entry_script(project_dir: &Path, entry_script: &Path) -> Result<PathBuf> {
    let relative = if entry_script.is_absolute() {
        strip_project_prefix(project_dir, entry_script)?
    } else {
        entry_script.to_path_buf()
    };

    let mut normalized = PathBuf::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => normalized.push(part),
            Component::CurDir => {}
            _ => {
                return Err(Error::Path {
                    message: format!(
                        "entry script '{}' must stay inside the project directory",
                        entry_script.display()
                    ),
                })
            }
        }
    }

    if normalized.as_os_str().is_empty() {
        return Err(Error::Path {
            message: "entry script path is empty".to_string(),
        });
    }
    Ok(normalized)
}

fn strip_project_prefix(project_dir: &Path, entry_script: &Path) -> Result<PathBuf> {
    if let Ok(stripped) = entry_script.strip_prefix(project_dir) {
        return Ok(stripped.to_path_buf());
    }

    // Compare resolved paths so a relative project dir or a symlinked
    // prefix still matches.
    let project = fs::canonicalize(project_dir)?;
    let entry = fs::canonicalize(entry_script).map_err(|_| Error::EntryScriptMissing {
        path: entry_script.to_path_buf(),
    })?;
    entry
        .strip_prefix(&project)
        .map(Path::to_path_buf)
        .map_err(|_| Error::Path {
            message: format!(
                "entry script '{}' is not inside project directory '{}'",
                entry_script.display(),
                project_dir.display()
            ),
        })
}

fn is_excluded(entry: &DirEntry, template_dir: &Path) -> bool {
    let name = entry.file_name();
    name == defaults::TEMPLATE_FOLDER
        || name == defaults::STAGING_FOLDER
        || entry.path() == template_dir
}

fn copy_tree(source: &Path, destination: &Path, template_dir: &Path) -> Result<usize> {
    let mut copied = 0;
    let walker = WalkDir::new(source)
        .min_depth(1)
        .into_iter()
        .filter_entry(|entry| !is_excluded(entry, template_dir));

    for entry in walker {
        let entry = entry.map_err(|e| Error::Filesystem {
            message: format!("Failed to read '{}': {}", source.display(), e),
        })?;
        let relative = entry.path().strip_prefix(source).map_err(|_| Error::Path {
            message: format!(
                "'{}' is not inside '{}'",
                entry.path().display(),
                source.display()
            ),
        })?;
        let target = destination.join(relative);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            create_dir(&target)?;
        } else if file_type.is_file() {
            copy_file(entry.path(), &target)?;
            copied += 1;
        } else if file_type.is_symlink() {
            match fs::metadata(entry.path()) {
                Ok(metadata) if metadata.is_file() => {
                    copy_file(entry.path(), &target)?;
                    copied += 1;
                }
                _ => warn!("skipping symlink {}", entry.path().display()),
            }
        }
    }

    Ok(copied)
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| Error::Filesystem {
        message: format!("Failed to create directory '{}': {}", path.display(), e),
    })
}

fn copy_file(from: &Path, to: &Path) -> Result<()> {
    fs::copy(from, to).map_err(|e| Error::Filesystem {
        message: format!(
            "Failed to copy '{}' to '{}': {}",
            from.display(),
            to.display(),
            e
        ),
    })?;
    Ok(())
}

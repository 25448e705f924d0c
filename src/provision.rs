//! # Template Provisioning
//!
//! Obtains the Xcode template and materializes it at
//! `<project>/pygame-ios-template`.
//!
//! ## Process
//!
//! 1.  **Skip if present**: an existing template directory is never touched,
//!     whatever version was requested. Delete it to force a fresh template.
//! 2.  **Resolve the archive**: either download it from the release feed
//!     (remote mode) or open a zip file on disk (local mode, no network).
//! 3.  **Extract**: the archive is unpacked into a staging directory next to
//!     the final location, a completion marker is written, and the staging
//!     directory is renamed into place. A failed run therefore never leaves
//!     a half-extracted template where the next run would mistake it for a
//!     complete one.
//!
//! A version without a published template is not an error: it is reported
//! as [`ProvisionOutcome::UnsupportedVersion`], along with the versions the
//! feed does support.

use std::fs::{self, File};
use std::io::{Cursor, Read, Seek};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use zip::ZipArchive;

use crate::config::{self, Endpoints, TemplateSource};
use crate::defaults;
use crate::error::{Error, Result};
use crate::feed::{DownloadResponse, HttpReleaseFeed, ReleaseFeed};

/// What a provisioning run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisionOutcome {
    /// The template directory already existed and was left alone.
    ///
    /// `complete` is false when the directory lacks the completion marker,
    /// i.e. it predates the marker or was produced by an interrupted run.
    AlreadyPresent { template_dir: PathBuf, complete: bool },
    /// The template was extracted into `template_dir`.
    Provisioned { template_dir: PathBuf, entries: usize },
    /// The feed has no template for the requested version.
    ///
    /// `supported` is `None` when the supported-version list could not be
    /// fetched either.
    UnsupportedVersion {
        requested: String,
        supported: Option<Vec<String>>,
    },
}

/// Progress notifications emitted while provisioning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage<'a> {
    Downloading { version: &'a str },
    Opening { archive: &'a Path },
    Extracting,
}

/// Provisions templates using a [`ReleaseFeed`] for remote sources.
pub struct Provisioner {
    feed: Box<dyn ReleaseFeed>,
}

impl Provisioner {
    /// Creates a provisioner that downloads from `endpoints` over HTTP.
    pub fn new(endpoints: Endpoints) -> Self {
        Self {
            feed: Box::new(HttpReleaseFeed::new(endpoints)),
        }
    }

    /// Creates a provisioner with a custom feed implementation.
    pub fn with_feed(feed: Box<dyn ReleaseFeed>) -> Self {
        Self { feed }
    }

    /// Provisions the template for `project_dir` without progress reporting.
    pub fn provision(&self, project_dir: &Path, source: &TemplateSource) -> Result<ProvisionOutcome> {
        self.provision_with_progress(project_dir, source, |_| {})
    }

    /// Provisions the template for `project_dir`, calling `on_stage` as the
    /// run moves between download, open and extraction.
    pub fn provision_with_progress<F>(
        &self,
        project_dir: &Path,
        source: &TemplateSource,
        mut on_stage: F,
    ) -> Result<ProvisionOutcome>
    where
        F: FnMut(Stage<'_>),
    {
        let template_dir = config::template_dir(project_dir);

        if template_dir.is_dir() {
            let complete = template_dir.join(defaults::COMPLETION_MARKER).is_file();
            if !complete {
                warn!(
                    "{} has no completion marker and may be incomplete; delete it to re-provision",
                    template_dir.display()
                );
            }
            debug!("template already present at {}", template_dir.display());
            return Ok(ProvisionOutcome::AlreadyPresent {
                template_dir,
                complete,
            });
        }

        let entries = match source {
            TemplateSource::Remote { version } => {
                let tag = self.feed.latest_tag()?;
                on_stage(Stage::Downloading { version });

                match self.feed.download_archive(&tag, version)? {
                    DownloadResponse::Archive(bytes) => {
                        on_stage(Stage::Extracting);
                        let origin = PathBuf::from(defaults::archive_name(version));
                        install(Cursor::new(bytes), &origin, project_dir, source)?
                    }
                    DownloadResponse::NotFound { status } => {
                        info!(
                            "no template published for pygame-ce {} (status {})",
                            version, status
                        );
                        let supported = match self.feed.supported_versions() {
                            Ok(versions) => Some(versions),
                            Err(e) => {
                                warn!("failed to fetch supported versions: {}", e);
                                None
                            }
                        };
                        return Ok(ProvisionOutcome::UnsupportedVersion {
                            requested: version.clone(),
                            supported,
                        });
                    }
                }
            }
            TemplateSource::Local { archive } => {
                on_stage(Stage::Opening { archive });
                let file = File::open(archive).map_err(|e| Error::Archive {
                    path: archive.clone(),
                    message: e.to_string(),
                })?;
                on_stage(Stage::Extracting);
                install(file, archive, project_dir, source)?
            }
        };

        info!(
            "extracted {} archive entries into {}",
            entries,
            template_dir.display()
        );
        Ok(ProvisionOutcome::Provisioned {
            template_dir,
            entries,
        })
    }
}

/// Extracts `reader` into a staging directory and moves it into place.
fn install<R: Read + Seek>(
    reader: R,
    origin: &Path,
    project_dir: &Path,
    source: &TemplateSource,
) -> Result<usize> {
    let staging = project_dir.join(defaults::STAGING_FOLDER);
    let template_dir = config::template_dir(project_dir);

    if staging.exists() {
        debug!("removing stale staging directory {}", staging.display());
        fs::remove_dir_all(&staging).map_err(|e| Error::Filesystem {
            message: format!("Failed to remove '{}': {}", staging.display(), e),
        })?;
    }

    let entries = match unpack(reader, origin, &staging, source) {
        Ok(entries) => entries,
        Err(e) => {
            if staging.exists() {
                if let Err(cleanup) = fs::remove_dir_all(&staging) {
                    warn!("failed to clean up {}: {}", staging.display(), cleanup);
                }
            }
            return Err(e);
        }
    };

    fs::rename(&staging, &template_dir).map_err(|e| Error::Filesystem {
        message: format!(
            "Failed to move '{}' to '{}': {}",
            staging.display(),
            template_dir.display(),
            e
        ),
    })?;

    Ok(entries)
}

fn unpack<R: Read + Seek>(
    reader: R,
    origin: &Path,
    staging: &Path,
    source: &TemplateSource,
) -> Result<usize> {
    let mut archive = ZipArchive::new(reader).map_err(|e| Error::Archive {
        path: origin.to_path_buf(),
        message: e.to_string(),
    })?;
    let entries = archive.len();

    fs::create_dir_all(staging).map_err(|e| Error::Filesystem {
        message: format!("Failed to create directory '{}': {}", staging.display(), e),
    })?;
    archive.extract(staging)?;

    let marker = format!(
        "source: {}\nwritten-by: pygame-ios {}\n",
        source.describe(),
        env!("CARGO_PKG_VERSION")
    );
    fs::write(staging.join(defaults::COMPLETION_MARKER), marker)?;

    Ok(entries)
}

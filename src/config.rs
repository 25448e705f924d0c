//! # Run Configuration
//!
//! A [`Config`] describes one invocation of the tool: where the project lives,
//! which script becomes the entry point, and where the Xcode template comes
//! from. It is built once by the command-line layer and passed explicitly to
//! the provisioner and the merger; nothing in the library reads process
//! arguments or environment variables directly.

use std::path::{Path, PathBuf};

use crate::defaults;

/// Where the template archive is obtained from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Download the template built for this pygame-ce version.
    Remote { version: String },
    /// Extract a template archive already present on disk.
    Local { archive: PathBuf },
}

impl TemplateSource {
    /// Human-readable description used in progress messages.
    pub fn describe(&self) -> String {
        match self {
            TemplateSource::Remote { version } => {
                format!("pygame-ce {}", defaults::display_version(version))
            }
            TemplateSource::Local { archive } => archive.display().to_string(),
        }
    }
}

/// URLs of the release feed consulted in remote mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Release index returning JSON with a `tag_name` field.
    pub release_api: String,
    /// Base URL that `<tag>/<archive name>` is appended to.
    pub release_download: String,
    /// JSON document with a `supportedVersions` list.
    pub supported_versions: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            release_api: defaults::RELEASE_API_URL.to_string(),
            release_download: defaults::RELEASE_DOWNLOAD_URL.to_string(),
            supported_versions: defaults::SUPPORTED_VERSIONS_URL.to_string(),
        }
    }
}

/// Everything a single run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub project_dir: PathBuf,
    /// Entry script path, relative to `project_dir`.
    pub entry_script: PathBuf,
    pub source: TemplateSource,
    pub endpoints: Endpoints,
}

impl Config {
    /// Directory the template is extracted into.
    pub fn template_dir(&self) -> PathBuf {
        template_dir(&self.project_dir)
    }
}

/// Returns `<project_dir>/pygame-ios-template`.
pub fn template_dir(project_dir: &Path) -> PathBuf {
    project_dir.join(defaults::TEMPLATE_FOLDER)
}

/// Returns the directory inside a template that receives the project files.
pub fn app_dir(template_dir: &Path) -> PathBuf {
    defaults::APP_SUBPATH
        .iter()
        .fold(template_dir.to_path_buf(), |path, segment| path.join(segment))
}

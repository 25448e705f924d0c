//! # Release Feed Access
//!
//! The templates are published as release assets. Three documents are
//! involved in remote provisioning:
//!
//! - the release index, whose `tag_name` names the latest template release;
//! - the archive itself, at `<download base>/<tag>/pygame-ios-template-<version>.zip`;
//! - the supported-versions document, consulted only when the archive for the
//!   requested version does not exist.
//!
//! Access goes through the [`ReleaseFeed`] trait so the provisioner can be
//! exercised without network access. [`HttpReleaseFeed`] is the real
//! implementation and performs blocking requests with `ureq`.

use log::debug;
use serde::Deserialize;
use ureq::Agent;
use url::Url;

use crate::config::Endpoints;
use crate::defaults;
use crate::error::{Error, Result};

const USER_AGENT: &str = concat!("pygame-ios/", env!("CARGO_PKG_VERSION"));

/// Result of asking the feed for a template archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadResponse {
    /// The archive bytes.
    Archive(Vec<u8>),
    /// The server answered with a non-success status; the version has no
    /// published template.
    NotFound { status: u16 },
}

/// Trait for release feed operations - allows mocking in tests
pub trait ReleaseFeed {
    /// Returns the tag of the latest published template release.
    fn latest_tag(&self) -> Result<String>;

    /// Downloads the template archive for `version` from release `tag`.
    ///
    /// A non-success HTTP status is reported as [`DownloadResponse::NotFound`];
    /// only transport failures are errors.
    fn download_archive(&self, tag: &str, version: &str) -> Result<DownloadResponse>;

    /// Lists the pygame-ce versions a template is published for.
    fn supported_versions(&self) -> Result<Vec<String>>;
}

#[derive(Deserialize)]
struct LatestRelease {
    tag_name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SupportedVersions {
    supported_versions: Vec<String>,
}

/// Extracts the release tag from a release index document.
pub fn parse_latest_tag(json: &str) -> Result<String> {
    let release: LatestRelease = serde_json::from_str(json)?;
    Ok(release.tag_name)
}

/// Extracts the version list from a supported-versions document.
pub fn parse_supported_versions(json: &str) -> Result<Vec<String>> {
    let versions: SupportedVersions = serde_json::from_str(json)?;
    Ok(versions.supported_versions)
}

/// Builds the download URL of the archive for `version` in release `tag`.
pub fn download_url(base: &str, tag: &str, version: &str) -> Result<Url> {
    let base = if base.ends_with('/') {
        Url::parse(base)?
    } else {
        Url::parse(&format!("{}/", base))?
    };
    let release = base.join(&format!("{}/", tag))?;
    Ok(release.join(&defaults::archive_name(version))?)
}

/// The default implementation of `ReleaseFeed`, which talks HTTP(S) to the
/// configured endpoints.
pub struct HttpReleaseFeed {
    agent: Agent,
    endpoints: Endpoints,
}

impl HttpReleaseFeed {
    pub fn new(endpoints: Endpoints) -> Self {
        Self {
            agent: Agent::new_with_defaults(),
            endpoints,
        }
    }

    fn get_text(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);
        let response = self
            .agent
            .get(url)
            .header("User-Agent", USER_AGENT)
            .call()
            .map_err(|e| network_error(url, e))?;

        response
            .into_body()
            .read_to_string()
            .map_err(|e| network_error(url, e))
    }
}

impl ReleaseFeed for HttpReleaseFeed {
    fn latest_tag(&self) -> Result<String> {
        let body = self.get_text(&self.endpoints.release_api)?;
        let tag = parse_latest_tag(&body).map_err(|e| Error::Network {
            url: self.endpoints.release_api.clone(),
            message: format!("unexpected release index response: {}", e),
        })?;
        debug!("latest template release: {}", tag);
        Ok(tag)
    }

    fn download_archive(&self, tag: &str, version: &str) -> Result<DownloadResponse> {
        let url = download_url(&self.endpoints.release_download, tag, version)?;
        debug!("GET {}", url);

        let response = match self
            .agent
            .get(url.as_str())
            .header("User-Agent", USER_AGENT)
            .call()
        {
            Ok(response) => response,
            Err(ureq::Error::StatusCode(status)) => {
                debug!("{} answered with status {}", url, status);
                return Ok(DownloadResponse::NotFound { status });
            }
            Err(e) => return Err(network_error(url.as_str(), e)),
        };

        let bytes = response
            .into_body()
            .with_config()
            .limit(u64::MAX)
            .read_to_vec()
            .map_err(|e| network_error(url.as_str(), e))?;
        debug!("downloaded {} bytes", bytes.len());

        Ok(DownloadResponse::Archive(bytes))
    }

    fn supported_versions(&self) -> Result<Vec<String>> {
        let body = self.get_text(&self.endpoints.supported_versions)?;
        parse_supported_versions(&body)
    }
}

fn network_error(url: &str, error: ureq::Error) -> Error {
    let message = match error {
        ureq::Error::StatusCode(status) => format!("HTTP status {}", status),
        other => other.to_string(),
    };
    Error::Network {
        url: url.to_string(),
        message,
    }
}

//! Default values for pygame-ios.
//!
//! This module centralizes the names and endpoints that the provisioner,
//! the merger and the CLI must agree on.

/// Name of the template directory created inside the project directory.
pub const TEMPLATE_FOLDER: &str = "pygame-ios-template";

/// Staging directory used while an archive is being extracted.
pub const STAGING_FOLDER: &str = ".pygame-ios-template.partial";

/// Marker written into the template directory once extraction completed.
pub const COMPLETION_MARKER: &str = ".pygame-ios-complete";

/// Path inside the template directory where the project files are copied.
pub const APP_SUBPATH: &[&str] = &["pygame-ios", "app", "pygame-ios"];

/// File name the template's launcher runs.
pub const CANONICAL_ENTRY: &str = "__main__.py";

/// Release index returning the latest published template release.
pub const RELEASE_API_URL: &str =
    "https://api.github.com/repos/seekerluke/pygame-ios-templates/releases/latest";

/// Base URL for release assets; `<tag>/<archive>` is appended.
pub const RELEASE_DOWNLOAD_URL: &str =
    "https://github.com/seekerluke/pygame-ios-templates/releases/download/";

/// Document listing the pygame-ce versions the templates are built for.
pub const SUPPORTED_VERSIONS_URL: &str = "https://raw.githubusercontent.com/seekerluke/pygame-ios-templates/refs/heads/main/patches/pygame-ce.json";

/// Returns the archive file name published for a pygame-ce version.
///
/// The version is used as given: `v2.5.3` names a different asset than
/// `2.5.3`, and the feed publishes only the bare form.
pub fn archive_name(version: &str) -> String {
    format!("pygame-ios-template-{}.zip", version)
}

/// Form of a version shown in messages, e.g. `v2.5.3`.
pub fn display_version(version: &str) -> String {
    format!("v{}", version)
}

//! CLI argument parsing and validation

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::commands;
use pygame_ios::config::{Config, Endpoints, TemplateSource};
use pygame_ios::defaults;
use pygame_ios::output::OutputConfig;

/// Printed when the required positional arguments are missing.
pub const USAGE: &str =
    "Usage: pygame-ios project_folder main_python_script pygame_ce_version [local_template_path]";

/// Package a pygame-ce project with the iOS Xcode template
///
/// The positional arguments are validated by the tool itself: when any
/// required one is missing, a usage line is printed and nothing else happens.
#[derive(Parser, Debug)]
#[command(name = "pygame-ios")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the project directory
    #[arg(value_name = "PROJECT_FOLDER")]
    pub project_folder: Option<PathBuf>,

    /// Entry script, relative to the project directory
    #[arg(value_name = "MAIN_PYTHON_SCRIPT")]
    pub main_script: Option<PathBuf>,

    /// pygame-ce version the template must be built for
    #[arg(value_name = "PYGAME_CE_VERSION")]
    pub pygame_ce_version: Option<String>,

    /// Local template archive to extract instead of downloading
    #[arg(value_name = "LOCAL_TEMPLATE_PATH")]
    pub local_template_path: Option<PathBuf>,

    /// Local template archive (alternative to the fourth positional argument)
    #[arg(long, value_name = "PATH", env = "PYGAME_IOS_TEMPLATE")]
    pub template: Option<PathBuf>,

    /// Release index returning the latest template release
    #[arg(long, value_name = "URL", env = "PYGAME_IOS_RELEASE_API", default_value = defaults::RELEASE_API_URL)]
    pub release_api: String,

    /// Base URL of the template release downloads
    #[arg(long, value_name = "URL", env = "PYGAME_IOS_DOWNLOAD_URL", default_value = defaults::RELEASE_DOWNLOAD_URL)]
    pub download_url: String,

    /// Document listing the supported pygame-ce versions
    #[arg(long, value_name = "URL", env = "PYGAME_IOS_VERSIONS_URL", default_value = defaults::SUPPORTED_VERSIONS_URL)]
    pub versions_url: String,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Colorize output (always, never, auto)
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: String,

    /// Set log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Builds the run configuration, or `None` when required arguments are
    /// missing.
    ///
    /// A local archive (fourth positional or `--template`) takes precedence
    /// over the version, in which case no network access happens.
    pub fn validate(&self) -> Option<Config> {
        let project_dir = self.project_folder.clone()?;
        let entry_script = self.main_script.clone()?;

        let local = self
            .local_template_path
            .clone()
            .or_else(|| self.template.clone());
        let source = match (local, &self.pygame_ce_version) {
            (Some(archive), _) => TemplateSource::Local { archive },
            (None, Some(version)) => TemplateSource::Remote {
                version: version.clone(),
            },
            (None, None) => return None,
        };

        Some(Config {
            project_dir,
            entry_script,
            source,
            endpoints: Endpoints {
                release_api: self.release_api.clone(),
                release_download: self.download_url.clone(),
                supported_versions: self.versions_url.clone(),
            },
        })
    }

    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);
        let output = OutputConfig::from_env_and_flag(&self.color).quiet(self.quiet);

        match self.validate() {
            Some(config) => commands::run::execute(&config, &output),
            None => {
                println!("{}", USAGE);
                Ok(())
            }
        }
    }
}

fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    // A logger may already be installed when running under the test harness.
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

//! Run command implementation
//!
//! Provisions the Xcode template for the project, copies the project into
//! it, and tells the user where to find the result:
//! 1. Template provisioning (download or local archive, skipped if present)
//! 2. Project merge into the template's app directory
//! 3. Completion message
//!
//! An unsupported pygame-ce version ends the run successfully after listing
//! the versions that do have a template.

use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use pygame_ios::config::Config;
use pygame_ios::defaults;
use pygame_ios::merge::merge_project;
use pygame_ios::output::{emoji, OutputConfig};
use pygame_ios::provision::{ProvisionOutcome, Provisioner, Stage};

/// Execute the provision and merge flow
pub fn execute(config: &Config, output: &OutputConfig) -> Result<()> {
    let provisioner = Provisioner::new(config.endpoints.clone());
    execute_with(config, output, &provisioner)
}

/// Execute the flow with the given provisioner
pub fn execute_with(
    config: &Config,
    output: &OutputConfig,
    provisioner: &Provisioner,
) -> Result<()> {
    if !config.project_dir.is_dir() {
        anyhow::bail!(
            "Project folder not found: {}",
            config.project_dir.display()
        );
    }

    let template_dir = config.template_dir();

    let mut progress = Progress::new(output)?;
    let outcome = provisioner
        .provision_with_progress(&config.project_dir, &config.source, |stage| {
            progress.stage(&stage)
        })
        .with_context(|| {
            format!(
                "Failed to provision the Xcode template into {}",
                template_dir.display()
            )
        })?;
    progress.finish();

    match outcome {
        ProvisionOutcome::AlreadyPresent { .. } => {
            progress.line("⏭️ ", "[SKIP]", "pygame-ios template already exists. Skipping.");
        }
        ProvisionOutcome::Provisioned { .. } => {
            progress.line("✅", "[OK]", "Xcode template downloaded successfully.");
        }
        ProvisionOutcome::UnsupportedVersion {
            requested,
            supported,
        } => {
            println!(
                "{} Xcode template for pygame-ce version {} does not exist. It might not be supported yet.",
                emoji(output, "⚠️ ", "[WARN]"),
                defaults::display_version(&requested)
            );
            println!("Supported versions:");
            match supported {
                Some(versions) => {
                    for version in versions {
                        println!("{}", version);
                    }
                }
                None => println!("Failed to fetch supported versions."),
            }
            return Ok(());
        }
    }

    merge_project(&config.project_dir, &template_dir, &config.entry_script)
        .context("Failed to copy project files into the Xcode template")?;
    progress.line("✅", "[OK]", "Copied project files to Xcode template.");

    println!(
        "{} Done! Open the Xcode project under \"{}\" and run the project on your chosen device or simulator.",
        emoji(output, "🎉", "[DONE]"),
        defaults::TEMPLATE_FOLDER
    );
    Ok(())
}

/// Progress reporting: a spinner on terminals, plain lines otherwise.
struct Progress<'a> {
    output: &'a OutputConfig,
    style: ProgressStyle,
    spinner: Option<ProgressBar>,
}

impl<'a> Progress<'a> {
    fn new(output: &'a OutputConfig) -> Result<Self> {
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .context("Failed to set progress style")?;
        Ok(Self {
            output,
            style,
            spinner: None,
        })
    }

    fn stage(&mut self, stage: &Stage<'_>) {
        let message = match stage {
            Stage::Downloading { version } => format!(
                "Downloading Xcode template for pygame-ce {}...",
                defaults::display_version(version)
            ),
            Stage::Opening { archive } => {
                format!("Using local template {}...", archive.display())
            }
            Stage::Extracting => "Extracting...".to_string(),
        };

        if self.output.quiet {
            return;
        }
        if let Some(spinner) = &self.spinner {
            spinner.set_message(message);
        } else if self.output.show_spinner() {
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(self.style.clone());
            spinner.enable_steady_tick(Duration::from_millis(100));
            spinner.set_message(message);
            self.spinner = Some(spinner);
        } else {
            println!("{} {}", emoji(self.output, "📦", "[..]"), message);
        }
    }

    fn line(&mut self, icon: &str, plain: &str, message: &str) {
        self.finish();
        if !self.output.quiet {
            println!("{} {}", emoji(self.output, icon, plain), message);
        }
    }

    fn finish(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

impl Drop for Progress<'_> {
    fn drop(&mut self) {
        self.finish();
    }
}

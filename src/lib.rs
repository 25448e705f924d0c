//! # pygame-ios Library
//!
//! This library provides the functionality behind the `pygame-ios`
//! command-line tool. The tool packages a pygame-ce project as an iOS app
//! by dropping it into a prebuilt Xcode template.
//!
//! ## Quick Example
//!
//! ```no_run
//! use std::path::Path;
//! use pygame_ios::config::{self, Endpoints, TemplateSource};
//! use pygame_ios::merge::merge_project;
//! use pygame_ios::provision::{ProvisionOutcome, Provisioner};
//!
//! # fn main() -> pygame_ios::error::Result<()> {
//! let project = Path::new("my-game");
//! let source = TemplateSource::Remote { version: "2.5.3".to_string() };
//!
//! let provisioner = Provisioner::new(Endpoints::default());
//! let outcome = provisioner.provision(project, &source)?;
//! if let ProvisionOutcome::UnsupportedVersion { .. } = outcome {
//!     return Ok(());
//! }
//! merge_project(project, &config::template_dir(project), Path::new("main.py"))?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Execution Flow
//!
//! 1.  **Provisioning** (`provision`, `feed`): make sure
//!     `<project>/pygame-ios-template` exists, downloading the template for
//!     the requested pygame-ce version or extracting a local archive.
//! 2.  **Merge** (`merge`): copy the project into the template's app
//!     directory and rename the entry script to `__main__.py`.
//!
//! The two steps share nothing but the directory layout described in
//! `config` and `defaults`.
//!
//! The `demo` module holds the logic of the example game that ships with
//! the template.

pub mod config;
pub mod defaults;
pub mod demo;
pub mod error;
pub mod feed;
pub mod merge;
pub mod output;
pub mod provision;

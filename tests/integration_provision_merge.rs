//! Library-level tests of the provision-then-merge pipeline.
//!
//! A scripted release feed stands in for the network so the remote path
//! can be exercised offline.

mod common;
use common::prelude::*;

use std::fs;
use std::sync::{Arc, Mutex};

use pygame_ios::config::{self, TemplateSource};
use pygame_ios::error::Result;
use pygame_ios::feed::{DownloadResponse, ReleaseFeed};
use pygame_ios::merge::merge_project;
use pygame_ios::provision::{ProvisionOutcome, Provisioner};

/// Serves `template_zip()` for one version and 404 for everything else.
struct ScriptedFeed {
    published: &'static str,
    downloads: Arc<Mutex<Vec<String>>>,
}

impl ReleaseFeed for ScriptedFeed {
    fn latest_tag(&self) -> Result<String> {
        Ok("v1.2.0".to_string())
    }

    fn download_archive(&self, tag: &str, version: &str) -> Result<DownloadResponse> {
        self.downloads
            .lock()
            .unwrap()
            .push(format!("{} {}", tag, version));
        if version == self.published {
            Ok(DownloadResponse::Archive(template_zip()))
        } else {
            Ok(DownloadResponse::NotFound { status: 404 })
        }
    }

    fn supported_versions(&self) -> Result<Vec<String>> {
        Ok(vec![self.published.to_string()])
    }
}

fn provisioner(downloads: &Arc<Mutex<Vec<String>>>) -> Provisioner {
    Provisioner::with_feed(Box::new(ScriptedFeed {
        published: "2.5.3",
        downloads: Arc::clone(downloads),
    }))
}

#[test]
fn test_remote_provision_then_merge() {
    let fixture = TestFixture::new().with_project();
    let downloads = Arc::new(Mutex::new(Vec::new()));
    let project = fixture.project_path();

    let outcome = provisioner(&downloads)
        .provision(
            &project,
            &TemplateSource::Remote {
                version: "2.5.3".to_string(),
            },
        )
        .unwrap();
    assert!(matches!(outcome, ProvisionOutcome::Provisioned { entries: 3, .. }));
    assert_eq!(*downloads.lock().unwrap(), vec!["v1.2.0 2.5.3"]);

    let report = merge_project(
        &project,
        &config::template_dir(&project),
        "game.py".as_ref(),
    )
    .unwrap();
    assert_eq!(report.destination, fixture.app_path());
    assert_eq!(report.files_copied, 2);
    assert_eq!(
        fs::read_to_string(report.main_script).unwrap(),
        "import pygame\n"
    );
}

#[test]
fn test_unsupported_version_leaves_project_untouched() {
    let fixture = TestFixture::new().with_project();
    let downloads = Arc::new(Mutex::new(Vec::new()));

    let outcome = provisioner(&downloads)
        .provision(
            &fixture.project_path(),
            &TemplateSource::Remote {
                version: "9.9.9".to_string(),
            },
        )
        .unwrap();

    assert_eq!(
        outcome,
        ProvisionOutcome::UnsupportedVersion {
            requested: "9.9.9".to_string(),
            supported: Some(vec!["2.5.3".to_string()]),
        }
    );
    fixture
        .child("game/pygame-ios-template")
        .assert(predicate::path::missing());
    fixture
        .child("game/.pygame-ios-template.partial")
        .assert(predicate::path::missing());
}

#[test]
fn test_prefixed_version_is_requested_verbatim() {
    let fixture = TestFixture::new().with_project();
    let downloads = Arc::new(Mutex::new(Vec::new()));

    let outcome = provisioner(&downloads)
        .provision(
            &fixture.project_path(),
            &TemplateSource::Remote {
                version: "v2.5.3".to_string(),
            },
        )
        .unwrap();

    assert!(matches!(
        outcome,
        ProvisionOutcome::UnsupportedVersion { ref requested, .. } if requested == "v2.5.3"
    ));
    assert_eq!(*downloads.lock().unwrap(), vec!["v1.2.0 v2.5.3"]);
    fixture
        .child("game/pygame-ios-template")
        .assert(predicate::path::missing());
}

#[test]
fn test_existing_template_skips_any_version() {
    let fixture = TestFixture::new().with_project();
    let downloads = Arc::new(Mutex::new(Vec::new()));
    let provisioner = provisioner(&downloads);
    let project = fixture.project_path();

    provisioner
        .provision(
            &project,
            &TemplateSource::Remote {
                version: "2.5.3".to_string(),
            },
        )
        .unwrap();
    let outcome = provisioner
        .provision(
            &project,
            &TemplateSource::Remote {
                version: "9.9.9".to_string(),
            },
        )
        .unwrap();

    assert!(matches!(
        outcome,
        ProvisionOutcome::AlreadyPresent { complete: true, .. }
    ));
    assert_eq!(downloads.lock().unwrap().len(), 1);
}

#[test]
fn test_merge_output_matches_project_after_rerun() {
    let fixture = TestFixture::new().with_project().with_template_archive();
    let downloads = Arc::new(Mutex::new(Vec::new()));
    let project = fixture.project_path();
    let template_dir = config::template_dir(&project);

    provisioner(&downloads)
        .provision(
            &project,
            &TemplateSource::Local {
                archive: fixture.archive_path(),
            },
        )
        .unwrap();
    assert!(downloads.lock().unwrap().is_empty());

    merge_project(&project, &template_dir, "game.py".as_ref()).unwrap();
    fixture
        .child("game/notes.txt")
        .write_str("level ideas")
        .unwrap();
    fs::remove_dir_all(project.join("assets")).unwrap();

    let report = merge_project(&project, &template_dir, "game.py".as_ref()).unwrap();
    assert_eq!(report.files_copied, 2);

    let app = fixture.app_path();
    assert!(app.join("notes.txt").is_file());
    assert!(!app.join("assets").exists());
    assert!(!app.join("game.py").exists());
    assert!(template_dir.join("pygame-ios/app/main.m").is_file());
}

pub mod outcome;
pub mod task;

pub use outcome::{CheckCode, CheckOutcome, CheckReport, CheckSource};
pub use task::PendingCheck;

use crate::config::CheckConfig;
use crate::error::Result;
use crate::manifest::{self, ManifestGrammar};
use crate::source::{HttpSource, LocalManifest, ReleaseFeed, TextSource};
use std::sync::Arc;
use tracing::{info, warn};

/// Runs update checks in two stages: the vendor release feed first, the
/// component manifest diff as fallback.
///
/// A check never errors; every failure mode maps to a [`CheckCode`] on the
/// returned outcome.
pub struct UpdateChecker {
    config: CheckConfig,
    source: Arc<dyn TextSource>,
}

impl UpdateChecker {
    /// Checker talking to the real network.
    pub fn new(config: CheckConfig) -> Result<Self> {
        let source = HttpSource::new()?;
        Ok(Self::with_source(config, Arc::new(source)))
    }

    /// Checker with an injected transport.
    pub fn with_source(config: CheckConfig, source: Arc<dyn TextSource>) -> Self {
        Self { config, source }
    }

    /// Run one complete check.
    pub fn check(&self) -> CheckOutcome {
        info!("local version is [{}]", self.config.current_version);
        info!("checking for updates");

        let feed_outcome = self.check_release_feed();
        if feed_outcome.is_success() {
            return feed_outcome;
        }

        self.check_manifest_diff()
    }

    /// Release feed stage. Best effort: any failure here is discarded by
    /// `check` in favor of the manifest diff.
    fn check_release_feed(&self) -> CheckOutcome {
        let feed = ReleaseFeed::new(&self.config.feed_owner, &self.config.feed_repo);
        if !feed.is_configured() {
            info!("vendor repository not configured, skipping release feed");
            return CheckOutcome::failed(CheckSource::VendorFeed, CheckCode::NoRemoteUrl);
        }

        let url = feed.latest_release_url();
        info!("downloading release feed [{url}]");
        let raw = self.source.get_text(&url);
        if raw.is_empty() {
            warn!("could not download release feed [{url}]");
            return CheckOutcome::failed(CheckSource::VendorFeed, CheckCode::RemoteManifestFetch);
        }

        let tags = ManifestGrammar::release_feed().extract(&raw);
        let Some(tag) = tags.values().next() else {
            warn!("no release tag found in feed document [{url}]");
            return CheckOutcome::failed(CheckSource::VendorFeed, CheckCode::RemoteManifestParse);
        };

        let local = &self.config.current_version;
        let newer = manifest::is_remote_newer(local, tag);
        if newer {
            info!("local version [{local}] older than release [{tag}], update available");
        } else {
            info!("local version [{local}] not older than release [{tag}]");
        }

        CheckOutcome::succeeded(CheckSource::VendorFeed, newer)
    }

    /// Manifest diff stage: compare the installed component manifest against
    /// the package server's.
    fn check_manifest_diff(&self) -> CheckOutcome {
        let Some(url) = self.config.remote_manifest_url.as_deref() else {
            warn!("no remote manifest URL configured");
            return CheckOutcome::failed(CheckSource::ManifestDiff, CheckCode::NoRemoteUrl);
        };

        let local_raw = LocalManifest::new(&self.config.local_manifest_path).read();
        if local_raw.is_empty() {
            warn!("could not fetch local manifest");
            return CheckOutcome::failed(CheckSource::ManifestDiff, CheckCode::LocalManifestFetch);
        }

        let grammar = ManifestGrammar::component_pairs();
        let local = grammar.extract(&local_raw);
        if local.is_empty() {
            warn!("no components found in local manifest");
            return CheckOutcome::failed(CheckSource::ManifestDiff, CheckCode::LocalManifestParse);
        }

        info!("downloading remote manifest [{url}]");
        let remote_raw = self.source.get_text(url);
        if remote_raw.is_empty() {
            warn!("could not fetch remote manifest [{url}]");
            return CheckOutcome::failed(CheckSource::ManifestDiff, CheckCode::RemoteManifestFetch);
        }

        let remote = grammar.extract(&remote_raw);
        if remote.is_empty() {
            warn!("no components found in remote manifest [{url}]");
            return CheckOutcome::failed(CheckSource::ManifestDiff, CheckCode::RemoteManifestParse);
        }

        let newer = manifest::has_update(&local, &remote);
        CheckOutcome::succeeded(CheckSource::ManifestDiff, newer)
    }
}

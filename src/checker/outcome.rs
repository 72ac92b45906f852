use jiff::Zoned;
use serde::Serialize;
use std::fmt;

/// Which strategy produced a check result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckSource {
    VendorFeed,
    ManifestDiff,
}

impl fmt::Display for CheckSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CheckSource::VendorFeed => "vendor release feed",
            CheckSource::ManifestDiff => "component manifest diff",
        };
        f.write_str(label)
    }
}

/// How a single check ended. Every failure mode gets its own code so callers
/// can tell them apart without parsing log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckCode {
    Succeeded,
    UnspecifiedFailure,
    NoRemoteUrl,
    LocalManifestFetch,
    LocalManifestParse,
    RemoteManifestFetch,
    RemoteManifestParse,
}

impl fmt::Display for CheckCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CheckCode::Succeeded => "succeeded",
            CheckCode::UnspecifiedFailure => "unspecified failure",
            CheckCode::NoRemoteUrl => "no remote manifest URL configured",
            CheckCode::LocalManifestFetch => "local manifest could not be read",
            CheckCode::LocalManifestParse => "local manifest has no components",
            CheckCode::RemoteManifestFetch => "remote manifest could not be fetched",
            CheckCode::RemoteManifestParse => "remote manifest has no components",
        };
        f.write_str(label)
    }
}

/// Outcome of one update check.
///
/// `has_newer_version` is meaningful only when `code` is `Succeeded`; failed
/// outcomes always carry `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub source: CheckSource,
    pub code: CheckCode,
    pub has_newer_version: bool,
}

impl CheckOutcome {
    pub fn succeeded(source: CheckSource, has_newer_version: bool) -> Self {
        Self {
            source,
            code: CheckCode::Succeeded,
            has_newer_version,
        }
    }

    pub fn failed(source: CheckSource, code: CheckCode) -> Self {
        Self {
            source,
            code,
            has_newer_version: false,
        }
    }

    /// True when the check reached a definitive answer.
    pub fn is_success(&self) -> bool {
        self.code == CheckCode::Succeeded
    }

    /// True when the check succeeded and found a newer version.
    pub fn update_available(&self) -> bool {
        self.is_success() && self.has_newer_version
    }
}

/// Machine-readable form of an outcome for `--json` output.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub source: CheckSource,
    pub code: CheckCode,
    pub update_available: bool,
    pub current_version: String,
    pub checked_at: String,
}

impl CheckReport {
    pub fn new(outcome: &CheckOutcome, current_version: &str) -> Self {
        Self {
            source: outcome.source,
            code: outcome.code,
            update_available: outcome.update_available(),
            current_version: current_version.to_string(),
            checked_at: Zoned::now().timestamp().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_available_requires_success() {
        let failed = CheckOutcome {
            source: CheckSource::ManifestDiff,
            code: CheckCode::RemoteManifestFetch,
            has_newer_version: true,
        };
        assert!(!failed.update_available());

        let succeeded = CheckOutcome::succeeded(CheckSource::VendorFeed, true);
        assert!(succeeded.update_available());
    }

    #[test]
    fn failed_outcome_never_reports_newer_version() {
        let outcome = CheckOutcome::failed(CheckSource::ManifestDiff, CheckCode::NoRemoteUrl);
        assert!(!outcome.has_newer_version);
        assert!(!outcome.is_success());
    }

    #[test]
    fn report_serializes_with_snake_case_codes() {
        let outcome = CheckOutcome::failed(CheckSource::ManifestDiff, CheckCode::RemoteManifestFetch);
        let report = CheckReport::new(&outcome, "0.5.0");

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["source"], "manifest_diff");
        assert_eq!(value["code"], "remote_manifest_fetch");
        assert_eq!(value["update_available"], false);
        assert_eq!(value["current_version"], "0.5.0");
        assert!(value["checked_at"].as_str().is_some_and(|s| !s.is_empty()));
    }
}

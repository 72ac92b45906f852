use crate::error::{IfwupError, Result};
use std::path::PathBuf;
use url::Url;

/// Where the installer writes the component manifest, relative to the
/// application directory the binary runs from.
pub const DEFAULT_LOCAL_MANIFEST: &str = "../components.xml";

/// Everything a single update check needs to know.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Version string of the installed application.
    pub current_version: String,
    /// Package-manifest server URL; `None` disables the manifest diff.
    pub remote_manifest_url: Option<String>,
    /// Vendor repository owner for the release feed (empty = not configured).
    pub feed_owner: String,
    /// Vendor repository name for the release feed (empty = not configured).
    pub feed_repo: String,
    /// Location of the installed component manifest.
    pub local_manifest_path: PathBuf,
}

impl CheckConfig {
    /// Configuration with no remote sources and the manifest at the standard
    /// installer location.
    pub fn new(current_version: impl Into<String>) -> Self {
        Self {
            current_version: current_version.into(),
            remote_manifest_url: None,
            feed_owner: String::new(),
            feed_repo: String::new(),
            local_manifest_path: PathBuf::from(DEFAULT_LOCAL_MANIFEST),
        }
    }
}

/// Ensure a manifest URL is absolute and uses a supported scheme.
pub fn validate_manifest_url(url: &str) -> Result<()> {
    let parsed = Url::parse(url)
        .map_err(|_| IfwupError::Config(format!("Invalid manifest URL: {url}")))?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(IfwupError::Config(format!(
            "Unsupported manifest URL scheme: {scheme}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_https_manifest_url() {
        assert!(validate_manifest_url("https://updates.example.org/Updates.xml").is_ok());
    }

    #[test]
    fn accepts_http_manifest_url() {
        assert!(validate_manifest_url("http://updates.example.org/Updates.xml").is_ok());
    }

    #[test]
    fn rejects_invalid_scheme() {
        let result = validate_manifest_url("ftp://updates.example.org/Updates.xml");
        assert!(matches!(result, Err(IfwupError::Config(_))));
    }

    #[test]
    fn rejects_relative_url() {
        assert!(validate_manifest_url("updates/Updates.xml").is_err());
    }

    #[test]
    fn new_config_points_at_installer_manifest() {
        let config = CheckConfig::new("0.5.0");
        assert_eq!(config.current_version, "0.5.0");
        assert_eq!(
            config.local_manifest_path,
            PathBuf::from(DEFAULT_LOCAL_MANIFEST)
        );
        assert!(config.remote_manifest_url.is_none());
        assert!(config.feed_owner.is_empty());
        assert!(config.feed_repo.is_empty());
    }
}

const FEED_API_BASE: &str = "https://api.github.com";

/// Coordinates of the vendor repository whose release feed announces new
/// application versions.
pub struct ReleaseFeed {
    owner: String,
    repo: String,
}

impl ReleaseFeed {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// True when both repository coordinates are set.
    pub fn is_configured(&self) -> bool {
        !self.owner.is_empty() && !self.repo.is_empty()
    }

    /// URL of the latest-release document for the configured repository.
    pub fn latest_release_url(&self) -> String {
        format!(
            "{FEED_API_BASE}/repos/{}/{}/releases/latest",
            self.owner, self.repo
        )
    }
}

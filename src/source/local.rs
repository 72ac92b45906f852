use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Component manifest written by the installer on local disk.
pub struct LocalManifest {
    path: PathBuf,
}

impl LocalManifest {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read the manifest content. A missing file or read failure yields an
    /// empty string.
    pub fn read(&self) -> String {
        let absolute = std::path::absolute(&self.path).unwrap_or_else(|_| self.path.clone());

        if !absolute.exists() {
            warn!("no local manifest found at [{}]", absolute.display());
            return String::new();
        }

        match fs::read_to_string(&absolute) {
            Ok(content) => {
                info!("local manifest found at [{}]", absolute.display());
                content
            }
            Err(e) => {
                warn!("could not read local manifest [{}]: {e}", absolute.display());
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_existing_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("components.xml");
        fs::write(&path, "<Name>app.core</Name><Version>0.5.0</Version>").unwrap();

        let content = LocalManifest::new(&path).read();
        assert_eq!(content, "<Name>app.core</Name><Version>0.5.0</Version>");
    }

    #[test]
    fn missing_manifest_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.xml");

        assert!(LocalManifest::new(&path).read().is_empty());
    }

    #[test]
    fn relative_path_is_resolved_before_reading() {
        // resolves against the current directory without requiring existence
        let content = LocalManifest::new("surely-missing-manifest.xml").read();
        assert!(content.is_empty());
    }
}

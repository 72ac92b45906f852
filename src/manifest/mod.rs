pub mod grammar;
pub mod reconcile;
pub mod version;

pub use grammar::ManifestGrammar;
pub use reconcile::has_update;
pub use version::is_remote_newer;

/// Component name to version string mapping extracted from a manifest.
pub type ComponentManifest = std::collections::BTreeMap<String, String>;

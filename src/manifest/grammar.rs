use crate::manifest::ComponentManifest;
use regex::Regex;

const COMPONENT_PAIRS_PATTERN: &str = r"<Name>(.*?)</Name>.*?<Version>(.*?)</Version>";
const RELEASE_TAG_PATTERN: &str = r#""(tag_name)": "(.*?)""#;

/// A manifest grammar is a compiled pattern with two capture groups: the
/// first names a component, the second carries its version.
pub struct ManifestGrammar {
    regex: Regex,
}

impl ManifestGrammar {
    /// Grammar for IFW component manifests: repeated `<Name>` / `<Version>`
    /// tag pairs.
    pub fn component_pairs() -> Self {
        Self::from_pattern(COMPONENT_PAIRS_PATTERN)
    }

    /// Grammar for the vendor release feed: the single `"tag_name"` field of
    /// a latest-release document.
    pub fn release_feed() -> Self {
        Self::from_pattern(RELEASE_TAG_PATTERN)
    }

    fn from_pattern(pattern: &str) -> Self {
        Self {
            regex: Regex::new(pattern).expect("grammar pattern is valid"),
        }
    }

    /// Extract a component to version mapping from raw manifest text.
    ///
    /// Newlines are stripped first so tag pairs may span lines. Matches are
    /// scanned left to right without overlap; a repeated component keeps the
    /// version of its last occurrence. Pairs with an empty version never
    /// enter the map. Text with no matches yields an empty mapping.
    pub fn extract(&self, text: &str) -> ComponentManifest {
        let flattened = text.replace('\n', "");

        let mut components = ComponentManifest::new();
        for caps in self.regex.captures_iter(&flattened) {
            let (Some(name), Some(version)) = (caps.get(1), caps.get(2)) else {
                continue;
            };
            if version.as_str().is_empty() {
                continue;
            }
            components.insert(name.as_str().to_string(), version.as_str().to_string());
        }
        components
    }
}

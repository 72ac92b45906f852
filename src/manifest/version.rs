/// Returns true when `remote` sorts after `local` in plain byte-wise string
/// order.
///
/// No numeric or semver awareness: `"0.5.10"` sorts before `"0.5.9"`. IFW
/// version fields are free-form text, so the ordering stays textual and
/// callers must not assume dotted-segment arithmetic.
pub fn is_remote_newer(local: &str, remote: &str) -> bool {
    local < remote
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compares_against_installed_version() {
        let newer = |remote: &str| is_remote_newer("0.5.0", remote);

        assert!(newer("0.5.1"));
        assert!(newer("0.5.10"));
        assert!(newer("1.0"));

        assert!(!newer("0.0.1"));
        assert!(!newer("0.5.0"));
        assert!(!newer("0.4.10"));
    }

    #[test]
    fn equal_versions_are_not_newer() {
        assert!(!is_remote_newer("1.2.3", "1.2.3"));
        assert!(!is_remote_newer("", ""));
    }

    #[test]
    fn ordering_is_textual_not_numeric() {
        // two-digit segments sort before their one-digit successors
        assert!(!is_remote_newer("0.5.9", "0.5.10"));
        assert!(is_remote_newer("0.5.10", "0.5.9"));
    }

    #[test]
    fn matches_string_ordering_exactly() {
        let pairs = [
            ("0.5.0", "0.5.1"),
            ("v1.0", "v1.1"),
            ("2024-01-01", "2024-02-01"),
            ("beta", "alpha"),
            ("1.0", "1.0-rc1"),
            ("", "0.0.1"),
        ];
        for (local, remote) in pairs {
            assert_eq!(is_remote_newer(local, remote), local < remote);
        }
    }
}

use crate::checker::{CheckCode, CheckOutcome, CheckSource, UpdateChecker};
use std::thread::{self, JoinHandle};
use tracing::warn;

/// A check running on a background thread.
pub struct PendingCheck {
    handle: JoinHandle<CheckOutcome>,
}

impl UpdateChecker {
    /// Offload one check to a background thread.
    pub fn spawn(self) -> PendingCheck {
        PendingCheck {
            handle: thread::spawn(move || self.check()),
        }
    }
}

impl PendingCheck {
    /// True once the background check has produced its outcome.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Block until the check completes. A panicked worker is reported as an
    /// unspecified failure instead of propagating.
    pub fn wait(self) -> CheckOutcome {
        match self.handle.join() {
            Ok(outcome) => outcome,
            Err(_) => {
                warn!("background check aborted");
                CheckOutcome::failed(CheckSource::ManifestDiff, CheckCode::UnspecifiedFailure)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CheckConfig;
    use crate::source::TextSource;
    use std::sync::Arc;

    struct EmptySource;

    impl TextSource for EmptySource {
        fn get_text(&self, _url: &str) -> String {
            String::new()
        }
    }

    struct PanickySource;

    impl TextSource for PanickySource {
        fn get_text(&self, _url: &str) -> String {
            panic!("transport blew up");
        }
    }

    fn feed_config() -> CheckConfig {
        let mut config = CheckConfig::new("0.5.0");
        config.feed_owner = "vendor".to_string();
        config.feed_repo = "app".to_string();
        config
    }

    #[test]
    fn spawned_check_delivers_its_outcome() {
        let checker = UpdateChecker::with_source(CheckConfig::new("0.5.0"), Arc::new(EmptySource));

        let outcome = checker.spawn().wait();

        assert_eq!(
            outcome,
            CheckOutcome::failed(CheckSource::ManifestDiff, CheckCode::NoRemoteUrl)
        );
    }

    #[test]
    fn panicked_check_reports_unspecified_failure() {
        let checker = UpdateChecker::with_source(feed_config(), Arc::new(PanickySource));

        let outcome = checker.spawn().wait();

        assert_eq!(
            outcome,
            CheckOutcome::failed(CheckSource::ManifestDiff, CheckCode::UnspecifiedFailure)
        );
    }
}

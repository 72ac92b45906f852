pub mod feed;
pub mod http;
pub mod local;

pub use feed::ReleaseFeed;
pub use http::HttpSource;
pub use local::LocalManifest;

/// Fetches a remote document as text.
///
/// Transport failures are not surfaced as errors: implementations log the
/// cause and return an empty string, and callers treat empty content as
/// "nothing fetched".
pub trait TextSource: Send + Sync {
    fn get_text(&self, url: &str) -> String;
}

use crate::error::{IfwupError, Result};
use crate::source::TextSource;
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::warn;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Blocking HTTP transport for manifest and feed downloads.
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent("ifwup")
            .build()
            .map_err(|e| IfwupError::Io(std::io::Error::other(e)))?;

        Ok(Self { client })
    }
}

impl TextSource for HttpSource {
    fn get_text(&self, url: &str) -> String {
        let response = match self.client.get(url).send() {
            Ok(response) => response,
            Err(e) => {
                warn!("request to [{url}] failed: {e}");
                return String::new();
            }
        };

        if !response.status().is_success() {
            warn!("got HTTP {} from [{url}]", response.status());
            return String::new();
        }

        match response.text() {
            Ok(body) => body,
            Err(e) => {
                warn!("could not read body from [{url}]: {e}");
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[test]
    fn returns_body_on_success() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/Updates.xml")
            .with_status(200)
            .with_body("<Name>app.core</Name><Version>0.5.0</Version>")
            .create();

        let source = HttpSource::new().unwrap();
        let body = source.get_text(&format!("{}/Updates.xml", server.url()));

        mock.assert();
        assert_eq!(body, "<Name>app.core</Name><Version>0.5.0</Version>");
    }

    #[test]
    fn http_error_status_yields_empty_text() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/Updates.xml")
            .with_status(404)
            .create();

        let source = HttpSource::new().unwrap();
        let body = source.get_text(&format!("{}/Updates.xml", server.url()));

        mock.assert();
        assert!(body.is_empty());
    }

    #[test]
    fn transport_error_yields_empty_text() {
        let source = HttpSource::new().unwrap();
        // nothing listens on the discard port
        let body = source.get_text("http://127.0.0.1:9/Updates.xml");
        assert!(body.is_empty());
    }
}

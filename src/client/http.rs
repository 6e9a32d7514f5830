// src/client/http.rs
// =============================================================================
// The HTTP side of the client: one reqwest::Client, an optional credential,
// and the two kinds of GET we ever make.
//
// - list(): fetch a listing page and return its raw entry hrefs
// - download(): fetch a file and return its bytes
//
// Anything but 200 OK is an error. There is no retry anywhere: a single
// failed fetch is final, and the caller decides whether it is fatal.
// =============================================================================

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use tracing::debug;

use super::Credential;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::index::extract_entry_hrefs;

#[derive(Debug, Clone)]
pub struct WebIndexClient {
    http: Client,
    credential: Option<Credential>,
    pub(super) max_depth: usize,
}

impl WebIndexClient {
    pub fn new(config: &ClientConfig, credential: Option<Credential>) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(Error::ClientBuild)?;

        Ok(Self {
            http,
            credential,
            max_depth: config.max_depth,
        })
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    // Builds a GET request, attaching basic auth when we have a credential
    fn get(&self, url: &str) -> RequestBuilder {
        let request = self.http.get(url);

        match &self.credential {
            Some(credential) => request.basic_auth(&credential.username, Some(&credential.password)),
            None => request,
        }
    }

    // Sends a GET and insists on 200 OK
    async fn fetch(&self, url: &str) -> Result<Response> {
        debug!(url, "GET");

        let response = self.get(url).send().await.map_err(|source| Error::Transport {
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::HttpStatus {
                url: url.to_string(),
                status,
            });
        }

        Ok(response)
    }

    /// Fetches one listing page and returns its entry hrefs in document order
    pub async fn list(&self, url: &str) -> Result<Vec<String>> {
        let response = self.fetch(url).await?;

        let html = response.text().await.map_err(|source| Error::Transport {
            url: url.to_string(),
            source,
        })?;

        let hrefs = extract_entry_hrefs(&html, url)?;
        debug!(url, count = hrefs.len(), "listed entries");
        Ok(hrefs)
    }

    /// Fetches a file body
    pub async fn download(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.fetch(url).await?;

        let body = response.bytes().await.map_err(|source| Error::Transport {
            url: url.to_string(),
            source,
        })?;

        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const LISTING: &str = r#"<html><body><pre><a href="../">../</a>
<a href="a/">a/</a>
<a href="b.txt">b.txt</a>
</pre></body></html>"#;

    fn client(credential: Option<Credential>) -> WebIndexClient {
        WebIndexClient::new(&ClientConfig::default(), credential).unwrap()
    }

    #[test]
    fn test_credential_is_kept_on_the_client() {
        assert_eq!(client(Credential::parse("alice:pw")).credential().unwrap().username, "alice");
        assert!(client(Credential::parse("")).credential().is_none());
    }

    #[tokio::test]
    async fn test_list_returns_raw_hrefs() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pub"))
            .respond_with(ResponseTemplate::new(200).set_body_string(LISTING))
            .mount(&server)
            .await;

        let hrefs = client(None).list(&format!("{}/pub", server.uri())).await.unwrap();
        assert_eq!(hrefs, vec!["../", "a/", "b.txt"]);
    }

    #[tokio::test]
    async fn test_basic_auth_header_is_sent() {
        let server = MockServer::start().await;
        // base64("alice:s3cr3t")
        Mock::given(method("GET"))
            .and(path("/secret.bin"))
            .and(header("authorization", "Basic YWxpY2U6czNjcjN0"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![1u8, 2, 3]))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(Credential::parse("alice:s3cr3t"));
        let body = client.download(&format!("{}/secret.bin", server.uri())).await.unwrap();
        assert_eq!(body, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_non_200_is_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = client(None).list(&format!("{}/missing", server.uri())).await.unwrap_err();
        match err {
            Error::HttpStatus { status, .. } => assert_eq!(status, StatusCode::NOT_FOUND),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_other_success_codes_are_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let err = client(None).download(&format!("{}/empty", server.uri())).await.unwrap_err();
        assert!(matches!(err, Error::HttpStatus { .. }));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        // Grab a free port, then close it so the connection is refused
        let port = std::net::TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
        let err = client(None).list(&format!("http://127.0.0.1:{port}/x")).await.unwrap_err();
        assert!(matches!(err, Error::Transport { .. }));
    }
}

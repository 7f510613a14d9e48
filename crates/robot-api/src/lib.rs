//! Typed Rust client for the Hetzner Robot webservice.
//!
//! Covers the subset needed for inventory management:
//! servers (list, get, rename).

mod decode;
mod types;

pub use decode::{decode_server, decode_server_list};
pub use types::*;

use reqwest::{Method, StatusCode, Url};
use tracing::{debug, info};

use decode::{GET_SERVER, LIST_SERVERS};

pub const BASE_URL: &str = "https://robot-ws.your-server.de";

const RENAME_SERVER: &str = "rename server";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("robot api request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("robot api {endpoint} returned {status}: {body}")]
    Api {
        endpoint: &'static str,
        status: StatusCode,
        body: String,
    },

    #[error("robot api {endpoint} returned an unexpected body: {reason}")]
    Decode {
        endpoint: &'static str,
        reason: String,
    },

    #[error("invalid robot api base url: {0}")]
    InvalidBaseUrl(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Client for the Robot REST API.
///
/// Holds no state between calls beyond the account and the connection pool
/// of the underlying `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct RobotClient {
    account: Account,
    base_url: Url,
    http: reqwest::Client,
}

impl RobotClient {
    pub fn new(account: Account) -> Result<Self> {
        Self::with_base_url(account, BASE_URL)
    }

    pub fn with_base_url(account: Account, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| Error::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidBaseUrl(base_url.to_string()));
        }

        Ok(Self {
            account,
            base_url,
            http: reqwest::Client::new(),
        })
    }

    /// Append `segments` to the base path, percent-encoding each one so an
    /// argument can never escape into another path, query or fragment.
    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<reqwest::RequestBuilder> {
        let url = self.url(segments)?;
        debug!(%method, %url, "sending request");
        Ok(self
            .http
            .request(method, url)
            .basic_auth(self.account.user(), Some(self.account.password())))
    }

    /// Send the request and read the body to completion, releasing the
    /// connection regardless of status.
    async fn send(builder: reqwest::RequestBuilder) -> Result<(StatusCode, String)> {
        let resp = builder.send().await?;
        let status = resp.status();
        debug!(%status, "got response");
        let body = resp.text().await?;
        Ok((status, body))
    }

    /// List and get only accept a plain 200.
    fn check_ok(status: StatusCode, body: String, endpoint: &'static str) -> Result<String> {
        if status != StatusCode::OK {
            return Err(Error::Api { endpoint, status, body });
        }
        Ok(body)
    }

    // ── Servers ──────────────────────────────────────────────────────

    pub async fn list_servers(&self) -> Result<Vec<Server>> {
        debug!("fetching servers");
        let (status, body) = Self::send(self.request(Method::GET, &["server"])?).await?;

        let body = Self::check_ok(status, body, LIST_SERVERS)?;
        decode_server_list(&body)
    }

    pub async fn describe_server(&self, ip: &str) -> Result<Server> {
        let (status, body) = Self::send(self.request(Method::GET, &["server", ip])?).await?;

        let body = Self::check_ok(status, body, GET_SERVER)?;
        decode_server(&body)
    }

    /// Rename a server. The updated record is not returned.
    pub async fn rename_server(&self, ip: &str, name: &str) -> Result<()> {
        let form = [("server_name", name)];
        let builder = self.request(Method::POST, &["server", ip])?.form(&form);
        let (status, body) = Self::send(builder).await?;

        if !status.is_success() {
            return Err(Error::Api {
                endpoint: RENAME_SERVER,
                status,
                body,
            });
        }

        info!(ip, name, "renamed server");
        Ok(())
    }
}

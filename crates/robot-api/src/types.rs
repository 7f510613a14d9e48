use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ── Account ──────────────────────────────────────────────────────────

/// Robot webservice credentials. Every request is authenticated with these.
#[derive(Clone, PartialEq, Eq)]
pub struct Account {
    user: String,
    password: String,
}

impl Account {
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
        }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub(crate) fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

// ── Server types ─────────────────────────────────────────────────────

/// A dedicated server as reported by `GET /server` and `GET /server/{ip}`.
///
/// Missing or null fields fall back to their zero value so one odd entry
/// does not fail a whole listing.
///
/// The list endpoint only carries the base fields plus traffic and the
/// flatrate/throttled/cancelled flags; the availability flags (`reset`,
/// `rescue`, ...) only show up in the detail response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    #[serde(rename = "server_ip", default, deserialize_with = "null_as_default")]
    pub ip: String,
    #[serde(rename = "server_number", default, deserialize_with = "null_as_default")]
    pub number: u64,
    #[serde(rename = "server_name", default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub product: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dc: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: ServerStatus,
    /// `None` when Robot sends an empty or non `YYYY-MM-DD` value.
    #[serde(default, deserialize_with = "lenient_date")]
    pub paid_until: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traffic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flatrate: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub throttled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancelled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rescue: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vnc: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub windows: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plesk: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpanel: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wol: Option<bool>,
    /// Additional single IPv4 addresses assigned to the server.
    #[serde(rename = "ip", default, deserialize_with = "null_as_default")]
    pub additional_ips: Vec<String>,
}

impl fmt::Display for Server {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.number, self.name, self.ip)
    }
}

/// Treats `null` like an absent field, e.g. `"ip": null` for servers
/// without additional addresses.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_date<'de, D>(deserializer: D) -> std::result::Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()))
}

/// Lifecycle status of a server. Unknown values are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ServerStatus {
    Ready,
    InProcess,
    Other(String),
}

impl Default for ServerStatus {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl ServerStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ready => "ready",
            Self::InProcess => "in process",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for ServerStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "ready" => Self::Ready,
            "in process" => Self::InProcess,
            _ => Self::Other(raw),
        }
    }
}

impl From<ServerStatus> for String {
    fn from(status: ServerStatus) -> Self {
        match status {
            ServerStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ServerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

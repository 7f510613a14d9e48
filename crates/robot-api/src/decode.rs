//! Decoding of Robot's wrapped payloads.
//!
//! Robot wraps every entity in a single-key object (`{"server": {...}}`).
//! The list endpoint returns an array of those wrappers, the detail endpoint
//! returns one. The caller picks the path; nothing here guesses the shape.

use serde_json::{Map, Value};
use tracing::{debug, error};

use crate::{Error, Result, Server};

pub(crate) const SERVER_KEY: &str = "server";

pub(crate) const LIST_SERVERS: &str = "list servers";
pub(crate) const GET_SERVER: &str = "get server";

/// Decode a `GET /server` body. Wrappers without a `server` key are skipped.
pub fn decode_server_list(body: &str) -> Result<Vec<Server>> {
    let wrappers: Vec<Map<String, Value>> =
        serde_json::from_str(body).map_err(|e| decode_error(LIST_SERVERS, body, e.to_string()))?;

    let mut servers = Vec::with_capacity(wrappers.len());
    for (index, mut wrapper) in wrappers.into_iter().enumerate() {
        let Some(payload) = wrapper.remove(SERVER_KEY) else {
            debug!(index, "skipping list entry without a server object");
            continue;
        };
        let server = serde_json::from_value(payload)
            .map_err(|e| decode_error(LIST_SERVERS, body, format!("entry {index}: {e}")))?;
        servers.push(server);
    }
    Ok(servers)
}

/// Decode a `GET /server/{ip}` body, which must be exactly `{"server": {...}}`.
pub fn decode_server(body: &str) -> Result<Server> {
    let mut wrapper: Map<String, Value> =
        serde_json::from_str(body).map_err(|e| decode_error(GET_SERVER, body, e.to_string()))?;

    if wrapper.len() != 1 {
        return Err(decode_error(
            GET_SERVER,
            body,
            format!("expected exactly one wrapped object, found {} keys", wrapper.len()),
        ));
    }
    let payload = wrapper.remove(SERVER_KEY).ok_or_else(|| {
        decode_error(GET_SERVER, body, format!("missing `{SERVER_KEY}` key"))
    })?;

    serde_json::from_value(payload).map_err(|e| decode_error(GET_SERVER, body, e.to_string()))
}

fn decode_error(endpoint: &'static str, body: &str, reason: String) -> Error {
    error!(endpoint, %reason, body, "unexpected response body");
    Error::Decode { endpoint, reason }
}

//! Download links returned by `getfilelink`
//!
//! A link is only usable for a limited time and is served by a set of hosts
//! located close to the caller.

use crate::date::WireTime;
use crate::response::{envelope, ErrorEnvelope};
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Minimum remaining lifetime for a link to be considered usable
pub const VALIDITY_MARGIN: Duration = Duration::from_secs(30);

/// Returned by `getfilelink`
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct GetFileLinkResult {
    #[serde(flatten)]
    pub status: ErrorEnvelope,
    #[serde(rename = "dwltag")]
    pub download_tag: String,
    pub hash: u64,
    pub size: u64,
    pub expires: WireTime,
    pub path: String,
    pub hosts: Vec<String>,
}

envelope!(GetFileLinkResult);

impl GetFileLinkResult {
    /// Checks that the link has a host and won't expire within [`VALIDITY_MARGIN`].
    ///
    /// The clock is read on every call.
    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Utc::now())
    }

    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        if self.hosts.is_empty() {
            return false;
        }
        self.expires
            .as_date_time()
            .signed_duration_since(now)
            .to_std()
            .map(|remaining| remaining > VALIDITY_MARGIN)
            .unwrap_or(false)
    }

    /// Builds the url of the file from the first host.
    ///
    /// Should only be called once [`is_valid`](Self::is_valid) returned `true`,
    /// the expiration is not checked again. Returns `None` without hosts.
    pub fn url(&self) -> Option<String> {
        // always the first host, failing over to the others is up to the caller
        self.hosts
            .first()
            .map(|host| format!("https://{}{}", host, self.path))
    }
}

/// Same as [`GetFileLinkResult::is_valid`], a missing link is never valid
pub fn is_valid(link: Option<&GetFileLinkResult>) -> bool {
    link.is_some_and(GetFileLinkResult::is_valid)
}

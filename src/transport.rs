//! The boundary with the component performing the network calls
//!
//! This crate doesn't talk to the network. A [`Transport`] implementation
//! calls a method of the API and hands back the raw body, then [`fetch`]
//! turns it into a typed response.

use crate::response::{self, Envelope};
use crate::{Error, Result};
use bytes::Bytes;

/// Performs a call to a method of the API
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls `method` with the given query parameters and returns the response body
    async fn call(
        &self,
        method: &str,
        params: &[(&str, String)],
    ) -> std::result::Result<Bytes, Self::Error>;
}

/// Calls a method through the transport and reads its response.
///
/// Transport failures are wrapped into [`Error::Transport`] and take precedence
/// over anything else.
#[tracing::instrument(name = "fetch", skip(transport, params))]
pub async fn fetch<T, E>(transport: &T, method: &str, params: &[(&str, String)]) -> Result<E>
where
    T: Transport + ?Sized,
    E: serde::de::DeserializeOwned + Envelope,
{
    let outcome = transport.call(method, params).await.map_err(Error::transport);
    if let Ok(ref body) = outcome {
        tracing::debug!("received {} bytes", body.len());
    }
    let result = response::read(outcome);
    if let Err(Error::Protocol(code, ref message)) = result {
        tracing::debug!("responded with result {code}: {message}");
    }
    result
}

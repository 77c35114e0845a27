//! The status embedded in every response of the [HTTP Json protocol](https://docs.pcloud.com/protocols/http_json_protocol/)
//!
//! Each response carries a `result` code, `0` meaning success, and an `error`
//! message when it failed. The payload fields are only meaningful on success,
//! so every response goes through [`read`] which checks the status before
//! handing the payload over.

use crate::{Error, Result};

/// The status part of a response
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct ErrorEnvelope {
    pub result: i64,
    #[serde(rename = "error", default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}

impl ErrorEnvelope {
    pub fn success() -> Self {
        Self::default()
    }

    pub fn failure<M: Into<String>>(result: i64, message: M) -> Self {
        Self {
            result,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.result == 0
    }

    /// Combines the status with the outcome of the transport.
    ///
    /// A transport error is returned untouched, otherwise a non zero
    /// result is turned into an [`Error::Protocol`].
    pub fn update(&self, transport: Option<Error>) -> Result<()> {
        if let Some(err) = transport {
            return Err(err);
        }
        if self.is_success() {
            Ok(())
        } else {
            Err(Error::Protocol(self.result, self.message.clone()))
        }
    }
}

/// A response embedding an [`ErrorEnvelope`]
pub trait Envelope {
    fn status(&self) -> &ErrorEnvelope;

    /// Checks the payload once the status is known to be successful
    fn check_payload(&self) -> Result<()> {
        Ok(())
    }
}

impl Envelope for ErrorEnvelope {
    fn status(&self) -> &ErrorEnvelope {
        self
    }
}

macro_rules! envelope {
    ($($name:ty),+ $(,)?) => {
        $(
            impl $crate::response::Envelope for $name {
                fn status(&self) -> &$crate::response::ErrorEnvelope {
                    &self.status
                }
            }
        )+
    };
}

pub(crate) use envelope;

/// Decodes a response body, checking its status first.
///
/// The transport error, if any, takes precedence. Then the status is decoded
/// on its own so that a failed call is reported as an [`Error::Protocol`] even
/// when its payload doesn't match `T`.
pub fn read<T, B>(response: Result<B>) -> Result<T>
where
    T: serde::de::DeserializeOwned + Envelope,
    B: AsRef<[u8]>,
{
    let body = response?;
    let status: ErrorEnvelope = serde_json::from_slice(body.as_ref())?;
    status.update(None)?;
    let envelope: T = serde_json::from_slice(body.as_ref())?;
    envelope.check_payload()?;
    Ok(envelope)
}

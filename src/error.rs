//! The errors raised while reading a response from the API

/// All the possible errors returned when consuming an API response
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request never completed or its body couldn't be read
    #[error("transport error")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// Server side error, properly handled, returning a code and a message
    #[error("{1} ({0})")]
    Protocol(i64, String),
    /// A timestamp didn't match the expected format, when decoded with [`crate::date::decode`]
    #[error("invalid timestamp")]
    Format(#[from] crate::date::FormatError),
    /// Unable to parse a JSON response, including a malformed timestamp in its body
    #[error("unable to parse json response")]
    SerdeJson(#[from] serde_json::Error),
    /// The response was successful but its payload is inconsistent
    #[error("unable to read the response due to its format")]
    ResponseFormat,
}

impl Error {
    /// Wraps any failure of the transport layer
    pub fn transport<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Transport(Box::new(err))
    }

    pub fn is_protocol(&self) -> bool {
        matches!(self, Self::Protocol(_, _))
    }

    /// The result code returned by the API, if any
    pub fn code(&self) -> Option<i64> {
        match self {
            Self::Protocol(code, _) => Some(*code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn protocol_should_display_message_and_code() {
        let err = Error::Protocol(2009, "File not found.".into());
        assert_eq!(err.to_string(), "File not found. (2009)");
        assert_eq!(err.code(), Some(2009));
        assert!(err.is_protocol());
    }

    #[test]
    fn format_should_convert_from_codec() {
        fn parse(token: &str) -> crate::Result<crate::WireTime> {
            Ok(crate::date::decode(token)?.into())
        }
        assert!(parse(r#""Sun, 16 Mar 2014 17:26:04 +0000""#).is_ok());
        let err = parse("16/03/2014").unwrap_err();
        assert!(matches!(err, Error::Format(_)));
        assert_eq!(err.to_string(), "invalid timestamp");
    }

    #[test]
    fn transport_should_keep_source() {
        let err = Error::transport(std::io::Error::new(
            std::io::ErrorKind::ConnectionReset,
            "connection reset",
        ));
        assert!(err.code().is_none());
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "connection reset");
    }
}

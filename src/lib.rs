//! Response and data model of the [pCloud API](https://docs.pcloud.com/)
//!
//! Every response embeds a status, see [`response::ErrorEnvelope`], checked
//! by [`response::read`] before the payload is handed over.
//!
//! ```rust
//! use pcloud_model::entry::ItemResult;
//!
//! let body = r#"{ "result": 2005, "error": "Directory does not exist." }"#;
//! let err = pcloud_model::response::read::<ItemResult, _>(Ok(body)).unwrap_err();
//! assert_eq!(err.to_string(), "Directory does not exist. (2005)");
//! ```

pub mod date;
pub mod entry;
pub mod error;
pub mod file;
pub mod region;
pub mod response;
pub mod transport;

pub use date::WireTime;
pub use entry::{Item, ItemResult};
pub use error::Error;
pub use region::Region;

pub type Result<T> = std::result::Result<T, Error>;

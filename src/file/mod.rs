//! Responses of the methods related to files

pub mod checksum;
pub mod get_link;
pub mod upload;

/// The checksums computed by pCloud for a file.
///
/// Depending on the region, the API returns either `md5` or `sha256`
/// alongside `sha1`.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Hashes {
    pub sha1: String,
    pub md5: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
}

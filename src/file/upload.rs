use super::Hashes;
use crate::entry::Item;
use crate::response::{Envelope, ErrorEnvelope};
use crate::{Error, Result};

/// Returned by `uploadfile`
///
/// The `metadata`, `checksums` and `fileids` sequences are correlated by
/// position: the n-th checksum and the n-th id belong to the n-th item.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct UploadFileResponse {
    #[serde(flatten)]
    pub status: ErrorEnvelope,
    #[serde(rename = "metadata")]
    pub items: Vec<Item>,
    pub checksums: Vec<Hashes>,
    #[serde(rename = "fileids")]
    pub file_ids: Vec<u64>,
}

impl UploadFileResponse {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the uploaded files with their checksums and ids
    pub fn entries(&self) -> impl Iterator<Item = (&Item, &Hashes, u64)> {
        self.items
            .iter()
            .zip(self.checksums.iter())
            .zip(self.file_ids.iter())
            .map(|((item, hashes), file_id)| (item, hashes, *file_id))
    }
}

impl Envelope for UploadFileResponse {
    fn status(&self) -> &ErrorEnvelope {
        &self.status
    }

    fn check_payload(&self) -> Result<()> {
        if self.checksums.len() != self.items.len() || self.file_ids.len() != self.items.len() {
            return Err(Error::ResponseFormat);
        }
        Ok(())
    }
}

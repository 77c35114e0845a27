use crate::date::WireTime;
use crate::response::{envelope, ErrorEnvelope};
use chrono::{DateTime, Utc};
use std::fmt;

fn is_zero<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// A file or a folder as returned by the listing and the mutation methods.
///
/// Depending on `is_folder`, either `folder_id` or the file fields (`file_id`,
/// `size`, `width`, `height`, `hash`, `category`, `content_type`) are set.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Item {
    pub path: String,
    pub name: String,
    pub created: WireTime,
    #[serde(rename = "ismine")]
    pub is_mine: bool,
    pub thumb: bool,
    pub modified: WireTime,
    pub comments: u32,
    pub id: String,
    #[serde(rename = "isshared")]
    pub is_shared: bool,
    #[serde(rename = "isdeleted")]
    pub is_deleted: bool,
    pub icon: String,
    #[serde(rename = "isfolder")]
    pub is_folder: bool,
    #[serde(rename = "parentfolderid")]
    pub parent_folder_id: u64,
    #[serde(rename = "folderid", skip_serializing_if = "is_zero")]
    pub folder_id: u64,
    #[serde(skip_serializing_if = "is_zero")]
    pub height: u32,
    #[serde(rename = "fileid", skip_serializing_if = "is_zero")]
    pub file_id: u64,
    #[serde(skip_serializing_if = "is_zero")]
    pub width: u32,
    #[serde(skip_serializing_if = "is_zero")]
    pub hash: u64,
    #[serde(skip_serializing_if = "is_zero")]
    pub category: u32,
    #[serde(skip_serializing_if = "is_zero")]
    pub size: u64,
    #[serde(rename = "contenttype", skip_serializing_if = "String::is_empty")]
    pub content_type: String,
    /// Only filled when listing a folder, in the order given by the API
    pub contents: Vec<Item>,
}

impl Item {
    /// The modification date, falling back to the creation date when unset
    pub fn mod_time(&self) -> DateTime<Utc> {
        if self.modified.is_zero() {
            self.created.into_inner()
        } else {
            self.modified.into_inner()
        }
    }

    pub fn identifier(&self) -> ItemId {
        if self.is_folder {
            ItemId::Folder(self.folder_id)
        } else {
            ItemId::File(self.file_id)
        }
    }

    pub fn file_id(&self) -> Option<u64> {
        match self.identifier() {
            ItemId::File(id) => Some(id),
            ItemId::Folder(_) => None,
        }
    }

    pub fn folder_id(&self) -> Option<u64> {
        match self.identifier() {
            ItemId::Folder(id) => Some(id),
            ItemId::File(_) => None,
        }
    }

    pub fn is_file(&self) -> bool {
        !self.is_folder
    }

    pub fn children(&self) -> impl Iterator<Item = &Item> {
        self.contents.iter()
    }
}

/// Numeric identifier of an item, depending on its kind
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemId {
    File(u64),
    Folder(u64),
}

/// Formats like the `id` field of an [`Item`], `f42` or `d42`
impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(id) => write!(f, "f{id}"),
            Self::Folder(id) => write!(f, "d{id}"),
        }
    }
}

/// Returned by `listfolder`, `createfolder`, `deletefolder`, `deletefile` and others
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ItemResult {
    #[serde(flatten)]
    pub status: ErrorEnvelope,
    pub metadata: Item,
}

envelope!(ItemResult);

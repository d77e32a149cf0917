//! Media file references.
//!
//! Image fields in the content model hold either the bare id of a managed
//! file or the expanded file entity, depending on how the producing CMS was
//! queried.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::de::{option_u64_lenient, string_or_integer};

/// A managed media asset as returned by the CMS files collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct File {
    /// File id (usually a UUID).
    #[serde(deserialize_with = "string_or_integer")]
    pub id: String,

    /// Storage adapter the file lives on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<String>,

    /// Name of the file on disk.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename_disk: Option<String>,

    /// Name offered when the file is downloaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename_download: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// MIME type (e.g., "image/png").
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_on: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<DateTime<Utc>>,

    /// Size in bytes; accepted as a number or a numeric string.
    #[serde(
        default,
        deserialize_with = "option_u64_lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub filesize: Option<u64>,

    /// Pixel width, for images and video.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    /// Pixel height, for images and video.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    /// Duration in seconds, for audio and video.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,

    /// Alt text / long description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Any further file metadata, kept as-is.
    #[serde(default, flatten)]
    pub extra: Map<String, Value>,
}

impl File {
    /// Create a file entity with only its id set.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            storage: None,
            filename_disk: None,
            filename_download: None,
            title: None,
            mime_type: None,
            folder: None,
            uploaded_by: None,
            uploaded_on: None,
            modified_on: None,
            filesize: None,
            width: None,
            height: None,
            duration: None,
            description: None,
            tags: None,
            extra: Map::new(),
        }
    }

    /// Whether the MIME type marks this file as an image.
    pub fn is_image(&self) -> bool {
        self.mime_type
            .as_deref()
            .is_some_and(|t| t.starts_with("image/"))
    }
}

/// A file field: either a plain string reference or the expanded entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileRef {
    /// File id or URL. Integer ids are kept as their decimal string.
    Id(#[serde(deserialize_with = "string_or_integer")] String),
    /// Expanded file entity.
    File(Box<File>),
}

impl FileRef {
    /// The file id, whichever representation is held.
    pub fn id(&self) -> &str {
        match self {
            Self::Id(id) => id,
            Self::File(file) => &file.id,
        }
    }

    /// The expanded entity, if this reference carries one.
    pub fn as_file(&self) -> Option<&File> {
        match self {
            Self::Id(_) => None,
            Self::File(file) => Some(file),
        }
    }

    /// Whether the reference is an absolute URL rather than a file id.
    pub fn is_url(&self) -> bool {
        matches!(self, Self::Id(id) if id.starts_with("http://") || id.starts_with("https://"))
    }
}

impl From<String> for FileRef {
    fn from(id: String) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for FileRef {
    fn from(id: &str) -> Self {
        Self::Id(id.to_string())
    }
}

impl From<File> for FileRef {
    fn from(file: File) -> Self {
        Self::File(Box::new(file))
    }
}

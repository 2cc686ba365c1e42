//! Book records: the raw catalog volume and the persisted favorite summary.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single book record returned by the catalog.
///
/// Only the identifier is guaranteed to be present, everything else lives in
/// [`VolumeInfo`] and may be missing. Volumes are transient, they are
/// consumed by the card renderer and never persisted.
#[derive(Debug, Deserialize)]
pub struct Volume {
    /// The catalog identifier of the volume.
    pub id: String,
    /// The descriptive fields of the volume.
    #[serde(rename = "volumeInfo", default)]
    pub volume_info: VolumeInfo,
}

/// Descriptive information of a [`Volume`], every field optional.
#[derive(Debug, Default, Deserialize)]
pub struct VolumeInfo {
    /// Title of the book.
    pub title: Option<String>,
    /// Authors of the book.
    pub authors: Option<Vec<String>>,
    /// Description of the book, may contain embedded markup.
    pub description: Option<String>,
    /// Cover image links.
    #[serde(rename = "imageLinks")]
    pub image_links: Option<ImageLinks>,
    /// Link to a reading preview of the book.
    #[serde(rename = "previewLink")]
    pub preview_link: Option<String>,
    /// Link to the catalog page of the book.
    #[serde(rename = "infoLink")]
    pub info_link: Option<String>,
}

/// Cover image links of a [`Volume`].
#[derive(Debug, Default, Deserialize)]
pub struct ImageLinks {
    /// The regular sized cover thumbnail.
    pub thumbnail: Option<String>,
    /// The small cover thumbnail.
    #[serde(rename = "smallThumbnail")]
    pub small_thumbnail: Option<String>,
}

/// The record stored when a user favorites a rendered book.
///
/// Summaries carry the rendered values, not the raw catalog fields, so a
/// favorited book displays the same way whether it comes from a fresh search
/// or from the favorites list. Identity is the `id` field and a summary is
/// never edited in place - toggling a favorite replaces membership.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSummary {
    /// The catalog identifier of the book.
    pub id: String,
    /// Rendered title.
    pub title: String,
    /// Rendered author line.
    pub authors: String,
    /// Cover image URL.
    pub thumbnail: String,
    /// Reading preview URL.
    #[serde(rename = "previewLink")]
    pub preview_link: String,
}

impl fmt::Display for BookSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "by {}", self.authors)?;
        write!(f, "Preview: {}", self.preview_link)
    }
}

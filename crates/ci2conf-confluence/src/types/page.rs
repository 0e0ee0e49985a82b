//! Page wire types.

use serde::Deserialize;

/// A content entity of type `page`.
///
/// `space`, `body` and `_links` only arrive when the query asked for the
/// matching expansion, so they stay optional here.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Page {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub space: Option<SpaceRef>,
    pub version: Version,
    #[serde(default)]
    pub body: Option<Body>,
    #[serde(rename = "_links", default)]
    pub links: Option<Links>,
}

/// The space a page belongs to, reduced to its key.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SpaceRef {
    pub key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Version {
    pub number: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Body {
    #[serde(default)]
    pub storage: Option<Storage>,
}

/// The storage-format rendition of a body.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Storage {
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Links {
    /// Site-relative web UI path.
    #[serde(default)]
    pub webui: Option<String>,
}

/// Result list from a `/content` title query.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ContentSearchResponse {
    pub results: Vec<Page>,
}

//! Space wire types.

use serde::Deserialize;

/// A space, reduced to the fields the check command reports.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Space {
    pub key: String,
    pub name: String,
}

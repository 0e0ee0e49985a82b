//! Wire types for the Confluence REST API.
//!
//! These structs only include the fields this crate actually reads; serde
//! ignores everything else the API sends.

mod attachment;
mod page;
mod space;

pub(crate) use attachment::{Attachment, AttachmentsResponse};
pub(crate) use page::{ContentSearchResponse, Page};
pub(crate) use space::Space;

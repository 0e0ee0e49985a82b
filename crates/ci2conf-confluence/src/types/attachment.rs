//! Attachment wire types.

use serde::Deserialize;

/// One attachment as the API reports it.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Attachment {
    pub id: String,
    /// Filename as stored on the page.
    pub title: String,
    #[serde(rename = "_links", default)]
    pub links: Option<AttachmentLinks>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct AttachmentLinks {
    /// Site-relative download path.
    #[serde(default)]
    pub download: Option<String>,
}

/// Paged attachment listing; everything beyond `results` is dropped.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct AttachmentsResponse {
    pub results: Vec<Attachment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_attachments_response() {
        let json = r#"{
            "results": [{
                "id": "att100",
                "type": "attachment",
                "title": "report.txt",
                "_links": {"download": "/download/attachments/100/report.txt"}
            }],
            "size": 1
        }"#;

        let response: AttachmentsResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].id, "att100");
        assert_eq!(response.results[0].title, "report.txt");
        assert_eq!(
            response.results[0]
                .links
                .as_ref()
                .unwrap()
                .download
                .as_deref(),
            Some("/download/attachments/100/report.txt")
        );
    }

    #[test]
    fn test_deserialize_attachment_without_links() {
        let json = r#"{"id": "att1", "title": "a.bin"}"#;

        let attachment: Attachment = serde_json::from_str(json).unwrap();

        assert!(attachment.links.is_none());
    }
}

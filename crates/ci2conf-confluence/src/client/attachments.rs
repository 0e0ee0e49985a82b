//! Attachment operations for the Confluence API.

use rand::RngExt;
use tracing::info;

use super::ConfluenceClient;
use crate::error::ConfluenceError;
use crate::types::{Attachment, AttachmentsResponse};

/// Multipart/form-data request body.
///
/// The attachment endpoints want a browser-style form upload; this
/// assembles one without pulling in a multipart crate.
struct MultipartForm {
    boundary: String,
    body: Vec<u8>,
}

impl MultipartForm {
    fn new() -> Self {
        Self {
            boundary: format!("----Ci2confFormBoundary{:016x}", rand::rng().random::<u64>()),
            body: Vec::new(),
        }
    }

    fn file_part(mut self, filename: &str, content_type: &str, data: &[u8]) -> Self {
        self.open_part(&format!(
            "Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n\
             Content-Type: {content_type}"
        ));
        self.body.extend_from_slice(data);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    fn text_part(mut self, name: &str, value: &str) -> Self {
        self.open_part(&format!("Content-Disposition: form-data; name=\"{name}\""));
        self.body.extend_from_slice(value.as_bytes());
        self.body.extend_from_slice(b"\r\n");
        self
    }

    fn open_part(&mut self, headers: &str) {
        self.body
            .extend_from_slice(format!("--{}\r\n{headers}\r\n\r\n", self.boundary).as_bytes());
    }

    /// Close the form, returning the Content-Type header value and the body.
    fn finish(mut self) -> (String, Vec<u8>) {
        self.body
            .extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        let content_type = format!("multipart/form-data; boundary={}", self.boundary);
        (content_type, self.body)
    }
}

impl ConfluenceClient {
    /// Upsert an attachment, keyed by filename.
    ///
    /// Confluence rejects a second attachment under an existing filename,
    /// so when one is already present a new version is posted to its data
    /// endpoint instead.
    pub(crate) fn upload_attachment(
        &self,
        page_id: &str,
        filename: &str,
        data: &[u8],
        content_type: &str,
        comment: &str,
    ) -> Result<Attachment, ConfluenceError> {
        let existing = self.find_attachment_by_name(page_id, filename)?;

        let url = match &existing {
            Some(att) => {
                info!(
                    "Updating existing attachment '{}' (id={})",
                    filename, att.id
                );
                format!(
                    "{}/content/{}/child/attachment/{}/data",
                    self.api_url(),
                    page_id,
                    att.id
                )
            }
            None => {
                info!("Uploading new attachment '{}' to page {}", filename, page_id);
                format!("{}/content/{}/child/attachment", self.api_url(), page_id)
            }
        };

        let (form_content_type, form_body) = MultipartForm::new()
            .file_part(filename, content_type, data)
            .text_part("comment", comment)
            .finish();

        let response = self
            .agent
            .post(&url)
            .header("Authorization", &self.auth_header)
            .header("Content-Type", &form_content_type)
            .header("X-Atlassian-Token", "nocheck")
            .header("Accept", "application/json")
            .send(&form_body[..])?;

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if status >= 400 {
            return Err(super::response_error(status, &mut body_reader));
        }

        // New uploads come back as a one-element list, updates as the object
        if existing.is_some() {
            Ok(body_reader.read_json()?)
        } else {
            let uploaded: AttachmentsResponse = body_reader.read_json()?;
            uploaded
                .results
                .into_iter()
                .next()
                .ok_or_else(|| ConfluenceError::Status {
                    status,
                    body: String::from("empty attachment response"),
                })
        }
    }

    fn get_attachments(&self, page_id: &str) -> Result<AttachmentsResponse, ConfluenceError> {
        let url = format!("{}/content/{}/child/attachment", self.api_url(), page_id);

        let response = self
            .agent
            .get(&url)
            .header("Authorization", &self.auth_header)
            .header("Accept", "application/json")
            .call()?;

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if status >= 400 {
            return Err(super::response_error(status, &mut body_reader));
        }

        Ok(body_reader.read_json()?)
    }

    fn find_attachment_by_name(
        &self,
        page_id: &str,
        filename: &str,
    ) -> Result<Option<Attachment>, ConfluenceError> {
        let attachments = self.get_attachments(page_id)?;
        Ok(attachments.results.into_iter().find(|a| a.title == filename))
    }
}

//! Page operations for the Confluence API.

use serde_json::json;
use tracing::info;

use super::ConfluenceClient;
use crate::error::ConfluenceError;
use crate::types::{ContentSearchResponse, Page};

impl ConfluenceClient {
    /// Find a page by space key and title.
    ///
    /// Returns `Ok(None)` when no such page exists.
    pub(crate) fn find_page(
        &self,
        space: &str,
        title: &str,
    ) -> Result<Option<Page>, ConfluenceError> {
        let url = format!("{}/content", self.api_url());

        info!("Finding page '{}' in space {}", title, space);

        let response = self
            .agent
            .get(&url)
            .query("spaceKey", space)
            .query("title", title)
            .query("expand", "body.storage,version,space")
            .header("Authorization", &self.auth_header)
            .header("Accept", "application/json")
            .call()?;

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if status == 404 {
            return Ok(None);
        }
        if status >= 400 {
            return Err(super::response_error(status, &mut body_reader));
        }

        let search: ContentSearchResponse = body_reader.read_json()?;
        Ok(search.results.into_iter().next())
    }

    /// Write new page content, bumping `version` by one.
    ///
    /// `version` is the version the caller read; the server rejects the
    /// write with 409 if someone else saved in between.
    pub(crate) fn update_page(
        &self,
        page_id: &str,
        title: &str,
        body: &str,
        version: u32,
        message: &str,
    ) -> Result<Page, ConfluenceError> {
        let url = format!("{}/content/{}", self.api_url(), page_id);

        let payload = json!({
            "type": "page",
            "title": title,
            "body": {
                "storage": {"value": body, "representation": "storage"}
            },
            "version": {"number": version + 1, "message": message}
        });

        info!("Writing page {} as version {}", page_id, version + 1);

        let payload_bytes = serde_json::to_vec(&payload)?;

        let response = self
            .agent
            .put(&url)
            .header("Authorization", &self.auth_header)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .send(&payload_bytes[..])?;

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if status >= 400 {
            return Err(super::response_error(status, &mut body_reader));
        }

        let page: Page = body_reader.read_json()?;
        info!("Updated page {} to version {}", page_id, page.version.number);
        Ok(page)
    }
}

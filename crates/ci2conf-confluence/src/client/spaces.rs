//! Space operations for the Confluence API.

use tracing::info;

use super::ConfluenceClient;
use crate::error::ConfluenceError;
use crate::types::Space;

impl ConfluenceClient {
    /// Get a space by key.
    ///
    /// Returns `Ok(None)` when no such space exists.
    pub(crate) fn get_space(&self, key: &str) -> Result<Option<Space>, ConfluenceError> {
        let url = format!("{}/space/{}", self.api_url(), key);

        info!("Getting space {}", key);

        let response = self
            .agent
            .get(&url)
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

        Ok(Some(body_reader.read_json()?))
    }
}

//! Maintainer alias directory client.

use async_trait::async_trait;
use reqwest::Client;

use crate::error::Result;
use crate::models::AliasDirectory;
use crate::services::AliasSource;
use crate::utils::http::fetch_json;

/// Fetches `pagure_owner_alias.json` in a single request.
pub struct AliasDirectoryClient {
    client: Client,
    url: String,
}

impl AliasDirectoryClient {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl AliasSource for AliasDirectoryClient {
    async fn fetch_aliases(&self) -> Result<AliasDirectory> {
        log::info!("Getting alias json from {} ...", self.url);
        let directory: AliasDirectory = fetch_json(self.client.get(&self.url)).await?;
        log::info!("Alias directory lists {} packages", directory.rpms.len());
        Ok(directory)
    }
}

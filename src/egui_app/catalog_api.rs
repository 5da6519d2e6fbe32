//! Catalog API Client
//!
//! Fetches the full film list used to replace the catalog store's contents.

use crate::egui_app::config::Config;
use crate::egui_app::http::{block_on, client, rejection, send_error};
use crate::shared::{CatalogItem, ClientError};

/// Where a catalog refresh gets its list from
pub trait CatalogSource: Send + Sync {
    fn fetch(&self) -> Result<Vec<CatalogItem>, ClientError>;
}

/// Catalog source backed by `GET /films`
#[derive(Clone)]
pub struct HttpCatalogSource {
    config: Config,
}

impl HttpCatalogSource {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl CatalogSource for HttpCatalogSource {
    fn fetch(&self) -> Result<Vec<CatalogItem>, ClientError> {
        fetch_films(&self.config)
    }
}

/// Get every film the server knows about
pub fn fetch_films(config: &Config) -> Result<Vec<CatalogItem>, ClientError> {
    let client = client(config)?;
    let url = config.api_url("/films");
    let token = config.get_token();

    block_on(async {
        let mut request = client.get(&url);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(send_error)?;
        if !response.status().is_success() {
            return Err(rejection(response).await);
        }

        let body = response.text().await.map_err(send_error)?;
        let items: Vec<CatalogItem> = serde_json::from_str(&body)?;
        Ok(items)
    })
}

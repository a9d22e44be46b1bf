use async_trait::async_trait;
use log::debug;
use serde::de::DeserializeOwned;

use super::error::{CatalogError, Result};
use super::types::{Film, PeoplePage, Starship};
use crate::config::CatalogConfig;

/// Read-only access to the three catalog collections the guidebook uses.
#[async_trait(?Send)]
pub trait Catalog {
	async fn people_page(&self, page: u32) -> Result<PeoplePage>;
	async fn film(&self, id: u32) -> Result<Film>;
	async fn starship(&self, id: u32) -> Result<Starship>;
}

#[derive(Clone)]
pub struct CatalogClient {
	config: CatalogConfig,
	http: reqwest::Client,
}

impl CatalogClient {
	pub fn new(config: CatalogConfig) -> Self {
		Self {
			config,
			http: reqwest::Client::new(),
		}
	}

	async fn get<T: DeserializeOwned>(&self, url: String) -> Result<T> {
		debug!("GET {url}");
		let response = self
			.http
			.get(&url)
			.send()
			.await
			.map_err(|source| CatalogError::Transport {
				url: url.clone(),
				source,
			})?;

		let status = response.status();
		if !status.is_success() {
			return Err(CatalogError::Status {
				url,
				status: status.as_u16(),
			});
		}

		let body = response
			.text()
			.await
			.map_err(|source| CatalogError::Transport {
				url: url.clone(),
				source,
			})?;
		serde_json::from_str(&body).map_err(|source| CatalogError::Decode { url, source })
	}
}

#[async_trait(?Send)]
impl Catalog for CatalogClient {
	async fn people_page(&self, page: u32) -> Result<PeoplePage> {
		self.get(self.config.people_page_url(page)).await
	}

	async fn film(&self, id: u32) -> Result<Film> {
		self.get(self.config.film_url(id)).await
	}

	async fn starship(&self, id: u32) -> Result<Starship> {
		self.get(self.config.starship_url(id)).await
	}
}

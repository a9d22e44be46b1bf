//! Upstream catalog settings, shared through Leptos context.

/// Public Star Wars catalog used by the guidebook.
pub const DEFAULT_BASE_URL: &str = "https://sw-api.starnavi.io";

/// Items per `people` listing page, fixed by the upstream API.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Clone, Debug, PartialEq)]
pub struct CatalogConfig {
	pub base_url: String,
	pub page_size: u32,
}

impl Default for CatalogConfig {
	fn default() -> Self {
		Self {
			base_url: DEFAULT_BASE_URL.into(),
			page_size: DEFAULT_PAGE_SIZE,
		}
	}
}

impl CatalogConfig {
	pub fn people_page_url(&self, page: u32) -> String {
		format!("{}/people/?page={}", self.base(), page)
	}

	pub fn film_url(&self, id: u32) -> String {
		format!("{}/films/{}/", self.base(), id)
	}

	pub fn starship_url(&self, id: u32) -> String {
		format!("{}/starships/{}/", self.base(), id)
	}

	fn base(&self) -> &str {
		self.base_url.trim_end_matches('/')
	}
}

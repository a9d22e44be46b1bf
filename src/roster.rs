//! Paged character roster backed by the `people` listing.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{error, info};

use crate::catalog::{Catalog, CatalogClient, Character, Result};
use crate::config::CatalogConfig;
use crate::generation::Generation;

#[derive(Clone, Debug, PartialEq)]
pub struct RosterPage {
	pub characters: Vec<Character>,
	pub page_count: u32,
}

/// Number of full pages for `total` items, floored.
pub fn page_count(total: u32, page_size: u32) -> u32 {
	total.checked_div(page_size).unwrap_or(0)
}

pub async fn fetch_roster_page<C: Catalog + ?Sized>(
	catalog: &C,
	page: u32,
	page_size: u32,
) -> Result<RosterPage> {
	let listing = catalog.people_page(page).await?;
	Ok(RosterPage {
		page_count: page_count(listing.count, page_size),
		characters: listing.results,
	})
}

#[derive(Clone, Debug, PartialEq)]
pub enum RosterState {
	/// A page is in flight. The last known page count stays visible.
	Loading { page_count: u32 },
	Loaded(RosterPage),
	Failed,
}

impl Default for RosterState {
	fn default() -> Self {
		Self::Loading { page_count: 0 }
	}
}

impl RosterState {
	pub fn page_count(&self) -> u32 {
		match self {
			Self::Loading { page_count } => *page_count,
			Self::Loaded(page) => page.page_count,
			Self::Failed => 0,
		}
	}

	#[cfg(test)]
	pub fn characters(&self) -> Option<&[Character]> {
		match self {
			Self::Loaded(page) => Some(&page.characters),
			_ => None,
		}
	}

	/// State shown while the next page loads.
	pub fn reloading(&self) -> Self {
		Self::Loading {
			page_count: self.page_count(),
		}
	}

	fn settle(page: u32, result: Result<RosterPage>) -> Self {
		match result {
			Ok(loaded) => {
				info!(
					"Loaded roster page {page}: {} characters",
					loaded.characters.len()
				);
				Self::Loaded(loaded)
			}
			Err(err) => {
				error!("Error while fetching roster page {page}: {err}");
				Self::Failed
			}
		}
	}
}

/// Validates a pagination click. Re-selecting the current page, or a page
/// below 1, is not a change and must not trigger a fetch.
pub fn page_change(current: u32, next: u32) -> Option<u32> {
	(next >= 1 && next != current).then_some(next)
}

/// Loads roster pages, dropping results overtaken by a newer page request.
#[derive(Clone, Default)]
pub struct RosterLoader {
	generation: Generation,
}

impl RosterLoader {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns `None` if another load started before this one finished.
	pub async fn load<C: Catalog + ?Sized>(
		&self,
		catalog: &C,
		page: u32,
		page_size: u32,
	) -> Option<RosterState> {
		let ticket = self.generation.advance();
		let state = RosterState::settle(page, fetch_roster_page(catalog, page, page_size).await);
		self.generation.is_current(ticket).then_some(state)
	}
}

/// Fetches the roster page each time `page` changes. Responses for a page
/// that has since been replaced are dropped.
pub fn use_roster(page: Signal<u32>) -> ReadSignal<RosterState> {
	let config = use_context::<CatalogConfig>().unwrap_or_default();
	let (state, set_state) = signal(RosterState::default());
	let loader = RosterLoader::new();

	Effect::new(move |_| {
		let page = page.get();
		set_state.set(state.get_untracked().reloading());

		let (loader, config) = (loader.clone(), config.clone());
		spawn_local(async move {
			let page_size = config.page_size;
			let client = CatalogClient::new(config);
			if let Some(next) = loader.load(&client, page, page_size).await {
				set_state.set(next);
			}
		});
	});

	state
}

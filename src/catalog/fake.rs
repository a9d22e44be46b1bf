//! In-memory catalog for driving fetch logic in unit tests.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use futures::channel::oneshot;

use super::{Catalog, CatalogError, Character, Film, PeoplePage, Result, Starship};

#[derive(Default)]
pub struct FakeCatalog {
	pub people: Vec<Character>,
	pub films: HashMap<u32, Film>,
	pub starships: HashMap<u32, Starship>,
	failing_pages: HashSet<u32>,
	film_gates: RefCell<HashMap<u32, oneshot::Receiver<()>>>,
	page_gates: RefCell<HashMap<u32, oneshot::Receiver<()>>>,
	pub requests: RefCell<Vec<String>>,
}

impl FakeCatalog {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_film(mut self, id: u32, title: &str) -> Self {
		self.films.insert(
			id,
			Film {
				id,
				title: title.into(),
			},
		);
		self
	}

	pub fn with_starship(mut self, id: u32, name: &str, films: &[u32]) -> Self {
		self.starships.insert(
			id,
			Starship {
				name: name.into(),
				films: films.to_vec(),
			},
		);
		self
	}

	pub fn with_people(mut self, people: Vec<Character>) -> Self {
		self.people = people;
		self
	}

	pub fn failing_page(mut self, page: u32) -> Self {
		self.failing_pages.insert(page);
		self
	}

	/// Holds requests for film `id` until the returned sender fires.
	pub fn gate_film(&self, id: u32) -> oneshot::Sender<()> {
		let (tx, rx) = oneshot::channel();
		self.film_gates.borrow_mut().insert(id, rx);
		tx
	}

	/// Holds requests for people page `page` until the returned sender fires.
	pub fn gate_page(&self, page: u32) -> oneshot::Sender<()> {
		let (tx, rx) = oneshot::channel();
		self.page_gates.borrow_mut().insert(page, rx);
		tx
	}

	fn missing(url: String) -> CatalogError {
		CatalogError::Status { url, status: 404 }
	}
}

#[async_trait(?Send)]
impl Catalog for FakeCatalog {
	async fn people_page(&self, page: u32) -> Result<PeoplePage> {
		let url = format!("people/?page={page}");
		self.requests.borrow_mut().push(url.clone());
		let gate = self.page_gates.borrow_mut().remove(&page);
		if let Some(gate) = gate {
			let _ = gate.await;
		}
		if self.failing_pages.contains(&page) {
			return Err(CatalogError::Status { url, status: 500 });
		}
		let start = ((page.max(1) - 1) * 10) as usize;
		let results = self.people.iter().skip(start).take(10).cloned().collect();
		Ok(PeoplePage {
			results,
			count: self.people.len() as u32,
		})
	}

	async fn film(&self, id: u32) -> Result<Film> {
		let url = format!("films/{id}/");
		self.requests.borrow_mut().push(url.clone());
		let gate = self.film_gates.borrow_mut().remove(&id);
		if let Some(gate) = gate {
			let _ = gate.await;
		}
		self.films.get(&id).cloned().ok_or_else(|| Self::missing(url))
	}

	async fn starship(&self, id: u32) -> Result<Starship> {
		let url = format!("starships/{id}/");
		self.requests.borrow_mut().push(url.clone());
		self.starships
			.get(&id)
			.cloned()
			.ok_or_else(|| Self::missing(url))
	}
}

/// Character with the given references and blank descriptors.
pub fn character(id: u32, name: &str, films: &[u32], starships: &[u32]) -> Character {
	Character {
		id,
		name: name.into(),
		height: String::new(),
		mass: String::new(),
		hair_color: String::new(),
		skin_color: String::new(),
		eye_color: String::new(),
		birth_year: String::new(),
		gender: String::new(),
		films: films.to_vec(),
		species: Vec::new(),
		vehicles: Vec::new(),
		starships: starships.to_vec(),
		created: String::new(),
		edited: String::new(),
		url: String::new(),
	}
}

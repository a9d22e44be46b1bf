use serde::Deserialize;

/// A character record from the `people` collection.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Character {
	pub id: u32,
	pub name: String,
	#[serde(default)]
	pub height: String,
	#[serde(default)]
	pub mass: String,
	#[serde(default)]
	pub hair_color: String,
	#[serde(default)]
	pub skin_color: String,
	#[serde(default)]
	pub eye_color: String,
	#[serde(default)]
	pub birth_year: String,
	#[serde(default)]
	pub gender: String,
	#[serde(default)]
	pub films: Vec<u32>,
	#[serde(default)]
	pub species: Vec<u32>,
	#[serde(default)]
	pub vehicles: Vec<u32>,
	#[serde(default)]
	pub starships: Vec<u32>,
	#[serde(default)]
	pub created: String,
	#[serde(default)]
	pub edited: String,
	#[serde(default)]
	pub url: String,
}

impl Character {
	/// Portrait served by the visual guide, keyed by catalog id.
	pub fn portrait_url(&self) -> String {
		format!(
			"https://starwars-visualguide.com/assets/img/characters/{}.jpg",
			self.id
		)
	}
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Film {
	pub id: u32,
	pub title: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Starship {
	pub name: String,
	#[serde(default)]
	pub films: Vec<u32>,
}

/// One page of the `people` listing.
#[derive(Clone, Debug, Deserialize)]
pub struct PeoplePage {
	pub results: Vec<Character>,
	pub count: u32,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn decodes_people_page() {
		let body = r#"{
			"count": 82,
			"next": "https://sw-api.starnavi.io/people/?page=2",
			"previous": null,
			"results": [{
				"id": 1,
				"name": "Luke Skywalker",
				"height": "172",
				"mass": "77",
				"hair_color": "blond",
				"skin_color": "fair",
				"eye_color": "blue",
				"birth_year": "19BBY",
				"gender": "male",
				"homeworld": 1,
				"films": [1, 2, 3, 6],
				"species": [1],
				"vehicles": [14, 30],
				"starships": [12, 22],
				"created": "2014-12-09T13:50:51.644000Z",
				"edited": "2014-12-20T21:17:56.891000Z",
				"url": "https://sw-api.starnavi.io/people/1/"
			}]
		}"#;
		let page: PeoplePage = serde_json::from_str(body).unwrap();
		assert_eq!(page.count, 82);
		let luke = &page.results[0];
		assert_eq!(luke.name, "Luke Skywalker");
		assert_eq!(luke.films, vec![1, 2, 3, 6]);
		assert_eq!(luke.starships, vec![12, 22]);
	}

	#[test]
	fn missing_reference_lists_decode_empty() {
		let c: Character = serde_json::from_str(r#"{"id": 7, "name": "Beru"}"#).unwrap();
		assert!(c.films.is_empty());
		assert!(c.starships.is_empty());
		assert_eq!(
			c.portrait_url(),
			"https://starwars-visualguide.com/assets/img/characters/7.jpg"
		);
	}

	#[test]
	fn starship_ignores_extra_fields() {
		let s: Starship = serde_json::from_str(
			r#"{"name": "X-wing", "model": "T-65", "films": [1, 2, 3], "pilots": [1]}"#,
		)
		.unwrap();
		assert_eq!(s.name, "X-wing");
		assert_eq!(s.films, vec![1, 2, 3]);
	}
}

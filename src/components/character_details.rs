use leptos::prelude::*;

use crate::catalog::Character;

/// Descriptor sheet shown above the selected character's graph.
#[component]
pub fn CharacterDetails(character: Character) -> impl IntoView {
	let rows = [
		("Height", character.height),
		("Mass", character.mass),
		("Hair", character.hair_color),
		("Skin", character.skin_color),
		("Eyes", character.eye_color),
		("Born", character.birth_year),
		("Gender", character.gender),
	];
	let links = format!(
		"{} films · {} starships · {} vehicles · {} species",
		character.films.len(),
		character.starships.len(),
		character.vehicles.len(),
		character.species.len(),
	);

	view! {
		<aside class="character-details">
			<h2>{character.name}</h2>
			<dl>
				{rows
					.into_iter()
					.filter(|(_, value)| !value.is_empty())
					.map(|(term, value)| view! { <dt>{term}</dt><dd>{value}</dd> })
					.collect_view()}
			</dl>
			<p class="links">{links}</p>
			<a class="source" href=character.url target="_blank">
				{format!("Catalog record created {}, edited {}", character.created, character.edited)}
			</a>
		</aside>
	}
}

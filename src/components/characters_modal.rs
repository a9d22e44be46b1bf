use leptos::prelude::*;

use super::character_details::CharacterDetails;
use super::character_graph::CharacterGraph;
use super::pagination::Pagination;
use super::preloader::Preloader;
use crate::catalog::Character;
use crate::relations::use_relation_graph;
use crate::roster::{RosterState, page_change, use_roster};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Panel {
	Roster,
	Graph,
}

/// Two-panel modal: the paged roster, and the graph of the selected
/// character. Page and selection are owned here and passed down.
#[component]
pub fn CharactersModal(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
	let (page, set_page) = signal(1u32);
	let roster = use_roster(page.into());
	let (selected, set_selected) = signal(None::<Character>);
	let graph = use_relation_graph(selected.into());
	let (panel, set_panel) = signal(Panel::Roster);

	let page_count = Signal::derive(move || roster.with(RosterState::page_count));
	let change_page = Callback::new(move |next: u32| {
		if let Some(next) = page_change(page.get_untracked(), next) {
			set_page.set(next);
		}
	});

	// Clicking the selected character again clears the selection.
	let toggle = move |character: Character| {
		let already = selected.with_untracked(|s| s.as_ref().is_some_and(|c| c.id == character.id));
		if already {
			set_selected.set(None);
		} else {
			set_selected.set(Some(character));
			set_panel.set(Panel::Graph);
		}
	};

	let character_card = move |character: Character| {
		let id = character.id;
		let is_selected = move || selected.with(|s| s.as_ref().is_some_and(|c| c.id == id));
		let (portrait, name) = (character.portrait_url(), character.name.clone());
		view! {
			<button class="character" on:click=move |_| toggle(character.clone())>
				<img class="character-img" src=portrait alt="" />
				<p class="character-name">{name}</p>
				<Show when=is_selected>
					<p class="selected">"selected"</p>
				</Show>
			</button>
		}
	};

	view! {
		<div class="characters-modal-wrap">
			<div class="slides" class:show-graph=move || panel.get() == Panel::Graph>
				<section class="slide roster-slide">
					<button class="close-btn" on:click=move |_| on_close.run(())>
						"✕"
					</button>
					<div class="pagination-wrap">
						<Pagination count=page_count page=page on_change=change_page />
					</div>
					<div class="roster">
						{move || match roster.get() {
							RosterState::Loading { .. } => view! { <Preloader /> }.into_any(),
							RosterState::Failed => {
								view! { <p class="roster-error">"Could not load characters."</p> }
									.into_any()
							}
							RosterState::Loaded(loaded) => {
								loaded.characters.into_iter().map(character_card).collect_view().into_any()
							}
						}}
					</div>
				</section>
				<section class="slide graph-slide">
					<button class="go-back" on:click=move |_| set_panel.set(Panel::Roster)>
						"‹"
					</button>
					{move || {
						selected.get().map(|character| view! { <CharacterDetails character=character /> })
					}}
					<CharacterGraph state=graph />
				</section>
			</div>
		</div>
	}
}

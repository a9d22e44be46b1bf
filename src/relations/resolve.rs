use futures::future::try_join_all;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{error, info};

use super::layout::build_graph;
use super::model::RelationGraph;
use crate::catalog::{Catalog, CatalogClient, Character, Result};
use crate::config::CatalogConfig;
use crate::generation::Generation;

/// Fetches every film, then every starship, referenced by `character` and
/// builds its graph. Requests within a batch run concurrently; results keep
/// reference order. The first failure aborts the build.
pub async fn resolve_graph<C: Catalog + ?Sized>(
	catalog: &C,
	character: &Character,
) -> Result<RelationGraph> {
	let films = try_join_all(character.films.iter().map(|&id| catalog.film(id))).await?;
	let starships =
		try_join_all(character.starships.iter().map(|&id| catalog.starship(id))).await?;
	Ok(build_graph(character, &films, &starships))
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum GraphState {
	/// No character selected.
	#[default]
	Empty,
	Loading,
	Ready(RelationGraph),
	Failed,
}

impl GraphState {
	pub fn graph(&self) -> Option<&RelationGraph> {
		match self {
			Self::Ready(graph) => Some(graph),
			_ => None,
		}
	}
}

/// Resolves selections, dropping results overtaken by a newer selection.
#[derive(Clone, Default)]
pub struct GraphResolver {
	generation: Generation,
}

impl GraphResolver {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns `None` if another call started before this one finished.
	pub async fn resolve<C: Catalog + ?Sized>(
		&self,
		catalog: &C,
		selection: Option<&Character>,
	) -> Option<GraphState> {
		let ticket = self.generation.advance();
		let Some(character) = selection else {
			return Some(GraphState::Empty);
		};

		let state = match resolve_graph(catalog, character).await {
			Ok(graph) => {
				info!(
					"Resolved graph for {}: {} nodes, {} edges",
					character.name,
					graph.nodes.len(),
					graph.edges.len()
				);
				GraphState::Ready(graph)
			}
			Err(err) => {
				error!("Error while resolving graph for {}: {err}", character.name);
				GraphState::Failed
			}
		};
		self.generation.is_current(ticket).then_some(state)
	}
}

/// Rebuilds the relation graph whenever `selected` changes.
pub fn use_relation_graph(selected: Signal<Option<Character>>) -> ReadSignal<GraphState> {
	let config = use_context::<CatalogConfig>().unwrap_or_default();
	let (state, set_state) = signal(GraphState::Empty);
	let resolver = GraphResolver::new();

	Effect::new(move |_| {
		let selection = selected.get();
		if selection.is_some() {
			set_state.set(GraphState::Loading);
		}

		let (resolver, client) = (resolver.clone(), CatalogClient::new(config.clone()));
		spawn_local(async move {
			if let Some(next) = resolver.resolve(&client, selection.as_ref()).await {
				set_state.set(next);
			}
		});
	});

	state
}

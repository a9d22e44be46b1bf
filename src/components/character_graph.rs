use leptos::prelude::*;

use super::force_graph::ForceGraphCanvas;
use super::preloader::Preloader;
use crate::relations::GraphState;

/// Graph panel for the selected character, with placeholders for the
/// loading, empty and failed states.
#[component]
pub fn CharacterGraph(#[prop(into)] state: Signal<GraphState>) -> impl IntoView {
	let graph = Signal::derive(move || state.with(|s| s.graph().cloned().unwrap_or_default()));
	let ready = move || state.with(|s| s.graph().is_some());
	let loading = move || state.with(|s| matches!(s, GraphState::Loading));

	view! {
		<Show
			when=ready
			fallback=move || {
				view! {
					<Show
						when=loading
						fallback=|| view! { <div class="no-data">"No data available"</div> }
					>
						<Preloader />
					</Show>
				}
			}
		>
			<div class="graph-wrap">
				<ForceGraphCanvas data=graph />
			</div>
		</Show>
	}
}

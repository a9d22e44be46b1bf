use leptos::prelude::*;

use crate::components::characters_modal::CharactersModal;

/// Landing page with the button that opens the character modal.
#[component]
pub fn Home() -> impl IntoView {
	let (is_open, set_open) = signal(false);
	let close = Callback::new(move |_: ()| set_open.set(false));

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="main-wrap">
				<h1 class="guidebook-text">"Star Wars. Guidebook"</h1>
				<button class="learn-more" on:click=move |_| set_open.update(|open| *open = !*open)>
					"Learn about characters"
				</button>
				<Show when=move || is_open.get()>
					<CharactersModal on_close=close />
				</Show>
			</div>
		</ErrorBoundary>
	}
}

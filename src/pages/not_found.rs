use leptos::prelude::*;

/// 404 - Not Found
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="not-found">
			<h1>"This is not the page you are looking for."</h1>
			<a href="/">"Back to the guidebook"</a>
		</div>
	}
}

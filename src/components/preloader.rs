use leptos::prelude::*;

#[component]
pub fn Preloader() -> impl IntoView {
	view! {
		<div class="preloader">
			<div class="spinner"></div>
			<p class="loading-text">"Loading.."</p>
		</div>
	}
}

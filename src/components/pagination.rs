use leptos::prelude::*;

/// Numbered page buttons, `1..=count`.
#[component]
pub fn Pagination(
	#[prop(into)] count: Signal<u32>,
	#[prop(into)] page: Signal<u32>,
	#[prop(into)] on_change: Callback<u32>,
) -> impl IntoView {
	view! {
		<nav class="pagination">
			{move || {
				(1..=count.get())
					.map(|n| {
						view! {
							<button
								class="page-item"
								class:selected=move || page.get() == n
								on:click=move |_| on_change.run(n)
							>
								{n}
							</button>
						}
					})
					.collect_view()
			}}
		</nav>
	}
}

use leptos::prelude::*;

/// 404 page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="not-found">
			<h1>"Page not found"</h1>
			<p>
				"Try the " <a href="/bfs">"breadth-first"</a> " or " <a href="/dfs">"depth-first"</a>
				" player, or go " <a href="/">"home"</a> "."
			</p>
		</div>
	}
}

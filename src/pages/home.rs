use leptos::prelude::*;

use crate::components::traversal_player::TraversalPlayer;
use crate::traversal::TraversalKind;

/// Lists the errors caught by an `ErrorBoundary`.
#[component]
pub fn ErrorList(errors: ArcRwSignal<Errors>) -> impl IntoView {
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
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| view! { <ErrorList errors=errors /> }>
			<div class="page">
				<header class="page-header">
					<h1>"Graph Traversal, Step by Step"</h1>
					<p class="subtitle">
						"Both searches start at node 0 of the same graph. Open "
						<a href="/bfs">"BFS"</a> " or " <a href="/dfs">"DFS"</a>
						" alone for keyboard controls."
					</p>
				</header>
				<div class="players">
					<TraversalPlayer kind=TraversalKind::BreadthFirst />
					<TraversalPlayer kind=TraversalKind::DepthFirst />
				</div>
			</div>
		</ErrorBoundary>
	}
}

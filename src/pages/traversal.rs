use leptos::prelude::*;

use crate::components::traversal_player::TraversalPlayer;
use crate::traversal::TraversalKind;

use super::home::ErrorList;

#[component]
fn SinglePlayer(kind: TraversalKind) -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| view! { <ErrorList errors=errors /> }>
			<div class="single-player">
				<TraversalPlayer kind=kind keyboard=true />
				<p class="subtitle">
					"Space plays or pauses. Right arrow or N steps. R resets."
				</p>
				<a href="/">"Back to both players"</a>
			</div>
		</ErrorBoundary>
	}
}

/// Breadth-first player with keyboard shortcuts.
#[component]
pub fn BfsPage() -> impl IntoView {
	view! { <SinglePlayer kind=TraversalKind::BreadthFirst /> }
}

/// Depth-first player with keyboard shortcuts.
#[component]
pub fn DfsPage() -> impl IntoView {
	view! { <SinglePlayer kind=TraversalKind::DepthFirst /> }
}

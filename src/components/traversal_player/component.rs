use std::time::Duration;

use leptos::ev;
use leptos::leptos_dom::helpers::{IntervalHandle, set_interval_with_handle, window_event_listener};
use leptos::prelude::*;
use log::{debug, error, warn};
use wasm_bindgen::JsValue;
use web_sys::KeyboardEvent;

use super::render;
use super::state::{insight_lines, step_counter, visit_order_text};
use super::types::Layout;
use crate::traversal::{DEFAULT_INTERVAL, Graph, NodeId, Playback, Snapshot, TraversalKind};

fn log_js_error(context: &str, err: JsValue) {
	error!("{context}: {err:?}");
}

/// Step-by-step player for one traversal of a small graph.
///
/// The whole snapshot sequence is generated on mount. An unknown `start`
/// node is returned as an error for the surrounding `ErrorBoundary`.
#[component]
pub fn TraversalPlayer(
	/// Traversal to animate.
	kind: TraversalKind,
	/// Graph to traverse; the sample graph when omitted.
	#[prop(optional)]
	graph: Option<Graph>,
	/// Node positions; the sample table or a circle when omitted.
	#[prop(optional)]
	layout: Option<Layout>,
	/// Node the traversal starts from.
	#[prop(default = 0)]
	start: NodeId,
	/// Autoplay period.
	#[prop(default = DEFAULT_INTERVAL)]
	interval: Duration,
	/// Listen for Space / ArrowRight / N / R on the window.
	#[prop(default = false)]
	keyboard: bool,
) -> impl IntoView {
	let layout = match (layout, &graph) {
		(Some(layout), Some(g)) if layout.covers(g.len()) => layout,
		(Some(layout), None) if layout.covers(Graph::sample().len()) => layout,
		(Some(_), _) => {
			warn!("layout does not place every node, falling back to a circle");
			Layout::circular(graph.as_ref().map_or(Graph::sample().len(), Graph::len), 500.0, 400.0)
		}
		(None, None) => Layout::sample(),
		(None, Some(g)) => Layout::circular(g.len(), 500.0, 400.0),
	};
	let graph = graph.unwrap_or_else(Graph::sample);

	let steps = match kind.generate(&graph, start) {
		Ok(steps) => steps,
		Err(err) => {
			error!("{} player: {err}", kind.acronym());
			return Err(err);
		}
	};
	debug!("{} player mounted with {} steps", kind.acronym(), steps.len());

	let playback = RwSignal::new(Playback::new(steps.len()));
	let steps = StoredValue::new(steps);
	let snapshot = Memo::new(move |_| {
		let cursor = playback.with(Playback::cursor);
		steps.with_value(|s| s[cursor].clone())
	});

	// One interval per Playing stretch; cleared on pause, auto-pause or unmount.
	let timer = StoredValue::new(None::<IntervalHandle>);
	Effect::new(move |_| {
		if playback.with(Playback::is_playing) {
			if timer.with_value(Option::is_some) {
				return;
			}
			let tick = move || {
				playback.try_update(|p| p.tick());
			};
			match set_interval_with_handle(tick, interval) {
				Ok(handle) => timer.set_value(Some(handle)),
				Err(err) => {
					log_js_error("could not start autoplay", err);
					playback.update(Playback::pause);
				}
			}
		} else if let Some(handle) = timer.try_update_value(Option::take).flatten() {
			handle.clear();
		}
	});
	on_cleanup(move || {
		if let Some(handle) = timer.try_update_value(Option::take).flatten() {
			handle.clear();
		}
	});

	if keyboard {
		let listener = window_event_listener(ev::keydown, move |ev: KeyboardEvent| {
			match ev.key().as_str() {
				" " => {
					ev.prevent_default();
					playback.update(Playback::toggle);
				}
				"ArrowRight" | "n" => playback.update(Playback::step),
				"r" => playback.update(Playback::reset),
				_ => {}
			}
		});
		on_cleanup(move || listener.remove());
	}

	let frontier = kind.frontier();
	let insights = insight_lines(kind, &graph, start);

	Ok(view! {
		<div class="traversal-player">
			<h2>{format!("{} Traversal Visualization", kind.acronym())}</h2>

			<div class="panel graph-panel">{render::graph_svg(&graph, &layout, snapshot)}</div>

			<div class="controls">
				<button class="btn play" on:click=move |_| playback.update(Playback::toggle)>
					{move || if playback.with(Playback::is_playing) { "Pause" } else { "Play" }}
				</button>
				<button
					class="btn next"
					disabled=move || !playback.with(Playback::can_step)
					on:click=move |_| playback.update(Playback::step)
				>
					"Next"
				</button>
				<button class="btn reset" on:click=move |_| playback.update(Playback::reset)>
					"Reset"
				</button>
			</div>

			<div class="panel step-info">
				<div class="step-message">
					<strong>{move || playback.with(|p| step_counter(p.cursor(), p.len()))}":"</strong>
					<span>{move || snapshot.with(Snapshot::description)}</span>
				</div>
				<div class="step-panels">
					{render::frontier_panel(frontier, snapshot)}
					<div class="panel visit-order">
						<h3>"Visit Order:"</h3>
						<div class="visit-order-text">
							{move || {
								let text = snapshot.with(visit_order_text);
								if text.is_empty() { "None yet".to_string() } else { text }
							}}
						</div>
					</div>
				</div>
			</div>

			{render::legend()}
			{render::insights(insights)}
		</div>
	})
}

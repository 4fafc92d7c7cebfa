use leptos::prelude::*;

use super::state::{NodeState, frontier_entries, frontier_heading};
use super::types::Layout;
use crate::traversal::{FrontierKind, Graph, Snapshot};

const EDGE_STROKE: &str = "#cbd5e1";
const NODE_STROKE: &str = "#1e293b";

pub fn graph_svg(graph: &Graph, layout: &Layout, snapshot: Memo<Snapshot>) -> impl IntoView + use<> {
	let r = layout.node_radius;

	let edges = graph
		.edges()
		.into_iter()
		.filter_map(|(a, b)| {
			let (p, q) = (layout.position(a)?, layout.position(b)?);
			Some(view! {
				<line
					x1=p.x.to_string()
					y1=p.y.to_string()
					x2=q.x.to_string()
					y2=q.y.to_string()
					stroke=EDGE_STROKE
					stroke-width="2"
				/>
			})
		})
		.collect_view();

	let nodes = graph
		.nodes()
		.filter_map(|node| {
			let p = layout.position(node)?;
			let fill = move || snapshot.with(|s| NodeState::of(s, node).color());
			Some(view! {
				<g class="graph-node">
					<circle
						cx=p.x.to_string()
						cy=p.y.to_string()
						r=r.to_string()
						fill=fill
						stroke=NODE_STROKE
						stroke-width="2"
					/>
					<text
						x=p.x.to_string()
						y={(p.y + r * 0.2).to_string()}
						text-anchor="middle"
						fill="white"
						font-size={(r * 0.72).round().to_string()}
						font-weight="bold"
					>
						{node.to_string()}
					</text>
				</g>
			})
		})
		.collect_view();

	view! {
		<svg
			class="traversal-graph"
			width=layout.width.to_string()
			height=layout.height.to_string()
			viewBox=format!("0 0 {} {}", layout.width, layout.height)
		>
			{edges}
			{nodes}
		</svg>
	}
}

pub fn frontier_panel(kind: FrontierKind, snapshot: Memo<Snapshot>) -> impl IntoView {
	view! {
		<div class="panel frontier">
			<h3>{frontier_heading(kind)}</h3>
			<div class="frontier-items">
				{move || {
					let entries = snapshot.with(|s| frontier_entries(s, kind));
					if entries.is_empty() {
						view! { <span class="muted">"Empty"</span> }.into_any()
					} else {
						entries
							.into_iter()
							.map(|e| {
								view! {
									<div class="frontier-item" class:top=e.is_top>
										{e.node.to_string()}
										{e.is_top.then_some(" ← Top")}
									</div>
								}
							})
							.collect_view()
							.into_any()
					}
				}}
			</div>
		</div>
	}
}

pub fn legend() -> impl IntoView {
	view! {
		<div class="panel legend">
			<h3>"Legend:"</h3>
			<div class="legend-items">
				{NodeState::ALL
					.into_iter()
					.map(|state| {
						view! {
							<div class="legend-item">
								<span class="swatch" style:background-color=state.color()></span>
								<span>{state.label()}</span>
							</div>
						}
					})
					.collect_view()}
			</div>
		</div>
	}
}

pub fn insights(lines: Vec<String>) -> impl IntoView {
	view! {
		<div class="panel insights">
			<h3>"About this graph:"</h3>
			<ul>{lines.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}</ul>
		</div>
	}
}

use crate::traversal::{FrontierKind, Graph, NodeId, Snapshot, TraversalKind, analysis};

/// How a node is drawn for a given snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeState {
	/// Not yet reached.
	Unvisited,
	/// Marked visited and not the current node.
	Visited,
	/// The snapshot's current node.
	Processing,
}

impl NodeState {
	/// Legend order.
	pub const ALL: [NodeState; 3] = [Self::Unvisited, Self::Processing, Self::Visited];

	/// Categorizes `node` under `snapshot`.
	pub fn of(snapshot: &Snapshot, node: NodeId) -> Self {
		if snapshot.current == Some(node) {
			Self::Processing
		} else if snapshot.visited.contains(&node) {
			Self::Visited
		} else {
			Self::Unvisited
		}
	}

	/// SVG fill.
	pub fn color(self) -> &'static str {
		match self {
			Self::Processing => "#ef4444",
			Self::Visited => "#10b981",
			Self::Unvisited => "#94a3b8",
		}
	}

	/// Legend text.
	pub fn label(self) -> &'static str {
		match self {
			Self::Processing => "Currently Processing",
			Self::Visited => "Visited",
			Self::Unvisited => "Unvisited",
		}
	}
}

/// One box in the frontier panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrontierEntry {
	/// Node held in the frontier.
	pub node: NodeId,
	/// Marks the stack top; never set for queues.
	pub is_top: bool,
}

/// Frontier in reading order: queues front first, stacks top first.
pub fn frontier_entries(snapshot: &Snapshot, kind: FrontierKind) -> Vec<FrontierEntry> {
	match kind {
		FrontierKind::Queue => snapshot
			.frontier
			.iter()
			.map(|&node| FrontierEntry {
				node,
				is_top: false,
			})
			.collect(),
		FrontierKind::Stack => snapshot
			.frontier
			.iter()
			.rev()
			.enumerate()
			.map(|(i, &node)| FrontierEntry { node, is_top: i == 0 })
			.collect(),
	}
}

/// Frontier panel heading, naming the reading direction.
pub fn frontier_heading(kind: FrontierKind) -> &'static str {
	match kind {
		FrontierKind::Queue => "Queue Contents (Front → Back):",
		FrontierKind::Stack => "Stack Contents (Top → Bottom):",
	}
}

/// Visit order joined with arrows.
pub fn visit_order_text(snapshot: &Snapshot) -> String {
	join_path(&snapshot.visit_order)
}

/// One-based "Step k of N" label.
pub fn step_counter(cursor: usize, len: usize) -> String {
	format!("Step {} of {}", cursor + 1, len)
}

fn join_path(path: &[NodeId]) -> String {
	path.iter()
		.map(NodeId::to_string)
		.collect::<Vec<_>>()
		.join(" → ")
}

/// Facts about the whole graph shown under the player.
pub fn insight_lines(kind: TraversalKind, graph: &Graph, start: NodeId) -> Vec<String> {
	let mut lines = Vec::new();
	match kind {
		TraversalKind::BreadthFirst => {
			let Ok(levels) = analysis::levels(graph, start) else {
				return lines;
			};
			for (depth, layer) in levels.iter().enumerate() {
				lines.push(format!("Level {depth}: {}", join_path(layer)));
			}
			let farthest = levels.last().and_then(|l| l.last()).copied();
			if let Some(end) = farthest.filter(|&end| end != start) {
				if let Ok(Some(path)) = analysis::shortest_path(graph, start, end) {
					lines.push(format!("Shortest path {start} to {end}: {}", join_path(&path)));
				}
			}
		}
		TraversalKind::DepthFirst => {
			if let Ok(order) = analysis::recursive_order(graph, start) {
				lines.push(format!("Recursive DFS order: {}", join_path(&order)));
			}
			if let Some(end) = graph.nodes().last().filter(|&end| end != start) {
				match analysis::find_path(graph, start, end) {
					Ok(Some(path)) => {
						lines.push(format!("DFS path {start} to {end}: {}", join_path(&path)))
					}
					Ok(None) => lines.push(format!("No path from {start} to {end}")),
					Err(_) => {}
				}
			}
			let cycle = if analysis::has_cycle(graph) { "yes" } else { "no" };
			lines.push(format!("Contains a cycle: {cycle}"));
			lines.push(format!(
				"Connected components: {}",
				analysis::connected_components(graph).len()
			));
		}
	}
	lines
}

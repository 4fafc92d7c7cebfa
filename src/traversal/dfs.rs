use log::debug;

use super::graph::{Graph, GraphError, NodeId};
use super::snapshot::{FrontierKind, Recorder, Snapshot, Transition};

/// Unrolls an explicit-stack depth-first traversal into snapshots.
///
/// Neighbors are pushed in reverse listed order so the first-listed one is
/// popped next. A node is only marked visited when popped, so stale copies
/// can sit on the stack; they are dropped on pop without a snapshot.
pub fn generate(graph: &Graph, start: NodeId) -> Result<Vec<Snapshot>, GraphError> {
	graph.require(start)?;

	let mut rec = Recorder::default();
	let mut stack = vec![start];
	rec.record(
		stack.iter().copied(),
		None,
		Transition::Start {
			node: start,
			frontier: FrontierKind::Stack,
		},
	);

	while let Some(current) = stack.pop() {
		if !rec.visited.insert(current) {
			continue;
		}
		rec.visit_order.push(current);
		rec.record(
			stack.iter().copied(),
			Some(current),
			Transition::Visit { node: current },
		);

		for &neighbor in graph.neighbors(current).iter().rev() {
			if rec.visited.contains(&neighbor) {
				continue;
			}
			stack.push(neighbor);
			rec.record(
				stack.iter().copied(),
				Some(current),
				Transition::Push { node: neighbor },
			);
		}
	}

	rec.record(
		[],
		None,
		Transition::Complete {
			frontier: FrontierKind::Stack,
		},
	);
	debug!("dfs from {start}: {} steps", rec.steps.len());
	Ok(rec.steps)
}

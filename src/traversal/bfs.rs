use std::collections::VecDeque;

use log::debug;

use super::graph::{Graph, GraphError, NodeId};
use super::snapshot::{FrontierKind, Recorder, Snapshot, Transition};

/// Unrolls a queue-based breadth-first traversal into snapshots.
///
/// Nodes are marked visited when discovered, so each reachable node enters
/// the queue exactly once.
pub fn generate(graph: &Graph, start: NodeId) -> Result<Vec<Snapshot>, GraphError> {
	graph.require(start)?;

	let mut rec = Recorder::default();
	let mut queue = VecDeque::from([start]);
	rec.visited.insert(start);
	rec.visit_order.push(start);
	rec.record(
		queue.iter().copied(),
		None,
		Transition::Start {
			node: start,
			frontier: FrontierKind::Queue,
		},
	);

	while let Some(current) = queue.pop_front() {
		rec.record(
			queue.iter().copied(),
			Some(current),
			Transition::Dequeue { node: current },
		);

		for &neighbor in graph.neighbors(current) {
			if !rec.visited.insert(neighbor) {
				continue;
			}
			queue.push_back(neighbor);
			rec.visit_order.push(neighbor);
			rec.record(
				queue.iter().copied(),
				Some(current),
				Transition::Discover { node: neighbor },
			);
		}
	}

	rec.record(
		[],
		None,
		Transition::Complete {
			frontier: FrontierKind::Queue,
		},
	);
	debug!("bfs from {start}: {} steps", rec.steps.len());
	Ok(rec.steps)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::traversal::analysis;

	fn dequeued(steps: &[Snapshot]) -> Vec<NodeId> {
		steps
			.iter()
			.filter_map(|s| match s.transition {
				Transition::Dequeue { node } => Some(node),
				_ => None,
			})
			.collect()
	}

	#[test]
	fn sample_visit_order_is_level_order() {
		let steps = generate(&Graph::sample(), 0).unwrap();
		let last = steps.last().unwrap();
		assert_eq!(last.visit_order, vec![0, 1, 2, 3, 4, 5, 6, 7, 8]);
		assert_eq!(steps.len(), 19);
	}

	#[test]
	fn first_and_last_snapshots() {
		let steps = generate(&Graph::sample(), 0).unwrap();
		let first = &steps[0];
		assert_eq!(first.frontier, vec![0]);
		assert_eq!(first.visit_order, vec![0]);
		assert!(first.visited.contains(&0));
		assert_eq!(first.current, None);

		let last = steps.last().unwrap();
		assert!(last.frontier.is_empty());
		assert_eq!(last.current, None);
		assert_eq!(
			last.transition,
			Transition::Complete {
				frontier: FrontierKind::Queue
			}
		);
	}

	#[test]
	fn dequeue_snapshot_reflects_post_removal_queue() {
		let steps = generate(&Graph::sample(), 0).unwrap();
		assert_eq!(steps[1].transition, Transition::Dequeue { node: 0 });
		assert!(steps[1].frontier.is_empty());
		assert_eq!(steps[1].current, Some(0));
		assert_eq!(steps[2].transition, Transition::Discover { node: 1 });
		assert_eq!(steps[2].frontier, vec![1]);
		assert_eq!(steps[3].frontier, vec![1, 2]);
		assert_eq!(steps[3].current, Some(0));
	}

	#[test]
	fn neighbor_order_breaks_ties() {
		let graph = Graph::from_adjacency([vec![3, 1, 2], vec![0], vec![0], vec![0]]).unwrap();
		let steps = generate(&graph, 0).unwrap();
		assert_eq!(steps.last().unwrap().visit_order, vec![0, 3, 1, 2]);
	}

	#[test]
	fn dequeues_follow_visit_order_with_non_decreasing_distance() {
		let graphs = [
			Graph::sample(),
			Graph::from_edges(6, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0)]).unwrap(),
			Graph::from_edges(4, &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]).unwrap(),
			Graph::from_edges(5, &[(0, 4), (4, 2), (2, 0)]).unwrap(),
		];
		for graph in &graphs {
			for start in graph.nodes() {
				let steps = generate(graph, start).unwrap();
				let order = &steps.last().unwrap().visit_order;
				assert_eq!(&dequeued(&steps), order);

				let distances = analysis::distances(graph, start);
				let levels: Vec<usize> = order.iter().map(|&n| distances[n].unwrap()).collect();
				assert!(levels.windows(2).all(|w| w[0] <= w[1]));
			}
		}
	}

	#[test]
	fn visited_only_grows_and_skips_unreachable() {
		let graph = Graph::from_edges(5, &[(0, 1), (1, 2), (3, 4)]).unwrap();
		let steps = generate(&graph, 0).unwrap();
		for pair in steps.windows(2) {
			assert!(pair[0].visited.is_subset(&pair[1].visited));
		}
		let last = steps.last().unwrap();
		assert_eq!(last.visited.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
		assert!(steps.iter().all(|s| !s.visit_order.contains(&3) && !s.visited.contains(&4)));
	}

	#[test]
	fn generation_is_deterministic() {
		let graph = Graph::sample();
		assert_eq!(generate(&graph, 0).unwrap(), generate(&graph, 0).unwrap());
	}

	#[test]
	fn unknown_start_is_rejected() {
		assert_eq!(generate(&Graph::sample(), 9), Err(GraphError::UnknownNode(9)));
	}
}

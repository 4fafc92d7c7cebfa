//! Whole-graph queries built on breadth- and depth-first search.

use std::collections::VecDeque;

use super::graph::{Graph, GraphError, NodeId};

/// Hop distance from `start` to every node, `None` where unreachable.
///
/// Unknown start nodes yield all `None`.
pub fn distances(graph: &Graph, start: NodeId) -> Vec<Option<usize>> {
	let mut distance = vec![None; graph.len()];
	if !graph.contains(start) {
		return distance;
	}
	distance[start] = Some(0);
	let mut queue = VecDeque::from([start]);

	while let Some(current) = queue.pop_front() {
		let next = distance[current].map(|d| d + 1);
		for &neighbor in graph.neighbors(current) {
			if distance[neighbor].is_none() {
				distance[neighbor] = next;
				queue.push_back(neighbor);
			}
		}
	}
	distance
}

/// Fewest-hop path from `start` to `end`, both endpoints included.
pub fn shortest_path(
	graph: &Graph,
	start: NodeId,
	end: NodeId,
) -> Result<Option<Vec<NodeId>>, GraphError> {
	graph.require(start)?;
	graph.require(end)?;

	let mut parent: Vec<Option<NodeId>> = vec![None; graph.len()];
	let mut seen = vec![false; graph.len()];
	seen[start] = true;
	let mut queue = VecDeque::from([start]);

	while let Some(current) = queue.pop_front() {
		if current == end {
			break;
		}
		for &neighbor in graph.neighbors(current) {
			if !seen[neighbor] {
				seen[neighbor] = true;
				parent[neighbor] = Some(current);
				queue.push_back(neighbor);
			}
		}
	}

	if !seen[end] {
		return Ok(None);
	}
	let mut path = vec![end];
	let mut node = end;
	while let Some(prev) = parent[node] {
		path.push(prev);
		node = prev;
	}
	path.reverse();
	Ok(Some(path))
}

/// Breadth-first layers: `levels[d]` holds the nodes at distance `d`, in
/// discovery order.
pub fn levels(graph: &Graph, start: NodeId) -> Result<Vec<Vec<NodeId>>, GraphError> {
	graph.require(start)?;

	let mut seen = vec![false; graph.len()];
	seen[start] = true;
	let mut layers = Vec::new();
	let mut layer = vec![start];

	while !layer.is_empty() {
		let mut next = Vec::new();
		for &current in &layer {
			for &neighbor in graph.neighbors(current) {
				if !seen[neighbor] {
					seen[neighbor] = true;
					next.push(neighbor);
				}
			}
		}
		layers.push(std::mem::replace(&mut layer, next));
	}
	Ok(layers)
}

/// Nodes whose shortest distance from `start` is exactly `depth`.
pub fn nodes_at_depth(graph: &Graph, start: NodeId, depth: usize) -> Result<Vec<NodeId>, GraphError> {
	Ok(levels(graph, start)?.into_iter().nth(depth).unwrap_or_default())
}

/// Pre-order of a recursive depth-first search following listed neighbor order.
pub fn recursive_order(graph: &Graph, start: NodeId) -> Result<Vec<NodeId>, GraphError> {
	fn walk(graph: &Graph, node: NodeId, seen: &mut [bool], order: &mut Vec<NodeId>) {
		seen[node] = true;
		order.push(node);
		for &neighbor in graph.neighbors(node) {
			if !seen[neighbor] {
				walk(graph, neighbor, seen, order);
			}
		}
	}

	graph.require(start)?;
	let mut seen = vec![false; graph.len()];
	let mut order = Vec::new();
	walk(graph, start, &mut seen, &mut order);
	Ok(order)
}

/// First path a depth-first search finds from `start` to `end`.
///
/// Unlike [`shortest_path`] this follows neighbor order and backtracks out
/// of dead ends, so the result need not be the shortest.
pub fn find_path(
	graph: &Graph,
	start: NodeId,
	end: NodeId,
) -> Result<Option<Vec<NodeId>>, GraphError> {
	fn search(
		graph: &Graph,
		node: NodeId,
		end: NodeId,
		seen: &mut [bool],
		path: &mut Vec<NodeId>,
	) -> bool {
		seen[node] = true;
		path.push(node);
		if node == end {
			return true;
		}
		for &neighbor in graph.neighbors(node) {
			if !seen[neighbor] && search(graph, neighbor, end, seen, path) {
				return true;
			}
		}
		path.pop();
		false
	}

	graph.require(start)?;
	graph.require(end)?;
	let mut seen = vec![false; graph.len()];
	let mut path = Vec::new();
	Ok(search(graph, start, end, &mut seen, &mut path).then_some(path))
}

/// True when any connected component contains a cycle.
pub fn has_cycle(graph: &Graph) -> bool {
	let mut seen = vec![false; graph.len()];
	for root in graph.nodes() {
		if seen[root] {
			continue;
		}
		seen[root] = true;
		// (node, parent) pairs; a seen neighbor other than the parent closes a cycle.
		let mut stack = vec![(root, None)];
		while let Some((node, parent)) = stack.pop() {
			let mut parent_skipped = false;
			for &neighbor in graph.neighbors(node) {
				if Some(neighbor) == parent && !parent_skipped {
					parent_skipped = true;
					continue;
				}
				if seen[neighbor] {
					return true;
				}
				seen[neighbor] = true;
				stack.push((neighbor, Some(node)));
			}
		}
	}
	false
}

/// Connected components, each listed in breadth-first order from its lowest node.
pub fn connected_components(graph: &Graph) -> Vec<Vec<NodeId>> {
	let mut seen = vec![false; graph.len()];
	let mut components = Vec::new();
	for root in graph.nodes() {
		if seen[root] {
			continue;
		}
		seen[root] = true;
		let mut component = vec![root];
		let mut cursor = 0;
		while let Some(&node) = component.get(cursor) {
			cursor += 1;
			for &neighbor in graph.neighbors(node) {
				if !seen[neighbor] {
					seen[neighbor] = true;
					component.push(neighbor);
				}
			}
		}
		components.push(component);
	}
	components
}

#[cfg(test)]
mod tests {
	use super::*;

	fn disconnected() -> Graph {
		Graph::from_edges(7, &[(0, 1), (0, 2), (3, 4), (5, 6)]).unwrap()
	}

	fn square() -> Graph {
		Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap()
	}

	#[test]
	fn sample_distances_and_levels() {
		let graph = Graph::sample();
		let d: Vec<usize> = distances(&graph, 0).into_iter().map(Option::unwrap).collect();
		assert_eq!(d, vec![0, 1, 1, 2, 2, 2, 2, 3, 3]);
		assert_eq!(
			levels(&graph, 0).unwrap(),
			vec![vec![0], vec![1, 2], vec![3, 4, 5, 6], vec![7, 8]]
		);
		assert_eq!(nodes_at_depth(&graph, 0, 2).unwrap(), vec![3, 4, 5, 6]);
		assert!(nodes_at_depth(&graph, 0, 9).unwrap().is_empty());
	}

	#[test]
	fn unreachable_nodes_have_no_distance() {
		let d = distances(&disconnected(), 0);
		assert_eq!(d[2], Some(1));
		assert_eq!(d[3], None);
		assert_eq!(shortest_path(&disconnected(), 0, 6).unwrap(), None);
	}

	#[test]
	fn shortest_path_through_sample() {
		let graph = Graph::sample();
		assert_eq!(shortest_path(&graph, 0, 6).unwrap(), Some(vec![0, 2, 6]));
		assert_eq!(shortest_path(&graph, 7, 8).unwrap(), Some(vec![7, 4, 1, 0, 2, 6, 8]));
		assert_eq!(shortest_path(&graph, 3, 3).unwrap(), Some(vec![3]));
		assert_eq!(shortest_path(&graph, 0, 11), Err(GraphError::UnknownNode(11)));
	}

	#[test]
	fn depth_first_path_follows_neighbor_order() {
		assert_eq!(find_path(&Graph::sample(), 0, 8).unwrap(), Some(vec![0, 2, 6, 8]));
		// 0 -> 1 -> 2 is found before the direct 0 -> 3 -> 2 alternative is tried.
		assert_eq!(find_path(&square(), 0, 2).unwrap(), Some(vec![0, 1, 2]));
		assert_eq!(find_path(&disconnected(), 0, 4).unwrap(), None);
	}

	#[test]
	fn recursive_order_on_sample() {
		assert_eq!(
			recursive_order(&Graph::sample(), 0).unwrap(),
			vec![0, 1, 3, 4, 7, 2, 5, 6, 8]
		);
	}

	#[test]
	fn cycle_detection() {
		assert!(!has_cycle(&Graph::sample()));
		assert!(!has_cycle(&disconnected()));
		assert!(has_cycle(&square()));
		let triangle_plus_tail = Graph::from_edges(5, &[(3, 4), (0, 1), (1, 2), (2, 0)]).unwrap();
		assert!(has_cycle(&triangle_plus_tail));
	}

	#[test]
	fn parallel_edges_form_a_cycle() {
		let graph = Graph::from_edges(2, &[(0, 1), (0, 1)]).unwrap();
		assert!(has_cycle(&graph));
	}

	#[test]
	fn component_counts() {
		assert_eq!(connected_components(&Graph::sample()).len(), 1);
		assert_eq!(
			connected_components(&disconnected()),
			vec![vec![0, 1, 2], vec![3, 4], vec![5, 6]]
		);
	}
}

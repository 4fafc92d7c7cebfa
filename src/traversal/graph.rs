use thiserror::Error;

/// Dense node identifier, `0..node_count`.
pub type NodeId = usize;

/// Reasons a graph or a traversal request is rejected.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GraphError {
	/// An adjacency list references a node that does not exist.
	#[error("node {node} lists neighbor {neighbor}, but the graph only has {len} nodes")]
	NeighborOutOfRange {
		/// Node whose list holds the bad entry.
		node: NodeId,
		/// The out-of-range neighbor.
		neighbor: NodeId,
		/// Number of nodes in the graph.
		len: usize,
	},
	/// `from` lists `to` but `to` does not list `from`.
	#[error("edge {from} -> {to} has no matching edge {to} -> {from}")]
	AsymmetricEdge {
		/// Endpoint that lists the edge.
		from: NodeId,
		/// Endpoint missing the reverse entry.
		to: NodeId,
	},
	/// A start or target node is not part of the graph.
	#[error("node {0} is not part of the graph")]
	UnknownNode(NodeId),
}

/// Immutable undirected graph stored as ordered adjacency lists.
///
/// Neighbor order is insertion order and drives the tie-breaking of every
/// traversal in this crate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
	adjacency: Vec<Vec<NodeId>>,
}

impl Graph {
	/// Builds a graph from one neighbor list per node.
	pub fn from_adjacency<L>(lists: impl IntoIterator<Item = L>) -> Result<Self, GraphError>
	where
		L: AsRef<[NodeId]>,
	{
		let adjacency: Vec<Vec<NodeId>> = lists.into_iter().map(|l| l.as_ref().to_vec()).collect();
		let len = adjacency.len();

		for (node, neighbors) in adjacency.iter().enumerate() {
			for &neighbor in neighbors {
				if neighbor >= len {
					return Err(GraphError::NeighborOutOfRange {
						node,
						neighbor,
						len,
					});
				}
				let forward = neighbors.iter().filter(|&&n| n == neighbor).count();
				let backward = adjacency[neighbor].iter().filter(|&&n| n == node).count();
				if forward != backward {
					return Err(GraphError::AsymmetricEdge {
						from: node,
						to: neighbor,
					});
				}
			}
		}

		Ok(Self { adjacency })
	}

	/// Builds a graph with `len` nodes by adding each undirected edge to both endpoints.
	pub fn from_edges(len: usize, edges: &[(NodeId, NodeId)]) -> Result<Self, GraphError> {
		let mut adjacency = vec![Vec::new(); len];
		for &(a, b) in edges {
			for (node, neighbor) in [(a, b), (b, a)] {
				let Some(list) = adjacency.get_mut(node) else {
					return Err(GraphError::NeighborOutOfRange {
						node: neighbor,
						neighbor: node,
						len,
					});
				};
				list.push(neighbor);
			}
		}
		Ok(Self { adjacency })
	}

	/// The nine-node demo graph shown by both players.
	pub fn sample() -> Self {
		Self {
			adjacency: vec![
				vec![1, 2],
				vec![0, 3, 4],
				vec![0, 5, 6],
				vec![1],
				vec![1, 7],
				vec![2],
				vec![2, 8],
				vec![4],
				vec![6],
			],
		}
	}

	/// Number of nodes.
	pub fn len(&self) -> usize {
		self.adjacency.len()
	}

	/// True when the graph has no nodes.
	pub fn is_empty(&self) -> bool {
		self.adjacency.is_empty()
	}

	/// True when `node` is a node of this graph.
	pub fn contains(&self, node: NodeId) -> bool {
		node < self.adjacency.len()
	}

	/// Neighbors of `node` in insertion order; empty for unknown nodes.
	pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
		self.adjacency.get(node).map_or(&[], Vec::as_slice)
	}

	/// Iterator over every node id.
	pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
		0..self.adjacency.len()
	}

	/// Each undirected edge once, as `(low, high)`, in first-appearance order.
	pub fn edges(&self) -> Vec<(NodeId, NodeId)> {
		let mut edges = Vec::new();
		for (node, neighbors) in self.adjacency.iter().enumerate() {
			for &neighbor in neighbors {
				let edge = (node.min(neighbor), node.max(neighbor));
				if !edges.contains(&edge) {
					edges.push(edge);
				}
			}
		}
		edges
	}

	pub(crate) fn require(&self, node: NodeId) -> Result<(), GraphError> {
		if self.contains(node) {
			Ok(())
		} else {
			Err(GraphError::UnknownNode(node))
		}
	}
}

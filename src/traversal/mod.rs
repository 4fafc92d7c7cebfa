//! Step generation and playback for breadth- and depth-first search.
//!
//! A traversal is unrolled once into a [`Snapshot`] sequence, which a
//! [`Playback`] cursor then walks through.

pub mod analysis;
pub mod bfs;
pub mod dfs;
mod graph;
mod playback;
mod snapshot;

pub use graph::{Graph, GraphError, NodeId};
pub use playback::{DEFAULT_INTERVAL, PlayState, Playback};
pub use snapshot::{FrontierKind, Snapshot, Transition};

/// Which traversal a player animates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TraversalKind {
	/// Queue-based breadth-first search.
	BreadthFirst,
	/// Explicit-stack depth-first search.
	DepthFirst,
}

impl TraversalKind {
	/// Precomputes every snapshot of this traversal from `start`.
	pub fn generate(self, graph: &Graph, start: NodeId) -> Result<Vec<Snapshot>, GraphError> {
		match self {
			Self::BreadthFirst => bfs::generate(graph, start),
			Self::DepthFirst => dfs::generate(graph, start),
		}
	}

	/// Frontier this traversal keeps.
	pub fn frontier(self) -> FrontierKind {
		match self {
			Self::BreadthFirst => FrontierKind::Queue,
			Self::DepthFirst => FrontierKind::Stack,
		}
	}

	/// Short acronym, `"BFS"` or `"DFS"`.
	pub fn acronym(self) -> &'static str {
		match self {
			Self::BreadthFirst => "BFS",
			Self::DepthFirst => "DFS",
		}
	}
}

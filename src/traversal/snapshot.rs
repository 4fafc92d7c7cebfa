use std::collections::BTreeSet;
use std::fmt;

use super::graph::NodeId;

/// Shape of the frontier a traversal keeps its pending nodes in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FrontierKind {
	/// First in, first out. Stored front to back.
	Queue,
	/// Last in, first out. Stored bottom to top.
	Stack,
}

impl FrontierKind {
	/// Title-case name used in panel headings.
	pub fn name(self) -> &'static str {
		match self {
			Self::Queue => "Queue",
			Self::Stack => "Stack",
		}
	}
}

/// The event that produced a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
	/// The start node was placed on the frontier.
	Start {
		/// Start node.
		node: NodeId,
		/// Frontier the traversal uses.
		frontier: FrontierKind,
	},
	/// Breadth-first: the head of the queue was removed for processing.
	Dequeue {
		/// Removed node.
		node: NodeId,
	},
	/// Breadth-first: an unvisited neighbor was marked and enqueued.
	Discover {
		/// Newly discovered node.
		node: NodeId,
	},
	/// Depth-first: an unvisited node was popped and marked visited.
	Visit {
		/// Visited node.
		node: NodeId,
	},
	/// Depth-first: an unvisited neighbor was pushed.
	Push {
		/// Pushed node.
		node: NodeId,
	},
	/// The frontier drained.
	Complete {
		/// Frontier the traversal used.
		frontier: FrontierKind,
	},
}

impl fmt::Display for Transition {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match *self {
			Self::Start {
				node,
				frontier: FrontierKind::Queue,
			} => write!(f, "Start: add node {node} to the queue and mark it visited"),
			Self::Start {
				node,
				frontier: FrontierKind::Stack,
			} => write!(f, "Start: push node {node} onto the stack"),
			Self::Dequeue { node } => write!(f, "Process node {node} (dequeue)"),
			Self::Discover { node } => {
				write!(f, "Found unvisited neighbor {node}, add it to the queue")
			}
			Self::Visit { node } => {
				write!(f, "Visit node {node} (pop from the stack and mark visited)")
			}
			Self::Push { node } => write!(f, "Push unvisited neighbor {node} onto the stack"),
			Self::Complete { frontier } => write!(
				f,
				"Complete! {} is empty, all reachable nodes visited",
				frontier.name()
			),
		}
	}
}

/// One frozen instant of a traversal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
	/// Nodes marked visited so far.
	pub visited: BTreeSet<NodeId>,
	/// Frontier contents: queue front to back, or stack bottom to top.
	pub frontier: Vec<NodeId>,
	/// Node being processed, if any.
	pub current: Option<NodeId>,
	/// Nodes in the order they were finalized.
	pub visit_order: Vec<NodeId>,
	/// What produced this snapshot.
	pub transition: Transition,
}

impl Snapshot {
	/// Human-readable account of the transition.
	pub fn description(&self) -> String {
		self.transition.to_string()
	}
}

/// Mutable traversal state that freezes into [`Snapshot`]s.
#[derive(Debug, Default)]
pub(crate) struct Recorder {
	pub visited: BTreeSet<NodeId>,
	pub visit_order: Vec<NodeId>,
	pub steps: Vec<Snapshot>,
}

impl Recorder {
	pub fn record(
		&mut self,
		frontier: impl IntoIterator<Item = NodeId>,
		current: Option<NodeId>,
		transition: Transition,
	) {
		self.steps.push(Snapshot {
			visited: self.visited.clone(),
			frontier: frontier.into_iter().collect(),
			current,
			visit_order: self.visit_order.clone(),
			transition,
		});
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn descriptions_name_the_node_and_frontier() {
		let start = Transition::Start {
			node: 0,
			frontier: FrontierKind::Stack,
		};
		assert_eq!(start.to_string(), "Start: push node 0 onto the stack");
		assert_eq!(
			Transition::Complete {
				frontier: FrontierKind::Queue
			}
			.to_string(),
			"Complete! Queue is empty, all reachable nodes visited"
		);
		assert_eq!(Transition::Dequeue { node: 4 }.to_string(), "Process node 4 (dequeue)");
	}
}

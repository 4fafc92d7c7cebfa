use std::f64::consts::PI;

use crate::traversal::NodeId;

/// Center of a node in SVG user units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodePosition {
	/// Horizontal coordinate.
	pub x: f64,
	/// Vertical coordinate.
	pub y: f64,
}

/// Where each node sits on the SVG canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
	/// Indexed by node id.
	pub positions: Vec<NodePosition>,
	/// Canvas width.
	pub width: f64,
	/// Canvas height.
	pub height: f64,
	/// Circle radius for every node.
	pub node_radius: f64,
}

impl Layout {
	/// Hand-placed positions for [`Graph::sample`](crate::traversal::Graph::sample).
	pub fn sample() -> Self {
		let positions = [
			(250.0, 50.0),
			(150.0, 150.0),
			(350.0, 150.0),
			(50.0, 250.0),
			(200.0, 250.0),
			(300.0, 250.0),
			(450.0, 250.0),
			(200.0, 350.0),
			(450.0, 350.0),
		]
		.into_iter()
		.map(|(x, y)| NodePosition { x, y })
		.collect();

		Self {
			positions,
			width: 500.0,
			height: 400.0,
			node_radius: 25.0,
		}
	}

	/// Evenly spaced ring for graphs without a hand-made layout.
	pub fn circular(n: usize, width: f64, height: f64) -> Self {
		let node_radius = 25.0_f64.min(width.min(height) / 8.0);
		let ring = (width.min(height) / 2.0 - node_radius * 1.5).max(0.0);
		let positions = (0..n)
			.map(|i| {
				// start at 12 o'clock
				let angle = (i as f64) * 2.0 * PI / n as f64 - PI / 2.0;
				NodePosition {
					x: width / 2.0 + ring * angle.cos(),
					y: height / 2.0 + ring * angle.sin(),
				}
			})
			.collect();

		Self {
			positions,
			width,
			height,
			node_radius,
		}
	}

	/// Position of `node`, if placed.
	pub fn position(&self, node: NodeId) -> Option<NodePosition> {
		self.positions.get(node).copied()
	}

	/// True when nodes `0..node_count` all have a position.
	pub fn covers(&self, node_count: usize) -> bool {
		self.positions.len() >= node_count
	}
}

//! Drives generation, playback and presentation together the way a player does.

use traversal_stepper::traversal::{FrontierKind, Graph, PlayState, Playback, Snapshot, TraversalKind};
use traversal_stepper::{NodeState, frontier_entries, visit_order_text};

fn displayed_processing(snapshot: &Snapshot, graph: &Graph) -> Option<usize> {
	graph
		.nodes()
		.find(|&n| NodeState::of(snapshot, n) == NodeState::Processing)
}

#[test]
fn three_steps_show_snapshot_three() {
	let graph = Graph::sample();
	for kind in [TraversalKind::BreadthFirst, TraversalKind::DepthFirst] {
		let steps = kind.generate(&graph, 0).unwrap();
		let mut playback = Playback::new(steps.len());
		for _ in 0..3 {
			playback.step();
		}
		assert_eq!(playback.cursor(), 3);
		let shown = &steps[playback.cursor()];
		assert_eq!(displayed_processing(shown, &graph), shown.current);
		assert_eq!(shown.current, Some(0));
	}
}

#[test]
fn autoplay_walks_to_the_end_and_pauses() {
	let graph = Graph::sample();
	let steps = TraversalKind::BreadthFirst.generate(&graph, 0).unwrap();
	let mut playback = Playback::new(steps.len());
	playback.play();

	let mut ticks = 0;
	while playback.tick() {
		ticks += 1;
		assert!(ticks < 100, "autoplay never stopped");
	}
	assert_eq!(ticks, steps.len() - 1);
	assert_eq!(playback.state(), PlayState::Paused);

	let last = &steps[playback.cursor()];
	assert!(frontier_entries(last, FrontierKind::Queue).is_empty());
	assert_eq!(visit_order_text(last), "0 → 1 → 2 → 3 → 4 → 5 → 6 → 7 → 8");
	assert!(graph.nodes().all(|n| NodeState::of(last, n) == NodeState::Visited));

	// Play does nothing at the end; only reset moves the cursor again.
	playback.play();
	playback.step();
	assert_eq!(playback.cursor(), steps.len() - 1);
	playback.reset();
	assert_eq!((playback.cursor(), playback.state()), (0, PlayState::Paused));
}

#[test]
fn stepping_never_passes_the_last_snapshot() {
	let steps = TraversalKind::DepthFirst.generate(&Graph::sample(), 0).unwrap();
	let mut playback = Playback::new(steps.len());
	for _ in 0..steps.len() * 2 {
		playback.step();
		assert!(playback.cursor() < steps.len());
	}
	assert_eq!(steps[playback.cursor()].description(), "Complete! Stack is empty, all reachable nodes visited");
}

#[test]
fn unreachable_nodes_stay_unvisited_on_screen() {
	let graph = Graph::from_edges(5, &[(0, 1), (1, 2), (3, 4)]).unwrap();
	for kind in [TraversalKind::BreadthFirst, TraversalKind::DepthFirst] {
		let steps = kind.generate(&graph, 0).unwrap();
		for snapshot in &steps {
			assert_eq!(NodeState::of(snapshot, 3), NodeState::Unvisited);
			assert_eq!(NodeState::of(snapshot, 4), NodeState::Unvisited);
		}
		assert_eq!(steps.last().unwrap().visit_order.len(), 3);
	}
}

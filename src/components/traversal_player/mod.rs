mod component;
mod render;
mod state;
mod types;

pub use component::TraversalPlayer;
pub use state::{FrontierEntry, NodeState, frontier_entries, visit_order_text};
pub use types::{Layout, NodePosition};

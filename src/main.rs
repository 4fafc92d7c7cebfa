use leptos::prelude::*;
use traversal_stepper::{App, init_logging};

fn main() {
	init_logging();
	mount_to_body(App);
}

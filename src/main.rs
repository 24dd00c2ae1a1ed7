//! Browser entry point: mounts the graph editor app.

use graph_editor_canvas::{App, init_logging};

fn main() {
	init_logging();
	leptos::mount::mount_to_body(App);
}

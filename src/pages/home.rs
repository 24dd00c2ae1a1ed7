use leptos::prelude::*;

use crate::components::graph_editor::GraphEditorCanvas;

/// Full-window editor with a short usage legend.
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<div class="fullscreen-graph">
			<GraphEditorCanvas fullscreen=true />
			<div class="graph-overlay">
				<h1>"Graph Editor"</h1>
				<dl class="subtitle">
					<dt>"Left click"</dt><dd>"place a node"</dd>
					<dt>"Left drag"</dt><dd>"move a node"</dd>
					<dt>"Right drag"</dt><dd>"connect or disconnect two nodes"</dd>
					<dt>"Right click"</dt><dd>"delete a node and its edges"</dd>
				</dl>
			</div>
		</div>
	}
}

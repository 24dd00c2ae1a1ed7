//! Point-and-line graph editor drawn on a canvas.
//!
//! Left button places and drags nodes, right button draws, erases and
//! deletes. The graph lives only in memory for the session.

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use log::{Level, info};

mod components;
mod pages;

use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

/// Routes console logging and panics to the browser devtools.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("graph editor starting");
}

/// Root component: the editor at `/`, a fallback page elsewhere.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Title text="Graph Editor" />
		<Meta name="description" content="Place nodes and connect them with the mouse." />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
			</Routes>
		</Router>
	}
}

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, info};
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::error::EditorError;
use super::geometry::Position;
use super::render;
use super::state::{EditorConfig, EditorState, PointerEvent};
use super::types::PointerButton;

/// Editor state bound to the context it paints into.
struct Session {
	state: EditorState,
	ctx: CanvasRenderingContext2d,
}

impl Session {
	fn dispatch(&mut self, event: PointerEvent) {
		self.state.handle(event);
		render::render(&self.state, &self.ctx);
	}

	fn resize(&mut self, width: f64, height: f64) {
		render::resize_and_render(&mut self.state, &self.ctx, width, height);
	}
}

/// A window event listener that unregisters itself when dropped.
struct WindowListener {
	event: &'static str,
	callback: Closure<dyn FnMut()>,
}

impl WindowListener {
	fn new(window: &Window, event: &'static str, f: impl FnMut() + 'static) -> Self {
		let callback = Closure::<dyn FnMut()>::new(f);
		let _ = window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
		Self { event, callback }
	}
}

impl Drop for WindowListener {
	fn drop(&mut self) {
		if let Some(window) = web_sys::window() {
			let _ = window
				.remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
		}
	}
}

type SharedSession = Rc<RefCell<Option<Session>>>;
type SharedListener = Rc<RefCell<Option<WindowListener>>>;

fn viewport_size(window: &Window) -> Result<(f64, f64), EditorError> {
	let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64());
	dim(window.inner_width())
		.zip(dim(window.inner_height()))
		.ok_or(EditorError::NoWindow)
}

fn check_capabilities() -> Result<(), EditorError> {
	let probe = js_sys::Array::new();
	match js_sys::Reflect::has(&probe, &JsValue::from_str("find")) {
		Ok(true) => Ok(()),
		_ => Err(EditorError::Unsupported("Array.prototype.find")),
	}
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, EditorError> {
	canvas
		.get_context("2d")
		.ok()
		.flatten()
		.and_then(|ctx| ctx.dyn_into().ok())
		.ok_or(EditorError::ContextUnavailable)
}

fn attach(
	canvas: &HtmlCanvasElement,
	config: EditorConfig,
	fullscreen: bool,
	size: (Option<f64>, Option<f64>),
	session: &SharedSession,
	resize_listener: &SharedListener,
) -> Result<(), EditorError> {
	check_capabilities()?;
	let window = web_sys::window().ok_or(EditorError::NoWindow)?;

	let (w, h) = if fullscreen {
		viewport_size(&window)?
	} else {
		let parent = canvas.parent_element();
		(
			size.0.unwrap_or_else(|| {
				parent.as_ref().map(|p| p.client_width() as f64).unwrap_or(800.0)
			}),
			size.1.unwrap_or_else(|| {
				parent.as_ref().map(|p| p.client_height() as f64).unwrap_or(600.0)
			}),
		)
	};
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);

	let ctx = context_2d(canvas)?;
	let state = EditorState::new(config, w, h);
	render::render(&state, &ctx);
	*session.borrow_mut() = Some(Session { state, ctx });
	info!("graph editor attached at {}x{}", w, h);

	if fullscreen {
		let (session_resize, canvas_resize) = (session.clone(), canvas.clone());
		let listener = WindowListener::new(&window, "resize", move || {
			let Some(Ok((nw, nh))) = web_sys::window().map(|win| viewport_size(&win)) else {
				return;
			};
			// Resizing wipes the canvas; the session repaints from the store.
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut s) = *session_resize.borrow_mut() {
				s.resize(nw, nh);
			}
		});
		*resize_listener.borrow_mut() = Some(listener);
	}
	Ok(())
}

fn pointer_position(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<Position> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some(Position::new(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

#[component]
pub fn GraphEditorCanvas(
	#[prop(default = EditorConfig::default())] config: EditorConfig,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let session: SharedSession = Rc::new(RefCell::new(None));
	let resize_listener: SharedListener = Rc::new(RefCell::new(None));
	let (session_init, listener_init) = (session.clone(), resize_listener.clone());

	let listener_cleanup = SendWrapper::new(resize_listener);
	on_cleanup(move || {
		RefCell::borrow_mut(&listener_cleanup).take();
	});

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if session_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let size = (width, height);
		if let Err(err) = attach(&canvas, config.clone(), fullscreen, size, &session_init, &listener_init) {
			error!("graph editor failed to start: {}", err);
			if let Some(window) = web_sys::window() {
				let _ = window.alert_with_message(&err.notice());
			}
		}
	});

	let session_md = session.clone();
	let on_mousedown = move |ev: MouseEvent| {
		ev.prevent_default();
		let Some(button) = PointerButton::from_code(ev.button()) else {
			return;
		};
		let Some(pos) = pointer_position(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *session_md.borrow_mut() {
			s.dispatch(PointerEvent::Down { pos, button });
		}
	};

	let session_mm = session.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(pos) = pointer_position(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *session_mm.borrow_mut() {
			s.dispatch(PointerEvent::Move { pos });
		}
	};

	let session_mu = session.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut s) = *session_mu.borrow_mut() {
			s.dispatch(PointerEvent::Up);
		}
	};

	let session_ml = session.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *session_ml.borrow_mut() {
			s.dispatch(PointerEvent::Leave);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="graph-editor-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:contextmenu=move |ev| ev.prevent_default()
			style="display: block; cursor: crosshair;"
		/>
	}
}

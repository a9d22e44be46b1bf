use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, error};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::frame::FrameSlot;
use super::render;
use super::state::ForceGraphState;
use crate::relations::RelationGraph;

const FRAME_DT: f32 = 0.016;

type SharedState = Rc<RefCell<Option<ForceGraphState>>>;

/// Size the canvas should take: its parent's box, or 800x600 when detached.
fn parent_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
	canvas
		.parent_element()
		.map(|p| (p.client_width() as f64, p.client_height() as f64))
		.filter(|&(w, h)| w > 0.0 && h > 0.0)
		.unwrap_or((800.0, 600.0))
}

fn pointer(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

fn request_frame(frame: &FrameSlot<Closure<dyn FnMut()>>) {
	if let Some(window) = web_sys::window() {
		let _ = frame.with(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()));
	}
}

/// Canvas surface that animates a [`RelationGraph`] with a force simulation.
/// Supports dragging nodes, panning the background and wheel zoom. The
/// simulation is rebuilt whenever `data` changes.
#[component]
pub fn ForceGraphCanvas(#[prop(into)] data: Signal<RelationGraph>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: SharedState = Rc::new(RefCell::new(None));
	let frame_init: FrameSlot<Closure<dyn FnMut()>> = FrameSlot::default();
	let state_init = state.clone();

	Effect::new(move |_| {
		let graph = data.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (w, h) = parent_size(&canvas);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);
		debug!(
			"Seeding force graph: {} nodes, {} edges",
			graph.nodes.len(),
			graph.edges.len()
		);
		*state_init.borrow_mut() = Some(ForceGraphState::new(&graph, w, h));

		if frame_init.is_armed() {
			return;
		}
		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			error!("Canvas 2d context unavailable");
			return;
		};

		let (state_anim, frame_inner) = (state_init.clone(), frame_init.clone());
		frame_init.arm(Closure::new(move || {
			// Unmounted: stop and release the loop with everything it captured.
			if !canvas.is_connected() {
				spawn_local(frame_inner.retire());
				return;
			}
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				let (w, h) = parent_size(&canvas);
				if (w, h) != (s.width, s.height) {
					canvas.set_width(w as u32);
					canvas.set_height(h as u32);
					s.resize(w, h);
				}
				s.tick(FRAME_DT);
				render::render(s, &ctx);
			}
			request_frame(&frame_inner);
		}));
		request_frame(&frame_init);
	});

	let with_state = move |state: SharedState, f: fn(&mut ForceGraphState, f64, f64)| {
		move |ev: MouseEvent| {
			let Some(canvas) = canvas_ref.get() else {
				return;
			};
			let (x, y) = pointer(&canvas, &ev);
			if let Some(ref mut s) = *state.borrow_mut() {
				f(s, x, y);
			}
		}
	};
	let on_mousedown = with_state(state.clone(), |s, x, y| s.press(x, y));
	let on_mousemove = with_state(state.clone(), |s, x, y| s.drag(x, y));
	let on_mouseup = with_state(state.clone(), |s, _, _| s.release());
	let on_mouseleave = with_state(state.clone(), |s, _, _| s.leave());

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let (x, y) = pointer(&canvas, &ev);
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			s.zoom_at(x, y, ev.delta_y() < 0.0);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="force-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: grab;"
		/>
	}
}

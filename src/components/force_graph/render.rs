use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::{ForceGraphState, node_color, node_radius};

const BACKGROUND: &str = "#0b0d17";
const DOT_GAP: f64 = 24.0;

pub fn render(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	draw_dots(state, ctx);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
}

/// Dot grid in screen space that follows panning and zoom.
fn draw_dots(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let gap = DOT_GAP * state.transform.k;
	if gap < 6.0 {
		return;
	}
	ctx.set_fill_style_str("rgba(255, 255, 255, 0.12)");
	let (ox, oy) = (
		state.transform.x.rem_euclid(gap),
		state.transform.y.rem_euclid(gap),
	);
	let mut y = oy;
	while y < state.height {
		let mut x = ox;
		while x < state.width {
			ctx.fill_rect(x, y, 1.0, 1.0);
			x += gap;
		}
		y += gap;
	}
}

fn draw_edges(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let (dash, gap, arrow) = (8.0 / k, 4.0 / k, 8.0 / k);
	let dash_offset = -(state.flow_time * 30.0) % (dash + gap);
	let focus = state.hovered.is_some();

	state.graph.visit_edges(|n1, n2, _| {
		let (x1, y1, x2, y2) = (n1.x() as f64, n1.y() as f64, n2.x() as f64, n2.y() as f64);
		let (dx, dy) = (x2 - x1, y2 - y1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			return;
		}
		let (r1, r2) = (
			node_radius(n1.data.user_data.kind),
			node_radius(n2.data.user_data.kind),
		);

		let lit = state.is_highlighted(n1.index()) && state.is_highlighted(n2.index());
		let alpha = match (focus, lit) {
			(false, _) => 0.6,
			(true, true) => 0.95,
			(true, false) => 0.12,
		};
		let color = format!("rgba(100, 180, 255, {alpha})");

		ctx.set_stroke_style_str(&color);
		ctx.set_line_width(1.5 / k);
		let _ = ctx.set_line_dash(&js_sys::Array::of2(
			&JsValue::from_f64(dash),
			&JsValue::from_f64(gap),
		));
		ctx.set_line_dash_offset(dash_offset);

		let (ux, uy) = (dx / dist, dy / dist);
		ctx.begin_path();
		ctx.move_to(x1 + ux * r1, y1 + uy * r1);
		ctx.line_to(x2 - ux * (r2 + arrow), y2 - uy * (r2 + arrow));
		ctx.stroke();
		let _ = ctx.set_line_dash(&js_sys::Array::new());

		let (tip_x, tip_y) = (x2 - ux * r2, y2 - uy * r2);
		let (back_x, back_y) = (tip_x - ux * arrow, tip_y - uy * arrow);
		let (px, py) = (-uy * arrow * 0.5, ux * arrow * 0.5);
		ctx.set_fill_style_str(&color);
		ctx.begin_path();
		ctx.move_to(tip_x, tip_y);
		ctx.line_to(back_x + px, back_y + py);
		ctx.line_to(back_x - px, back_y - py);
		ctx.close_path();
		ctx.fill();
	});
}

fn draw_nodes(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let focus = state.hovered.is_some();
	ctx.set_font(&format!("{}px sans-serif", 12.0 / k.max(0.5)));
	ctx.set_text_align("center");

	state.graph.visit_nodes(|node| {
		let info = &node.data.user_data;
		let (x, y) = (node.x() as f64, node.y() as f64);
		let radius = node_radius(info.kind);
		let alpha = if !focus || state.is_highlighted(node.index()) {
			1.0
		} else {
			0.3
		};

		ctx.set_global_alpha(alpha);
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(node_color(info.kind));
		ctx.fill();

		if state.hovered == Some(node.index()) {
			ctx.set_stroke_style_str("rgba(255, 255, 255, 0.8)");
			ctx.set_line_width(1.5 / k);
			ctx.begin_path();
			let _ = ctx.arc(x, y, radius + 3.0 / k, 0.0, 2.0 * PI);
			ctx.stroke();
		}

		ctx.set_fill_style_str("rgba(255, 255, 255, 0.9)");
		let _ = ctx.fill_text(&info.label, x, y + radius + 14.0 / k.max(0.5));
		ctx.set_global_alpha(1.0);
	});
}

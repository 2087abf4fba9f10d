use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::DefaultNodeIdx;
use web_sys::CanvasRenderingContext2d;

use super::state::{EDGE_SCALE, ForceGraphState};

pub fn render(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str("#f8f9fb");
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
}

fn draw_edges(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let positions = state.positions();
	let radii = radii(state);
	let font_size = state.options.label_font_size * 0.8;

	for edge in &state.edges {
		let (Some(&(x1, y1)), Some(&(x2, y2))) =
			(positions.get(&edge.source), positions.get(&edge.target))
		else {
			continue;
		};
		let (dx, dy) = (x2 - x1, y2 - y1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			continue;
		}
		let (r1, r2) = (
			radii.get(&edge.source).copied().unwrap_or(0.0),
			radii.get(&edge.target).copied().unwrap_or(0.0),
		);
		let width = edge.width * EDGE_SCALE;
		let arrow_size = 4.0 + width * 2.0;

		ctx.set_global_alpha(edge.color.opacity);
		ctx.set_stroke_style_str(&edge.color.base);
		ctx.set_fill_style_str(&edge.color.base);
		ctx.set_line_width(width);

		let (ux, uy) = (dx / dist, dy / dist);
		ctx.begin_path();
		ctx.move_to(x1 + ux * r1, y1 + uy * r1);
		ctx.line_to(x2 - ux * (r2 + arrow_size), y2 - uy * (r2 + arrow_size));
		ctx.stroke();

		let (tip_x, tip_y) = (x2 - ux * r2, y2 - uy * r2);
		let (back_x, back_y) = (tip_x - ux * arrow_size, tip_y - uy * arrow_size);
		let (px, py) = (-uy * arrow_size * 0.5, ux * arrow_size * 0.5);
		ctx.begin_path();
		ctx.move_to(tip_x, tip_y);
		ctx.line_to(back_x + px, back_y + py);
		ctx.line_to(back_x - px, back_y - py);
		ctx.close_path();
		ctx.fill();

		if font_size > 0.0 && !edge.label.is_empty() {
			ctx.set_fill_style_str("#555555");
			ctx.set_font(&format!("{font_size}px sans-serif"));
			ctx.set_text_align("center");
			let _ = ctx.fill_text(&edge.label, (x1 + x2) / 2.0, (y1 + y2) / 2.0 - 3.0);
			ctx.set_text_align("start");
		}
	}
	ctx.set_global_alpha(1.0);
}

fn radii(state: &ForceGraphState) -> HashMap<DefaultNodeIdx, f64> {
	let mut radii = HashMap::new();
	state.graph.visit_nodes(|node| {
		radii.insert(node.index(), node.data.user_data.radius());
	});
	radii
}

fn draw_nodes(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let (k, font_size) = (state.transform.k, state.options.label_font_size);

	state.graph.visit_nodes(|node| {
		let idx = node.index();
		let info = &node.data.user_data;
		let (x, y, radius) = (node.x() as f64, node.y() as f64, info.radius());
		let (selected, hovered) = (state.is_selected(idx), state.hover == Some(idx));

		ctx.set_global_alpha(info.color.opacity);

		if selected || hovered {
			let glow_radius = radius * 1.8;
			if let Ok(gradient) = ctx.create_radial_gradient(x, y, radius * 0.3, x, y, glow_radius) {
				let _ = gradient.add_color_stop(0.0, "rgba(60, 120, 220, 0.35)");
				let _ = gradient.add_color_stop(1.0, "rgba(60, 120, 220, 0)");
				ctx.begin_path();
				let _ = ctx.arc(x, y, glow_radius, 0.0, 2.0 * PI);
				#[allow(deprecated)]
				ctx.set_fill_style(&gradient);
				ctx.fill();
			}
		}

		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&info.color.base);
		ctx.fill();
		ctx.set_stroke_style_str(if selected { "#2b6cd4" } else { "#ffffff" });
		ctx.set_line_width(if selected { 3.0 / k } else { 2.0 / k });
		ctx.stroke();

		if font_size > 0.0 {
			ctx.set_fill_style_str("#333333");
			ctx.set_font(&format!("{font_size}px sans-serif"));
			ctx.set_text_align("center");
			let _ = ctx.fill_text(&info.label, x, y + radius + font_size + 2.0);
			ctx.set_text_align("start");
		}
	});
	ctx.set_global_alpha(1.0);
}

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{
	CanvasRenderingContext2d, HtmlAnchorElement, HtmlCanvasElement, MouseEvent, WheelEvent, Window,
};

use super::render;
use super::state::{ForceGraphState, HoverChange};
use crate::graph::{Edge, Node, NodeId, OptionsPatch, RenderEngine};

const DRAG_THRESHOLD: f64 = 3.0;

/// Pointer events the canvas reports back to whoever subscribed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GraphEvent {
	/// `None` when the click landed on empty canvas.
	Click(Option<NodeId>),
	HoverNode(NodeId),
	BlurNode,
}

type Listener = Box<dyn FnMut(GraphEvent)>;

/// Shared handle to the canvas simulation. Cloning shares the same engine.
#[derive(Clone, Default)]
pub struct ForceGraphHandle {
	state: Rc<RefCell<Option<ForceGraphState>>>,
	canvas: Rc<RefCell<Option<HtmlCanvasElement>>>,
	listener: Rc<RefCell<Option<Listener>>>,
}

impl ForceGraphHandle {
	pub fn subscribe(&self, listener: impl FnMut(GraphEvent) + 'static) {
		*self.listener.borrow_mut() = Some(Box::new(listener));
	}

	/// Callers must not hold a state borrow: listeners re-enter the engine.
	fn emit(&self, event: GraphEvent) {
		if let Some(listener) = self.listener.borrow_mut().as_mut() {
			listener(event);
		}
	}

	fn with_state(&self, f: impl FnOnce(&mut ForceGraphState)) {
		if let Some(ref mut s) = *self.state.borrow_mut() {
			f(s);
		}
	}
}

impl RenderEngine for ForceGraphHandle {
	fn reload(&mut self, nodes: &[Node], edges: &[Edge]) {
		self.with_state(|s| s.load(nodes, edges));
	}

	fn refresh(&mut self, nodes: &[Node], edges: &[Edge]) {
		self.with_state(|s| s.refresh(nodes, edges));
	}

	fn fit(&mut self) {
		self.with_state(|s| s.fit());
	}

	fn fit_after(&mut self, delay: Duration) {
		let handle = self.clone();
		set_timeout(move || handle.with_state(|s| s.fit()), delay);
	}

	fn move_to(&mut self, scale: f64) {
		self.with_state(|s| s.move_to(scale));
	}

	fn select_nodes(&mut self, ids: &[NodeId]) {
		self.with_state(|s| s.select(ids));
	}

	fn focus(&mut self, node: NodeId, scale: f64, animate: bool) {
		self.with_state(|s| s.focus(node, scale, animate));
	}

	fn set_options(&mut self, patch: &OptionsPatch) {
		self.with_state(|s| {
			let mut options = s.options.clone();
			options.apply(patch);
			s.set_options(options);
		});
	}

	fn export(&mut self, file_name: &str) -> bool {
		let Some(canvas) = self.canvas.borrow().clone() else {
			log::warn!("export requested before the canvas was mounted");
			return false;
		};
		let url = match canvas.to_data_url() {
			Ok(url) => url,
			Err(err) => {
				log::error!("canvas snapshot failed: {err:?}");
				return false;
			}
		};
		let Some(link) = document()
			.create_element("a")
			.ok()
			.and_then(|el| el.dyn_into::<HtmlAnchorElement>().ok())
		else {
			log::error!("could not create the download link");
			return false;
		};
		link.set_download(file_name);
		link.set_href(&url);
		link.click();
		true
	}

	fn has_surface(&self) -> bool {
		self.canvas.borrow().is_some()
	}
}

fn pointer(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

#[component]
pub fn ForceGraphCanvas(
	engine: ForceGraphHandle,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (engine_init, animate_init, resize_cb_init) =
		(engine.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = if fullscreen {
			window_size(&window)
		} else {
			(
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.unwrap_or(600.0)
				}),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			log::error!("2d canvas context unavailable");
			return;
		};
		*engine_init.state.borrow_mut() = Some(ForceGraphState::new(w, h));
		*engine_init.canvas.borrow_mut() = Some(canvas.clone());

		if fullscreen {
			let (engine_resize, canvas_resize) = (engine_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let Some(win) = web_sys::window() else {
					return;
				};
				let (nw, nh) = window_size(&win);
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				engine_resize.with_state(|s| s.resize(nw, nh));
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let last_frame = Rc::new(Cell::new(js_sys::Date::now()));
		let (engine_anim, animate_inner) = (engine_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			let now = js_sys::Date::now();
			let dt = ((now - last_frame.replace(now)) / 1000.0).clamp(0.0, 0.05);
			engine_anim.with_state(|s| {
				s.tick(dt as f32);
				render::render(s, &ctx);
			});
			if let (Some(cb), Some(win)) = (animate_inner.borrow().as_ref(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let engine_md = engine.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = pointer(canvas_ref, &ev) else {
			return;
		};
		engine_md.with_state(|s| {
			if let Some(idx) = s.node_at_position(x, y) {
				s.drag.active = true;
				s.drag.moved = false;
				s.drag.node_idx = Some(idx);
				s.drag.start_x = x;
				s.drag.start_y = y;
				s.graph.visit_nodes(|node| {
					if node.index() == idx {
						s.drag.node_start_x = node.x();
						s.drag.node_start_y = node.y();
					}
				});
			} else {
				s.pan.active = true;
				s.pan.moved = false;
				s.pan.start_x = x;
				s.pan.start_y = y;
				s.pan.transform_start_x = s.transform.x;
				s.pan.transform_start_y = s.transform.y;
			}
		});
	};

	let engine_mm = engine.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = pointer(canvas_ref, &ev) else {
			return;
		};
		let mut change = None;
		engine_mm.with_state(|s| {
			if !s.drag.active {
				let hovered = s.node_at_position(x, y);
				change = s.set_hover(hovered);
			}

			if s.drag.active {
				let (dx, dy) = (x - s.drag.start_x, y - s.drag.start_y);
				s.drag.moved |= dx.hypot(dy) > DRAG_THRESHOLD;
				if let (Some(idx), true) = (s.drag.node_idx, s.drag.moved) {
					let (nx, ny) = (
						s.drag.node_start_x + (dx / s.transform.k) as f32,
						s.drag.node_start_y + (dy / s.transform.k) as f32,
					);
					s.graph.visit_nodes_mut(|node| {
						if node.index() == idx {
							node.data.x = nx;
							node.data.y = ny;
							node.data.is_anchor = true;
						}
					});
				}
			} else if s.pan.active {
				let (dx, dy) = (x - s.pan.start_x, y - s.pan.start_y);
				s.pan.moved |= dx.hypot(dy) > DRAG_THRESHOLD;
				s.transform.x = s.pan.transform_start_x + dx;
				s.transform.y = s.pan.transform_start_y + dy;
			}
		});
		match change {
			Some(HoverChange::Enter(id)) => engine_mm.emit(GraphEvent::HoverNode(id)),
			Some(HoverChange::Leave) => engine_mm.emit(GraphEvent::BlurNode),
			None => {}
		}
	};

	let engine_mu = engine.clone();
	let on_mouseup = move |_: MouseEvent| {
		let mut click = None;
		engine_mu.with_state(|s| {
			if s.drag.active && !s.drag.moved {
				click = Some(s.drag.node_idx.and_then(|idx| s.node_id(idx)));
			} else if s.pan.active && !s.pan.moved {
				click = Some(None);
			}
			s.drag.active = false;
			s.drag.node_idx = None;
			s.pan.active = false;
		});
		if let Some(target) = click {
			engine_mu.emit(GraphEvent::Click(target));
		}
	};

	let engine_ml = engine.clone();
	let on_mouseleave = move |_: MouseEvent| {
		let mut change = None;
		engine_ml.with_state(|s| {
			s.drag.active = false;
			s.drag.node_idx = None;
			s.pan.active = false;
			change = s.set_hover(None);
		});
		if change.is_some() {
			engine_ml.emit(GraphEvent::BlurNode);
		}
	};

	let engine_wh = engine.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = pointer(canvas_ref, &ev) else {
			return;
		};
		let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
		engine_wh.with_state(|s| s.zoom_at(x, y, factor));
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

fn window_size(window: &Window) -> (f64, f64) {
	(
		window
			.inner_width()
			.ok()
			.and_then(|w| w.as_f64())
			.unwrap_or(800.0),
		window
			.inner_height()
			.ok()
			.and_then(|h| h.as_f64())
			.unwrap_or(600.0),
	)
}

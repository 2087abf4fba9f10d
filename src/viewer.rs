//! Glue between the controller, the canvas engine and the reactive UI.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;

use crate::components::force_graph::{ForceGraphHandle, GraphEvent};
use crate::graph::{
	GraphController, GraphSummary, NodeSummary, RenderEngine, UiEvent, ViewState, ViewerConfig,
	dispatch,
};

/// Reactive copies of the controller state the page displays.
#[derive(Clone, Copy)]
pub struct ViewerSignals {
	pub status: RwSignal<String>,
	pub loading: RwSignal<bool>,
	pub summary: RwSignal<GraphSummary>,
	pub inspected: RwSignal<Option<NodeSummary>>,
}

#[derive(Clone)]
pub struct Viewer {
	controller: Rc<RefCell<GraphController>>,
	engine: ForceGraphHandle,
	pub signals: ViewerSignals,
}

impl Viewer {
	pub fn new(controller: GraphController) -> Self {
		let signals = ViewerSignals {
			status: RwSignal::new(controller.status().to_string()),
			loading: RwSignal::new(controller.is_loading()),
			summary: RwSignal::new(controller.summary()),
			inspected: RwSignal::new(controller.inspected().cloned()),
		};
		let viewer = Self {
			controller: Rc::new(RefCell::new(controller)),
			engine: ForceGraphHandle::default(),
			signals,
		};

		let events = viewer.clone();
		viewer.engine.subscribe(move |event| {
			events.emit(match event {
				GraphEvent::Click(target) => UiEvent::NodeClicked(target),
				GraphEvent::HoverNode(id) => UiEvent::NodeHovered(id),
				GraphEvent::BlurNode => UiEvent::NodeBlurred,
			})
		});
		viewer
	}

	pub fn engine(&self) -> ForceGraphHandle {
		self.engine.clone()
	}

	pub fn config(&self) -> ViewerConfig {
		self.controller.borrow().config().clone()
	}

	pub fn sources(&self) -> Vec<String> {
		self.controller.borrow().sources()
	}

	/// The loaded source, or the configured default before the first load.
	pub fn source(&self) -> String {
		let controller = self.controller.borrow();
		match controller.source() {
			Some(key) => key.to_string(),
			None => controller.config().default_source.clone(),
		}
	}

	pub fn view_state(&self) -> ViewState {
		self.controller.borrow().view().clone()
	}

	/// Shows the loading indicator, then loads on the next tick so it gets painted.
	pub fn load(&self, source: String) {
		self.signals.loading.set(true);
		let viewer = self.clone();
		set_timeout(move || viewer.emit(UiEvent::Load(source)), Duration::ZERO);
	}

	pub fn emit(&self, event: UiEvent) {
		let mut pending = VecDeque::from([event]);
		while let Some(event) = pending.pop_front() {
			let event = match event {
				UiEvent::Export { .. } => UiEvent::Export {
					surface_present: self.engine.has_surface(),
				},
				other => other,
			};
			let commands = self.controller.borrow_mut().handle(event);

			let controller = self.controller.borrow();
			pending.extend(dispatch(&mut self.engine.clone(), &controller, commands));
		}
		self.sync(&self.controller.borrow());
	}

	fn sync(&self, controller: &GraphController) {
		let signals = self.signals;
		signals.status.set(controller.status().to_string());
		signals.loading.set(controller.is_loading());
		signals.summary.set(controller.summary());
		signals.inspected.set(controller.inspected().cloned());
	}
}

use std::time::Duration;

use super::controller::{GraphController, UiEvent};
use super::layout::OptionsPatch;
use super::types::{Edge, Node, NodeId};

/// A request from the controller to the rendering engine.
#[derive(Clone, Debug, PartialEq)]
pub enum EngineCommand {
	/// The node and edge sets changed; rebuild the simulation.
	Reload,
	/// Sizes, widths or colors changed in place.
	Refresh,
	Fit,
	FitAfter(Duration),
	MoveTo { scale: f64 },
	SelectNodes(Vec<NodeId>),
	Focus { node: NodeId, scale: f64, animate: bool },
	SetOptions(OptionsPatch),
	Export { file_name: String },
}

/// What the controller needs from whatever draws the graph.
pub trait RenderEngine {
	fn reload(&mut self, nodes: &[Node], edges: &[Edge]);
	fn refresh(&mut self, nodes: &[Node], edges: &[Edge]);
	fn fit(&mut self);
	fn fit_after(&mut self, delay: Duration);
	fn move_to(&mut self, scale: f64);
	fn select_nodes(&mut self, ids: &[NodeId]);
	fn focus(&mut self, node: NodeId, scale: f64, animate: bool);
	fn set_options(&mut self, patch: &OptionsPatch);
	/// Returns false when there is nothing to snapshot.
	fn export(&mut self, file_name: &str) -> bool;
	fn has_surface(&self) -> bool;
}

/// Runs `commands` in order. Returns the events the engine reports back.
pub fn dispatch<E: RenderEngine + ?Sized>(
	engine: &mut E,
	controller: &GraphController,
	commands: Vec<EngineCommand>,
) -> Vec<UiEvent> {
	let mut reports = Vec::new();
	for command in commands {
		match command {
			EngineCommand::Reload => engine.reload(controller.nodes(), controller.edges()),
			EngineCommand::Refresh => engine.refresh(controller.nodes(), controller.edges()),
			EngineCommand::Fit => engine.fit(),
			EngineCommand::FitAfter(delay) => engine.fit_after(delay),
			EngineCommand::MoveTo { scale } => engine.move_to(scale),
			EngineCommand::SelectNodes(ids) => engine.select_nodes(&ids),
			EngineCommand::Focus {
				node,
				scale,
				animate,
			} => engine.focus(node, scale, animate),
			EngineCommand::SetOptions(patch) => engine.set_options(&patch),
			EngineCommand::Export { file_name } => {
				reports.push(UiEvent::Exported(engine.export(&file_name)));
			}
		}
	}
	reports
}

#[cfg(test)]
pub(crate) mod testing {
	use super::*;

	/// Records every call so tests can assert on what reached the engine.
	#[derive(Default)]
	pub struct RecordingEngine {
		pub surface: bool,
		pub calls: Vec<String>,
		pub node_count: usize,
		pub edge_count: usize,
	}

	impl RenderEngine for RecordingEngine {
		fn reload(&mut self, nodes: &[Node], edges: &[Edge]) {
			self.node_count = nodes.len();
			self.edge_count = edges.len();
			self.calls.push("reload".into());
		}

		fn refresh(&mut self, _: &[Node], _: &[Edge]) {
			self.calls.push("refresh".into());
		}

		fn fit(&mut self) {
			self.calls.push("fit".into());
		}

		fn fit_after(&mut self, delay: Duration) {
			self.calls.push(format!("fit_after {}", delay.as_millis()));
		}

		fn move_to(&mut self, scale: f64) {
			self.calls.push(format!("move_to {scale}"));
		}

		fn select_nodes(&mut self, ids: &[NodeId]) {
			self.calls.push(format!("select {ids:?}"));
		}

		fn focus(&mut self, node: NodeId, scale: f64, animate: bool) {
			self.calls.push(format!("focus {node} {scale} {animate}"));
		}

		fn set_options(&mut self, _: &OptionsPatch) {
			self.calls.push("set_options".into());
		}

		fn export(&mut self, file_name: &str) -> bool {
			self.calls.push(format!("export {file_name}"));
			self.surface
		}

		fn has_surface(&self) -> bool {
			self.surface
		}
	}
}

#[cfg(test)]
mod tests {
	use super::testing::RecordingEngine;
	use super::*;

	#[test]
	fn dispatch_forwards_in_order() {
		let mut controller = GraphController::default();
		let commands = controller.load("medical");
		let mut engine = RecordingEngine::default();
		dispatch(&mut engine, &controller, commands);

		assert_eq!(engine.calls, vec!["reload", "fit_after 1000"]);
		assert_eq!((engine.node_count, engine.edge_count), (10, 10));
	}

	#[test]
	fn dispatch_camera_commands() {
		let controller = GraphController::default();
		let mut engine = RecordingEngine::default();
		dispatch(
			&mut engine,
			&controller,
			vec![
				EngineCommand::Fit,
				EngineCommand::MoveTo { scale: 1.0 },
				EngineCommand::Focus {
					node: 3,
					scale: 1.5,
					animate: true,
				},
			],
		);
		assert_eq!(engine.calls, vec!["fit", "move_to 1", "focus 3 1.5 true"]);
	}

	#[test]
	fn failed_export_keeps_status() {
		let mut controller = GraphController::default();
		controller.load("medical");
		let status = controller.status().to_string();
		let mut engine = RecordingEngine::default();

		let commands = controller.handle(UiEvent::Export {
			surface_present: true,
		});
		let reports = dispatch(&mut engine, &controller, commands);
		assert_eq!(reports, vec![UiEvent::Exported(false)]);
		for report in reports {
			controller.handle(report);
		}
		assert_eq!(controller.status(), status);
		assert_eq!(engine.calls, vec!["export knowledge-graph.png"]);

		engine.surface = true;
		let commands = controller.handle(UiEvent::Export {
			surface_present: true,
		});
		for report in dispatch(&mut engine, &controller, commands) {
			controller.handle(report);
		}
		assert_eq!(controller.status(), "Graph exported as PNG");
	}
}

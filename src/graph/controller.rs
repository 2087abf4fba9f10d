use std::cell::Cell;
use std::rc::Rc;

use log::{debug, error, info, warn};

use super::collection::Collection;
use super::config::ViewerConfig;
use super::datasets::DatasetCatalog;
use super::engine::EngineCommand;
use super::layout::{LayoutAlgorithm, OptionsPatch};
use super::types::{Dataset, Edge, EdgeId, FULL_OPACITY, GraphSummary, Node, NodeId, NodeSummary};

/// User intents coming from the UI shell or the canvas.
#[derive(Clone, Debug, PartialEq)]
pub enum UiEvent {
	Load(String),
	SetNodeSize(f64),
	SetEdgeWidth(f64),
	ToggleLabels(bool),
	Search(String),
	ApplyLayout(String),
	Export { surface_present: bool },
	/// Reported back by the engine once an export ran.
	Exported(bool),
	FitView,
	ResetZoom,
	NodeClicked(Option<NodeId>),
	NodeHovered(NodeId),
	NodeBlurred,
}

/// Ephemeral view state. Survives dataset reloads.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
	pub highlighted: Option<NodeId>,
	pub search_term: String,
	pub layout: LayoutAlgorithm,
	pub node_size: f64,
	/// `None` until the width slider is first moved; dataset widths stand until then.
	pub edge_width: Option<f64>,
	pub labels_visible: bool,
}

/// Raises the loading flag for as long as it lives.
struct LoadingGuard(Rc<Cell<bool>>);

impl LoadingGuard {
	fn acquire(flag: &Rc<Cell<bool>>) -> Self {
		flag.set(true);
		Self(flag.clone())
	}
}

impl Drop for LoadingGuard {
	fn drop(&mut self) {
		self.0.set(false);
	}
}

/// Owns the dataset and view state; turns UI events into state changes and engine commands.
pub struct GraphController {
	config: ViewerConfig,
	catalog: DatasetCatalog,
	nodes: Collection<Node>,
	edges: Collection<Edge>,
	view: ViewState,
	summary: GraphSummary,
	inspected: Option<NodeSummary>,
	source: Option<String>,
	status: String,
	loading: Rc<Cell<bool>>,
}

impl Default for GraphController {
	fn default() -> Self {
		Self::new(ViewerConfig::default(), DatasetCatalog::builtin())
	}
}

impl GraphController {
	pub fn new(config: ViewerConfig, catalog: DatasetCatalog) -> Self {
		let view = ViewState {
			highlighted: None,
			search_term: String::new(),
			layout: LayoutAlgorithm::default(),
			node_size: config.reference_node_size,
			edge_width: None,
			labels_visible: true,
		};
		Self {
			config,
			catalog,
			nodes: Collection::default(),
			edges: Collection::default(),
			view,
			summary: GraphSummary::default(),
			inspected: None,
			source: None,
			status: "Ready, choose a data source".into(),
			loading: Rc::new(Cell::new(false)),
		}
	}

	pub fn config(&self) -> &ViewerConfig {
		&self.config
	}

	pub fn sources(&self) -> Vec<String> {
		self.catalog.keys().map(str::to_string).collect()
	}

	pub fn nodes(&self) -> &[Node] {
		self.nodes.as_slice()
	}

	pub fn edges(&self) -> &[Edge] {
		self.edges.as_slice()
	}

	pub fn node(&self, id: NodeId) -> Option<&Node> {
		self.nodes.get(id)
	}

	pub fn view(&self) -> &ViewState {
		&self.view
	}

	pub fn summary(&self) -> GraphSummary {
		self.summary
	}

	pub fn inspected(&self) -> Option<&NodeSummary> {
		self.inspected.as_ref()
	}

	pub fn source(&self) -> Option<&str> {
		self.source.as_deref()
	}

	pub fn status(&self) -> &str {
		&self.status
	}

	pub fn is_loading(&self) -> bool {
		self.loading.get()
	}

	pub fn handle(&mut self, event: UiEvent) -> Vec<EngineCommand> {
		match event {
			UiEvent::Load(key) => self.load(&key),
			UiEvent::SetNodeSize(size) => self.set_node_size(size),
			UiEvent::SetEdgeWidth(width) => self.set_edge_width(width),
			UiEvent::ToggleLabels(visible) => self.toggle_labels(visible),
			UiEvent::Search(term) => self.search(&term),
			UiEvent::ApplyLayout(key) => self.apply_layout(&key),
			UiEvent::Export { surface_present } => self.export(surface_present),
			UiEvent::Exported(saved) => self.exported(saved),
			UiEvent::FitView => self.fit_view(),
			UiEvent::ResetZoom => self.reset_zoom(),
			UiEvent::NodeClicked(Some(id)) => self.inspect(id),
			UiEvent::NodeClicked(None) => self.dismiss_inspection(),
			UiEvent::NodeHovered(id) => self.highlight(id),
			UiEvent::NodeBlurred => self.reset_highlight(),
		}
	}

	pub fn load(&mut self, source_key: &str) -> Vec<EngineCommand> {
		let _loading = LoadingGuard::acquire(&self.loading);

		let key = if self.catalog.contains(source_key) {
			source_key.to_string()
		} else {
			warn!(
				"unknown data source {source_key:?}, falling back to {}",
				self.config.default_source
			);
			self.config.default_source.clone()
		};
		self.status = format!("Loading {key} data...");

		let dataset = match self.catalog.load(&key) {
			Ok(dataset) => dataset,
			Err(err) => {
				error!("failed to load data: {err:#}");
				self.status = "Failed to load data, please check the data source".into();
				return Vec::new();
			}
		};
		if let Err(err) = self.replace_dataset(dataset) {
			error!("failed to load data: {err:#}");
			self.status = "Failed to load data, please check the data source".into();
			return Vec::new();
		}

		info!(
			"loaded {key}: {} nodes, {} edges, {} communities",
			self.summary.node_count, self.summary.edge_count, self.summary.community_count
		);
		self.status = format!(
			"Loaded {} nodes and {} edges",
			self.summary.node_count, self.summary.edge_count
		);
		self.source = Some(key);
		vec![
			EngineCommand::Reload,
			EngineCommand::FitAfter(self.config.fit_delay),
		]
	}

	fn replace_dataset(&mut self, dataset: Dataset) -> anyhow::Result<()> {
		let mut nodes = Collection::default();
		nodes.replace(dataset.nodes)?;
		let mut edges = Collection::default();
		edges.replace(dataset.edges)?;
		self.nodes = nodes;
		self.edges = edges;

		self.view.highlighted = None;
		self.inspected = None;
		self.resize_nodes();
		if let Some(width) = self.view.edge_width {
			self.edges.update_all(|edge| edge.width = width);
		}
		self.summary = GraphSummary::of(self.nodes.as_slice(), self.edges.as_slice());
		Ok(())
	}

	/// Sizes derive from each node's base size, so repeated calls do not drift.
	pub fn set_node_size(&mut self, size: f64) -> Vec<EngineCommand> {
		self.view.node_size = size;
		self.resize_nodes();
		vec![EngineCommand::Refresh]
	}

	fn resize_nodes(&mut self) {
		let (size, reference, min) = (
			self.view.node_size,
			self.config.reference_node_size,
			self.config.min_node_size,
		);
		self.nodes
			.update_all(|node| node.size = (size + (node.base_size - reference)).max(min));
	}

	pub fn set_edge_width(&mut self, width: f64) -> Vec<EngineCommand> {
		self.view.edge_width = Some(width);
		self.edges.update_all(|edge| edge.width = width);
		vec![EngineCommand::Refresh]
	}

	pub fn toggle_labels(&mut self, visible: bool) -> Vec<EngineCommand> {
		self.view.labels_visible = visible;
		let size = if visible {
			self.config.label_font_size
		} else {
			0.0
		};
		vec![EngineCommand::SetOptions(OptionsPatch {
			label_font_size: Some(size),
			..Default::default()
		})]
	}

	pub fn search(&mut self, term: &str) -> Vec<EngineCommand> {
		if term.is_empty() {
			return Vec::new();
		}
		self.view.search_term = term.to_string();

		let needle = term.to_lowercase();
		let found: Vec<NodeId> = self
			.nodes
			.iter()
			.filter(|node| node.label.to_lowercase().contains(&needle))
			.map(|node| node.id)
			.collect();
		debug!("search {term:?} matched {found:?}");

		let Some(&first) = found.first() else {
			self.status = "No matching nodes found".into();
			return Vec::new();
		};
		self.status = format!("Found {} matching nodes", found.len());
		vec![
			EngineCommand::SelectNodes(found),
			EngineCommand::Focus {
				node: first,
				scale: self.config.focus_scale,
				animate: true,
			},
		]
	}

	/// Distinct neighbors in edge order, and every incident edge.
	pub fn connected(&self, id: NodeId) -> (Vec<NodeId>, Vec<EdgeId>) {
		let mut nodes = Vec::new();
		let mut edges = Vec::new();
		for edge in self.edges.iter().filter(|edge| edge.touches(id)) {
			edges.push(edge.id);
			let other = if edge.from == id { edge.to } else { edge.from };
			if other != id && !nodes.contains(&other) {
				nodes.push(other);
			}
		}
		(nodes, edges)
	}

	pub fn inspect(&mut self, id: NodeId) -> Vec<EngineCommand> {
		let Some(node) = self.node(id) else {
			return Vec::new();
		};
		let (neighbors, _) = self.connected(id);
		let limit = self.config.inspect_limit;
		let summary = NodeSummary {
			id,
			label: node.label.clone(),
			connection_count: neighbors.len(),
			group: node.group,
			neighbors: neighbors
				.iter()
				.take(limit)
				.filter_map(|&other| self.node(other))
				.map(|other| other.label.clone())
				.collect(),
			truncated: neighbors.len() > limit,
		};
		debug!("inspecting node {id}: {} connections", summary.connection_count);
		self.inspected = Some(summary);
		Vec::new()
	}

	pub fn dismiss_inspection(&mut self) -> Vec<EngineCommand> {
		self.inspected = None;
		Vec::new()
	}

	/// Dims everything not adjacent to `id`. Rewrites every color.
	pub fn highlight(&mut self, id: NodeId) -> Vec<EngineCommand> {
		if !self.nodes.contains(id) {
			return Vec::new();
		}
		let (neighbors, incident) = self.connected(id);
		let dim = self.config.dim_opacity;

		self.nodes.update_all(|node| {
			node.color.opacity = if node.id == id || neighbors.contains(&node.id) {
				FULL_OPACITY
			} else {
				dim
			};
		});
		self.edges.update_all(|edge| {
			edge.color.opacity = if incident.contains(&edge.id) {
				FULL_OPACITY
			} else {
				dim
			};
		});
		self.view.highlighted = Some(id);
		vec![EngineCommand::Refresh]
	}

	pub fn reset_highlight(&mut self) -> Vec<EngineCommand> {
		self.nodes
			.update_all(|node| node.color.opacity = FULL_OPACITY);
		self.edges
			.update_all(|edge| edge.color.opacity = FULL_OPACITY);
		if let Some(id) = self.view.highlighted.take() {
			debug!("cleared highlight around node {id}");
		}
		vec![EngineCommand::Refresh]
	}

	/// Unknown keys change nothing, yet the status still reports the key as applied.
	pub fn apply_layout(&mut self, key: &str) -> Vec<EngineCommand> {
		let patch = match LayoutAlgorithm::from_key(key) {
			Some(algorithm) => {
				info!("applying {} layout", algorithm.title());
				self.view.layout = algorithm;
				algorithm.options()
			}
			None => {
				warn!("unknown layout algorithm {key:?}");
				OptionsPatch::default()
			}
		};
		self.status = format!("Applied {key} layout");
		if patch.is_empty() {
			return Vec::new();
		}
		vec![EngineCommand::SetOptions(patch)]
	}

	pub fn export(&mut self, surface_present: bool) -> Vec<EngineCommand> {
		if !surface_present {
			return Vec::new();
		}
		vec![EngineCommand::Export {
			file_name: self.config.export_file_name.clone(),
		}]
	}

	/// The status only reports success once the engine produced the file.
	pub fn exported(&mut self, saved: bool) -> Vec<EngineCommand> {
		if saved {
			info!("exported graph to {}", self.config.export_file_name);
			self.status = "Graph exported as PNG".into();
		} else {
			warn!("export to {} failed", self.config.export_file_name);
		}
		Vec::new()
	}

	pub fn fit_view(&mut self) -> Vec<EngineCommand> {
		vec![EngineCommand::Fit]
	}

	pub fn reset_zoom(&mut self) -> Vec<EngineCommand> {
		vec![EngineCommand::MoveTo { scale: 1.0 }]
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;
	use crate::graph::layout::{LayoutMode, Physics};

	fn star(leaves: u32) -> String {
		let mut nodes = vec![r##"{"id":0,"label":"Hub","color":"#000000","size":30}"##.to_string()];
		let mut edges = Vec::new();
		for i in 1..=leaves {
			nodes.push(format!(
				r##"{{"id":{i},"label":"Leaf {i}","color":"#00ff00","size":20,"group":{}}}"##,
				i % 2
			));
			edges.push(format!(r#"{{"from":0,"to":{i},"label":"has","width":2}}"#));
		}
		format!(
			r#"{{"nodes":[{}],"edges":[{}]}}"#,
			nodes.join(","),
			edges.join(",")
		)
	}

	fn with_source(key: &str, json: &str) -> GraphController {
		let mut catalog = DatasetCatalog::builtin();
		catalog.insert(key, json);
		GraphController::new(ViewerConfig::default(), catalog)
	}

	fn loaded(key: &str) -> GraphController {
		let mut controller = GraphController::default();
		controller.load(key);
		controller
	}

	fn sizes(controller: &GraphController) -> Vec<f64> {
		controller.nodes().iter().map(|node| node.size).collect()
	}

	#[test]
	fn load_medical_counts() {
		let controller = loaded("medical");
		assert_eq!(
			controller.summary(),
			GraphSummary {
				node_count: 10,
				edge_count: 10,
				community_count: 4,
			}
		);
		assert_eq!(controller.status(), "Loaded 10 nodes and 10 edges");
		assert!(!controller.is_loading());
	}

	#[test]
	fn load_tech_counts() {
		let controller = loaded("tech");
		let summary = controller.summary();
		assert_eq!(summary.node_count, controller.nodes().len());
		assert_eq!(summary.edge_count, controller.edges().len());
		assert_eq!(summary.community_count, 4);
		assert_eq!(controller.source(), Some("tech"));
	}

	#[test]
	fn load_emits_reload_then_delayed_fit() {
		let mut controller = GraphController::default();
		assert_eq!(
			controller.load("medical"),
			vec![
				EngineCommand::Reload,
				EngineCommand::FitAfter(controller.config().fit_delay),
			]
		);
	}

	#[test]
	fn builtin_sources_are_listed() {
		assert_eq!(GraphController::default().sources(), vec!["medical", "tech"]);
	}

	#[test]
	fn unknown_source_falls_back_to_default() {
		let controller = loaded("cureus");
		assert_eq!(controller.source(), Some("tech"));
		assert_eq!(controller.node(3).map(|n| n.label.as_str()), Some("FHIR标准"));
	}

	#[test]
	fn reload_replaces_whole_dataset() {
		let mut controller = with_source("star", &star(3));
		controller.load("medical");
		controller.load("star");

		let ids: HashSet<NodeId> = controller.nodes().iter().map(|n| n.id).collect();
		assert_eq!(ids, HashSet::from([0, 1, 2, 3]));
		assert!(controller.nodes().iter().all(|n| n.label == "Hub" || n.label.starts_with("Leaf")));
		assert_eq!(controller.summary().edge_count, 3);
	}

	#[test]
	fn failed_load_keeps_previous_data() {
		let mut controller = with_source("broken", r#"{"nodes": [{"id": 1}"#);
		controller.load("medical");
		let before = controller.nodes().to_vec();

		let commands = controller.load("broken");
		assert!(commands.is_empty());
		assert_eq!(controller.nodes(), before.as_slice());
		assert_eq!(controller.source(), Some("medical"));
		assert_eq!(controller.status(), "Failed to load data, please check the data source");
		assert!(!controller.is_loading());
	}

	#[test]
	fn loading_guard_releases_on_drop() {
		let flag = Rc::new(Cell::new(false));
		{
			let _guard = LoadingGuard::acquire(&flag);
			assert!(flag.get());
		}
		assert!(!flag.get());
	}

	#[test]
	fn node_size_keeps_differential() {
		let mut controller = loaded("medical");
		controller.set_node_size(30.0);
		// base sizes 40 and 20 around the neutral 25
		assert_eq!(controller.node(1).map(|n| n.size), Some(45.0));
		assert_eq!(controller.node(8).map(|n| n.size), Some(25.0));
	}

	#[test]
	fn node_size_is_idempotent() {
		let mut controller = loaded("medical");
		controller.set_node_size(40.0);
		let once = sizes(&controller);
		controller.set_node_size(40.0);
		assert_eq!(sizes(&controller), once);

		controller.set_node_size(25.0);
		let base: Vec<f64> = controller.nodes().iter().map(|n| n.base_size).collect();
		assert_eq!(sizes(&controller), base);
	}

	#[test]
	fn node_size_clamps_at_minimum() {
		let mut controller = loaded("medical");
		controller.set_node_size(1.0);
		assert!(controller.nodes().iter().all(|n| n.size >= 1.0));
	}

	#[test]
	fn sliders_survive_reload() {
		let mut controller = loaded("medical");
		controller.set_node_size(35.0);
		controller.set_edge_width(7.0);
		controller.load("tech");

		assert_eq!(controller.view().node_size, 35.0);
		assert_eq!(controller.node(1).map(|n| n.size), Some(50.0));
		assert!(controller.edges().iter().all(|e| e.width == 7.0));
	}

	#[test]
	fn dataset_widths_stand_until_slider_moves() {
		let controller = loaded("medical");
		let widths: Vec<f64> = controller.edges().iter().map(|e| e.width).collect();
		assert_eq!(widths, vec![4.0, 3.0, 2.0, 3.0, 2.0, 4.0, 3.0, 2.0, 3.0, 2.0]);
	}

	#[test]
	fn toggle_labels_patches_font_size() {
		let mut controller = GraphController::default();
		let hide = controller.toggle_labels(false);
		assert_eq!(
			hide,
			vec![EngineCommand::SetOptions(OptionsPatch {
				label_font_size: Some(0.0),
				..Default::default()
			})]
		);
		let show = controller.toggle_labels(true);
		assert_eq!(
			show,
			vec![EngineCommand::SetOptions(OptionsPatch {
				label_font_size: Some(14.0),
				..Default::default()
			})]
		);
		assert!(controller.view().labels_visible);
	}

	#[test]
	fn empty_search_is_a_no_op() {
		let mut controller = loaded("medical");
		let status = controller.status().to_string();
		assert!(controller.search("").is_empty());
		assert_eq!(controller.status(), status);
		assert_eq!(controller.view().search_term, "");
	}

	#[test]
	fn search_selects_and_focuses_matches() {
		let mut controller = loaded("medical");
		let commands = controller.search("数字");
		assert_eq!(
			commands,
			vec![
				EngineCommand::SelectNodes(vec![7]),
				EngineCommand::Focus {
					node: 7,
					scale: 1.5,
					animate: true,
				},
			]
		);
		assert_eq!(controller.status(), "Found 1 matching nodes");

		let commands = controller.search("医疗");
		let Some(EngineCommand::SelectNodes(ids)) = commands.first() else {
			panic!("expected a selection, got {commands:?}");
		};
		assert_eq!(ids, &vec![1, 3, 4, 6, 7, 8, 10]);
	}

	#[test]
	fn search_ignores_case() {
		let mut controller = loaded("tech");
		let commands = controller.search("fhir");
		assert_eq!(commands.first(), Some(&EngineCommand::SelectNodes(vec![3])));
		let commands = controller.search("Api接口");
		assert_eq!(commands.first(), Some(&EngineCommand::SelectNodes(vec![9])));
	}

	#[test]
	fn search_miss_reports_not_found() {
		let mut controller = loaded("tech");
		assert!(controller.search("quantum").is_empty());
		assert_eq!(controller.status(), "No matching nodes found");
	}

	#[test]
	fn inspect_truncates_neighbor_list() {
		let mut controller = with_source("star", &star(7));
		controller.load("star");
		controller.inspect(0);

		let info = controller.inspected().unwrap();
		assert_eq!(info.connection_count, 7);
		assert_eq!(info.neighbors.len(), 5);
		assert_eq!(info.neighbors[0], "Leaf 1");
		assert!(info.truncated);
		assert_eq!(info.group_label(), "ungrouped");
	}

	#[test]
	fn inspect_small_neighborhood() {
		let mut controller = loaded("medical");
		controller.handle(UiEvent::NodeClicked(Some(7)));

		let info = controller.inspected().unwrap();
		assert_eq!(info.label, "数字医疗");
		assert_eq!(info.connection_count, 3);
		assert_eq!(info.neighbors, vec!["印度医疗系统", "远程医疗", "人工智能"]);
		assert!(!info.truncated);
		assert_eq!(info.group_label(), "4");

		controller.handle(UiEvent::NodeClicked(None));
		assert!(controller.inspected().is_none());
	}

	#[test]
	fn highlight_dims_unrelated() {
		let mut controller = loaded("medical");
		controller.highlight(7);

		let opacity = |id| controller.node(id).map(|n| n.color.opacity);
		assert_eq!(opacity(7), Some(1.0));
		assert_eq!(opacity(1), Some(1.0));
		assert_eq!(opacity(9), Some(1.0));
		assert_eq!(opacity(2), Some(0.3));
		for edge in controller.edges() {
			let expected = if edge.touches(7) { 1.0 } else { 0.3 };
			assert_eq!(edge.color.opacity, expected, "edge {}", edge.id);
		}
		assert_eq!(controller.view().highlighted, Some(7));
	}

	#[test]
	fn reset_restores_full_opacity_after_any_highlights() {
		for key in ["medical", "tech"] {
			let mut controller = loaded(key);
			let original_nodes = controller.nodes().to_vec();
			let original_edges = controller.edges().to_vec();
			let ids: Vec<NodeId> = original_nodes.iter().map(|n| n.id).collect();

			for &id in &ids {
				controller.handle(UiEvent::NodeHovered(id));
			}
			controller.handle(UiEvent::NodeBlurred);

			assert_eq!(controller.nodes(), original_nodes.as_slice());
			assert_eq!(controller.edges(), original_edges.as_slice());
			assert_eq!(controller.view().highlighted, None);
		}
	}

	#[test]
	fn highlight_unknown_node_is_ignored() {
		let mut controller = loaded("medical");
		assert!(controller.highlight(99).is_empty());
		assert!(controller.nodes().iter().all(|n| n.color.opacity == 1.0));
	}

	#[test]
	fn hierarchical_layout_disables_physics() {
		let mut controller = GraphController::default();
		let commands = controller.apply_layout("hierarchical");
		let [EngineCommand::SetOptions(patch)] = commands.as_slice() else {
			panic!("expected one option patch, got {commands:?}");
		};
		assert_eq!(patch.physics, Some(Physics::Disabled));
		assert_eq!(patch.layout, Some(LayoutMode::Hierarchical));
		assert_eq!(controller.view().layout, LayoutAlgorithm::Hierarchical);
		assert_eq!(controller.status(), "Applied hierarchical layout");
	}

	#[test]
	fn unknown_layout_reports_but_changes_nothing() {
		let mut controller = GraphController::default();
		controller.apply_layout("barnesHut");
		assert!(controller.apply_layout("unknown").is_empty());
		assert_eq!(controller.view().layout, LayoutAlgorithm::BarnesHut);
		assert_eq!(controller.status(), "Applied unknown layout");
	}

	#[test]
	fn export_needs_a_surface() {
		let mut controller = loaded("medical");
		let status = controller.status().to_string();
		assert!(controller.export(false).is_empty());
		assert_eq!(controller.status(), status);

		assert_eq!(
			controller.handle(UiEvent::Export {
				surface_present: true
			}),
			vec![EngineCommand::Export {
				file_name: "knowledge-graph.png".into()
			}]
		);
		assert_eq!(controller.status(), status);
	}

	#[test]
	fn export_status_follows_engine_result() {
		let mut controller = loaded("medical");
		let status = controller.status().to_string();

		assert!(controller.handle(UiEvent::Exported(false)).is_empty());
		assert_eq!(controller.status(), status);

		controller.handle(UiEvent::Exported(true));
		assert_eq!(controller.status(), "Graph exported as PNG");
	}

	#[test]
	fn camera_events_delegate() {
		let mut controller = GraphController::default();
		assert_eq!(controller.handle(UiEvent::FitView), vec![EngineCommand::Fit]);
		assert_eq!(
			controller.handle(UiEvent::ResetZoom),
			vec![EngineCommand::MoveTo { scale: 1.0 }]
		);
	}
}

use std::collections::{HashMap, HashSet, VecDeque};
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use crate::graph::{Color, Edge, LayoutMode, Node, NodeId, Physics, Solver, ViewOptions};

/// World-space radius per unit of node size.
pub const NODE_SCALE: f64 = 0.25;
pub const EDGE_SCALE: f64 = 0.5;
pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 10.0;
const FIT_PADDING: f64 = 40.0;
const CAMERA_DURATION: f64 = 0.6;
const LEVEL_SEPARATION: f32 = 150.0;
const NODE_SPACING: f32 = 100.0;

#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub id: NodeId,
	pub label: String,
	pub color: Color,
	pub size: f64,
}

impl NodeInfo {
	fn from_node(node: &Node) -> Self {
		Self {
			id: node.id,
			label: node.label.clone(),
			color: node.color.clone(),
			size: node.size,
		}
	}

	pub fn radius(&self) -> f64 {
		self.size * NODE_SCALE
	}
}

#[derive(Clone, Debug)]
pub struct EdgeInfo {
	pub source: DefaultNodeIdx,
	pub target: DefaultNodeIdx,
	pub label: String,
	pub width: f64,
	pub color: Color,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

impl ViewTransform {
	fn lerp(&self, to: &Self, t: f64) -> Self {
		Self {
			x: self.x + (to.x - self.x) * t,
			y: self.y + (to.y - self.y) * t,
			k: self.k + (to.k - self.k) * t,
		}
	}
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub moved: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub moved: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

#[derive(Clone, Debug)]
pub struct CameraAnimation {
	from: ViewTransform,
	to: ViewTransform,
	elapsed: f64,
}

/// Transitions of the node under the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverChange {
	Enter(NodeId),
	Leave,
}

pub fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

/// Maps a solver configuration onto the simulation's force parameters.
///
/// The simulation has no rest length for springs, so a longer spring length
/// widens the layout through a weaker spring and a stronger charge instead.
pub fn simulation_parameters(physics: &Physics) -> SimulationParameters {
	let (strength, spring_length, spring_constant, central_gravity) = match *physics {
		Physics::Enabled(Solver::ForceAtlas2Based {
			gravitational_constant,
			central_gravity,
			spring_length,
			spring_constant,
		}) => (
			gravitational_constant.abs() * 4.0,
			spring_length,
			spring_constant,
			central_gravity * 10.0,
		),
		Physics::Enabled(Solver::BarnesHut {
			gravitational_constant,
			central_gravity,
			spring_length,
			spring_constant,
		}) => (
			gravitational_constant.abs() * 0.05,
			spring_length,
			spring_constant,
			central_gravity * 0.2,
		),
		Physics::Enabled(Solver::Repulsion {
			central_gravity,
			spring_length,
			spring_constant,
			node_distance,
		}) => (
			node_distance * 0.8,
			spring_length,
			spring_constant,
			central_gravity * 0.2,
		),
		Physics::Disabled => (0.0, 1.0, 0.0, 0.9),
	};
	SimulationParameters {
		force_charge: (strength * spring_length / 100.0) as f32,
		force_spring: (spring_constant * 50.0 / spring_length) as f32,
		force_max: 100.0,
		node_speed: 3000.0,
		damping_factor: (0.9 - central_gravity) as f32,
	}
}

pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hover: Option<DefaultNodeIdx>,
	pub selected: HashSet<DefaultNodeIdx>,
	pub options: ViewOptions,
	pub edges: Vec<EdgeInfo>,
	pub width: f64,
	pub height: f64,
	camera: Option<CameraAnimation>,
	id_to_idx: HashMap<NodeId, DefaultNodeIdx>,
}

impl ForceGraphState {
	pub fn new(width: f64, height: f64) -> Self {
		let options = ViewOptions::default();
		Self {
			graph: ForceGraph::new(simulation_parameters(&options.physics)),
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			hover: None,
			selected: HashSet::new(),
			options,
			edges: Vec::new(),
			width,
			height,
			camera: None,
			id_to_idx: HashMap::new(),
		}
	}

	/// Rebuild the simulation from scratch, seeding new nodes on a circle.
	pub fn load(&mut self, nodes: &[Node], edges: &[Edge]) {
		let seeds: HashMap<NodeId, (f32, f32, bool)> = nodes
			.iter()
			.enumerate()
			.map(|(i, node)| {
				let angle = (i as f64) * 2.0 * PI / nodes.len().max(1) as f64;
				(
					node.id,
					((100.0 * angle.cos()) as f32, (100.0 * angle.sin()) as f32, false),
				)
			})
			.collect();
		self.hover = None;
		self.selected.clear();
		self.build(nodes.iter().map(NodeInfo::from_node).collect(), edges, &seeds);
		self.arrange();
	}

	fn build(
		&mut self,
		nodes: Vec<NodeInfo>,
		edges: &[Edge],
		positions: &HashMap<NodeId, (f32, f32, bool)>,
	) {
		let mut graph = ForceGraph::new(simulation_parameters(&self.options.physics));
		let mut id_to_idx = HashMap::with_capacity(nodes.len());

		for info in nodes {
			let (x, y, is_anchor) = positions.get(&info.id).copied().unwrap_or_default();
			let id = info.id;
			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor,
				user_data: info,
			});
			id_to_idx.insert(id, idx);
		}

		self.edges.clear();
		for edge in edges {
			if let (Some(&src), Some(&tgt)) = (id_to_idx.get(&edge.from), id_to_idx.get(&edge.to)) {
				graph.add_edge(src, tgt, EdgeData::default());
				self.edges.push(EdgeInfo {
					source: src,
					target: tgt,
					label: edge.label.clone(),
					width: edge.width,
					color: edge.color.clone(),
				});
			}
		}

		self.graph = graph;
		self.id_to_idx = id_to_idx;
	}

	/// Push new sizes, widths and colors without disturbing positions.
	pub fn refresh(&mut self, nodes: &[Node], edges: &[Edge]) {
		let known = nodes.len() == self.id_to_idx.len()
			&& nodes.iter().all(|node| self.id_to_idx.contains_key(&node.id));
		if !known || edges.len() != self.edges.len() {
			self.load(nodes, edges);
			return;
		}

		let by_id: HashMap<NodeId, &Node> = nodes.iter().map(|node| (node.id, node)).collect();
		self.graph.visit_nodes_mut(|node| {
			if let Some(fresh) = by_id.get(&node.data.user_data.id) {
				node.data.user_data = NodeInfo::from_node(fresh);
			}
		});
		for (info, edge) in self.edges.iter_mut().zip(edges) {
			info.label = edge.label.clone();
			info.width = edge.width;
			info.color = edge.color.clone();
		}
	}

	pub fn set_options(&mut self, options: ViewOptions) {
		let relayout = options.physics != self.options.physics || options.layout != self.options.layout;
		self.options = options;
		if !relayout {
			return;
		}

		let mut positions = HashMap::new();
		let mut nodes = Vec::new();
		self.graph.visit_nodes(|node| {
			let free = matches!(self.options.layout, LayoutMode::Free);
			positions.insert(
				node.data.user_data.id,
				(node.x(), node.y(), node.data.is_anchor && !free),
			);
			nodes.push(node.data.user_data.clone());
		});
		let edges: Vec<(NodeId, NodeId, EdgeInfo)> = self
			.edges
			.iter()
			.filter_map(|info| {
				let (from, to) = (self.node_id(info.source)?, self.node_id(info.target)?);
				Some((from, to, info.clone()))
			})
			.collect();
		let edges: Vec<Edge> = edges
			.into_iter()
			.enumerate()
			.map(|(i, (from, to, info))| Edge {
				id: i as u32,
				from,
				to,
				label: info.label,
				width: info.width,
				color: info.color,
			})
			.collect();
		let selected: Vec<NodeId> = self
			.selected
			.iter()
			.filter_map(|&idx| self.node_id(idx))
			.collect();

		self.build(nodes, &edges, &positions);
		self.select(&selected);
		self.hover = None;
		self.arrange();
	}

	/// Place and pin nodes when a hierarchical layout is active.
	fn arrange(&mut self) {
		if self.options.layout != LayoutMode::Hierarchical {
			return;
		}
		let levels = self.levels();
		let mut per_level: HashMap<usize, Vec<DefaultNodeIdx>> = HashMap::new();
		let mut order = Vec::new();
		self.graph.visit_nodes(|node| order.push(node.index()));
		for idx in order {
			let level = levels.get(&idx).copied().unwrap_or(0);
			per_level.entry(level).or_default().push(idx);
		}

		let mut placed = HashMap::new();
		for (level, members) in &per_level {
			let span = (members.len() as f32 - 1.0) * NODE_SPACING;
			for (i, &idx) in members.iter().enumerate() {
				let x = i as f32 * NODE_SPACING - span / 2.0;
				placed.insert(idx, (x, *level as f32 * LEVEL_SEPARATION));
			}
		}

		self.graph.visit_nodes_mut(|node| {
			if let Some(&(x, y)) = placed.get(&node.index()) {
				node.data.x = x;
				node.data.y = y;
				node.data.is_anchor = true;
			}
		});
	}

	/// Breadth-first depth along edge direction, starting from nodes without parents.
	fn levels(&self) -> HashMap<DefaultNodeIdx, usize> {
		let mut nodes = Vec::new();
		self.graph.visit_nodes(|node| nodes.push(node.index()));
		let mut children: HashMap<DefaultNodeIdx, Vec<DefaultNodeIdx>> = HashMap::new();
		let mut has_parent = HashSet::new();
		for edge in &self.edges {
			children.entry(edge.source).or_default().push(edge.target);
			has_parent.insert(edge.target);
		}

		let mut roots: Vec<DefaultNodeIdx> = nodes
			.iter()
			.copied()
			.filter(|idx| !has_parent.contains(idx))
			.collect();
		// Pure cycles have no root; start anywhere.
		roots.extend(nodes.iter().copied());

		let mut levels = HashMap::new();
		for root in roots {
			if levels.contains_key(&root) {
				continue;
			}
			let mut queue = VecDeque::from([(root, 0usize)]);
			levels.insert(root, 0);
			while let Some((idx, level)) = queue.pop_front() {
				for &child in children.get(&idx).into_iter().flatten() {
					if !levels.contains_key(&child) {
						levels.insert(child, level + 1);
						queue.push_back((child, level + 1));
					}
				}
			}
		}
		levels
	}

	pub fn node_id(&self, idx: DefaultNodeIdx) -> Option<NodeId> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = Some(node.data.user_data.id);
			}
		});
		found
	}

	fn node_position(&self, id: NodeId) -> Option<(f64, f64)> {
		let idx = *self.id_to_idx.get(&id)?;
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = Some((node.x() as f64, node.y() as f64));
			}
		});
		found
	}

	pub fn positions(&self) -> HashMap<DefaultNodeIdx, (f64, f64)> {
		let mut positions = HashMap::new();
		self.graph.visit_nodes(|node| {
			positions.insert(node.index(), (node.x() as f64, node.y() as f64));
		});
		positions
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			// world-space, so the hit area scales with zoom like the node
			if (dx * dx + dy * dy).sqrt() < node.data.user_data.radius().max(4.0) {
				found = Some(node.index());
			}
		});
		found
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) -> Option<HoverChange> {
		if self.hover == node {
			return None;
		}
		self.hover = node;
		match node {
			Some(idx) => self.node_id(idx).map(HoverChange::Enter),
			None => Some(HoverChange::Leave),
		}
	}

	pub fn select(&mut self, ids: &[NodeId]) {
		self.selected = ids
			.iter()
			.filter_map(|id| self.id_to_idx.get(id).copied())
			.collect();
	}

	pub fn is_selected(&self, idx: DefaultNodeIdx) -> bool {
		self.selected.contains(&idx)
	}

	pub fn fit(&mut self) {
		let mut bounds: Option<(f64, f64, f64, f64)> = None;
		self.graph.visit_nodes(|node| {
			let (x, y, r) = (
				node.x() as f64,
				node.y() as f64,
				node.data.user_data.radius(),
			);
			bounds = Some(match bounds {
				None => (x - r, y - r, x + r, y + r),
				Some((x0, y0, x1, y1)) => (x0.min(x - r), y0.min(y - r), x1.max(x + r), y1.max(y + r)),
			});
		});
		let Some((x0, y0, x1, y1)) = bounds else {
			return;
		};
		let (bw, bh) = (x1 - x0 + 2.0 * FIT_PADDING, y1 - y0 + 2.0 * FIT_PADDING);
		let k = (self.width / bw).min(self.height / bh).clamp(MIN_ZOOM, MAX_ZOOM);
		let (cx, cy) = ((x0 + x1) / 2.0, (y0 + y1) / 2.0);
		self.camera = None;
		self.transform = ViewTransform {
			x: self.width / 2.0 - cx * k,
			y: self.height / 2.0 - cy * k,
			k,
		};
	}

	/// Zoom to `scale` around the center of the canvas.
	pub fn move_to(&mut self, scale: f64) {
		let (gx, gy) = self.screen_to_graph(self.width / 2.0, self.height / 2.0);
		let k = scale.clamp(MIN_ZOOM, MAX_ZOOM);
		self.camera = None;
		self.transform = ViewTransform {
			x: self.width / 2.0 - gx * k,
			y: self.height / 2.0 - gy * k,
			k,
		};
	}

	pub fn focus(&mut self, id: NodeId, scale: f64, animate: bool) {
		let Some((nx, ny)) = self.node_position(id) else {
			return;
		};
		let k = scale.clamp(MIN_ZOOM, MAX_ZOOM);
		let target = ViewTransform {
			x: self.width / 2.0 - nx * k,
			y: self.height / 2.0 - ny * k,
			k,
		};
		if animate {
			self.camera = Some(CameraAnimation {
				from: self.transform,
				to: target,
				elapsed: 0.0,
			});
		} else {
			self.transform = target;
		}
	}

	pub fn zoom_at(&mut self, x: f64, y: f64, factor: f64) {
		self.camera = None;
		let new_k = (self.transform.k * factor).clamp(MIN_ZOOM, MAX_ZOOM);
		let ratio = new_k / self.transform.k;
		self.transform.x = x - (x - self.transform.x) * ratio;
		self.transform.y = y - (y - self.transform.y) * ratio;
		self.transform.k = new_k;
	}

	pub fn tick(&mut self, dt: f32) {
		if matches!(self.options.physics, Physics::Enabled(_)) {
			self.graph.update(dt);
		}

		if let Some(camera) = &mut self.camera {
			camera.elapsed += dt as f64;
			let t = (camera.elapsed / CAMERA_DURATION).min(1.0);
			self.transform = camera.from.lerp(&camera.to, ease_out_cubic(t));
			if t >= 1.0 {
				self.camera = None;
			}
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

use std::collections::HashSet;

use serde::Deserialize;

pub type NodeId = u32;
pub type EdgeId = u32;

pub const FULL_OPACITY: f64 = 1.0;

/// A base color with an opacity override layered on top.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Color {
	pub base: String,
	pub opacity: f64,
}

impl Color {
	pub fn solid(base: impl Into<String>) -> Self {
		Self {
			base: base.into(),
			opacity: FULL_OPACITY,
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	pub id: NodeId,
	pub label: String,
	pub color: Color,
	/// Displayed radius.
	pub size: f64,
	/// Radius as shipped with the dataset; never mutated after load.
	pub base_size: f64,
	pub group: Option<u32>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
	pub id: EdgeId,
	pub from: NodeId,
	pub to: NodeId,
	pub label: String,
	pub width: f64,
	/// Inherited from the `from` node.
	pub color: Color,
}

impl Edge {
	pub fn touches(&self, node: NodeId) -> bool {
		self.from == node || self.to == node
	}
}

#[derive(Clone, Debug, Default)]
pub struct Dataset {
	pub nodes: Vec<Node>,
	pub edges: Vec<Edge>,
}

#[derive(Clone, Debug, Deserialize)]
pub(super) struct RawNode {
	pub(super) id: NodeId,
	pub(super) label: String,
	pub(super) color: String,
	pub(super) size: f64,
	#[serde(default)]
	pub(super) group: Option<u32>,
}

#[derive(Clone, Debug, Deserialize)]
pub(super) struct RawEdge {
	pub(super) from: NodeId,
	pub(super) to: NodeId,
	#[serde(default)]
	pub(super) label: String,
	#[serde(default = "default_edge_width")]
	pub(super) width: f64,
}

fn default_edge_width() -> f64 {
	1.0
}

#[derive(Clone, Debug, Deserialize)]
pub(super) struct RawDataset {
	pub(super) nodes: Vec<RawNode>,
	#[serde(default)]
	pub(super) edges: Vec<RawEdge>,
}

/// Counters shown in the graph info panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GraphSummary {
	pub node_count: usize,
	pub edge_count: usize,
	/// Distinct groups; nodes without a group share one bucket.
	pub community_count: usize,
}

impl GraphSummary {
	pub fn of(nodes: &[Node], edges: &[Edge]) -> Self {
		let groups: HashSet<Option<u32>> = nodes.iter().map(|node| node.group).collect();
		Self {
			node_count: nodes.len(),
			edge_count: edges.len(),
			community_count: groups.len(),
		}
	}
}

/// What the node info panel shows for the clicked node.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeSummary {
	pub id: NodeId,
	pub label: String,
	pub connection_count: usize,
	pub group: Option<u32>,
	pub neighbors: Vec<String>,
	pub truncated: bool,
}

impl NodeSummary {
	pub fn group_label(&self) -> String {
		self.group
			.map(|group| group.to_string())
			.unwrap_or_else(|| "ungrouped".into())
	}
}

use std::collections::HashSet;

use anyhow::{Context, Result, anyhow, bail};

use super::types::{Color, Dataset, Edge, EdgeId, Node, RawDataset};

const MEDICAL: &str = include_str!("../../assets/datasets/medical.json");
const TECH: &str = include_str!("../../assets/datasets/tech.json");

/// The canned datasets the viewer can switch between, keyed by source name.
#[derive(Clone, Debug)]
pub struct DatasetCatalog {
	sources: Vec<(String, String)>,
}

impl Default for DatasetCatalog {
	fn default() -> Self {
		Self::builtin()
	}
}

impl DatasetCatalog {
	pub fn builtin() -> Self {
		Self {
			sources: vec![
				("medical".into(), MEDICAL.into()),
				("tech".into(), TECH.into()),
			],
		}
	}

	/// Adds a source, or replaces the JSON of an existing one.
	#[cfg(test)]
	pub fn insert(&mut self, key: impl Into<String>, json: impl Into<String>) {
		let (key, json) = (key.into(), json.into());
		match self.sources.iter_mut().find(|(k, _)| *k == key) {
			Some(entry) => entry.1 = json,
			None => self.sources.push((key, json)),
		}
	}

	pub fn contains(&self, key: &str) -> bool {
		self.sources.iter().any(|(k, _)| k == key)
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.sources.iter().map(|(k, _)| k.as_str())
	}

	pub fn load(&self, key: &str) -> Result<Dataset> {
		let (_, json) = self
			.sources
			.iter()
			.find(|(k, _)| k == key)
			.ok_or_else(|| anyhow!("unknown data source {key}"))?;
		decode(json).with_context(|| format!("failed to decode {key} dataset"))
	}
}

/// Parse and validate a dataset: unique node ids, edges only between known nodes.
pub fn decode(json: &str) -> Result<Dataset> {
	let raw: RawDataset = serde_json::from_str(json).context("invalid dataset JSON")?;

	let mut ids = HashSet::with_capacity(raw.nodes.len());
	let mut nodes = Vec::with_capacity(raw.nodes.len());
	for node in raw.nodes {
		if !ids.insert(node.id) {
			bail!("duplicate node id {}", node.id);
		}
		nodes.push(Node {
			id: node.id,
			label: node.label,
			color: Color::solid(node.color),
			size: node.size,
			base_size: node.size,
			group: node.group,
		});
	}

	let mut edges = Vec::with_capacity(raw.edges.len());
	for (i, edge) in raw.edges.into_iter().enumerate() {
		let from = nodes
			.iter()
			.find(|node| node.id == edge.from)
			.ok_or_else(|| anyhow!("edge {} starts at unknown node {}", i + 1, edge.from))?;
		if !ids.contains(&edge.to) {
			bail!("edge {} ends at unknown node {}", i + 1, edge.to);
		}
		edges.push(Edge {
			id: (i + 1) as EdgeId,
			from: edge.from,
			to: edge.to,
			label: edge.label,
			width: edge.width,
			color: Color::solid(from.color.base.clone()),
		});
	}

	Ok(Dataset { nodes, edges })
}

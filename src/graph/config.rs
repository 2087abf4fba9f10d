use std::time::Duration;

/// Tunables for the graph view controller.
#[derive(Clone, Debug)]
pub struct ViewerConfig {
	/// Neutral value of the node-size slider; node sizes are offset from it.
	pub reference_node_size: f64,
	pub min_node_size: f64,
	pub label_font_size: f64,
	pub dim_opacity: f64,
	pub focus_scale: f64,
	/// Delay between a dataset load and the fit, so the first layout pass can settle.
	pub fit_delay: Duration,
	pub inspect_limit: usize,
	pub default_source: String,
	pub export_file_name: String,
	pub edge_width: f64,
}

impl Default for ViewerConfig {
	fn default() -> Self {
		Self {
			reference_node_size: 25.0,
			min_node_size: 1.0,
			label_font_size: 14.0,
			dim_opacity: 0.3,
			focus_scale: 1.5,
			fit_delay: Duration::from_millis(1000),
			inspect_limit: 5,
			default_source: "tech".into(),
			export_file_name: "knowledge-graph.png".into(),
			edge_width: 3.0,
		}
	}
}

use leptos::prelude::*;

use crate::components::controls::ControlPanel;
use crate::components::force_graph::ForceGraphCanvas;
use crate::components::panels::{GraphStats, NodeInfoPanel, StatusBar};
use crate::graph::GraphController;
use crate::viewer::Viewer;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let viewer = Viewer::new(GraphController::default());
	let signals = viewer.signals;

	view! {
		<div class="viewer">
			<header class="viewer-header">
				<h1>"Knowledge Graph Viewer"</h1>
				<GraphStats summary=signals.summary />
			</header>
			<div class="viewer-body">
				<ControlPanel viewer=viewer.clone() />
				<main class="graph-area">
					<ForceGraphCanvas engine=viewer.engine() />
					<NodeInfoPanel inspected=signals.inspected />
				</main>
			</div>
			<StatusBar status=signals.status loading=signals.loading />
		</div>
	}
}

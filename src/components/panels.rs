use leptos::prelude::*;

use crate::graph::{GraphSummary, NodeSummary};

#[component]
pub fn GraphStats(summary: RwSignal<GraphSummary>) -> impl IntoView {
	view! {
		<div class="graph-stats">
			<div>"Nodes: " <span id="nodeCount">{move || summary.get().node_count}</span></div>
			<div>"Edges: " <span id="edgeCount">{move || summary.get().edge_count}</span></div>
			<div>
				"Communities: "
				<span id="communityCount">{move || summary.get().community_count}</span>
			</div>
		</div>
	}
}

/// Details of the clicked node; hidden while nothing is selected.
#[component]
pub fn NodeInfoPanel(inspected: RwSignal<Option<NodeSummary>>) -> impl IntoView {
	view! {
		<Show when=move || inspected.with(Option::is_some)>
			<div id="nodeInfo" class="node-info">
				<h3>"Node details"</h3>
				{move || {
					inspected
						.get()
						.map(|info| {
							let group = info.group_label();
							let more = info.truncated.then_some(view! { <li>"..."</li> });
							let neighbors = info
								.neighbors
								.into_iter()
								.map(|label| view! { <li>{label}</li> })
								.collect_view();
							view! {
								<div id="nodeDetails">
									<p><strong>"Name: "</strong>{info.label}</p>
									<p><strong>"ID: "</strong>{info.id}</p>
									<p><strong>"Connections: "</strong>{info.connection_count}</p>
									<p><strong>"Community: "</strong>{group}</p>
									<p><strong>"Connected nodes:"</strong></p>
									<ul>{neighbors}{more}</ul>
								</div>
							}
						})
				}}
			</div>
		</Show>
	}
}

#[component]
pub fn StatusBar(status: RwSignal<String>, loading: RwSignal<bool>) -> impl IntoView {
	view! {
		<footer class="status-bar">
			<Show when=move || loading.get()>
				<span id="loadingSpinner" class="spinner"></span>
			</Show>
			<span id="statusText">{move || status.get()}</span>
		</footer>
	}
}

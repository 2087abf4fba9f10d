use leptos::ev;
use leptos::prelude::*;

use crate::graph::{LayoutAlgorithm, UiEvent};
use crate::viewer::Viewer;

/// Sidebar with the data, appearance, search and layout controls.
#[component]
pub fn ControlPanel(viewer: Viewer) -> impl IntoView {
	let config = viewer.config();
	let sources = viewer.sources();
	let state = viewer.view_state();

	let source = RwSignal::new(viewer.source());
	let node_size = RwSignal::new(state.node_size);
	let edge_width = RwSignal::new(state.edge_width.unwrap_or(config.edge_width));
	let show_labels = RwSignal::new(state.labels_visible);
	let search_term = RwSignal::new(state.search_term);
	let current_layout = state.layout;
	let layout = RwSignal::new(current_layout.key().to_string());

	let on_load = {
		let viewer = viewer.clone();
		move |_: ev::MouseEvent| viewer.load(source.get_untracked())
	};

	let (viewer_size, viewer_width, viewer_labels) =
		(viewer.clone(), viewer.clone(), viewer.clone());
	let fallback_size = config.reference_node_size;

	let search = {
		let viewer = viewer.clone();
		move || viewer.emit(UiEvent::Search(search_term.get_untracked()))
	};
	let on_search_click = {
		let search = search.clone();
		move |_: ev::MouseEvent| search()
	};
	let on_search_key = move |ev: ev::KeyboardEvent| {
		if ev.key() == "Enter" {
			search();
		}
	};

	let on_fit = {
		let viewer = viewer.clone();
		move |_: ev::MouseEvent| viewer.emit(UiEvent::FitView)
	};
	let on_reset_zoom = {
		let viewer = viewer.clone();
		move |_: ev::MouseEvent| viewer.emit(UiEvent::ResetZoom)
	};
	let on_export = {
		let viewer = viewer.clone();
		move |_: ev::MouseEvent| {
			viewer.emit(UiEvent::Export {
				surface_present: false,
			})
		}
	};
	let on_apply_layout = {
		let viewer = viewer.clone();
		move |_: ev::MouseEvent| viewer.emit(UiEvent::ApplyLayout(layout.get_untracked()))
	};

	view! {
		<aside class="control-panel">
			<section>
				<h2>"Data"</h2>
				<select id="dataSource" on:change=move |ev| source.set(event_target_value(&ev))>
					{sources
						.into_iter()
						.map(|key| {
							let selected = key == source.get_untracked();
							let value = key.clone();
							view! { <option value=value selected=selected>{key}</option> }
						})
						.collect_view()}
				</select>
				<button id="loadData" on:click=on_load>"Load"</button>
			</section>

			<section>
				<h2>"Appearance"</h2>
				<label>
					"Node size "
					<span id="nodeSizeValue">{move || node_size.get().to_string()}</span>
					<input
						id="nodeSize"
						type="range"
						min="10"
						max="60"
						prop:value=move || node_size.get().to_string()
						on:input=move |ev| {
							let size = event_target_value(&ev).parse().unwrap_or(fallback_size);
							node_size.set(size);
							viewer_size.emit(UiEvent::SetNodeSize(size));
						}
					/>
				</label>
				<label>
					"Edge width "
					<span id="edgeWidthValue">{move || edge_width.get().to_string()}</span>
					<input
						id="edgeWidth"
						type="range"
						min="1"
						max="10"
						prop:value=move || edge_width.get().to_string()
						on:input=move |ev| {
							if let Ok(width) = event_target_value(&ev).parse() {
								edge_width.set(width);
								viewer_width.emit(UiEvent::SetEdgeWidth(width));
							}
						}
					/>
				</label>
				<label>
					<input
						id="showLabels"
						type="checkbox"
						prop:checked=move || show_labels.get()
						on:change=move |ev| {
							let visible = event_target_checked(&ev);
							show_labels.set(visible);
							viewer_labels.emit(UiEvent::ToggleLabels(visible));
						}
					/>
					" Show labels"
				</label>
			</section>

			<section>
				<h2>"Search"</h2>
				<input
					id="searchNode"
					type="text"
					placeholder="Node label"
					prop:value=move || search_term.get()
					on:input=move |ev| search_term.set(event_target_value(&ev))
					on:keypress=on_search_key
				/>
				<button id="searchBtn" on:click=on_search_click>"Search"</button>
			</section>

			<section>
				<h2>"View"</h2>
				<button id="fitGraph" on:click=on_fit>"Fit"</button>
				<button id="resetZoom" on:click=on_reset_zoom>"Reset zoom"</button>
				<button id="exportGraph" on:click=on_export>"Export PNG"</button>
			</section>

			<section>
				<h2>"Layout"</h2>
				<select id="layoutAlgorithm" on:change=move |ev| layout.set(event_target_value(&ev))>
					{LayoutAlgorithm::ALL
						.into_iter()
						.map(|algorithm| {
							let selected = algorithm == current_layout;
							view! {
								<option value=algorithm.key() selected=selected>
									{algorithm.title()}
								</option>
							}
						})
						.collect_view()}
				</select>
				<button id="applyLayout" on:click=on_apply_layout>"Apply"</button>
			</section>
		</aside>
	}
}

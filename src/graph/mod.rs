//! Dataset, view state and the controller that maps UI intents onto them.
//!
//! Nothing in here touches the DOM; rendering happens behind `RenderEngine`.

mod collection;
mod config;
mod controller;
mod datasets;
mod engine;
mod layout;
mod types;

pub use config::ViewerConfig;
pub use controller::{GraphController, UiEvent, ViewState};
pub use engine::{RenderEngine, dispatch};
pub use layout::{LayoutAlgorithm, LayoutMode, OptionsPatch, Physics, Solver, ViewOptions};
pub use types::{Color, Edge, GraphSummary, Node, NodeId, NodeSummary};

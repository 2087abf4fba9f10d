/// Layout algorithms the viewer can switch between.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutAlgorithm {
	#[default]
	ForceAtlas2Based,
	BarnesHut,
	Repulsion,
	Hierarchical,
}

impl LayoutAlgorithm {
	pub const ALL: [Self; 4] = [
		Self::ForceAtlas2Based,
		Self::BarnesHut,
		Self::Repulsion,
		Self::Hierarchical,
	];

	pub fn from_key(key: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|algorithm| algorithm.key() == key)
	}

	pub fn key(self) -> &'static str {
		match self {
			Self::ForceAtlas2Based => "forceAtlas2Based",
			Self::BarnesHut => "barnesHut",
			Self::Repulsion => "repulsion",
			Self::Hierarchical => "hierarchical",
		}
	}

	pub fn title(self) -> &'static str {
		match self {
			Self::ForceAtlas2Based => "Force Atlas 2",
			Self::BarnesHut => "Barnes-Hut",
			Self::Repulsion => "Repulsion",
			Self::Hierarchical => "Hierarchical",
		}
	}

	pub fn options(self) -> OptionsPatch {
		let (physics, layout) = match self {
			Self::ForceAtlas2Based => (Physics::Enabled(Solver::FORCE_ATLAS_2), LayoutMode::Free),
			Self::BarnesHut => (Physics::Enabled(Solver::BARNES_HUT), LayoutMode::Free),
			Self::Repulsion => (Physics::Enabled(Solver::REPULSION), LayoutMode::Free),
			Self::Hierarchical => (Physics::Disabled, LayoutMode::Hierarchical),
		};
		OptionsPatch {
			physics: Some(physics),
			layout: Some(layout),
			..Default::default()
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Solver {
	ForceAtlas2Based {
		gravitational_constant: f64,
		central_gravity: f64,
		spring_length: f64,
		spring_constant: f64,
	},
	BarnesHut {
		gravitational_constant: f64,
		central_gravity: f64,
		spring_length: f64,
		spring_constant: f64,
	},
	Repulsion {
		central_gravity: f64,
		spring_length: f64,
		spring_constant: f64,
		node_distance: f64,
	},
}

impl Solver {
	pub const FORCE_ATLAS_2: Self = Self::ForceAtlas2Based {
		gravitational_constant: -26.0,
		central_gravity: 0.005,
		spring_length: 230.0,
		spring_constant: 0.18,
	};
	pub const BARNES_HUT: Self = Self::BarnesHut {
		gravitational_constant: -2000.0,
		central_gravity: 0.3,
		spring_length: 95.0,
		spring_constant: 0.04,
	};
	pub const REPULSION: Self = Self::Repulsion {
		central_gravity: 0.2,
		spring_length: 200.0,
		spring_constant: 0.05,
		node_distance: 100.0,
	};
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Physics {
	Enabled(Solver),
	Disabled,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LayoutMode {
	/// Positions come from the physics simulation.
	Free,
	/// Nodes pinned on levels that follow edge direction, roots at the top.
	Hierarchical,
}

/// Partial view configuration; `None` fields leave the current value alone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OptionsPatch {
	pub physics: Option<Physics>,
	pub layout: Option<LayoutMode>,
	pub label_font_size: Option<f64>,
}

impl OptionsPatch {
	pub fn is_empty(&self) -> bool {
		*self == Self::default()
	}
}

/// Complete view configuration held by the rendering engine.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewOptions {
	pub physics: Physics,
	pub layout: LayoutMode,
	pub label_font_size: f64,
}

impl Default for ViewOptions {
	fn default() -> Self {
		Self {
			physics: Physics::Enabled(Solver::FORCE_ATLAS_2),
			layout: LayoutMode::Free,
			label_font_size: 14.0,
		}
	}
}

impl ViewOptions {
	pub fn apply(&mut self, patch: &OptionsPatch) {
		if let Some(physics) = patch.physics {
			self.physics = physics;
		}
		if let Some(layout) = patch.layout {
			self.layout = layout;
		}
		if let Some(size) = patch.label_font_size {
			self.label_font_size = size;
		}
	}
}
